//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # estates-entities
//!
//! Reusable, agnostic domain entities for the Skyline Estates listings.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod area;
pub mod geo;
pub mod id;
pub mod price;
pub mod property;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
