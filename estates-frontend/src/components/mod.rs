mod contact;
mod footer;
mod hero;
mod map;
mod navbar;
mod property_card;
mod search_bar;

pub use self::{
    contact::*, footer::*, hero::*, map::*, navbar::*, property_card::*, search_bar::*,
};
