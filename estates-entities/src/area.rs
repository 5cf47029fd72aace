use std::fmt;

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AreaUnit {
    #[strum(to_string = "m²")]
    SquareMeters,
    #[strum(to_string = "sqft")]
    SquareFeet,
}

/// Living area of a listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub value: f64,
    pub unit: AreaUnit,
}

impl Area {
    pub const fn square_meters(value: f64) -> Self {
        Self {
            value,
            unit: AreaUnit::SquareMeters,
        }
    }

    pub const fn square_feet(value: f64) -> Self {
        Self {
            value,
            unit: AreaUnit::SquareFeet,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
