#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street : Option<String>,
    pub city   : Option<String>,
    pub state  : Option<String>,
}

impl Address {
    /// Single line shown below the title of a listing.
    ///
    /// The street address is preferred over the city.
    /// The state is only appended if a city is known.
    pub fn display_line(&self) -> Option<String> {
        let Self {
            street,
            city,
            state,
        } = self;
        let mut line = street.as_ref().or(city.as_ref())?.clone();
        if let (Some(_), Some(state)) = (city, state) {
            line.push_str(", ");
            line.push_str(state);
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn empty_address_has_no_display_line() {
        assert_eq!(Address::default().display_line(), None);
    }

    #[test]
    fn state_without_city_is_not_displayed() {
        let addr = Address::build().state("NY").finish();
        assert_eq!(addr.display_line(), None);
    }

    #[test]
    fn prefer_street_over_city() {
        let addr = Address::build()
            .street("350 Fifth Avenue")
            .city("New York")
            .finish();
        assert_eq!(addr.display_line().as_deref(), Some("350 Fifth Avenue"));
    }

    #[test]
    fn city_with_state() {
        let addr = Address::build().city("Austin").state("TX").finish();
        assert_eq!(addr.display_line().as_deref(), Some("Austin, TX"));
        let addr = Address::build()
            .street("1 Congress Ave")
            .city("Austin")
            .state("TX")
            .finish();
        assert_eq!(addr.display_line().as_deref(), Some("1 Congress Ave, TX"));
    }
}
