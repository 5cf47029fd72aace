pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, property_builder::*};

pub mod property_builder {

    use super::*;
    use crate::{address::*, area::*, geo::*, property::*};

    #[derive(Debug)]
    pub struct PropertyBuild {
        property: Property,
    }

    impl PropertyBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.property.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.property.title = title.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.property.address = address;
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.property.price = price.into();
            self
        }
        pub fn bedrooms(mut self, n: u32) -> Self {
            self.property.bedrooms = Some(n);
            self
        }
        pub fn bathrooms(mut self, n: f64) -> Self {
            self.property.bathrooms = Some(n);
            self
        }
        pub fn area(mut self, area: Area) -> Self {
            self.property.area = Some(area);
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.property.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.property.position = Some(pos);
            self
        }
        pub fn finish(self) -> Property {
            self.property
        }
    }

    impl Builder for Property {
        type Build = PropertyBuild;
        fn build() -> PropertyBuild {
            PropertyBuild {
                property: Property::default(),
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn build_address() {
        assert_eq!(Address::build().finish(), Address::default());
        let addr = Address::build().city("x").finish();
        assert_eq!(addr.city.as_deref(), Some("x"));
        assert_eq!(addr.street, None);
    }
}
