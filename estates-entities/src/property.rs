use std::fmt;

use crate::{address::*, area::*, geo::*, id::*, price::*};

/// A read-only listing as it is displayed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Property {
    pub id: Id,
    pub title: String,
    pub address: Address,
    pub price: Price,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub area: Option<Area>,
    pub images: Vec<String>,
    pub position: Option<MapPoint>,
}

/// A single fact shown as a badge on a listing card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feature {
    Bedrooms(u32),
    Bathrooms(f64),
    Area(Area),
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bedrooms(n) => write!(f, "{n} bd"),
            Self::Bathrooms(n) => write!(f, "{n} ba"),
            Self::Area(area) => write!(f, "{area}"),
        }
    }
}

impl Property {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Badges in display order, unknown values are left out.
    pub fn features(&self) -> Vec<Feature> {
        let Self {
            bedrooms,
            bathrooms,
            area,
            ..
        } = self;
        [
            bedrooms.map(Feature::Bedrooms),
            bathrooms.map(Feature::Bathrooms),
            area.map(Feature::Area),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// All listings that can be placed on a map.
pub fn located(properties: &[Property]) -> impl Iterator<Item = (&Property, MapPoint)> {
    properties
        .iter()
        .filter_map(|p| p.position.map(|pos| (p, pos)))
}

/// The bounding box of all listings with a known position.
pub fn bounds(properties: &[Property]) -> Option<MapBbox> {
    MapBbox::from_points(located(properties).map(|(_, pos)| pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn without_images_there_is_no_cover() {
        let p = Property::build().title("Loft").finish();
        assert_eq!(p.cover_image(), None);
        let p = Property::build()
            .images(vec!["a.jpg", "b.jpg"])
            .finish();
        assert_eq!(p.cover_image(), Some("a.jpg"));
    }

    #[test]
    fn missing_bedrooms_are_omitted() {
        let p = Property::build().bathrooms(2.0).finish();
        assert_eq!(p.features(), vec![Feature::Bathrooms(2.0)]);
    }

    #[test]
    fn features_in_display_order() {
        let p = Property::build()
            .bedrooms(3)
            .bathrooms(2.5)
            .area(Area::square_feet(1800.0))
            .finish();
        let labels: Vec<_> = p.features().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["3 bd", "2.5 ba", "1800 sqft"]);
    }

    #[test]
    fn no_features_at_all() {
        assert!(Property::default().features().is_empty());
    }

    #[test]
    fn only_located_properties_are_bounded() {
        let properties = vec![
            Property::build().id("1").pos(MapPoint::new(40.7, -74.0)).finish(),
            Property::build().id("2").finish(),
            Property::build().id("3").pos(MapPoint::new(40.8, -73.9)).finish(),
        ];
        let ids: Vec<_> = located(&properties).map(|(p, _)| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        let bbox = bounds(&properties).unwrap();
        assert_eq!(bbox.sw, MapPoint::new(40.7, -74.0));
        assert_eq!(bbox.ne, MapPoint::new(40.8, -73.9));
    }

    #[test]
    fn no_bounds_without_positions() {
        let properties = vec![Property::build().id("1").finish()];
        assert_eq!(bounds(&properties), None);
        assert_eq!(bounds(&[]), None);
    }
}
