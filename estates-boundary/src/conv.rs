use super::*;
use estates_entities as e;

impl From<PropertyId> for e::id::Id {
    fn from(from: PropertyId) -> Self {
        match from {
            PropertyId::Unsigned(n) => n.to_string().into(),
            PropertyId::Signed(n) => n.to_string().into(),
            PropertyId::Float(n) => n.to_string().into(),
            PropertyId::Text(s) => s.into(),
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(n: f64) -> Option<u32> {
    (n.is_finite() && n >= 0.0).then(|| n.round() as u32)
}

fn position(lat: Option<f64>, lng: Option<f64>) -> Option<e::geo::MapPoint> {
    let (lat, lng) = (lat?, lng?);
    // (0,0) is what a missing geocoding result looks like
    if lat == 0.0 || lng == 0.0 {
        return None;
    }
    e::geo::MapPoint::try_new(lat, lng).ok()
}

impl From<Property> for e::property::Property {
    fn from(from: Property) -> Self {
        let Property {
            id,
            title,
            address,
            city,
            state,
            price,
            bedrooms,
            bathrooms,
            area,
            area_sqft,
            images,
            lat,
            lng,
            latitude,
            longitude,
        } = from;
        let area = area_sqft
            .filter(|v| v.is_finite())
            .map(e::area::Area::square_feet)
            .or_else(|| {
                area.filter(|v| v.is_finite())
                    .map(e::area::Area::square_meters)
            });
        Self {
            id: id.map(Into::into).unwrap_or_default(),
            title: title.unwrap_or_default(),
            address: e::address::Address {
                street: non_empty(address),
                city: non_empty(city),
                state: non_empty(state),
            },
            price: price.unwrap_or_default().into(),
            bedrooms: bedrooms.and_then(count),
            bathrooms: bathrooms.filter(|n| n.is_finite() && *n >= 0.0),
            area,
            images: images
                .unwrap_or_default()
                .into_iter()
                .filter(|url| !url.trim().is_empty())
                .collect(),
            position: position(lat.or(latitude), lng.or(longitude)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estates_entities::{area::Area, geo::MapPoint, property::Feature};

    fn decode(json: &str) -> e::property::Property {
        serde_json::from_str::<Property>(json).unwrap().into()
    }

    #[test]
    fn both_coordinate_spellings() {
        let a = decode(r#"{"lat":40.7,"lng":-74.0}"#);
        let b = decode(r#"{"latitude":40.7,"longitude":-74.0}"#);
        assert_eq!(a.position, Some(MapPoint::new(40.7, -74.0)));
        assert_eq!(a.position, b.position);
    }

    #[test]
    fn short_coordinate_names_win() {
        let p = decode(r#"{"lat":1.5,"lng":2.5,"latitude":3.5,"longitude":4.5}"#);
        assert_eq!(p.position, Some(MapPoint::new(1.5, 2.5)));
    }

    #[test]
    fn missing_or_invalid_coordinates() {
        assert_eq!(decode(r#"{"lat":40.7}"#).position, None);
        assert_eq!(decode(r#"{"latitude":0,"longitude":0}"#).position, None);
        assert_eq!(decode(r#"{"lat":123.0,"lng":10.0}"#).position, None);
        assert_eq!(decode(r#"{"lat":null,"lng":10.0}"#).position, None);
    }

    #[test]
    fn area_units() {
        assert_eq!(decode(r#"{"area":120}"#).area, Some(Area::square_meters(120.0)));
        assert_eq!(
            decode(r#"{"area_sqft":1800}"#).area,
            Some(Area::square_feet(1800.0))
        );
        assert_eq!(
            decode(r#"{"area":120,"area_sqft":1300}"#).area,
            Some(Area::square_feet(1300.0))
        );
    }

    #[test]
    fn defaults_of_an_empty_record() {
        let p = decode("{}");
        assert_eq!(p.id.as_str(), "");
        assert_eq!(p.title, "");
        assert_eq!(p.price.to_string(), "$0");
        assert_eq!(p.address, e::address::Address::default());
        assert!(p.features().is_empty());
        assert_eq!(p.cover_image(), None);
    }

    #[test]
    fn blank_values_are_dropped() {
        let p = decode(r#"{"address":"  ","city":"Boston","images":["", "x.jpg"]}"#);
        assert_eq!(p.address.street, None);
        assert_eq!(p.address.display_line().as_deref(), Some("Boston"));
        assert_eq!(p.cover_image(), Some("x.jpg"));
    }

    #[test]
    fn counts_and_badges() {
        let p = decode(r#"{"bedrooms":3,"bathrooms":2.5,"area":95.5}"#);
        assert_eq!(
            p.features(),
            vec![
                Feature::Bedrooms(3),
                Feature::Bathrooms(2.5),
                Feature::Area(Area::square_meters(95.5))
            ]
        );
        let p = decode(r#"{"bedrooms":-1,"bathrooms":null}"#);
        assert!(p.features().is_empty());
    }

    #[test]
    fn numeric_and_textual_ids() {
        assert_eq!(decode(r#"{"id":12}"#).id.as_str(), "12");
        assert_eq!(decode(r#"{"id":"abc-1"}"#).id.as_str(), "abc-1");
        assert_eq!(decode(r#"{"id":-3}"#).id.as_str(), "-3");
        assert_eq!(decode(r#"{"id":1.5}"#).id.as_str(), "1.5");
    }
}
