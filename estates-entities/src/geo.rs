use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidMapPoint {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
}

/// A geographical location on a (flat) map in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_new(lat: f64, lng: f64) -> Result<Self, InvalidMapPoint> {
        if !(lat.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)) {
            return Err(InvalidMapPoint::Latitude(lat));
        }
        if !(lng.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)) {
            return Err(InvalidMapPoint::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn is_valid(self) -> bool {
        Self::try_new(self.lat, self.lng).is_ok()
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Where the map is centered before any listing is known.
pub const DEFAULT_CENTER: MapPoint = MapPoint::new(40.7128, -74.0060);
pub const DEFAULT_ZOOM: f64 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    pub sw: MapPoint,
    pub ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// Smallest box that contains all points.
    ///
    /// Returns `None` if there are no points.
    /// Longitudes are not wrapped around the antimeridian.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bbox = points.fold(Self::new(first, first), |mut bbox, pt| {
            bbox.sw.lat = bbox.sw.lat.min(pt.lat);
            bbox.sw.lng = bbox.sw.lng.min(pt.lng);
            bbox.ne.lat = bbox.ne.lat.max(pt.lat);
            bbox.ne.lng = bbox.ne.lng.max(pt.lng);
            bbox
        });
        Some(bbox)
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }

    /// A box that collapsed into a single point has no area to fit into.
    #[allow(clippy::float_cmp)]
    pub fn is_single_point(&self) -> bool {
        self.sw == self.ne
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lng + self.ne.lng) / 2.0,
        )
    }

    /// Extends each side by `ratio` times the span of the box.
    ///
    /// Behaves like `LatLngBounds.pad()` of Leaflet but
    /// stays within the valid coordinate ranges.
    #[must_use]
    pub fn pad(&self, ratio: f64) -> Self {
        debug_assert!(self.is_valid());
        let lat_buffer = (self.ne.lat - self.sw.lat).abs() * ratio;
        let lng_buffer = (self.ne.lng - self.sw.lng).abs() * ratio;
        Self {
            sw: MapPoint::new(
                (self.sw.lat - lat_buffer).max(LAT_DEG_MIN),
                (self.sw.lng - lng_buffer).max(LNG_DEG_MIN),
            ),
            ne: MapPoint::new(
                (self.ne.lat + lat_buffer).min(LAT_DEG_MAX),
                (self.ne.lng + lng_buffer).min(LNG_DEG_MAX),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude() {
        assert!(MapPoint::try_new(90.0, 0.0).is_ok());
        assert!(MapPoint::try_new(-90.0, 0.0).is_ok());
        assert_eq!(
            MapPoint::try_new(90.5, 0.0),
            Err(InvalidMapPoint::Latitude(90.5))
        );
        assert!(MapPoint::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn longitude() {
        assert!(MapPoint::try_new(0.0, 180.0).is_ok());
        assert!(MapPoint::try_new(0.0, -180.0).is_ok());
        assert_eq!(
            MapPoint::try_new(0.0, -180.1),
            Err(InvalidMapPoint::Longitude(-180.1))
        );
        assert!(MapPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn no_bbox_without_points() {
        assert_eq!(MapBbox::from_points(vec![]), None);
    }

    #[test]
    fn bbox_of_single_point() {
        let pt = MapPoint::new(40.7, -74.0);
        let bbox = MapBbox::from_points(Some(pt)).unwrap();
        assert!(bbox.is_single_point());
        assert_eq!(bbox.center(), pt);
        assert_eq!(bbox.pad(0.2), bbox);
    }

    #[test]
    fn bbox_spans_all_points() {
        let points = vec![
            MapPoint::new(40.70, -74.02),
            MapPoint::new(40.80, -73.95),
            MapPoint::new(40.75, -74.10),
        ];
        let bbox = MapBbox::from_points(points).unwrap();
        assert!(bbox.is_valid());
        assert!(!bbox.is_single_point());
        assert_eq!(bbox.sw, MapPoint::new(40.70, -74.10));
        assert_eq!(bbox.ne, MapPoint::new(40.80, -73.95));
    }

    #[test]
    fn pad_bbox() {
        let bbox = MapBbox::new(MapPoint::new(10.0, 20.0), MapPoint::new(20.0, 40.0));
        let padded = bbox.pad(0.5);
        assert_eq!(padded.sw, MapPoint::new(5.0, 10.0));
        assert_eq!(padded.ne, MapPoint::new(25.0, 50.0));
        assert_eq!(padded.center(), bbox.center());
    }

    #[test]
    fn pad_bbox_stays_in_range() {
        let bbox = MapBbox::new(MapPoint::new(-80.0, -170.0), MapPoint::new(80.0, 170.0));
        let padded = bbox.pad(1.0);
        assert!(padded.is_valid());
        assert_eq!(padded.sw, MapPoint::new(-90.0, -180.0));
        assert_eq!(padded.ne, MapPoint::new(90.0, 180.0));
    }
}
