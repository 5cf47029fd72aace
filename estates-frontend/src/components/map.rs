use leaflet::{LatLng, LatLngBounds};
use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};

use estates_entities::{
    geo::{MapBbox, MapPoint, DEFAULT_CENTER, DEFAULT_ZOOM},
    property::{self, Property},
};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Relative margin around the listings when fitting the viewport.
const BOUNDS_PADDING: f64 = 0.1;
const SINGLE_LISTING_ZOOM: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
struct ListingMarker {
    key: (usize, String),
    pos: MapPoint,
    title: String,
    price: String,
    address: Option<String>,
}

fn listing_markers(properties: &[Property]) -> Vec<ListingMarker> {
    property::located(properties)
        .enumerate()
        .map(|(index, (p, pos))| ListingMarker {
            key: (index, p.id.to_string()),
            pos,
            title: p.title.clone(),
            price: p.price.to_string(),
            address: p.address.display_line(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Viewport {
    Center(MapPoint, f64),
    Fit(MapBbox),
}

/// Where to look at the listings bounded by `bbox`.
fn viewport(bbox: Option<MapBbox>) -> Viewport {
    match bbox {
        Some(bbox) if bbox.is_single_point() => {
            Viewport::Center(bbox.center(), SINGLE_LISTING_ZOOM)
        }
        Some(bbox) => Viewport::Fit(bbox.pad(BOUNDS_PADDING)),
        None => Viewport::Center(DEFAULT_CENTER, DEFAULT_ZOOM),
    }
}

#[component]
pub fn Map(properties: Signal<Vec<Property>>, #[prop(into)] class: String) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    let markers = create_memo(move |_| properties.with(|p| listing_markers(p)));

    // Fit the viewport whenever the map is ready or the listings change
    Effect::new(move |_| {
        let bbox = properties.with(|p| property::bounds(p));
        let Some(map) = map.get() else {
            return;
        };
        match viewport(bbox) {
            Viewport::Center(MapPoint { lat, lng }, zoom) => {
                log::debug!("Center map at {lat},{lng}");
                map.set_view(&LatLng::new(lat, lng), zoom);
            }
            Viewport::Fit(MapBbox { sw, ne }) => {
                log::debug!("Fit map to {sw} - {ne}");
                let bounds =
                    LatLngBounds::new(&LatLng::new(sw.lat, sw.lng), &LatLng::new(ne.lat, ne.lng));
                map.fit_bounds(&bounds);
            }
        }
    });

    let MapPoint { lat, lng } = DEFAULT_CENTER;
    let center = Position::new(lat, lng);

    view! {
      <div class=format!("{class} rounded-2xl overflow-hidden border border-gray-200")>
        <MapContainer
          class="h-full"
          center
          zoom=DEFAULT_ZOOM
          zoom_control=true
          map=map.write_only()
          set_view=true
        >
          <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
          <For
            each=move || markers.get()
            key=|marker| marker.key.clone()
            let:marker
          >
            <Marker position=position!(marker.pos.lat, marker.pos.lng)>
              <Popup>
                <strong>{ marker.title }</strong>
                <br />
                { marker.price }
                { marker.address.map(|address| view! { <br /> { address } }) }
              </Popup>
            </Marker>
          </For>
        </MapContainer>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estates_entities::builders::*;

    #[test]
    fn markers_only_for_located_listings() {
        let properties = vec![
            Property::build()
                .id("1")
                .title("Loft")
                .price(450_000.0)
                .pos(MapPoint::new(40.7, -74.0))
                .finish(),
            Property::build().id("2").finish(),
        ];
        let markers = listing_markers(&properties);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].key, (0, "1".to_string()));
        assert_eq!(markers[0].price, "$450,000");
        assert_eq!(markers[0].address, None);
    }

    #[test]
    fn single_listing_is_centered() {
        let pt = MapPoint::new(40.7, -74.0);
        assert_eq!(
            viewport(MapBbox::from_points(Some(pt))),
            Viewport::Center(pt, SINGLE_LISTING_ZOOM)
        );
    }

    #[test]
    fn listings_are_fitted_with_padding() {
        let bbox = MapBbox::new(MapPoint::new(40.0, -75.0), MapPoint::new(41.0, -74.0));
        assert_eq!(viewport(Some(bbox)), Viewport::Fit(bbox.pad(BOUNDS_PADDING)));
    }

    #[test]
    fn reset_to_default_center_without_listings() {
        assert_eq!(viewport(None), Viewport::Center(DEFAULT_CENTER, DEFAULT_ZOOM));
    }
}
