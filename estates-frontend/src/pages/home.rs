use gloo_storage::{SessionStorage, Storage};
use leptos::*;
use leptos_router::*;

use estates_entities::property::Property;
use estates_frontend_api::{initial_query, PropertyQuery, PublicApi, SearchGenerations};

use crate::components::*;

const BRAND: &str = "Skyline Estates";
const SEARCH_STORAGE_KEY: &str = "property-search";

fn stored_query() -> Option<PropertyQuery> {
    SessionStorage::get(SEARCH_STORAGE_KEY)
        .map_err(|err| log::debug!("No previous search restored: {err}"))
        .ok()
}

/// Starts a new request, `None` if the page is gone.
fn start_request(generations: StoredValue<SearchGenerations>) -> Option<u64> {
    generations.try_update_value(SearchGenerations::next)
}

/// A response is only shown while its page still exists
/// and no other search has been submitted in the meantime.
fn is_latest_request(generations: StoredValue<SearchGenerations>, request: u64) -> bool {
    generations
        .try_with_value(|g| g.is_latest(request))
        .unwrap_or(false)
}

#[component]
pub fn Home(public_api: PublicApi) -> impl IntoView {
    // -- signals -- //

    let query_params = use_query_map();
    let initial_query = query_params.with_untracked(|params| {
        initial_query(params.get("q").map(String::as_str), stored_query())
    });
    let properties = RwSignal::new(Vec::<Property>::new());
    let loading = RwSignal::new(false);
    let found = RwSignal::new(None::<usize>);

    // Only the response to the latest request is shown.
    let generations = StoredValue::new(SearchGenerations::default());

    // -- actions -- //

    let search = create_action(move |query: &PropertyQuery| {
        let query = query.clone();
        let request = start_request(generations);
        loading.set(true);
        async move {
            let Some(request) = request else {
                return;
            };
            let result = public_api.search_properties(&query).await;
            if !is_latest_request(generations, request) {
                log::debug!("Drop outdated search response #{request}");
                return;
            }
            match result {
                Ok(items) => {
                    log::debug!("Found {} properties", items.len());
                    found.set(Some(items.len()));
                    properties.set(items);
                }
                Err(err) => {
                    log::error!("Unable to search properties: {err}");
                    found.set(None);
                    properties.set(vec![]);
                }
            }
            loading.set(false);
        }
    });

    // -- callbacks -- //

    let on_search = Callback::new(move |query: PropertyQuery| {
        if let Err(err) = SessionStorage::set(SEARCH_STORAGE_KEY, &query) {
            log::warn!("Unable to remember search: {err}");
        }
        search.dispatch(query);
    });

    // -- init -- //

    search.dispatch(initial_query.clone());

    view! {
      <div class="min-h-screen bg-gradient-to-b from-white to-gray-50 text-gray-900">
        <Hero
          title="Find Your Next Luxury Home"
          subtitle="Explore curated properties across the city with live map previews and immersive visuals."
        />
        <div class="relative z-10 px-6 md:px-10 -mt-10">
          <SearchBar initial_query on_search />
        </div>
        <div class="mx-auto max-w-6xl px-6 md:px-10 py-10 space-y-8">
          <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 order-2 lg:order-1">
              <h2 class="text-xl font-semibold mb-3">"Properties"</h2>
              { move || if loading.get() {
                  view! {
                    <div class="p-10 text-center text-gray-500">"Loading properties..."</div>
                  }.into_view()
                } else {
                  view! {
                    { move || match found.get() {
                        Some(0) => view! {
                          <p class="p-10 text-center text-gray-500">"No properties found"</p>
                        }.into_view(),
                        Some(count) => view! {
                          <p class="mb-3 text-sm text-gray-500">
                            "Found "<span class="font-bold">{ count }</span>" properties"
                          </p>
                        }.into_view(),
                        None => ().into_view(),
                      }
                    }
                    <PropertyGrid
                      properties=properties.into()
                      class="grid grid-cols-1 sm:grid-cols-2 gap-5"
                    />
                  }.into_view()
                }
              }
            </div>
            <div class="order-1 lg:order-2">
              <h2 class="text-xl font-semibold mb-3">"Map"</h2>
              <Map properties=properties.into() class="h-[420px] w-full" />
            </div>
          </div>
        </div>
        <Footer brand=BRAND />
      </div>
    }
}
