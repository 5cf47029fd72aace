use leptos::*;
use leptos_router::*;

use estates_entities::property::Property;
use estates_frontend_api::PublicApi;

use crate::{components::*, Page};

const BRAND: &str = "Elevate Homes";
const LOAD_ERROR_MESSAGE: &str = "Failed to load listings";

#[component]
pub fn Featured(public_api: PublicApi) -> impl IntoView {
    // -- actions -- //

    let fetch_listings = create_action(move |()| async move {
        let result = public_api.featured_properties().await;
        if let Err(err) = &result {
            log::error!("Unable to fetch featured properties: {err}");
        }
        result
    });

    fetch_listings.dispatch(());

    // -- memos -- //

    let properties = create_memo(move |_| {
        fetch_listings.value().with(|result| match result {
            Some(Ok(items)) => items.clone(),
            _ => Vec::<Property>::new(),
        })
    });

    view! {
      <div class="min-h-screen bg-white">
        <Hero
          title="Elevate Your Living"
          subtitle="Discover luxury properties in prime urban locations. Modern design, breathtaking views, and seamless experiences."
        >
          <QuickSearch />
        </Hero>
        <section class="container mx-auto px-6 py-12">
          <div class="flex items-end justify-between mb-6">
            <div>
              <h2 class="text-2xl md:text-3xl font-bold text-gray-900">"Featured Listings"</h2>
              <p class="text-gray-600">"Curated homes with exceptional design and location."</p>
            </div>
            <A href=Page::Home.path() class="text-gray-700 hover:text-gray-900".to_string()>
              "View all"
            </A>
          </div>
          { move || match fetch_listings.value().with(|result| result.as_ref().map(Result::is_ok)) {
              None => view! { <p class="text-gray-500">"Loading..."</p> }.into_view(),
              Some(false) => view! { <p class="text-red-600">{ LOAD_ERROR_MESSAGE }</p> }.into_view(),
              Some(true) => view! {
                <PropertyGrid
                  properties=properties.into()
                  class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6"
                />
              }.into_view(),
            }
          }
          <div class="mt-10">
            <Map properties=properties.into() class="w-full h-[480px]" />
          </div>
        </section>
        <Contact />
        <Footer brand=BRAND />
      </div>
    }
}
