use leptos::{ev, *};

use estates_frontend_api::PropertyQuery;

const INPUT_CLASS: &str =
    "w-full rounded-xl border border-gray-200 px-4 py-3 focus:outline-none focus:ring-2 focus:ring-black/20";

fn number_to_input<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn SearchBar(initial_query: PropertyQuery, on_search: Callback<PropertyQuery>) -> impl IntoView {
    let PropertyQuery {
        text,
        min_price,
        max_price,
        bedrooms,
    } = initial_query;

    // -- signals -- //

    let text = RwSignal::new(text.unwrap_or_default());
    let min_price = RwSignal::new(number_to_input(min_price));
    let max_price = RwSignal::new(number_to_input(max_price));
    let bedrooms = RwSignal::new(number_to_input(bedrooms));

    // -- callbacks -- //

    let submit = move || {
        let query = PropertyQuery::from_form(
            &text.get_untracked(),
            &min_price.get_untracked(),
            &max_price.get_untracked(),
            &bedrooms.get_untracked(),
        );
        log::debug!("Search with {query:?}");
        on_search.call(query);
    };

    let on_keyup = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    view! {
      <div class="mx-auto -mt-14 z-10 relative w-full max-w-5xl">
        <div class="rounded-2xl border border-white/10 bg-white/80 backdrop-blur-xl shadow-xl p-4 md:p-6">
          <div class="grid grid-cols-1 md:grid-cols-5 gap-3">
            <input
              class=format!("md:col-span-2 {INPUT_CLASS}")
              placeholder="Search address, area, keywords"
              prop:value=move || text.get()
              on:input=move |ev| text.set(event_target_value(&ev))
              on:keyup=on_keyup
            />
            <input
              type="number"
              min="0"
              class=INPUT_CLASS
              placeholder="Min Price"
              prop:value=move || min_price.get()
              on:input=move |ev| min_price.set(event_target_value(&ev))
              on:keyup=on_keyup
            />
            <input
              type="number"
              min="0"
              class=INPUT_CLASS
              placeholder="Max Price"
              prop:value=move || max_price.get()
              on:input=move |ev| max_price.set(event_target_value(&ev))
              on:keyup=on_keyup
            />
            <input
              type="number"
              min="0"
              class=INPUT_CLASS
              placeholder="Bedrooms"
              prop:value=move || bedrooms.get()
              on:input=move |ev| bedrooms.set(event_target_value(&ev))
              on:keyup=on_keyup
            />
          </div>
          <div class="mt-4 flex justify-end">
            <button
              class="rounded-xl bg-black text-white px-6 py-3 font-medium hover:bg-black/90 transition"
              on:click=move |_| submit()
            >
              "Search"
            </button>
          </div>
        </div>
      </div>
    }
}
