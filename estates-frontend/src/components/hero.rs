use leptos::*;
use leptos_router::*;

use estates_frontend_api::PropertyQuery;

use crate::Page;

const SCENE_URL: &str = "https://prod.spline.design/1VHYoewWfi45VYZ5/scene.splinecode";

/// Full-width banner on top of the interactive 3D scene.
#[component]
pub fn Hero(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
      <section class="relative h-[70vh] w-full overflow-hidden">
        <div class="absolute inset-0">
          <spline-viewer url=SCENE_URL class="block w-full h-full"></spline-viewer>
        </div>
        <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent"></div>
        <div class="relative z-10 h-full flex items-center justify-center">
          <div class="max-w-3xl px-6 text-center text-white">
            <h1 class="text-4xl md:text-6xl font-semibold tracking-tight drop-shadow">{ title }</h1>
            <p class="mt-4 text-lg md:text-xl text-white/85">{ subtitle }</p>
            { children.map(|children| children()) }
          </div>
        </div>
      </section>
    }
}

/// Free-text search that continues on the search page.
#[component]
pub fn QuickSearch() -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let navigate = use_navigate();

    let explore = move || {
        let query = PropertyQuery::from_form(&text.get_untracked(), "", "", "");
        let path = if query.is_empty() {
            Page::Home.path().to_string()
        } else {
            format!("{}?{}", Page::Home.path(), query.to_query_string())
        };
        navigate(&path, NavigateOptions::default());
    };
    let explore_on_enter = explore.clone();

    view! {
      <div class="mt-6 bg-white/90 rounded-xl p-3 flex items-center gap-3 shadow-lg">
        <input
          type="search"
          placeholder="Search city, address, or listing ID"
          class="flex-1 bg-transparent outline-none text-gray-800 placeholder:text-gray-500"
          prop:value=move || text.get()
          on:input=move |ev| set_text.set(event_target_value(&ev))
          on:keyup=move |ev| {
            if ev.key() == "Enter" {
              explore_on_enter();
            }
          }
        />
        <button
          class="bg-gray-900 text-white px-4 py-2 rounded-lg"
          on:click=move |_| explore()
        >
          "Explore"
        </button>
      </div>
    }
}
