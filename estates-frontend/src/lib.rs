use anyhow::anyhow;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use estates_frontend_api as api;

pub mod config;

mod pages;
use pages::*;

mod components;
use components::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let public_api = api::PublicApi::new(config::BACKEND_URL);
    log::debug!("Fetch listings from {}", public_api.url());

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home public_api /> }
            />
            <Route
              path=Page::Featured.path()
              view=move || view! { <Featured public_api /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

pub fn run() -> anyhow::Result<()> {
    let container = document()
        .get_element_by_id("app")
        .ok_or_else(|| anyhow!("Missing app container element"))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| anyhow!("The app container is not an HTML element"))?;
    mount_to(container, || view! { <App /> });
    Ok(())
}
