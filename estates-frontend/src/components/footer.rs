use leptos::*;
use time::OffsetDateTime;

#[component]
pub fn Footer(brand: &'static str) -> impl IntoView {
    let year = OffsetDateTime::now_utc().year();
    view! {
      <footer class="py-10 text-center text-sm text-gray-500">
        { format!("© {year} {brand}") }
      </footer>
    }
}
