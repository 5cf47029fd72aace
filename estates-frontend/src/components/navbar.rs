use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Home.path()>"Skyline Estates"</A>
          </div>

          // Menu items
          <div class="hidden space-x-6 md:flex">
            <MenuItems />
          </div>

          // Menu icon
          <button
            class="block md:hidden p-2 focus:outline-none"
            aria-label="Toggle menu"
            aria-expanded = move || menu_open.get().to_string()
            on:click = move |_| set_menu_open.update(|s|*s = !*s)
          >
            <svg
              class="h-6 w-6"
              xmlns="http://www.w3.org/2000/svg"
              fill="none"
              viewBox="0 0 24 24"
              stroke-width="1.5"
              stroke="currentColor"
            >
              <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5"
              />
            </svg>
          </button>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              } else {
                "hidden absolute flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              }
            }>
            <MenuItems />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn MenuItems() -> impl IntoView {
    view! {
      <MenuItem page = Page::Home label = "Search" />
      <MenuItem page = Page::Featured label = "Featured" />
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
