use leptos::{ev, *};

const PHONE: &str = "+1 (555) 234-9876";
const EMAIL: &str = "hello@elevatehomes.com";

#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = |ev: ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("The contact form is not connected to any backend");
    };

    view! {
      <section class="bg-gray-50 border-t border-gray-100">
        <div class="container mx-auto px-6 py-16 grid md:grid-cols-2 gap-10">
          <div>
            <h3 class="text-2xl font-bold text-gray-900">"Work with our property advisors"</h3>
            <p class="text-gray-600 mt-2">
              "We connect discerning buyers and sellers with exceptional real estate opportunities."
            </p>
            <div class="mt-6 space-y-3 text-gray-700">
              <p>{ PHONE }</p>
              <p><a href=format!("mailto:{EMAIL}")>{ EMAIL }</a></p>
            </div>
          </div>
          <form class="bg-white rounded-2xl p-6 shadow space-y-4" on:submit=on_submit>
            <div>
              <label class="text-sm text-gray-600">"Name"</label>
              <input
                class="w-full border border-gray-200 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-gray-900/20"
                placeholder="Your name"
              />
            </div>
            <div>
              <label class="text-sm text-gray-600">"Email"</label>
              <input
                type="email"
                class="w-full border border-gray-200 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-gray-900/20"
                placeholder="you@example.com"
              />
            </div>
            <div>
              <label class="text-sm text-gray-600">"Message"</label>
              <textarea
                class="w-full border border-gray-200 rounded-lg px-3 py-2 h-28 focus:outline-none focus:ring-2 focus:ring-gray-900/20"
                placeholder="Tell us what you're looking for"
              ></textarea>
            </div>
            <button type="submit" class="bg-gray-900 text-white px-4 py-2 rounded-lg">"Send"</button>
          </form>
        </div>
      </section>
    }
}
