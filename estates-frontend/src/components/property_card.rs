use leptos::*;

use estates_entities::property::Property;

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let address_line = property.address.display_line();
    let features = property.features();
    let Property {
        title,
        price,
        images,
        ..
    } = property;
    let cover_image = images.into_iter().next();

    view! {
      <div class="rounded-2xl border border-gray-200 overflow-hidden bg-white shadow-sm hover:shadow-md transition">
        { match cover_image {
            Some(url) => view! {
              <img src=url alt=title.clone() class="h-44 w-full object-cover" />
            }.into_view(),
            None => view! {
              <div class="h-44 w-full bg-gradient-to-br from-gray-200 to-gray-100 flex items-center justify-center text-gray-500">
                "No image"
              </div>
            }.into_view(),
          }
        }
        <div class="p-4">
          <div class="flex items-center justify-between gap-3">
            <h3 class="text-lg font-semibold text-gray-900 line-clamp-1">{ title }</h3>
            <span class="text-xl font-semibold">{ price.to_string() }</span>
          </div>
          { address_line.map(|line| view! {
              <p class="text-sm text-gray-500 mt-1 line-clamp-2">{ line }</p>
            })
          }
          <div class="flex items-center gap-4 text-gray-600 text-sm mt-3">
            { features
                .into_iter()
                .map(|feature| view! { <span>{ feature.to_string() }</span> })
                .collect_view()
            }
          </div>
        </div>
      </div>
    }
}

/// Cards of all properties, in the order they were delivered.
#[component]
pub fn PropertyGrid(
    properties: Signal<Vec<Property>>,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
      <div class=class>
        <For
          // Ids are not guaranteed to be unique or even present
          each=move || properties.get().into_iter().enumerate()
          key=|(index, property)| (*index, property.id.clone())
          children=|(_, property)| view! { <PropertyCard property /> }
        />
      </div>
    }
}
