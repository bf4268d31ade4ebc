use dioxus::prelude::*;

/// Content area rendered below the navbar.
#[component]
pub fn Page(heading: String, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "mx-auto max-w-7xl px-4 py-6 sm:px-6 lg:px-8 {class}",
            h1 { class: "text-2xl font-semibold text-gray-900 mb-4",
                "{heading}"
            }
            {children}
        }
    )
}
