use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { heading: "Page not found",
            p { class: "text-gray-700",
                "Nothing lives at /{path}."
            }
        }
    )
}
