use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn SignIn() -> Element {
    rsx!(
        Title { "Sign In | EasyRide" }
        Page { heading: "Sign In", class: "text-center",
            p { class: "text-gray-700",
                "You have been signed out."
            }
        }
    )
}
