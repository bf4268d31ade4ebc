use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Bookings() -> Element {
    rsx!(
        Title { "Bookings | EasyRide" }
        Page { heading: "Bookings",
            p { class: "text-gray-700",
                "Rides you have booked appear here."
            }
        }
    )
}

#[component]
pub fn ManageBookings() -> Element {
    rsx!(
        Title { "Manage Bookings | EasyRide" }
        Page { heading: "Manage Bookings",
            p { class: "text-gray-700",
                "Accept or decline bookings made on your rides."
            }
        }
    )
}
