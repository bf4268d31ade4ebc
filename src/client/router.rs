use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{Bookings, Dashboard, DriverDashboard, ManageBookings, NotFound, SignIn},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]

    #[layout(AppLayout)]

    #[route("/dashboard")]
    Dashboard {},

    #[route("/bookings")]
    Bookings {},

    #[route("/manage-bookings")]
    ManageBookings {},

    #[route("/driver-dashboard")]
    DriverDashboard {},

    #[end_layout]

    #[route("/signin")]
    SignIn {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
