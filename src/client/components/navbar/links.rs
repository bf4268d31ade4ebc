use crate::{client::router::Route, model::user::Role};

/// A navigation entry shown both in the header and in the drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: Route,
}

/// Links available to `role`; only drivers can manage bookings.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home",
            to: Route::Dashboard {},
        },
        NavLink {
            label: "Bookings",
            to: Route::Bookings {},
        },
    ];

    if role == Role::Driver {
        links.push(NavLink {
            label: "Manage Bookings",
            to: Route::ManageBookings {},
        });
    }

    links
}

/// Label of the role switch button, naming the dashboard the user will land on.
pub fn switch_label(role: Role) -> String {
    format!("Switch to {} Dashboard", role.complement().title())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        nav_links(role).iter().map(|link| link.label).collect()
    }

    /// Expect drivers to see the Manage Bookings link
    #[test]
    fn driver_links_include_manage_bookings() {
        assert_eq!(labels(Role::Driver), ["Home", "Bookings", "Manage Bookings"]);

        let manage = nav_links(Role::Driver).pop().unwrap();
        assert_eq!(manage.to.to_string(), "/manage-bookings");
    }

    /// Expect passengers not to see the Manage Bookings link
    #[test]
    fn passenger_links_exclude_manage_bookings() {
        assert_eq!(labels(Role::Passenger), ["Home", "Bookings"]);
        assert!(nav_links(Role::Passenger)
            .iter()
            .all(|link| link.to != Route::ManageBookings {}));
    }

    /// Expect the switch button to name the dashboard of the other role
    #[test]
    fn switch_label_names_other_dashboard() {
        assert_eq!(switch_label(Role::Driver), "Switch to Passenger Dashboard");
        assert_eq!(switch_label(Role::Passenger), "Switch to Driver Dashboard");
    }
}
