pub mod bookings;
pub mod dashboard;
pub mod not_found;
pub mod signin;

pub use bookings::{Bookings, ManageBookings};
pub use dashboard::{Dashboard, DriverDashboard};
pub use not_found::NotFound;
pub use signin::SignIn;
