pub mod layout;
pub mod navbar;
pub mod page;

pub use layout::AppLayout;
pub use navbar::Navbar;
pub use page::Page;
