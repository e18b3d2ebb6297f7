//! Page components.

mod home;
mod not_found;
mod week_detail;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use week_detail::WeekDetailPage;
