//! Page components for Tourguard.

mod admin;
mod portal;
mod tourist;

pub use admin::AdminDashboard;
pub use portal::Portal;
pub use tourist::TouristHome;
