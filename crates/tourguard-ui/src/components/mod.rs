//! Reusable UI components
//!
//! All components read their colors from the CSS custom properties declared
//! in the app's global stylesheet.

mod button;
mod error_banner;
mod input;
mod tabs;

pub use button::*;
pub use error_banner::*;
pub use input::*;
pub use tabs::*;
