//! Tourguard UI Components
//!
//! Dioxus components for the tourist safety portal.
//!
//! ## Palette
//!
//! - **Signal teal (#14b8a6)**: primary actions, active tabs, focus rings
//! - **Alert amber (#f59e0b)**: emergency-contact fields and warnings
//! - **Danger red (#ef4444)**: inline errors
//! - **Night slate (#0b1220)**: background

pub mod components;

pub use components::*;
