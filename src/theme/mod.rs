//! Theme for Tourguard.

mod styles;

pub use styles::GLOBAL_STYLES;
