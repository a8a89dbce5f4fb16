//! Theme for the DAIN portfolio.

mod styles;

pub use styles::GLOBAL_STYLES;
