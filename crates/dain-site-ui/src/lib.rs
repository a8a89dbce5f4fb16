//! DAIN Portfolio UI Components
//!
//! Dioxus components shared by the page sections: icons, buttons, headings
//! and the two animation wrappers.
//!
//! ## Motion
//!
//! - [`Reveal`] plays a one-shot entrance the first time content scrolls
//!   into view.
//! - [`Presence`] gives conditionally rendered content an enter and an exit
//!   animation.
//!
//! Looping decoration is plain CSS driven by
//! [`dain_site_core::Motion`] values; nothing here schedules frames.

pub mod components;
pub mod script;

pub use components::*;
pub use script::scroll_to_top;
