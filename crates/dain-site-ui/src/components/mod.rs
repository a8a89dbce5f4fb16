//! Reusable UI components
//!
//! Glassy dark-theme building blocks shared by every section:
//! - Orbitron headings, Inter body text
//! - Cyan accents on deep slate

mod button;
mod icon;
mod presence;
mod reveal;
mod section_heading;

pub use button::*;
pub use icon::*;
pub use presence::*;
pub use reveal::*;
pub use section_heading::*;
