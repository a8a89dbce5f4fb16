//! DAIN Portfolio Core Library
//!
//! Plain data behind the single-page portfolio: the literal content records,
//! the header menu state machine, animation timing and the model of the
//! decorative 3D background.
//!
//! Nothing here depends on the rendering host. The `dain-site-ui` crate and
//! the `dain-site` binary turn these values into Dioxus elements.
//!
//! ## Quick Start
//!
//! ```
//! use dain_site_core::{MenuEvent, MenuState, NavItem};
//!
//! let state = MenuState::default().apply(MenuEvent::Toggle);
//! assert!(state.is_open());
//!
//! let state = state.apply(MenuEvent::Select(NavItem::Services));
//! assert_eq!(state, MenuState::Closed);
//! assert_eq!(NavItem::Services.href(), "#services");
//! ```

pub mod content;
pub mod error;
pub mod motion;
pub mod nav;
pub mod scene;

// Re-exports
pub use content::{
    strength_number, CareerIcon, CareerItem, ServiceItem, SocialKind, SocialLink, StatBadge,
    StrengthItem,
};
pub use error::{Result, SiteError};
pub use motion::{stagger, DriftLoop, Easing, Motion, Repeat};
pub use nav::{MenuEvent, MenuState, NavItem};
pub use scene::{Camera, FloatingSphere, Light, Scene, ScreenPoint, Star, Starfield, StarfieldParams};
