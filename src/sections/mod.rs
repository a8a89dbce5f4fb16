//! Page sections, top to bottom.

mod background;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod services;
mod strengths;

pub use background::Background3D;
pub use contact::ContactBanner;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use services::ServicesSection;
pub use strengths::StrengthsSection;
