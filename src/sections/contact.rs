//! Contact call-to-action banner.

use dain_site_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

pub const CONTACT_MAILTO: &str = "mailto:dain@example.com";

#[component]
pub fn ContactBanner() -> Element {
    rsx! {
        section { class: "section contact",
            div { class: "contact-card glass",
                div { class: "contact-rule" }
                h2 { class: "contact-title", "Ready to Transform?" }
                p { class: "contact-text",
                    "지금 바로 AI 기술을 실무에 도입하여 혁신적인 성과를 만들어보세요."
                }
                Button {
                    variant: ButtonVariant::Inverse,
                    href: CONTACT_MAILTO.to_string(),
                    "Let's Collaborate"
                }
            }
        }
    }
}
