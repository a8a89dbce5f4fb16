//! Footer with social links and a back-to-top control.

use dain_site_core::{SocialKind, SocialLink};
use dain_site_ui::{scroll_to_top, Button, ButtonVariant, Icon, IconKind};
use dioxus::prelude::*;

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::Instagram,
        href: "#",
        label: "Instagram",
    },
    SocialLink {
        kind: SocialKind::Linkedin,
        href: "#",
        label: "LinkedIn",
    },
    SocialLink {
        kind: SocialKind::Mail,
        href: "#",
        label: "Mail",
    },
];

pub const COPYRIGHT: &str = "© 2024 DAIN. All Rights Reserved.";

#[component]
pub fn Footer() -> Element {
    let back_to_top = move |_: ()| {
        spawn(async move {
            if let Err(e) = scroll_to_top().await {
                tracing::warn!(error = %e, "Back to top failed");
            }
        });
    };

    rsx! {
        footer { class: "site-footer glass",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    div { class: "footer-logo", "DAIN" }
                    p { class: "footer-tagline",
                        "미래를 디자인하는 AI 트랜스포메이션의 동반자."
                        br {}
                        "실무 중심의 교육으로 당신의 가치를 높입니다."
                    }
                    div { class: "social-links",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                class: "social-link glass",
                                href: "{link.href}",
                                "aria-label": "{link.label}",
                                Icon { kind: IconKind::from(link.kind), size: 20 }
                            }
                        }
                    }
                }

                div { class: "footer-meta",
                    div { class: "copyright", "{COPYRIGHT}" }
                    Button { variant: ButtonVariant::Text, onclick: back_to_top,
                        "Back to Top "
                        Icon { kind: IconKind::Zap, size: 12 }
                    }
                }
            }
        }
    }
}
