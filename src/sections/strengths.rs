//! "Why Choose Dain?" - the `#strengths` section.
//!
//! Four numbered strengths on the left, two drifting statistic badges on
//! the right.

use std::time::Duration;

use dain_site_core::{stagger, strength_number, DriftLoop, NavItem, StatBadge, StrengthItem};
use dain_site_ui::{Reveal, RevealEffect};
use dioxus::prelude::*;

pub const STRENGTHS: [StrengthItem; 4] = [
    StrengthItem {
        title: "기술의 일상화",
        description: "복잡한 AI 기술을 누구나 바로 쓸 수 있는 실무 언어로 변환하는 능력",
    },
    StrengthItem {
        title: "실전형 커리큘럼",
        description: "이론을 넘어 즉각적인 결과물을 만들어내는 핸즈온(Hands-on) 중심 강의",
    },
    StrengthItem {
        title: "트랜드 분석력",
        description: "급변하는 AI 생태계에서 핵심 도구를 선별하고 적용하는 통찰력",
    },
    StrengthItem {
        title: "솔루션 중심 접근",
        description: "클라이언트의 업무 현장에 즉시 도입 가능한 실용적인 AI 해결책 제시",
    },
];

/// Statistic badges with their drift loops. The periods differ and the
/// second starts late, so the two never move in step.
pub const BADGES: [(StatBadge, DriftLoop, &str); 2] = [
    (
        StatBadge {
            value: "100+",
            label: "Lectures Completed",
        },
        DriftLoop::new(-20, 5, Duration::from_secs(6)),
        "stat-badge badge-top",
    ),
    (
        StatBadge {
            value: "95%",
            label: "Client Satisfaction",
        },
        DriftLoop::new(20, -5, Duration::from_secs(5)).with_delay(Duration::from_secs(1)),
        "stat-badge badge-bottom",
    ),
];

const CASCADE_STEP: Duration = Duration::from_millis(200);

#[component]
pub fn StrengthsSection() -> Element {
    rsx! {
        section { id: NavItem::Strengths.anchor(), class: "section strengths",
            div { class: "bg-grid faint" }
            div { class: "section-inner layered",
                div { class: "strengths-grid",
                    div {
                        h2 { class: "strengths-title",
                            "Why Choose "
                            br {}
                            span { class: "accent", "Dain?" }
                        }
                        div { class: "strength-list",
                            for (i, strength) in STRENGTHS.iter().enumerate() {
                                Reveal {
                                    key: "{i}",
                                    effect: RevealEffect::SlideRight,
                                    delay: stagger(CASCADE_STEP, i),
                                    div { class: "strength-item",
                                        div { class: "strength-number", "{strength_number(i)}" }
                                        div {
                                            h4 { class: "card-title", "{strength.title}" }
                                            p { class: "card-text", "{strength.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "badge-stage",
                        for (badge, drift, class) in BADGES.iter() {
                            div {
                                key: "{badge.label}",
                                class: "{class} glass",
                                style: "{drift.style()}",
                                div { class: "stat-value", "{badge.value}" }
                                div { class: "stat-label", "{badge.label}" }
                            }
                        }
                        div { class: "badge-glow" }
                    }
                }
            }
        }
    }
}
