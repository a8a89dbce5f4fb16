//! Hero banner - the `#about` section.
//!
//! Title, tagline, two call-to-action buttons and a decorative "AI core"
//! widget with counter-rotating rings and a progress bar.

use std::time::Duration;

use dain_site_core::{Easing, Motion, NavItem};
use dain_site_ui::{Button, ButtonVariant, Icon, IconKind};
use dioxus::prelude::*;

pub const TAGLINE: &str = "인공지능 교육 전문가 및 AI 트랜스포메이션 컨설턴트로서, 생성형 AI의 무한한 가능성을 비즈니스 실무에 연결합니다.";

/// Reading shown above the progress bar
pub const CORE_EFFICIENCY: &str = "99.8%";

const INTRO: Motion = Motion::millis(800);
const VISUAL: Motion = Motion::millis(1_000).with_delay(Duration::from_millis(200));
const OUTER_RING: Motion = Motion::millis(20_000).with_easing(Easing::Linear).forever();
const INNER_RING: Motion = Motion::millis(10_000).with_easing(Easing::Linear).forever();
const PROGRESS: Motion = Motion::millis(2_000).with_delay(Duration::from_secs(1));

#[component]
pub fn Hero() -> Element {
    let intro_style = INTRO.css("fade-up");
    let visual_style = VISUAL.css("scale-in");
    let outer_style = OUTER_RING.css("spin-pulse");
    let inner_style = INNER_RING.css("spin-reverse");
    let fill_style = format!("--fill-to: {}; {}", CORE_EFFICIENCY, PROGRESS.css("fill-bar"));

    rsx! {
        section { id: NavItem::About.anchor(), class: "hero",
            div { class: "hero-grid",
                div { class: "hero-copy", style: "{intro_style}",
                    div { class: "hero-badge glass",
                        Icon { kind: IconKind::Zap, size: 14 }
                        " AI Transformation Architect"
                    }
                    h1 { class: "hero-title",
                        "Hello, I am "
                        br {}
                        span { class: "gradient-text", "DAIN" }
                    }
                    p { class: "hero-tagline", "{TAGLINE}" }
                    div { class: "hero-actions",
                        Button { variant: ButtonVariant::Primary, class: "with-arrow".to_string(),
                            "컨설팅 문의하기 "
                            Icon { kind: IconKind::ArrowRight, class: "arrow".to_string() }
                        }
                        Button { variant: ButtonVariant::Glass, "포트폴리오 보기" }
                    }
                }

                div { class: "hero-visual", style: "{visual_style}",
                    div { class: "core-panel glass",
                        div { class: "core-glow" }
                        div { class: "ring-outer", style: "{outer_style}",
                            div { class: "ring-inner", style: "{inner_style}",
                                Icon { kind: IconKind::Cpu, size: 80, class: "core-icon".to_string() }
                            }
                        }
                        div { class: "core-meter glass",
                            div { class: "core-meter-row",
                                span { class: "core-meter-label", "AI Core Efficiency" }
                                span { class: "core-meter-value", "{CORE_EFFICIENCY}" }
                            }
                            div { class: "core-meter-track",
                                div {
                                    class: "core-meter-fill",
                                    style: "{fill_style}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut dom = VirtualDom::new(Hero);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn anchored_as_about() {
        assert!(render().contains("id=\"about\""));
    }

    #[test]
    fn rings_spin_in_opposite_directions_forever() {
        let html = render();
        assert!(html.contains("spin-pulse 20000ms linear 0ms infinite"));
        assert!(html.contains("spin-reverse 10000ms linear 0ms infinite"));
    }

    #[test]
    fn progress_fills_once_after_delay() {
        let html = render();
        assert!(html.contains("--fill-to: 99.8%;"));
        assert!(html.contains("fill-bar 2000ms ease-out 1000ms 1 both"));
    }

    #[test]
    fn copy_and_actions() {
        let html = render();
        assert!(html.contains("AI Transformation Architect"));
        assert!(html.contains(TAGLINE));
        assert!(html.contains("컨설팅 문의하기"));
        assert!(html.contains("포트폴리오 보기"));
        assert_eq!(html.matches("<button").count(), 2);
    }
}
