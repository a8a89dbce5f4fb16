//! Expert services - the `#services` section.

use std::time::Duration;

use dain_site_core::{stagger, NavItem, ServiceItem};
use dain_site_ui::{Reveal, RevealEffect, SectionHeading};
use dioxus::prelude::*;

pub const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        id: 1,
        title: "생성형 AI 실무 워크숍",
        description: "프롬프트 엔지니어링 및 AI 툴 활용 능력 강화 교육",
        icon: "prompt",
    },
    ServiceItem {
        id: 2,
        title: "AI 기반 업무 자동화 컨설팅",
        description: "노코드 툴과 AI를 결합한 스마트 워크플레이스 구축",
        icon: "automation",
    },
    ServiceItem {
        id: 3,
        title: "AI 리터러시 강연",
        description: "비전공자도 쉽게 이해하는 인공지능 기술의 현재와 미래",
        icon: "literacy",
    },
    ServiceItem {
        id: 4,
        title: "기업 맞춤형 AI 가이드라인 수립",
        description: "효율적이고 안전한 AI 도입을 위한 전략 수립",
        icon: "guideline",
    },
];

/// Cards enter `id` steps after the grid scrolls into view
const CASCADE_STEP: Duration = Duration::from_millis(100);

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { id: NavItem::Services.anchor(), class: "section",
            div { class: "section-inner",
                SectionHeading {
                    title: "Expert Services".to_string(),
                    eyebrow: "My Solutions".to_string(),
                }

                div { class: "services-grid",
                    for service in SERVICES.iter() {
                        Reveal {
                            key: "{service.id}",
                            effect: RevealEffect::Scale,
                            delay: stagger(CASCADE_STEP, usize::from(service.id)),
                            div { class: "service-card glass",
                                div { class: "service-ordinal", "{service.ordinal_label()}" }
                                h3 { class: "card-title", "{service.title}" }
                                p { class: "card-text", "{service.description}" }
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
        let mut dom = VirtualDom::new(ServicesSection);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn four_cards_with_padded_ordinals() {
        let html = render();
        assert_eq!(html.matches("class=\"service-card").count(), 4);
        for ordinal in ["01", "02", "03", "04"] {
            assert!(html.contains(&format!("<div class=\"service-ordinal\">{ordinal}</div>")));
        }
    }

    #[test]
    fn ordinal_follows_id_not_position() {
        for service in &SERVICES {
            assert_eq!(service.ordinal_label(), format!("{:02}", service.id));
        }
    }

    #[test]
    fn delay_scales_with_id() {
        let html = render();
        for ms in [100, 200, 300, 400] {
            assert!(html.contains(&format!("transition-delay: {ms}ms;")));
        }
    }

    #[test]
    fn icon_tag_is_not_rendered() {
        let html = render();
        for service in &SERVICES {
            assert!(!html.contains(service.icon));
        }
    }

    #[test]
    fn ids_are_unique_and_one_based() {
        let ids: Vec<u8> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
