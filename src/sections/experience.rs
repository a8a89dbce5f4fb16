//! Career summary - the `#experience` section.

use std::time::Duration;

use dain_site_core::{stagger, CareerIcon, CareerItem, NavItem};
use dain_site_ui::{HeadingAlign, Icon, IconKind, Reveal, RevealEffect, SectionHeading};
use dioxus::prelude::*;

pub const CAREER: [CareerItem; 3] = [
    CareerItem {
        title: "생성형 AI 실무 교육 전문가",
        description: "다양한 기업 및 기관 대상 AI 툴(제미나이, 챗GPT 등) 활용 강의 수행",
    },
    CareerItem {
        title: "AI 도입 전략 수석 컨설턴트",
        description: "조직 내 업무 효율 극대화를 위한 AI 워크플로우 설계",
    },
    CareerItem {
        title: "AI 커뮤니티 및 콘텐츠 디렉터",
        description: "최신 AI 기술 동향 분석 및 실무 적용 사례 전파",
    },
];

const CASCADE_STEP: Duration = Duration::from_millis(150);

#[component]
pub fn ExperienceSection() -> Element {
    rsx! {
        section { id: NavItem::Experience.anchor(), class: "section bg-grid",
            div { class: "section-inner",
                SectionHeading { title: "Career Summary".to_string(), align: HeadingAlign::Center }

                div { class: "career-grid",
                    for (idx, item) in CAREER.iter().enumerate() {
                        Reveal {
                            key: "{idx}",
                            effect: RevealEffect::FadeUp,
                            delay: stagger(CASCADE_STEP, idx),
                            div { class: "career-card glass lift",
                                div { class: "career-icon",
                                    Icon { kind: IconKind::from(CareerIcon::for_position(idx)) }
                                }
                                h3 { class: "card-title", "{item.title}" }
                                p { class: "card-text", "{item.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
