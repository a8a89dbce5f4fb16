use dioxus::prelude::*;

use crate::sections::{
    Background3D, ContactBanner, ExperienceSection, Footer, Header, Hero, ServicesSection,
    StrengthsSection,
};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and stacks the sections in their fixed order:
/// background, header, the main column, footer.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            Background3D {}
            Header {}

            main { class: "page-main",
                Hero {}
                ExperienceSection {}
                ServicesSection {}
                StrengthsSection {}
                ContactBanner {}
            }

            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn sections_in_fixed_order() {
        let html = render();
        let markers = [
            "class=\"background-3d\"",
            "class=\"site-header",
            "<main",
            "id=\"about\"",
            "id=\"experience\"",
            "id=\"services\"",
            "id=\"strengths\"",
            "Ready to Transform?",
            "</main>",
            "<footer",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn every_nav_anchor_has_a_target() {
        let html = render();
        for item in dain_site_core::NavItem::ALL {
            assert_eq!(html.matches(&format!("id=\"{}\"", item.anchor())).count(), 1);
        }
    }

    #[test]
    fn rerender_is_identical() {
        assert_eq!(render(), render());
    }
}
