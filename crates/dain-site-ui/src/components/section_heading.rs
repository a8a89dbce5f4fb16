//! Section Heading Component

use dioxus::prelude::*;

/// Heading alignment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeadingAlign {
    #[default]
    Start,
    /// Centred, with an accent underline
    Center,
}

/// Title block at the top of a section, with an optional eyebrow line.
#[component]
pub fn SectionHeading(
    title: String,
    #[props(default)] eyebrow: Option<String>,
    #[props(default)] align: HeadingAlign,
) -> Element {
    let class = match align {
        HeadingAlign::Start => "section-heading",
        HeadingAlign::Center => "section-heading centered",
    };

    rsx! {
        div { class: "{class}",
            if let Some(eyebrow) = eyebrow {
                span { class: "section-eyebrow", "{eyebrow}" }
            }
            h2 { class: "section-title", "{title}" }
            if align == HeadingAlign::Center {
                div { class: "section-underline" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centred() -> Element {
        rsx! {
            SectionHeading { title: "Career Summary".to_string(), align: HeadingAlign::Center }
        }
    }

    fn with_eyebrow() -> Element {
        rsx! {
            SectionHeading {
                title: "Expert Services".to_string(),
                eyebrow: "My Solutions".to_string(),
            }
        }
    }

    #[test]
    fn centred_has_underline() {
        let mut dom = VirtualDom::new(centred);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("section-heading centered"));
        assert!(html.contains("section-underline"));
        assert!(!html.contains("section-eyebrow"));
    }

    #[test]
    fn eyebrow_above_title() {
        let mut dom = VirtualDom::new(with_eyebrow);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let eyebrow = html.find("My Solutions").unwrap();
        let title = html.find("Expert Services").unwrap();
        assert!(eyebrow < title);
        assert!(!html.contains("section-underline"));
    }
}
