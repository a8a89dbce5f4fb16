//! Button Components
//!
//! Button styles used across the page:
//! - Primary: solid cyan call to action
//! - Glass: frosted secondary action
//! - Inverse: white pill that turns cyan on hover
//! - Text: bare uppercase link-style button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Glass,
    Inverse,
    Text,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::Inverse => "btn-inverse",
            ButtonVariant::Text => "btn-text",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler. Without one the button is purely decorative.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Renders a link to this target instead of a button
    #[props(default)]
    pub href: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Text,
///         onclick: move |_| scroll_up(),
///         "Back to Top"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };

    if let Some(href) = props.href.as_deref() {
        return rsx! {
            a { class: "{full_class}", href: "{href}", {props.children} }
        };
    }

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Glass.class(), "btn-glass");
        assert_eq!(ButtonVariant::Inverse.class(), "btn-inverse");
        assert_eq!(ButtonVariant::Text.class(), "btn-text");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    fn glass_button() -> Element {
        rsx! {
            Button { variant: ButtonVariant::Glass, class: "wide".to_string(), "포트폴리오 보기" }
        }
    }

    #[test]
    fn renders_classes_and_label() {
        let mut dom = VirtualDom::new(glass_button);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("class=\"btn-glass wide\""));
        assert!(html.contains("포트폴리오 보기"));
        assert!(html.contains("<button"));
    }

    fn mail_link() -> Element {
        rsx! {
            Button { variant: ButtonVariant::Inverse, href: "mailto:hi@example.com".to_string(), "Write" }
        }
    }

    #[test]
    fn href_renders_a_link() {
        let mut dom = VirtualDom::new(mail_link);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<a "));
        assert!(html.contains("class=\"btn-inverse\""));
        assert!(html.contains("href=\"mailto:hi@example.com\""));
        assert!(!html.contains("<button"));
    }
}
