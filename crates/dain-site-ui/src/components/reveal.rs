//! Reveal-on-scroll Component
//!
//! Wraps content that stays hidden until the host first reports it inside
//! the viewport, then transitions in. Once revealed it stays revealed, so
//! scrolling back past it does not replay the entrance.

use std::time::Duration;

use dain_site_core::{Result, SiteError};
use dioxus::prelude::*;

/// Entrance style
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealEffect {
    /// Rise from below while fading in
    #[default]
    FadeUp,
    /// Grow from 90% while fading in
    Scale,
    /// Slide in from the left while fading in
    SlideRight,
}

impl RevealEffect {
    pub fn class(&self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "reveal-fade-up",
            RevealEffect::Scale => "reveal-scale",
            RevealEffect::SlideRight => "reveal-slide-right",
        }
    }
}

/// Whether the entrance has played
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// State after a visibility report.
    ///
    /// Revealed is terminal. A failed report reveals at once so content is
    /// never stuck hidden.
    pub fn on_visible(self, intersecting: &Result<bool>) -> Self {
        match (self, intersecting) {
            (RevealState::Revealed, _) => RevealState::Revealed,
            (RevealState::Hidden, Ok(true) | Err(_)) => RevealState::Revealed,
            (RevealState::Hidden, Ok(false)) => RevealState::Hidden,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default)]
    pub effect: RevealEffect,
    /// Wait before the transition starts, for cascades
    #[props(default = Duration::ZERO)]
    pub delay: Duration,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Class list for a reveal wrapper in the given state.
pub fn reveal_class(effect: RevealEffect, revealed: bool, extra: Option<&str>) -> String {
    let mut class = format!("reveal {}", effect.class());
    if revealed {
        class.push_str(" is-revealed");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut state = use_signal(RevealState::default);
    let class = reveal_class(props.effect, state().is_revealed(), props.class.as_deref());
    let delay_ms = props.delay.as_millis();

    rsx! {
        div {
            class: "{class}",
            style: "transition-delay: {delay_ms}ms;",
            onvisible: move |evt| {
                let current = *state.peek();
                if current.is_revealed() {
                    return;
                }
                let intersecting = evt
                    .data()
                    .is_intersecting()
                    .map_err(|e| SiteError::Visibility(format!("{e:?}")));
                match &intersecting {
                    Ok(true) => tracing::debug!(delay_ms = delay_ms as u64, "Revealing element"),
                    Ok(false) => {}
                    Err(err) => tracing::warn!(error = %err, "Showing element without entrance"),
                }
                let next = current.on_visible(&intersecting);
                if next != current {
                    state.set(next);
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
    fn effect_classes() {
        assert_eq!(RevealEffect::FadeUp.class(), "reveal-fade-up");
        assert_eq!(RevealEffect::Scale.class(), "reveal-scale");
        assert_eq!(RevealEffect::SlideRight.class(), "reveal-slide-right");
        assert_eq!(RevealEffect::default(), RevealEffect::FadeUp);
    }

    #[test]
    fn class_list() {
        assert_eq!(reveal_class(RevealEffect::Scale, false, None), "reveal reveal-scale");
        assert_eq!(
            reveal_class(RevealEffect::Scale, true, Some("card")),
            "reveal reveal-scale is-revealed card"
        );
        assert_eq!(reveal_class(RevealEffect::FadeUp, false, Some("")), "reveal reveal-fade-up");
    }

    #[test]
    fn entrance_plays_once() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());

        // still below the fold
        state = state.on_visible(&Ok(false));
        assert_eq!(state, RevealState::Hidden);

        // scrolled in, out, back in
        state = state.on_visible(&Ok(true));
        assert_eq!(state, RevealState::Revealed);
        state = state.on_visible(&Ok(false));
        assert_eq!(state, RevealState::Revealed);
        state = state.on_visible(&Ok(true));
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn failed_observation_reveals_immediately() {
        let failed: Result<bool> = Err(SiteError::Visibility("unsupported".into()));
        assert_eq!(RevealState::Hidden.on_visible(&failed), RevealState::Revealed);
        assert_eq!(
            RevealState::Revealed.on_visible(&Ok(false)),
            RevealState::Revealed
        );
    }

    fn delayed_card() -> Element {
        rsx! {
            Reveal { effect: RevealEffect::Scale, delay: Duration::from_millis(300), "card body" }
        }
    }

    #[test]
    fn starts_hidden_with_delay() {
        let mut dom = VirtualDom::new(delayed_card);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("reveal reveal-scale"));
        assert!(!html.contains("is-revealed"));
        assert!(html.contains("transition-delay: 300ms;"));
        assert!(html.contains("card body"));
    }
}
