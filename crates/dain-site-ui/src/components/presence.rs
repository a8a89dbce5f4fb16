//! Presence Component
//!
//! Mounts its children with an enter animation while `visible` is true.
//! When `visible` drops, the children stay mounted with an exit animation
//! for `exit` and are then removed.

use std::time::Duration;

use dioxus::prelude::*;

/// Lifecycle of the wrapped content
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PresencePhase {
    /// Not rendered
    #[default]
    Absent,
    /// Rendered and entering or settled
    Present,
    /// Rendered while the exit animation plays
    Leaving,
}

impl PresencePhase {
    /// Phase after `visible` changes.
    pub fn next(self, visible: bool) -> Self {
        match (self, visible) {
            (_, true) => PresencePhase::Present,
            (PresencePhase::Present, false) => PresencePhase::Leaving,
            (phase, false) => phase,
        }
    }

    pub fn is_rendered(&self) -> bool {
        !matches!(self, PresencePhase::Absent)
    }

    pub fn class(&self) -> &'static str {
        match self {
            PresencePhase::Leaving => "presence presence-exit",
            _ => "presence presence-enter",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PresenceProps {
    pub visible: bool,
    /// Length of the exit animation
    #[props(default = Duration::from_millis(250))]
    pub exit: Duration,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Presence(props: PresenceProps) -> Element {
    let mut phase = use_signal(|| PresencePhase::Absent.next(props.visible));
    // Bumped on every change so a stale exit timer cannot unmount content
    // that has since been shown again.
    let mut generation = use_signal(|| 0u64);
    let exit = props.exit;

    use_effect(use_reactive((&props.visible,), move |(visible,)| {
        let current = *phase.peek();
        let next = current.next(visible);
        if next == current {
            return;
        }
        phase.set(next);
        let ticket = *generation.peek() + 1;
        generation.set(ticket);

        if next == PresencePhase::Leaving {
            spawn(async move {
                tokio::time::sleep(exit).await;
                if *generation.peek() == ticket {
                    phase.set(PresencePhase::Absent);
                }
            });
        }
    }));

    // Render straight from the prop when showing, so opening never waits a
    // frame for the effect.
    let shown = if props.visible {
        PresencePhase::Present
    } else {
        phase()
    };
    if !shown.is_rendered() {
        return rsx! {};
    }

    let extra = props.class.as_deref().unwrap_or("");
    rsx! {
        div {
            class: "{shown.class()} {extra}",
            style: "--presence-exit: {exit.as_millis()}ms;",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn phase_transitions() {
        assert_eq!(PresencePhase::Absent.next(true), PresencePhase::Present);
        assert_eq!(PresencePhase::Present.next(false), PresencePhase::Leaving);
        assert_eq!(PresencePhase::Leaving.next(true), PresencePhase::Present);
        assert_eq!(PresencePhase::Leaving.next(false), PresencePhase::Leaving);
        assert_eq!(PresencePhase::Absent.next(false), PresencePhase::Absent);
    }

    #[test]
    fn rendered_phases() {
        assert!(!PresencePhase::Absent.is_rendered());
        assert!(PresencePhase::Present.is_rendered());
        assert!(PresencePhase::Leaving.is_rendered());
        assert_eq!(PresencePhase::Leaving.class(), "presence presence-exit");
    }

    fn shown() -> Element {
        rsx! {
            Presence { visible: true, class: "panel".to_string(), "inside" }
        }
    }

    fn hidden() -> Element {
        rsx! {
            Presence { visible: false, "inside" }
        }
    }

    #[test]
    fn renders_only_when_visible() {
        let mut dom = VirtualDom::new(shown);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("presence presence-enter panel"));
        assert!(html.contains("inside"));

        let mut dom = VirtualDom::new(hidden);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("inside"));
    }

    type Slot = Rc<Cell<Option<Signal<bool>>>>;

    #[derive(Props, Clone, PartialEq)]
    struct ToggleProps {
        slot: Slot,
    }

    fn toggled(props: ToggleProps) -> Element {
        let visible = use_signal(|| true);
        let slot = props.slot.clone();
        use_hook(move || slot.set(Some(visible)));
        rsx! {
            Presence { visible: visible(), "inside" }
        }
    }

    async fn settle(dom: &mut VirtualDom) -> String {
        let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    #[tokio::test(start_paused = true)]
    async fn exit_plays_then_unmounts() {
        let slot: Slot = Rc::new(Cell::new(None));
        let mut dom = VirtualDom::new_with_props(toggled, ToggleProps { slot: slot.clone() });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("presence-enter"));

        dom.in_runtime(|| {
            if let Some(mut visible) = slot.get() {
                visible.set(false);
            }
        });

        let started = tokio::time::Instant::now();
        let mut saw_exit = false;
        let mut html = settle(&mut dom).await;
        for _ in 0..8 {
            saw_exit |= html.contains("presence-exit");
            if !html.contains("inside") {
                break;
            }
            html = settle(&mut dom).await;
        }
        assert!(saw_exit);
        assert!(!html.contains("inside"));
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
