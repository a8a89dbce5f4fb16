//! Header Component
//!
//! Desktop: logo and a row of in-page links
//! Mobile: logo and a menu button that opens a link panel

use dain_site_core::{MenuEvent, MenuState, NavItem};
use dain_site_ui::{Icon, IconKind, Presence};
use dioxus::prelude::*;

/// Shared handle on the mobile menu state.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuHandle {
    state: Signal<MenuState>,
}

impl MenuHandle {
    pub fn state(&self) -> MenuState {
        (self.state)()
    }

    pub fn dispatch(&mut self, event: MenuEvent) {
        let before = *self.state.peek();
        let after = before.apply(event);
        if after != before {
            tracing::debug!(?event, from = ?before, to = ?after, "Menu transition");
            self.state.set(after);
        }
    }
}

/// Menu state for one header, starting closed.
pub fn use_menu() -> MenuHandle {
    MenuHandle {
        state: use_signal(MenuState::default),
    }
}

/// Fixed navigation bar.
///
/// Owns the only mutable state on the page: whether the mobile menu is open.
#[component]
pub fn Header() -> Element {
    let menu = use_menu();
    rsx! {
        HeaderBar { menu }
    }
}

#[component]
fn HeaderBar(menu: MenuHandle) -> Element {
    let mut menu = menu;
    let open = menu.state().is_open();

    rsx! {
        nav { class: "site-header glass",
            div { class: "site-header-inner",
                div { class: "logo", "DAIN" span { class: "logo-suffix", ".AI" } }

                div { class: "nav-links",
                    for item in NavItem::ALL {
                        a {
                            key: "{item.anchor()}",
                            class: "nav-link",
                            href: "{item.href()}",
                            "{item.label()}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "menu-toggle",
                    "aria-label": if open { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{open}",
                    onclick: move |_| menu.dispatch(MenuEvent::Toggle),
                    if open {
                        Icon { kind: IconKind::X }
                    } else {
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            Presence { visible: open, class: "mobile-menu glass".to_string(),
                div { class: "mobile-menu-links",
                    for item in NavItem::ALL {
                        a {
                            key: "{item.anchor()}",
                            class: "mobile-menu-link",
                            href: "{item.href()}",
                            onclick: move |_| menu.dispatch(MenuEvent::Select(item)),
                            "{item.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    type Slot = Rc<Cell<Option<MenuHandle>>>;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        slot: Slot,
    }

    /// Mounts the header and hands its menu handle back to the test.
    fn harness(props: HarnessProps) -> Element {
        let menu = use_menu();
        let slot = props.slot.clone();
        use_hook(move || slot.set(Some(menu)));
        rsx! {
            HeaderBar { menu }
        }
    }

    struct Mounted {
        dom: VirtualDom,
        slot: Slot,
    }

    impl Mounted {
        fn new() -> Self {
            let slot: Slot = Rc::new(Cell::new(None));
            let mut dom = VirtualDom::new_with_props(harness, HarnessProps { slot: slot.clone() });
            dom.rebuild_in_place();
            Self { dom, slot }
        }

        fn html(&self) -> String {
            dioxus_ssr::render(&self.dom)
        }

        fn send(&mut self, event: MenuEvent) {
            let slot = self.slot.clone();
            self.dom.in_runtime(move || {
                if let Some(mut menu) = slot.get() {
                    menu.dispatch(event);
                }
            });
        }

        /// Runs one round of pending work and returns the new markup.
        async fn settle(&mut self) -> String {
            let _ = tokio::time::timeout(Duration::from_secs(1), self.dom.wait_for_work()).await;
            self.dom.render_immediate_to_vec();
            self.html()
        }
    }

    fn closed() -> String {
        let mut dom = VirtualDom::new(Header);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_shows_toggle_without_panel() {
        let html = closed();
        assert!(html.contains("menu-toggle"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("mobile-menu-link"));
    }

    #[test]
    fn desktop_links_target_sections() {
        let html = closed();
        for item in NavItem::ALL {
            assert!(html.contains(&format!("href=\"#{}\"", item.anchor())));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn open_panel_lists_sections_in_order() {
        let mut page = Mounted::new();
        page.send(MenuEvent::Toggle);
        let html = page.settle().await;
        assert!(html.contains("aria-expanded=\"true\""));
        assert_eq!(html.matches("class=\"mobile-menu-link\"").count(), 4);

        let panel = &html[html.find("mobile-menu-links").unwrap()..];
        let positions: Vec<usize> = ["About", "Experience", "Services", "Strengths"]
            .iter()
            .map(|label| panel.find(&format!(">{label}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn walkthrough_on_narrow_viewport() {
        let mut page = Mounted::new();
        assert!(!page.html().contains("mobile-menu-link"));

        page.send(MenuEvent::Toggle);
        let html = page.settle().await;
        assert!(html.contains("mobile-menu-link"));
        assert!(html.contains("presence-enter"));

        page.send(MenuEvent::Select(NavItem::Experience));
        let mut saw_exit = false;
        let mut html = page.settle().await;
        assert!(html.contains("aria-expanded=\"false\""));
        for _ in 0..8 {
            saw_exit |= html.contains("presence-exit");
            if !html.contains("mobile-menu-link") {
                break;
            }
            html = page.settle().await;
        }
        assert!(saw_exit);
        assert!(!html.contains("mobile-menu-link"));
        let state = page.dom.in_runtime(|| page.slot.get().map(|m| m.state()));
        assert_eq!(state, Some(MenuState::Closed));
    }
}
