//! Header menu walkthrough on a narrow viewport.

use dain_site_core::{MenuEvent, MenuState, NavItem};

#[test]
fn open_browse_and_close() {
    // Initial load
    let state = MenuState::default();
    assert!(!state.is_open());

    // One press opens the panel, which lists the sections in order
    let state = state.apply(MenuEvent::Toggle);
    assert!(state.is_open());
    let labels: Vec<&str> = NavItem::ALL.iter().map(|item| item.label()).collect();
    assert_eq!(labels, vec!["About", "Experience", "Services", "Strengths"]);

    // Choosing any entry hides it again
    for item in NavItem::ALL {
        let reopened = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(reopened.apply(MenuEvent::Select(item)), MenuState::Closed);
    }
    assert_eq!(state.apply(MenuEvent::Select(NavItem::Strengths)), MenuState::Closed);
}

#[test]
fn second_press_closes() {
    let state = MenuState::default()
        .apply(MenuEvent::Toggle)
        .apply(MenuEvent::Toggle);
    assert_eq!(state, MenuState::Closed);
}

#[test]
fn every_link_targets_its_section() {
    let hrefs: Vec<String> = NavItem::ALL.iter().map(NavItem::href).collect();
    assert_eq!(hrefs, ["#about", "#experience", "#services", "#strengths"]);
}
