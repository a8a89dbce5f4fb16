//! In-page navigation and the header menu state machine.

/// Navigation targets, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavItem {
    About,
    Experience,
    Services,
    Strengths,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::About,
        NavItem::Experience,
        NavItem::Services,
        NavItem::Strengths,
    ];

    /// Label shown in the header
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::About => "About",
            NavItem::Experience => "Experience",
            NavItem::Services => "Services",
            NavItem::Strengths => "Strengths",
        }
    }

    /// Element id of the section this item scrolls to (the lower-cased label)
    pub fn anchor(&self) -> &'static str {
        match self {
            NavItem::About => "about",
            NavItem::Experience => "experience",
            NavItem::Services => "services",
            NavItem::Strengths => "strengths",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input to the menu state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was pressed
    Toggle,
    /// A navigation link was chosen
    Select(NavItem),
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`.
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::Select(_)) => MenuState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercased_labels() {
        for item in NavItem::ALL {
            assert_eq!(item.anchor(), item.label().to_lowercase());
            assert_eq!(item.href(), format!("#{}", item.anchor()));
        }
    }

    #[test]
    fn display_order() {
        let labels: Vec<_> = NavItem::ALL.iter().map(NavItem::label).collect();
        assert_eq!(labels, ["About", "Experience", "Services", "Strengths"]);
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips() {
        let open = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.apply(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn selecting_closes() {
        for item in NavItem::ALL {
            assert_eq!(MenuState::Open.apply(MenuEvent::Select(item)), MenuState::Closed);
            assert_eq!(MenuState::Closed.apply(MenuEvent::Select(item)), MenuState::Closed);
        }
    }
}
