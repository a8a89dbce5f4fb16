//! Literal content records.
//!
//! Every list on the page is a `const` array of these records, owned by the
//! section that renders it. None of them change at runtime.

/// One offering in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceItem {
    /// 1-based display ordinal, unique within its list
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Decorative tag. Carried along but never mapped to a glyph.
    pub icon: &'static str,
}

impl ServiceItem {
    /// The big ordinal printed on the card: `id` zero-padded to two digits.
    pub fn ordinal_label(&self) -> String {
        format!("{:02}", self.id)
    }
}

/// One "why choose me" entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// One career summary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CareerItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// A statistic shown on a floating badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBadge {
    pub value: &'static str,
    pub label: &'static str,
}

/// Glyph shown on a career card, chosen by the card's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CareerIcon {
    BookOpen,
    Layers,
    Zap,
}

impl CareerIcon {
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => CareerIcon::BookOpen,
            1 => CareerIcon::Layers,
            _ => CareerIcon::Zap,
        }
    }
}

/// Strength entries are numbered by position, starting at 1.
pub fn strength_number(position: usize) -> usize {
    position + 1
}

/// Kind of footer social affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    Linkedin,
    Mail,
}

/// Footer social link. Destinations are placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
    /// Accessible name, since the link only shows an icon
    pub label: &'static str,
}
