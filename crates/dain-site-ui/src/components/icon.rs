//! Lucide Icons
//!
//! Inline SVG glyphs drawn on a 24x24 grid with a 2px round stroke.

use dain_site_core::{CareerIcon, SocialKind};
use dioxus::prelude::*;

/// Available glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Cpu,
    BookOpen,
    Layers,
    Zap,
    ArrowRight,
    Menu,
    X,
    Instagram,
    Linkedin,
    Mail,
}

/// One primitive of a glyph
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Shape {
    Path(&'static str),
    Line(f32, f32, f32, f32),
    Polyline(&'static str),
    Polygon(&'static str),
    Rect { x: f32, y: f32, w: f32, h: f32, r: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
}

impl IconKind {
    pub fn shapes(&self) -> &'static [Shape] {
        use Shape::*;
        match self {
            IconKind::Cpu => &[
                Rect { x: 4.0, y: 4.0, w: 16.0, h: 16.0, r: 2.0 },
                Rect { x: 9.0, y: 9.0, w: 6.0, h: 6.0, r: 1.0 },
                Path("M15 2v2"),
                Path("M15 20v2"),
                Path("M2 15h2"),
                Path("M2 9h2"),
                Path("M20 15h2"),
                Path("M20 9h2"),
                Path("M9 2v2"),
                Path("M9 20v2"),
            ],
            IconKind::BookOpen => &[
                Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            IconKind::Layers => &[
                Polygon("12 2 2 7 12 12 22 7 12 2"),
                Polyline("2 17 12 22 22 17"),
                Polyline("2 12 12 17 22 12"),
            ],
            IconKind::Zap => &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
            IconKind::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            IconKind::Menu => &[
                Line(4.0, 12.0, 20.0, 12.0),
                Line(4.0, 6.0, 20.0, 6.0),
                Line(4.0, 18.0, 20.0, 18.0),
            ],
            IconKind::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            IconKind::Instagram => &[
                Rect { x: 2.0, y: 2.0, w: 20.0, h: 20.0, r: 5.0 },
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Line(17.5, 6.5, 17.51, 6.5),
            ],
            IconKind::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: 2.0, y: 9.0, w: 4.0, h: 12.0, r: 0.0 },
                Circle { cx: 4.0, cy: 4.0, r: 2.0 },
            ],
            IconKind::Mail => &[
                Rect { x: 2.0, y: 4.0, w: 20.0, h: 16.0, r: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
        }
    }
}

impl From<CareerIcon> for IconKind {
    fn from(icon: CareerIcon) -> Self {
        match icon {
            CareerIcon::BookOpen => IconKind::BookOpen,
            CareerIcon::Layers => IconKind::Layers,
            CareerIcon::Zap => IconKind::Zap,
        }
    }
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Instagram => IconKind::Instagram,
            SocialKind::Linkedin => IconKind::Linkedin,
            SocialKind::Mail => IconKind::Mail,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Rendered width and height in pixels
    #[props(default = 24)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Decorative icon, hidden from assistive technology.
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in props.kind.shapes().iter() {
                {render_shape(shape)}
            }
        }
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! { path { d: "{d}" } },
        Shape::Line(x1, y1, x2, y2) => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
        Shape::Polyline(points) => rsx! { polyline { points: "{points}" } },
        Shape::Polygon(points) => rsx! { polygon { points: "{points}" } },
        Shape::Rect { x, y, w, h, r } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{r}", ry: "{r}" }
        },
        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
    }
}
