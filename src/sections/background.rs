//! Background3D - ambient starfield and floating spheres behind the page.
//!
//! The scene is projected once on mount. Stars are drawn as SVG dots
//! grouped into a few size layers; each sphere is a shaded blob whose
//! outline wobbles with its distortion settings while it bobs in place.
//! Everything moves through CSS keyframes, so the host's compositor does
//! the frame scheduling.

use std::rc::Rc;

use dain_site_core::scene::{light_angle, DEFAULT_SEED, STAR_LIGHTNESS};
use dain_site_core::{Easing, FloatingSphere, Motion, Scene, Starfield};
use dioxus::prelude::*;

/// Virtual canvas the star coordinates are laid out on
const VIEW_WIDTH: f32 = 1600.0;
const VIEW_HEIGHT: f32 = 900.0;
const STAR_LAYERS: usize = 4;

/// One size class of stars, drawn as a single path.
#[derive(Clone, Debug, PartialEq)]
pub struct StarLayer {
    pub path: String,
    pub stroke_width: f32,
    pub color: String,
    pub opacity: f32,
    pub twinkle: Motion,
    pub count: usize,
}

impl StarLayer {
    fn attrs(&self) -> (String, String, String) {
        (
            format!("{:.2}", self.stroke_width),
            format!("{:.2}", self.opacity),
            self.twinkle.css("twinkle"),
        )
    }
}

/// Ready-to-render sphere placement and styling.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereView {
    pub anchor_style: String,
    pub bob_style: String,
    pub surface_style: String,
    pub glossy: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundView {
    pub layers: Vec<StarLayer>,
    pub spheres: Vec<SphereView>,
    pub soft_stars: bool,
    pub drift: Motion,
}

impl BackgroundView {
    pub fn build(scene: &Scene, seed: u64) -> Self {
        let aspect = VIEW_WIDTH / VIEW_HEIGHT;
        let params = scene.starfield;
        let field = Starfield::generate(params, seed);

        let mut paths = vec![String::new(); STAR_LAYERS];
        let mut counts = vec![0usize; STAR_LAYERS];
        let mut hues = vec![0.0f32; STAR_LAYERS];
        let mut lightness = vec![0.0f32; STAR_LAYERS];
        for star in &field.stars {
            let Some(p) = scene.camera.project(star.position, aspect) else {
                continue;
            };
            // size spans [0.5, 1.0] x factor
            let rel = if params.factor > 0.0 {
                (star.size / params.factor - 0.5) * 2.0
            } else {
                0.0
            };
            let bucket = ((rel * STAR_LAYERS as f32) as usize).min(STAR_LAYERS - 1);
            if counts[bucket] == 0 {
                hues[bucket] = star.hue;
            }
            counts[bucket] += 1;
            lightness[bucket] += star.lightness;
            paths[bucket].push_str(&format!(
                "M{:.1} {:.1}h0",
                p.x / 100.0 * VIEW_WIDTH,
                p.y / 100.0 * VIEW_HEIGHT
            ));
        }

        let speed = params.speed.max(0.05);
        let layers = paths
            .into_iter()
            .enumerate()
            .map(|(b, path)| {
                let size = (0.5 + 0.5 * (b as f32 + 0.5) / STAR_LAYERS as f32) * params.factor;
                let mean_lightness = if counts[b] == 0 {
                    STAR_LIGHTNESS
                } else {
                    lightness[b] / counts[b] as f32
                };
                StarLayer {
                    path,
                    // point size falls off with distance from the camera
                    stroke_width: size * 90.0 / (params.radius + params.depth / 2.0),
                    color: format!(
                        "hsl({:.0}, {:.0}%, {:.0}%)",
                        hues[b] * 360.0,
                        params.saturation * 100.0,
                        mean_lightness * 100.0
                    ),
                    opacity: 0.55 + 0.1 * b as f32,
                    twinkle: Motion::millis(((3_000.0 + 700.0 * b as f32) / speed) as u64)
                        .with_delay(std::time::Duration::from_millis(400 * b as u64))
                        .with_easing(Easing::EaseInOut)
                        .forever(),
                    count: counts[b],
                }
            })
            .collect();

        let spheres = scene
            .spheres
            .iter()
            .filter_map(|sphere| sphere_view(scene, sphere, aspect))
            .collect();

        Self {
            layers,
            spheres,
            soft_stars: params.fade,
            drift: Motion::millis((240_000.0 / speed) as u64)
                .with_easing(Easing::Linear)
                .forever(),
        }
    }

    pub fn star_count(&self) -> usize {
        self.layers.iter().map(|l| l.count).sum()
    }
}

fn sphere_view(scene: &Scene, sphere: &FloatingSphere, aspect: f32) -> Option<SphereView> {
    let p = scene.camera.project(sphere.position, aspect)?;
    // diameter as a share of viewport height
    let size_vh = 100.0 * sphere.radius * p.scale;

    let angle = light_angle(scene).to_radians();
    let highlight_x = 50.0 + 25.0 * angle.cos();
    let highlight_y = 50.0 - 25.0 * angle.sin();
    let brightness = (scene.total_intensity() / 1.5).clamp(0.3, 1.5);

    let bob = Motion::millis((6_000.0 / sphere.float_speed.max(0.1)) as u64)
        .with_easing(Easing::EaseInOut)
        .forever();
    let wobble = Motion::millis((8_000.0 / sphere.speed.max(0.1)) as u64)
        .with_easing(Easing::EaseInOut)
        .forever();

    Some(SphereView {
        anchor_style: format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}vh; height: {:.2}vh;",
            p.x, p.y, size_vh, size_vh
        ),
        bob_style: format!(
            "--bob: {:.1}px; --roll: {:.1}deg; {}",
            sphere.float_intensity * 12.0,
            sphere.rotation_intensity * 8.0,
            bob.css("bob")
        ),
        surface_style: format!(
            "--blob: {:.1}%; --sphere-color: {}; filter: brightness({:.2}); \
             background: radial-gradient(circle at {:.0}% {:.0}%, rgba(255, 255, 255, 0.45), {} 45%, rgba(2, 6, 23, 0.9) 100%); {}",
            sphere.distort * 30.0,
            sphere.color,
            brightness,
            highlight_x,
            highlight_y,
            sphere.color,
            wobble.css("wobble")
        ),
        glossy: sphere.roughness < 0.5,
    })
}

#[component]
pub fn Background3D() -> Element {
    let view = use_hook(|| Rc::new(BackgroundView::build(&Scene::portfolio(), DEFAULT_SEED)));
    let svg_class = if view.soft_stars { "starfield soft" } else { "starfield" };
    let drift_style = view.drift.css("star-drift");

    rsx! {
        div { class: "background-3d", "aria-hidden": "true",
            svg {
                class: "{svg_class}",
                style: "{drift_style}",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                "preserveAspectRatio": "xMidYMid slice",
                for (i, layer) in view.layers.iter().enumerate() {
                    {
                        let (width, opacity, twinkle) = layer.attrs();
                        rsx! {
                            path {
                                key: "{i}",
                                class: "star-layer",
                                d: "{layer.path}",
                                stroke: "{layer.color}",
                                stroke_width: "{width}",
                                stroke_linecap: "round",
                                "opacity": "{opacity}",
                                style: "{twinkle}",
                            }
                        }
                    }
                }
            }
            for (i, sphere) in view.spheres.iter().enumerate() {
                div { key: "{i}", class: "sphere-anchor", style: "{sphere.anchor_style}",
                    div { class: "sphere-bob", style: "{sphere.bob_style}",
                        div { class: "sphere-surface", style: "{sphere.surface_style}",
                            if sphere.glossy {
                                div { class: "sphere-gloss" }
                            }
                        }
                    }
                }
            }
        }
    }
}
