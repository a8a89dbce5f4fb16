//! Model of the decorative 3D background.
//!
//! The background is a starfield shell around the camera plus two
//! floating, distorting spheres. This module holds the scene parameters,
//! generates star positions and projects world points onto the viewport.
//! Drawing is left to the UI layer.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Vec3 = [f32; 3];

/// Seed used for the page background so every render draws the same sky.
pub const DEFAULT_SEED: u64 = 0xDA1A;

/// Lightness of the nearest stars.
pub const STAR_LIGHTNESS: f32 = 0.9;
/// Share of lightness the farthest stars in a fading shell keep.
const FAR_STAR_RETAIN: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { position: Vec3, intensity: f32 },
}

/// Parameters of the starfield shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldParams {
    /// Inner radius of the shell
    pub radius: f32,
    /// Thickness of the shell
    pub depth: f32,
    pub count: usize,
    /// Size multiplier
    pub factor: f32,
    /// 0 renders every star grey-white
    pub saturation: f32,
    /// Dim stars with distance and soften their edges
    pub fade: bool,
    /// Twinkle speed
    pub speed: f32,
}

impl StarfieldParams {
    /// Star lightness at `distance` from the centre.
    ///
    /// Uniform unless `fade` is set, in which case it falls linearly from
    /// the inner radius to the outer edge of the shell.
    pub fn lightness_at(&self, distance: f32) -> f32 {
        if !self.fade || self.depth <= 0.0 {
            return STAR_LIGHTNESS;
        }
        let t = ((distance - self.radius) / self.depth).clamp(0.0, 1.0);
        STAR_LIGHTNESS * (1.0 - (1.0 - FAR_STAR_RETAIN) * t)
    }
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    /// Hue in `[0, 1)`, spread evenly across the field
    pub hue: f32,
    /// HSL lightness in `[0, 1]`
    pub lightness: f32,
}

impl Star {
    pub fn distance(&self) -> f32 {
        length(self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub params: StarfieldParams,
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `params.count` stars through the shell.
    ///
    /// The outer radius shrinks by a random fraction of `depth / count` per
    /// star, so the field fills the shell from outside in. Output depends
    /// only on `params` and `seed`.
    pub fn generate(params: StarfieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut r = params.radius + params.depth;
        let increment = if params.count == 0 {
            0.0
        } else {
            params.depth / params.count as f32
        };

        let mut stars = Vec::with_capacity(params.count);
        for i in 0..params.count {
            r -= increment * rng.random::<f32>();
            let phi = (1.0 - 2.0 * rng.random::<f32>()).clamp(-1.0, 1.0).acos();
            let theta = rng.random::<f32>() * TAU;
            let position = [
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
                r * phi.sin() * theta.cos(),
            ];
            stars.push(Star {
                position,
                size: (0.5 + 0.5 * rng.random::<f32>()) * params.factor,
                hue: i as f32 / params.count as f32,
                lightness: params.lightness_at(r),
            });
        }

        tracing::debug!(count = stars.len(), seed, "Generated starfield");
        Self { params, stars }
    }
}

/// A sphere bobbing in place with a wobbling, colour-shifting surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingSphere {
    pub radius: f32,
    pub position: Vec3,
    pub color: &'static str,
    /// Surface distortion amount, 0..1
    pub distort: f32,
    /// Distortion speed
    pub speed: f32,
    pub roughness: f32,
    /// Bobbing speed
    pub float_speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

/// Perspective camera looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            fov: 75.0,
            near: 0.1,
        }
    }
}

/// A world point mapped onto the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// Percent of viewport width from the left edge
    pub x: f32,
    /// Percent of viewport height from the top edge
    pub y: f32,
    /// Distance in front of the camera
    pub depth: f32,
    /// Fraction of half the viewport height covered by one world unit
    pub scale: f32,
}

impl Camera {
    /// Project `point` for a viewport of the given width/height ratio.
    ///
    /// Returns `None` for points behind the near plane or well outside
    /// the frame.
    pub fn project(&self, point: Vec3, aspect: f32) -> Option<ScreenPoint> {
        let rel = [
            point[0] - self.position[0],
            point[1] - self.position[1],
            point[2] - self.position[2],
        ];
        let depth = -rel[2];
        if depth < self.near {
            return None;
        }

        let half_height = depth * (self.fov.to_radians() / 2.0).tan();
        let ndc_x = rel[0] / (half_height * aspect);
        let ndc_y = rel[1] / half_height;
        if ndc_x.abs() > 1.1 || ndc_y.abs() > 1.1 {
            return None;
        }

        Some(ScreenPoint {
            x: (ndc_x + 1.0) * 50.0,
            y: (1.0 - ndc_y) * 50.0,
            depth,
            scale: 1.0 / half_height,
        })
    }
}

/// Everything on the decorative background.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub starfield: StarfieldParams,
    pub spheres: Vec<FloatingSphere>,
}

impl Scene {
    /// The portfolio background: soft ambient light, one point light, a
    /// starfield and a cyan and a violet sphere.
    pub fn portfolio() -> Self {
        Self {
            camera: Camera::default(),
            lights: vec![
                Light::Ambient { intensity: 0.5 },
                Light::Point {
                    position: [10.0, 10.0, 10.0],
                    intensity: 1.0,
                },
            ],
            starfield: StarfieldParams::default(),
            spheres: vec![
                FloatingSphere {
                    radius: 1.0,
                    position: [2.0, -1.0, -2.0],
                    color: "#0891b2",
                    distort: 0.4,
                    speed: 2.0,
                    roughness: 0.0,
                    float_speed: 2.0,
                    rotation_intensity: 1.0,
                    float_intensity: 1.0,
                },
                FloatingSphere {
                    radius: 0.5,
                    position: [-3.0, 2.0, -5.0],
                    color: "#7c3aed",
                    distort: 0.6,
                    speed: 4.0,
                    roughness: 0.0,
                    float_speed: 3.0,
                    rotation_intensity: 2.0,
                    float_intensity: 2.0,
                },
            ],
        }
    }

    /// Sum of light intensities reaching a surface facing the point light.
    pub fn total_intensity(&self) -> f32 {
        self.lights
            .iter()
            .map(|light| match light {
                Light::Ambient { intensity } | Light::Point { intensity, .. } => *intensity,
            })
            .sum()
    }
}

fn length(v: Vec3) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Angle in degrees a sphere leans at rest, toward the point light.
pub fn light_angle(scene: &Scene) -> f32 {
    scene
        .lights
        .iter()
        .find_map(|light| match light {
            Light::Point { position, .. } => Some(position[1].atan2(position[0]) * 180.0 / PI),
            Light::Ambient { .. } => None,
        })
        .unwrap_or(45.0)
}
