use crate::field::{
    Drift, ElementShape, FieldConfig, GridConfig, HueScheme, Interaction, InteractionMode,
    Oscillation, Sway, Volume,
};
use crate::geometry::{Axis, Camera, Plane, Vec3};
use crate::pulse::{PulseConfig, RippleConfig};

pub const BACKDROP_KEY: &str = "portfolio-backdrop";
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Starfield,
    Shapes,
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub background: &'static str,
    pub fog: Option<(f64, f64)>,
}

impl Backdrop {
    pub const ALL: [Self; 3] = [Self::Starfield, Self::Shapes, Self::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starfield => "starfield",
            Self::Shapes => "shapes",
            Self::Grid => "grid",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "starfield" => Some(Self::Starfield),
            "shapes" => Some(Self::Shapes),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Starfield => Self::Shapes,
            Self::Shapes => Self::Grid,
            Self::Grid => Self::Starfield,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.next().as_str();
        format!("Switch to {next} background")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Starfield => "✦",
            Self::Shapes => "◆",
            Self::Grid => "▦",
        }
    }

    pub fn field_config(self, mobile: bool) -> FieldConfig {
        match self {
            Self::Starfield => FieldConfig {
                count: if mobile { 800 } else { 2_500 },
                volume: Volume::Box {
                    center: Vec3::new(0.0, 0.0, -25.0),
                    half_extents: Vec3::new(10.0, 10.0, 25.0),
                },
                shape: ElementShape::Point,
                size_range: (0.02, 0.06),
                oscillation: Some(Oscillation {
                    amplitude: Vec3::new(0.05, 0.05, 0.0),
                    min_frequency: 0.2,
                    max_frequency: 0.8,
                }),
                drift: Some(Drift {
                    axis: Axis::Z,
                    min_speed: 2.5,
                    max_speed: 3.5,
                }),
                hue: HueScheme {
                    base: 0.6,
                    spread: 0.15,
                    rate: 0.01,
                    saturation: 0.35,
                    lightness: 0.9,
                },
                spin: 0.0,
                pointer_plane: Plane::FACING,
                interaction: Some(Interaction {
                    mode: InteractionMode::Repel,
                    radius: 1.5,
                    strength: 0.1,
                    max_offset: 0.6,
                    hover_scale: 1.0,
                }),
                pulses: None,
                ripple: Some(RippleConfig {
                    duration: 1.0,
                    wavenumber: 0.5,
                    speed: 5.0,
                    amplitude: 0.4,
                }),
                sway: Some(Sway {
                    amplitude: Vec3::new(0.08, 0.08, 0.3),
                    period: Vec3::new(10.0, 15.0, 20.0),
                }),
                grid: None,
                glow_smoothing: None,
            },
            Self::Shapes => FieldConfig {
                count: if mobile { 15 } else { 40 },
                volume: Volume::Sphere {
                    center: Vec3::ZERO,
                    radius: 8.0,
                },
                shape: ElementShape::Polygon,
                size_range: (0.5, 1.0),
                oscillation: Some(Oscillation {
                    amplitude: Vec3::new(0.1, 0.5, 0.1),
                    min_frequency: 1.5,
                    max_frequency: 2.5,
                }),
                drift: None,
                hue: HueScheme {
                    base: 0.0,
                    spread: 1.0,
                    rate: 0.06,
                    saturation: 0.8,
                    lightness: 0.6,
                },
                spin: 0.6,
                pointer_plane: Plane::FACING,
                interaction: Some(Interaction {
                    mode: InteractionMode::Repel,
                    radius: 1.2,
                    strength: 0.0,
                    max_offset: 0.0,
                    hover_scale: 1.2,
                }),
                pulses: None,
                ripple: None,
                sway: None,
                grid: None,
                glow_smoothing: Some(0.1),
            },
            Self::Grid => FieldConfig {
                count: if mobile { 50 } else { 300 },
                volume: Volume::Box {
                    center: Vec3::new(0.0, 0.1, 0.0),
                    half_extents: Vec3::new(30.0, 0.0, 30.0),
                },
                shape: ElementShape::Streak { length: 2.0 },
                size_range: (1.0, 1.0),
                oscillation: None,
                drift: Some(Drift {
                    axis: Axis::Z,
                    min_speed: 3.0,
                    max_speed: 15.0,
                }),
                hue: HueScheme {
                    base: 0.55,
                    spread: 0.1,
                    rate: 0.0,
                    saturation: 1.0,
                    lightness: 0.5,
                },
                spin: 0.0,
                pointer_plane: Plane::GROUND,
                interaction: None,
                pulses: Some(PulseConfig {
                    duration: 2.0,
                    growth: 10.0,
                }),
                ripple: None,
                sway: None,
                grid: Some(GridConfig {
                    size: if mobile { 40.0 } else { 60.0 },
                    divisions: if mobile { 40 } else { 60 },
                }),
                glow_smoothing: Some(1.0),
            },
        }
    }

    pub fn scene(self, mobile: bool) -> Scene {
        match self {
            Self::Starfield => Scene {
                camera: Camera::new(
                    Vec3::new(0.0, 0.0, 5.0),
                    Vec3::new(0.0, 0.0, -10.0),
                    if mobile { 75.0 } else { 60.0 },
                ),
                background: "#111827",
                fog: Some((20.0, 55.0)),
            },
            Self::Shapes => Scene {
                camera: Camera::new(
                    Vec3::new(0.0, 0.0, 15.0),
                    Vec3::ZERO,
                    if mobile { 75.0 } else { 20.0 },
                ),
                background: "#0f172a",
                fog: None,
            },
            Self::Grid => Scene {
                camera: Camera::new(
                    Vec3::new(0.0, 8.0, 16.0),
                    Vec3::ZERO,
                    if mobile { 75.0 } else { 60.0 },
                ),
                background: "#030318",
                fog: Some((15.0, 50.0)),
            },
        }
    }
}
