use crate::geometry::{frame_factor, wrap_range, wrap_unit, Axis, Plane, Ray, Vec3, EPSILON};
use crate::pulse::{PulseConfig, PulseRing, Pulses, Ripple, RippleConfig};

pub const POLYGON_SIDES: [u8; 5] = [3, 4, 0, 5, 6]; // 0 is a circle
const HOVER_SMOOTHING: f64 = 0.1;
const PRESS_WOBBLE: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Volume {
    Sphere { center: Vec3, radius: f64 },
    Box { center: Vec3, half_extents: Vec3 },
}

impl Volume {
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec3 {
        match *self {
            Self::Sphere { center, radius } => {
                let theta = rng.f64() * std::f64::consts::TAU;
                let phi = (rng.f64() * 2.0 - 1.0).acos();
                let distance = radius.max(0.0) * rng.f64().cbrt();
                center
                    + Vec3::new(
                        distance * phi.sin() * theta.cos(),
                        distance * phi.sin() * theta.sin(),
                        distance * phi.cos(),
                    )
            }
            Self::Box {
                center,
                half_extents,
            } => {
                center
                    + Vec3::new(
                        (rng.f64() * 2.0 - 1.0) * half_extents.x,
                        (rng.f64() * 2.0 - 1.0) * half_extents.y,
                        (rng.f64() * 2.0 - 1.0) * half_extents.z,
                    )
            }
        }
    }

    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        match *self {
            Self::Sphere { center, radius } => {
                let middle = center.axis(axis);
                (middle - radius, middle + radius)
            }
            Self::Box {
                center,
                half_extents,
            } => {
                let middle = center.axis(axis);
                let half = half_extents.axis(axis).abs();
                (middle - half, middle + half)
            }
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            Self::Sphere { center, .. } | Self::Box { center, .. } => center,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        match *self {
            Self::Sphere { center, radius } => (point - center).length() <= radius + EPSILON,
            Self::Box { .. } => [Axis::X, Axis::Y, Axis::Z].iter().all(|&axis| {
                let (min, max) = self.extent(axis);
                let value = point.axis(axis);
                value >= min - EPSILON && value <= max + EPSILON
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementShape {
    Point,
    Streak { length: f64 },
    Polygon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub amplitude: Vec3,
    pub min_frequency: f64,
    pub max_frequency: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub axis: Axis,
    pub min_speed: f64,
    pub max_speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sway {
    pub amplitude: Vec3,
    pub period: Vec3,
}

impl Sway {
    fn angles(&self, elapsed: f64) -> Vec3 {
        let angle = |amplitude: f64, period: f64| {
            if period.abs() < EPSILON {
                0.0
            } else {
                amplitude * (elapsed / period).sin()
            }
        };
        Vec3::new(
            angle(self.amplitude.x, self.period.x),
            angle(self.amplitude.y, self.period.y),
            angle(self.amplitude.z, self.period.z),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueScheme {
    pub base: f64,
    pub spread: f64,
    pub rate: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Repel,
    Attract,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub radius: f64,
    pub strength: f64,
    pub max_offset: f64,
    pub hover_scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub size: f64,
    pub divisions: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub volume: Volume,
    pub shape: ElementShape,
    pub size_range: (f64, f64),
    pub oscillation: Option<Oscillation>,
    pub drift: Option<Drift>,
    pub hue: HueScheme,
    pub spin: f64,
    pub pointer_plane: Plane,
    pub interaction: Option<Interaction>,
    pub pulses: Option<PulseConfig>,
    pub ripple: Option<RippleConfig>,
    pub sway: Option<Sway>,
    pub grid: Option<GridConfig>,
    pub glow_smoothing: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualElement {
    pub base: Vec3,
    pub position: Vec3,
    pub base_hue: f64,
    pub hue: f64,
    pub size: f64,
    pub phase: f64,
    pub frequency: Vec3,
    pub speed: f64,
    pub spin: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
    pub sides: u8,
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ray: Option<Ray>,
    pub point: Option<Vec3>,
    pub pressed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Aim { ray: Ray, point: Option<Vec3> },
    Press,
    Release,
    Click,
    Leave,
}

fn range(rng: &mut fastrand::Rng, (min, max): (f64, f64)) -> f64 {
    if max <= min {
        return min;
    }
    min + rng.f64() * (max - min)
}

/// Displacement applied to an element at `position` by the pointer ray,
/// perpendicular to the ray. The magnitude falls off inversely with distance,
/// is capped at `max_offset` and fades to zero at the interaction radius.
pub fn interaction_offset(position: Vec3, ray: &Ray, interaction: &Interaction) -> Vec3 {
    let Some(planar) = ray.offset_to(position) else {
        return Vec3::ZERO;
    };
    let distance = planar.length();
    if distance >= interaction.radius || interaction.radius <= EPSILON {
        return Vec3::ZERO;
    }

    let guarded = distance.max(EPSILON);
    let falloff = 1.0 - distance / interaction.radius;
    let magnitude = (interaction.strength / guarded).min(interaction.max_offset) * falloff;
    let direction = planar * (1.0 / guarded);

    match interaction.mode {
        InteractionMode::Repel => direction * magnitude,
        InteractionMode::Attract => -(direction * magnitude),
    }
}

#[derive(Clone, Debug)]
pub struct AnimatedField {
    config: FieldConfig,
    elements: Vec<VisualElement>,
    pulses: Option<Pulses>,
    ripple: Option<Ripple>,
    glow: Option<Vec3>,
    grid_opacity: f64,
}

impl AnimatedField {
    pub fn new(config: FieldConfig, rng: &mut fastrand::Rng) -> Self {
        let mut elements = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let base = config.volume.sample(rng);
            let base_hue = wrap_unit(config.hue.base + rng.f64() * config.hue.spread);
            let (min_frequency, max_frequency) = config
                .oscillation
                .map(|oscillation| (oscillation.min_frequency, oscillation.max_frequency))
                .unwrap_or((0.0, 0.0));
            let frequency = Vec3::new(
                range(rng, (min_frequency, max_frequency)),
                range(rng, (min_frequency, max_frequency)),
                range(rng, (min_frequency, max_frequency)),
            );
            let speed = config
                .drift
                .map(|drift| range(rng, (drift.min_speed, drift.max_speed)))
                .unwrap_or(0.0);
            let spin = Vec3::new(
                range(rng, (-config.spin, config.spin)),
                range(rng, (-config.spin, config.spin)),
                range(rng, (-config.spin, config.spin)),
            );

            elements.push(VisualElement {
                base,
                position: base,
                base_hue,
                hue: base_hue,
                size: range(rng, config.size_range),
                phase: rng.f64() * std::f64::consts::TAU,
                frequency,
                speed,
                spin,
                rotation: Vec3::ZERO,
                scale: 1.0,
                sides: POLYGON_SIDES[rng.usize(..POLYGON_SIDES.len())],
                highlighted: false,
            });
        }

        Self {
            config,
            elements,
            pulses: config.pulses.map(Pulses::new),
            ripple: None,
            glow: None,
            grid_opacity: grid_opacity_at(0.0),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn on_frame(&mut self, elapsed: f64, delta: f64, pointer: &PointerState) {
        let config = self.config;
        let hover_factor = frame_factor(HOVER_SMOOTHING, delta);
        let sway = config.sway.map(|sway| sway.angles(elapsed));
        let pivot = config.volume.center();

        if let Some(ripple_config) = config.ripple {
            let finished = self
                .ripple
                .as_mut()
                .is_some_and(|ripple| !ripple.advance(delta, &ripple_config));
            if finished {
                self.ripple = None;
            }
        }
        let ripple = self.ripple.zip(config.ripple);

        for element in &mut self.elements {
            let mut position = element.base;

            if let Some(drift) = config.drift {
                let (min, max) = config.volume.extent(drift.axis);
                let travelled = element.base.axis(drift.axis) + element.speed * elapsed;
                position = position.with_axis(drift.axis, wrap_range(travelled, min, max));
            }

            if let Some(oscillation) = config.oscillation {
                let amplitude = oscillation.amplitude;
                position += Vec3::new(
                    amplitude.x * (element.frequency.x * elapsed + element.phase).sin(),
                    amplitude.y * (element.frequency.y * elapsed + element.phase).cos(),
                    amplitude.z * (element.frequency.z * elapsed + element.phase).sin(),
                );
            }

            if let Some(angles) = sway {
                position = pivot + (position - pivot).rotated(angles);
            }

            if let Some((ripple, ripple_config)) = ripple {
                position += ripple.offset(position, &ripple_config);
            }

            let mut highlighted = false;
            if let (Some(interaction), Some(ray)) = (config.interaction, pointer.ray) {
                highlighted = ray
                    .offset_to(position)
                    .is_some_and(|offset| offset.length() < interaction.radius);
                position += interaction_offset(position, &ray, &interaction);
            }

            let target_scale = match config.interaction {
                Some(interaction) if highlighted => {
                    let wobble = if pointer.pressed {
                        PRESS_WOBBLE * (elapsed * 2.0).sin()
                    } else {
                        0.0
                    };
                    interaction.hover_scale + wobble
                }
                _ => 1.0,
            };

            element.position = position;
            element.hue = wrap_unit(element.base_hue + config.hue.rate * elapsed);
            element.rotation = element.spin * elapsed;
            element.scale += (target_scale - element.scale) * hover_factor;
            element.highlighted = highlighted;
        }

        if let (Some(smoothing), Some(point)) = (config.glow_smoothing, pointer.point) {
            let current = self.glow.unwrap_or(point);
            self.glow = Some(current.lerp(point, frame_factor(smoothing, delta)));
        }

        if let Some(pulses) = self.pulses.as_mut() {
            pulses.on_frame(delta);
        }

        self.grid_opacity = grid_opacity_at(elapsed);
    }

    pub fn on_pulse(&mut self, origin: Vec3) {
        if let Some(pulses) = self.pulses.as_mut() {
            pulses.spawn(origin);
        }
        if self.config.ripple.is_some() {
            self.ripple = Some(Ripple::new(origin));
        }
    }

    /// Applies one pointer event. Only a click responds with a pulse; a
    /// touch only aims, since the browser follows a tap with a click.
    pub fn on_input(&mut self, pointer: &mut PointerState, input: PointerInput) {
        match input {
            PointerInput::Aim { ray, point } => {
                pointer.ray = Some(ray);
                pointer.point = point;
            }
            PointerInput::Press => pointer.pressed = true,
            PointerInput::Release => pointer.pressed = false,
            PointerInput::Click => {
                if let Some(point) = pointer.point {
                    self.on_pulse(point);
                }
            }
            PointerInput::Leave => *pointer = PointerState::default(),
        }
    }

    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn pulses(&self) -> &[PulseRing] {
        self.pulses.as_ref().map(Pulses::rings).unwrap_or(&[])
    }

    pub fn ripple(&self) -> Option<Ripple> {
        self.ripple
    }

    pub fn glow(&self) -> Option<Vec3> {
        self.glow
    }

    pub fn glow_hue(&self) -> Option<f64> {
        let glow = self.glow?;
        let (min, max) = self.config.volume.extent(Axis::X);
        let width = (max - min).max(EPSILON);
        Some(wrap_unit((glow.x - min) / width))
    }

    pub fn grid(&self) -> Option<GridConfig> {
        self.config.grid
    }

    pub fn grid_opacity(&self) -> f64 {
        self.grid_opacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn grid_opacity_at(elapsed: f64) -> f64 {
    0.3 + 0.2 * ((elapsed * 0.5).sin() * 0.5 + 0.5)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn derived_hue_stays_in_unit_range(
            seed in any::<u64>(),
            base in -10.0f64..10.0,
            rate in -5.0f64..5.0,
            elapsed in 0.0f64..100_000.0,
        ) {
            let config = FieldConfig {
                count: 8,
                volume: Volume::Sphere { center: Vec3::ZERO, radius: 8.0 },
                shape: ElementShape::Polygon,
                size_range: (0.5, 1.0),
                oscillation: None,
                drift: None,
                hue: HueScheme { base, spread: 1.0, rate, saturation: 0.8, lightness: 0.6 },
                spin: 0.6,
                pointer_plane: Plane::FACING,
                interaction: None,
                pulses: None,
                ripple: None,
                sway: None,
                grid: None,
                glow_smoothing: None,
            };
            let mut field = AnimatedField::new(config, &mut fastrand::Rng::with_seed(seed));
            field.on_frame(elapsed, 0.016, &PointerState::default());
            for element in field.elements() {
                prop_assert!(element.hue >= 0.0 && element.hue < 1.0, "hue {}", element.hue);
            }
        }

        #[test]
        fn interaction_offset_is_bounded_near_zero_distance(
            dx in -1e-3f64..1e-3,
            dy in -1e-3f64..1e-3,
            dz in -5.0f64..5.0,
            strength in 0.0f64..100.0,
        ) {
            let interaction = Interaction {
                mode: InteractionMode::Repel,
                radius: 2.0,
                strength,
                max_offset: 1.0,
                hover_scale: 1.2,
            };
            let ray = Ray {
                origin: Vec3::new(0.0, 0.0, 10.0),
                direction: Vec3::new(0.0, 0.0, -1.0),
            };
            let offset = interaction_offset(Vec3::new(dx, dy, dz), &ray, &interaction);
            prop_assert!(offset.x.is_finite() && offset.y.is_finite() && offset.z.is_finite());
            prop_assert!(offset.length() <= interaction.max_offset + 1e-9);
        }
    }
}
