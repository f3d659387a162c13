use crate::geometry::{Vec3, EPSILON};

pub const MAX_RINGS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    pub duration: f64,
    pub growth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseRing {
    pub origin: Vec3,
    pub age: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl PulseRing {
    fn new(origin: Vec3) -> Self {
        Self {
            origin,
            age: 0.0,
            radius: 0.0,
            opacity: 1.0,
        }
    }

    fn advance(&mut self, delta: f64, config: &PulseConfig) {
        self.age += delta.max(0.0);
        self.radius = self.age * config.growth;
        self.opacity = if config.duration > 0.0 {
            1.0 - self.age / config.duration
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug)]
pub struct Pulses {
    config: PulseConfig,
    rings: Vec<PulseRing>,
}

impl Pulses {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            rings: Vec::with_capacity(MAX_RINGS),
        }
    }

    pub fn spawn(&mut self, origin: Vec3) {
        if self.rings.len() >= MAX_RINGS {
            self.rings.remove(0);
        }
        self.rings.push(PulseRing::new(origin));
    }

    pub fn on_frame(&mut self, delta: f64) {
        let config = self.config;
        for ring in &mut self.rings {
            ring.advance(delta, &config);
        }
        self.rings.retain(|ring| ring.opacity > 0.0);
    }

    pub fn rings(&self) -> &[PulseRing] {
        &self.rings
    }

    pub fn clear(&mut self) {
        self.rings.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    pub duration: f64,
    pub wavenumber: f64,
    pub speed: f64,
    pub amplitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec3,
    pub age: f64,
}

impl Ripple {
    pub fn new(origin: Vec3) -> Self {
        Self { origin, age: 0.0 }
    }

    pub fn advance(&mut self, delta: f64, config: &RippleConfig) -> bool {
        self.age += delta.max(0.0);
        self.age < config.duration
    }

    pub fn offset(&self, position: Vec3, config: &RippleConfig) -> Vec3 {
        let away = position - self.origin;
        let distance = away.length();
        if distance < EPSILON || self.age >= config.duration {
            return Vec3::ZERO;
        }
        let fade = 1.0 - self.age / config.duration;
        let wave = (distance * config.wavenumber - self.age * config.speed).sin();
        away * (config.amplitude * wave * fade / distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SECOND: PulseConfig = PulseConfig {
        duration: 1.0,
        growth: 10.0,
    };

    #[test]
    fn new_ring_is_opaque_and_unscaled() {
        let mut pulses = Pulses::new(ONE_SECOND);
        pulses.spawn(Vec3::new(1.0, 0.1, -2.0));

        let ring = pulses.rings()[0];
        assert_eq!(ring.opacity, 1.0);
        assert_eq!(ring.radius, 0.0);
        assert_eq!(ring.origin, Vec3::new(1.0, 0.1, -2.0));
    }

    #[test]
    fn ring_grows_and_fades_linearly() {
        let mut pulses = Pulses::new(ONE_SECOND);
        pulses.spawn(Vec3::ZERO);
        pulses.on_frame(0.25);

        let ring = pulses.rings()[0];
        assert_eq!(ring.age, 0.25);
        assert_eq!(ring.radius, 2.5);
        assert_eq!(ring.opacity, 0.75);
    }

    #[test]
    fn ring_is_removed_at_the_duration_boundary() {
        let mut pulses = Pulses::new(ONE_SECOND);
        pulses.spawn(Vec3::ZERO);
        pulses.on_frame(0.5);
        assert_eq!(pulses.rings().len(), 1);

        pulses.on_frame(0.5);
        assert!(pulses.rings().is_empty());
    }

    #[test]
    fn rings_expire_independently() {
        let mut pulses = Pulses::new(ONE_SECOND);
        pulses.spawn(Vec3::ZERO);
        pulses.on_frame(0.75);
        pulses.spawn(Vec3::UP);
        pulses.on_frame(0.25);

        assert_eq!(pulses.rings().len(), 1);
        assert_eq!(pulses.rings()[0].origin, Vec3::UP);
    }

    #[test]
    fn full_collection_drops_oldest_ring() {
        let mut pulses = Pulses::new(ONE_SECOND);
        for index in 0..=MAX_RINGS {
            pulses.spawn(Vec3::new(index as f64, 0.0, 0.0));
        }
        assert_eq!(pulses.rings().len(), MAX_RINGS);
        assert_eq!(pulses.rings()[0].origin.x, 1.0);
    }

    #[test]
    fn zero_duration_rings_vanish_on_first_update() {
        let mut pulses = Pulses::new(PulseConfig {
            duration: 0.0,
            growth: 1.0,
        });
        pulses.spawn(Vec3::ZERO);
        pulses.on_frame(0.0);
        assert!(pulses.rings().is_empty());
    }

    const WAVE: RippleConfig = RippleConfig {
        duration: 1.0,
        wavenumber: 0.5,
        speed: 5.0,
        amplitude: 0.4,
    };

    #[test]
    fn ripple_moves_elements_along_the_line_from_its_origin() {
        let mut ripple = Ripple::new(Vec3::ZERO);
        assert!(ripple.advance(0.1, &WAVE));

        let position = Vec3::new(3.0, 0.0, 0.0);
        let offset = ripple.offset(position, &WAVE);
        let expected = 0.4 * (1.5_f64 - 0.5).sin() * 0.9;
        assert!((offset.x - expected).abs() < 1e-12);
        assert_eq!((offset.y, offset.z), (0.0, 0.0));
        assert!(offset.length() <= WAVE.amplitude);

        assert_eq!(ripple.offset(Vec3::ZERO, &WAVE), Vec3::ZERO);
    }

    #[test]
    fn ripple_ends_after_its_duration() {
        let mut ripple = Ripple::new(Vec3::ZERO);
        assert!(ripple.advance(0.5, &WAVE));
        assert!(!ripple.advance(0.5, &WAVE));
        assert_eq!(ripple.offset(Vec3::new(3.0, 0.0, 0.0), &WAVE), Vec3::ZERO);
    }
}
