use std::ops::{Add, AddAssign, Mul, Neg, Sub};

pub const EPSILON: f64 = 1e-4;

pub const REFERENCE_FPS: f64 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalized(self) -> Self {
        let length = self.length();
        if length < EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / length)
    }

    pub fn reject(self, normal: Self) -> Self {
        self - normal * self.dot(normal)
    }

    pub fn lerp(self, target: Self, factor: f64) -> Self {
        Self::new(
            lerp(self.x, target.x, factor),
            lerp(self.y, target.y, factor),
            lerp(self.z, target.z, factor),
        )
    }

    pub fn axis(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn rotated(self, angles: Vec3) -> Self {
        let (sin_x, cos_x) = angles.x.sin_cos();
        let (sin_y, cos_y) = angles.y.sin_cos();
        let (sin_z, cos_z) = angles.z.sin_cos();

        let about_x = Self::new(
            self.x,
            self.y * cos_x - self.z * sin_x,
            self.y * sin_x + self.z * cos_x,
        );
        let about_y = Self::new(
            about_x.x * cos_y + about_x.z * sin_y,
            about_x.y,
            -about_x.x * sin_y + about_x.z * cos_y,
        );
        Self::new(
            about_y.x * cos_z - about_y.y * sin_z,
            about_y.x * sin_z + about_y.y * cos_z,
            about_y.z,
        )
    }

    pub fn with_axis(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

pub fn frame_factor(per_frame: f64, delta_seconds: f64) -> f64 {
    let per_frame = per_frame.clamp(0.0, 1.0);
    if per_frame >= 1.0 {
        return 1.0;
    }
    let frames = (delta_seconds * REFERENCE_FPS).max(0.0);
    1.0 - (1.0 - per_frame).powf(frames)
}

pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

pub fn wrap_range(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= EPSILON {
        return min;
    }
    min + wrap_unit((value - min) / span) * span
}

pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> String {
    format!(
        "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
        wrap_unit(hue) * 360.0,
        saturation.clamp(0.0, 1.0) * 100.0,
        lightness.clamp(0.0, 1.0) * 100.0,
        alpha.clamp(0.0, 1.0)
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn offset_to(&self, point: Vec3) -> Option<Vec3> {
        let relative = point - self.origin;
        if relative.dot(self.direction) <= 0.0 {
            return None;
        }
        Some(relative.reject(self.direction))
    }

    pub fn at(&self, distance: f64) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Plane `normal · p + offset = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f64,
}

impl Plane {
    pub const GROUND: Self = Self {
        normal: Vec3::new(0.0, 1.0, 0.0),
        offset: 0.0,
    };

    pub const FACING: Self = Self {
        normal: Vec3::new(0.0, 0.0, 1.0),
        offset: 0.0,
    };

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denominator = self.normal.dot(ray.direction);
        if denominator.abs() < EPSILON {
            return None;
        }
        let distance = -(self.normal.dot(ray.origin) + self.offset) / denominator;
        if distance < 0.0 {
            return None;
        }
        Some(ray.at(distance))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, fov_y_degrees: f64) -> Self {
        Self {
            position,
            target,
            fov_y_degrees,
            aspect: 1.0,
            near: 0.1,
        }
    }

    pub fn with_aspect(mut self, width: f64, height: f64) -> Self {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
        self
    }

    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalized();
        let mut right = forward.cross(Vec3::UP).normalized();
        if right == Vec3::ZERO {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let up = right.cross(forward);
        (forward, right, up)
    }

    fn half_height(&self) -> f64 {
        (self.fov_y_degrees.to_radians() / 2.0).tan()
    }

    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let (forward, right, up) = self.basis();
        let relative = point - self.position;
        let depth = relative.dot(forward);
        if depth < self.near {
            return None;
        }
        let half_height = self.half_height();
        let half_width = half_height * self.aspect;
        Some(Projected {
            x: relative.dot(right) / (depth * half_width),
            y: relative.dot(up) / (depth * half_height),
            depth,
        })
    }

    pub fn depth_of(&self, point: Vec3) -> f64 {
        let (forward, _, _) = self.basis();
        (point - self.position).dot(forward)
    }

    pub fn pixels_per_unit(&self, depth: f64, viewport_height: f64) -> f64 {
        viewport_height / (2.0 * self.half_height() * depth.max(self.near))
    }

    pub fn clip_segment(&self, a: Vec3, b: Vec3) -> Option<(Vec3, Vec3)> {
        let limit = self.near + EPSILON;
        let depth_a = self.depth_of(a) - limit;
        let depth_b = self.depth_of(b) - limit;
        match (depth_a >= 0.0, depth_b >= 0.0) {
            (true, true) => Some((a, b)),
            (false, false) => None,
            (true, false) => Some((a, a.lerp(b, depth_a / (depth_a - depth_b)))),
            (false, true) => Some((b.lerp(a, depth_b / (depth_b - depth_a)), b)),
        }
    }

    pub fn ray_through(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let (forward, right, up) = self.basis();
        let half_height = self.half_height();
        let half_width = half_height * self.aspect;
        let direction =
            (forward + right * (ndc_x * half_width) + up * (ndc_y * half_height)).normalized();
        Ray {
            origin: self.position,
            direction,
        }
    }
}

pub fn pixel_to_ndc(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

pub fn ndc_to_pixel(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    ((x + 1.0) / 2.0 * width, (1.0 - y) / 2.0 * height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wrap_unit_stays_half_open() {
        assert_eq!(wrap_unit(1.0), 0.0);
        assert!(approx(wrap_unit(1.25), 0.25));
        assert!(approx(wrap_unit(-0.25), 0.75));
        assert!(wrap_unit(-1e-18) < 1.0);
    }

    #[test]
    fn wrap_range_folds_back_to_opposite_boundary() {
        assert!(approx(wrap_range(26.0, -25.0, 25.0), -24.0));
        assert!(approx(wrap_range(-26.0, -25.0, 25.0), 24.0));
        assert_eq!(wrap_range(3.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn frame_factor_matches_per_frame_value_at_reference_rate() {
        assert!(approx(frame_factor(0.2, 1.0 / REFERENCE_FPS), 0.2));
        assert!(approx(frame_factor(1.0, 0.5), 1.0));
        assert_eq!(frame_factor(0.2, 0.0), 0.0);

        let two_frames = frame_factor(0.2, 2.0 / REFERENCE_FPS);
        assert!(approx(two_frames, 1.0 - 0.8 * 0.8));
    }

    #[test]
    fn projection_and_ray_are_inverse() {
        let camera = Camera::new(Vec3::new(0.0, 8.0, 16.0), Vec3::ZERO, 60.0).with_aspect(1600.0, 900.0);

        for &(x, y) in &[(0.0, 0.0), (0.5, -0.3), (-0.9, 0.9)] {
            let ray = camera.ray_through(x, y);
            let projected = camera.project(ray.at(10.0)).expect("point in front of camera");
            assert!((projected.x - x).abs() < 1e-9, "x {} vs {}", projected.x, x);
            assert!((projected.y - y).abs() < 1e-9, "y {} vs {}", projected.y, y);
        }
    }

    #[test]
    fn points_behind_camera_are_not_projected() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 60.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn center_ray_hits_ground_at_look_target() {
        let camera = Camera::new(Vec3::new(0.0, 8.0, 16.0), Vec3::ZERO, 60.0);
        let hit = Plane::GROUND
            .intersect(&camera.ray_through(0.0, 0.0))
            .expect("ray points at the ground");
        assert!(hit.length() < 1e-9);
    }

    #[test]
    fn parallel_or_receding_rays_miss_the_plane() {
        let parallel = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
        };
        assert!(Plane::GROUND.intersect(&parallel).is_none());

        let receding = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::UP,
        };
        assert!(Plane::GROUND.intersect(&receding).is_none());
    }

    #[test]
    fn pixel_mapping_round_trips_corners() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(ndc_to_pixel(0.0, 0.0, 800.0, 600.0), (400.0, 300.0));
        assert_eq!(pixel_to_ndc(10.0, 10.0, 0.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn hsla_formats_css_color() {
        assert_eq!(hsla(0.5, 0.8, 0.6, 1.0), "hsla(180.0, 80.0%, 60.0%, 1.000)");
    }

    #[test]
    fn segments_are_clipped_at_the_near_plane() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 60.0);
        let front = Vec3::new(1.0, 0.0, 0.0);
        let behind = Vec3::new(1.0, 0.0, 10.0);

        let (a, b) = camera.clip_segment(front, behind).expect("partly visible");
        assert_eq!(a, front);
        assert!((camera.depth_of(b) - camera.near - EPSILON).abs() < 1e-9);
        assert!(camera.project(b).is_some());

        assert!(camera.clip_segment(behind, behind + Vec3::UP).is_none());
    }

    #[test]
    fn farther_points_cover_fewer_pixels() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 90.0);
        assert!(approx(camera.pixels_per_unit(1.0, 800.0), 400.0));
        assert!(camera.pixels_per_unit(10.0, 800.0) < camera.pixels_per_unit(1.0, 800.0));
    }

    #[test]
    fn rotation_turns_axes_into_each_other() {
        let quarter = std::f64::consts::FRAC_PI_2;
        let turned = Vec3::new(1.0, 0.0, 0.0).rotated(Vec3::new(0.0, 0.0, quarter));
        assert!((turned - Vec3::UP).length() < 1e-9);

        let point = Vec3::new(1.0, 2.0, 3.0);
        let spun = point.rotated(Vec3::new(0.3, -1.1, 2.0));
        assert!(approx(spun.length(), point.length()));
        assert_eq!(point.rotated(Vec3::ZERO), point);
    }

    #[test]
    fn ray_offset_is_perpendicular_and_ignores_points_behind() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let offset = ray.offset_to(Vec3::new(1.0, -2.0, -30.0)).expect("in front");
        assert_eq!(offset, Vec3::new(1.0, -2.0, 0.0));
        assert!(ray.offset_to(Vec3::new(1.0, 0.0, 11.0)).is_none());
    }
}
