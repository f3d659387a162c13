use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::backdrop::Scene;
use crate::field::{AnimatedField, ElementShape, VisualElement};
use crate::geometry::{hsla, ndc_to_pixel, Camera, Projected, Vec3};
use crate::pulse::PulseRing;

const RING_SEGMENTS: usize = 32;
const GLOW_LAYERS: usize = 5;
const GLOW_RADIUS: f64 = 2.5;
const HIGHLIGHT_LIGHTEN: f64 = 0.1;
const MIN_DOT_PX: f64 = 0.6;
const STREAK_WIDTH_PX: f64 = 2.0;

/// Draws an `AnimatedField` onto a 2D canvas. Sizes are tracked in CSS
/// pixels; the backing store is scaled by the device pixel ratio.
pub struct Painter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d canvas context unavailable")?
            .dyn_into()?;

        Ok(Self {
            canvas,
            context,
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn resize(&mut self, width: f64, height: f64, pixel_ratio: f64) -> Result<(), JsValue> {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.canvas.set_width((self.width * ratio).round() as u32);
        self.canvas.set_height((self.height * ratio).round() as u32);
        self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn paint(&self, field: &AnimatedField, scene: &Scene) -> Result<(), JsValue> {
        let camera = scene.camera.with_aspect(self.width, self.height);
        let ctx = &self.context;

        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(scene.background);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        if let Some(grid) = field.grid() {
            self.paint_grid(&camera, grid.size, grid.divisions, field.grid_opacity());
        }

        if let (Some(glow), Some(hue)) = (field.glow(), field.glow_hue()) {
            self.paint_glow(&camera, glow, hue)?;
        }

        let mut visible: Vec<(Projected, &VisualElement)> = field
            .elements()
            .iter()
            .filter_map(|element| Some((camera.project(element.position)?, element)))
            .collect();
        visible.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

        let hue = field.config().hue;
        for (projected, element) in visible {
            let alpha = fog_alpha(scene.fog, projected.depth);
            if alpha <= 0.0 {
                continue;
            }
            let lightness = if element.highlighted {
                hue.lightness + HIGHLIGHT_LIGHTEN
            } else {
                hue.lightness
            };
            let color = hsla(element.hue, hue.saturation, lightness, alpha);

            match field.config().shape {
                ElementShape::Point => self.paint_point(&camera, projected, element, &color)?,
                ElementShape::Streak { length } => {
                    self.paint_streak(&camera, element, length, &color)
                }
                ElementShape::Polygon => self.paint_polygon(&camera, projected, element, &color)?,
            }
        }

        let ring_normal = field.config().pointer_plane.normal;
        let ring_hue = field.glow_hue().unwrap_or(hue.base);
        for ring in field.pulses() {
            self.paint_ring(&camera, ring, ring_normal, ring_hue);
        }

        Ok(())
    }

    fn to_pixel(&self, projected: Projected) -> (f64, f64) {
        ndc_to_pixel(projected.x, projected.y, self.width, self.height)
    }

    fn line(&self, camera: &Camera, a: Vec3, b: Vec3) {
        let Some((a, b)) = camera.clip_segment(a, b) else {
            return;
        };
        let (Some(start), Some(end)) = (camera.project(a), camera.project(b)) else {
            return;
        };
        let (x0, y0) = self.to_pixel(start);
        let (x1, y1) = self.to_pixel(end);
        self.context.move_to(x0, y0);
        self.context.line_to(x1, y1);
    }

    fn paint_grid(&self, camera: &Camera, size: f64, divisions: usize, opacity: f64) {
        if divisions == 0 {
            return;
        }
        let ctx = &self.context;
        let half = size / 2.0;
        let step = size / divisions as f64;

        ctx.set_line_width(1.0);
        ctx.set_global_alpha(opacity);
        ctx.set_stroke_style_str(&hsla(0.58, 1.0, 0.5, 1.0));
        ctx.begin_path();
        for index in 0..=divisions {
            let offset = -half + step * index as f64;
            self.line(camera, Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half));
            self.line(camera, Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset));
        }
        ctx.stroke();

        ctx.set_global_alpha(1.0);
    }

    fn paint_glow(&self, camera: &Camera, glow: Vec3, hue: f64) -> Result<(), JsValue> {
        let Some(projected) = camera.project(glow) else {
            return Ok(());
        };
        let (x, y) = self.to_pixel(projected);
        let radius = GLOW_RADIUS * camera.pixels_per_unit(projected.depth, self.height);
        let ctx = &self.context;

        ctx.set_fill_style_str(&hsla(hue, 1.0, 0.6, 0.08));
        for layer in (1..=GLOW_LAYERS).rev() {
            ctx.begin_path();
            ctx.arc(x, y, radius * layer as f64 / GLOW_LAYERS as f64, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }

    fn paint_point(
        &self,
        camera: &Camera,
        projected: Projected,
        element: &VisualElement,
        color: &str,
    ) -> Result<(), JsValue> {
        let (x, y) = self.to_pixel(projected);
        let radius = (element.size * element.scale * camera.pixels_per_unit(projected.depth, self.height))
            .max(MIN_DOT_PX);
        let ctx = &self.context;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, TAU)?;
        ctx.fill();
        Ok(())
    }

    fn paint_streak(&self, camera: &Camera, element: &VisualElement, length: f64, color: &str) {
        let tail = element.position - Vec3::new(0.0, 0.0, length);
        let ctx = &self.context;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(STREAK_WIDTH_PX);
        ctx.begin_path();
        self.line(camera, tail, element.position);
        ctx.stroke();
    }

    fn paint_polygon(
        &self,
        camera: &Camera,
        projected: Projected,
        element: &VisualElement,
        color: &str,
    ) -> Result<(), JsValue> {
        let (x, y) = self.to_pixel(projected);
        let radius = element.size * element.scale * camera.pixels_per_unit(projected.depth, self.height);
        // Rotation about the vertical axis squashes the outline horizontally.
        let squash = element.rotation.y.cos().abs().max(0.2);
        let ctx = &self.context;

        ctx.set_fill_style_str(color);
        ctx.begin_path();
        if element.sides < 3 {
            ctx.ellipse(x, y, radius * squash, radius, element.rotation.z, 0.0, TAU)?;
        } else {
            let sides = usize::from(element.sides);
            for corner in 0..=sides {
                let angle = element.rotation.z + TAU * corner as f64 / sides as f64;
                let px = x + angle.cos() * radius * squash;
                let py = y + angle.sin() * radius;
                if corner == 0 {
                    ctx.move_to(px, py);
                } else {
                    ctx.line_to(px, py);
                }
            }
            ctx.close_path();
        }
        ctx.fill();
        Ok(())
    }

    fn paint_ring(&self, camera: &Camera, ring: &PulseRing, normal: Vec3, hue: f64) {
        let (u, v) = plane_basis(normal);
        let ctx = &self.context;
        ctx.set_stroke_style_str(&hsla(hue, 1.0, 0.6, ring.opacity));
        ctx.set_line_width(STREAK_WIDTH_PX);
        ctx.begin_path();

        let point_at = |segment: usize| {
            let angle = TAU * segment as f64 / RING_SEGMENTS as f64;
            ring.origin + u * (angle.cos() * ring.radius) + v * (angle.sin() * ring.radius)
        };
        for segment in 0..RING_SEGMENTS {
            self.line(camera, point_at(segment), point_at(segment + 1));
        }
        ctx.stroke();
    }
}

fn fog_alpha(fog: Option<(f64, f64)>, depth: f64) -> f64 {
    match fog {
        Some((near, far)) if far > near => 1.0 - ((depth - near) / (far - near)).clamp(0.0, 1.0),
        _ => 1.0,
    }
}

fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    let seed = if normal.x.abs() < 0.9 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::UP
    };
    let u = normal.cross(seed).normalized();
    (u, normal.cross(u))
}
