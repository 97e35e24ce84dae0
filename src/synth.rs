//! Default Icon Synthesizer
//!
//! Draws the built-in 1024x1024 design used when no source image is supplied:
//! a vertical teal gradient, two signal rings, a stylized "A" glyph with accent
//! cut-outs, a three-step bar chart and two adaptive-rate arrows.
//!
//! Drawing goes through an anti-aliased vector canvas, then gets flattened to
//! a straight-alpha RGBA raster. Every layer is composited source-over onto an
//! opaque background, so the result is fully opaque.

use image::{Rgba, RgbaImage};
use std::f32::consts::PI;
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::error::IconError;
use crate::export::write_png;
use crate::CANONICAL_EDGE;

type Rgba8 = [u8; 4];

const GRADIENT_TOP: [u8; 3] = [7, 56, 118];
const GRADIENT_BOTTOM: [u8; 3] = [0, 142, 152];

/// Bounding box, start/end angle in degrees (clockwise from 3 o'clock),
/// stroke width and colour for each ring.
const RINGS: [([f32; 4], f32, f32, f32, Rgba8); 2] = [
    ([52.0, 120.0, 972.0, 1040.0], 212.0, 330.0, 34.0, [255, 255, 255, 70]),
    ([126.0, 184.0, 900.0, 964.0], 214.0, 328.0, 30.0, [255, 255, 255, 110]),
];

const GLYPH: [(f32, f32); 7] = [
    (512.0, 190.0),
    (760.0, 810.0),
    (664.0, 810.0),
    (592.0, 620.0),
    (432.0, 620.0),
    (360.0, 810.0),
    (264.0, 810.0),
];
const GLYPH_COLOR: Rgba8 = [255, 255, 255, 248];

const ACCENT_TRIANGLE: [(f32, f32); 3] = [(512.0, 340.0), (570.0, 500.0), (454.0, 500.0)];
const ACCENT_BAR: [f32; 4] = [446.0, 560.0, 578.0, 600.0];
const ACCENT_COLOR: Rgba8 = [0, 126, 144, 255];

const BAR_BASELINE: f32 = 860.0;
const BAR_WIDTH: f32 = 34.0;
const BAR_RADIUS: f32 = 8.0;
/// Left edge, height and colour of each bar.
const BARS: [(f32, f32, Rgba8); 3] = [
    (404.0, 38.0, [255, 255, 255, 230]),
    (466.0, 50.0, [255, 255, 255, 245]),
    (534.0, 62.0, [255, 255, 255, 255]),
];

const ARROW_UP: [(f32, f32); 7] = [
    (620.0, 804.0),
    (658.0, 804.0),
    (658.0, 770.0),
    (686.0, 770.0),
    (639.0, 716.0),
    (592.0, 770.0),
    (620.0, 770.0),
];
const ARROW_UP_COLOR: Rgba8 = [130, 255, 196, 245];

const ARROW_DOWN: [(f32, f32); 7] = [
    (338.0, 740.0),
    (376.0, 740.0),
    (376.0, 774.0),
    (404.0, 774.0),
    (357.0, 828.0),
    (310.0, 774.0),
    (338.0, 774.0),
];
const ARROW_DOWN_COLOR: Rgba8 = [255, 205, 132, 245];

/// Render the built-in design at the canonical edge length.
pub fn render_default_icon() -> Result<RgbaImage, IconError> {
    let mut canvas = Canvas::new(CANONICAL_EDGE)?;

    canvas.vertical_gradient(GRADIENT_TOP, GRADIENT_BOTTOM);

    for (bbox, start, end, width, color) in RINGS {
        canvas.arc(bbox, start, end, width, color);
    }

    canvas.polygon(&GLYPH, GLYPH_COLOR);
    canvas.polygon(&ACCENT_TRIANGLE, ACCENT_COLOR);
    canvas.rect(ACCENT_BAR, ACCENT_COLOR);

    for (x, height, color) in BARS {
        canvas.rounded_rect(
            [x, BAR_BASELINE - height, x + BAR_WIDTH, BAR_BASELINE],
            BAR_RADIUS,
            color,
        );
    }

    canvas.polygon(&ARROW_UP, ARROW_UP_COLOR);
    canvas.polygon(&ARROW_DOWN, ARROW_DOWN_COLOR);

    Ok(canvas.into_rgba())
}

/// Render the built-in design and save it as a PNG at `path`, overwriting.
pub fn write_default_source(path: &Path) -> Result<(), IconError> {
    let image = render_default_icon()?;
    write_png(&image, path)?;
    tracing::info!(path = %path.display(), "Synthesized default source image");
    Ok(())
}

struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    fn new(edge: u32) -> Result<Self, IconError> {
        let pixmap = Pixmap::new(edge, edge)
            .ok_or_else(|| IconError::Render(format!("cannot allocate {edge}x{edge} canvas")))?;
        Ok(Self { pixmap })
    }

    fn paint(color: Rgba8) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
        paint.anti_alias = true;
        paint
    }

    /// One opaque row at a time, interpolated between `top` and `bottom`.
    fn vertical_gradient(&mut self, top: [u8; 3], bottom: [u8; 3]) {
        let width = self.pixmap.width() as f32;
        let last = (self.pixmap.height() - 1).max(1) as f32;
        for y in 0..self.pixmap.height() {
            let t = y as f32 / last;
            let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
            let mut paint = Self::paint([
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                255,
            ]);
            paint.anti_alias = false;
            if let Some(row) = Rect::from_xywh(0.0, y as f32, width, 1.0) {
                self.pixmap.fill_rect(row, &paint, Transform::identity(), None);
            }
        }
    }

    /// Elliptical arc inscribed in `bbox`; the stroke lies inside the box.
    fn arc(&mut self, bbox: [f32; 4], start_deg: f32, end_deg: f32, width: f32, color: Rgba8) {
        let [x0, y0, x1, y1] = bbox;
        let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        let rx = (x1 - x0) / 2.0 - width / 2.0;
        let ry = (y1 - y0) / 2.0 - width / 2.0;

        let steps = (end_deg - start_deg).abs().ceil().max(1.0) as u32;
        let mut pb = PathBuilder::new();
        for i in 0..=steps {
            let deg = start_deg + (end_deg - start_deg) * i as f32 / steps as f32;
            let rad = deg * PI / 180.0;
            let (x, y) = (cx + rx * rad.cos(), cy + ry * rad.sin());
            if i == 0 {
                pb.move_to(x, y);
            } else {
                pb.line_to(x, y);
            }
        }

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &Self::paint(color), &stroke, Transform::identity(), None);
        }
    }

    fn polygon(&mut self, points: &[(f32, f32)], color: Rgba8) {
        let Some((&(x, y), rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        for &(x, y) in rest {
            pb.line_to(x, y);
        }
        pb.close();
        self.fill(pb, color);
    }

    fn rect(&mut self, [x0, y0, x1, y1]: [f32; 4], color: Rgba8) {
        if let Some(rect) = Rect::from_ltrb(x0, y0, x1, y1) {
            self.pixmap
                .fill_rect(rect, &Self::paint(color), Transform::identity(), None);
        }
    }

    fn rounded_rect(&mut self, [x0, y0, x1, y1]: [f32; 4], radius: f32, color: Rgba8) {
        let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
        // Cubic approximation of a quarter circle.
        let k = r * 0.552_284_8;
        let mut pb = PathBuilder::new();
        pb.move_to(x0 + r, y0);
        pb.line_to(x1 - r, y0);
        pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
        pb.line_to(x1, y1 - r);
        pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
        pb.line_to(x0 + r, y1);
        pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
        pb.line_to(x0, y0 + r);
        pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
        pb.close();
        self.fill(pb, color);
    }

    fn fill(&mut self, pb: PathBuilder, color: Rgba8) {
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn into_rgba(self) -> RgbaImage {
        let mut out = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in out.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}
