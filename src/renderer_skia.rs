use crate::models::{Point, ViewBox};
use crate::renderer::{render_frame, CurveFrame, DrawingSurface, Style};
use crate::utils::{calculate_viewbox, save_png_with_quality};
use anyhow::Result;
use log::debug;
use palette::Srgba;
use tiny_skia::*;

/// Raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

impl PixmapSurface {
    /// Allocate a pixmap covering `viewbox` at the given scale and fill it
    /// with `background`.
    pub fn new(viewbox: ViewBox, scale: f32, background: Option<Srgba<u8>>) -> Result<Self> {
        let width = (viewbox.width * scale as f64).ceil() as u32;
        let height = (viewbox.height * scale as f64).ceil() as u32;

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow::anyhow!("Failed to create {width}x{height} pixmap"))?;

        if let Some(color) = background {
            let (r, g, b, a) = color.into_components();
            if a > 0 {
                pixmap.fill(Color::from_rgba8(r, g, b, a));
            }
        }

        let transform = Transform::from_translate(-viewbox.min_x as f32, -viewbox.min_y as f32)
            .post_scale(scale, scale);

        Ok(Self { pixmap, transform })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

fn paint_for(color: Srgba<u8>) -> Paint<'static> {
    let (r, g, b, a) = color.into_components();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl DrawingSurface for PixmapSurface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Srgba<u8>) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) else {
            return;
        };
        self.pixmap
            .fill_path(&path, &paint_for(color), FillRule::Winding, self.transform, None);
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Srgba<u8>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, self.transform, None);
    }
}

/// Rasterize a frame. `dpi` scales relative to 96 DPI.
pub fn render_to_pixmap(
    frame: &CurveFrame,
    style: &Style,
    background: Option<Srgba<u8>>,
    dpi: Option<u32>,
) -> Result<Pixmap> {
    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let viewbox = calculate_viewbox(frame);
    let mut surface = PixmapSurface::new(viewbox, scale, background)?;
    render_frame(frame, style, &mut surface);

    debug!(
        "rendered {} curve samples into {}x{} pixmap",
        frame.curve.len(),
        surface.pixmap().width(),
        surface.pixmap().height()
    );
    Ok(surface.into_pixmap())
}

pub fn render_to_png(
    frame: &CurveFrame,
    style: &Style,
    output_path: &std::path::Path,
    background: Option<Srgba<u8>>,
    quality: u8,
    dpi: Option<u32>,
) -> Result<()> {
    let pixmap = render_to_pixmap(frame, style, background, dpi)?;
    save_png_with_quality(&pixmap, output_path, quality)?;
    Ok(())
}
