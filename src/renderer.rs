use crate::color_utils::{is_transparent, opacity, to_hex};
use crate::error::CurveError;
use crate::math_utils::sample_cubic_bezier;
use crate::models::{Point, PointSet, ViewBox, CONTROL_POINT_COUNT, DEFAULT_POINT_RADIUS};
use crate::utils::calculate_viewbox;
use palette::Srgba;

/// Target of all drawing calls. Coordinates are in editor space; the surface
/// maps them to its own pixels.
pub trait DrawingSurface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Srgba<u8>);
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Srgba<u8>);
}

/// Presentation policy for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub polygon_color: Srgba<u8>,
    pub polygon_width: f64,
    pub control_color: Srgba<u8>,
    pub control_radius: f64,
    pub curve_color: Srgba<u8>,
    pub curve_width: f64,
    pub curve_point_color: Srgba<u8>,
    pub curve_point_radius: f64,
    pub show_curve_points: bool,
}

impl Default for Style {
    fn default() -> Self {
        let black = Srgba::<u8>::from_components((0, 0, 0, 255));
        let red = Srgba::<u8>::from_components((255, 0, 0, 255));
        let blue = Srgba::<u8>::from_components((0, 0, 255, 255));
        Self {
            polygon_color: black,
            polygon_width: 2.0,
            control_color: red,
            control_radius: DEFAULT_POINT_RADIUS,
            curve_color: black,
            curve_width: 1.0,
            curve_point_color: blue,
            curve_point_radius: 3.0,
            show_curve_points: true,
        }
    }
}

/// Everything needed to paint one redraw: the control polygon and the sampled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFrame {
    pub control_points: [Point; CONTROL_POINT_COUNT],
    pub curve: Vec<Point>,
}

impl CurveFrame {
    /// Sample the curve from the current control points. Nothing is cached
    /// between calls.
    pub fn build(points: &PointSet, step: f64) -> Result<Self, CurveError> {
        let control_points = *points.points();
        let curve = sample_cubic_bezier(&control_points, step)?;
        Ok(Self {
            control_points,
            curve,
        })
    }
}

/// Paint a frame: control polygon, control points, curve samples, curve polyline.
pub fn render_frame<S: DrawingSurface + ?Sized>(frame: &CurveFrame, style: &Style, surface: &mut S) {
    surface.stroke_polyline(&frame.control_points, style.polygon_width, style.polygon_color);

    for point in &frame.control_points {
        surface.fill_circle(*point, style.control_radius, style.control_color);
    }

    if style.show_curve_points {
        for point in &frame.curve {
            surface.fill_circle(*point, style.curve_point_radius, style.curve_point_color);
        }
    }

    surface.stroke_polyline(&frame.curve, style.curve_width, style.curve_color);
}

/// Surface that accumulates SVG elements.
pub struct SvgSurface {
    viewbox: ViewBox,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(viewbox: ViewBox) -> Self {
        Self {
            viewbox,
            elements: Vec::new(),
        }
    }

    /// Close the document, painting `background` behind everything drawn so far.
    pub fn finish(self, background: Option<Srgba<u8>>) -> String {
        let vb = self.viewbox;
        let background_rect = background
            .filter(|color| !is_transparent(*color))
            .map(|color| {
                format!(
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
                    vb.min_x,
                    vb.min_y,
                    vb.width,
                    vb.height,
                    to_hex(color),
                    opacity(color)
                )
            })
            .unwrap_or_default();

        format!(
            "<svg viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}{}\n</svg>",
            vb.min_x,
            vb.min_y,
            vb.width,
            vb.height,
            vb.width.ceil(),
            vb.height.ceil(),
            background_rect,
            self.elements.join("\n")
        )
    }
}

impl DrawingSurface for SvgSurface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Srgba<u8>) {
        if is_transparent(color) || radius <= 0.0 {
            return;
        }
        self.elements.push(format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            center.x,
            center.y,
            radius,
            to_hex(color),
            opacity(color)
        ));
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Srgba<u8>) {
        if points.len() < 2 || is_transparent(color) || width <= 0.0 {
            return;
        }
        let points_str = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            points_str,
            to_hex(color),
            opacity(color),
            width
        ));
    }
}

/// Render a frame as a standalone SVG document sized to its contents.
pub fn generate_svg(frame: &CurveFrame, style: &Style, background: Option<Srgba<u8>>) -> String {
    let mut surface = SvgSurface::new(calculate_viewbox(frame));
    render_frame(frame, style, &mut surface);
    surface.finish(background)
}
