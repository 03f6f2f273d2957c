pub mod color_utils;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod renderer;
pub mod renderer_skia;
pub mod utils;

pub use error::CurveError;
pub use math_utils::{cubic_point, sample_cubic_bezier, DEFAULT_STEP};
pub use models::{DragEvent, EditScript, Point, PointSet, DEFAULT_POINT_RADIUS};
pub use renderer::{generate_svg, render_frame, CurveFrame, DrawingSurface, Style};
pub use renderer_skia::{render_to_pixmap, render_to_png};
