use crate::error::CurveError;
use euclid::default::Point2D;
use log::{debug, warn};
use serde::Deserialize;

/// A position on the drawing surface.
pub type Point = Point2D<f64>;

/// Number of control points of a cubic curve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Radius of a drawn control point. Hit tests use twice this as the half-width.
pub const DEFAULT_POINT_RADIUS: f64 = 10.0;

/// The four control points P0..P3 plus the point currently being dragged.
///
/// The point count is fixed by the array type, so the set is never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: [Point; CONTROL_POINT_COUNT],
    active: Option<usize>,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::from_array([
            Point::new(50.0, 50.0),
            Point::new(300.0, 80.0),
            Point::new(350.0, 200.0),
            Point::new(30.0, 250.0),
        ])
    }
}

impl PointSet {
    /// Build a point set from an arbitrary list, rejecting anything but 4 points.
    pub fn new(points: Vec<Point>) -> Result<Self, CurveError> {
        let count = points.len();
        let points: [Point; CONTROL_POINT_COUNT] = points
            .try_into()
            .map_err(|_| CurveError::InvalidPointCount(count))?;
        Ok(Self::from_array(points))
    }

    pub fn from_array(points: [Point; CONTROL_POINT_COUNT]) -> Self {
        Self {
            points,
            active: None,
        }
    }

    pub fn points(&self) -> &[Point; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Index of the point under an ongoing drag, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Find the first control point whose hit square contains `at`.
    ///
    /// The square is centred on the point with a half-width of `2 * radius`;
    /// both bounds are inclusive. Points are scanned in order and the first
    /// match wins, without comparing distances.
    pub fn find_draggable_point(&self, at: Point, radius: f64) -> Option<usize> {
        let half_width = radius * 2.0;
        self.points.iter().position(|p| {
            (p.x - half_width..=p.x + half_width).contains(&at.x)
                && (p.y - half_width..=p.y + half_width).contains(&at.y)
        })
    }

    /// Overwrite the point at `index`. No clamping is applied.
    pub fn set_dragged_position(&mut self, index: usize, position: Point) -> Result<(), CurveError> {
        let point = self
            .points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange(index))?;
        *point = position;
        Ok(())
    }

    /// Apply one input event. Returns true when the host should redraw.
    pub fn handle_event(&mut self, event: DragEvent, radius: f64) -> bool {
        match event {
            DragEvent::DragStart(at) => {
                self.active = self.find_draggable_point(at, radius);
                match self.active {
                    Some(index) => debug!("drag started on P{index} at ({}, {})", at.x, at.y),
                    None => debug!("drag start at ({}, {}) missed all control points", at.x, at.y),
                }
                false
            }
            DragEvent::DragMove(to) => self.drag_to(to),
            DragEvent::DragEnd(to) => {
                let moved = self.drag_to(to);
                if let Some(index) = self.active.take() {
                    debug!("drag of P{index} released");
                }
                moved
            }
        }
    }

    fn drag_to(&mut self, to: Point) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        match self.set_dragged_position(index, to) {
            Ok(()) => true,
            Err(err) => {
                warn!("ignoring drag update: {err}");
                false
            }
        }
    }
}

/// Pointer input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    DragStart(Point),
    DragMove(Point),
    /// Final position of a gesture; applied like a move, then the drag is released.
    DragEnd(Point),
}

/// A recorded editing session: optional starting points and a list of events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub points: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScriptEvent {
    #[serde(rename = "type")]
    pub kind: ScriptEventKind,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEventKind {
    DragStart,
    DragMove,
    DragEnd,
}

impl From<ScriptEvent> for DragEvent {
    fn from(event: ScriptEvent) -> Self {
        let at = Point::new(event.x, event.y);
        match event.kind {
            ScriptEventKind::DragStart => DragEvent::DragStart(at),
            ScriptEventKind::DragMove => DragEvent::DragMove(at),
            ScriptEventKind::DragEnd => DragEvent::DragEnd(at),
        }
    }
}

impl EditScript {
    /// Replay every event against the starting points.
    /// Returns the final point set and how many redraws were requested.
    pub fn replay(&self, radius: f64) -> Result<(PointSet, usize), CurveError> {
        let mut points = match &self.points {
            Some(list) => PointSet::new(list.iter().map(|&(x, y)| Point::new(x, y)).collect())?,
            None => PointSet::default(),
        };

        let mut redraws = 0;
        for event in &self.events {
            if points.handle_event(DragEvent::from(*event), radius) {
                redraws += 1;
            }
        }

        Ok((points, redraws))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}
