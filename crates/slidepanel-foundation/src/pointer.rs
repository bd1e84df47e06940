use slidepanel_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Timestamped pointer sample with consumption tracking.
///
/// Once the container confirms a drag it consumes every further sample of
/// the gesture so no sibling or child acts on it. Consumption is shared
/// across copies of the same event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event time in milliseconds on the host's monotonic clock.
    pub uptime_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(0.0, y), uptime_millis)
    }

    pub fn moved(y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(0.0, y), uptime_millis)
    }

    pub fn up(y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(0.0, y), uptime_millis)
    }

    pub fn cancel(y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(0.0, y), uptime_millis)
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
