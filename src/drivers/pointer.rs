//! Mouse and single-touch input folded into one pointer protocol.
//!
//! Only the primary touch point is ever read; additional fingers are ignored.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};

use crate::layout::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub identifier: u64,
    pub client_x: i32,
    pub client_y: i32,
}

/// A touch event as delivered by the host. `touches` lists the points still
/// in contact; `changed_touches` the ones this event is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: PointerPhase,
    pub touches: Vec<TouchPoint>,
    pub changed_touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Single-finger equivalent of a terminal mouse event. Hover moves and
    /// non-primary buttons have no touch counterpart.
    pub fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        let point = TouchPoint {
            identifier: 0,
            client_x: mouse.column as i32,
            client_y: mouse.row as i32,
        };
        let (phase, touches) = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => (PointerPhase::Down, vec![point]),
            MouseEventKind::Drag(MouseButton::Left) => (PointerPhase::Move, vec![point]),
            MouseEventKind::Up(MouseButton::Left) => (PointerPhase::Up, Vec::new()),
            _ => return None,
        };
        Some(Self {
            phase,
            touches,
            changed_touches: vec![point],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerInput {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

impl PointerInput {
    /// Pointer input carried by a terminal event, if any.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => Some(PointerInput::Mouse(*mouse)),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<PointerPhase> {
        match self {
            PointerInput::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(PointerPhase::Down),
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    Some(PointerPhase::Move)
                }
                MouseEventKind::Up(MouseButton::Left) => Some(PointerPhase::Up),
                _ => None,
            },
            PointerInput::Touch(touch) => Some(touch.phase),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerInput::Touch(_))
    }

    pub fn position(&self) -> Option<Point> {
        pointer_position(self)
    }
}

/// Client coordinates of the pointer. Touch input reads the first active
/// touch, falling back to the first changed touch once every finger has
/// lifted.
pub fn pointer_position(input: &PointerInput) -> Option<Point> {
    match input {
        PointerInput::Mouse(mouse) => Some(Point::new(mouse.column as i32, mouse.row as i32)),
        PointerInput::Touch(touch) => touch
            .touches
            .first()
            .or_else(|| touch.changed_touches.first())
            .map(|point| Point::new(point.client_x, point.client_y)),
    }
}
