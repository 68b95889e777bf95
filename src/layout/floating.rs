use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Point, WindowRect};
use crate::constants::{WINDOW_BODY_MARGIN, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

/// The nine drag behaviours a window handle can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandleKind {
    Move,
    ResizeN,
    ResizeS,
    ResizeE,
    ResizeW,
    ResizeNE,
    ResizeNW,
    ResizeSE,
    ResizeSW,
}

impl HandleKind {
    pub const ALL: [HandleKind; 9] = [
        HandleKind::Move,
        HandleKind::ResizeN,
        HandleKind::ResizeS,
        HandleKind::ResizeE,
        HandleKind::ResizeW,
        HandleKind::ResizeNE,
        HandleKind::ResizeNW,
        HandleKind::ResizeSE,
        HandleKind::ResizeSW,
    ];

    /// Marker identifier the presentation layer tags handle elements with.
    pub const fn as_str(self) -> &'static str {
        match self {
            HandleKind::Move => "titlebar",
            HandleKind::ResizeN => "resize-n",
            HandleKind::ResizeS => "resize-s",
            HandleKind::ResizeE => "resize-e",
            HandleKind::ResizeW => "resize-w",
            HandleKind::ResizeNE => "resize-ne",
            HandleKind::ResizeNW => "resize-nw",
            HandleKind::ResizeSE => "resize-se",
            HandleKind::ResizeSW => "resize-sw",
        }
    }

    pub const fn is_resize(self) -> bool {
        !matches!(self, HandleKind::Move)
    }
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown handle marker `{0}`")]
pub struct ParseHandleKindError(pub String);

impl FromStr for HandleKind {
    type Err = ParseHandleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseHandleKindError(s.to_string()))
    }
}

/// Window chrome measurements shared with the presentation layer. The
/// near-edge clamps only hold if these match what the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    pub min_width: i32,
    pub min_height: i32,
    pub body_margin: i32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            min_width: WINDOW_MIN_WIDTH,
            min_height: WINDOW_MIN_HEIGHT,
            body_margin: WINDOW_BODY_MARGIN,
        }
    }
}

/// Fields a drag writes back to the window. `None` leaves the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPatch {
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl RectPatch {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.width.is_none() && self.height.is_none()
    }

    pub fn apply_to(self, rect: WindowRect) -> WindowRect {
        WindowRect {
            left: self.left.unwrap_or(rect.left),
            top: self.top.unwrap_or(rect.top),
            width: self.width.unwrap_or(rect.width),
            height: self.height.unwrap_or(rect.height),
        }
    }
}

/// Computes the fields a drag writes for `kind`, relative to the frozen
/// `start` rect and `anchor` of the session.
///
/// Near edges (N, W) move the origin and clamp against the minimum size and
/// the far edge. Far edges (E, S) only floor at zero. NE moves the top edge
/// without the near-edge limit.
///
/// A field whose computed value is 0 is left out of the patch, so the window
/// keeps its previous value for it.
pub fn drag_patch(
    kind: HandleKind,
    start: WindowRect,
    anchor: Point,
    current: Point,
    metrics: &WindowMetrics,
) -> RectPatch {
    let dx_move = start.left + current.x - anchor.x;
    let dy_move = start.top + current.y - anchor.y;
    let dx_resize = (start.width + current.x - anchor.x).max(0);
    let dy_resize = (start.height + current.y - anchor.y).max(0);
    let dx_resize_offset = start.width - current.x + anchor.x;
    let dy_resize_offset = start.height - current.y + anchor.y;
    let x_move_limit = start.left + start.width - metrics.min_width;
    let y_move_limit = start.top + start.height - metrics.min_height - metrics.body_margin - 1;

    let near_left = dx_move.min(x_move_limit);
    let near_top = dy_move.min(y_move_limit);
    let near_width = dx_resize_offset.max(metrics.min_width);
    let near_height = dy_resize_offset.max(metrics.min_height);

    let (left, top, width, height) = match kind {
        HandleKind::Move => (Some(dx_move), Some(dy_move), None, None),
        HandleKind::ResizeE => (None, None, Some(dx_resize), None),
        HandleKind::ResizeS => (None, None, None, Some(dy_resize)),
        HandleKind::ResizeSE => (None, None, Some(dx_resize), Some(dy_resize)),
        HandleKind::ResizeNE => (
            None,
            Some(dy_move),
            Some(dx_resize),
            Some(dy_resize_offset.max(0)),
        ),
        HandleKind::ResizeW => (Some(near_left), None, Some(near_width), None),
        HandleKind::ResizeN => (None, Some(near_top), None, Some(near_height)),
        HandleKind::ResizeSW => (Some(near_left), None, Some(near_width), Some(dy_resize)),
        HandleKind::ResizeNW => (
            Some(near_left),
            Some(near_top),
            Some(near_width),
            Some(near_height),
        ),
    };
    RectPatch {
        left: left.and_then(non_zero),
        top: top.and_then(non_zero),
        width: width.and_then(non_zero),
        height: height.and_then(non_zero),
    }
}

fn non_zero(value: i32) -> Option<i32> {
    (value != 0).then_some(value)
}

/// New window rect after dragging `kind` from `anchor` to `current`.
pub fn apply_drag(
    kind: HandleKind,
    start: WindowRect,
    anchor: Point,
    current: Point,
    metrics: &WindowMetrics,
) -> WindowRect {
    drag_patch(kind, start, anchor, current, metrics).apply_to(start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub kind: HandleKind,
    pub rect: WindowRect,
}

/// Hit regions the presentation layer lays out for one window, in paint
/// order: body, titlebar, then resize handles on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegions {
    pub body: WindowRect,
    pub titlebar: WindowRect,
    pub handles: Vec<ResizeHandle>,
}

/// Splits a window rect into its chrome regions. The top border row and the
/// `body_margin` titlebar rows together form the chrome above the body.
/// Non-resizable windows get no handles; their border cells belong to the
/// titlebar and body instead.
pub fn window_regions(rect: WindowRect, resizable: bool, metrics: &WindowMetrics) -> WindowRegions {
    let WindowRect {
        top,
        left,
        width,
        height,
    } = rect;
    let margin = metrics.body_margin.max(0);
    let chrome = margin + 1;
    if !resizable {
        return WindowRegions {
            titlebar: WindowRect::new(left, top, width, height.clamp(0, chrome)),
            body: WindowRect::new(left, top + chrome, width, (height - chrome).max(0)),
            handles: Vec::new(),
        };
    }

    let inner_w = (width - 2).max(0);
    let right = left + width - 1;
    let bottom = top + height - 1;
    let mut handles = Vec::with_capacity(8);
    if width > 0 && height > 0 {
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeNW,
            rect: WindowRect::new(left, top, 1, 1),
        });
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeNE,
            rect: WindowRect::new(right, top, 1, 1),
        });
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeSW,
            rect: WindowRect::new(left, bottom, 1, 1),
        });
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeSE,
            rect: WindowRect::new(right, bottom, 1, 1),
        });
    }
    if width > 2 {
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeN,
            rect: WindowRect::new(left + 1, top, inner_w, 1),
        });
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeS,
            rect: WindowRect::new(left + 1, bottom, inner_w, 1),
        });
    }
    if height > 2 {
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeW,
            rect: WindowRect::new(left, top + 1, 1, height - 2),
        });
        handles.push(ResizeHandle {
            kind: HandleKind::ResizeE,
            rect: WindowRect::new(right, top + 1, 1, height - 2),
        });
    }

    WindowRegions {
        titlebar: WindowRect::new(left + 1, top + 1, inner_w, margin.min((height - 2).max(0))),
        body: WindowRect::new(left + 1, top + chrome, inner_w, (height - chrome - 1).max(0)),
        handles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(min_width: i32, min_height: i32) -> WindowMetrics {
        WindowMetrics {
            min_width,
            min_height,
            body_margin: 1,
        }
    }

    fn start() -> WindowRect {
        WindowRect {
            top: 100,
            left: 100,
            width: 200,
            height: 150,
        }
    }

    #[test]
    fn move_shifts_origin_only() {
        let res = apply_drag(
            HandleKind::Move,
            start(),
            Point::new(50, 50),
            Point::new(70, 40),
            &metrics(50, 50),
        );
        assert_eq!(
            res,
            WindowRect {
                top: 90,
                left: 120,
                width: 200,
                height: 150
            }
        );
    }

    #[test]
    fn east_resize_grows_width() {
        let patch = drag_patch(
            HandleKind::ResizeE,
            start(),
            Point::new(50, 50),
            Point::new(70, 50),
            &metrics(50, 50),
        );
        assert_eq!(
            patch,
            RectPatch {
                width: Some(220),
                ..RectPatch::default()
            }
        );
        assert_eq!(patch.apply_to(start()).width, 220);
        assert_eq!(patch.apply_to(start()).left, 100);
    }

    #[test]
    fn west_resize_clamps_width_and_origin() {
        let start = WindowRect::new(0, 0, 100, 100);
        let res = apply_drag(
            HandleKind::ResizeW,
            start,
            Point::new(0, 0),
            Point::new(80, 0),
            &metrics(50, 50),
        );
        assert_eq!(res.width, 50);
        assert_eq!(res.left, 50);
        assert_eq!(res.top, 0);
        assert_eq!(res.height, 100);
    }

    #[test]
    fn west_resize_grows_to_the_left() {
        let res = apply_drag(
            HandleKind::ResizeW,
            start(),
            Point::new(100, 120),
            Point::new(80, 120),
            &metrics(50, 50),
        );
        assert_eq!(res.left, 80);
        assert_eq!(res.width, 220);
    }

    #[test]
    fn north_resize_limit_includes_body_margin() {
        let start = WindowRect::new(0, 0, 100, 100);
        // yMoveLimit = 0 + 100 - 50 - 1 - 1 = 48
        let res = apply_drag(
            HandleKind::ResizeN,
            start,
            Point::new(0, 0),
            Point::new(0, 90),
            &metrics(50, 50),
        );
        assert_eq!(res.top, 48);
        assert_eq!(res.height, 50);
        assert_eq!(res.left, 0);
        assert_eq!(res.width, 100);
    }

    #[test]
    fn north_west_touches_all_fields() {
        let patch = drag_patch(
            HandleKind::ResizeNW,
            start(),
            Point::new(100, 100),
            Point::new(90, 95),
            &metrics(50, 50),
        );
        assert_eq!(
            patch,
            RectPatch {
                left: Some(90),
                top: Some(95),
                width: Some(210),
                height: Some(155),
            }
        );
    }

    #[test]
    fn north_east_and_south_west_mix_near_and_far_edges() {
        let ne = drag_patch(
            HandleKind::ResizeNE,
            start(),
            Point::new(300, 100),
            Point::new(310, 90),
            &metrics(50, 50),
        );
        assert_eq!(ne.left, None);
        assert_eq!(ne.top, Some(90));
        assert_eq!(ne.width, Some(210));
        assert_eq!(ne.height, Some(160));

        let sw = drag_patch(
            HandleKind::ResizeSW,
            start(),
            Point::new(100, 250),
            Point::new(95, 260),
            &metrics(50, 50),
        );
        assert_eq!(sw.left, Some(95));
        assert_eq!(sw.top, None);
        assert_eq!(sw.width, Some(205));
        assert_eq!(sw.height, Some(160));
    }

    #[test]
    fn far_edge_resize_has_no_minimum_but_never_goes_negative() {
        let res = apply_drag(
            HandleKind::ResizeSE,
            start(),
            Point::new(300, 250),
            Point::new(110, 110),
            &metrics(50, 50),
        );
        assert_eq!(res.width, 10);
        assert_eq!(res.height, 10);

        let collapsed = drag_patch(
            HandleKind::ResizeE,
            start(),
            Point::new(300, 250),
            Point::new(0, 250),
            &metrics(50, 50),
        );
        assert!(collapsed.is_empty());
        assert_eq!(collapsed.apply_to(start()).width, 200);
    }

    #[test]
    fn zero_results_keep_the_previous_value() {
        let start = WindowRect::new(5, 5, 40, 20);
        let patch = drag_patch(
            HandleKind::Move,
            start,
            Point::new(10, 10),
            Point::new(5, 12),
            &metrics(16, 5),
        );
        assert_eq!(patch.left, None);
        assert_eq!(patch.top, Some(7));
        assert_eq!(patch.apply_to(start), WindowRect::new(5, 7, 40, 20));
    }

    #[test]
    fn south_resize_changes_height_only() {
        let patch = drag_patch(
            HandleKind::ResizeS,
            start(),
            Point::new(150, 250),
            Point::new(160, 270),
            &metrics(50, 50),
        );
        assert_eq!(
            patch,
            RectPatch {
                height: Some(170),
                ..RectPatch::default()
            }
        );
    }

    #[test]
    fn north_west_pins_origin_at_both_limits() {
        let start = WindowRect::new(0, 0, 100, 100);
        // xMoveLimit = 100 - 50 = 50, yMoveLimit = 100 - 50 - 1 - 1 = 48
        let patch = drag_patch(
            HandleKind::ResizeNW,
            start,
            Point::new(0, 0),
            Point::new(90, 95),
            &metrics(50, 50),
        );
        assert_eq!(
            patch,
            RectPatch {
                left: Some(50),
                top: Some(48),
                width: Some(50),
                height: Some(50),
            }
        );
    }

    #[test]
    fn south_west_clamps_left_edge_but_not_height() {
        let start = WindowRect::new(0, 0, 100, 100);
        let patch = drag_patch(
            HandleKind::ResizeSW,
            start,
            Point::new(0, 100),
            Point::new(80, 130),
            &metrics(50, 50),
        );
        assert_eq!(
            patch,
            RectPatch {
                left: Some(50),
                top: None,
                width: Some(50),
                height: Some(130),
            }
        );
    }

    #[test]
    fn deltas_are_relative_to_drag_start() {
        let m = metrics(50, 50);
        let anchor = Point::new(10, 10);
        // Intermediate positions never feed back into the result.
        let _ = apply_drag(HandleKind::Move, start(), anchor, Point::new(500, 500), &m);
        let res = apply_drag(HandleKind::Move, start(), anchor, Point::new(11, 12), &m);
        assert_eq!(res.left, 101);
        assert_eq!(res.top, 102);
    }

    #[test]
    fn handle_markers_round_trip_through_strings() {
        assert_eq!("titlebar".parse::<HandleKind>(), Ok(HandleKind::Move));
        assert_eq!("resize-sw".parse::<HandleKind>(), Ok(HandleKind::ResizeSW));
        assert_eq!(HandleKind::ResizeNE.to_string(), "resize-ne");
        assert_eq!(
            "window-body".parse::<HandleKind>(),
            Err(ParseHandleKindError("window-body".into()))
        );
    }

    #[test]
    fn regions_cover_border_with_eight_handles() {
        let m = WindowMetrics::default();
        let regions = window_regions(WindowRect::new(10, 5, 20, 8), true, &m);
        assert_eq!(regions.handles.len(), 8);
        assert_eq!(regions.titlebar, WindowRect::new(11, 6, 18, 1));
        assert_eq!(regions.body, WindowRect::new(11, 7, 18, 5));
        let se = regions
            .handles
            .iter()
            .find(|h| h.kind == HandleKind::ResizeSE)
            .expect("se handle");
        assert_eq!(se.rect, WindowRect::new(29, 12, 1, 1));
    }

    #[test]
    fn fixed_windows_have_no_resize_handles() {
        let m = WindowMetrics::default();
        let regions = window_regions(WindowRect::new(0, 0, 20, 8), false, &m);
        assert!(regions.handles.is_empty());
        assert_eq!(regions.titlebar, WindowRect::new(0, 0, 20, 2));
        assert_eq!(regions.body, WindowRect::new(0, 2, 20, 6));
    }

    #[test]
    fn chrome_height_follows_body_margin() {
        let tall = WindowMetrics {
            body_margin: 3,
            ..WindowMetrics::default()
        };
        let regions = window_regions(WindowRect::new(0, 0, 40, 20), true, &tall);
        assert_eq!(regions.titlebar, WindowRect::new(1, 1, 38, 3));
        assert_eq!(regions.body, WindowRect::new(1, 4, 38, 15));

        let fixed = window_regions(WindowRect::new(0, 0, 40, 20), false, &tall);
        assert_eq!(fixed.titlebar, WindowRect::new(0, 0, 40, 4));
        assert_eq!(fixed.body, WindowRect::new(0, 4, 40, 16));
    }
}
