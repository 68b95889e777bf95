//! Tagged element tree handed to the pointer handlers as event targets.
//!
//! The presentation layer rebuilds the tree from the window registry each
//! frame. Elements are stored in paint order, so the last element containing a
//! point is the one the user sees there. Classification only looks at the
//! markers, never at positions.

use std::fmt;

use super::{FocusStack, WindowId};
use crate::layout::{HandleKind, Point, WindowMetrics, WindowRect, window_regions};

/// Identifier attached to an element by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Desktop,
    Window(WindowId),
    Body,
    Handle(HandleKind),
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Desktop => f.write_str("desktop"),
            Marker::Window(_) => f.write_str("window"),
            Marker::Body => f.write_str("window-body"),
            Marker::Handle(kind) => f.write_str(kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct ElementNode {
    marker: Option<Marker>,
    parent: Option<ElementId>,
    bounds: Option<WindowRect>,
}

#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tree for the current registry: a desktop root covering
    /// `viewport`, then each window bottom to top with its body, titlebar
    /// and resize handles laid out with `metrics`.
    pub fn from_stack(stack: &FocusStack, viewport: WindowRect, metrics: &WindowMetrics) -> Self {
        let mut tree = Self::new();
        let root = tree.push(None, Some(Marker::Desktop), Some(viewport));
        for window in stack.draw_order() {
            let container = tree.push(
                Some(root),
                Some(Marker::Window(window.id())),
                Some(window.rect()),
            );
            let regions = window_regions(window.rect(), window.resizable(), metrics);
            tree.push(Some(container), Some(Marker::Body), Some(regions.body));
            tree.push(
                Some(container),
                Some(Marker::Handle(HandleKind::Move)),
                Some(regions.titlebar),
            );
            for handle in regions.handles {
                tree.push(
                    Some(container),
                    Some(Marker::Handle(handle.kind)),
                    Some(handle.rect),
                );
            }
        }
        tree
    }

    pub fn push(
        &mut self,
        parent: Option<ElementId>,
        marker: Option<Marker>,
        bounds: Option<WindowRect>,
    ) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(ElementNode {
            marker,
            parent,
            bounds,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn marker(&self, id: ElementId) -> Option<Marker> {
        self.nodes.get(id.0).and_then(|node| node.marker)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestry(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let start = self.contains(id).then_some(id);
        std::iter::successors(start, move |current| self.parent(*current))
    }

    /// Window whose container encloses `id`.
    pub fn owning_window(&self, id: ElementId) -> Option<WindowId> {
        self.ancestry(id).find_map(|ancestor| match self.marker(ancestor) {
            Some(Marker::Window(window)) => Some(window),
            _ => None,
        })
    }

    /// Topmost element whose bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, node)| node.bounds.is_some_and(|bounds| bounds.contains(point)))
            .map(|(idx, _)| ElementId(idx))
    }
}

/// What a pointer press on an element may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub handle: Option<HandleKind>,
    pub focusable: bool,
    pub window: Option<WindowId>,
}

impl Classification {
    pub fn is_drag_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }
}

pub fn classify(tree: &ElementTree, target: ElementId) -> Classification {
    let handle = match tree.marker(target) {
        Some(Marker::Handle(kind)) => Some(kind),
        _ => None,
    };
    let focusable = handle.is_some() || tree.marker(target) == Some(Marker::Body);
    Classification {
        handle,
        focusable,
        window: tree.owning_window(target),
    }
}
