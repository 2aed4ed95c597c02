//! Per-type render dispatch over a flattened collection.
//!
//! A `RenderMap` registers one handler per logical type name, optionally
//! firing at most once per type within a dispatch. Drawing elements pass
//! through unchanged; nodes with no registered handler are dropped.

use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::flatten::flatten;
use crate::node::{Children, Node};

// =============================================================================
// RenderMap
// =============================================================================

/// Handler invoked for a node of a registered type, with the resolved type
/// name and the node's position in the flattened input. May return a
/// single node, a sequence, or nothing.
pub type RenderHandler<'a> = Box<dyn Fn(&Node, &str, usize) -> Children + 'a>;

/// One dispatch-table entry: the handler and its once-per-type flag.
pub struct RenderEntry<'a> {
    pub handler: RenderHandler<'a>,
    pub once: bool,
}

impl<'a> RenderEntry<'a> {
    /// An entry that fires for every node of its type.
    pub fn new(handler: impl Fn(&Node, &str, usize) -> Children + 'a) -> Self {
        Self {
            handler: Box::new(handler),
            once: false,
        }
    }

    /// An entry that fires at most once per dispatch.
    pub fn once(handler: impl Fn(&Node, &str, usize) -> Children + 'a) -> Self {
        Self {
            handler: Box::new(handler),
            once: true,
        }
    }
}

impl std::fmt::Debug for RenderEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderEntry")
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}

/// Per-dispatch table from logical type name to render entry.
pub type RenderMap<'a> = FxHashMap<CompactString, RenderEntry<'a>>;

// =============================================================================
// render_by_order
// =============================================================================

/// Dispatch render handlers over a collection, in flattened order.
///
/// For each node: drawing elements pass through unchanged; otherwise the
/// node's type name selects a `RenderEntry`. A selected handler runs
/// unless it is marked `once` and a node of the same type name already
/// fired in this call. Handler results are spliced into the output with
/// holes removed; unhandled nodes are dropped. Output order follows input
/// order.
pub fn render_by_order(children: &Children, map: &RenderMap<'_>) -> Vec<Node> {
    let mut out = Vec::new();
    let mut fired: FxHashSet<CompactString> = FxHashSet::default();

    for (index, node) in flatten(children).iter().enumerate() {
        if node.is_svg_element() {
            out.push(node.clone());
            continue;
        }

        let name = node.display_name();
        let Some(entry) = map.get(name) else {
            continue;
        };
        if entry.once && fired.contains(name) {
            continue;
        }

        let rendered = (entry.handler)(node, name, index);
        out.extend(flatten(&rendered));
        fired.insert(CompactString::from(name));
    }

    out
}

// =============================================================================
// validate_width_height
// =============================================================================

/// Guard before layout-dependent rendering: the node must exist and its
/// `width` and `height` props must be finite numbers strictly greater
/// than zero.
pub fn validate_width_height(node: Option<&Node>) -> bool {
    let Some(node) = node else {
        return false;
    };
    let props = node.props();
    let (Some(width), Some(height)) = (props.number("width"), props.number("height")) else {
        return false;
    };
    width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0
}

// =============================================================================
// Tests
// =============================================================================
