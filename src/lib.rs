//! chart-compose - Component-Tree Traversal and Structural Diffing
//!
//! Infrastructure for a charting library's component composition layer:
//! normalize nested/grouped node collections, find and exclude nodes by
//! logical type, compare two trees for shallow-prop + structure equality,
//! and dispatch per-type render handlers in a stable order.
//!
//! ## Core Concepts
//!
//! **Identity-carrying nodes**: `Node` is `Arc`-shared; clones share
//! identity, and identity (never deep content) is what the memo cache,
//! the equality short-circuits, and index lookup compare.
//!
//! **Recursive collections**: `Children` is a sum over a single node, an
//! ordered (possibly nested, possibly sparse) sequence, and nothing —
//! every shape the composition layer produces is one value the traversal
//! code matches on exhaustively.
//!
//! ## Modules
//! - `node`: `Node`, `NodeKind`, `Children`, `NodeBuilder`
//! - `props`: `Props` bags and `PropValue` shallow equality
//! - `name`: display-name resolution and type filters
//! - `flatten`: flattener, `CacheToken`, single-slot memo caches
//! - `filter`: find/exclude by type, index lookup
//! - `equal`: recursive structural comparator
//! - `svg`: drawing-element tag set and filter
//! - `events`: DOM event type → handler prop name
//! - `render`: `RenderMap` dispatch and the width/height guard
//!
//! ## Usage
//!
//! ```
//! use chart_compose::{Children, Node, RenderEntry, RenderMap, render_by_order};
//!
//! let children: Children = vec![
//!     Node::tag("rect").build(),
//!     Node::component("Legend").build(),
//! ]
//! .into();
//!
//! let mut map = RenderMap::default();
//! map.insert(
//!     "Legend".into(),
//!     RenderEntry::once(|node, _, _| Children::Node(node.clone())),
//! );
//!
//! let rendered = render_by_order(&children, &map);
//! assert_eq!(rendered.len(), 2);
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Node types: Node, NodeKind, Children, NodeBuilder
pub mod node;

/// Property bags and shallow equality
pub mod props;

/// Display-name resolution and type filters
pub mod name;

/// Flattening and the single-slot memo cache
pub mod flatten;

/// Find/exclude by type, index lookup
pub mod filter;

/// Recursive structural equality
pub mod equal;

/// Drawing-element tag set
pub mod svg;

/// DOM event name mapping
pub mod events;

/// Render dispatch and layout guard
pub mod render;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Node, NodeBuilder, NodeKind};

// Props
pub use props::{PropValue, Props};

// Names
pub use name::{ComponentRef, FALLBACK_COMPONENT_NAME, TypeFilter, get_display_name};

// Flattening
pub use flatten::{CacheToken, FlattenCache, SharedFlattenCache, flatten};

// Filtering
pub use filter::{child_index, find_all_by_type, find_child_by_type, without_type};

// Equality
pub use equal::{children_equal, single_node_equal};

// SVG
pub use svg::{filter_svg_elements, is_svg_tag};

// Events
pub use events::event_handler_name;

// Render dispatch
pub use render::{
    RenderEntry, RenderHandler, RenderMap, render_by_order, validate_width_height,
};
