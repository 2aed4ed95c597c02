//! Prelude module for common imports.
//!
//! ```
//! use chart_compose::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Node, NodeBuilder, NodeKind};

// Props
pub use crate::props::{PropValue, Props};

// Names
pub use crate::name::{ComponentRef, FALLBACK_COMPONENT_NAME, TypeFilter, get_display_name};

// Flattening
pub use crate::flatten::{CacheToken, FlattenCache, SharedFlattenCache, flatten};

// Filtering
pub use crate::filter::{child_index, find_all_by_type, find_child_by_type, without_type};

// Equality
pub use crate::equal::{children_equal, single_node_equal};

// SVG
pub use crate::svg::{filter_svg_elements, is_svg_tag};

// Events
pub use crate::events::event_handler_name;

// Render dispatch
pub use crate::render::{
    RenderEntry, RenderHandler, RenderMap, render_by_order, validate_width_height,
};
