//! Low-level drawing element recognition.
//!
//! Charts bottom out in a fixed vocabulary of drawing primitives. Nodes
//! tagged with one of these names pass through the render dispatcher
//! unchanged and are what `filter_svg_elements` selects.

use crate::flatten::flatten;
use crate::node::{Children, Node};

/// Check if a tag names a recognized low-level drawing element.
pub fn is_svg_tag(tag: &str) -> bool {
    matches!(
        tag,
        // Containers
        "svg" | "g" | "defs" | "symbol" | "use" | "foreignObject"
        // Shapes
        | "path" | "circle" | "rect" | "line" | "polyline" | "polygon" | "ellipse"
        // Text
        | "text" | "tspan" | "textPath"
        // Paint servers
        | "linearGradient" | "radialGradient" | "stop" | "pattern"
        // Clipping and masking
        | "clipPath" | "mask" | "marker"
        // Filters
        | "filter" | "feBlend" | "feColorMatrix" | "feComposite" | "feDropShadow"
        | "feFlood" | "feGaussianBlur" | "feImage" | "feMerge" | "feMergeNode"
        | "feMorphology" | "feOffset" | "feTile" | "feTurbulence"
        // Embedded content
        | "image"
    )
}

/// Flatten a collection, then keep only the drawing elements, in order.
/// No deduplication.
pub fn filter_svg_elements(children: &Children) -> Vec<Node> {
    flatten(children)
        .into_iter()
        .filter(Node::is_svg_element)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg_tag() {
        assert!(is_svg_tag("rect"));
        assert!(is_svg_tag("circle"));
        assert!(is_svg_tag("linearGradient"));
        assert!(!is_svg_tag("div"));
        assert!(!is_svg_tag("Line"));
        assert!(!is_svg_tag(""));
    }

    #[test]
    fn test_filter_keeps_drawing_elements_in_order() {
        let rect = Node::tag("rect").build();
        let custom = Node::component("CustomComponent").build();
        let circle = Node::tag("circle").build();

        let children: Children = vec![rect.clone(), custom, circle.clone()].into();
        let filtered = filter_svg_elements(&children);

        assert_eq!(filtered.len(), 2);
        assert!(filtered[0].ptr_eq(&rect));
        assert!(filtered[1].ptr_eq(&circle));
    }

    #[test]
    fn test_filter_skips_unrecognized_tags() {
        let children: Children = vec![
            Node::tag("canvas").build(),
            Node::tag("rect").build(),
        ]
        .into();
        let filtered = filter_svg_elements(&children);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].display_name(), "rect");
    }

    #[test]
    fn test_filter_reaches_into_fragments() {
        let inner = Node::tag("path").build();
        let frag = Node::fragment()
            .child(inner.clone())
            .child(Node::component("Line").build())
            .build();
        let children: Children = vec![frag].into();

        let filtered = filter_svg_elements(&children);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].ptr_eq(&inner));
    }
}
