//! Finding and excluding nodes by logical type.
//!
//! All operations flatten first, so fragments are transparent and
//! traversal order is the flattened order. A type specification is a slice
//! of `TypeFilter`s; a single type is a one-element slice.

use rustc_hash::FxHashSet;

use crate::flatten::flatten;
use crate::name::TypeFilter;
use crate::node::{Children, Node};

/// All nodes whose resolved type name is in the specification, in
/// traversal order.
///
/// Matching is against the node's own resolved name — tag string for
/// drawing elements, display name for components — never against the
/// node's descendants.
pub fn find_all_by_type(children: &Children, types: &[TypeFilter]) -> Vec<Node> {
    let wanted: FxHashSet<&str> = types.iter().map(TypeFilter::display_name).collect();
    flatten(children)
        .into_iter()
        .filter(|node| wanted.contains(node.display_name()))
        .collect()
}

/// The first node matching the specification, or `None`.
pub fn find_child_by_type(children: &Children, types: &[TypeFilter]) -> Option<Node> {
    let wanted: FxHashSet<&str> = types.iter().map(TypeFilter::display_name).collect();
    flatten(children)
        .into_iter()
        .find(|node| wanted.contains(node.display_name()))
}

/// The complement set: all nodes whose *declared* component display name
/// is not in the specification.
///
/// Unlike `find_all_by_type`, the node side consults only the declared
/// display name. Drawing elements and other string-tagged nodes declare
/// none and are always kept, even when their tag string is listed. This
/// asymmetry is inherited behavior and is intentional here.
pub fn without_type(children: &Children, types: &[TypeFilter]) -> Vec<Node> {
    let excluded: FxHashSet<&str> = types.iter().map(TypeFilter::display_name).collect();
    flatten(children)
        .into_iter()
        .filter(|node| match node.declared_name() {
            Some(name) => !excluded.contains(name),
            None => true,
        })
        .collect()
}

/// Position of `target` in the flattened collection, by identity.
pub fn child_index(children: &Children, target: &Node) -> Option<usize> {
    flatten(children).iter().position(|node| node.ptr_eq(target))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::ComponentRef;

    fn sample() -> (Children, Node, Node, Node) {
        let line_a = Node::component("Line").prop("x", 1.0).build();
        let bar = Node::component("Bar").build();
        let line_b = Node::component("Line").prop("x", 2.0).build();
        let children: Children = vec![line_a.clone(), bar.clone(), line_b.clone()].into();
        (children, line_a, bar, line_b)
    }

    #[test]
    fn test_find_all_by_type() {
        let (children, line_a, _, line_b) = sample();
        let found = find_all_by_type(&children, &["Line".into()]);

        assert_eq!(found.len(), 2);
        assert!(found[0].ptr_eq(&line_a));
        assert!(found[1].ptr_eq(&line_b));
    }

    #[test]
    fn test_find_all_by_multiple_types() {
        let (children, ..) = sample();
        let found = find_all_by_type(&children, &["Line".into(), "Bar".into()]);
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_find_all_matches_component_ref() {
        let (children, ..) = sample();
        let filter = TypeFilter::from(ComponentRef::with_display_name("Bar"));
        let found = find_all_by_type(&children, &[filter]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "Bar");
    }

    #[test]
    fn test_find_recurses_into_fragments() {
        let legend = Node::component("Legend").build();
        let frag = Node::fragment().child(legend.clone()).build();
        let children: Children = vec![Node::component("Line").build(), frag].into();

        let found = find_all_by_type(&children, &["Legend".into()]);
        assert_eq!(found.len(), 1);
        assert!(found[0].ptr_eq(&legend));
    }

    #[test]
    fn test_find_child_by_type_first_or_none() {
        let (children, line_a, ..) = sample();

        let first = find_child_by_type(&children, &["Line".into()]).unwrap();
        assert!(first.ptr_eq(&line_a));

        assert!(find_child_by_type(&children, &["Tooltip".into()]).is_none());
    }

    #[test]
    fn test_without_type_excludes_components() {
        let (children, _, bar, _) = sample();
        let rest = without_type(&children, &["Line".into()]);

        assert_eq!(rest.len(), 1);
        assert!(rest[0].ptr_eq(&bar));
    }

    #[test]
    fn test_without_type_keeps_string_tagged_nodes() {
        // A drawing element declares no display name, so it survives even
        // when its tag string is listed.
        let rect = Node::tag("rect").build();
        let line = Node::component("Line").build();
        let children: Children = vec![rect.clone(), line].into();

        let rest = without_type(&children, &["rect".into(), "Line".into()]);
        assert_eq!(rest.len(), 1);
        assert!(rest[0].ptr_eq(&rect));
    }

    #[test]
    fn test_child_index_by_identity() {
        let (children, _, bar, _) = sample();

        assert_eq!(child_index(&children, &bar), Some(1));
        assert_eq!(child_index(&children, &bar.clone()), Some(1));

        // Equal content, distinct allocation: absent.
        let other_bar = Node::component("Bar").build();
        assert_eq!(child_index(&children, &other_bar), None);
    }

    #[test]
    fn test_child_index_sees_through_fragments() {
        let target = Node::component("Tooltip").build();
        let frag = Node::fragment().child(target.clone()).build();
        let children: Children = vec![Node::component("Line").build(), frag].into();

        assert_eq!(child_index(&children, &target), Some(1));
    }
}
