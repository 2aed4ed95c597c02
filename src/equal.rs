//! Structural equality of node collections.
//!
//! `children_equal` decides whether two collections denote the same
//! rendered output: same cardinality, positionally equal entries, shallow
//! prop equality at each node, and recursive descent into children and
//! nested sequences. Comparison short-circuits on the first mismatch.

use crate::node::{Children, Node};

/// Compare two node collections for structural and shallow-prop equality.
///
/// Symmetric, and total over the `Children` sum. Reference identity (the
/// same collection borrow, or the same node allocation) short-circuits to
/// true.
pub fn children_equal(a: &Children, b: &Children) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }

    let count = a.count();
    if count != b.count() {
        return false;
    }
    match count {
        0 => true,
        1 => entry_equal(sole(a), sole(b)),
        _ => match (a, b) {
            // Cardinality >1 implies both sides are sequences.
            (Children::Seq(xs), Children::Seq(ys)) => {
                xs.iter().zip(ys).all(|(x, y)| entry_equal(x, y))
            }
            _ => false,
        },
    }
}

/// The sole element of a cardinality-1 collection.
fn sole(children: &Children) -> &Children {
    match children {
        Children::Seq(entries) => &entries[0],
        other => other,
    }
}

/// One positional entry: recurse for nested sequences, otherwise compare
/// as single nodes.
fn entry_equal(a: &Children, b: &Children) -> bool {
    match (a, b) {
        (Children::Seq(_), _) | (_, Children::Seq(_)) => children_equal(a, b),
        (Children::None, Children::None) => true,
        (Children::Node(x), Children::Node(y)) => single_node_equal(Some(x), Some(y)),
        _ => false,
    }
}

/// Compare two possibly-absent nodes.
///
/// Both absent is equal; one absent is not. Two present nodes are equal
/// when their props are shallow-equal and their children values agree:
/// both present and recursively equal, or both absent. A node with
/// children never equals one without. Note this compares rendered shape —
/// props and children — not the node's type tag, matching the behavior of
/// the composition layer this supports.
pub fn single_node_equal(a: Option<&Node>, b: Option<&Node>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if a.ptr_eq(b) {
        return true;
    }

    match (a.children().is_none(), b.children().is_none()) {
        (false, false) => {
            a.props().shallow_eq(b.props()) && children_equal(a.children(), b.children())
        }
        (true, true) => a.props().shallow_eq(b.props()),
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
