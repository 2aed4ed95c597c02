//! Node types for the chart component tree.
//!
//! `Node` is the core tree element: a logical type tag (`NodeKind`), a
//! `Props` bag, and a `Children` value. Nodes are `Arc`-shared — cloning is
//! cheap and clones share identity, which is what the memo cache, the
//! equality comparator, and index lookup key on (`Node::ptr_eq`).
//!
//! `Children` is the recursive sum the rest of the crate traverses: a node,
//! an ordered sequence (possibly nested, possibly with holes), or nothing.

use std::sync::Arc;

use compact_str::CompactString;

use crate::name::FALLBACK_COMPONENT_NAME;
use crate::props::{PropValue, Props};

// =============================================================================
// NodeKind
// =============================================================================

/// Logical type of a node, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Low-level drawing element addressed by its tag string (`rect`,
    /// `circle`, ...). These pass through the render dispatcher unchanged.
    Tag(CompactString),
    /// Composite chart component addressed by its display name (`Line`,
    /// `Legend`, ...).
    Component(CompactString),
    /// Transparent grouping: its children splice into the parent's position
    /// during flattening.
    Fragment,
}

impl NodeKind {
    /// Resolved type name. Fragments resolve to the fixed placeholder, but
    /// never survive flattening, so matchers only see `Tag` and `Component`.
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(tag) => tag,
            Self::Component(name) => name,
            Self::Fragment => FALLBACK_COMPONENT_NAME,
        }
    }

    /// Check if this is a fragment kind.
    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment)
    }
}

// =============================================================================
// Node
// =============================================================================

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    props: Props,
    children: Children,
}

/// A chart tree node. Clones share the same allocation and therefore the
/// same identity.
#[derive(Debug, Clone)]
pub struct Node {
    inner: Arc<NodeData>,
}

impl Node {
    /// Start building a drawing-element node.
    pub fn tag(tag: impl Into<CompactString>) -> NodeBuilder {
        NodeBuilder::new(NodeKind::Tag(tag.into()))
    }

    /// Start building a component node.
    pub fn component(name: impl Into<CompactString>) -> NodeBuilder {
        NodeBuilder::new(NodeKind::Component(name.into()))
    }

    /// Start building a fragment node.
    pub fn fragment() -> NodeBuilder {
        NodeBuilder::new(NodeKind::Fragment)
    }

    /// The node's logical type.
    pub fn kind(&self) -> &NodeKind {
        &self.inner.kind
    }

    /// The node's property bag. Children are not part of the bag — they
    /// live in their own field.
    pub fn props(&self) -> &Props {
        &self.inner.props
    }

    /// The node's children value.
    pub fn children(&self) -> &Children {
        &self.inner.children
    }

    /// Fully resolved type name: tag string for drawing elements, display
    /// name for components.
    pub fn display_name(&self) -> &str {
        self.inner.kind.name()
    }

    /// Declared component display name, if any. Drawing elements and
    /// fragments carry no declared name — `without_type` relies on this
    /// distinction.
    pub fn declared_name(&self) -> Option<&str> {
        match &self.inner.kind {
            NodeKind::Component(name) => Some(name),
            NodeKind::Tag(_) | NodeKind::Fragment => None,
        }
    }

    /// Check if this is a recognized low-level drawing element.
    pub fn is_svg_element(&self) -> bool {
        matches!(&self.inner.kind, NodeKind::Tag(tag) if crate::svg::is_svg_tag(tag))
    }

    /// Identity comparison: true only for clones of the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// NodeBuilder
// =============================================================================

/// Builder for `Node`. The node is immutable once built.
#[derive(Debug)]
pub struct NodeBuilder {
    kind: NodeKind,
    props: Props,
    children: Children,
}

impl NodeBuilder {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: Props::new(),
            children: Children::None,
        }
    }

    /// Set a prop.
    pub fn prop(mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Replace the whole props bag.
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Append a child node. Promotes the children value to a sequence when
    /// a second child arrives.
    pub fn child(mut self, node: Node) -> Self {
        self.children = match self.children {
            Children::None => Children::Node(node),
            Children::Node(first) => {
                Children::Seq(vec![Children::Node(first), Children::Node(node)])
            }
            Children::Seq(mut entries) => {
                entries.push(Children::Node(node));
                Children::Seq(entries)
            }
        };
        self
    }

    /// Replace the children value wholesale.
    pub fn children(mut self, children: Children) -> Self {
        self.children = children;
        self
    }

    /// Finish building.
    pub fn build(self) -> Node {
        Node {
            inner: Arc::new(NodeData {
                kind: self.kind,
                props: self.props,
                children: self.children,
            }),
        }
    }
}

// =============================================================================
// Children
// =============================================================================

/// A node collection: a single node, an ordered sequence, or nothing.
///
/// `None` doubles as the hole (null entry) inside sequences. Sequence
/// entries may themselves be sequences, so every shape the composition
/// layer produces — node, list, list-of-lists, sparse list — is one value
/// of this type and the traversal code can match on it exhaustively.
#[derive(Debug, Clone, Default)]
pub enum Children {
    /// No children, or a hole in a sequence.
    #[default]
    None,
    /// A single concrete node.
    Node(Node),
    /// An ordered sequence of collection entries.
    Seq(Vec<Children>),
}

impl Children {
    /// Build a sequence from anything yielding `Children` entries.
    pub fn seq(entries: impl IntoIterator<Item = Children>) -> Self {
        Self::Seq(entries.into_iter().collect())
    }

    /// Check if this collection is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Cardinality as the host framework counts it: absent is 0, a single
    /// node is 1, a sequence counts its entries as given (holes included,
    /// nested sequences counted as one entry each).
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Node(_) => 1,
            Self::Seq(entries) => entries.len(),
        }
    }

    /// Get as the single node, if this is exactly one node.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Get as a sequence slice, if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Children]> {
        match self {
            Self::Seq(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Option<Node>> for Children {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Self::None, Self::Node)
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Seq(nodes.into_iter().map(Self::Node).collect())
    }
}

impl FromIterator<Node> for Children {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().map(Self::Node).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Node: Send, Sync, Clone);
    assert_impl_all!(Children: Send, Sync, Clone);

    #[test]
    fn test_node_builder() {
        let node = Node::component("Line")
            .prop("stroke", "#8884d8")
            .prop("strokeWidth", 2.0)
            .build();

        assert_eq!(node.display_name(), "Line");
        assert_eq!(node.props().string("stroke"), Some("#8884d8"));
        assert_eq!(node.props().number("strokeWidth"), Some(2.0));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_builder_child_promotion() {
        let one = Node::component("Tooltip")
            .child(Node::tag("rect").build())
            .build();
        assert_eq!(one.children().count(), 1);

        let two = Node::component("Tooltip")
            .child(Node::tag("rect").build())
            .child(Node::tag("text").build())
            .build();
        assert_eq!(two.children().count(), 2);
    }

    #[test]
    fn test_clone_shares_identity() {
        let node = Node::tag("rect").build();
        let clone = node.clone();
        assert!(node.ptr_eq(&clone));

        let rebuilt = Node::tag("rect").build();
        assert!(!node.ptr_eq(&rebuilt));
    }

    #[test]
    fn test_declared_name_only_for_components() {
        assert_eq!(
            Node::component("Bar").build().declared_name(),
            Some("Bar")
        );
        assert_eq!(Node::tag("rect").build().declared_name(), None);
        assert_eq!(Node::fragment().build().declared_name(), None);
    }

    #[test]
    fn test_children_count() {
        assert_eq!(Children::None.count(), 0);
        assert_eq!(Children::Node(Node::tag("g").build()).count(), 1);

        let seq = Children::seq([
            Children::Node(Node::tag("g").build()),
            Children::None,
            Children::Seq(vec![]),
        ]);
        assert_eq!(seq.count(), 3);
    }
}
