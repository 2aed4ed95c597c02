//! Collection flattening and its single-slot memo cache.
//!
//! `flatten` normalizes any `Children` value into a flat ordered node
//! sequence: holes are dropped and fragments are replaced in place by
//! their own flattened children. The result never contains fragments,
//! which makes the operation idempotent.
//!
//! Memoization is explicit rather than global: the owning rendering
//! context holds a `FlattenCache` and keys it with opaque `CacheToken`s
//! minted per collection instance. The cache compares tokens only — never
//! content — and holds exactly one `(token, output)` pair.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::node::{Children, Node};

// =============================================================================
// flatten
// =============================================================================

/// Flatten a collection into an ordered node sequence.
///
/// Order-preserving except for fragment splicing, which substitutes a
/// fragment's flattened children at the fragment's position.
pub fn flatten(children: &Children) -> Vec<Node> {
    let mut out = Vec::new();
    collect(children, &mut out);
    out
}

fn collect(children: &Children, out: &mut Vec<Node>) {
    match children {
        Children::None => {}
        Children::Node(node) => push_node(node, out),
        Children::Seq(entries) => {
            for entry in entries {
                collect(entry, out);
            }
        }
    }
}

fn push_node(node: &Node, out: &mut Vec<Node>) {
    if node.kind().is_fragment() {
        collect(node.children(), out);
    } else {
        out.push(node.clone());
    }
}

// =============================================================================
// CacheToken
// =============================================================================

/// Opaque identity token for a collection instance.
///
/// Mint a fresh token whenever a collection is (re)constructed; reuse the
/// same token for as long as the same instance is passed around. Two equal
/// tokens mean the same instance — the cache never inspects content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheToken(u64);

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

impl CacheToken {
    /// Mint a fresh, process-unique token.
    pub fn mint() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    /// Reconstruct a token from its raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token value.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// FlattenCache
// =============================================================================

/// Single-slot memo for `flatten`, keyed by collection identity.
///
/// A hit returns an `Arc` to the previously computed sequence; any other
/// token recomputes and replaces the slot. Valid for the lifetime of its
/// owner — there is no expiry beyond slot replacement.
#[derive(Debug, Default)]
pub struct FlattenCache {
    slot: Option<(CacheToken, Arc<[Node]>)>,
}

impl FlattenCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `children`, reusing the cached sequence when `token`
    /// matches the slot.
    pub fn flatten(&mut self, token: CacheToken, children: &Children) -> Arc<[Node]> {
        if let Some((cached_token, cached)) = &self.slot
            && *cached_token == token
        {
            return Arc::clone(cached);
        }
        let out: Arc<[Node]> = flatten(children).into();
        self.slot = Some((token, Arc::clone(&out)));
        out
    }

    /// The currently cached token, if any.
    pub fn cached_token(&self) -> Option<CacheToken> {
        self.slot.as_ref().map(|(token, _)| *token)
    }

    /// Drop the cached pair.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

// =============================================================================
// SharedFlattenCache
// =============================================================================

/// Thread-safe wrapper around `FlattenCache` for rendering contexts that
/// share the memo slot across an `Arc` boundary.
#[derive(Debug, Default)]
pub struct SharedFlattenCache {
    inner: Arc<Mutex<FlattenCache>>,
}

impl Clone for SharedFlattenCache {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedFlattenCache {
    /// Create an empty shared cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten through the shared slot. See `FlattenCache::flatten`.
    pub fn flatten(&self, token: CacheToken, children: &Children) -> Arc<[Node]> {
        self.inner.lock().flatten(token, children)
    }

    /// Drop the cached pair.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.display_name()).collect()
    }

    #[test]
    fn test_flatten_drops_holes() {
        let children = Children::seq([
            Children::Node(Node::tag("rect").build()),
            Children::None,
            Children::Node(Node::tag("circle").build()),
        ]);
        assert_eq!(names(&flatten(&children)), ["rect", "circle"]);
    }

    #[test]
    fn test_flatten_splices_fragment_in_place() {
        // [C, Fragment(A, B)] flattens to [C, A, B]
        let frag = Node::fragment()
            .child(Node::component("A").build())
            .child(Node::component("B").build())
            .build();
        let children = Children::seq([
            Children::Node(Node::component("C").build()),
            Children::Node(frag),
        ]);
        assert_eq!(names(&flatten(&children)), ["C", "A", "B"]);
    }

    #[test]
    fn test_flatten_recurses_nested_fragments_and_seqs() {
        let inner_frag = Node::fragment().child(Node::tag("path").build()).build();
        let outer_frag = Node::fragment()
            .children(Children::seq([
                Children::Node(inner_frag),
                Children::Seq(vec![Children::Node(Node::tag("text").build())]),
            ]))
            .build();
        let children = Children::Node(outer_frag);
        assert_eq!(names(&flatten(&children)), ["path", "text"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let frag = Node::fragment()
            .child(Node::component("A").build())
            .child(Node::component("B").build())
            .build();
        let children = Children::seq([
            Children::Node(Node::component("C").build()),
            Children::None,
            Children::Node(frag),
        ]);

        let once = flatten(&children);
        let again = flatten(&once.clone().into());
        assert_eq!(once.len(), again.len());
        for (a, b) in once.iter().zip(again.iter()) {
            assert!(a.ptr_eq(b));
        }
    }

    #[test]
    fn test_cache_hit_returns_identical_sequence() {
        let children: Children = vec![Node::tag("rect").build()].into();
        let token = CacheToken::mint();
        let mut cache = FlattenCache::new();

        let first = cache.flatten(token, &children);
        let second = cache.flatten(token, &children);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_recomputes_for_new_token_even_if_content_equal() {
        let children: Children = vec![Node::tag("rect").build()].into();
        let mut cache = FlattenCache::new();

        let first = cache.flatten(CacheToken::mint(), &children);
        let second = cache.flatten(CacheToken::mint(), &children);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_holds_single_slot() {
        let a: Children = vec![Node::tag("rect").build()].into();
        let b: Children = vec![Node::tag("circle").build()].into();
        let (token_a, token_b) = (CacheToken::mint(), CacheToken::mint());
        let mut cache = FlattenCache::new();

        let first_a = cache.flatten(token_a, &a);
        cache.flatten(token_b, &b);
        assert_eq!(cache.cached_token(), Some(token_b));

        // The earlier pair was evicted; the same token recomputes.
        let second_a = cache.flatten(token_a, &a);
        assert!(!Arc::ptr_eq(&first_a, &second_a));
    }

    #[test]
    fn test_shared_cache() {
        let children: Children = vec![Node::tag("g").build()].into();
        let token = CacheToken::mint();
        let cache = SharedFlattenCache::new();
        let handle = cache.clone();

        let first = cache.flatten(token, &children);
        let second = handle.flatten(token, &children);
        assert!(Arc::ptr_eq(&first, &second));

        cache.clear();
        let third = handle.flatten(token, &children);
        assert!(!Arc::ptr_eq(&first, &third));
    }
}
