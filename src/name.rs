//! Display-name resolution for type filters.
//!
//! The matchers accept either plain tag names or component-like values
//! whose identity is carried by optional display metadata. Resolution
//! degrades through a fixed fallback chain and never fails.

use compact_str::CompactString;

/// Placeholder name for component-like values that carry no display
/// metadata at all.
pub const FALLBACK_COMPONENT_NAME: &str = "Component";

// =============================================================================
// ComponentRef
// =============================================================================

/// Metadata of a component-like value: an optional display name and an
/// optional internal name.
#[derive(Debug, Clone, Default)]
pub struct ComponentRef {
    pub display_name: Option<CompactString>,
    pub name: Option<CompactString>,
}

impl ComponentRef {
    /// A reference carrying only a display name.
    pub fn with_display_name(display_name: impl Into<CompactString>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            name: None,
        }
    }

    /// A reference carrying only an internal name.
    pub fn with_name(name: impl Into<CompactString>) -> Self {
        Self {
            display_name: None,
            name: Some(name.into()),
        }
    }

    /// Resolve: display name, else internal name, else the placeholder.
    pub fn resolved(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(FALLBACK_COMPONENT_NAME)
    }
}

// =============================================================================
// TypeFilter
// =============================================================================

/// One entry of a type specification: a plain name or a component-like
/// value.
#[derive(Debug, Clone)]
pub enum TypeFilter {
    /// A plain type name, used as-is.
    Name(CompactString),
    /// A component-like value, resolved through its display metadata.
    Component(ComponentRef),
}

impl TypeFilter {
    /// The name this filter matches against.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Component(c) => c.resolved(),
        }
    }
}

impl From<&str> for TypeFilter {
    fn from(name: &str) -> Self {
        Self::Name(CompactString::from(name))
    }
}

impl From<CompactString> for TypeFilter {
    fn from(name: CompactString) -> Self {
        Self::Name(name)
    }
}

impl From<ComponentRef> for TypeFilter {
    fn from(component: ComponentRef) -> Self {
        Self::Component(component)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a possibly-absent type value to a display name.
///
/// A plain name resolves to itself, an absent value to the empty string,
/// and a component-like value through display name → internal name →
/// placeholder.
pub fn get_display_name(value: Option<&TypeFilter>) -> &str {
    match value {
        None => "",
        Some(filter) => filter.display_name(),
    }
}

// =============================================================================
// Tests
// =============================================================================
