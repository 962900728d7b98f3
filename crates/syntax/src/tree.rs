//! Arena-backed source tree produced by [`parse`](crate::parse).

use sass_order_types::Position;

/// Handle of a [`SourceNode`] inside its [`SourceTree`].
///
/// Ids are assigned in creation order, which is also source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Get the raw index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of structural line created a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A selector line (`.button`, `&:hover`, `a`, ...)
    Selector,
    /// An at-rule line (`@media ...`, `@include ...`, ...)
    Function,
    /// A placeholder selector line (`%base`)
    PlaceholderSelector,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selector => "selector",
            Self::Function => "function",
            Self::PlaceholderSelector => "placeholder selector",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a property-like entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Property,
    Mixin,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Mixin => "mixin",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration or invocation inside a node's body.
///
/// These are the units the ordering checker inspects. Mixin entries carry
/// no name: the ordering convention only cares that the call is there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `name: value`
    Property {
        name: String,
        value: String,
        position: Position,
    },
    /// `@include name` or `+name`
    Mixin { position: Position },
}

impl Entry {
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Property { .. } => EntryKind::Property,
            Self::Mixin { .. } => EntryKind::Mixin,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Property { position, .. } | Self::Mixin { position } => *position,
        }
    }

    /// The property name, for property entries
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Self::Property { name, .. } => Some(name),
            Self::Mixin { .. } => None,
        }
    }
}

/// One structural unit (selector, at-rule or placeholder selector) and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    pub kind: NodeKind,
    /// Reconstructed selector, at-rule text after `@`, or placeholder name after `%`
    pub name: String,
    pub position: Position,
    /// Enclosing node, `None` at top level
    pub parent: Option<NodeId>,
    /// Nodes created while this node was the enclosing node
    pub children: Vec<NodeId>,
    /// Property-like entries in source order
    pub entries: Vec<Entry>,
    /// Prefix prepended to selectors nested in this node
    pub(crate) selector: String,
}

impl SourceNode {
    /// The selector text that nested selectors are appended to.
    ///
    /// A selector contributes its own name, a placeholder contributes
    /// `%name`, and an at-rule passes its parent's selector through.
    #[must_use]
    pub fn effective_selector(&self) -> &str {
        &self.selector
    }
}

/// All nodes of one parsed file, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTree {
    nodes: Vec<SourceNode>,
}

impl SourceTree {
    pub(crate) fn push(
        &mut self,
        kind: NodeKind,
        name: String,
        selector: String,
        position: Position,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SourceNode {
            kind,
            name,
            position,
            parent,
            children: Vec::new(),
            entries: Vec::new(),
            selector,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    pub(crate) fn push_entry(&mut self, id: NodeId, entry: Entry) {
        self.nodes[id.index()].entries.push(entry);
    }

    /// Get a node by id.
    ///
    /// Panics if the id belongs to a different tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SourceNode {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SourceNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index as u32), node))
    }

    /// Iterate over top-level nodes
    pub fn roots(&self) -> impl Iterator<Item = (NodeId, &SourceNode)> + '_ {
        self.iter().filter(|(_, node)| node.parent.is_none())
    }

    /// Walk from a node's parent up to its top-level ancestor
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).parent, |id| self.node(*id).parent)
    }

    /// Number of enclosing nodes (0 at top level)
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SourceTree, NodeId, NodeId, NodeId) {
        let mut tree = SourceTree::default();
        let root = tree.push(
            NodeKind::Selector,
            ".".to_string(),
            ".".to_string(),
            Position::new(1, 0),
            None,
        );
        let media = tree.push(
            NodeKind::Function,
            "media print".to_string(),
            ".".to_string(),
            Position::new(2, 2),
            Some(root),
        );
        let inner = tree.push(
            NodeKind::Selector,
            ".&".to_string(),
            ".&".to_string(),
            Position::new(3, 4),
            Some(media),
        );
        (tree, root, media, inner)
    }

    #[test]
    fn test_push_links_parent_and_children() {
        let (tree, root, media, inner) = sample();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.node(root).children, vec![media]);
        assert_eq!(tree.node(media).children, vec![inner]);
        assert_eq!(tree.node(inner).parent, Some(media));
    }

    #[test]
    fn test_ancestors_and_depth() {
        let (tree, root, media, inner) = sample();
        assert_eq!(tree.ancestors(inner).collect::<Vec<_>>(), vec![media, root]);
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(inner), 2);
    }

    #[test]
    fn test_roots() {
        let (tree, root, _, _) = sample();
        let roots: Vec<_> = tree.roots().map(|(id, _)| id).collect();
        assert_eq!(roots, vec![root]);
    }

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::Property {
            name: "color".to_string(),
            value: "red".to_string(),
            position: Position::new(4, 2),
        };
        assert_eq!(entry.kind(), EntryKind::Property);
        assert_eq!(entry.property_name(), Some("color"));
        assert_eq!(entry.position(), Position::new(4, 2));

        let mixin = Entry::Mixin {
            position: Position::new(5, 2),
        };
        assert_eq!(mixin.kind().as_str(), "mixin");
        assert_eq!(mixin.property_name(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::PlaceholderSelector.to_string(), "placeholder selector");
        assert_eq!(EntryKind::Mixin.to_string(), "mixin");
    }
}
