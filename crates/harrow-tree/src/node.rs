//! Immutable, reference-counted concrete syntax tree nodes.

use harrow_core::{Length, Symbol};
use std::rc::Rc;

struct NodeData {
    symbol: Symbol,
    children: Box<[Node]>,
    padding: Length,
    size: Length,
    is_extra: bool,
    /// Cached `padding + size + sum(child.total_size())`. Safe to cache
    /// because nodes are immutable once built.
    total_size: Length,
}

/// A node in a concrete syntax tree.
///
/// Cloning a `Node` bumps a reference count rather than copying the
/// subtree — the driver relies on this to hand the same subtree back to a
/// caller across incremental reparses (see `ParseStack::iter_from_top` in
/// `harrow-driver`, and property 6 in the design notes).
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
    /// Build a leaf token: a node with no children, carrying its own
    /// padding (the whitespace/ignored text immediately before it) and
    /// size (its own text extent).
    pub fn leaf(symbol: Symbol, padding: Length, size: Length, is_extra: bool) -> Node {
        Node(Rc::new(NodeData {
            symbol,
            children: Box::new([]),
            padding,
            size,
            is_extra,
            total_size: padding + size,
        }))
    }

    /// Build an internal node from already-built children (extras
    /// included). Internal nodes carry no text of their own — their
    /// `padding` and `size` are both zero; the leading gap before the
    /// node's content lives on its first child (or a leading extra).
    pub fn internal(symbol: Symbol, children: Vec<Node>, is_extra: bool) -> Node {
        let children = children.into_boxed_slice();
        let total_size = children
            .iter()
            .fold(Length::ZERO, |acc, child| acc + child.total_size());
        Node(Rc::new(NodeData {
            symbol,
            children,
            padding: Length::ZERO,
            size: Length::ZERO,
            is_extra,
            total_size,
        }))
    }

    pub fn symbol(&self) -> Symbol {
        self.0.symbol
    }

    pub fn children(&self) -> &[Node] {
        &self.0.children
    }

    pub fn padding(&self) -> Length {
        self.0.padding
    }

    pub fn size(&self) -> Length {
        self.0.size
    }

    pub fn is_extra(&self) -> bool {
        self.0.is_extra
    }

    pub fn is_leaf(&self) -> bool {
        self.0.children.is_empty()
    }

    /// `padding + size + Σ total_size(child)`, cached at construction.
    pub fn total_size(&self) -> Length {
        self.0.total_size
    }

    /// Two nodes are the same tree share iff they point at the same
    /// allocation. Used by incremental-reuse tests; not a structural
    /// equality (the driver never needs to diff trees by value).
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A node identical to `self` but marked (or unmarked) extra. Used by
    /// `shift_extra`/`reduce_extra`, which learn a node is extra only at
    /// the moment they shift or reduce it.
    pub fn marked_extra(&self, is_extra: bool) -> Node {
        if self.0.is_extra == is_extra {
            return self.clone();
        }
        Node(Rc::new(NodeData {
            symbol: self.0.symbol,
            children: self.0.children.clone(),
            padding: self.0.padding,
            size: self.0.size,
            is_extra,
            total_size: self.0.total_size,
        }))
    }

    /// A node identical to `self` but with its `padding` replaced. Used by
    /// error recovery, which learns the exact skipped span only after
    /// locating a recovery point.
    pub fn with_padding(&self, padding: Length) -> Node {
        Node(Rc::new(NodeData {
            symbol: self.0.symbol,
            children: self.0.children.clone(),
            padding,
            size: self.0.size,
            is_extra: self.0.is_extra,
            total_size: padding + self.0.size,
        }))
    }

    /// A node identical to `self` but with its `size` replaced.
    pub fn with_size(&self, size: Length) -> Node {
        Node(Rc::new(NodeData {
            symbol: self.0.symbol,
            children: self.0.children.clone(),
            padding: self.0.padding,
            size,
            is_extra: self.0.is_extra,
            total_size: self.0.padding + size,
        }))
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(node: &Node, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            if node.is_leaf() {
                write!(f, "{}", node.symbol())?;
            } else {
                write!(f, "({}", node.symbol())?;
                for child in node.children() {
                    write!(f, " ")?;
                    write_node(child, f)?;
                }
                write!(f, ")")?;
            }
            Ok(())
        }
        write_node(self, f)
    }
}
