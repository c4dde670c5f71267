//! Arena-based layout tree.
//!
//! Nodes live in one vector and refer to each other by [`NodeId`]. Nodes are
//! never removed; [`LayoutTree::detach`] only unlinks them, so ids stay valid
//! for the lifetime of the tree.
//!
//! Frames are stored relative to the parent's top-left corner (roots:
//! relative to the viewport).

use trellis_common::warn_once;
use trellis_units::{ResolveContext, Size};

use crate::box_model::Rect;
use crate::container::ContainerBox;
use crate::content::ScrollDelta;
use crate::error::TreeError;
use crate::leaf::LeafWidget;

/// Index of a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// What a node is.
#[derive(Debug)]
pub enum NodeKind {
    /// A container with its own box model and children.
    Container(ContainerBox),
    /// An opaque host widget.
    Leaf(LeafWidget),
}

/// A node and its place in the tree.
#[derive(Debug)]
pub struct Node {
    /// Container or leaf data.
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    frame: Rect,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            frame: Rect::default(),
        }
    }

    /// The parent, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in layout order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Rectangle computed by the last pass, relative to the parent.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// The container data, if this node is a container.
    #[must_use]
    pub const fn as_container(&self) -> Option<&ContainerBox> {
        match &self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Leaf(_) => None,
        }
    }
}

/// The node tree the layout engine works on.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<Node>,
    viewport: Size,
}

impl LayoutTree {
    /// An empty tree inside a viewport of the given size.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            nodes: Vec::new(),
            viewport,
        }
    }

    /// Size of the root window.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the root window. Every container needs layout afterwards.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for node in &mut self.nodes {
            if let NodeKind::Container(container) = &mut node.kind {
                container.mark_dirty();
            }
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached container.
    pub fn add_container(&mut self, container: ContainerBox) -> NodeId {
        self.alloc(NodeKind::Container(container))
    }

    /// Add a detached leaf.
    pub fn add_leaf(&mut self, leaf: LeafWidget) -> NodeId {
        self.alloc(NodeKind::Leaf(leaf))
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails when either node is unknown, `parent` is a leaf, `child` is
    /// already attached, or `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.get(parent).ok_or(TreeError::UnknownNode(parent))?;
        if parent_node.as_container().is_none() {
            return Err(TreeError::LeafParent(parent));
        }
        let child_node = self.get(child).ok_or(TreeError::UnknownNode(child))?;
        if let Some(current) = child_node.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        if child == parent || self.ancestors(parent).any(|id| id == child) {
            return Err(TreeError::Cycle { child, parent });
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        self.mark_dirty(parent);
        Ok(())
    }

    /// Detach `child` from its parent. Detaching a root is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when `child` does not exist.
    pub fn detach(&mut self, child: NodeId) -> Result<(), TreeError> {
        let node = self.get_mut(child).ok_or(TreeError::UnknownNode(child))?;
        let Some(parent) = node.parent.take() else {
            return Ok(());
        };
        self.nodes[parent.0].children.retain(|&id| id != child);
        self.mark_dirty(parent);
        Ok(())
    }

    /// A node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// A node by id, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// The container at `id`, if it is one.
    #[must_use]
    pub fn container(&self, id: NodeId) -> Option<&ContainerBox> {
        self.get(id).and_then(Node::as_container)
    }

    /// The container at `id`, mutably, if it is one.
    pub fn container_mut(&mut self, id: NodeId) -> Option<&mut ContainerBox> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Leaf(_) => None,
        }
    }

    /// The leaf at `id`, if it is one.
    #[must_use]
    pub fn leaf(&self, id: NodeId) -> Option<&LeafWidget> {
        match &self.get(id)?.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Container(_) => None,
        }
    }

    /// The leaf at `id`, mutably, if it is one.
    pub fn leaf_mut(&mut self, id: NodeId) -> Option<&mut LeafWidget> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Container(_) => None,
        }
    }

    /// The parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children of a node, in layout order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId(index))
    }

    /// Iterate over the ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Rectangle of a node relative to its parent.
    #[must_use]
    pub fn frame(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(Node::frame)
    }

    /// Rectangle of a node relative to the viewport.
    #[must_use]
    pub fn absolute_frame(&self, id: NodeId) -> Option<Rect> {
        let frame = self.frame(id)?;
        Some(self.ancestors(id).fold(frame, |frame, ancestor| {
            let origin = self.get(ancestor).map_or(Rect::default(), Node::frame);
            frame.translate(origin.x, origin.y)
        }))
    }

    pub(crate) fn set_frame(&mut self, id: NodeId, frame: Rect) {
        if let Some(node) = self.get_mut(id) {
            node.frame = frame;
        }
    }

    /// The context a container's geometry resolves in: its parent's content
    /// size and the viewport.
    ///
    /// The parent chain is walked from the root down on every call, so the
    /// result never depends on a previous pass. A node without a usable
    /// parent resolves like a root.
    #[must_use]
    pub fn resolve_context(&self, id: NodeId) -> ResolveContext {
        let root = ResolveContext::root(self.viewport);
        let mut chain: Vec<NodeId> = self.ancestors(id).collect();
        chain.reverse();

        let mut ctx = root;
        for ancestor in chain {
            match self.container(ancestor) {
                Some(container) => {
                    ctx = ResolveContext::new(container.resolve(&ctx).content, self.viewport);
                }
                None => {
                    warn_once(
                        "layout",
                        &format!("{ancestor:?} is not a container; resolving against the viewport"),
                    );
                    ctx = root;
                }
            }
        }
        ctx
    }

    /// Whether any container changed since the last pass.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.nodes
            .iter()
            .filter_map(Node::as_container)
            .any(ContainerBox::needs_layout)
    }

    /// Mark the container at `id` as needing layout.
    pub fn mark_dirty(&mut self, id: NodeId) {
        if let Some(container) = self.container_mut(id) {
            container.mark_dirty();
        }
    }

    pub(crate) fn clear_dirty(&mut self) {
        for node in &mut self.nodes {
            if let NodeKind::Container(container) = &mut node.kind {
                container.clear_dirty();
            }
        }
    }

    /// Scroll the container at `id` by `(dx, dy)`, clamped to its scroll
    /// bounds, and move its children by the applied amount.
    ///
    /// Returns the applied delta; zero for unknown ids and leaves.
    pub fn scroll_by(&mut self, id: NodeId, dx: f64, dy: f64) -> ScrollDelta {
        let Some(container) = self.container_mut(id) else {
            return ScrollDelta::default();
        };
        let delta = container.content_mut().apply_scroll(dx, dy);
        self.shift_children(id, delta);
        delta
    }

    pub(crate) fn shift_children(&mut self, id: NodeId, delta: ScrollDelta) {
        if delta.is_zero() {
            return;
        }
        let children = self.children(id).to_vec();
        for child in children {
            if let Some(node) = self.get_mut(child) {
                node.frame = node.frame.translate(delta.dx, delta.dy);
            }
        }
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a LayoutTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
