//! The layout pass.
//!
//! One pass is a strict parent-before-child sweep. Each container, in turn:
//!
//! 1. has already been sized and placed by its parent (roots by the
//!    viewport), using its freshly resolved [`ResolvedBox`]
//! 2. resolves and places its visible children without scrolling, using a
//!    vertical cursor that starts at `padding_up`
//! 3. measures overflow of the children's margin boxes against its own
//!    total size, updates its scroll bounds and clamps its scroll offset
//! 4. shifts the placed children by the content offset (scroll plus
//!    negative overflow)
//! 5. recurses into its container children, passing its own content size
//!    as their percentage base
//!
//! Placement per child:
//!
//! ```text
//! static     y += margin_up
//!            frame.origin = (padding_left + margin_left, y)
//!            y += total_height + margin_down
//! relative   as static, origin shifted by (pos_x, pos_y)
//! absolute   frame.origin = (pos_x + margin_left, pos_y + margin_up); y unchanged
//! leaf       anchored: clamped anchor rectangle; y unchanged
//!            otherwise: origin = (padding_left, y); y += height
//! hidden     skipped entirely
//! ```
//!
//! The pass never fails. A node that cannot be laid out keeps its previous
//! frame.

use trellis_units::{Point, ResolveContext};

use crate::box_model::{EdgeSizes, Rect, ResolvedBox};
use crate::config::LayoutConfig;
use crate::overflow::Overflow;
use crate::positioned::PositionMode;
use crate::tree::{LayoutTree, NodeId, NodeKind};

/// A child placed by [`place_children`], before scrolling.
#[derive(Debug, Clone, Copy)]
struct Placement {
    id: NodeId,
    frame: Rect,
    margin_box: Rect,
}

/// Run a full pass over `tree`.
pub fn layout_tree(tree: &mut LayoutTree, config: &LayoutConfig) {
    let viewport = tree.viewport();
    let roots: Vec<NodeId> = tree.roots().collect();

    // The viewport acts as an unpadded, unscrolled parent of every root.
    let window = ResolvedBox {
        content: viewport,
        ..ResolvedBox::default()
    };
    let placed = place_children(tree, &roots, &window, &ResolveContext::root(viewport));
    for placement in &placed {
        tree.set_frame(placement.id, placement.frame);
    }
    for placement in placed {
        layout_container(tree, placement.id, config);
    }
    tree.clear_dirty();
}

/// Lay out the children of an already placed container, then recurse.
fn layout_container(tree: &mut LayoutTree, id: NodeId, config: &LayoutConfig) {
    let Some(container) = tree.container(id) else {
        return;
    };
    let resolved = *container.resolved();
    let viewport = tree.viewport();
    let children = tree.children(id).to_vec();

    let ctx = ResolveContext::new(resolved.content, viewport);
    let placed = place_children(tree, &children, &resolved, &ctx);
    let overflow = Overflow::measure(
        placed.iter().map(|placement| placement.margin_box),
        resolved.total_size(),
    );

    let Some(container) = tree.container_mut(id) else {
        return;
    };
    container.content_mut().update_overflow(overflow);
    let offset = container.content().content_offset();
    if config.debug_outputs || container.debug_outputs() {
        log::debug!(
            target: "layout",
            "{id:?}: total {}x{}, overflow x {} y {}, scroll ({}, {})",
            resolved.total_width(),
            resolved.total_height(),
            overflow.size_x(),
            overflow.size_y(),
            container.content().scroll_left(),
            container.content().scroll_top(),
        );
    }

    for placement in &placed {
        tree.set_frame(placement.id, placement.frame.translate(offset.x, offset.y));
    }
    for placement in placed {
        layout_container(tree, placement.id, config);
    }
}

/// Resolve and place `children` inside a parent whose geometry is `parent`.
///
/// Frames are relative to the parent's top-left corner and not yet
/// scrolled. Containers get their resolved box stored; anchored leaves get
/// their anchors clamped.
fn place_children(
    tree: &mut LayoutTree,
    children: &[NodeId],
    parent: &ResolvedBox,
    ctx: &ResolveContext,
) -> Vec<Placement> {
    let total = parent.total_size();
    let padding = parent.padding;
    let mut cursor_y = padding.up;
    let mut placed = Vec::with_capacity(children.len());

    for &id in children {
        let Some(node) = tree.get_mut(id) else {
            continue;
        };
        let placement = match &mut node.kind {
            NodeKind::Container(container) => {
                if !container.visibility().occupies_space() {
                    continue;
                }
                let resolved = container.resolve(ctx);
                container.set_resolved(resolved);
                let (origin, advance) =
                    place_container(container.position_mode(), &resolved, &padding, cursor_y);
                cursor_y += advance;
                let frame = Rect::from_parts(origin, resolved.total_size());
                Placement {
                    id,
                    frame,
                    margin_box: resolved.margin_box(frame),
                }
            }
            NodeKind::Leaf(leaf) => {
                if !leaf.visibility.occupies_space() {
                    continue;
                }
                let frame = match leaf.apply_anchors(total, &padding) {
                    Some(frame) => frame,
                    None => {
                        let frame = Rect::from_parts(Point::new(padding.left, cursor_y), leaf.size);
                        cursor_y += leaf.size.height;
                        frame
                    }
                };
                Placement {
                    id,
                    frame,
                    margin_box: frame,
                }
            }
        };
        placed.push(placement);
    }
    placed
}

/// Origin of a container child and how far it moves the cursor.
fn place_container(
    mode: PositionMode,
    child: &ResolvedBox,
    parent_padding: &EdgeSizes,
    cursor_y: f64,
) -> (Point, f64) {
    let margin = &child.margin;
    if !mode.in_flow() {
        return (
            Point::new(child.offset.x + margin.left, child.offset.y + margin.up),
            0.0,
        );
    }
    let mut origin = Point::new(parent_padding.left + margin.left, cursor_y + margin.up);
    if mode == PositionMode::Relative {
        origin = origin.translate(child.offset.x, child.offset.y);
    }
    (origin, margin.up + child.total_height() + margin.down)
}

