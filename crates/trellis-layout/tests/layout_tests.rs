//! Integration tests for the layout pass.

use trellis_common::was_warned;
use trellis_layout::{
    Anchors, ContainerBox, LayoutConfig, LayoutTree, LeafWidget, NodeId, NodeKind,
    OverflowBehaviour, PositionMode, Rect, TreeError, Visibility, layout_tree,
};
use trellis_units::{LengthPair, ResolveContext, Size};

const VIEWPORT: Size = Size::new(800.0, 600.0);

/// Helper: a tree with one root container of the given pixel size.
fn tree_with_root(width: f64, height: f64) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new(VIEWPORT);
    let root = tree.add_container(ContainerBox::with_size(width, height));
    (tree, root)
}

/// Helper: append a static container child of the given pixel size.
fn add_box(tree: &mut LayoutTree, parent: NodeId, width: f64, height: f64) -> NodeId {
    add_child(tree, parent, ContainerBox::with_size(width, height))
}

fn add_child(tree: &mut LayoutTree, parent: NodeId, container: ContainerBox) -> NodeId {
    let id = tree.add_container(container);
    tree.append_child(parent, id).unwrap();
    id
}

fn layout(tree: &mut LayoutTree) {
    layout_tree(tree, &LayoutConfig::default());
}

fn frame(tree: &LayoutTree, id: NodeId) -> Rect {
    tree.frame(id).unwrap()
}

// ---------------------------------------------------------------------------
// Static stacking
// ---------------------------------------------------------------------------

#[test]
fn test_static_children_stack_vertically() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    let a = add_box(&mut tree, root, 50.0, 10.0);
    let b = add_box(&mut tree, root, 50.0, 20.0);
    let c = add_box(&mut tree, root, 50.0, 30.0);
    layout(&mut tree);

    assert_eq!(frame(&tree, a).y, 0.0);
    assert_eq!(frame(&tree, b).y, 10.0);
    assert_eq!(frame(&tree, c).y, 30.0);
    assert_eq!(frame(&tree, c).bottom(), 60.0);
    assert!(!tree.container(root).unwrap().content().overflow().is_overflowed());
}

#[test]
fn test_static_stacking_includes_margins_and_child_padding() {
    let (mut tree, root) = tree_with_root(100.0, 200.0);
    let mut first = ContainerBox::with_size(50.0, 10.0);
    first.set_margin_str("5px 0px 7px 3px", false).unwrap();
    first.set_padding_str("2px", false).unwrap();
    let first = add_child(&mut tree, root, first);
    let second = add_box(&mut tree, root, 50.0, 10.0);
    layout(&mut tree);

    // y = margin_up, total height = 10 + 2 + 2.
    assert_eq!(frame(&tree, first), Rect::new(3.0, 5.0, 54.0, 14.0));
    // 5 + 14 + 7
    assert_eq!(frame(&tree, second).y, 26.0);
}

#[test]
fn test_parent_padding_offsets_cursor() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    tree.container_mut(root)
        .unwrap()
        .set_padding_str("4px 0px 0px 6px", false)
        .unwrap();
    let child = add_box(&mut tree, root, 10.0, 10.0);
    layout(&mut tree);

    assert_eq!(frame(&tree, child).origin().x, 6.0);
    assert_eq!(frame(&tree, child).origin().y, 4.0);
}

#[test]
fn test_roots_stack_in_viewport() {
    let mut tree = LayoutTree::new(VIEWPORT);
    let first = tree.add_container(ContainerBox::with_size(10.0, 40.0));
    let second = tree.add_container(ContainerBox::with_size(10.0, 40.0));
    layout(&mut tree);
    assert_eq!(frame(&tree, first).y, 0.0);
    assert_eq!(frame(&tree, second).y, 40.0);
}

// ---------------------------------------------------------------------------
// Relative, absolute, hidden
// ---------------------------------------------------------------------------

#[test]
fn test_relative_child_is_offset_but_advances_cursor() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    let mut shifted = ContainerBox::with_size(20.0, 10.0);
    shifted.set_position_mode(PositionMode::Relative, false);
    shifted.set_position(LengthPair::px(5.0), LengthPair::px(3.0), false);
    let shifted = add_child(&mut tree, root, shifted);
    let after = add_box(&mut tree, root, 20.0, 10.0);
    layout(&mut tree);

    assert_eq!(frame(&tree, shifted).origin().x, 5.0);
    assert_eq!(frame(&tree, shifted).origin().y, 3.0);
    assert_eq!(frame(&tree, after).y, 10.0);
}

#[test]
fn test_absolute_child_ignores_cursor_and_padding() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    tree.container_mut(root)
        .unwrap()
        .set_padding_str("10px", false)
        .unwrap();
    let mut pinned = ContainerBox::with_size(20.0, 20.0);
    pinned.set_position_mode(PositionMode::Absolute, false);
    pinned.set_position(LengthPair::percent(0.5), LengthPair::px(30.0), false);
    pinned.set_margin_str("1px 0px 0px 2px", false).unwrap();
    let pinned = add_child(&mut tree, root, pinned);
    let flowing = add_box(&mut tree, root, 20.0, 20.0);
    layout(&mut tree);

    // pos_x is 50% of the parent's content width (100).
    assert_eq!(frame(&tree, pinned).origin().x, 52.0);
    assert_eq!(frame(&tree, pinned).origin().y, 31.0);
    assert_eq!(frame(&tree, flowing).y, 10.0);
}

#[test]
fn test_hidden_child_takes_no_space() {
    let (mut tree, root) = tree_with_root(100.0, 15.0);
    let mut hidden = ContainerBox::with_size(50.0, 500.0);
    hidden.set_visibility(Visibility::Hidden);
    let _hidden = add_child(&mut tree, root, hidden);
    let visible = add_box(&mut tree, root, 50.0, 10.0);
    layout(&mut tree);

    assert_eq!(frame(&tree, visible).y, 0.0);
    assert!(!tree.container(root).unwrap().content().overflow().is_overflowed());
}

#[test]
fn test_transparent_child_takes_space() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    let mut ghost = ContainerBox::with_size(50.0, 25.0);
    ghost.set_visibility(Visibility::Transparent);
    let _ghost = add_child(&mut tree, root, ghost);
    let after = add_box(&mut tree, root, 50.0, 10.0);
    layout(&mut tree);
    assert_eq!(frame(&tree, after).y, 25.0);
}

// ---------------------------------------------------------------------------
// Percentages and nesting
// ---------------------------------------------------------------------------

#[test]
fn test_percentages_resolve_against_parent_content() {
    let (mut tree, root) = tree_with_root(400.0, 200.0);
    tree.container_mut(root)
        .unwrap()
        .set_padding_str("10px", false)
        .unwrap();
    let mut half = ContainerBox::new();
    half.set_width_str("50%", false).unwrap();
    half.set_height_str("25%", false).unwrap();
    let half = add_child(&mut tree, root, half);
    let mut inner = ContainerBox::new();
    inner.set_width_str("50%", false).unwrap();
    inner.set_height_str("10vh", false).unwrap();
    let inner = add_child(&mut tree, half, inner);
    layout(&mut tree);

    assert_eq!(frame(&tree, half).size(), Size::new(200.0, 50.0));
    assert_eq!(frame(&tree, inner).size(), Size::new(100.0, 60.0));
}

#[test]
fn test_root_percentages_resolve_against_viewport() {
    let mut tree = LayoutTree::new(VIEWPORT);
    let mut root = ContainerBox::new();
    root.set_width_str("100%", false).unwrap();
    root.set_height_str("50vh", false).unwrap();
    let root = tree.add_container(root);
    layout(&mut tree);
    assert_eq!(frame(&tree, root).size(), Size::new(800.0, 300.0));
}

#[test]
fn test_viewport_resize_reflows() {
    let mut tree = LayoutTree::new(VIEWPORT);
    let mut root = ContainerBox::new();
    root.set_width_str("50vw", false).unwrap();
    let root = tree.add_container(root);
    layout(&mut tree);
    assert!(!tree.needs_layout());

    tree.set_viewport(Size::new(1000.0, 600.0));
    assert!(tree.needs_layout());
    layout(&mut tree);
    assert_eq!(frame(&tree, root).width, 500.0);
}

#[test]
fn test_absolute_frame_accumulates_ancestors() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    tree.container_mut(root)
        .unwrap()
        .set_padding_str("5px", false)
        .unwrap();
    let middle = add_box(&mut tree, root, 50.0, 50.0);
    tree.container_mut(middle)
        .unwrap()
        .set_padding_str("5px", false)
        .unwrap();
    let leaf = tree.add_leaf(LeafWidget::new(5.0, 5.0));
    tree.append_child(middle, leaf).unwrap();
    layout(&mut tree);

    assert_eq!(tree.absolute_frame(leaf).unwrap().origin().x, 10.0);
    assert_eq!(tree.absolute_frame(leaf).unwrap().origin().y, 10.0);
}

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

#[test]
fn test_unanchored_leaves_flow() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    let first = tree.add_leaf(LeafWidget::new(30.0, 12.0));
    let second = tree.add_leaf(LeafWidget::new(30.0, 8.0));
    tree.append_child(root, first).unwrap();
    tree.append_child(root, second).unwrap();
    layout(&mut tree);
    assert_eq!(frame(&tree, second), Rect::new(0.0, 12.0, 30.0, 8.0));
}

#[test]
fn test_anchored_leaf_is_clamped_into_padding() {
    let (mut tree, root) = tree_with_root(150.0, 50.0);
    tree.container_mut(root)
        .unwrap()
        .set_padding_str("25px 25px", false)
        .unwrap();
    let leaf = tree.add_leaf(LeafWidget::anchored(Anchors::FULL));
    tree.append_child(root, leaf).unwrap();
    let after = add_box(&mut tree, root, 10.0, 10.0);
    layout(&mut tree);

    // Total 200x100; padding 25 on each side clamps to [0.125, 0.875] x [0.25, 0.75].
    assert_eq!(frame(&tree, leaf), Rect::new(25.0, 25.0, 150.0, 50.0));
    assert_eq!(
        tree.leaf(leaf).unwrap().anchors,
        Some(Anchors::new(0.125, 0.25, 0.875, 0.75))
    );
    // Anchored leaves do not move the cursor.
    assert_eq!(frame(&tree, after).y, 25.0);
}

// ---------------------------------------------------------------------------
// Overflow and scrolling
// ---------------------------------------------------------------------------

#[test]
fn test_overflow_detected_and_scroll_range_set() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    let _a = add_box(&mut tree, root, 100.0, 30.0);
    let _b = add_box(&mut tree, root, 100.0, 50.0);
    layout(&mut tree);

    let content = tree.container(root).unwrap().content();
    assert!(content.overflow().is_overflowed_y());
    assert!(!content.overflow().is_overflowed_x());
    assert_eq!(content.overflow().size_y(), 30.0);
    assert_eq!(content.max_scroll_top(), 30.0);
    assert_eq!(content.min_scroll_top(), 0.0);
    assert!(content.clips_content());
}

#[test]
fn test_overflow_counts_child_margins() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    let mut child = ContainerBox::with_size(100.0, 50.0);
    child.set_margin_str("0px 0px 4px", false).unwrap();
    let _child = add_child(&mut tree, root, child);
    layout(&mut tree);
    assert_eq!(tree.container(root).unwrap().content().overflow().size_y(), 4.0);
}

#[test]
fn test_scroll_clamps_and_moves_children() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    let _a = add_box(&mut tree, root, 100.0, 30.0);
    let b = add_box(&mut tree, root, 100.0, 50.0);
    layout(&mut tree);

    let first = tree.scroll_by(root, 0.0, -25.0);
    assert_eq!(first.dy, -25.0);
    let second = tree.scroll_by(root, 0.0, -10.0);
    assert_eq!(second.dy, -5.0);
    assert_eq!(tree.container(root).unwrap().content().scroll_top(), -30.0);
    assert_eq!(frame(&tree, b).y, 0.0);

    // A later pass keeps the offset.
    layout(&mut tree);
    assert_eq!(frame(&tree, b).y, 0.0);
}

#[test]
fn test_shrinking_content_clamps_scroll_on_next_pass() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    let _a = add_box(&mut tree, root, 100.0, 30.0);
    let b = add_box(&mut tree, root, 100.0, 50.0);
    layout(&mut tree);
    let _ = tree.scroll_by(root, 0.0, -30.0);

    tree.container_mut(b)
        .unwrap()
        .set_height(LengthPair::px(30.0), false);
    layout(&mut tree);
    let content = tree.container(root).unwrap().content();
    assert_eq!(content.max_scroll_top(), 10.0);
    assert_eq!(content.scroll_top(), -10.0);
    assert_eq!(frame(&tree, b).y, 20.0);
}

#[test]
fn test_negative_overflow_is_scrollable() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    let mut above = ContainerBox::with_size(100.0, 10.0);
    above.set_position_mode(PositionMode::Relative, false);
    above.set_position(LengthPair::px(0.0), LengthPair::px(-20.0), false);
    let above = add_child(&mut tree, root, above);
    layout(&mut tree);

    let content = tree.container(root).unwrap().content();
    assert_eq!(content.overflow().negative_y, 20.0);
    assert_eq!(content.max_scroll_top(), 20.0);
    // The content is shifted so the part above the origin is visible.
    assert_eq!(frame(&tree, above).y, 0.0);

    let _ = tree.scroll_by(root, 0.0, -20.0);
    assert_eq!(frame(&tree, above).y, -20.0);
}

#[test]
fn test_negative_overflow_not_offset_when_hidden() {
    let (mut tree, root) = tree_with_root(100.0, 50.0);
    tree.container_mut(root)
        .unwrap()
        .set_overflow_behaviour(OverflowBehaviour::Hidden);
    let mut above = ContainerBox::with_size(100.0, 10.0);
    above.set_position_mode(PositionMode::Relative, false);
    above.set_position(LengthPair::px(0.0), LengthPair::px(-20.0), false);
    let above = add_child(&mut tree, root, above);
    layout(&mut tree);

    assert!(tree.container(root).unwrap().content().clips_content());
    assert_eq!(frame(&tree, above).y, -20.0);
}

#[test]
fn test_visible_overflow_does_not_clip() {
    let (mut tree, root) = tree_with_root(100.0, 10.0);
    tree.container_mut(root)
        .unwrap()
        .set_overflow_behaviour(OverflowBehaviour::Visible);
    let _child = add_box(&mut tree, root, 100.0, 40.0);
    layout(&mut tree);
    let content = tree.container(root).unwrap().content();
    assert!(content.overflow().is_overflowed_y());
    assert!(!content.clips_content());
}

#[test]
fn test_pass_clears_dirty_flags() {
    let (mut tree, root) = tree_with_root(100.0, 10.0);
    let _child = add_box(&mut tree, root, 10.0, 10.0);
    assert!(tree.needs_layout());
    layout(&mut tree);
    assert!(!tree.needs_layout());
    tree.container_mut(root)
        .unwrap()
        .set_width(LengthPair::px(50.0), false);
    assert!(tree.needs_layout());
}

// ---------------------------------------------------------------------------
// Tree structure
// ---------------------------------------------------------------------------

#[test]
fn test_append_child_rejects_invalid_shapes() {
    let (mut tree, root) = tree_with_root(100.0, 100.0);
    let leaf = tree.add_leaf(LeafWidget::new(10.0, 10.0));
    tree.append_child(root, leaf).unwrap();
    let child = add_box(&mut tree, root, 10.0, 10.0);
    let loose = tree.add_container(ContainerBox::with_size(10.0, 10.0));

    assert_eq!(
        tree.append_child(leaf, loose),
        Err(TreeError::LeafParent(leaf))
    );
    assert_eq!(
        tree.append_child(loose, child),
        Err(TreeError::AlreadyAttached {
            child,
            parent: root,
        })
    );
    assert_eq!(
        tree.append_child(child, root),
        Err(TreeError::Cycle {
            child: root,
            parent: child,
        })
    );
    assert_eq!(
        tree.append_child(loose, loose),
        Err(TreeError::Cycle {
            child: loose,
            parent: loose,
        })
    );
    assert_eq!(
        tree.append_child(root, NodeId(99)),
        Err(TreeError::UnknownNode(NodeId(99)))
    );

    assert_eq!(tree.children(root), &[leaf, child]);
    assert_eq!(tree.parent(loose), None);
}

#[test]
fn test_reattached_child_resolves_against_new_parent() {
    let mut tree = LayoutTree::new(VIEWPORT);
    let small = tree.add_container(ContainerBox::with_size(200.0, 100.0));
    let large = tree.add_container(ContainerBox::with_size(400.0, 300.0));
    let mut half = ContainerBox::new();
    half.set_width_str("50%", false).unwrap();
    half.set_height_str("50%", false).unwrap();
    let child = add_child(&mut tree, small, half);
    layout(&mut tree);
    assert_eq!(frame(&tree, child).size(), Size::new(100.0, 50.0));

    tree.detach(child).unwrap();
    assert_eq!(tree.parent(child), None);
    assert!(tree.children(small).is_empty());
    tree.append_child(large, child).unwrap();
    assert!(tree.needs_layout());

    layout(&mut tree);
    assert_eq!(frame(&tree, child).size(), Size::new(200.0, 150.0));
    assert_eq!(
        tree.resolve_context(child),
        ResolveContext::new(Size::new(400.0, 300.0), VIEWPORT)
    );
}

#[test]
fn test_detach_root_is_noop() {
    let (mut tree, root) = tree_with_root(10.0, 10.0);
    tree.detach(root).unwrap();
    assert_eq!(tree.roots().collect::<Vec<_>>(), vec![root]);
    assert_eq!(tree.detach(NodeId(7)), Err(TreeError::UnknownNode(NodeId(7))));
}

#[test]
fn test_resolve_context_walks_parent_chain() {
    let (mut tree, root) = tree_with_root(200.0, 100.0);
    let mut inner = ContainerBox::new();
    inner.set_width_str("50%", false).unwrap();
    inner.set_height_str("40px", false).unwrap();
    let inner = add_child(&mut tree, root, inner);
    let innermost = add_box(&mut tree, inner, 10.0, 10.0);

    assert_eq!(tree.resolve_context(root), ResolveContext::root(VIEWPORT));
    assert_eq!(
        tree.resolve_context(inner),
        ResolveContext::new(Size::new(200.0, 100.0), VIEWPORT)
    );
    assert_eq!(
        tree.resolve_context(innermost),
        ResolveContext::new(Size::new(100.0, 40.0), VIEWPORT)
    );
}

#[test]
fn test_resolve_context_falls_back_to_viewport_past_a_leaf() {
    let (mut tree, root) = tree_with_root(200.0, 100.0);
    let middle = add_box(&mut tree, root, 50.0, 50.0);
    let innermost = add_box(&mut tree, middle, 10.0, 10.0);
    tree.get_mut(middle).unwrap().kind = NodeKind::Leaf(LeafWidget::new(50.0, 50.0));

    assert_eq!(tree.resolve_context(innermost), ResolveContext::root(VIEWPORT));
    assert!(was_warned(
        "layout",
        &format!("{middle:?} is not a container; resolving against the viewport")
    ));
}
