//! Container nodes.
//!
//! A [`ContainerBox`] owns its declared geometry, positioning mode,
//! visibility and its [`ContentRegion`]. Geometry is stored as
//! [`LengthPair`]s and only turned into pixels by a layout pass (or an
//! explicit `*_in` getter).
//!
//! Every setter marks the container as needing layout and, when asked to,
//! dispatches a [`LayoutChange`] to the attached [`AlertDispatch`]. String
//! setters use the strict length grammar: invalid text leaves the previous
//! value in place, is reported once through [`warn_once`], and is returned as
//! an error.

use std::fmt;

use strum_macros::Display;
use trellis_common::warn_once;
use trellis_units::{Axis, EdgeLengths, LengthError, LengthPair, ResolveContext, Side, Unit};

use crate::alert::{AlertDispatch, LayoutChange};
use crate::box_model::{BoxGeometry, ResolvedBox};
use crate::content::ContentRegion;
use crate::overflow::OverflowBehaviour;
use crate::positioned::{PositionMode, Visibility};
use crate::scene::ContainerAttributes;

/// One of the single-valued geometry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LengthField {
    /// Content width.
    Width,
    /// Content height.
    Height,
    /// Horizontal offset.
    PosX,
    /// Vertical offset.
    PosY,
}

impl LengthField {
    /// The axis this field is measured along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Width | Self::PosX => Axis::Horizontal,
            Self::Height | Self::PosY => Axis::Vertical,
        }
    }

    /// The alert a change to this field raises.
    #[must_use]
    pub const fn change(self) -> LayoutChange {
        match self {
            Self::Width => LayoutChange::Width,
            Self::Height => LayoutChange::Height,
            Self::PosX | Self::PosY => LayoutChange::Position,
        }
    }
}

/// One of the four-sided geometry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EdgeField {
    /// Outer spacing.
    Margin,
    /// Inner spacing.
    Padding,
}

impl EdgeField {
    /// The alert a change to this field raises.
    #[must_use]
    pub const fn change(self) -> LayoutChange {
        match self {
            Self::Margin => LayoutChange::Margin,
            Self::Padding => LayoutChange::Padding,
        }
    }
}

/// A layout container.
pub struct ContainerBox {
    geometry: BoxGeometry,
    position: PositionMode,
    visibility: Visibility,
    content: ContentRegion,
    resolved: ResolvedBox,
    alerts: Option<Box<dyn AlertDispatch>>,
    debug_outputs: bool,
    layout_dirty: bool,
}

impl Default for ContainerBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContainerBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerBox")
            .field("geometry", &self.geometry)
            .field("position", &self.position)
            .field("visibility", &self.visibility)
            .field("content", &self.content)
            .field("resolved", &self.resolved)
            .field("has_alerts", &self.alerts.is_some())
            .field("debug_outputs", &self.debug_outputs)
            .field("layout_dirty", &self.layout_dirty)
            .finish()
    }
}

impl ContainerBox {
    /// A static, visible, scrolling container with all geometry unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry: BoxGeometry::default(),
            position: PositionMode::default(),
            visibility: Visibility::default(),
            content: ContentRegion::default(),
            resolved: ResolvedBox::default(),
            alerts: None,
            debug_outputs: false,
            layout_dirty: true,
        }
    }

    /// A container with the given pixel content size.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        let mut container = Self::new();
        container.geometry.width = LengthPair::px(width);
        container.geometry.height = LengthPair::px(height);
        container
    }

    /// Build a container from construction-time attributes.
    ///
    /// Attributes that fail to parse are reported and left at their
    /// defaults; no alerts are dispatched.
    #[must_use]
    pub fn from_attributes(attributes: &ContainerAttributes) -> Self {
        let mut container = Self::new();
        let lengths = [
            (LengthField::Width, &attributes.width),
            (LengthField::Height, &attributes.height),
            (LengthField::PosX, &attributes.pos_x),
            (LengthField::PosY, &attributes.pos_y),
        ];
        for (field, text) in lengths {
            if let Some(text) = text {
                // Failures are already reported.
                let _ = container.set_length_str(field, text, false);
            }
        }
        for (field, text) in [
            (EdgeField::Margin, &attributes.margin),
            (EdgeField::Padding, &attributes.padding),
        ] {
            if let Some(text) = text {
                let _ = container.set_edges_str(field, text, false);
            }
        }

        if let Some(position) = attributes.position {
            container.position = position;
        }
        if let Some(visibility) = attributes.visibility {
            container.visibility = visibility;
        }
        if let Some(behaviour) = attributes.overflow {
            container.content.set_behaviour(behaviour);
        }
        if let Some(step) = &attributes.scroll_step_x {
            container.content.set_scroll_step_x(parse_length("scroll_step_x", step).ok());
        }
        if let Some(step) = &attributes.scroll_step_y {
            container.content.set_scroll_step_y(parse_length("scroll_step_y", step).ok());
        }
        container.debug_outputs = attributes.debug_outputs.unwrap_or(false);
        container
    }

    // -----------------------------------------------------------------------
    // Collaborators and flags
    // -----------------------------------------------------------------------

    /// Attach (or detach, with `None`) the alert sink used by setters.
    pub fn set_alerts(&mut self, alerts: Option<Box<dyn AlertDispatch>>) {
        self.alerts = alerts;
    }

    /// Whether an alert sink is attached.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        self.alerts.is_some()
    }

    /// Whether this container traces its resolved geometry at debug level.
    #[must_use]
    pub const fn debug_outputs(&self) -> bool {
        self.debug_outputs
    }

    /// Turn geometry tracing on or off.
    pub fn set_debug_outputs(&mut self, debug_outputs: bool) {
        self.debug_outputs = debug_outputs;
    }

    /// Whether something changed since the last pass.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Force the next tick to run a pass.
    pub fn mark_dirty(&mut self) {
        self.layout_dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.layout_dirty = false;
    }

    // -----------------------------------------------------------------------
    // Mode, visibility, content
    // -----------------------------------------------------------------------

    /// How this container is placed in its parent.
    #[must_use]
    pub const fn position_mode(&self) -> PositionMode {
        self.position
    }

    /// Change the positioning mode.
    pub fn set_position_mode(&mut self, position: PositionMode, dispatch: bool) {
        self.position = position;
        self.changed(LayoutChange::Position, dispatch);
    }

    /// Whether this container takes part in layout and is drawn.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Change the visibility.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.layout_dirty = true;
    }

    /// What happens to overflowing children.
    #[must_use]
    pub const fn overflow_behaviour(&self) -> OverflowBehaviour {
        self.content.behaviour()
    }

    /// Change the overflow behaviour.
    pub fn set_overflow_behaviour(&mut self, behaviour: OverflowBehaviour) {
        self.content.set_behaviour(behaviour);
        self.layout_dirty = true;
    }

    /// The clipping and scrolling sub-region.
    #[must_use]
    pub const fn content(&self) -> &ContentRegion {
        &self.content
    }

    /// Mutable access to the clipping and scrolling sub-region.
    pub fn content_mut(&mut self) -> &mut ContentRegion {
        &mut self.content
    }

    // -----------------------------------------------------------------------
    // Box model
    // -----------------------------------------------------------------------

    /// The declared geometry.
    #[must_use]
    pub const fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    /// Geometry resolved by the last pass.
    #[must_use]
    pub const fn resolved(&self) -> &ResolvedBox {
        &self.resolved
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedBox) {
        self.resolved = resolved;
    }

    /// Resolve the declared geometry against `ctx`.
    #[must_use]
    pub fn resolve(&self, ctx: &ResolveContext) -> ResolvedBox {
        self.geometry.resolve(ctx)
    }

    /// Width plus left and right padding, in pixels.
    #[must_use]
    pub fn total_width(&self, ctx: &ResolveContext) -> f64 {
        self.resolve(ctx).total_width()
    }

    /// Height plus top and bottom padding, in pixels.
    #[must_use]
    pub fn total_height(&self, ctx: &ResolveContext) -> f64 {
        self.resolve(ctx).total_height()
    }

    // -----------------------------------------------------------------------
    // Single-valued fields
    // -----------------------------------------------------------------------

    /// The declared value of `field`.
    #[must_use]
    pub const fn length(&self, field: LengthField) -> LengthPair {
        match field {
            LengthField::Width => self.geometry.width,
            LengthField::Height => self.geometry.height,
            LengthField::PosX => self.geometry.pos_x,
            LengthField::PosY => self.geometry.pos_y,
        }
    }

    /// Replace `field`.
    pub fn set_length(&mut self, field: LengthField, pair: LengthPair, dispatch: bool) {
        *self.length_mut(field) = pair;
        self.changed(field.change(), dispatch);
    }

    /// Replace `field` from length text such as `"50%"`.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `text` is not a valid length; the field
    /// keeps its previous value.
    pub fn set_length_str(
        &mut self,
        field: LengthField,
        text: &str,
        dispatch: bool,
    ) -> Result<(), LengthError> {
        let pair = parse_length(&field.to_string(), text)?;
        self.set_length(field, pair, dispatch);
        Ok(())
    }

    /// `field` resolved into `unit`.
    #[must_use]
    pub fn length_in(&self, field: LengthField, unit: Unit, ctx: &ResolveContext) -> f64 {
        ctx.resolve(self.length(field), field.axis(), unit)
    }

    /// Text form of `field`.
    #[must_use]
    pub fn length_str(&self, field: LengthField) -> String {
        self.length(field).serialize()
    }

    /// Set the content width.
    pub fn set_width(&mut self, pair: LengthPair, dispatch: bool) {
        self.set_length(LengthField::Width, pair, dispatch);
    }

    /// Set the content width from length text.
    ///
    /// # Errors
    ///
    /// See [`ContainerBox::set_length_str`].
    pub fn set_width_str(&mut self, text: &str, dispatch: bool) -> Result<(), LengthError> {
        self.set_length_str(LengthField::Width, text, dispatch)
    }

    /// Content width in `unit`.
    #[must_use]
    pub fn width_in(&self, unit: Unit, ctx: &ResolveContext) -> f64 {
        self.length_in(LengthField::Width, unit, ctx)
    }

    /// Text form of the content width.
    #[must_use]
    pub fn width_str(&self) -> String {
        self.length_str(LengthField::Width)
    }

    /// Set the content height.
    pub fn set_height(&mut self, pair: LengthPair, dispatch: bool) {
        self.set_length(LengthField::Height, pair, dispatch);
    }

    /// Set the content height from length text.
    ///
    /// # Errors
    ///
    /// See [`ContainerBox::set_length_str`].
    pub fn set_height_str(&mut self, text: &str, dispatch: bool) -> Result<(), LengthError> {
        self.set_length_str(LengthField::Height, text, dispatch)
    }

    /// Content height in `unit`.
    #[must_use]
    pub fn height_in(&self, unit: Unit, ctx: &ResolveContext) -> f64 {
        self.length_in(LengthField::Height, unit, ctx)
    }

    /// Text form of the content height.
    #[must_use]
    pub fn height_str(&self) -> String {
        self.length_str(LengthField::Height)
    }

    /// Set both offsets.
    pub fn set_position(&mut self, pos_x: LengthPair, pos_y: LengthPair, dispatch: bool) {
        self.geometry.pos_x = pos_x;
        self.geometry.pos_y = pos_y;
        self.changed(LayoutChange::Position, dispatch);
    }

    /// Horizontal offset in `unit`.
    #[must_use]
    pub fn pos_x_in(&self, unit: Unit, ctx: &ResolveContext) -> f64 {
        self.length_in(LengthField::PosX, unit, ctx)
    }

    /// Vertical offset in `unit`.
    #[must_use]
    pub fn pos_y_in(&self, unit: Unit, ctx: &ResolveContext) -> f64 {
        self.length_in(LengthField::PosY, unit, ctx)
    }

    // -----------------------------------------------------------------------
    // Four-sided fields
    // -----------------------------------------------------------------------

    /// All four sides of `field`.
    #[must_use]
    pub const fn edges(&self, field: EdgeField) -> &EdgeLengths {
        match field {
            EdgeField::Margin => &self.geometry.margin,
            EdgeField::Padding => &self.geometry.padding,
        }
    }

    /// One side of `field`.
    #[must_use]
    pub const fn edge(&self, field: EdgeField, side: Side) -> LengthPair {
        self.edges(field).get(side)
    }

    /// Replace all four sides of `field`.
    pub fn set_edges(&mut self, field: EdgeField, edges: EdgeLengths, dispatch: bool) {
        *self.edges_mut(field) = edges;
        self.changed(field.change(), dispatch);
    }

    /// Replace `field` from a 1 to 4 value shorthand such as `"10px 5%"`.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a bad value or value count; all four sides
    /// keep their previous values.
    pub fn set_edges_str(
        &mut self,
        field: EdgeField,
        text: &str,
        dispatch: bool,
    ) -> Result<(), LengthError> {
        let edges = EdgeLengths::parse_shorthand(text).inspect_err(|err| {
            warn_once("layout", &format!("ignoring {field} {text:?}: {err}"));
        })?;
        self.set_edges(field, edges, dispatch);
        Ok(())
    }

    /// Replace one side of `field`.
    pub fn set_edge(&mut self, field: EdgeField, side: Side, pair: LengthPair, dispatch: bool) {
        self.edges_mut(field).set(side, pair);
        self.changed(field.change(), dispatch);
    }

    /// Replace one side of `field` from length text.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `text` is not a valid length; the side
    /// keeps its previous value.
    pub fn set_edge_str(
        &mut self,
        field: EdgeField,
        side: Side,
        text: &str,
        dispatch: bool,
    ) -> Result<(), LengthError> {
        let pair = parse_length(&format!("{field} {side}"), text)?;
        self.set_edge(field, side, pair, dispatch);
        Ok(())
    }

    /// Set every side of `field` to `pair`.
    pub fn set_edges_all(&mut self, field: EdgeField, pair: LengthPair, dispatch: bool) {
        self.set_edges(field, EdgeLengths::all(pair), dispatch);
    }

    /// Set the up and down sides of `field` to `pair`.
    pub fn set_edges_vertical(&mut self, field: EdgeField, pair: LengthPair, dispatch: bool) {
        let edges = self.edges_mut(field);
        edges.up = pair;
        edges.down = pair;
        self.changed(field.change(), dispatch);
    }

    /// Set the left and right sides of `field` to `pair`.
    pub fn set_edges_horizontal(&mut self, field: EdgeField, pair: LengthPair, dispatch: bool) {
        let edges = self.edges_mut(field);
        edges.left = pair;
        edges.right = pair;
        self.changed(field.change(), dispatch);
    }

    /// One side of `field` in `unit`, measured along the side's axis.
    #[must_use]
    pub fn edge_in(&self, field: EdgeField, side: Side, unit: Unit, ctx: &ResolveContext) -> f64 {
        ctx.resolve(self.edge(field, side), side.axis(), unit)
    }

    /// All sides of `field` in `unit`, in `[up, right, down, left]` order.
    #[must_use]
    pub fn edges_in(&self, field: EdgeField, unit: Unit, ctx: &ResolveContext) -> [f64; 4] {
        Side::ALL.map(|side| self.edge_in(field, side, unit, ctx))
    }

    /// Shortest shorthand for `field`.
    #[must_use]
    pub fn edges_str(&self, field: EdgeField) -> String {
        self.edges(field).to_shorthand()
    }

    /// Text form of one side of `field`.
    #[must_use]
    pub fn edge_str(&self, field: EdgeField, side: Side) -> String {
        self.edge(field, side).serialize()
    }

    /// Set the margin from a shorthand.
    ///
    /// # Errors
    ///
    /// See [`ContainerBox::set_edges_str`].
    pub fn set_margin_str(&mut self, text: &str, dispatch: bool) -> Result<(), LengthError> {
        self.set_edges_str(EdgeField::Margin, text, dispatch)
    }

    /// Shortest shorthand for the margin.
    #[must_use]
    pub fn margin_str(&self) -> String {
        self.edges_str(EdgeField::Margin)
    }

    /// Set the padding from a shorthand.
    ///
    /// # Errors
    ///
    /// See [`ContainerBox::set_edges_str`].
    pub fn set_padding_str(&mut self, text: &str, dispatch: bool) -> Result<(), LengthError> {
        self.set_edges_str(EdgeField::Padding, text, dispatch)
    }

    /// Shortest shorthand for the padding.
    #[must_use]
    pub fn padding_str(&self) -> String {
        self.edges_str(EdgeField::Padding)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn length_mut(&mut self, field: LengthField) -> &mut LengthPair {
        match field {
            LengthField::Width => &mut self.geometry.width,
            LengthField::Height => &mut self.geometry.height,
            LengthField::PosX => &mut self.geometry.pos_x,
            LengthField::PosY => &mut self.geometry.pos_y,
        }
    }

    fn edges_mut(&mut self, field: EdgeField) -> &mut EdgeLengths {
        match field {
            EdgeField::Margin => &mut self.geometry.margin,
            EdgeField::Padding => &mut self.geometry.padding,
        }
    }

    fn changed(&mut self, change: LayoutChange, dispatch: bool) {
        self.layout_dirty = true;
        if !dispatch {
            return;
        }
        match self.alerts.as_mut() {
            Some(alerts) => alerts.dispatch(change),
            None => log::debug!(target: "layout", "no alert manager attached, {change} change not dispatched"),
        }
    }
}

/// Strictly parse `text`, reporting a failure once under the `layout`
/// component.
fn parse_length(field: &str, text: &str) -> Result<LengthPair, LengthError> {
    text.parse().inspect_err(|err| {
        warn_once("layout", &format!("ignoring {field} {text:?}: {err}"));
    })
}
