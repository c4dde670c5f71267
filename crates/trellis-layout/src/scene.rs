//! Scene descriptions.
//!
//! A scene is a JSON document describing a viewport and a forest of
//! containers and leaves:
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600 },
//!   "roots": [
//!     {
//!       "type": "container",
//!       "attributes": { "width": "50%", "height": "200px", "padding": "10px" },
//!       "children": [
//!         { "type": "leaf", "width": 100, "height": 20 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Container attributes use the same strings as the string setters.

use serde::{Deserialize, Serialize};
use trellis_units::Size;

use crate::container::ContainerBox;
use crate::error::SceneError;
use crate::leaf::{Anchors, LeafWidget};
use crate::overflow::OverflowBehaviour;
use crate::positioned::{PositionMode, Visibility};
use crate::tree::{LayoutTree, NodeId};

/// Construction-time attributes of a container. Absent attributes keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerAttributes {
    /// Content width, e.g. `"50%"`.
    pub width: Option<String>,
    /// Content height.
    pub height: Option<String>,
    /// Horizontal offset.
    pub pos_x: Option<String>,
    /// Vertical offset.
    pub pos_y: Option<String>,
    /// Margin shorthand, 1 to 4 values.
    pub margin: Option<String>,
    /// Padding shorthand, 1 to 4 values.
    pub padding: Option<String>,
    /// `"static"`, `"absolute"` or `"relative"`.
    pub position: Option<PositionMode>,
    /// `"visible"`, `"hidden"` or `"transparent"`.
    pub visibility: Option<Visibility>,
    /// `"scroll"`, `"hidden"` or `"visible"`.
    pub overflow: Option<OverflowBehaviour>,
    /// Horizontal wheel step, overriding the configured one.
    pub scroll_step_x: Option<String>,
    /// Vertical wheel step, overriding the configured one.
    pub scroll_step_y: Option<String>,
    /// Trace this container's geometry at debug level.
    pub debug_outputs: Option<bool>,
}

/// One node of a scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    /// A container and its children.
    Container {
        /// Geometry and behaviour.
        #[serde(default)]
        attributes: ContainerAttributes,
        /// Children in layout order.
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    /// A host widget.
    Leaf {
        /// Measured width in pixels.
        #[serde(default)]
        width: f64,
        /// Measured height in pixels.
        #[serde(default)]
        height: f64,
        /// Anchors, for a pinned leaf.
        #[serde(default)]
        anchors: Option<Anchors>,
        /// Visibility.
        #[serde(default)]
        visibility: Visibility,
    },
}

/// A complete scene: viewport plus root nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Size of the root window.
    pub viewport: Size,
    /// Root nodes, in layout order.
    #[serde(default)]
    pub roots: Vec<SceneNode>,
}

impl Scene {
    /// Parse a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] when the document is malformed.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl LayoutTree {
    /// Build a tree from a scene description.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Tree`] if a node cannot be attached.
    pub fn from_scene(scene: &Scene) -> Result<Self, SceneError> {
        let mut tree = Self::new(scene.viewport);
        for root in &scene.roots {
            let _root = tree.add_scene_node(root)?;
        }
        Ok(tree)
    }

    /// Parse a scene from JSON and build a tree from it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] for a malformed document and
    /// [`SceneError::Tree`] if a node cannot be attached.
    pub fn from_scene_json(text: &str) -> Result<Self, SceneError> {
        Self::from_scene(&Scene::from_json(text)?)
    }

    fn add_scene_node(&mut self, node: &SceneNode) -> Result<NodeId, SceneError> {
        match node {
            SceneNode::Container {
                attributes,
                children,
            } => {
                let id = self.add_container(ContainerBox::from_attributes(attributes));
                for child in children {
                    let child = self.add_scene_node(child)?;
                    self.append_child(id, child)?;
                }
                Ok(id)
            }
            SceneNode::Leaf {
                width,
                height,
                anchors,
                visibility,
            } => {
                let mut leaf = LeafWidget::new(*width, *height);
                leaf.anchors = *anchors;
                leaf.visibility = *visibility;
                Ok(self.add_leaf(leaf))
            }
        }
    }
}
