//! Design document tree as delivered by the design tool's REST API.
//!
//! Nodes are read-only views over an externally supplied tree. Every facet is
//! optional; a missing facet simply contributes nothing downstream.

use crate::error::TailframeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Parses design JSON of any nesting depth.
///
/// Depth is a per-frame policy (see `validate_frame`), so the parser's own
/// recursion limit is lifted and the stack grows on demand instead.
fn parse_unbounded<T: DeserializeOwned>(json: &str) -> Result<T, TailframeError> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Node type tag.
///
/// Unknown tags are kept verbatim in [`NodeType::Other`] so that new node kinds
/// never break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Root of a design file.
    Document,
    /// A page.
    Canvas,
    /// A page (alternate tag used by some exports).
    Page,
    /// Layout container.
    Frame,
    /// Reusable component definition.
    Component,
    /// Set of component variants.
    ComponentSet,
    /// Placed instance of a component.
    Instance,
    /// Plain grouping node.
    Group,
    /// Text run.
    Text,
    /// Rectangle shape.
    Rectangle,
    /// Ellipse shape.
    Ellipse,
    /// Any other tag.
    Other(String),
}

impl NodeType {
    /// Returns the wire tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Page => "PAGE",
            NodeType::Frame => "FRAME",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Group => "GROUP",
            NodeType::Text => "TEXT",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Other(tag) => tag,
        }
    }

    /// Returns true for page-level nodes (`CANVAS` or `PAGE`).
    pub fn is_page(&self) -> bool {
        matches!(self, NodeType::Canvas | NodeType::Page)
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "DOCUMENT" => NodeType::Document,
            "CANVAS" => NodeType::Canvas,
            "PAGE" => NodeType::Page,
            "FRAME" => NodeType::Frame,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "INSTANCE" => NodeType::Instance,
            "GROUP" => NodeType::Group,
            "TEXT" => NodeType::Text,
            "RECTANGLE" => NodeType::Rectangle,
            "ELLIPSE" => NodeType::Ellipse,
            _ => NodeType::Other(tag),
        }
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        NodeType::from(tag.to_string())
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No auto layout.
    None,
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
    /// Unrecognized axis value.
    #[serde(other)]
    Unknown,
}

/// Alignment along the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    /// Start.
    Min,
    /// Center.
    Center,
    /// End.
    Max,
    /// Distribute free space between children.
    SpaceBetween,
    /// Unrecognized alignment value.
    #[serde(other)]
    Unknown,
}

/// Alignment along the counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    /// Start.
    Min,
    /// Center.
    Center,
    /// End.
    Max,
    /// Unrecognized alignment value.
    #[serde(other)]
    Unknown,
}

/// Sizing behaviour of an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisSizing {
    /// Fixed size.
    Fixed,
    /// Hug contents.
    Auto,
    /// Unrecognized sizing value.
    #[serde(other)]
    Unknown,
}

/// Auto-layout facet. Fields are flattened into the node on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    /// Axis mode.
    pub layout_mode: Option<LayoutMode>,
    /// Primary axis sizing.
    pub primary_axis_sizing_mode: Option<AxisSizing>,
    /// Counter axis sizing.
    pub counter_axis_sizing_mode: Option<AxisSizing>,
    /// Primary axis alignment.
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    /// Counter axis alignment.
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    /// Top padding in pixels.
    pub padding_top: Option<f64>,
    /// Right padding in pixels.
    pub padding_right: Option<f64>,
    /// Bottom padding in pixels.
    pub padding_bottom: Option<f64>,
    /// Left padding in pixels.
    pub padding_left: Option<f64>,
    /// Gap between children in pixels.
    pub item_spacing: Option<f64>,
}

impl AutoLayout {
    /// Padding as `[top, right, bottom, left]`, absent sides read as zero.
    pub fn padding(&self) -> [f64; 4] {
        [
            self.padding_top.unwrap_or(0.0),
            self.padding_right.unwrap_or(0.0),
            self.padding_bottom.unwrap_or(0.0),
            self.padding_left.unwrap_or(0.0),
        ]
    }
}

fn opaque() -> f64 {
    1.0
}

/// Normalized RGBA colour; channels are nominally in `0..=1` and clamped when converted to hex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha, defaults to opaque.
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    /// Creates an opaque colour.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a colour with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Lowercase hex form, see [`rgba_to_hex`].
    pub fn to_hex(&self) -> String {
        rgba_to_hex(self.r, self.g, self.b, self.a)
    }
}

/// Converts normalized channels to `#rrggbb`, or `#rrggbbaa` when `a < 1`.
///
/// Channels are scaled by 255, rounded and clamped to a byte.
///
/// # Examples
///
/// ```
/// use tailframe_core::rgba_to_hex;
///
/// assert_eq!(rgba_to_hex(1.0, 1.0, 1.0, 1.0), "#ffffff");
/// assert_eq!(rgba_to_hex(0.0, 0.0, 0.0, 0.5), "#00000080");
/// ```
pub fn rgba_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    fn byte(n: f64) -> u8 {
        (n * 255.0).round().clamp(0.0, 255.0) as u8
    }

    let mut hex = format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b));
    if a < 1.0 {
        hex.push_str(&format!("{:02x}", byte(a)));
    }
    hex
}

/// A paint entry from a node's `fills` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Paint {
    /// Solid colour fill.
    #[serde(rename = "SOLID")]
    Solid {
        /// Fill colour; some exports omit it.
        #[serde(default)]
        color: Option<Color>,
    },
    /// Gradients, images and anything else.
    #[serde(other)]
    Other,
}

/// 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

/// A visual effect from a node's `effects` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Drop shadow.
    #[serde(rename = "DROP_SHADOW")]
    DropShadow {
        /// Blur radius.
        #[serde(default)]
        radius: Option<f64>,
        /// Shadow colour.
        #[serde(default)]
        color: Option<Color>,
        /// Shadow offset.
        #[serde(default)]
        offset: Option<Vector>,
    },
    /// Inner shadows, blurs and anything else.
    #[serde(other)]
    Other,
}

impl Effect {
    /// Returns true for drop shadows.
    pub fn is_drop_shadow(&self) -> bool {
        matches!(self, Effect::DropShadow { .. })
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Justified.
    Justified,
    /// Unrecognized alignment value.
    #[serde(other)]
    Unknown,
}

/// Typography facet of a `TEXT` node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family name.
    pub font_family: Option<String>,
    /// Numeric weight (100-900).
    pub font_weight: Option<f64>,
    /// Font size in pixels.
    pub font_size: Option<f64>,
    /// Letter spacing in pixels.
    pub letter_spacing: Option<f64>,
    /// Line height in pixels.
    pub line_height_px: Option<f64>,
    /// Horizontal alignment.
    pub text_align_horizontal: Option<TextAlign>,
}

/// A node in the design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Node identifier.
    #[serde(default)]
    pub id: String,
    /// Layer label.
    #[serde(default)]
    pub name: String,
    /// Type tag.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Visibility; absence means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Children in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
    /// Geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    /// Auto-layout facet.
    #[serde(flatten)]
    pub layout: AutoLayout,
    /// Fills; only the first is consulted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    /// Corner radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Text content of a `TEXT` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    /// Typography of a `TEXT` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    /// Effects; only drop-shadow presence matters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl DesignNode {
    /// Creates a bare node with no facets.
    pub fn new(node_type: impl Into<NodeType>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            node_type: node_type.into(),
            visible: None,
            children: Vec::new(),
            absolute_bounding_box: None,
            layout: AutoLayout::default(),
            fills: Vec::new(),
            corner_radius: None,
            characters: None,
            style: None,
            effects: Vec::new(),
        }
    }

    /// Sets the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets explicit visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Parses a single node from JSON.
    pub fn from_json(json: &str) -> Result<Self, TailframeError> {
        parse_unbounded(json)
    }

    /// A node is hidden only when `visible` is explicitly `false`.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Returns true when the node uses horizontal or vertical auto layout.
    pub fn has_auto_layout(&self) -> bool {
        matches!(
            self.layout.layout_mode,
            Some(LayoutMode::Horizontal | LayoutMode::Vertical)
        )
    }

    /// Colour of the first fill, if that fill is solid and carries one.
    pub fn primary_fill(&self) -> Option<Color> {
        match self.fills.first() {
            Some(Paint::Solid { color }) => *color,
            _ => None,
        }
    }

    /// Hex form of [`DesignNode::primary_fill`].
    pub fn primary_fill_hex(&self) -> Option<String> {
        self.primary_fill().map(|color| color.to_hex())
    }

    /// Children that are not explicitly hidden, in document order.
    pub fn visible_children(&self) -> impl Iterator<Item = &DesignNode> {
        self.children.iter().filter(|child| child.is_visible())
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        max
    }
}

/// Top-level file response wrapping the document tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignFile {
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Document root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DesignNode>,
}

impl DesignFile {
    /// Parses a file response from JSON.
    pub fn from_json(json: &str) -> Result<Self, TailframeError> {
        parse_unbounded(json)
    }

    /// Returns the document root or [`TailframeError::MissingDocument`].
    pub fn root(&self) -> Result<&DesignNode, TailframeError> {
        self.document.as_ref().ok_or(TailframeError::MissingDocument)
    }
}
