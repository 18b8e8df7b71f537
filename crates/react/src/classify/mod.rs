//! Maps a design node onto utility-class tokens.
//!
//! Each rule looks at one facet and contributes zero or more tokens. Rules run
//! in a fixed order so identical trees always yield identical class lists:
//! axis, primary alignment, counter alignment, gap, padding, fill, corner
//! radius, text styles, shadow, sizing.

pub mod palette;
pub mod scale;

use scale::{FONT_SIZE, RADIUS, SPACING};
use tailframe_core::{
    CounterAxisAlign, DesignNode, Effect, LayoutMode, NodeType, PrimaryAxisAlign, TextAlign,
    TextStyle,
};

/// Token used when a radius matches no scale entry.
const GENERIC_RADIUS: &str = "rounded";
/// Token for any drop shadow.
const SHADOW: &str = "shadow-lg";

/// Returns the ordered utility classes for `node`.
///
/// Never fails: absent or unrecognized facets contribute nothing.
pub fn classify(node: &DesignNode) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();

    classes.extend(layout_axis(node).iter().map(|t| t.to_string()));
    classes.extend(primary_alignment(node).map(str::to_string));
    classes.extend(counter_alignment(node).map(str::to_string));
    classes.extend(gap(node));
    classes.extend(padding(node));
    classes.extend(fill(node));
    classes.extend(corner_radius(node).map(str::to_string));
    if node.node_type == NodeType::Text
        && let Some(style) = &node.style
    {
        classes.extend(text_styles(style).into_iter().map(str::to_string));
    }
    classes.extend(shadow(&node.effects).map(str::to_string));
    classes.extend(sizing(node));

    classes.retain(|class| !class.is_empty());
    classes
}

/// Joins classes into a `className` value.
pub fn class_name(node: &DesignNode) -> String {
    classify(node).join(" ")
}

fn layout_axis(node: &DesignNode) -> &'static [&'static str] {
    match node.layout.layout_mode {
        Some(LayoutMode::Horizontal) => &["flex", "flex-row"],
        Some(LayoutMode::Vertical) => &["flex", "flex-col"],
        _ => &[],
    }
}

fn primary_alignment(node: &DesignNode) -> Option<&'static str> {
    match node.layout.primary_axis_align_items? {
        PrimaryAxisAlign::Center => Some("justify-center"),
        PrimaryAxisAlign::Max => Some("justify-end"),
        PrimaryAxisAlign::SpaceBetween => Some("justify-between"),
        // start alignment is the default
        PrimaryAxisAlign::Min | PrimaryAxisAlign::Unknown => None,
    }
}

fn counter_alignment(node: &DesignNode) -> Option<&'static str> {
    match node.layout.counter_axis_align_items? {
        CounterAxisAlign::Center => Some("items-center"),
        CounterAxisAlign::Max => Some("items-end"),
        CounterAxisAlign::Min | CounterAxisAlign::Unknown => None,
    }
}

/// Present and non-zero.
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn gap(node: &DesignNode) -> Option<String> {
    let spacing = nonzero(node.layout.item_spacing)?;
    SPACING.snap(spacing).map(|step| format!("gap-{step}"))
}

fn padding(node: &DesignNode) -> Vec<String> {
    let [top, right, bottom, left] = node.layout.padding();

    if top == right && right == bottom && bottom == left && top > 0.0 {
        return SPACING
            .snap(top)
            .map(|step| vec![format!("p-{step}")])
            .unwrap_or_default();
    }

    [("pt", top), ("pr", right), ("pb", bottom), ("pl", left)]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .filter_map(|(prefix, value)| SPACING.snap(value).map(|step| format!("{prefix}-{step}")))
        .collect()
}

fn fill(node: &DesignNode) -> Option<String> {
    let color = node.primary_fill()?;
    Some(format!("bg-{}", palette::color_value(&color)))
}

fn corner_radius(node: &DesignNode) -> Option<&'static str> {
    let radius = nonzero(node.corner_radius)?;
    Some(RADIUS.snap(radius).unwrap_or(GENERIC_RADIUS))
}

fn text_styles(style: &TextStyle) -> Vec<&'static str> {
    let mut classes = Vec::new();

    if let Some(size) = nonzero(style.font_size)
        && let Some(token) = FONT_SIZE.snap(size)
    {
        classes.push(token);
    }
    if let Some(weight) = style.font_weight.and_then(font_weight) {
        classes.push(weight);
    }
    if let Some(align) = style.text_align_horizontal.and_then(text_align) {
        classes.push(align);
    }

    classes
}

fn font_weight(weight: f64) -> Option<&'static str> {
    if weight >= 700.0 {
        Some("font-bold")
    } else if weight >= 600.0 {
        Some("font-semibold")
    } else if weight >= 500.0 {
        Some("font-medium")
    } else {
        None
    }
}

fn text_align(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => Some("text-left"),
        TextAlign::Center => Some("text-center"),
        TextAlign::Right => Some("text-right"),
        TextAlign::Justified | TextAlign::Unknown => None,
    }
}

/// Any drop shadow maps to one fixed token; blur, offset and colour are ignored.
fn shadow(effects: &[Effect]) -> Option<&'static str> {
    effects.iter().any(Effect::is_drop_shadow).then_some(SHADOW)
}

/// Width/height mapping hook; emits nothing yet.
fn sizing(_node: &DesignNode) -> Vec<String> {
    Vec::new()
}
