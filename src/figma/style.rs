//! Style resolution: fills, shadows, corner radii, text styling
//!
//! Styling is never fatal. A fill that cannot be resolved degrades to the
//! `"transparent"` sentinel, a malformed effect entry is skipped, and an
//! absent corner radius reads as 0. Only geometry failures abort the
//! transform.

use serde_json::Value;

use crate::figma::node::NodeView;
use crate::models::Shadow;

/// Sentinel color for nodes with no resolvable solid fill
pub const TRANSPARENT: &str = "transparent";

/// Resolve a node's background/text color from its first fill.
///
/// Channels arrive as 0.0–1.0 floats; each is multiplied by 255,
/// truncated, and clamped. Alpha is part of the fill record but the
/// target hex format carries no alpha channel, so it is ignored.
pub fn fill_color(node: NodeView) -> String {
    match node.fills().first().and_then(|fill| fill.get("color")) {
        Some(color) => rgb_hex(color),
        None => TRANSPARENT.to_string(),
    }
}

/// Extract the first visible drop shadow from a node's effect list.
///
/// Entries missing required keys are skipped and scanning continues.
/// Additional drop shadows beyond the first visible one are not honored.
pub fn shadow(node: NodeView) -> Option<Shadow> {
    for effect in node.effects() {
        if effect.get("type").and_then(Value::as_str) != Some("DROP_SHADOW") {
            continue;
        }
        if effect.get("visible").and_then(Value::as_bool) != Some(true) {
            continue;
        }
        let (color, offset) = match (effect.get("color"), effect.get("offset")) {
            (Some(color), Some(offset)) => (color, offset),
            _ => {
                log::debug!("skipping malformed drop-shadow entry on `{}`", node.name());
                continue;
            }
        };
        let (offset_x, offset_y) = match (
            offset.get("x").and_then(Value::as_f64),
            offset.get("y").and_then(Value::as_f64),
        ) {
            (Some(x), Some(y)) => (x as i64, y as i64),
            _ => {
                log::debug!("skipping malformed drop-shadow offset on `{}`", node.name());
                continue;
            }
        };
        return Some(Shadow {
            color: rgb_hex(color),
            offset_x,
            offset_y,
            blur: effect.get("radius").and_then(Value::as_f64).unwrap_or(0.0) as i64,
            spread: effect.get("spread").and_then(Value::as_f64).unwrap_or(0.0) as i64,
        });
    }
    None
}

/// Scalar corner radius, 0 when absent. Per-corner `rectangleCornerRadii`
/// is not consumed here; see `NodeView::rectangle_corner_radii`.
pub fn corner_radius(node: NodeView) -> i64 {
    node.corner_radius().unwrap_or(0.0) as i64
}

/// Apply the node style's `textCase` transform to its characters
pub fn apply_text_case(text: &str, style: Option<&Value>) -> String {
    let case = style
        .and_then(|s| s.get("textCase"))
        .and_then(Value::as_str)
        .unwrap_or("ORIGINAL");

    match case {
        "UPPER" => text.to_uppercase(),
        "LOWER" => text.to_lowercase(),
        "TITLE" => title_case(text),
        _ => text.to_string(),
    }
}

/// Resolved font name and size for a text node. `fontPostScriptName` wins
/// over `fontFamily`; hyphens become spaces (the target format writes
/// multi-word font identifiers with spaces).
pub fn font_properties(node: NodeView) -> Option<(String, f64)> {
    let style = node.style()?;
    let name = style
        .get("fontPostScriptName")
        .and_then(Value::as_str)
        .or_else(|| style.get("fontFamily").and_then(Value::as_str))?;
    let size = style.get("fontSize").and_then(Value::as_f64)?;
    Some((name.replace('-', " "), size))
}

/// Escape newlines so the text embeds in a generated string literal
pub fn escape_text(text: &str) -> String {
    text.replace('\n', "\\n")
}

fn rgb_hex(color: &Value) -> String {
    if !color.is_object() {
        return TRANSPARENT.to_string();
    }
    let channel = |key: &str| -> u8 {
        let raw = color.get(key).and_then(Value::as_f64).unwrap_or(0.0);
        ((raw * 255.0) as i64).clamp(0, 255) as u8
    };
    format!("#{:02X}{:02X}{:02X}", channel("r"), channel("g"), channel("b"))
}

/// Title-casing: a letter is uppercased when it does not follow another
/// letter, lowercased otherwise.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
