//! Fire color gradient
//!
//! Maps a scalar "heat" through six fixed stops
//! (black → dark red → red → orange → yellow → white) with per-channel
//! linear interpolation, and computes that heat for a surviving cell from
//! its height and its depth inside the surface.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

// ── Palette ──────────────────────────────────────────────────

/// Charcoal / void
pub const BLACK: Vec3 = Vec3::new(0.02, 0.004, 0.004);
/// Deep red base
pub const DARK_RED: Vec3 = Vec3::new(0.26, 0.0, 0.0);
/// Main fire red
pub const RED: Vec3 = Vec3::new(1.0, 0.10, 0.0);
/// Bright orange
pub const ORANGE: Vec3 = Vec3::new(1.0, 0.53, 0.0);
/// Yellow
pub const YELLOW: Vec3 = Vec3::new(1.0, 0.87, 0.0);
/// Core white
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Lower edge of the height normalization
pub const HEAT_MIN_HEIGHT: f32 = -2.0;
/// Upper edge of the height normalization
pub const HEAT_MAX_HEIGHT: f32 = 3.0;
/// Outer clamp on heat; values in `(1.0, 1.2]` all land on white
pub const HEAT_MAX: f32 = 1.2;

// ── Mapping ──────────────────────────────────────────────────

/// Map heat to an RGB color in `[0, 1]³`.
///
/// Segments: `[0, 0.2)`, `[0.2, 0.4)`, `[0.4, 0.6)`, `[0.6, 0.85)`,
/// `[0.85, ∞)`. The last segment's parameter is clamped to 1.
pub fn heat_to_color(heat: f32) -> Vec3 {
    if heat < 0.2 {
        lerp_rgb(BLACK, DARK_RED, heat / 0.2)
    } else if heat < 0.4 {
        lerp_rgb(DARK_RED, RED, (heat - 0.2) / 0.2)
    } else if heat < 0.6 {
        lerp_rgb(RED, ORANGE, (heat - 0.4) / 0.2)
    } else if heat < 0.85 {
        lerp_rgb(ORANGE, YELLOW, (heat - 0.6) / 0.25)
    } else {
        lerp_rgb(YELLOW, WHITE, ((heat - 0.85) / 0.35).min(1.0))
    }
}

/// Heat of a surviving cell.
///
/// `height` is the cell's world Y, `depth` is `threshold - distance`.
#[inline]
pub fn compute_heat(height: f32, depth: f32, height_influence: f32, depth_influence: f32) -> f32 {
    let height_factor =
        map_linear(height, HEAT_MIN_HEIGHT, HEAT_MAX_HEIGHT, 0.0, 1.0).clamp(0.0, 1.0);
    let depth_factor = depth.clamp(0.0, 1.0);
    (height_factor * height_influence + depth_factor * depth_influence).clamp(0.0, HEAT_MAX)
}

/// Remap `x` from `[a1, a2]` to `[b1, b2]` (no clamping)
#[inline(always)]
pub fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

/// Per-channel `a + (b - a) * t`; exact at `t = 0` and `t = 1`
#[inline(always)]
fn lerp_rgb(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}

/// Rec. 709 relative luminance
#[inline]
pub fn luminance(rgb: Vec3) -> f32 {
    rgb.dot(Vec3::new(0.2126, 0.7152, 0.0722))
}

// ── Tests ────────────────────────────────────────────────────
