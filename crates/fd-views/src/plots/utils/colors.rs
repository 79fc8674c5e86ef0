//! Color utilities for plots

use egui::Color32;

const COOL: (f32, f32, f32) = (59.0, 76.0, 192.0);
const NEUTRAL: (f32, f32, f32) = (221.0, 221.0, 221.0);
const WARM: (f32, f32, f32) = (180.0, 4.0, 38.0);

fn lerp(a: (f32, f32, f32), b: (f32, f32, f32), s: f32) -> Color32 {
    Color32::from_rgb(
        (a.0 * (1.0 - s) + b.0 * s) as u8,
        (a.1 * (1.0 - s) + b.1 * s) as u8,
        (a.2 * (1.0 - s) + b.2 * s) as u8,
    )
}

/// Coolwarm diverging color map (blue, light gray, red)
pub fn coolwarm_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);

    if t < 0.5 {
        lerp(COOL, NEUTRAL, t * 2.0)
    } else {
        lerp(NEUTRAL, WARM, (t - 0.5) * 2.0)
    }
}

/// Color of a coefficient on a scale centered at zero
pub fn correlation_color(value: f64, range: (f64, f64)) -> Color32 {
    let (min, max) = range;
    let half = (max.abs().max(min.abs())).max(f64::EPSILON);
    let t = 0.5 + value / (2.0 * half);
    coolwarm_color(t as f32)
}

/// Color for bar `index` of `count`, spread across the coolwarm map
pub fn palette_color(index: usize, count: usize) -> Color32 {
    if count <= 1 {
        return coolwarm_color(0.0);
    }
    coolwarm_color(index as f32 / (count - 1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_centered_on_zero() {
        assert_eq!(correlation_color(0.0, (-1.0, 1.0)), Color32::from_rgb(221, 221, 221));
        assert_eq!(correlation_color(1.0, (-1.0, 1.0)), Color32::from_rgb(180, 4, 38));
        assert_eq!(correlation_color(-1.0, (-1.0, 1.0)), Color32::from_rgb(59, 76, 192));
    }

    #[test]
    fn test_palette_spans_both_ends() {
        assert_eq!(palette_color(0, 5), coolwarm_color(0.0));
        assert_eq!(palette_color(4, 5), coolwarm_color(1.0));
        assert_eq!(palette_color(0, 1), coolwarm_color(0.0));
    }
}
