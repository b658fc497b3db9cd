//! Projection of a finished layout into the caller's pixel coordinates.
//!
//! The engine works in an unscaled space with the origin at the packing
//! corner. Projection applies the single uniform scale that makes the
//! packed bounding box exactly fill the window on its tighter axis,
//! translates to the window origin, optionally mirrors the vertical axis
//! for callers whose y runs downward, and rounds to integer pixels.

use alloc::vec::Vec;
use num_traits::Float;

use crate::panel::{Panel, Rect, Window};

/// Round to the nearest integer, half away from zero.
fn round_half_away(v: f64) -> i32 {
    if v >= 0.0 {
        Float::floor(v + 0.5) as i32
    } else {
        Float::ceil(v - 0.5) as i32
    }
}

/// Map every panel's placement into window pixel coordinates.
///
/// Returns one rectangle per panel, indexed by `input_order` — the i-th
/// output rect belongs to the i-th input panel regardless of where the
/// search placed it. With `flip_y`, each rect's vertical extent is
/// mirrored about `window.sy + 2 * window.lly` for window systems whose
/// vertical axis runs opposite to the layout axis.
pub fn project(panels: &[Panel], window: &Window, flip_y: bool) -> Vec<Rect> {
    let mut xmax = 0.0f64;
    let mut ymax = 0.0f64;
    for p in panels {
        xmax = xmax.max(p.x + p.width);
        ymax = ymax.max(p.y + p.height);
    }
    let scale = (window.sx / xmax).min(window.sy / ymax);

    panels
        .iter()
        .map(|p| {
            let w = p.width * scale;
            let h = p.height * scale;
            let x = p.x * scale + window.llx;
            let y = p.y * scale + window.lly;
            let (bottom, top) = if flip_y {
                let mirror = window.sy + 2.0 * window.lly;
                (mirror - (y + h), mirror - y)
            } else {
                (y, y + h)
            };
            Rect::new(
                round_half_away(x),
                round_half_away(bottom),
                round_half_away(x + w),
                round_half_away(top),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelSpec;

    fn placed(input_order: usize, spec: PanelSpec, x: f64, y: f64) -> Panel {
        let mut p = Panel::from_spec(input_order, spec);
        p.x = x;
        p.y = y;
        p
    }

    // ── rounding ────────────────────────────────────────────────────────

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_half_away(0.5), 1);
        assert_eq!(round_half_away(1.5), 2);
        assert_eq!(round_half_away(2.4), 2);
        assert_eq!(round_half_away(-0.5), -1);
        assert_eq!(round_half_away(-1.5), -2);
        assert_eq!(round_half_away(-2.4), -2);
        assert_eq!(round_half_away(0.0), 0);
    }

    // ── scaling and translation ─────────────────────────────────────────

    #[test]
    fn single_square_fills_window() {
        let panels = [placed(0, PanelSpec::new(1.0, 1.0), 0.0, 0.0)];
        let window = Window::new(0.0, 0.0, 100.0, 100.0);
        let rects = project(&panels, &window, false);
        assert_eq!(rects, alloc::vec![Rect::new(0, 0, 100, 100)]);
    }

    #[test]
    fn translation_honors_window_origin() {
        let panels = [placed(0, PanelSpec::new(1.0, 1.0), 0.0, 0.0)];
        let window = Window::new(10.0, 20.0, 50.0, 50.0);
        let rects = project(&panels, &window, false);
        assert_eq!(rects, alloc::vec![Rect::new(10, 20, 60, 70)]);
    }

    #[test]
    fn tighter_axis_constrains_scale() {
        // A 1x1 square in a 200x100 window: scale is 100, not 200.
        let panels = [placed(0, PanelSpec::new(1.0, 1.0), 0.0, 0.0)];
        let window = Window::new(0.0, 0.0, 200.0, 100.0);
        let rects = project(&panels, &window, false);
        assert_eq!(rects[0], Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn output_is_in_input_order() {
        // Placement order reversed relative to input order.
        let panels = [
            placed(0, PanelSpec::new(1.0, 1.0), 1.0, 0.0),
            placed(1, PanelSpec::new(1.0, 1.0), 0.0, 0.0),
        ];
        let window = Window::new(0.0, 0.0, 200.0, 100.0);
        let rects = project(&panels, &window, false);
        assert_eq!(rects[0], Rect::new(100, 0, 200, 100));
        assert_eq!(rects[1], Rect::new(0, 0, 100, 100));
    }

    // ── vertical flip ───────────────────────────────────────────────────

    #[test]
    fn flip_mirrors_vertical_extent() {
        // Two stacked squares: flipping exchanges top and bottom.
        let panels = [
            placed(0, PanelSpec::new(1.0, 1.0), 0.0, 0.0),
            placed(1, PanelSpec::new(1.0, 1.0), 0.0, 1.0),
        ];
        let window = Window::new(0.0, 0.0, 100.0, 200.0);
        let rects = project(&panels, &window, true);
        assert_eq!(rects[0], Rect::new(0, 100, 100, 200));
        assert_eq!(rects[1], Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn flip_stays_inside_offset_window() {
        let panels = [placed(0, PanelSpec::new(1.0, 1.0), 0.0, 0.0)];
        let window = Window::new(10.0, 20.0, 50.0, 50.0);
        let rects = project(&panels, &window, true);
        // Mirror axis is sy + 2*lly = 90: [20, 70] maps back onto itself.
        assert_eq!(rects, alloc::vec![Rect::new(10, 20, 60, 70)]);
    }
}
