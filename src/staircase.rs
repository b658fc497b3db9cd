//! Staircase layout evaluation.
//!
//! One evaluation walks an [`OrderSequence`], placing each referenced panel
//! at the active corner of a monotone staircase boundary (non-increasing y
//! as x increases) and maintaining that boundary as panels land. Row breaks
//! move the active corner back up the staircase, which is what opens a new
//! row in the final layout. The pass is `O(N)` amortized: each panel inserts
//! at most one corner, and every merge removes one.

use alloc::vec::Vec;

use crate::order::{OrderSequence, Slot};
use crate::panel::{Panel, Window};

/// Weight of the input-order fidelity term in the score.
const ORDER_PENALTY_WEIGHT: f64 = 0.02;

/// A point on the staircase boundary of the region filled so far.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Corner {
    x: f64,
    y: f64,
}

/// Lay out every panel referenced by `order` and return the score.
///
/// Writes each panel's unscaled lower-left `x`, `y`. The score combines the
/// wasted-area fraction (after uniformly fitting the packed bounding box to
/// the window) with a mild input-order fidelity term; lower is better.
pub fn layout(order: &OrderSequence, panels: &mut [Panel], window: &Window) -> f64 {
    let mut corners: Vec<Corner> = Vec::with_capacity(order.len());
    corners.push(Corner { x: 0.0, y: 0.0 });
    // Active corner. Corners before it are consumed; placement never
    // revisits them unless a row break walks back up.
    let mut c = 0usize;

    let mut area_sum = 0.0f64;
    let mut xmax = 0.0f64;
    let mut ymax = 0.0f64;

    let mut prev_order: Option<usize> = None;
    let mut order_drift = 0.0f64;

    for slot in order.slots() {
        match *slot {
            Slot::RowBreak => {
                if c > 0 {
                    c -= 1;
                }
            }
            Slot::Panel(k) => {
                let (width, height) = (panels[k].width, panels[k].height);
                panels[k].x = corners[c].x;
                panels[k].y = corners[c].y;
                let xnew = corners[c].x + width;
                let ynew = corners[c].y + height;

                // corners[0].x is never written, so x == 0 exactly means
                // the leftmost column (and covers c == 0).
                if corners[c].x == 0.0 || ynew < corners[c - 1].y {
                    // New step: the old corner's y moves down one slot and
                    // the slot at c takes the new top.
                    let x = corners[c].x;
                    corners.insert(c, Corner { x, y: ynew });
                    c += 1;
                } else {
                    // Absorb into the previous step, then collapse steps
                    // submerged by the raised top. The raise carries left
                    // with each merge so the plateau keeps its height.
                    corners[c - 1].y = ynew;
                    while c >= 2 && corners[c - 2].y <= ynew {
                        corners.remove(c - 1);
                        c -= 1;
                        corners[c - 1].y = ynew;
                    }
                }
                corners[c].x = xnew;
                // Advance past steps now fully covered horizontally.
                while c + 1 < corners.len() && corners[c + 1].x <= xnew {
                    corners[c].y = corners[c + 1].y;
                    corners.remove(c + 1);
                }

                area_sum += width * height;
                xmax = xmax.max(xnew);
                ymax = ymax.max(ynew);

                // Consecutive placed panels, row breaks do not split pairs.
                if let Some(prev) = prev_order {
                    order_drift += prev as f64 - panels[k].input_order as f64;
                }
                prev_order = Some(panels[k].input_order);
            }
        }
    }

    // Unreachable once validation enforces N >= 1, since every sequence
    // references all panels; keeps the score total regardless.
    if xmax <= 0.0 || ymax <= 0.0 {
        return 1.0;
    }

    let n = panels.len() as f64;
    let scale = (window.sx / xmax).min(window.sy / ymax);
    let penalty = order_drift / (n * n / 2.0);
    1.0 - area_sum * scale * scale / (window.sx * window.sy) + ORDER_PENALTY_WEIGHT * penalty
}
