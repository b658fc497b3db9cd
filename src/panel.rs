//! Panel and window value types, input validation, and the output rectangle.
//!
//! A [`PanelSpec`] is what the caller hands in: a required aspect ratio and a
//! relative area share. A [`Panel`] is the internal working form with derived
//! unscaled dimensions and a placement slot written by the layout engine.
//! Pure geometry — no pixel operations, no I/O.

use num_traits::Float;

/// Default upper bound on the number of panels per placement run.
pub const MAX_PANELS: usize = 128;

/// Caller-supplied description of one panel to place.
///
/// The position of a spec in the input slice is its `input_order` and is
/// also the position of its rectangle in the output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelSpec {
    /// Required height/width ratio. Must be strictly positive and finite.
    pub aspect_ratio: f64,
    /// Desired area share relative to the other panels. Must be strictly
    /// positive and finite.
    pub rel_size: f64,
}

impl PanelSpec {
    /// Create a new panel spec.
    pub const fn new(aspect_ratio: f64, rel_size: f64) -> Self {
        Self {
            aspect_ratio,
            rel_size,
        }
    }
}

/// Internal working state for one panel.
///
/// `width` and `height` are derived once from the spec so that
/// `width * height == rel_size` and `height / width == aspect_ratio`;
/// they stay in the engine's unscaled coordinate space until projection.
/// `x` and `y` are the lower-left placement corner, written only by the
/// layout engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Panel {
    /// Stable identity: the panel's position in the caller's input slice.
    pub input_order: usize,
    /// Required height/width ratio (immutable input).
    pub aspect_ratio: f64,
    /// Relative area share (immutable input).
    pub rel_size: f64,
    /// Unscaled width, `sqrt(rel_size / aspect_ratio)`.
    pub width: f64,
    /// Unscaled height, `aspect_ratio * width`.
    pub height: f64,
    /// Lower-left x in the engine's unscaled space.
    pub x: f64,
    /// Lower-left y in the engine's unscaled space.
    pub y: f64,
}

impl Panel {
    /// Derive a panel from its spec. The spec must already be validated.
    pub fn from_spec(input_order: usize, spec: PanelSpec) -> Self {
        let width = Float::sqrt(spec.rel_size / spec.aspect_ratio);
        Self {
            input_order,
            aspect_ratio: spec.aspect_ratio,
            rel_size: spec.rel_size,
            width,
            height: spec.aspect_ratio * width,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// The container window: lower-left origin and extent in the caller's
/// coordinate space. Extent must be strictly positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    /// Lower-left x.
    pub llx: f64,
    /// Lower-left y.
    pub lly: f64,
    /// Width.
    pub sx: f64,
    /// Height.
    pub sy: f64,
}

impl Window {
    /// Create a window from origin and extent.
    pub const fn new(llx: f64, lly: f64, sx: f64, sy: f64) -> Self {
        Self { llx, lly, sx, sy }
    }

    /// Create a window from integer lower-left and upper-right pixel corners.
    pub fn from_corners(llx: i32, lly: i32, urx: i32, ury: i32) -> Self {
        Self {
            llx: llx as f64,
            lly: lly as f64,
            sx: (urx - llx) as f64,
            sy: (ury - lly) as f64,
        }
    }
}

/// One placed rectangle in integer pixel coordinates, lower-left and
/// upper-right corners inclusive of the caller's window origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub llx: i32,
    pub lly: i32,
    pub urx: i32,
    pub ury: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(llx: i32, lly: i32, urx: i32, ury: i32) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Width in pixels.
    pub const fn width(&self) -> i32 {
        self.urx - self.llx
    }

    /// Height in pixels.
    pub const fn height(&self) -> i32 {
        self.ury - self.lly
    }

    /// Whether the open interiors of two rects intersect.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.llx < other.urx
            && other.llx < self.urx
            && self.lly < other.ury
            && other.lly < self.ury
    }
}

/// Placement configuration error.
///
/// All variants are caller contract violations, rejected at the boundary
/// before any layout work begins. The optimizer itself has no failure mode
/// over validated inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceError {
    /// The panel list is empty.
    NoPanels,
    /// The panel list exceeds the configured maximum.
    TooManyPanels {
        /// Number of panels supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A panel's aspect ratio is zero, negative, or not finite.
    InvalidAspectRatio {
        /// Input position of the offending panel.
        index: usize,
    },
    /// A panel's relative size is zero, negative, or not finite.
    InvalidRelSize {
        /// Input position of the offending panel.
        index: usize,
    },
    /// The window has zero or negative extent on at least one axis.
    EmptyWindow,
}

/// Validate a placement request. Returns the first violation found.
pub(crate) fn validate(
    specs: &[PanelSpec],
    window: &Window,
    max_panels: usize,
) -> Result<(), PlaceError> {
    if specs.is_empty() {
        return Err(PlaceError::NoPanels);
    }
    if specs.len() > max_panels {
        return Err(PlaceError::TooManyPanels {
            count: specs.len(),
            max: max_panels,
        });
    }
    for (index, spec) in specs.iter().enumerate() {
        // NaN fails both comparisons, so it is rejected too.
        if !(spec.aspect_ratio.is_finite() && spec.aspect_ratio > 0.0) {
            return Err(PlaceError::InvalidAspectRatio { index });
        }
        if !(spec.rel_size.is_finite() && spec.rel_size > 0.0) {
            return Err(PlaceError::InvalidRelSize { index });
        }
    }
    if !(window.sx > 0.0) || !(window.sy > 0.0) {
        return Err(PlaceError::EmptyWindow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── derived dimensions ──────────────────────────────────────────────

    #[test]
    fn derived_dimensions_satisfy_both_constraints() {
        let p = Panel::from_spec(0, PanelSpec::new(2.0, 0.5));
        assert!((p.width * p.height - 0.5).abs() < 1e-12);
        assert!((p.height / p.width - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unit_square_spec() {
        let p = Panel::from_spec(3, PanelSpec::new(1.0, 1.0));
        assert_eq!(p.input_order, 3);
        assert!((p.width - 1.0).abs() < 1e-12);
        assert!((p.height - 1.0).abs() < 1e-12);
    }

    // ── window ──────────────────────────────────────────────────────────

    #[test]
    fn window_from_corners() {
        let w = Window::from_corners(10, 20, 110, 220);
        assert_eq!(w, Window::new(10.0, 20.0, 100.0, 200.0));
    }

    // ── rect ────────────────────────────────────────────────────────────

    #[test]
    fn rect_overlap_open_interiors() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 20, 10); // shares an edge only
        let c = Rect::new(9, 9, 15, 15);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn rejects_empty_panel_list() {
        let w = Window::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(validate(&[], &w, MAX_PANELS), Err(PlaceError::NoPanels));
    }

    #[test]
    fn rejects_too_many_panels() {
        let w = Window::new(0.0, 0.0, 100.0, 100.0);
        let specs = [PanelSpec::new(1.0, 1.0); 5];
        assert_eq!(
            validate(&specs, &w, 4),
            Err(PlaceError::TooManyPanels { count: 5, max: 4 })
        );
    }

    #[test]
    fn rejects_zero_aspect_ratio() {
        // Never silently clamped to 1.0.
        let w = Window::new(0.0, 0.0, 100.0, 100.0);
        let specs = [PanelSpec::new(1.0, 1.0), PanelSpec::new(0.0, 1.0)];
        assert_eq!(
            validate(&specs, &w, MAX_PANELS),
            Err(PlaceError::InvalidAspectRatio { index: 1 })
        );
    }

    #[test]
    fn rejects_nan_aspect_ratio() {
        let w = Window::new(0.0, 0.0, 100.0, 100.0);
        let specs = [PanelSpec::new(f64::NAN, 1.0)];
        assert_eq!(
            validate(&specs, &w, MAX_PANELS),
            Err(PlaceError::InvalidAspectRatio { index: 0 })
        );
    }

    #[test]
    fn rejects_negative_rel_size() {
        let w = Window::new(0.0, 0.0, 100.0, 100.0);
        let specs = [PanelSpec::new(1.0, -0.5)];
        assert_eq!(
            validate(&specs, &w, MAX_PANELS),
            Err(PlaceError::InvalidRelSize { index: 0 })
        );
    }

    #[test]
    fn rejects_empty_window() {
        let specs = [PanelSpec::new(1.0, 1.0)];
        let w = Window::from_corners(50, 50, 50, 100);
        assert_eq!(
            validate(&specs, &w, MAX_PANELS),
            Err(PlaceError::EmptyWindow)
        );
    }
}
