//! End-to-end placement pipeline: validate, search, project.

use alloc::vec::Vec;

use crate::panel::{self, MAX_PANELS, Panel, PanelSpec, PlaceError, Rect, Window};
use crate::project::project;
use crate::search::{DEFAULT_ITERATIONS_PER_PANEL, Optimizer};

/// Configuration for one placement run.
///
/// # Example
///
/// ```
/// use stairpack::{PanelSpec, Placement, Window};
///
/// let specs = [PanelSpec::new(1.0, 1.0), PanelSpec::new(1.0, 1.0)];
/// let window = Window::from_corners(0, 0, 200, 100);
/// let rects = Placement::new().seed(7).place(&specs, &window).unwrap();
/// assert_eq!(rects.len(), 2);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Placement {
    seed: u64,
    iterations_per_panel: usize,
    flip_y: bool,
    max_panels: usize,
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

impl Placement {
    /// Default configuration: seed 1, 400 iterations per panel, no flip,
    /// at most [`MAX_PANELS`] panels.
    pub const fn new() -> Self {
        Self {
            seed: 1,
            iterations_per_panel: DEFAULT_ITERATIONS_PER_PANEL,
            flip_y: false,
            max_panels: MAX_PANELS,
        }
    }

    /// Set the search seed. Identical inputs and seed give identical output.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search budget per panel (the time/quality knob).
    pub const fn iterations_per_panel(mut self, iterations: usize) -> Self {
        self.iterations_per_panel = iterations;
        self
    }

    /// Mirror output rects vertically, for window systems whose y axis
    /// runs downward.
    pub const fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    /// Override the panel count limit.
    pub const fn max_panels(mut self, max: usize) -> Self {
        self.max_panels = max;
        self
    }

    /// Place `specs` inside `window`.
    ///
    /// Returns one integer-pixel rectangle per spec, in input order,
    /// non-overlapping and contained in the window. Configuration errors
    /// are reported before any layout work begins.
    pub fn place(&self, specs: &[PanelSpec], window: &Window) -> Result<Vec<Rect>, PlaceError> {
        panel::validate(specs, window, self.max_panels)?;
        let mut panels: Vec<Panel> = specs
            .iter()
            .enumerate()
            .map(|(k, s)| Panel::from_spec(k, *s))
            .collect();
        Optimizer::new()
            .seed(self.seed)
            .iterations_per_panel(self.iterations_per_panel)
            .optimize(&mut panels, window);
        Ok(project(&panels, window, self.flip_y))
    }
}

/// Place `specs` inside `window` with the default configuration.
pub fn place(specs: &[PanelSpec], window: &Window) -> Result<Vec<Rect>, PlaceError> {
    Placement::new().place(specs, window)
}
