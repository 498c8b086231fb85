//! Wavelength selection for SNR queries.

/// Wavelength selection for an SNR query.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SnrRange {
    /// Whole spectrum, no masking.
    #[default]
    Full,
    /// Concrete wavelength window. A segment qualifies only if the window
    /// lies strictly inside that segment's wavelength coverage; partial
    /// overlap counts as not found.
    Window {
        /// One edge of the window (order does not matter).
        start: f64,
        /// The other edge of the window.
        end: f64,
    },
}

impl SnrRange {
    /// Builds a concrete window from two wavelength bounds, in either order.
    pub fn window(start: f64, end: f64) -> Self {
        Self::Window { start, end }
    }

    /// Returns the window as `(low, high)`, or `None` for the full spectrum.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Full => None,
            Self::Window { start, end } => Some((start.min(end), start.max(end))),
        }
    }
}
