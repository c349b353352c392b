//! Figure-fractional ("paper") coordinate conversions.
//!
//! The output format positions figure-level objects in fractions of the plot
//! area, which excludes the margins. These helpers map source-figure
//! fractions and display pixels into that space.

/// Pixel frame of the emitted figure, captured at figure-open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaperFrame {
    pub width: f64,
    pub height: f64,
    pub margin_l: f64,
    pub margin_r: f64,
    pub margin_t: f64,
    pub margin_b: f64,
}

impl PaperFrame {
    /// Converts a display-pixel position (y up) to paper fractions.
    #[must_use]
    pub fn to_paper(self, x_px: f64, y_px: f64) -> (f64, f64) {
        let x = (x_px - self.margin_l) / (self.width - self.margin_l - self.margin_r);
        let y = (y_px - self.margin_b) / (self.height - self.margin_t - self.margin_b);
        (x, y)
    }
}

/// Maps an axes' fractional x span into the paper span covered by all axes.
/// `fig_x` is the (min, max) fractional extent of every axes in the figure.
#[must_use]
pub fn x_domain(bounds: (f64, f64, f64, f64), fig_x: (f64, f64)) -> (f64, f64) {
    let span = fig_x.1 - fig_x.0;
    let low = ((bounds.0 - fig_x.0) / span).max(0.0);
    let high = ((bounds.0 + bounds.2 - fig_x.0) / span).min(1.0);
    (low, high)
}

/// Maps an axes' fractional y span into the paper span covered by all axes.
#[must_use]
pub fn y_domain(bounds: (f64, f64, f64, f64), fig_y: (f64, f64)) -> (f64, f64) {
    let span = fig_y.1 - fig_y.0;
    let low = ((bounds.1 - fig_y.0) / span).max(0.0);
    let high = ((bounds.1 + bounds.3 - fig_y.0) / span).min(1.0);
    (low, high)
}
