//! Position-to-level mapping for slide gestures.
//!
//! Turns the horizontal coordinate of a slide into a level in `0..=255`,
//! leaving a padded deadzone at each edge of the strip where the level is
//! pinned to the range end. What the level drives (screen brightness in the
//! reference deployment) is up to the listener.

/// Width of the pinned region at each edge of the strip, in position units.
pub const SLIDER_EDGE_PADDING: f64 = 100.0;

const MAX_LEVEL: f64 = 255.0;

/// Response curve of the slider.
///
/// The logarithmic curve allocates more of the strip to the low end, which
/// reads as more uniform to the eye when the level drives brightness. Note it
/// tops out at 254 rather than 255 (`255^1 - 1`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderCurve {
    #[default]
    Linear,
    Logarithmic,
}

/// Maps horizontal positions on a strip of a known width to levels.
#[derive(Clone, Copy, Debug)]
pub struct SliderMap {
    width: f64,
    curve: SliderCurve,
}

impl SliderMap {
    pub fn new(width: f64, curve: SliderCurve) -> Self {
        Self { width, curve }
    }

    /// Normalized position in `[0, 1]`, with the edge padding excluded from
    /// the active range. Degenerate widths (no active range at all) pin to 0.
    pub fn position(&self, x: f64) -> f64 {
        let span = self.width - 2.0 * SLIDER_EDGE_PADDING;
        if span <= 0.0 {
            return 0.0;
        }
        ((x - SLIDER_EDGE_PADDING) / span).clamp(0.0, 1.0)
    }

    /// Level in `0..=255` for a horizontal coordinate.
    pub fn level_for(&self, x: f64) -> u8 {
        let pos = self.position(x);
        let value = match self.curve {
            SliderCurve::Linear => MAX_LEVEL * pos,
            SliderCurve::Logarithmic => MAX_LEVEL.powf(pos) - 1.0,
        };
        value.clamp(0.0, MAX_LEVEL) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_pin_to_range_ends() {
        let map = SliderMap::new(1080.0, SliderCurve::Linear);

        assert_eq!(map.level_for(0.0), 0);
        assert_eq!(map.level_for(SLIDER_EDGE_PADDING), 0);
        assert_eq!(map.level_for(1080.0 - SLIDER_EDGE_PADDING), 255);
        assert_eq!(map.level_for(1080.0), 255);
    }

    #[test]
    fn linear_midpoint_is_midscale() {
        let map = SliderMap::new(1080.0, SliderCurve::Linear);

        assert_eq!(map.level_for(540.0), 127);
    }

    #[test]
    fn logarithmic_curve_is_monotone_and_spans_the_range() {
        let map = SliderMap::new(1080.0, SliderCurve::Logarithmic);

        assert_eq!(map.level_for(0.0), 0);
        assert_eq!(map.level_for(1080.0), 254);

        let mut previous = 0u8;
        for step in 0..=100 {
            let x = 1080.0 * f64::from(step) / 100.0;
            let level = map.level_for(x);
            assert!(level >= previous, "curve regressed at x = {x}");
            previous = level;
        }
    }

    #[test]
    fn logarithmic_low_end_is_flatter_than_linear() {
        let linear = SliderMap::new(1080.0, SliderCurve::Linear);
        let log = SliderMap::new(1080.0, SliderCurve::Logarithmic);

        assert!(log.level_for(400.0) < linear.level_for(400.0));
    }

    #[test]
    fn degenerate_width_pins_to_zero() {
        let map = SliderMap::new(150.0, SliderCurve::Linear);

        assert_eq!(map.level_for(75.0), 0);
        assert_eq!(map.position(75.0), 0.0);
    }
}
