use serde::{Deserialize, Serialize};

use crate::error::{MarkError, MarkResult};

/// Maps data values onto vertical pixel offsets inside one plotting band.
///
/// Offsets are top-down: larger values map to smaller offsets. The exact
/// mapping (linear, log, ...) is the implementor's concern.
pub trait CoordinateMapper {
    /// Vertical pixel offset of `value`, measured from the band's top edge.
    fn offset(&self, value: f64) -> f64;

    /// Height of the plotting band in pixels.
    fn band_height(&self) -> f64;
}

/// Linear value range bound to a plotting band of fixed pixel height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBand {
    min: f64,
    max: f64,
    height_px: f64,
}

impl AxisBand {
    pub fn new(min: f64, max: f64, height_px: f64) -> MarkResult<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(MarkError::InvalidData(
                "axis band domain must be finite and non-empty".to_owned(),
            ));
        }

        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(MarkError::InvalidData(
                "axis band height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            min,
            max,
            height_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn value_at_offset(self, offset: f64) -> MarkResult<f64> {
        if !offset.is_finite() {
            return Err(MarkError::InvalidData("offset must be finite".to_owned()));
        }

        let normalized = 1.0 - offset / self.height_px;
        Ok(self.min + normalized * (self.max - self.min))
    }
}

impl CoordinateMapper for AxisBand {
    fn offset(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        let normalized = (value - self.min) / span;
        (1.0 - normalized) * self.height_px
    }

    fn band_height(&self) -> f64 {
        self.height_px
    }
}
