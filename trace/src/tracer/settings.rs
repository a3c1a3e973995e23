/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;
use crate::consts::*;
use crate::error::*;

///
/// Settings for a curve tracer
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TracerSettings {
    /// Number of points on the grid for each curve (the tracer arrives at its target after `curve_points - 1` steps)
    pub curve_points: usize,

    /// Number of control points between the current position and the target
    pub mid_point_count: usize,

    /// How far the control points may be jittered
    pub shape: CurveShape,
}

impl Default for TracerSettings {
    fn default() -> Self {
        TracerSettings {
            curve_points: DEFAULT_CURVE_POINTS,
            mid_point_count: DEFAULT_MID_POINT_COUNT,
            shape: CurveShape::new(0.2, 0.1),
        }
    }
}

impl TracerSettings {
    ///
    /// Creates a new set of tracer settings
    ///
    pub fn new(curve_points: usize, mid_point_count: usize, aspect: f64, jitter: f64) -> TracerSettings {
        TracerSettings {
            curve_points,
            mid_point_count,
            shape: CurveShape::new(aspect, jitter),
        }
    }

    ///
    /// Returns the number of points in each control polygon generated with these settings
    ///
    #[inline]
    pub fn control_point_count(&self) -> usize {
        self.mid_point_count.saturating_add(2)
    }

    ///
    /// Checks that a tracer can be created with these settings
    ///
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.curve_points < 2 {
            return Err(TraceError::TooFewCurvePoints(self.curve_points));
        }

        if self.curve_points > MAX_CURVE_SAMPLES {
            return Err(TraceError::TooManySamples {
                requested: self.curve_points,
                limit: MAX_CURVE_SAMPLES,
            });
        }

        check_control_point_count(self.control_point_count(), MAX_CONTROL_POINTS)?;
        self.shape.validate()
    }
}
