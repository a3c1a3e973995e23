/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur when a curve or a tracer is asked for something outside of its limits
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TraceError {
    /// A curve needs at least one control point to be evaluated
    EmptyControlPolygon,

    /// More control points were requested than the polygon has room for
    TooManyControlPoints { requested: usize, capacity: usize },

    /// More samples were requested than the limit allows
    TooManySamples { requested: usize, limit: usize },

    /// A tracer needs at least two points per curve (the start and the target)
    TooFewCurvePoints(usize),

    /// The aspect or jitter of a curve shape was negative or not a finite number
    InvalidShape,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::EmptyControlPolygon => write!(f, "control polygon has no points"),
            TraceError::TooManyControlPoints { requested, capacity } => write!(f, "{} control points requested but the capacity is {}", requested, capacity),
            TraceError::TooManySamples { requested, limit } => write!(f, "{} samples requested but the limit is {}", requested, limit),
            TraceError::TooFewCurvePoints(count) => write!(f, "a traced curve needs at least 2 points, but {} were requested", count),
            TraceError::InvalidShape => write!(f, "curve aspect and jitter must be finite and non-negative"),
        }
    }
}

impl Error for TraceError {}
