/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Largest number of points a control polygon may hold (the highest supported curve degree is one less than this)
pub const MAX_CONTROL_POINTS: usize = 1025;

/// Largest number of samples that can be requested from a curve, or points per curve for a tracer
pub const MAX_CURVE_SAMPLES: usize = 1 << 20;

/// Number of control points a polygon stores without a heap allocation
pub const INLINE_CONTROL_POINTS: usize = 16;

/// Rows of Pascal's triangle that the binomial cache precomputes (every entry in these rows fits in a u64)
pub const DENSE_BINOMIAL_ROWS: usize = 64;

/// Number of points a tracer steps through when moving to a new target, unless told otherwise
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Number of jittered control points between the endpoints of a traced curve, unless told otherwise
pub const DEFAULT_MID_POINT_COUNT: usize = 5;
