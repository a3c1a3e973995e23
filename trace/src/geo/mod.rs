/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! The `Coordinate` trait describes the arithmetic that the curve routines need from a point: addition,
//! subtraction and scaling by a scalar. It's implemented for `f64` (a single channel, handy for easing
//! curves and tests) and for `Coord2`, the 2D point that control polygons and tracers work with.
//!

mod coord1;
mod coord2;
mod coordinate;

pub use self::coord1::*;
pub use self::coord2::*;
pub use self::coordinate::*;
