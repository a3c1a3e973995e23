/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Sub};

///
/// Represents a value that can be used as a coordinate by the Bezier routines
///
/// Every channel of a coordinate is evaluated together: a Bernstein sum over a set of coordinates is just
/// a weighted sum using these operators.
///
pub trait Coordinate: Sized + Copy + PartialEq + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self> {
    ///
    /// Returns the origin coordinate (the additive identity)
    ///
    fn origin() -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    fn distance_to(&self, target: &Self) -> f64;

    ///
    /// Computes the dot product of this coordinate with another of the same type
    ///
    fn dot(&self, target: &Self) -> f64;

    ///
    /// Returns the length of the vector from the origin to this coordinate
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }
}
