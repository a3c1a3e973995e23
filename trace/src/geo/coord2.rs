/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

///
/// Represents a point in 2D space
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Returns the vector at right angles to this one (rotated anticlockwise by 90 degrees)
    ///
    #[inline]
    pub fn normal(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// Returns a vector of length 1 pointing in the same direction as this one, or None for a zero-length vector
    ///
    pub fn unit_vector(&self) -> Option<Coord2> {
        let length = self.magnitude();

        if length > 0.0 && length.is_finite() {
            Some(*self / length)
        } else {
            None
        }
    }

    ///
    /// The 2D cross product (the z component of the 3D cross product) of this vector and another
    ///
    #[inline]
    pub fn cross(&self, other: &Coord2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0 - self.0;
        let dist_y = target.1 - self.1;

        f64::sqrt(dist_x * dist_x + dist_y * dist_y)
    }

    #[inline]
    fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(coord: Coord2) -> (f64, f64) {
        (coord.0, coord.1)
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        Coord2(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl AddAssign<Coord2> for Coord2 {
    #[inline]
    fn add_assign(&mut self, rhs: Coord2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl SubAssign<Coord2> for Coord2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}
