/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

impl Coordinate for f64 {
    #[inline]
    fn origin() -> f64 {
        0.0
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self - target)
    }

    #[inline]
    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}
