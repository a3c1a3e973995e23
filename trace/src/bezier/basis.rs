/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::binomial::*;
use super::control_polygon::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

///
/// Evaluates the Bezier curve defined by a set of control points at the position `t` (which should be in the range 0..=1)
///
/// The degree of the curve is one less than the number of points. The result is the Bernstein sum
/// `sum(P_k * C(d, k) * t^k * (1-t)^(d-k))`, computed in a single pass over the points with running products
/// for the two powers. `t = 0` returns exactly the first point and `t = 1` returns exactly the last one.
///
/// There must be at least one point and no more than `MAX_CONTROL_POINTS`.
///
pub fn bernstein_point<Point: Coordinate>(t: f64, points: &[Point], binomials: &BinomialCache) -> Result<Point, TraceError> {
    if points.is_empty() {
        return Err(TraceError::EmptyControlPolygon);
    }
    check_control_point_count(points.len(), MAX_CONTROL_POINTS)?;

    Ok(evaluate_bernstein(t, points, binomials))
}

///
/// Evaluates a curve whose control points have already been checked against `MAX_CONTROL_POINTS`
///
pub(crate) fn evaluate_bernstein<Point: Coordinate>(t: f64, points: &[Point], binomials: &BinomialCache) -> Point {
    test_assert!((0.0..=1.0).contains(&t), "t out of range: {}", t);
    test_assert!(!points.is_empty() && points.len() <= MAX_CONTROL_POINTS);

    if points.is_empty() {
        return Point::origin();
    }

    let degree = points.len() - 1;

    // The curve is symmetric under reversing the points and replacing t with 1-t. Keeping t <= 0.5 keeps (1-t)^d
    // well away from underflow for high-degree curves.
    if t > 0.5 {
        bernstein_sum(1.0 - t, points.iter().rev(), degree, binomials)
    } else {
        bernstein_sum(t, points.iter(), degree, binomials)
    }
}

///
/// Sums the weighted points, given in basis order, for a curve of the specified degree
///
#[inline]
fn bernstein_sum<'a, Point>(t: f64, points: impl Iterator<Item = &'a Point>, degree: usize, binomials: &BinomialCache) -> Point
where
    Point: 'a + Coordinate,
{
    let one_minus_t = 1.0 - t;

    let mut t_pow = 1.0;
    let mut one_minus_t_pow = one_minus_t.powi(degree as i32);
    let mut sum = Point::origin();

    for (k, point) in points.enumerate() {
        let weight = binomials.binomial(degree, k) * (t_pow * one_minus_t_pow);
        sum = sum + *point * weight;

        t_pow *= t;

        // When 1-t is 0, the only non-zero term is the last one, and its power of (1-t) is (1-t)^0 == 1
        if one_minus_t != 0.0 {
            one_minus_t_pow /= one_minus_t;
        } else if k + 1 == degree {
            one_minus_t_pow = 1.0;
        }
    }

    sum
}
