/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::binomial::*;
use super::control_polygon::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

use std::iter::FusedIterator;

///
/// Iterator that evaluates a curve at evenly spaced values of `t`, including both endpoints
///
/// Created by `curve_samples()`.
///
#[derive(Clone)]
pub struct CurveSamples<'a, Point: Coordinate> {
    points: &'a [Point],
    binomials: &'a BinomialCache,
    num_samples: usize,
    next: usize,
}

impl<'a, Point: Coordinate> Iterator for CurveSamples<'a, Point> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.num_samples {
            return None;
        }

        // A single sample is the start of the curve
        let t = if self.num_samples > 1 {
            (self.next as f64) / ((self.num_samples - 1) as f64)
        } else {
            0.0
        };

        self.next += 1;
        Some(evaluate_bernstein(t, self.points, self.binomials))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_samples - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, Point: Coordinate> ExactSizeIterator for CurveSamples<'a, Point> {}

impl<'a, Point: Coordinate> FusedIterator for CurveSamples<'a, Point> {}

///
/// Returns an iterator over `num_samples` points along the curve described by a set of control points
///
/// Sample `i` is at `t = i / (num_samples - 1)`, so the first and last samples are exactly the first and last control
/// points whenever there are two or more samples. One sample returns just the start of the curve and zero samples
/// returns nothing.
///
pub fn curve_samples<'a, Point: Coordinate>(points: &'a [Point], num_samples: usize, binomials: &'a BinomialCache) -> Result<CurveSamples<'a, Point>, TraceError> {
    if points.is_empty() {
        return Err(TraceError::EmptyControlPolygon);
    }
    check_control_point_count(points.len(), MAX_CONTROL_POINTS)?;
    if num_samples > MAX_CURVE_SAMPLES {
        return Err(TraceError::TooManySamples {
            requested: num_samples,
            limit: MAX_CURVE_SAMPLES,
        });
    }

    Ok(CurveSamples {
        points,
        binomials,
        num_samples,
        next: 0,
    })
}

///
/// Discretizes the curve described by a set of control points into `num_samples` evenly spaced points
///
pub fn sample_curve<Point: Coordinate>(points: &[Point], num_samples: usize, binomials: &BinomialCache) -> Result<Vec<Point>, TraceError> {
    Ok(curve_samples(points, num_samples, binomials)?.collect())
}

///
/// As for `sample_curve()`, but writes the samples into an existing buffer (replacing its contents)
///
/// The buffer keeps its allocation between calls, so a caller that resamples regularly only allocates once.
///
pub fn sample_curve_into<Point: Coordinate>(points: &[Point], num_samples: usize, binomials: &BinomialCache, target: &mut Vec<Point>) -> Result<(), TraceError> {
    let samples = curve_samples(points, num_samples, binomials)?;

    target.clear();
    target.extend(samples);

    Ok(())
}
