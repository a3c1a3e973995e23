/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::binomial::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

use rand::Rng;
use smallvec::SmallVec;

/// Storage for the points of a control polygon
pub(crate) type ControlPoints = SmallVec<[Coord2; INLINE_CONTROL_POINTS]>;

///
/// Describes how far the interior points of a generated control polygon may stray from a straight line
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CurveShape {
    /// How far points may move away from the line, as a proportion of the distance between the endpoints
    pub aspect: f64,

    /// How far points may move along the line from their even spacing, as a proportion of that spacing
    pub jitter: f64,
}

impl Default for CurveShape {
    fn default() -> Self {
        CurveShape {
            aspect: 1.0,
            jitter: 0.1,
        }
    }
}

impl CurveShape {
    ///
    /// Creates a new curve shape
    ///
    pub fn new(aspect: f64, jitter: f64) -> CurveShape {
        CurveShape { aspect, jitter }
    }

    ///
    /// Checks that the aspect and jitter are both finite and non-negative
    ///
    pub fn validate(&self) -> Result<(), TraceError> {
        let valid = |value: f64| value.is_finite() && value >= 0.0;

        if valid(self.aspect) && valid(self.jitter) {
            Ok(())
        } else {
            Err(TraceError::InvalidShape)
        }
    }
}

///
/// An ordered set of control points `[start, mid_1, ..., mid_m, end]` describing a Bezier curve of degree `m + 1`
///
/// The polygon has a fixed capacity, set when it is created: regenerating it never allocates.
///
#[derive(Clone, PartialEq, Debug)]
pub struct ControlPolygon {
    points: ControlPoints,
    capacity: usize,
}

impl ControlPolygon {
    ///
    /// Creates an empty control polygon with room for the specified number of points
    ///
    pub fn with_capacity(capacity: usize) -> Result<ControlPolygon, TraceError> {
        check_control_point_count(capacity, MAX_CONTROL_POINTS)?;

        Ok(ControlPolygon {
            points: SmallVec::with_capacity(capacity),
            capacity,
        })
    }

    ///
    /// Creates a control polygon from an explicit list of points
    ///
    pub fn from_points(points: impl IntoIterator<Item = Coord2>) -> Result<ControlPolygon, TraceError> {
        let points = points.into_iter().collect::<ControlPoints>();

        check_control_point_count(points.len(), MAX_CONTROL_POINTS)?;
        if points.is_empty() {
            return Err(TraceError::EmptyControlPolygon);
        }

        let capacity = points.len();
        Ok(ControlPolygon { points, capacity })
    }

    ///
    /// Replaces the points of this polygon with a new set of jittered points between `start` and `end`
    ///
    pub fn regenerate(&mut self, start: Coord2, end: Coord2, mid_count: usize, shape: &CurveShape, rng: &mut impl Rng) -> Result<(), TraceError> {
        shape.validate()?;
        check_control_point_count(mid_count.saturating_add(2), self.capacity)?;

        self.points.clear();
        self.points.push(start);
        push_jittered_points(&mut self.points, start, end, mid_count, shape, rng);
        self.points.push(end);

        Ok(())
    }

    /// The points making up this polygon
    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The maximum number of points this polygon can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    ///
    /// The degree of the curve described by this polygon (None if the polygon is empty)
    ///
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// The first anchor point
    #[inline]
    pub fn start_point(&self) -> Option<Coord2> {
        self.points.first().copied()
    }

    /// The last anchor point
    #[inline]
    pub fn end_point(&self) -> Option<Coord2> {
        self.points.last().copied()
    }

    ///
    /// Evaluates the curve described by this polygon at the position `t`
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64, binomials: &BinomialCache) -> Coord2 {
        evaluate_bernstein(t, &self.points, binomials)
    }
}

///
/// Generates a control polygon for a hand-drawn looking arc from `start` to `end`
///
/// The polygon has `mid_count + 2` points. The first and last are exactly `start` and `end`. Each interior point `i`
/// starts out evenly spaced along the line at `i / (mid_count + 1)` of the way from start to end, is nudged along the
/// line by up to `jitter` of that spacing, and is moved away from the line by up to `aspect` times the length of the
/// line on either side.
///
/// If `start` and `end` are the same point, there's no line to follow: every interior point is placed on `start`.
///
pub fn generate_control_polygon(start: Coord2, end: Coord2, mid_count: usize, shape: &CurveShape, rng: &mut impl Rng) -> Result<ControlPolygon, TraceError> {
    let mut polygon = ControlPolygon::with_capacity(mid_count.saturating_add(2))?;
    polygon.regenerate(start, end, mid_count, shape, rng)?;

    Ok(polygon)
}

///
/// Pushes `mid_count` jittered interior points between `start` and `end` onto a list of control points
///
pub(crate) fn push_jittered_points(points: &mut ControlPoints, start: Coord2, end: Coord2, mid_count: usize, shape: &CurveShape, rng: &mut impl Rng) {
    let length = start.distance_to(&end);
    let direction = match (end - start).unit_vector() {
        Some(direction) => direction,
        None => {
            log::debug!("Control polygon from {:?} to {:?} has no direction: collapsing interior points", start, end);
            points.extend((0..mid_count).map(|_| start));
            return;
        }
    };
    let normal = direction.normal();

    let spread = length * shape.aspect;
    let spacing = 1.0 / ((mid_count + 1) as f64);

    for idx in 1..=mid_count {
        let along: f64 = rng.gen_range(-1.0..=1.0);
        let across: f64 = rng.gen_range(-1.0..=1.0);

        let alpha = (idx as f64) * spacing + along * shape.jitter * spacing;
        let beta = across * spread;

        points.push(start + direction * (alpha * length) + normal * beta);
    }
}

///
/// Checks that a polygon with `requested` points will fit in the specified capacity
///
#[inline]
pub(crate) fn check_control_point_count(requested: usize, capacity: usize) -> Result<(), TraceError> {
    if requested > capacity {
        Err(TraceError::TooManyControlPoints { requested, capacity })
    } else {
        Ok(())
    }
}
