/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::settings::*;
use crate::bezier::*;
use crate::error::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use std::sync::Arc;

///
/// Whether or not a tracer is moving
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TraceState {
    /// The tracer is resting at its target (or has not been given one yet)
    Idle,

    /// The tracer is moving along its curve toward its target
    Tracing,
}

///
/// Follows a jittered Bezier curve toward a target that can move, producing one point per call to `next_point()`
///
/// A tracer belongs to a single animated path. The control points live in a buffer sized when the tracer is
/// created, so stepping and re-planning do not allocate.
///
pub struct CurveTracer<R: Rng = StdRng> {
    settings: TracerSettings,
    binomials: Arc<BinomialCache>,
    rng: R,

    /// `[current_anchor, mid_1, ..., mid_m, target_anchor]` as of the last re-plan
    control_points: ControlPoints,

    /// The last point that was returned
    current_anchor: Coord2,

    /// Where the tracer is heading
    target_anchor: Coord2,

    /// Position on the grid of `settings.curve_points` steps along the curve
    cursor: usize,

    state: TraceState,
}

impl CurveTracer<StdRng> {
    ///
    /// Creates a tracer at rest at the origin, with its own binomial cache and a randomly seeded generator
    ///
    pub fn new(settings: TracerSettings) -> Result<CurveTracer<StdRng>, TraceError> {
        CurveTracer::with_rng(settings, Arc::new(BinomialCache::new()), StdRng::from_entropy())
    }
}

impl<R: Rng> CurveTracer<R> {
    ///
    /// Creates a tracer at rest at the origin, sharing a binomial cache and using a particular random number generator
    ///
    pub fn with_rng(settings: TracerSettings, binomials: Arc<BinomialCache>, rng: R) -> Result<CurveTracer<R>, TraceError> {
        settings.validate()?;

        let origin = Coord2(0.0, 0.0);
        let mut control_points = SmallVec::with_capacity(settings.control_point_count());
        control_points.push(origin);

        Ok(CurveTracer {
            settings,
            binomials,
            rng,
            control_points,
            current_anchor: origin,
            target_anchor: origin,
            cursor: settings.curve_points - 1,
            state: TraceState::Idle,
        })
    }

    ///
    /// Moves this tracer to rest at the specified point
    ///
    pub fn starting_at(mut self, start: Coord2) -> CurveTracer<R> {
        self.control_points.clear();
        self.control_points.push(start);

        self.current_anchor = start;
        self.target_anchor = start;
        self.cursor = self.settings.curve_points - 1;
        self.state = TraceState::Idle;

        self
    }

    ///
    /// Sets the point that this tracer should move toward
    ///
    /// Nothing happens if the target is the same as the current one. Otherwise a new curve is planned from the
    /// current position to the new target, and the tracer starts again from the beginning of it. If the tracer was
    /// still on its way to the old target, the old target becomes the first interior control point of the new curve.
    ///
    /// Targets with a NaN or infinite coordinate are ignored.
    ///
    pub fn update_target(&mut self, target: Coord2) {
        if !(target.x().is_finite() && target.y().is_finite()) {
            log::debug!("Tracer ignoring non-finite target {:?}", target);
            return;
        }

        if target == self.target_anchor {
            return;
        }

        let previous_target = self.target_anchor;
        let in_flight = self.state == TraceState::Tracing;
        let mid_point_count = self.settings.mid_point_count;

        log::debug!("Tracer re-planning from {:?} to {:?} (in flight: {})", self.current_anchor, target, in_flight);

        self.control_points.clear();
        self.control_points.push(self.current_anchor);

        if in_flight && mid_point_count > 0 {
            self.control_points.push(previous_target);
            push_jittered_points(&mut self.control_points, self.current_anchor, target, mid_point_count - 1, &self.settings.shape, &mut self.rng);
        } else {
            push_jittered_points(&mut self.control_points, self.current_anchor, target, mid_point_count, &self.settings.shape, &mut self.rng);
        }

        self.control_points.push(target);
        test_assert!(self.control_points.len() == self.settings.control_point_count());

        self.target_anchor = target;
        self.cursor = 0;
        self.state = TraceState::Tracing;
    }

    ///
    /// Advances along the curve and returns the next point
    ///
    /// The last step returns exactly the target, after which the tracer is idle and keeps returning the target
    /// until it's given a new one.
    ///
    pub fn next_point(&mut self) -> Coord2 {
        let last_step = self.settings.curve_points - 1;

        if self.cursor < last_step {
            self.cursor += 1;

            if self.cursor == last_step {
                log::trace!("Tracer arrived at {:?}", self.target_anchor);

                self.current_anchor = self.target_anchor;
                self.state = TraceState::Idle;
            } else {
                let t = (self.cursor as f64) / (last_step as f64);
                self.current_anchor = evaluate_bernstein(t, &self.control_points, &self.binomials);
            }
        }

        self.current_anchor
    }

    /// The settings this tracer was created with
    #[inline]
    pub fn settings(&self) -> &TracerSettings {
        &self.settings
    }

    /// The point most recently returned by this tracer (or its starting point)
    #[inline]
    pub fn current_anchor(&self) -> Coord2 {
        self.current_anchor
    }

    /// The point this tracer is moving toward
    #[inline]
    pub fn target_anchor(&self) -> Coord2 {
        self.target_anchor
    }

    /// The current step along the curve
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn state(&self) -> TraceState {
        self.state
    }

    ///
    /// The control points of the curve being followed (just the resting point if no target has been set yet)
    ///
    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        &self.control_points
    }

    ///
    /// The number of calls to `next_point()` needed to reach the target
    ///
    #[inline]
    pub fn steps_remaining(&self) -> usize {
        (self.settings.curve_points - 1) - self.cursor
    }
}
