/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Tracing a curve one point at a time
//!
//! A `CurveTracer` moves toward a target along a jittered Bezier curve, returning one point each time `next_point()`
//! is called. This suits animation loops: call `update_target()` whenever the destination might have moved (it does
//! nothing if it hasn't), then call `next_point()` once per frame.
//!
//! ```
//! # use flo_trace::*;
//! # use flo_trace::tracer::*;
//! #
//! let mut tracer = CurveTracer::new(TracerSettings::new(50, 4, 0.3, 0.1)).unwrap();
//!
//! tracer.update_target(Coord2(200.0, 120.0));
//!
//! let mut pos = tracer.current_anchor();
//! while tracer.state() == TraceState::Tracing {
//!     pos = tracer.next_point();
//! }
//!
//! assert!(pos == Coord2(200.0, 120.0));
//! ```
//!
//! If the target moves while the tracer is on its way, the new curve starts where the tracer is now and bends
//! through the old target, so the motion stays continuous.
//!

mod curve_tracer;
mod settings;

pub use self::curve_tracer::*;
pub use self::settings::*;
