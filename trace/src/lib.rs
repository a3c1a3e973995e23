/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_trace
//!
//! `flo_trace` draws organic-looking paths between two points. A path is a single Bezier curve of arbitrary
//! degree whose interior control points are scattered at random either side of the straight line between
//! the endpoints. The curve can be sampled all at once, or traced a step at a time by a `CurveTracer`, which
//! re-plans its curve whenever its target moves:
//!
//! ```
//! # use flo_trace::*;
//! # use flo_trace::bezier::*;
//! # use flo_trace::tracer::*;
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! # use std::sync::Arc;
//! #
//! let binomials   = BinomialCache::new();
//! let mut rng     = StdRng::seed_from_u64(42);
//! let polygon     = generate_control_polygon(Coord2(0.0, 0.0), Coord2(5.0, 5.5), 5, &CurveShape::new(0.2, 0.1), &mut rng).unwrap();
//! let curve       = sample_curve(polygon.points(), 100, &binomials).unwrap();
//!
//! assert!(curve[0] == Coord2(0.0, 0.0));
//! assert!(curve[99] == Coord2(5.0, 5.5));
//!
//! let mut tracer  = CurveTracer::with_rng(TracerSettings::new(10, 3, 0.2, 0.1), Arc::new(binomials), rng).unwrap();
//! tracer.update_target(Coord2(100.0, 50.0));
//!
//! let path        = (0..9).map(|_| tracer.next_point()).collect::<Vec<_>>();
//! assert!(path[8] == Coord2(100.0, 50.0));
//! ```
//!
//! Curves are evaluated directly from the Bernstein basis, using a shared `BinomialCache` for the
//! coefficients. Control polygons are held in fixed-capacity buffers, so a tracer does not allocate while
//! it is stepping along its curve.
//!

#![warn(bare_trait_objects)]

#[macro_use]
mod test_assert;

mod consts;
mod error;

pub mod bezier;
pub mod geo;
pub mod tracer;

pub use self::consts::*;
pub use self::error::*;
pub use self::geo::*;
