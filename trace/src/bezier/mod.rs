/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for generating and evaluating Bezier curves of any degree
//!
//! ```
//! # use flo_trace::*;
//! # use flo_trace::bezier::*;
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! #
//! let binomials   = BinomialCache::new();
//! let polygon     = ControlPolygon::from_points(vec![Coord2(0.0, 0.0), Coord2(5.0, 5.5)]).unwrap();
//! let mid_point   = polygon.point_at_pos(0.5, &binomials);
//!
//! let mut rng     = StdRng::seed_from_u64(1);
//! let jittered    = generate_control_polygon(Coord2(0.0, 0.0), Coord2(5.0, 5.5), 5, &CurveShape::new(0.2, 0.1), &mut rng).unwrap();
//! let curve       = sample_curve(jittered.points(), 100, &binomials).unwrap();
//!
//! assert!(mid_point == Coord2(2.5, 2.75));
//! assert!(curve.len() == 100);
//! ```
//!
//! A curve is described by its control points: the degree of the curve is one less than the number of points. The
//! `ControlPolygon` type holds a fixed-capacity set of these points, and `generate_control_polygon()` creates one with
//! randomly jittered interior points, giving a curve that wanders a little between its endpoints.
//!
//! `bernstein_point()` evaluates a curve at a single position and `sample_curve()` evaluates it at evenly spaced
//! positions. Both work on any slice of `Coordinate`s and take a `BinomialCache` for the basis weights.
//!

mod basis;
mod binomial;
mod control_polygon;
mod sample;

pub use self::basis::*;
pub use self::binomial::*;
pub use self::control_polygon::*;
pub use self::sample::*;

pub use super::geo::*;
