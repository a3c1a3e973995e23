/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_trace::bezier::*;

use rand::thread_rng;

use std::error::Error;

///
/// Prints a jittered curve from (0, 0) to (5, 5.5) as a list of `x y` pairs, one per line
///
pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let binomials = BinomialCache::new();
    let shape = CurveShape::new(0.2, 0.1);

    let polygon = generate_control_polygon(Coord2(0.0, 0.0), Coord2(5.0, 5.5), 5, &shape, &mut thread_rng())?;
    let curve = sample_curve(polygon.points(), 100, &binomials)?;

    for point in curve {
        println!("{} {}", point.x(), point.y());
    }

    Ok(())
}
