/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_trace::tracer::*;
use flo_trace::*;

use std::error::Error;

///
/// Chases a target that moves every few frames, printing the position on each frame as `x y`
///
/// Run with `RUST_LOG=debug` to see the tracer re-plan its curve.
///
pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut tracer = CurveTracer::new(TracerSettings::new(60, 4, 0.25, 0.1))?;
    let targets = [Coord2(100.0, 0.0), Coord2(100.0, 100.0), Coord2(0.0, 100.0), Coord2(0.0, 0.0)];

    // Move on to the next target two thirds of the way through each curve, to show the re-planning
    for target in targets.iter() {
        tracer.update_target(*target);

        for _ in 0..40 {
            let point = tracer.next_point();
            println!("{} {}", point.x(), point.y());
        }
    }

    while tracer.state() == TraceState::Tracing {
        let point = tracer.next_point();
        println!("{} {}", point.x(), point.y());
    }

    Ok(())
}
