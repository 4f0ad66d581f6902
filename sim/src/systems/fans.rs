use bevy_ecs::prelude::*;
use bevy_time::Time;

use gameplay::components::{Layered, Position, Velocity};

use crate::resources::{FanMap, WorldGeometry};

// ============================================================================
// Wind Fan System
// ============================================================================

// Accumulate wind acceleration into body velocities. Occlusion and region
// checks live in the fan itself; this just integrates whatever it reports.
pub fn fans_wind_system(
    time: Res<Time>,
    geometry: Res<WorldGeometry>,
    fans: Res<FanMap>,
    mut bodies: Query<(&Position, &mut Velocity, &Layered)>,
) {
    let delta = time.delta_secs();
    let now = time.elapsed_secs_f64();

    for (position, mut velocity, layered) in &mut bodies {
        for fan in &fans.0 {
            if !fan.affects(layered.0) {
                continue;
            }
            if let Some(accel) = fan.wind_acceleration(position.0, now, &geometry.0) {
                velocity.0 += accel * delta;
            }
        }
    }
}
