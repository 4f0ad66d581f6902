use bevy_ecs::prelude::*;
use bevy_time::Time;
use rand::Rng as _;

use gameplay::components::{FaceDirection, PlayerMarker, Position, Velocity};

use crate::resources::{FieldBounds, WanderRng};

// Chance per tick that a player picks a new heading.
const RETARGET_PROBABILITY: f64 = 0.02;
const WANDER_SPEED: f32 = 4.0; // meters per second
const DRAG: f32 = 0.5; // fraction of velocity shed per second

// ============================================================================
// Player Wander System
// ============================================================================

// Stand-in for real player input: each player drifts around the roof on a
// random heading, giving the cameras something to catch. Wind from the fan
// system lands in `Velocity` too, so pushes carry through here.
pub fn players_wander_system(
    time: Res<Time>,
    bounds: Res<FieldBounds>,
    mut rng: ResMut<WanderRng>,
    mut players: Query<(&mut Position, &mut Velocity, &mut FaceDirection), With<PlayerMarker>>,
) {
    let delta = time.delta_secs();

    for (mut position, mut velocity, mut face_dir) in &mut players {
        if rng.0.gen_bool(RETARGET_PROBABILITY) {
            let yaw = rng.0.gen_range(0.0..std::f32::consts::TAU);
            velocity.0.x = yaw.sin() * WANDER_SPEED;
            velocity.0.z = yaw.cos() * WANDER_SPEED;
        }

        velocity.0 *= 1.0 - (DRAG * delta).min(1.0);
        position.0 += velocity.0 * delta;

        // Keep players on the roof; hitting the edge kills that component.
        if position.0.x.abs() > bounds.half_x {
            position.0.x = position.0.x.clamp(-bounds.half_x, bounds.half_x);
            velocity.0.x = 0.0;
        }
        if position.0.z.abs() > bounds.half_z {
            position.0.z = position.0.z.clamp(-bounds.half_z, bounds.half_z);
            velocity.0.z = 0.0;
        }

        if velocity.0.length_squared() > 0.01 {
            face_dir.0 = velocity.0.x.atan2(velocity.0.z);
        }
    }
}
