use bevy_ecs::prelude::*;
use bevy_time::Time;

use gameplay::components::{FaceDirection, NpcMarker, Position};

use crate::components::Patrol;

// ============================================================================
// NPC Patrol System
// ============================================================================

pub fn npcs_patrol_system(
    time: Res<Time>,
    mut npcs: Query<(&mut Patrol, &mut Position, &mut FaceDirection), With<NpcMarker>>,
) {
    let delta = time.delta_secs();

    for (mut patrol, mut position, mut face_dir) in &mut npcs {
        patrol.0.tick(delta, &mut position.0, &mut face_dir.0);
    }
}
