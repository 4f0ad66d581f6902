use bevy_ecs::prelude::*;

use gameplay::PatrolController;

// ============================================================================
// Sim-Side Components
// ============================================================================

// Route-following state for a patrolling NPC entity.
#[derive(Component)]
pub struct Patrol(pub PatrolController);
