use bevy_math::Vec3;

use crate::{components::TargetId, geometry::Obstacles, layers::Layers};

// ============================================================================
// Collaborator Seams
// ============================================================================

// Spatial queries the detection core needs from its host. Handed to the
// sentry explicitly instead of being reached through a global manager, so the
// core runs against any world representation (including plain test fixtures).
pub trait SpatialQuery {
    // All target-classified entities within `radius` of `center`.
    fn targets_within(&self, center: Vec3, radius: f32, mask: Layers) -> Vec<(TargetId, Vec3)>;

    // Nearest solid hit along a normalized ray, restricted to `mask`.
    // Trigger-only volumes are not part of the obstacle set and never block.
    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32, mask: Layers) -> Option<f32>;
}

// Damage-receiving side of a catch. Optional at the dispatch site: a sentry
// without a sink still raises detection events.
pub trait DamageSink {
    fn apply_damage(&mut self, target: TargetId, amount: i32);
}

// ============================================================================
// Per-Tick World View
// ============================================================================

// Snapshot of one detectable entity, collected at the top of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetSnapshot {
    pub id: TargetId,
    pub position: Vec3,
    pub layers: Layers,
}

// Borrowed view over static obstacles plus the tick's target snapshot.
// The host collects target state once, then every sentry queries the same
// frozen view, so results within a tick are consistent.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    pub obstacles: &'a Obstacles,
    pub targets: &'a [TargetSnapshot],
}

impl SpatialQuery for WorldView<'_> {
    fn targets_within(&self, center: Vec3, radius: f32, mask: Layers) -> Vec<(TargetId, Vec3)> {
        let radius_sq = radius * radius;
        self.targets
            .iter()
            .filter(|target| target.layers.intersects(mask))
            .filter(|target| target.position.distance_squared(center) <= radius_sq)
            .map(|target| (target.id, target.position))
            .collect()
    }

    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32, mask: Layers) -> Option<f32> {
        self.obstacles.nearest_hit(origin, dir, max_distance, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_filtered_by_mask_and_radius() {
        let obstacles = Obstacles::default();
        let targets = [
            TargetSnapshot {
                id: TargetId(1),
                position: Vec3::new(0.0, 0.0, 3.0),
                layers: Layers::PLAYERS,
            },
            TargetSnapshot {
                id: TargetId(2),
                position: Vec3::new(0.0, 0.0, 30.0),
                layers: Layers::PLAYERS,
            },
            TargetSnapshot {
                id: TargetId(3),
                position: Vec3::new(0.0, 0.0, 3.0),
                layers: Layers::NPCS,
            },
        ];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let found = view.targets_within(Vec3::ZERO, 10.0, Layers::PLAYERS);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, TargetId(1));
    }
}
