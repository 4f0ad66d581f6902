use bevy_math::Vec3;

use crate::{
    components::TargetId,
    config::SentryConfig,
    constants::{PHYSICS_EPSILON, VIEW_ANGLE_EPSILON},
    world::SpatialQuery,
};

// ============================================================================
// Vision Query
// ============================================================================

// One target that passed range, field-of-view and occlusion checks this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub target: TargetId,
    pub position: Vec3,
    pub distance: f32,
}

// Find every target visible from `origin` looking along `forward`: inside the
// view radius, within the half-angle cone (boundary inclusive), and with no
// obstruction-classified solid between the lens and the target. All
// qualifying targets are returned; two players caught in the same frame both
// show up. Pure with respect to its inputs, so repeated calls with an
// unchanged world return the same set.
#[must_use]
pub fn visible_targets(world: &dyn SpatialQuery, origin: Vec3, forward: Vec3, config: &SentryConfig) -> Vec<Detection> {
    let mut detections = Vec::new();

    if config.view_distance <= 0.0 {
        return detections;
    }
    let Some(forward) = forward.try_normalize() else {
        return detections;
    };

    for (target, position) in world.targets_within(origin, config.view_distance, config.target_mask) {
        let to = position - origin;
        let distance = to.length();

        // Coincident with the lens: no meaningful direction, skip this tick.
        if distance <= PHYSICS_EPSILON {
            continue;
        }
        let dir = to / distance;

        let deviation_deg = forward.dot(dir).clamp(-1.0, 1.0).acos().to_degrees();
        if deviation_deg > config.view_half_angle_degrees + VIEW_ANGLE_EPSILON {
            continue;
        }

        // Line-of-sight probe against solids only; a hit strictly before the
        // target means something stands in between.
        if let Some(hit) = world.cast_ray(origin, dir, distance, config.obstruction_mask) {
            if hit < distance {
                continue;
            }
        }

        detections.push(Detection {
            target,
            position,
            distance,
        });
    }

    detections
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Quat;

    use crate::{
        geometry::{Aabb, Obstacles},
        layers::Layers,
        world::{TargetSnapshot, WorldView},
    };

    fn player(id: u32, position: Vec3) -> TargetSnapshot {
        TargetSnapshot {
            id: TargetId(id),
            position,
            layers: Layers::PLAYERS,
        }
    }

    fn config() -> SentryConfig {
        SentryConfig::default() // 12m range, 25 degree half-angle
    }

    #[test]
    fn target_in_cone_is_detected() {
        let obstacles = Obstacles::default();
        // 11.3 degrees off forward at distance ~10.2.
        let targets = [player(1, Vec3::new(2.0, 0.0, 10.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let found = visible_targets(&view, Vec3::ZERO, Vec3::Z, &config());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].target, TargetId(1));
        assert!((found[0].distance - 104.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn half_angle_boundary_is_inclusive() {
        let obstacles = Obstacles::default();
        let exactly_on = Quat::from_rotation_y(25.0_f32.to_radians()) * (Vec3::Z * 8.0);
        let just_outside = Quat::from_rotation_y(25.1_f32.to_radians()) * (Vec3::Z * 8.0);
        let targets = [player(1, exactly_on), player(2, just_outside)];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let found = visible_targets(&view, Vec3::ZERO, Vec3::Z, &config());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].target, TargetId(1));
    }

    #[test]
    fn obstruction_before_target_blocks_detection() {
        let wall = Aabb::from_corners(
            Vec3::new(-3.0, -1.0, 4.9),
            Vec3::new(3.0, 3.0, 5.1),
            Layers::ENVIRONMENT,
        );
        let obstacles = Obstacles(vec![wall]);
        let targets = [player(1, Vec3::new(2.0, 0.0, 10.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        assert!(visible_targets(&view, Vec3::ZERO, Vec3::Z, &config()).is_empty());
    }

    #[test]
    fn non_obstruction_geometry_does_not_block() {
        // Same box, but not on the obstruction layer.
        let decoration = Aabb::from_corners(Vec3::new(-3.0, -1.0, 4.9), Vec3::new(3.0, 3.0, 5.1), Layers::NPCS);
        let obstacles = Obstacles(vec![decoration]);
        let targets = [player(1, Vec3::new(2.0, 0.0, 10.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        assert_eq!(visible_targets(&view, Vec3::ZERO, Vec3::Z, &config()).len(), 1);
    }

    #[test]
    fn all_simultaneous_targets_are_reported() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(1.0, 0.0, 8.0)), player(2, Vec3::new(-1.0, 0.0, 8.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let found = visible_targets(&view, Vec3::ZERO, Vec3::Z, &config());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn coincident_target_is_skipped() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::ZERO)];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        assert!(visible_targets(&view, Vec3::ZERO, Vec3::Z, &config()).is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let obstacles = Obstacles::default();
        let targets = [player(1, Vec3::new(2.0, 0.0, 10.0)), player(2, Vec3::new(0.0, 0.0, 6.0))];
        let view = WorldView {
            obstacles: &obstacles,
            targets: &targets,
        };

        let first = visible_targets(&view, Vec3::ZERO, Vec3::Z, &config());
        let second = visible_targets(&view, Vec3::ZERO, Vec3::Z, &config());
        assert_eq!(first, second);
    }
}
