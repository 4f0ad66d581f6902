use bevy_math::Vec3;

use crate::{constants::PHYSICS_EPSILON, layers::Layers};

// ============================================================================
// Axis-Aligned Boxes
// ============================================================================

// Solid world geometry. Trigger volumes (wind regions and the like) are never
// part of an obstacle set, so line-of-sight probes only ever see solids.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub layers: Layers,
}

impl Aabb {
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3, layers: Layers) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            layers,
        }
    }

    #[must_use]
    pub fn from_corners(min: Vec3, max: Vec3, layers: Layers) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5, layers)
    }

    // Ray vs box via slab intervals, with half extents inflated by `inflate`
    // (a thickened probe). `dir` must be normalized; the return value is the
    // entry distance along the ray, `None` if the box is missed or farther
    // than `max_distance`.
    #[must_use]
    pub fn ray_entry(&self, origin: Vec3, dir: Vec3, max_distance: f32, inflate: f32) -> Option<f32> {
        let local = origin - self.center;
        let mut t_min = 0.0_f32;
        let mut t_max = max_distance;

        for axis in 0..3 {
            let half = self.half_extents[axis] + inflate;
            (t_min, t_max) = slab_interval(local[axis], dir[axis], half, t_min, t_max)?;
        }

        (t_min <= t_max).then_some(t_min)
    }
}

// Compute the intersection interval of a ray with a slab (used in ray-AABB tests)
#[must_use]
fn slab_interval(local_coord: f32, ray_dir: f32, half_extent: f32, t_min: f32, t_max: f32) -> Option<(f32, f32)> {
    if ray_dir.abs() > PHYSICS_EPSILON {
        let t1 = (-half_extent - local_coord) / ray_dir;
        let t2 = (half_extent - local_coord) / ray_dir;
        let new_min = t_min.max(t1.min(t2));
        let new_max = t_max.min(t1.max(t2));
        if new_min <= new_max {
            Some((new_min, new_max))
        } else {
            None
        }
    } else if local_coord.abs() > half_extent {
        None
    } else {
        Some((t_min, t_max))
    }
}

// ============================================================================
// Obstacle Sets
// ============================================================================

// The static solid geometry of a level.
#[derive(Debug, Clone, Default)]
pub struct Obstacles(pub Vec<Aabb>);

impl Obstacles {
    // Nearest ray hit against boxes matching `mask`, or `None` when the path
    // is clear out to `max_distance`.
    #[must_use]
    pub fn nearest_hit(&self, origin: Vec3, dir: Vec3, max_distance: f32, mask: Layers) -> Option<f32> {
        self.nearest_hit_inflated(origin, dir, max_distance, mask, 0.0)
    }

    // Same, with every box inflated by `probe_radius` for a thick probe that
    // does not slip through narrow gaps.
    #[must_use]
    pub fn nearest_hit_inflated(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
        mask: Layers,
        probe_radius: f32,
    ) -> Option<f32> {
        self.0
            .iter()
            .filter(|aabb| aabb.layers.intersects(mask))
            .filter_map(|aabb| aabb.ray_entry(origin, dir, max_distance, probe_radius))
            .min_by(f32::total_cmp)
    }
}
