use bevy_math::{Quat, Vec3};

use crate::{config::FanConfig, constants::PHYSICS_EPSILON, geometry::Obstacles, layers::Layers};

// ============================================================================
// Wind Fan
// ============================================================================

// A directional wind source: bodies inside a box-shaped region in front of
// the fan get pushed along its forward axis, with the push fading linearly
// toward the far end of the region. Solid geometry between the fan face and
// the body blocks the wind; the probe is thickened so it does not slip
// through gaps a draft could not.
pub struct WindFan {
    config: FanConfig,
    position: Vec3,
    rotation: Quat,
    // Wind region in fan-local space: |x| <= half_width, |y| <= half_height,
    // 0 < z <= depth (outward from the face).
    half_width: f32,
    half_height: f32,
    depth: f32,
}

impl WindFan {
    #[must_use]
    pub fn new(config: FanConfig, position: Vec3, rotation: Quat, half_width: f32, half_height: f32, depth: f32) -> Self {
        Self {
            config,
            position,
            rotation,
            half_width: half_width.abs(),
            half_height: half_height.abs(),
            depth: depth.max(PHYSICS_EPSILON),
        }
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    #[must_use]
    pub const fn affects(&self, layers: Layers) -> bool {
        self.config.affected_mask.intersects(layers)
    }

    // Acceleration the wind imparts on a body at `body_pos`, or `None` when
    // the body is outside the region, behind the face, or occluded. `now`
    // drives the turbulence phase.
    #[must_use]
    pub fn wind_acceleration(&self, body_pos: Vec3, now: f64, obstacles: &Obstacles) -> Option<Vec3> {
        let local = self.rotation.inverse() * (body_pos - self.position);

        // Ignore behind the fan and outside the wind box.
        if local.z <= 0.0 || local.z > self.depth {
            return None;
        }
        if local.x.abs() > self.half_width || local.y.abs() > self.half_height {
            return None;
        }

        let forward = self.forward();
        let origin = self.position + forward * self.config.face_offset;
        let to = body_pos - origin;
        let distance = to.length();
        if distance > PHYSICS_EPSILON {
            let dir = to / distance;
            if let Some(hit) = obstacles.nearest_hit_inflated(
                origin,
                dir,
                distance,
                self.config.occluder_mask,
                self.config.probe_radius,
            ) {
                if hit < distance {
                    return None;
                }
            }
        }

        // Linear falloff along the region depth.
        let t = (local.z / self.depth).clamp(0.0, 1.0);
        let strength = self.config.max_acceleration * (1.0 - t);
        let mut accel = forward * strength;

        if self.config.turbulence > 0.0 {
            let phase = (now * f64::from(self.config.turbulence_frequency) * f64::from(std::f32::consts::TAU)) as f32;
            let lateral = self.rotation * Vec3::X;
            accel += lateral * (phase.sin() * self.config.turbulence);
        }

        Some(accel)
    }
}
