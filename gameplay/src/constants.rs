// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// Tolerance (degrees) for deciding the sweep has reached a boundary. A variable
// tick step can land slightly short of the clamped boundary; anything inside
// this band counts as arrived.
pub const SWEEP_BOUNDARY_EPSILON: f32 = 1e-3;

// Tolerance (degrees) applied to the field-of-view boundary so a target sitting
// exactly on the half-angle is included despite rounding in acos.
pub const VIEW_ANGLE_EPSILON: f32 = 1e-3;

// ============================================================================
// Sentries
// ============================================================================

pub const SENTRY_SWEEP_ARC: f32 = 60.0; // degrees, full arc
pub const SENTRY_SWEEP_SPEED: f32 = 30.0; // degrees per second
pub const SENTRY_PAUSE_AT_ENDS: f32 = 0.35; // seconds
pub const SENTRY_VIEW_DISTANCE: f32 = 12.0; // meters
pub const SENTRY_VIEW_HALF_ANGLE: f32 = 25.0; // degrees
pub const SENTRY_DAMAGE: i32 = 1; // hearts per catch
pub const SENTRY_HIT_COOLDOWN: f32 = 1.5; // seconds between catches of the same target

// ============================================================================
// NPC Patrol
// ============================================================================

pub const PATROL_ARRIVE_DISTANCE: f32 = 0.05; // meters
pub const PATROL_WAIT_AT_POINT: f32 = 0.5; // seconds
pub const PATROL_WALK_SPEED: f32 = 1.5; // meters per second
pub const PATROL_TURN_SPEED: f32 = 540.0; // degrees per second

// ============================================================================
// Wind Fans
// ============================================================================

pub const FAN_MAX_ACCELERATION: f32 = 25.0; // meters per second squared
pub const FAN_FACE_OFFSET: f32 = 0.05; // meters in front of the fan face
pub const FAN_PROBE_RADIUS: f32 = 0.15; // meters, thickened occlusion probe
pub const FAN_TURBULENCE_FREQUENCY: f32 = 1.2; // hertz

// ============================================================================
// Health & Lives
// ============================================================================

pub const MAX_HEARTS: i32 = 3;
pub const MAX_LIVES: i32 = 3;
