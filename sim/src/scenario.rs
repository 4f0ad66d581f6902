use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gameplay::{FanConfig, PatrolConfig, SentryConfig};

// ============================================================================
// Scenario Files
// ============================================================================

// A level description: geometry, players, NPC routes, fans and camera
// placements. Positions are `[x, y, z]` in meters; angles in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    // Playable half-extents on X and Z.
    pub bounds: [f32; 2],
    pub walls: Vec<WallSpec>,
    pub players: Vec<PlayerSpec>,
    #[serde(default)]
    pub npcs: Vec<NpcSpec>,
    #[serde(default)]
    pub fans: Vec<FanSpec>,
    pub sentries: Vec<SentrySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpec {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub id: u32,
    pub spawn: [f32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcSpec {
    pub route: Vec<[f32; 3]>,
    #[serde(default)]
    pub config: PatrolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanSpec {
    pub position: [f32; 3],
    pub yaw_degrees: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub depth: f32,
    #[serde(default)]
    pub config: FanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentrySpec {
    pub id: u32,
    pub position: [f32; 3],
    // Base heading of the rig; the sweep oscillates around it.
    pub yaw_degrees: f32,
    // Fixed downward tilt of the head, preserved through the sweep.
    #[serde(default)]
    pub tilt_degrees: f32,
    #[serde(default)]
    pub config: SentryConfig,
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    // Built-in layout: a walled rooftop with two players, one patrolling cat,
    // a fan across a gap, and two cameras watching the crossing.
    #[must_use]
    pub fn rooftop_default() -> Self {
        Self {
            bounds: [20.0, 20.0],
            walls: vec![
                // Perimeter
                WallSpec {
                    min: [-20.0, 0.0, 19.7],
                    max: [20.0, 4.0, 20.0],
                },
                WallSpec {
                    min: [-20.0, 0.0, -20.0],
                    max: [20.0, 4.0, -19.7],
                },
                WallSpec {
                    min: [19.7, 0.0, -20.0],
                    max: [20.0, 4.0, 20.0],
                },
                WallSpec {
                    min: [-20.0, 0.0, -20.0],
                    max: [-19.7, 4.0, 20.0],
                },
                // A crate row giving the players cover from camera 1.
                WallSpec {
                    min: [-6.0, 0.0, 4.0],
                    max: [-2.0, 2.0, 5.0],
                },
                WallSpec {
                    min: [2.0, 0.0, -5.0],
                    max: [6.0, 2.0, -4.0],
                },
            ],
            players: vec![
                PlayerSpec {
                    id: 1,
                    spawn: [-15.0, 0.0, -15.0],
                },
                PlayerSpec {
                    id: 2,
                    spawn: [-15.0, 0.0, -12.0],
                },
            ],
            npcs: vec![NpcSpec {
                route: vec![[-10.0, 0.0, 10.0], [10.0, 0.0, 10.0]],
                config: PatrolConfig::default(),
            }],
            fans: vec![FanSpec {
                position: [12.0, 1.0, 0.0],
                yaw_degrees: -90.0, // blows toward -X
                half_width: 3.0,
                half_height: 2.0,
                depth: 10.0,
                config: FanConfig::default(),
            }],
            sentries: vec![
                SentrySpec {
                    id: 1,
                    position: [0.0, 3.0, 8.0],
                    yaw_degrees: 180.0, // looks back across the roof
                    tilt_degrees: 15.0,
                    config: SentryConfig::default(),
                },
                SentrySpec {
                    id: 2,
                    position: [0.0, 3.0, -8.0],
                    yaw_degrees: 0.0,
                    tilt_degrees: 15.0,
                    config: SentryConfig::default(),
                },
            ],
        }
    }
}
