pub mod fans;
pub mod npcs;
pub mod players;
pub mod sentries;

pub use fans::fans_wind_system;
pub use npcs::npcs_patrol_system;
pub use players::players_wander_system;
pub use sentries::sentries_detection_system;
