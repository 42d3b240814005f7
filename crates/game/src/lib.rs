//! Rotorstrike: helicopter combat simulation core.

pub mod camera_rig;
pub mod combat;
pub mod config;
pub mod driver;
pub mod emplacement;
pub mod projectile;
pub mod scene;
pub mod seeder;
pub mod simulation;
pub mod tuning;
pub mod vehicle;

pub use config::GameConfig;
pub use simulation::{FrameReport, Simulation};
