// src/models/mod.rs

pub mod chaser;
pub mod kinematics;
pub mod target;

pub use kinematics::KinematicState;
