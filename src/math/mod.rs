// src/math/mod.rs

pub mod vector;

pub use vector::{add, norm, normalize_with_epsilon, scale, sub, Vector3};
