// src/config/scenario.rs

use serde::Deserialize;

/// シナリオ（ターゲットとチェイサーの初期状態）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub target: EntityInstance,
    pub chaser: EntityInstance,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EntityInstance {
    pub initial_position: [f64; 3],
    pub initial_velocity: [f64; 3],
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            target: EntityInstance {
                initial_position: [0.0, 0.0, 500.0],
                initial_velocity: [40.0, 5.0, 0.5],
            },
            chaser: EntityInstance {
                initial_position: [-500.0, -3000.0, 0.0],
                initial_velocity: [150.0, 120.0, 10.0],
            },
        }
    }
}
