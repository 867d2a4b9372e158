//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size and physical constants
//! - [`TrajectoryConfig`] – optional cap on trail length
//! - [`ViewConfig`]       – initial window size, scale and zoom step
//! - [`BodyConfig`]       – initial state and display attributes per body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 86400.0             # one day per tick
//!   G: 6.67428e-11
//!   eps2: 0.0               # 0 -> coincident bodies are an error
//!
//! trajectory:
//!   max_points: 2000        # omit for unbounded trails
//!
//! view:
//!   width: 800
//!   height: 700
//!   zoom_factor: 1.05
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 5
//!     color: [255, 255, 0]
//!     primary: true
//!   - name: Earth
//!     x: [1.496e11, 0.0]
//!     v: [0.0, -29800.0]
//!     m: 5.97e24
//!     radius: 8
//!     color: [100, 149, 237]
//! ```
//!
//! Every section except `bodies` may be omitted.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{AU, DAY, G};
use crate::visualization::view::{DEFAULT_SCALE, ZOOM_FACTOR};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // time step size, seconds
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub eps2: f64, // softening - 0 keeps exact inverse-square forces
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { dt: DAY, G, eps2: 0.0 }
    }
}

fn default_dt() -> f64 {
    DAY
}

fn default_g() -> f64 {
    G
}

/// Trail retention; absent means unbounded
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TrajectoryConfig {
    pub max_points: Option<usize>,
}

/// Initial view state handed to the presentation layer
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_scale")]
    pub scale: f64, // display units per metre
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: DEFAULT_SCALE,
            zoom_factor: ZOOM_FACTOR,
        }
    }
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    700.0
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_zoom_factor() -> f64 {
    ZOOM_FACTOR
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // initial position, metres
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, metres per second
    pub m: f64, // mass, kg
    #[serde(default = "default_radius")]
    pub radius: f64, // display radius, pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub primary: bool,
}

fn default_radius() -> f64 {
    5.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub trajectory: TrajectoryConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SimError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// The Sun and the eight planets starting on the +x axis, moving
    /// toward -y at their mean orbital speed
    pub fn solar_system() -> Self {
        // (name, distance in AU, speed in km/s, mass in kg, radius px, colour)
        let roster: [(&str, f64, f64, f64, f64, [u8; 3]); 9] = [
            ("Sun", 0.0, 0.0, 1.98892e30, 5.0, [255, 255, 0]),
            ("Mercury", 0.387, 47.4, 0.33e24, 4.0, [80, 78, 81]),
            ("Venus", 0.723, 35.0, 4.87e24, 7.0, [199, 205, 214]),
            ("Earth", 1.0, 29.8, 5.97e24, 8.0, [100, 149, 237]),
            ("Mars", 1.524, 24.1, 0.642e24, 6.0, [188, 39, 50]),
            ("Jupiter", 5.204, 13.1, 1898e24, 20.0, [168, 86, 13]),
            ("Saturn", 9.572, 9.7, 568e24, 16.0, [219, 205, 81]),
            ("Uranus", 19.165, 6.8, 86.8e24, 10.0, [145, 186, 227]),
            ("Neptune", 30.181, 5.4, 102e24, 12.0, [9, 15, 179]),
        ];

        let bodies = roster
            .iter()
            .map(|&(name, au, kms, m, radius, color)| BodyConfig {
                name: name.to_string(),
                x: [au * AU, 0.0],
                v: [0.0, -kms * 1000.0],
                m,
                radius,
                color,
                primary: name == "Sun",
            })
            .collect();

        Self {
            parameters: ParametersConfig::default(),
            trajectory: TrajectoryConfig::default(),
            view: ViewConfig::default(),
            bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - name: Sun\n    x: [0.0, 0.0]\n    m: 2.0e30\n    primary: true\n",
        )
        .unwrap();

        assert_eq!(cfg.parameters.dt, DAY);
        assert_eq!(cfg.parameters.G, G);
        assert_eq!(cfg.parameters.eps2, 0.0);
        assert!(cfg.trajectory.max_points.is_none());
        assert_eq!(cfg.view.width, 800.0);
        assert_eq!(cfg.view.zoom_factor, 1.05);
        assert_eq!(cfg.bodies[0].v, [0.0, 0.0]);
        assert!(cfg.bodies[0].primary);
    }

    #[test]
    fn test_missing_bodies_is_error() {
        let res = ScenarioConfig::from_yaml_str("parameters:\n  dt: 10.0\n");
        assert!(matches!(res, Err(SimError::Yaml(_))));
    }

    #[test]
    fn test_solar_system_preset() {
        let cfg = ScenarioConfig::solar_system();
        assert_eq!(cfg.bodies.len(), 9);
        assert_eq!(cfg.bodies.iter().filter(|b| b.primary).count(), 1);
        let earth = &cfg.bodies[3];
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.x, [AU, 0.0]);
        assert!((earth.v[1] + 29800.0).abs() < 1e-9);
    }
}
