//! Core state types for the solar-system simulation.
//!
//! - `Body`   one star or planet: kinematic state, mass, role and trail
//! - `System` the fixed roster of bodies plus the simulated clock `t`
//!
//! Positions are metres with the origin at the star's starting point,
//! velocities are metres per second.

use nalgebra::Vector2;

use crate::error::SimError;
use crate::simulation::trajectory::{Trajectory, TrajectoryPolicy};

pub type NVec2 = Vector2<f64>;

/// Display attributes carried across to the renderer; unused by the physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub radius: f64, // pixels
    pub color: [u8; 3], // rgb
}

impl Default for Appearance {
    fn default() -> Self {
        Self { radius: 5.0, color: [255, 255, 255] }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, always > 0
    pub is_primary: bool, // gravitational anchor (the star)
    pub distance_to_primary: Option<f64>, // set during the last step, None without a primary
    pub trajectory: Trajectory,
    pub appearance: Appearance,
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite masses.
    /// The trajectory starts empty and unbounded.
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        let name = name.into();
        if !(m > 0.0) || !m.is_finite() {
            return Err(SimError::InvalidMass { name, mass: m });
        }

        Ok(Self {
            name,
            x,
            v,
            m,
            is_primary: false,
            distance_to_primary: None,
            trajectory: Trajectory::default(),
            appearance: Appearance::default(),
        })
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_trajectory_policy(mut self, policy: TrajectoryPolicy) -> Self {
        self.trajectory = Trajectory::new(policy);
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed for the lifetime of a run
    pub t: f64, // elapsed simulated time, seconds
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Index of the first primary body in roster order
    pub fn primary_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.is_primary)
    }
}
