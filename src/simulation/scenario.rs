//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//! - the single view transform shared by the presentation layer
//!
//! All configuration errors surface here, before the first tick.

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Appearance, Body, NVec2, System};
use crate::simulation::trajectory::TrajectoryPolicy;
use crate::visualization::view::ViewTransform;

/// Fully-initialized scenario, ready to be stepped and drawn
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
    pub view: ViewTransform,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        if cfg.bodies.is_empty() {
            return Err(SimError::InvalidConfig("scenario has no bodies".to_string()));
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
        };
        parameters.validate()?;

        let policy = match cfg.trajectory.max_points {
            None => TrajectoryPolicy::Unbounded,
            Some(0) => {
                return Err(SimError::InvalidConfig("trajectory.max_points must be > 0".to_string()))
            }
            Some(max_points) => TrajectoryPolicy::Bounded { max_points },
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| -> Result<Body, SimError> {
                let body = Body::new(bc.name.clone(), NVec2::from(bc.x), NVec2::from(bc.v), bc.m)?
                    .with_appearance(Appearance { radius: bc.radius, color: bc.color })
                    .with_trajectory_policy(policy);
                Ok(if bc.primary { body.primary() } else { body })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Coincident starting positions would fail on the first tick anyway
        if parameters.eps2 == 0.0 {
            for (i, a) in bodies.iter().enumerate() {
                if let Some(b) = bodies[i + 1..].iter().find(|b| b.x == a.x) {
                    return Err(SimError::CoincidentBodies {
                        first: a.name.clone(),
                        second: b.name.clone(),
                    });
                }
            }
        }

        let view = ViewTransform::new(cfg.view.width, cfg.view.height, cfg.view.scale, cfg.view.zoom_factor)?;

        let forces = NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        };

        let system = System::new(bodies);
        info!(
            "built scenario: {} bodies, primary = {}, dt = {} s",
            system.bodies.len(),
            system.primary_index().map_or("none", |i| system.bodies[i].name.as_str()),
            parameters.dt
        );

        Ok(Self { parameters, system, forces, view })
    }

    /// Split into the stepping engine and the view state
    pub fn into_parts(self) -> (Simulation<NewtonianGravity>, ViewTransform) {
        (Simulation::new(self.system, self.parameters, self.forces), self.view)
    }
}
