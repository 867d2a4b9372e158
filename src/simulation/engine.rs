//! Tick orchestration
//!
//! One `step` is two phases over the same roster:
//! - A (read):  net force on every body from the snapshot at tick start
//! - B (write): integrate every body and append to its trajectory
//!
//! Phase B never starts unless phase A succeeded for every body, so a
//! failed tick leaves the system untouched.

use log::debug;

use crate::error::SimError;
use crate::simulation::forces::{ForceModel, NetForce};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

pub struct Simulation<F: ForceModel> {
    pub system: System,
    pub parameters: Parameters,
    pub forces: F,
    scratch: Vec<NetForce>, // reused phase A buffer
    ticks: u64,
}

impl<F: ForceModel> Simulation<F> {
    pub fn new(system: System, parameters: Parameters, forces: F) -> Self {
        let scratch = vec![NetForce::default(); system.bodies.len()];
        Self { system, parameters, forces, scratch, ticks: 0 }
    }

    /// Advance the whole system by one `dt`
    pub fn step(&mut self) -> Result<(), SimError> {
        let Simulation { system, parameters, forces, scratch, .. } = self;

        // an empty roster still advances the clock
        scratch.resize(system.bodies.len(), NetForce::default());

        // Phase A: `system` is only borrowed shared here
        forces.accumulate_forces(system, scratch)?;

        // Phase B
        let dt = parameters.dt;
        for (b, f) in system.bodies.iter_mut().zip(scratch.iter()) {
            b.distance_to_primary = f.distance_to_primary;
            semi_implicit_euler(b, f.force, dt);
            b.trajectory.record(b.x);
        }

        system.t += dt;
        self.ticks += 1;

        debug!("tick {} t = {:.0} s ({} bodies)", self.ticks, self.system.t, self.system.bodies.len());
        Ok(())
    }

    /// Run `n` ticks, stopping at the first failure
    pub fn run(&mut self, n: u64) -> Result<(), SimError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
