//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step `dt` (one simulated day by default),
//! - gravitational constant `G`,
//! - optional softening `eps2` (0 means exact Newtonian gravity)

use crate::error::SimError;

pub const AU: f64 = 149.6e6 * 1000.0; // metres
pub const G: f64 = 6.67428e-11; // N m^2 / kg^2
pub const DAY: f64 = 3600.0 * 24.0; // seconds

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Default for Parameters {
    fn default() -> Self {
        Self { dt: DAY, G, eps2: 0.0 }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(SimError::InvalidConfig(format!("time step must be > 0, got {}", self.dt)));
        }
        if !(self.G > 0.0) || !self.G.is_finite() {
            return Err(SimError::InvalidConfig(format!("G must be > 0, got {}", self.G)));
        }
        if self.eps2 < 0.0 || !self.eps2.is_finite() {
            return Err(SimError::InvalidConfig(format!("eps2 must be >= 0, got {}", self.eps2)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let p = Parameters::default();
        assert_eq!(p.dt, 86400.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_step() {
        let p = Parameters { dt: 0.0, ..Parameters::default() };
        assert!(p.validate().is_err());
        let p = Parameters { eps2: -1.0, ..Parameters::default() };
        assert!(p.validate().is_err());
    }
}
