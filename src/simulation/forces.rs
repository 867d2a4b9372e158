//! Pairwise force model for the solar-system engine
//!
//! Defines the [`ForceModel`] trait and direct Newtonian gravity.
//! Forces are computed against one immutable snapshot of the system;
//! nothing here mutates a body.

use crate::error::SimError;
use crate::simulation::states::{Body, NVec2, System};

/// Result of one pairwise evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // force on `a` exerted by `b`, newtons
    pub distance: f64, // unsoftened separation |x_b - x_a|, metres
}

/// Net force on one body for one tick, plus the distance readout
/// gathered while summing it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetForce {
    pub force: NVec2,
    pub distance_to_primary: Option<f64>,
}

/// Trait for pairwise force laws operating on [`Body`] snapshots
pub trait ForceModel {
    /// Force exerted on `a` by `b`
    fn attraction(&self, a: &Body, b: &Body) -> Result<Attraction, SimError>;

    /// Compute the net force on every body in `sys`
    /// - `out[i]` is overwritten with the sum over all other bodies
    /// - `out[i].distance_to_primary` is the distance to the first primary
    ///   in roster order other than body i itself
    ///
    /// On failure `out` is partially written and must be discarded.
    fn accumulate_forces(&self, sys: &System, out: &mut [NetForce]) -> Result<(), SimError> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NetForce::default();
        }

        let n = sys.bodies.len();
        debug_assert_eq!(out.len(), n);

        // Loop over each unordered pair (i, j) with i < j; pairs are visited
        // in ascending order of the partner index for every body
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                let pair = self.attraction(bi, bj)?;

                // equal and opposite
                out[i].force += pair.force;
                out[j].force -= pair.force;

                if bj.is_primary && out[i].distance_to_primary.is_none() {
                    out[i].distance_to_primary = Some(pair.distance);
                }
                if bi.is_primary && out[j].distance_to_primary.is_none() {
                    out[j].distance_to_primary = Some(pair.distance);
                }
            }
        }

        Ok(())
    }
}

/// 2D Newtonian gravity with optional softening
/// With `eps2 == 0` coincident bodies are an error; with `eps2 > 0` the
/// separation is smoothed to sqrt(|r|^2 + eps2)
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl ForceModel for NewtonianGravity {
    fn attraction(&self, a: &Body, b: &Body) -> Result<Attraction, SimError> {
        // r points from a to b, so a is pulled along +r
        let r = b.x - a.x;
        let r2 = r.dot(&r);
        let d2 = r2 + self.eps2;

        if d2 == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: a.name.clone(),
                second: b.name.clone(),
            });
        }

        // |F| = G m_a m_b / d^2, direction r / d
        let inv_d = d2.sqrt().recip();
        let coef = self.G * a.mass() * b.mass() * inv_d * inv_d * inv_d;

        Ok(Attraction {
            force: coef * r,
            distance: r2.sqrt(),
        })
    }
}
