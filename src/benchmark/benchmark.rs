use std::time::Instant;

use crate::error::SimError;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{ForceModel, NetForce, NewtonianGravity};
use crate::simulation::params::{Parameters, AU, G};
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`: one heavy star plus
/// `n - 1` light bodies on a deterministic spiral, no rand needed
fn make_system(n: usize) -> Result<System, SimError> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let (x, m) = if i == 0 {
            (NVec2::zeros(), 2.0e30)
        } else {
            let r = (0.3 + 0.05 * i_f) * AU;
            (NVec2::new((i_f * 0.37).cos() * r, (i_f * 0.37).sin() * r), 1.0e24)
        };

        let b = Body::new(format!("b{i}"), x, NVec2::zeros(), m)?;
        bodies.push(if i == 0 { b.primary() } else { b });
    }

    Ok(System::new(bodies))
}

/// Time the pairwise force pass alone
pub fn bench_gravity() {
    let ns = [10, 50, 100, 200, 400, 800];
    let gravity = NewtonianGravity { G, eps2: 0.0 };

    for n in ns {
        let mut out = vec![NetForce::default(); n];

        // Warm up, then time a second pass
        let timed = make_system(n).and_then(|sys| {
            gravity.accumulate_forces(&sys, &mut out)?;
            let t0 = Instant::now();
            gravity.accumulate_forces(&sys, &mut out)?;
            Ok(t0.elapsed().as_secs_f64())
        });

        match timed {
            Ok(dt_direct) => println!("N = {n:5}, forces = {:8.6} s", dt_direct),
            Err(e) => println!("N = {n:5}, failed: {e}"),
        }
    }
}

/// Full ticks (forces + integration + trail append), averaged
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    println!("N,step_ms");

    for n in (10..=400).step_by(30) {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 100 { 200 } else { 20 };

        let timed = make_system(n).and_then(|sys| {
            let mut sim = Simulation::new(sys, Parameters::default(), NewtonianGravity { G, eps2: 0.0 });
            let t0 = Instant::now();
            sim.run(steps)?;
            Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps as f64)
        });

        match timed {
            Ok(ms) => println!("{},{:.6}", n, ms),
            Err(e) => println!("{n},failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_system_has_distinct_positions() {
        let sys = make_system(50).unwrap();
        assert_eq!(sys.bodies.len(), 50);
        assert_eq!(sys.primary_index(), Some(0));
        for (i, a) in sys.bodies.iter().enumerate() {
            assert!(sys.bodies[i + 1..].iter().all(|b| b.x != a.x));
        }
    }

    #[test]
    fn test_make_system_steps_cleanly() {
        let gravity = NewtonianGravity { G, eps2: 0.0 };
        let sys = make_system(20).unwrap();
        let mut out = vec![NetForce::default(); 20];
        assert!(gravity.accumulate_forces(&sys, &mut out).is_ok());
        assert!(out.iter().all(|f| f.force.norm() > 0.0));

        let mut sim = Simulation::new(sys, Parameters::default(), gravity);
        sim.run(5).unwrap();
        assert_eq!(sim.ticks(), 5);
    }
}
