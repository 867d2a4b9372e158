//! Fixed-step time integration for the solar-system engine
//!
//! Semi-implicit (symplectic) Euler: velocity is kicked first and the
//! new velocity drives the position drift. Explicit Euler would spiral
//! planets outward over a few orbits.

use super::states::{Body, NVec2};

/// Advance one body by `dt` under `force`
/// - v_n+1 = v_n + (F / m) dt
/// - x_n+1 = x_n + v_n+1 dt
pub fn semi_implicit_euler(body: &mut Body, force: NVec2, dt: f64) {
    let a = force / body.mass();
    body.v += a * dt;
    body.x += body.v * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_updated_before_position() {
        let mut b = Body::new("probe", NVec2::new(1.0, 0.0), NVec2::new(0.0, 1.0), 2.0).unwrap();
        let dt = 0.01;

        semi_implicit_euler(&mut b, NVec2::new(0.0, -19.62), dt);

        // a = -9.81, v = 1 - 0.0981
        assert!((b.v - NVec2::new(0.0, 0.9019)).norm() < 1e-12);
        // x uses the new velocity
        assert!((b.x - NVec2::new(1.0, 0.009019)).norm() < 1e-12);
    }

    #[test]
    fn test_zero_force_is_uniform_motion() {
        let mut b = Body::new("drifter", NVec2::zeros(), NVec2::new(3.0, -4.0), 1.0).unwrap();
        semi_implicit_euler(&mut b, NVec2::zeros(), 2.0);
        assert_eq!(b.x, NVec2::new(6.0, -8.0));
        assert_eq!(b.v, NVec2::new(3.0, -4.0));
    }
}
