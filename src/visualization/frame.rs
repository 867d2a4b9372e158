//! Per-frame hand-off to the renderer
//!
//! `Frame::capture` projects the current system through the shared
//! `ViewTransform` and returns everything a window layer needs to draw:
//! circles, trail polylines and distance labels. Drawing itself lives
//! outside this crate.

use nalgebra::Point2;

use crate::simulation::states::{Body, System};
use crate::visualization::view::ViewTransform;

/// Trails with this many points or fewer are not drawn
const MIN_TRAIL_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct BodySprite {
    pub name: String,
    pub center: Point2<f64>,
    pub radius: f64,
    pub color: [u8; 3],
    pub trail: Vec<Point2<f64>>, // oldest first, empty when too short to draw
    pub label: Option<String>, // distance readout, planets only
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub sprites: Vec<BodySprite>,
}

impl Frame {
    pub fn capture(sys: &System, view: &ViewTransform) -> Self {
        let sprites = sys.bodies.iter().map(|b| sprite(b, view)).collect();
        Self { t: sys.t, sprites }
    }
}

fn sprite(b: &Body, view: &ViewTransform) -> BodySprite {
    let trail = if b.trajectory.len() > MIN_TRAIL_POINTS {
        b.trajectory.iter().map(|x| view.project(x)).collect()
    } else {
        Vec::new()
    };

    let label = if b.is_primary { None } else { b.distance_to_primary.map(distance_label) };

    BodySprite {
        name: b.name.clone(),
        center: view.project(&b.x),
        radius: b.appearance.radius,
        color: b.appearance.color,
        trail,
        label,
    }
}

/// Metres as gigametres with one decimal, e.g. "149.6Gm"
pub fn distance_label(metres: f64) -> String {
    format!("{:.1}Gm", metres / 1e9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::AU;
    use crate::simulation::states::NVec2;

    #[test]
    fn test_distance_label() {
        assert_eq!(distance_label(AU), "149.6Gm");
        assert_eq!(distance_label(0.0), "0.0Gm");
    }

    #[test]
    fn test_capture_trail_threshold_and_labels() {
        let sun = Body::new("Sun", NVec2::zeros(), NVec2::zeros(), 2e30).unwrap().primary();
        let mut earth = Body::new("Earth", NVec2::new(AU, 0.0), NVec2::zeros(), 6e24).unwrap();
        earth.distance_to_primary = Some(AU);
        earth.trajectory.record(NVec2::new(AU, 0.0));
        earth.trajectory.record(NVec2::new(AU, 1.0));

        let mut sys = System::new(vec![sun, earth]);
        let view = ViewTransform::with_size(800.0, 700.0).unwrap();

        let frame = Frame::capture(&sys, &view);
        assert_eq!(frame.sprites.len(), 2);
        assert!(frame.sprites[1].trail.is_empty(), "two points is not a trail yet");
        assert_eq!(frame.sprites[0].label, None);
        assert_eq!(frame.sprites[1].label.as_deref(), Some("149.6Gm"));
        assert_eq!(frame.sprites[0].center, Point2::new(400.0, 350.0));

        sys.bodies[1].trajectory.record(NVec2::new(AU, 2.0));
        let frame = Frame::capture(&sys, &view);
        assert_eq!(frame.sprites[1].trail.len(), 3);
    }
}
