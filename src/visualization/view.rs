//! Simulation-space to display-space mapping
//!
//! One `ViewTransform` exists per view. Bodies never carry a scale of
//! their own, so every trail is projected with the same zoom history.

use log::info;
use nalgebra::Point2;

use crate::error::SimError;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

/// 1 AU spans 50 display units at startup
pub const DEFAULT_SCALE: f64 = 50.0 / AU;
/// Scale multiplier per zoom event
pub const ZOOM_FACTOR: f64 = 1.05;

/// Current drawable area, delivered by the window layer on resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64, // display units per metre
    zoom_factor: f64,
    context: ViewContext,
}

impl ViewTransform {
    pub fn new(width: f64, height: f64, scale: f64, zoom_factor: f64) -> Result<Self, SimError> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(SimError::InvalidConfig(format!("view scale must be > 0, got {scale}")));
        }
        if !(zoom_factor > 1.0) || !zoom_factor.is_finite() {
            return Err(SimError::InvalidConfig(format!("zoom factor must be > 1, got {zoom_factor}")));
        }
        let context = ViewContext { width, height };
        check_context(&context)?;

        Ok(Self { scale, zoom_factor, context })
    }

    /// Default scale (50 units per AU) and zoom step
    pub fn with_size(width: f64, height: f64) -> Result<Self, SimError> {
        Self::new(width, height, DEFAULT_SCALE, ZOOM_FACTOR)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn context(&self) -> ViewContext {
        self.context
    }

    /// Screen centre, where the simulation origin lands
    pub fn origin(&self) -> Point2<f64> {
        Point2::new(self.context.width / 2.0, self.context.height / 2.0)
    }

    /// position * scale + origin
    pub fn project(&self, x: &NVec2) -> Point2<f64> {
        self.origin() + x * self.scale
    }

    /// Zoom in for positive directions, out for negative ones, nothing for 0
    pub fn zoom(&mut self, direction: i32) {
        match direction.signum() {
            1 => self.scale *= self.zoom_factor,
            -1 => self.scale /= self.zoom_factor,
            _ => return,
        }
        info!("new scale: {:e} units/m", self.scale);
    }

    /// Recentre on a new window size; the scale is kept
    pub fn resize(&mut self, context: ViewContext) -> Result<(), SimError> {
        check_context(&context)?;
        self.context = context;
        Ok(())
    }
}

fn check_context(context: &ViewContext) -> Result<(), SimError> {
    let finite = context.width.is_finite() && context.height.is_finite();
    if !(finite && context.width > 0.0 && context.height > 0.0) {
        return Err(SimError::InvalidConfig(format!(
            "view size must be positive and finite, got {}x{}",
            context.width, context.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewTransform {
        ViewTransform::with_size(800.0, 700.0).unwrap()
    }

    #[test]
    fn test_project_origin_and_au() {
        let v = view();
        assert_eq!(v.project(&NVec2::zeros()), Point2::new(400.0, 350.0));

        let p = v.project(&NVec2::new(AU, -AU));
        assert!((p.x - 450.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_round_trip() {
        let mut v = view();
        let s0 = v.scale();

        v.zoom(1);
        assert!((v.scale() - s0 * 1.05).abs() <= 1e-15 * s0);
        v.zoom(-1);
        assert!((v.scale() - s0).abs() <= 1e-15 * s0);

        v.zoom(0);
        assert_eq!(v.scale(), s0);
    }

    #[test]
    fn test_zoom_uses_sign_only() {
        let mut a = view();
        let mut b = view();
        a.zoom(3);
        b.zoom(1);
        assert_eq!(a.scale(), b.scale());
    }

    #[test]
    fn test_resize_recentres_keeps_scale() {
        let mut v = view();
        v.zoom(1);
        let s = v.scale();
        v.resize(ViewContext { width: 1024.0, height: 768.0 }).unwrap();
        assert_eq!(v.origin(), Point2::new(512.0, 384.0));
        assert_eq!(v.scale(), s);

        assert!(v.resize(ViewContext { width: 0.0, height: 768.0 }).is_err());
        assert_eq!(v.origin(), Point2::new(512.0, 384.0));
    }

    #[test]
    fn test_rejects_infinite_size() {
        assert!(ViewTransform::with_size(f64::INFINITY, 700.0).is_err());
        assert!(ViewTransform::with_size(800.0, f64::NAN).is_err());

        let mut v = view();
        assert!(v.resize(ViewContext { width: 1024.0, height: f64::INFINITY }).is_err());
        assert_eq!(v.origin(), Point2::new(400.0, 350.0));
    }

    #[test]
    fn test_rejects_bad_zoom_factor() {
        assert!(ViewTransform::new(800.0, 700.0, DEFAULT_SCALE, 1.0).is_err());
        assert!(ViewTransform::new(800.0, 700.0, 0.0, 1.05).is_err());
    }
}
