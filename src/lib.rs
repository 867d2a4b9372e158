pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use error::SimError;

pub use simulation::states::{Appearance, Body, System, NVec2};
pub use simulation::params::{Parameters, AU, DAY, G};
pub use simulation::forces::{Attraction, ForceModel, NetForce, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::trajectory::{Trajectory, TrajectoryPolicy};
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, TrajectoryConfig, ViewConfig};

pub use visualization::view::{ViewContext, ViewTransform};
pub use visualization::frame::{distance_label, BodySprite, Frame};

pub use benchmark::benchmark::{bench_gravity, bench_step};
