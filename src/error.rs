//! Error types for scenario construction and stepping

use thiserror::Error;

/// Everything that can go wrong while building or advancing a simulation
#[derive(Error, Debug)]
pub enum SimError {
    /// Mass must be strictly positive and finite
    #[error("body `{name}` has invalid mass {mass} (must be > 0)")]
    InvalidMass { name: String, mass: f64 },

    /// Two bodies share a position, so the gravitational direction is undefined
    #[error("bodies `{first}` and `{second}` are coincident")]
    CoincidentBodies { first: String, second: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidMass { name: "Earth".to_string(), mass: 0.0 };
        assert_eq!(err.to_string(), "body `Earth` has invalid mass 0 (must be > 0)");

        let err = SimError::CoincidentBodies { first: "a".to_string(), second: "b".to_string() };
        assert!(err.to_string().contains("coincident"));
    }
}
