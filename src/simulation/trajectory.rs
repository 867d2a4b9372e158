//! Per-body position history used for trail rendering
//!
//! Points are stored oldest first. The default policy keeps every point;
//! a bounded policy turns the trail into a ring buffer that drops the
//! oldest point once full.

use std::collections::VecDeque;

use log::warn;

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrajectoryPolicy {
    #[default]
    Unbounded,
    Bounded { max_points: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: VecDeque<NVec2>,
    policy: TrajectoryPolicy,
    dropped: u64, // points evicted by a bounded policy
}

impl Trajectory {
    pub fn new(policy: TrajectoryPolicy) -> Self {
        // grows on demand; a bounded cap is a limit, not a reservation
        Self { points: VecDeque::new(), policy, dropped: 0 }
    }

    /// Append the newest position
    pub fn record(&mut self, x: NVec2) {
        if let TrajectoryPolicy::Bounded { max_points } = self.policy {
            if self.points.len() >= max_points {
                if self.dropped == 0 {
                    warn!("trail reached {max_points} points, dropping oldest from now on");
                }
                self.points.pop_front();
                self.dropped += 1;
            }
        }
        self.points.push_back(x);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn policy(&self) -> TrajectoryPolicy {
        self.policy
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }
}
