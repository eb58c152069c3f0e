use log::debug;
use std::fmt;

use crate::status::Status;

/// Which side of a threshold the value fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Over,
    Under,
}

/// Optional warning and critical bounds on both sides of the value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thresholds {
    pub warning_over: Option<f64>,
    pub critical_over: Option<f64>,
    pub warning_under: Option<f64>,
    pub critical_under: Option<f64>,
}

/// A threshold the value has crossed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breach {
    pub status: Status,
    pub direction: Direction,
    pub threshold: f64,
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Over => write!(f, " (Expected equal or under than `{}`).", self.threshold),
            Direction::Under => write!(f, " (Expected equal or over than `{}`).", self.threshold),
        }
    }
}

impl Thresholds {
    /// Returns the first crossed threshold, critical ones take precedence.
    /// A value equal to a threshold never crosses it.
    pub fn evaluate(&self, value: f64) -> Option<Breach> {
        let candidates = [
            (Status::Critical, Direction::Over, self.critical_over),
            (Status::Critical, Direction::Under, self.critical_under),
            (Status::Warning, Direction::Over, self.warning_over),
            (Status::Warning, Direction::Under, self.warning_under),
        ];
        let breach = candidates
            .into_iter()
            .filter_map(|(status, direction, threshold)| {
                threshold.map(|threshold| Breach {
                    status,
                    direction,
                    threshold,
                })
            })
            .find(|breach| match breach.direction {
                Direction::Over => value > breach.threshold,
                Direction::Under => value < breach.threshold,
            });
        debug!("Value {} evaluated against {:?}: {:?}", value, self, breach);
        breach
    }

    pub fn is_empty(&self) -> bool {
        self.warning_over.is_none()
            && self.critical_over.is_none()
            && self.warning_under.is_none()
            && self.critical_under.is_none()
    }
}
