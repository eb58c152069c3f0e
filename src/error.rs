use thiserror::Error;

use crate::config::Statistic;

/// Everything that makes the check end up in the unknown state
#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("Invalid metric `{0}`, expected METRIC_NAME:TYPE")]
    InvalidMetric(String),

    #[error("Unsupported statistic type `{0}`")]
    InvalidStatistic(String),

    #[error("Invalid dimension `{0}`, expected DIMENSION_NAME:DIMENSION_VALUE")]
    InvalidDimension(String),

    #[error("Unsupported unit `{0}`")]
    InvalidUnit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CloudWatch GetMetricStatistics unsuccessful: {0}")]
    Fetch(String),

    #[error("No datapoint found and no default value set")]
    NoDatapoints,

    #[error("Latest datapoint has no {0} statistic")]
    MissingStatistic(Statistic),
}
