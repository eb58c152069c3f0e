use crate::config::Statistic;
use crate::error::CheckError;
use crate::source::Datapoint;

use log::{debug, info};

/// Picks the requested statistic of the most recent datapoint.
/// Without datapoints the default value stands in, if there is one.
pub fn select_value(
    datapoints: &[Datapoint],
    statistic: Statistic,
    default_value: Option<f64>,
) -> Result<f64, CheckError> {
    let Some(latest) = datapoints.iter().max_by_key(|d| d.timestamp) else {
        return match default_value {
            Some(value) => {
                info!("No datapoints, using default value {}", value);
                Ok(value)
            }
            None => Err(CheckError::NoDatapoints),
        };
    };
    debug!(
        "Selected latest of {} datapoints: {:?}",
        datapoints.len(),
        latest
    );
    latest
        .statistic(statistic)
        .ok_or(CheckError::MissingStatistic(statistic))
}
