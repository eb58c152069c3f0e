pub mod config;
pub mod error;
pub mod status;
pub mod threshold;
mod cloudwatch;
mod report;
mod source;
mod statistic;
mod window;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::cloudwatch::create_cloudwatch_source;
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::report::Report;
use crate::source::{MetricQuery, MetricSource};
use crate::statistic::select_value;
use crate::status::{CheckOutcome, Status};
use crate::window::TimeWindow;

fn build_query(config: &CheckConfig, window: TimeWindow) -> MetricQuery {
    MetricQuery {
        namespace: config.namespace.clone(),
        metric_name: config.metric.name.clone(),
        statistic: config.metric.statistic,
        dimensions: config.dimensions.clone(),
        unit: config.unit.clone(),
        period: config.period,
        window,
    }
}

/// Query the source for the window ending at `now` and judge the value
async fn run_check(
    config: &CheckConfig,
    source: &mut (dyn MetricSource + Send),
    now: DateTime<Utc>,
) -> CheckOutcome {
    let window = TimeWindow::ending_at(now, config.end_time_offset, config.interval);
    let report = Report::new(config, window);

    let value = match fetch_value(config, source, window).await {
        Ok(value) => value,
        Err(err) => {
            info!("Check is unknown: {}", err);
            return CheckOutcome {
                status: Status::Unknown,
                message: report.failure(&err),
            };
        }
    };

    if config.thresholds.is_empty() {
        info!("No thresholds configured, value {} is always ok", value);
    }
    let breach = config.thresholds.evaluate(value);
    let status = breach.map_or(Status::Ok, |breach| breach.status);
    debug!("Value {} gives status {}", value, status);
    CheckOutcome {
        status,
        message: report.value(value, breach.as_ref()),
    }
}

async fn fetch_value(
    config: &CheckConfig,
    source: &mut (dyn MetricSource + Send),
    window: TimeWindow,
) -> Result<f64, CheckError> {
    config.validate()?;
    let query = build_query(config, window);
    let datapoints = source.fetch(&query).await?;
    select_value(
        &datapoints,
        config.metric.statistic,
        config.default_value,
    )
}

/// Entry point that runs the check against Cloudwatch
pub async fn main_runner(config: CheckConfig) -> CheckOutcome {
    let mut source = create_cloudwatch_source(&config.aws).await;
    run_check(&config, &mut source, Utc::now()).await
}
