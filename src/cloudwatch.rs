use crate::config::{AwsAccess, Dimension};
use crate::error::CheckError;
use crate::source::{Datapoint, MetricQuery, MetricSource};

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::config::{Credentials, Region};
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types::{self as cw, StandardUnit};
use aws_sdk_cloudwatch::Client;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Source implementation that queries Cloudwatch statistics
pub struct CloudwatchSource {
    client: Client,
}

pub async fn create_cloudwatch_source(access: &AwsAccess) -> CloudwatchSource {
    CloudwatchSource {
        client: create_client(access).await,
    }
}

/// Explicit options win; otherwise the default chains apply, and the
/// region chain ends with the EC2 instance metadata.
async fn create_client(access: &AwsAccess) -> Client {
    let region_provider =
        RegionProviderChain::first_try(access.region.clone().map(Region::new)).or_default_provider();
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = &access.profile {
        loader = loader.profile_name(profile);
    }
    if let (Some(key_id), Some(secret)) = (&access.access_key_id, &access.secret_access_key) {
        loader = loader.credentials_provider(Credentials::new(
            key_id,
            secret,
            None,
            None,
            "command-line",
        ));
    }
    let shared_config = loader.load().await;
    info!("Using region {:?}", shared_config.region());
    Client::new(&shared_config)
}

fn to_aws_time(time: DateTime<Utc>) -> AwsDateTime {
    AwsDateTime::from_millis(time.timestamp_millis())
}

fn from_aws_time(time: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.secs(), time.subsec_nanos())
}

fn to_aws_dimension(dimension: &Dimension) -> cw::Dimension {
    cw::Dimension::builder()
        .name(&dimension.name)
        .value(&dimension.value)
        .build()
}

fn from_aws_datapoint(datapoint: &cw::Datapoint) -> Datapoint {
    Datapoint {
        timestamp: datapoint.timestamp().and_then(from_aws_time),
        sample_count: datapoint.sample_count(),
        average: datapoint.average(),
        sum: datapoint.sum(),
        minimum: datapoint.minimum(),
        maximum: datapoint.maximum(),
    }
}

#[async_trait]
impl MetricSource for CloudwatchSource {
    async fn fetch(&mut self, query: &MetricQuery) -> Result<Vec<Datapoint>, CheckError> {
        info!(
            "Requesting {} {} of {} for {}",
            query.statistic, query.metric_name, query.namespace, query.window
        );

        let period = i32::try_from(query.period)
            .map_err(|_| CheckError::Config(format!("period {} is too large", query.period)))?;

        let response = self
            .client
            .get_metric_statistics()
            .namespace(&query.namespace)
            .metric_name(&query.metric_name)
            .start_time(to_aws_time(query.window.start))
            .end_time(to_aws_time(query.window.end))
            .period(period)
            .statistics(cw::Statistic::from(query.statistic.as_str()))
            .set_dimensions(Some(query.dimensions.iter().map(to_aws_dimension).collect()))
            .set_unit(query.unit.as_deref().map(StandardUnit::from))
            .send()
            .await
            .map_err(|err| CheckError::Fetch(DisplayErrorContext(err).to_string()))?;

        let datapoints: Vec<Datapoint> = response
            .datapoints()
            .iter()
            .map(from_aws_datapoint)
            .collect();
        debug!("Received {} datapoints", datapoints.len());
        Ok(datapoints)
    }
}
