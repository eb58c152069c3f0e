use crate::config::{Dimension, Statistic};
use crate::error::CheckError;
use crate::window::TimeWindow;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Parameters of one GetMetricStatistics call
#[derive(Debug, Clone)]
pub struct MetricQuery {
    pub namespace: String,
    pub metric_name: String,
    pub statistic: Statistic,
    pub dimensions: Vec<Dimension>,
    pub unit: Option<String>,
    pub period: u32,
    pub window: TimeWindow,
}

/// Statistic values of a single datapoint, absent when not requested
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datapoint {
    pub timestamp: Option<DateTime<Utc>>,
    pub sample_count: Option<f64>,
    pub average: Option<f64>,
    pub sum: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl Datapoint {
    pub fn statistic(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::SampleCount => self.sample_count,
            Statistic::Average => self.average,
            Statistic::Sum => self.sum,
            Statistic::Minimum => self.minimum,
            Statistic::Maximum => self.maximum,
        }
    }
}

/// Generic trait
#[async_trait]
pub trait MetricSource {
    async fn fetch(&mut self, query: &MetricQuery) -> Result<Vec<Datapoint>, CheckError>;
}
