use std::fmt;
use std::str::FromStr;

use aws_sdk_cloudwatch::types::StandardUnit;

use crate::error::CheckError;
use crate::threshold::Thresholds;

/// Statistic types supported by GetMetricStatistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    SampleCount,
    Average,
    Sum,
    Minimum,
    Maximum,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::SampleCount => "SampleCount",
            Statistic::Average => "Average",
            Statistic::Sum => "Sum",
            Statistic::Minimum => "Minimum",
            Statistic::Maximum => "Maximum",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statistic {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "samplecount" => Ok(Statistic::SampleCount),
            "average" => Ok(Statistic::Average),
            "sum" => Ok(Statistic::Sum),
            "minimum" => Ok(Statistic::Minimum),
            "maximum" => Ok(Statistic::Maximum),
            _ => Err(CheckError::InvalidStatistic(s.to_string())),
        }
    }
}

/// Metric name together with the statistic to check, given as `NAME:TYPE`
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSpec {
    pub name: String,
    pub statistic: Statistic,
}

impl FromStr for MetricSpec {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, statistic) = s
            .split_once(':')
            .ok_or_else(|| CheckError::InvalidMetric(s.to_string()))?;
        if name.is_empty() {
            return Err(CheckError::InvalidMetric(s.to_string()));
        }
        Ok(MetricSpec {
            name: name.to_string(),
            statistic: statistic.parse()?,
        })
    }
}

impl fmt::Display for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.statistic)
    }
}

/// Cloudwatch dimension, given as `NAME:VALUE`
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl FromStr for Dimension {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, value)) if !name.is_empty() && !value.is_empty() => Ok(Dimension {
                name: name.to_string(),
                value: value.to_string(),
            }),
            _ => Err(CheckError::InvalidDimension(s.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Comma separated dimensions as given on the command line.
/// Empty pieces, such as the one after a trailing comma, are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionList(pub Vec<Dimension>);

impl FromStr for DimensionList {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dimensions = s
            .split(',')
            .filter(|piece| !piece.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Dimension>, _>>()?;
        if dimensions.is_empty() {
            return Err(CheckError::InvalidDimension(s.to_string()));
        }
        Ok(DimensionList(dimensions))
    }
}

/// Optional overrides for AWS client configuration
#[derive(Debug, Clone, Default)]
pub struct AwsAccess {
    pub profile: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
}

impl AwsAccess {
    /// Static credentials are usable only as a key id and secret pair
    pub fn validate(&self) -> Result<(), CheckError> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(_), None) => Err(CheckError::Config(
                "access key id given without secret access key".to_string(),
            )),
            (None, Some(_)) => Err(CheckError::Config(
                "secret access key given without access key id".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Everything the check needs to query and judge one metric
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub namespace: String,
    pub metric: MetricSpec,
    pub dimensions: Vec<Dimension>,
    pub unit: Option<String>,
    /// Seconds between start and end of the query window
    pub interval: u32,
    /// Seconds the query window ends before now
    pub end_time_offset: u32,
    /// Datapoint period in seconds
    pub period: u32,
    pub default_value: Option<f64>,
    pub thresholds: Thresholds,
    pub aws: AwsAccess,
}

impl CheckConfig {
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.period == 0 {
            return Err(CheckError::Config("period must be positive".to_string()));
        }
        if i32::try_from(self.period).is_err() {
            return Err(CheckError::Config(format!(
                "period {} is too large",
                self.period
            )));
        }
        let thresholds = &self.thresholds;
        let bounds = [
            ("warning over", thresholds.warning_over),
            ("critical over", thresholds.critical_over),
            ("warning under", thresholds.warning_under),
            ("critical under", thresholds.critical_under),
            ("default value", self.default_value),
        ];
        if let Some((name, _)) = bounds
            .iter()
            .find(|(_, value)| value.is_some_and(f64::is_nan))
        {
            return Err(CheckError::Config(format!("{} is not a number", name)));
        }
        if let Some(unit) = &self.unit {
            if !StandardUnit::values().contains(&unit.as_str()) {
                return Err(CheckError::InvalidUnit(unit.clone()));
            }
        }
        self.aws.validate()
    }

    /// Dimensions joined back in their command line form
    pub fn dimensions_display(&self) -> String {
        self.dimensions
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Tests
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_log::test;

    pub(crate) fn sample_config() -> CheckConfig {
        CheckConfig {
            namespace: "AWS/EC2".to_string(),
            metric: "CPUUtilization:Average".parse().unwrap(),
            dimensions: vec!["InstanceId:i-0123456789".parse().unwrap()],
            unit: None,
            interval: 600,
            end_time_offset: 0,
            period: 60,
            default_value: None,
            thresholds: Thresholds::default(),
            aws: AwsAccess::default(),
        }
    }

    #[test]
    fn test_metric_spec() {
        let spec: MetricSpec = "CPUUtilization:Average".parse().unwrap();
        assert_eq!(spec.name, "CPUUtilization");
        assert_eq!(spec.statistic, Statistic::Average);
        assert_eq!(spec.to_string(), "CPUUtilization:Average");
    }

    #[test]
    fn test_metric_spec_case_insensitive_statistic() {
        let spec: MetricSpec = "RequestCount:samplecount".parse().unwrap();
        assert_eq!(spec.statistic, Statistic::SampleCount);
        assert_eq!(spec.to_string(), "RequestCount:SampleCount");
    }

    #[test]
    fn test_metric_spec_invalid() {
        assert_eq!(
            "CPUUtilization".parse::<MetricSpec>(),
            Err(CheckError::InvalidMetric("CPUUtilization".to_string()))
        );
        assert_eq!(
            ":Average".parse::<MetricSpec>(),
            Err(CheckError::InvalidMetric(":Average".to_string()))
        );
        assert_eq!(
            "CPUUtilization:p99".parse::<MetricSpec>(),
            Err(CheckError::InvalidStatistic("p99".to_string()))
        );
    }

    #[test]
    fn test_dimension() {
        let dimension: Dimension = "LoadBalancerName:my-lb".parse().unwrap();
        assert_eq!(dimension.name, "LoadBalancerName");
        assert_eq!(dimension.value, "my-lb");

        // only the first colon separates name and value
        let dimension: Dimension = "Path:a:b".parse().unwrap();
        assert_eq!(dimension.value, "a:b");

        assert!("NoValue".parse::<Dimension>().is_err());
        assert!("Name:".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_validate() {
        let config = sample_config();
        assert!(config.validate().is_ok());

        let config = CheckConfig {
            unit: Some("Percent".to_string()),
            ..sample_config()
        };
        assert!(config.validate().is_ok());

        let config = CheckConfig {
            unit: Some("Furlongs".to_string()),
            ..sample_config()
        };
        assert_eq!(
            config.validate(),
            Err(CheckError::InvalidUnit("Furlongs".to_string()))
        );

        let config = CheckConfig {
            period: 0,
            ..sample_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_period_range() {
        let config = CheckConfig {
            period: i32::MAX as u32 + 1,
            ..sample_config()
        };
        assert!(matches!(config.validate(), Err(CheckError::Config(_))));

        let config = CheckConfig {
            period: i32::MAX as u32,
            ..sample_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut config = sample_config();
        config.thresholds.critical_over = Some(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(CheckError::Config("critical over is not a number".to_string()))
        );

        let mut config = sample_config();
        config.default_value = Some(f64::NAN);
        assert!(config.validate().is_err());

        // infinite bounds still compare
        let mut config = sample_config();
        config.thresholds.warning_under = Some(f64::NEG_INFINITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dimension_list() {
        let DimensionList(dimensions) = "InstanceId:i-1,AutoScalingGroupName:web".parse().unwrap();
        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions[1].name, "AutoScalingGroupName");

        let DimensionList(dimensions) = "InstanceId:i-1,".parse().unwrap();
        assert_eq!(dimensions, vec!["InstanceId:i-1".parse::<Dimension>().unwrap()]);

        assert_eq!(
            ",".parse::<DimensionList>(),
            Err(CheckError::InvalidDimension(",".to_string()))
        );
        assert!("InstanceId:i-1,Broken".parse::<DimensionList>().is_err());
    }

    #[test]
    fn test_validate_credentials_pair() {
        let mut config = sample_config();
        config.aws.access_key_id = Some("AKIDEXAMPLE".to_string());
        assert!(config.validate().is_err());
        config.aws.secret_access_key = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dimensions_display() {
        let mut config = sample_config();
        config.dimensions.push("AutoScalingGroupName:web".parse().unwrap());
        assert_eq!(
            config.dimensions_display(),
            "InstanceId:i-0123456789,AutoScalingGroupName:web"
        );
    }
}
