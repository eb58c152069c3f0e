use check_cloudwatch::config::{AwsAccess, CheckConfig, DimensionList, MetricSpec};
use check_cloudwatch::main_runner;
use check_cloudwatch::status::{CheckOutcome, Status};
use check_cloudwatch::threshold::Thresholds;
use clap::error::ErrorKind;
use clap::Parser;
use log::info;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about = "Checks a Cloudwatch metric statistic against thresholds")]
struct Opt {
    /// Profile name of AWS shared credential file entry
    #[arg(long)]
    profile: Option<String>,

    /// AWS access key id
    #[arg(short = 'k', long)]
    access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(short = 's', long)]
    secret_access_key: Option<String>,

    /// AWS region
    #[arg(short, long)]
    region: Option<String>,

    /// Warning if metric statistics is over specified value
    #[arg(short = 'W', long, value_name = "N", allow_negative_numbers = true)]
    warning_over: Option<f64>,

    /// Critical if metric statistics is over specified value
    #[arg(short = 'C', long, value_name = "N", allow_negative_numbers = true)]
    critical_over: Option<f64>,

    /// Warning if metric statistics is under specified value
    #[arg(short = 'w', long, value_name = "N", allow_negative_numbers = true)]
    warning_under: Option<f64>,

    /// Critical if metric statistics is under specified value
    #[arg(short = 'c', long, value_name = "N", allow_negative_numbers = true)]
    critical_under: Option<f64>,

    /// CloudWatch namespace
    #[arg(long)]
    namespace: String,

    /// CloudWatch metric name and statistics type
    #[arg(short, long, value_name = "METRIC_NAME:TYPE")]
    metric: MetricSpec,

    /// CloudWatch dimension names and values, separated by commas
    #[arg(short, long, value_name = "NAME:VALUE,...")]
    dimensions: DimensionList,

    /// CloudWatch statistics unit
    #[arg(long)]
    unit: Option<String>,

    /// Time interval between start and end for CloudWatch statistics
    #[arg(long, value_name = "N", default_value_t = 600)]
    interval: u32,

    /// Get metric statistics specified seconds ago
    #[arg(long, value_name = "N", default_value_t = 0)]
    end_time_offset: u32,

    /// CloudWatch datapoint period
    #[arg(long, value_name = "N", default_value_t = 60)]
    period: u32,

    /// Use this value if no datapoint found
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    default_value: Option<f64>,
}

impl From<Opt> for CheckConfig {
    fn from(opt: Opt) -> Self {
        CheckConfig {
            namespace: opt.namespace,
            metric: opt.metric,
            dimensions: opt.dimensions.0,
            unit: opt.unit,
            interval: opt.interval,
            end_time_offset: opt.end_time_offset,
            period: opt.period,
            default_value: opt.default_value,
            thresholds: Thresholds {
                warning_over: opt.warning_over,
                critical_over: opt.critical_over,
                warning_under: opt.warning_under,
                critical_under: opt.critical_under,
            },
            aws: AwsAccess {
                profile: opt.profile,
                access_key_id: opt.access_key_id,
                secret_access_key: opt.secret_access_key,
                region: opt.region,
            },
        }
    }
}

/// Result of reading the command line
#[derive(Debug)]
enum Parsed {
    Run(Opt),
    /// Help or version output, left to clap
    Display(clap::Error),
    /// Usage errors are unknown results for the monitoring system
    Usage(CheckOutcome),
}

fn parse_opt<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Opt::try_parse_from(args) {
        Ok(opt) => Parsed::Run(opt),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Display(err)
        }
        Err(err) => Parsed::Usage(CheckOutcome {
            status: Status::Unknown,
            message: err.to_string().trim_end().to_string(),
        }),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    let opt = match parse_opt(std::env::args_os()) {
        Parsed::Run(opt) => opt,
        Parsed::Display(err) => err.exit(),
        Parsed::Usage(outcome) => {
            println!("{}", outcome.output());
            return outcome.status.into();
        }
    };

    let outcome = main_runner(opt.into()).await;
    println!("{}", outcome.output());

    info!("Done with status {}", outcome.status);
    outcome.status.into()
}
