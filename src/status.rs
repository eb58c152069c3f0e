use std::fmt;
use std::process::ExitCode;

/// Name the monitoring system sees in front of every result line
pub const CHECK_NAME: &str = "CheckCloudWatch";

/// Check result in the nagios/sensu plugin convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Final status with its message
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub status: Status,
    pub message: String,
}

impl CheckOutcome {
    /// Line printed to stdout for the monitoring system
    pub fn output(&self) -> String {
        format!("{} {}: {}", CHECK_NAME, self.status, self.message)
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_output() {
        let outcome = CheckOutcome {
            status: Status::Critical,
            message: "Current metric statistic value: `5`".to_string(),
        };
        assert_eq!(
            outcome.output(),
            "CheckCloudWatch CRITICAL: Current metric statistic value: `5`"
        );
    }
}
