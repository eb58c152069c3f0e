use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::threshold::Breach;
use crate::window::TimeWindow;

/// Multi-line check message: a headline followed by the query context
pub struct Report<'a> {
    config: &'a CheckConfig,
    window: TimeWindow,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a CheckConfig, window: TimeWindow) -> Self {
        Report { config, window }
    }

    /// Message for a value that was read, annotated with the crossed threshold
    pub fn value(&self, value: f64, breach: Option<&Breach>) -> String {
        let mut headline = format!("Current metric statistic value: `{}`", value);
        if let Some(breach) = breach {
            headline.push_str(&breach.to_string());
        }
        self.render(&headline)
    }

    /// Message for a check that could not produce a value
    pub fn failure(&self, error: &CheckError) -> String {
        self.render(&format!("{}.", error))
    }

    fn render(&self, headline: &str) -> String {
        [
            headline.to_string(),
            String::new(),
            format!("Namespace: {}", self.config.namespace),
            format!("Metric: {}", self.config.metric),
            format!("Dimensions: {}", self.config.dimensions_display()),
            format!("Start time: {}", self.window.start.to_rfc3339()),
            format!("End time: {}", self.window.end.to_rfc3339()),
            format!("Datapoint period: {}", self.config.period),
        ]
        .join("\n")
    }
}
