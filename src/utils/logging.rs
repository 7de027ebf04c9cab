use std::sync::Mutex;

use crate::proto::generated_proto::common::DeletePacerConfig;

use anyhow::{anyhow, bail};
use log::LevelFilter;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender, Append},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S %Z)(utc)} {l} {t} {m}{n}";
const APPENDER_NAME: &str = "accounting";

static LOG_HANDLE: Mutex<Option<log4rs::Handle>> = Mutex::new(None);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    /// Appends to the file, never truncates.
    File(String),
}

/// Logging settings pulled out of the config bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub output: LogOutput,
    pub pattern: String,
}

impl LoggingConfig {
    /// Keys: `log_level` (required), `log_to_console` or `log_file`
    /// (console wins when both are set), `log_pattern` (optional).
    pub fn from_config(config: &DeletePacerConfig) -> anyhow::Result<Self> {
        let level = parse_level(
            config
                .stringConfigs
                .get("log_level")
                .ok_or(anyhow!("log_level is a required config"))?,
        )?;

        let to_console = config
            .booleanConfigs
            .get("log_to_console")
            .copied()
            .unwrap_or(false);
        let output = match config.stringConfigs.get("log_file") {
            _ if to_console => LogOutput::Console,
            Some(path) if !path.is_empty() => LogOutput::File(path.clone()),
            _ => bail!("log output must be configured, either use log_to_console or log_file"),
        };

        let pattern = config
            .stringConfigs
            .get("log_pattern")
            .cloned()
            .unwrap_or_else(|| DEFAULT_PATTERN.to_string());

        Ok(LoggingConfig {
            level,
            output,
            pattern,
        })
    }

    fn build(&self) -> anyhow::Result<Config> {
        let encoder = Box::new(PatternEncoder::new(&self.pattern));
        let append: Box<dyn Append> = match &self.output {
            LogOutput::Console => Box::new(ConsoleAppender::builder().encoder(encoder).build()),
            LogOutput::File(path) => Box::new(
                FileAppender::builder()
                    .encoder(encoder)
                    .append(true)
                    .build(path)?,
            ),
        };

        let config = Config::builder()
            .appender(Appender::builder().build(APPENDER_NAME, append))
            .build(Root::builder().appender(APPENDER_NAME).build(self.level))?;
        Ok(config)
    }
}

/// Installs the process wide log4rs configuration, or swaps it when
/// logging was configured before.
pub fn configure_logging(config: &DeletePacerConfig) -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_config(config)?;
    let log4rs_config = logging_config.build()?;

    let mut log_handle = LOG_HANDLE
        .lock()
        .map_err(|_| anyhow!("logging handle lock poisoned"))?;
    if let Some(handle) = log_handle.as_ref() {
        handle.set_config(log4rs_config);
    } else {
        let handle = log4rs::init_config(log4rs_config)?;
        *log_handle = Some(handle);
    }

    Ok(())
}

fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    let level_filter = match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => bail!(
            "Invalid logging level: {}. Allowed: off|error|warn|info|debug|trace",
            other
        ),
    };

    Ok(level_filter)
}
