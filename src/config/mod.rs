//! Startup configuration
//!
//! Built from command-line arguments in [`Config::from_args`]:
//!
//! ```text
//! algoscope <visualizer> [--capacity N] [--interval-ms N] [--seed N]
//!                        [--log FILE] [--log-filter FILTER]
//! ```

pub mod constants;

use crate::errors::VizError;
use crate::model::Element;
use crate::session::VisualizerKind;
use constants::{
    ARRAY_RANDOM_SIZE, AUTO_INTERVAL, DEFAULT_CAPACITY, DEFAULT_MAX_VALUE, MAX_ELEMENTS,
    TREE_RANDOM_SIZE,
};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable consulted for the log filter
pub const LOG_ENV: &str = "ALGOSCOPE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub visualizer: VisualizerKind,
    /// Maximum number of items in a stack, queue or list
    pub capacity: usize,
    pub tree_random_size: usize,
    pub array_random_size: usize,
    pub max_value: Element,
    pub auto_interval: Duration,
    /// Fixed RNG seed for reproducible random structures
    pub seed: Option<u64>,
    /// Tracing output is written here; no logging without it
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            visualizer: VisualizerKind::Bst,
            capacity: DEFAULT_CAPACITY,
            tree_random_size: TREE_RANDOM_SIZE,
            array_random_size: ARRAY_RANDOM_SIZE,
            max_value: DEFAULT_MAX_VALUE,
            auto_interval: AUTO_INTERVAL,
            seed: None,
            log_file: None,
            log_filter: None,
        }
    }
}

impl Config {
    /// Parse arguments (without the program name) and validate the result
    pub fn from_args<I, T>(args: I) -> Result<Config, VizError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut config = Config::default();
        let mut visualizer = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--capacity" => config.capacity = number(&arg, args.next())?,
                "--interval-ms" => {
                    config.auto_interval = Duration::from_millis(number(&arg, args.next())?)
                }
                "--seed" => config.seed = Some(number(&arg, args.next())?),
                "--log" => config.log_file = Some(PathBuf::from(value(&arg, args.next())?)),
                "--log-filter" => config.log_filter = Some(value(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(invalid(format!("unknown option '{}'", flag)));
                }
                name => {
                    if visualizer.is_some() {
                        return Err(invalid(format!("unexpected argument '{}'", name)));
                    }
                    visualizer = Some(
                        VisualizerKind::from_name(name)
                            .ok_or_else(|| invalid(format!("unknown visualizer '{}'", name)))?,
                    );
                }
            }
        }

        config.visualizer = visualizer.ok_or_else(|| invalid("no visualizer given"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VizError> {
        if self.capacity == 0 {
            return Err(invalid("capacity must be at least 1"));
        }
        if self.capacity > MAX_ELEMENTS {
            return Err(invalid(format!(
                "capacity {} exceeds the maximum of {}",
                self.capacity, MAX_ELEMENTS
            )));
        }
        if self.auto_interval.is_zero() {
            return Err(invalid("auto-play interval must be positive"));
        }
        if self.max_value <= 0 {
            return Err(invalid("max value must be positive"));
        }
        Ok(())
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        self.log_filter
            .clone()
            .or_else(|| std::env::var(LOG_ENV).ok())
            .unwrap_or_else(|| "info".to_string())
    }
}

fn invalid(message: impl Into<String>) -> VizError {
    VizError::InvalidConfig {
        message: message.into(),
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, VizError> {
    next.ok_or_else(|| invalid(format!("{} needs a value", flag)))
}

fn number<N: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<N, VizError> {
    let raw = value(flag, next)?;
    raw.trim()
        .parse()
        .map_err(|_| invalid(format!("{} expects a number, got '{}'", flag, raw)))
}
