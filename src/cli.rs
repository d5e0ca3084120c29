use crate::log_source::{DEFAULT_LOGS_DIR, DEFAULT_PREFIX, FileSource, LatestLogSource, LogSource, SourceError, StdinSource};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "grade-report")]
#[command(about = "Summarize the score report from the latest autograder log")]
#[command(version)]
pub struct CliArgs {
    /// Read this log file instead of searching --logs-dir ("-" reads stdin)
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with_all = ["logs_dir", "prefix"])]
    pub log_file: Option<PathBuf>,

    /// Directory searched for the most recent autograder log
    #[arg(long, short = 'd', value_name = "DIR")]
    pub logs_dir: Option<PathBuf>,

    /// File name prefix of autograder logs inside --logs-dir
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Print the report as JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref prefix) = self.prefix
            && prefix.is_empty()
        {
            return Err("--prefix must not be empty".to_string());
        }

        if let Some(ref path) = self.log_file
            && path.as_os_str().is_empty()
        {
            return Err("--log-file must not be empty".to_string());
        }

        Ok(())
    }

    /// Directory to search, using the default when not specified
    pub fn get_logs_dir(&self) -> PathBuf {
        self.logs_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOGS_DIR))
    }

    /// Log name prefix, using the default when not specified
    pub fn get_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Build the log source these arguments select
    pub fn log_source(&self) -> Result<Box<dyn LogSource>, SourceError> {
        match self.log_file {
            Some(ref path) if path.as_os_str() == "-" => Ok(Box::new(StdinSource)),
            Some(ref path) => Ok(Box::new(FileSource::new(path))),
            None => Ok(Box::new(LatestLogSource::find(&self.get_logs_dir(), self.get_prefix())?)),
        }
    }
}
