#[cfg(feature = "logging")]
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Args {
    /// Search terms to run at startup
    terms: Vec<String>,

    /// The file to log to
    #[cfg(feature = "logging")]
    #[clap(long = "log-file")]
    log_file_path: Option<PathBuf>,
}

impl Args {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[cfg(feature = "logging")]
    pub fn log_file_path(&self) -> &Option<PathBuf> {
        &self.log_file_path
    }
}
