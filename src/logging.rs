/// Logging for debug purposes.
use std::fmt::{Display, Error as FormatError, Formatter};
use std::path::PathBuf;

use flexi_logger::writers::FileLogWriter;
use flexi_logger::{FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle};

/// Configure logging to the given file.
pub fn configure_logging(path: PathBuf) -> ConfigureLoggingResult {
    let log_specification: LogSpecification = LogSpecification::debug();
    let logger = Logger::with(log_specification);

    let file_spec: FileSpec = match FileSpec::try_from(path) {
        Ok(file_spec) => file_spec,
        Err(error) => {
            return Err(ConfigureLoggingError::BadLogFilePath(error));
        }
    };
    let file_log_writer = match FileLogWriter::builder(file_spec).try_build() {
        Ok(file_log_writer) => file_log_writer,
        Err(error) => {
            return Err(ConfigureLoggingError::CannotWriteLogFile(error));
        }
    };
    let logger = logger.log_to_writer(Box::new(file_log_writer));

    match logger.start() {
        Ok(logger_handle) => Ok(logger_handle),
        Err(error) => Err(ConfigureLoggingError::CannotStartLogger(error)),
    }
}

pub type ConfigureLoggingResult = Result<LoggerHandle, ConfigureLoggingError>;

pub enum ConfigureLoggingError {
    BadLogFilePath(FlexiLoggerError),
    CannotWriteLogFile(FlexiLoggerError),
    CannotStartLogger(FlexiLoggerError),
}

impl Display for ConfigureLoggingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FormatError> {
        match self {
            Self::BadLogFilePath(error) => {
                write!(formatter, "The log file path is not usable: {}", error)
            }
            Self::CannotWriteLogFile(error) => {
                write!(formatter, "Cannot write to the log file: {}", error)
            }
            Self::CannotStartLogger(error) => {
                write!(formatter, "Failed to start the logger: {}", error)
            }
        }
    }
}
