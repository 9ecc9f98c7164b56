/*!
A terminal photo searcher with a search-history autosuggest.
*/
#![allow(clippy::module_inception)]

mod api;
mod app;
mod args;
mod clipboard;
mod color;
mod component;
mod components;
mod config;
mod event;
mod history;
#[cfg(feature = "logging")]
mod logging;
mod rendering;
mod requester;
mod stateful;
mod system_effect;

use std::process::exit;

use clap::Parser;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;

use crate::app::App;
use crate::args::Args;
use crate::component::Component;
use crate::components::{Lupe, LupeProps};
use crate::config::Config;
#[cfg(feature = "logging")]
use crate::logging::{configure_logging, ConfigureLoggingResult};
use crate::requester::PhotoRequester;

fn main() {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle;
    #[cfg(feature = "logging")]
    if let Some(log_file_path) = args.log_file_path() {
        let configure_logging_result: ConfigureLoggingResult =
            configure_logging(log_file_path.to_path_buf());
        _logger_handle = match configure_logging_result {
            Ok(logger_handle) => logger_handle,
            Err(error) => {
                println!("{}", error);
                exit(1);
            }
        }
    }

    let config: Config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            println!("{}", error);
            exit(1);
        }
    };

    let requester: PhotoRequester = PhotoRequester::builder()
        .base_url(config.api().base_url().to_string())
        .access_key(config.api().access_key().to_string())
        .build();

    let props: LupeProps = LupeProps::builder()
        .terms(args.terms().to_vec())
        .config(config)
        .build();
    let mut root: Lupe = Lupe::new(props);

    let mut app: App = App::new();
    app.run(&mut root, requester);
}
