#![forbid(unsafe_code)]

extern crate chrono;
extern crate derivative;
extern crate serde_derive;

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod report;
mod reporter;
mod time;

use log::{Level, LevelFilter};
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::app::{error::Error, App};
use self::{
    configuration::command_line::{LogLevel, Opt},
    configuration::settings::Settings,
};

fn main() {
    let Opt {
        config,
        input,
        output,
        logging,
        log_output_file,
    } = Opt::from_args();

    let level: LevelFilter = logging.unwrap_or(LogLevel::Info).into();
    if let Err(e) = init_logging(level, &log_output_file) {
        eprintln!("Failed to initialise logging: {}", e);
        exit(1);
    }

    match run(config, input, output) {
        Ok(written) => info!("✓ HTML report generated successfully at: {}", written.display()),
        Err(e) => {
            // `-L off` silences the logger, the diagnostic still has to reach the user
            if level == LevelFilter::Off {
                eprintln!("{}", e);
            } else {
                error!("{}", e);
            }
            exit(1);
        }
    }
}

fn run(
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<PathBuf, Error> {
    let settings = Settings::load(config, input, output)?;
    debug!("Initiated configuration {:#?}", settings);
    let app = App::new(settings)?;
    let written = app.run()?;
    Ok(written.to_path_buf())
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            let stage = record
                .target()
                .trim_start_matches(module_path!())
                .trim_start_matches("::");
            out.finish(format_args!(
                "{}[{:<5}][{}] {}",
                chrono::Local::now().format("[%H:%M:%S%.3f]"),
                record.level(),
                if stage.is_empty() { "main" } else { stage },
                message
            ))
        })
        .level(level)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| metadata.level() > Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(std::io::stderr()),
        );

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    debug!("Logging level {} enabled", level);
    Ok(())
}
