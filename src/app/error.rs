use crate::report::parser::ParseError;
use crate::reporter::html::RenderError;
use config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Each variant names the stage that stopped the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot read report {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse report {}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("cannot render report: {0}")]
    Render(#[from] RenderError),
    #[error("cannot write report {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
