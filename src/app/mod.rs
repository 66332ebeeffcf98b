pub(crate) mod error;

use crate::app::error::Error;
use crate::configuration::settings::Settings;
use crate::report::parser;
use crate::reporter::html::Renderer;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// One conversion from a JUnit XML file to an HTML page.
///
/// Stages run strictly in order and the first failure ends the run, so the
/// output file is only touched once the whole page has been rendered.
#[derive(Debug)]
pub struct App {
    input: PathBuf,
    output: PathBuf,
    renderer: Renderer,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, Error> {
        let renderer = Renderer::new(settings.report)?;
        Ok(App {
            input: settings.input,
            output: settings.output,
            renderer,
        })
    }

    pub fn run(&self) -> Result<&Path, Error> {
        info!(
            "Converting '{}' into '{}'",
            self.input.display(),
            self.output.display()
        );
        let xml = load(&self.input)?;
        let report = parser::parse(&xml).map_err(|source| Error::Parse {
            path: self.input.clone(),
            source,
        })?;
        info!(
            "Parsed {} suites with {} cases",
            report.suites.len(),
            report.suites.iter().map(|s| s.cases.len()).sum::<usize>()
        );
        let html = self.renderer.render(&report, Local::now())?;
        debug!("Rendered {} bytes of HTML", html.len());
        write(&self.output, &html)?;
        Ok(&self.output)
    }
}

pub fn load(path: &Path) -> Result<String, Error> {
    let xml = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from '{}'", xml.len(), path.display());
    Ok(xml)
}

/// Creates missing parent directories and replaces any existing file.
///
/// Not atomic: directories created here stay behind if the file write then
/// fails. `App::run` only reaches this once rendering has succeeded.
pub fn write(path: &Path, html: &str) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, html).map_err(to_error)
}
