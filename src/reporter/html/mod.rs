//! Renders a parsed report into a single HTML page.
//!
//! The page carries its own styles and script and fetches nothing.

pub mod escape;
mod view;

use crate::configuration::settings::ReportSettings;
use crate::report::Report;
use chrono::{DateTime, Local};
use derivative::*;
use liquid::{ParserBuilder, Template};
use thiserror::Error;
use view::ReportView;

const TEMPLATE: &str = include_str!("report.html.liquid");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("<{element}> #{position} has no '{field}'")]
    MissingField {
        element: &'static str,
        field: &'static str,
        position: usize,
    },
    #[error("cannot format date: {0}")]
    Timestamp(#[from] crate::time::error::Error),
    #[error("template failure: {0}")]
    Template(#[from] liquid::Error),
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Renderer {
    #[derivative(Debug = "ignore")]
    template: Template,
    settings: ReportSettings,
}

impl Renderer {
    pub fn new(settings: ReportSettings) -> Result<Self, RenderError> {
        let template = ParserBuilder::with_stdlib().build()?.parse(TEMPLATE)?;
        Ok(Self { template, settings })
    }

    /// `now` is shown in the footer, and in the header when no suite carries a timestamp.
    pub fn render(&self, report: &Report, now: DateTime<Local>) -> Result<String, RenderError> {
        let view = ReportView::build(report, &self.settings, now)?;
        let globals = liquid::to_object(&view)?;
        Ok(self.template.render(&globals)?)
    }
}
