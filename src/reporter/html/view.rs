use super::escape::escape;
use super::RenderError;
use crate::configuration::settings::ReportSettings;
use crate::report::{Case, Counters, Report, Status, Suite};
use crate::time::{format_datetime, format_seconds, parse_timestamp};
use chrono::{DateTime, Local};
use serde_derive::Serialize;

/// Every string field is already HTML-escaped; the template prints them raw.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub page: PageView,
    pub summary: SummaryView,
    pub suites: Vec<SuiteView>,
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub lang: String,
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub timestamp: String,
    pub footer: String,
    pub generated_at: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub total: i64,
    pub passed: i64,
    pub failures: i64,
    pub show_failures: bool,
    pub duration: String,
    pub success_rate: String,
    pub rate_color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuiteView {
    pub index: i64,
    pub name: String,
    pub status: &'static str,
    pub passed: i64,
    pub failures: i64,
    pub errors: i64,
    pub show_failures: bool,
    pub show_errors: bool,
    pub duration: String,
    pub cases: Vec<CaseView>,
}

#[derive(Debug, Serialize)]
pub struct CaseView {
    pub status: &'static str,
    pub icon: &'static str,
    pub name: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateTier {
    High,
    Medium,
    Low,
    /// No tests were recorded, so there is no rate to grade.
    Undefined,
}

impl RateTier {
    pub fn of(rate: Option<f64>) -> Self {
        match rate {
            Some(rate) if rate >= 90.0 => RateTier::High,
            Some(rate) if rate >= 70.0 => RateTier::Medium,
            Some(_) => RateTier::Low,
            None => RateTier::Undefined,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RateTier::High => "#38ef7d",
            RateTier::Medium => "#ffd700",
            RateTier::Low => "#ff6a00",
            RateTier::Undefined => "#a0aec0",
        }
    }
}

/// Percentage of passed tests rounded to one decimal, `None` when there are no tests.
pub fn success_rate(counters: &Counters) -> Option<f64> {
    if counters.tests == 0 {
        return None;
    }
    let rate = counters.passed() as f64 / f64::from(counters.tests) * 100.0;
    Some((rate * 10.0).round() / 10.0)
}

pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate),
        None => "n/a".to_owned(),
    }
}

impl ReportView {
    pub fn build(
        report: &Report,
        settings: &ReportSettings,
        now: DateTime<Local>,
    ) -> Result<Self, RenderError> {
        let generated_at = format_datetime(&now, &settings.date_format)?;
        let timestamp = match report.suites.first().and_then(|s| s.timestamp.as_deref()) {
            Some(raw) => display_timestamp(raw, &settings.date_format)?,
            None => generated_at.clone(),
        };

        let suites = report
            .suites
            .iter()
            .enumerate()
            .map(|(index, suite)| SuiteView::build(index, suite))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            page: PageView {
                lang: escape(&settings.lang),
                title: escape(&settings.title),
                heading: escape(&settings.heading),
                subtitle: escape(&settings.subtitle),
                timestamp: escape(&timestamp),
                footer: escape(&settings.footer),
                generated_at: escape(&generated_at),
            },
            summary: SummaryView::build(&report.counters),
            suites,
        })
    }
}

fn display_timestamp(raw: &str, date_format: &str) -> Result<String, RenderError> {
    match parse_timestamp(raw) {
        Ok(timestamp) => Ok(format_datetime(&timestamp, date_format)?),
        Err(err) => {
            warn!("Showing suite timestamp as written: {}", err);
            Ok(raw.to_owned())
        }
    }
}

impl SummaryView {
    fn build(counters: &Counters) -> Self {
        let passed = checked_passed(counters, "report");
        let rate = success_rate(counters);
        Self {
            total: i64::from(counters.tests),
            passed,
            failures: i64::from(counters.failures),
            show_failures: counters.failures > 0,
            duration: format_seconds(counters.time, 2),
            success_rate: format_rate(rate),
            rate_color: RateTier::of(rate).color(),
        }
    }
}

impl SuiteView {
    fn build(index: usize, suite: &Suite) -> Result<Self, RenderError> {
        let name = suite.name.as_deref().ok_or(RenderError::MissingField {
            element: "testsuite",
            field: "name",
            position: index,
        })?;
        let cases = suite
            .cases
            .iter()
            .enumerate()
            .map(|(position, case)| CaseView::build(position, case, name))
            .collect::<Result<Vec<_>, _>>()?;
        let counters = &suite.counters;
        Ok(Self {
            index: index as i64,
            name: escape(name),
            status: counters.status().as_str(),
            passed: checked_passed(counters, name),
            failures: i64::from(counters.failures),
            errors: i64::from(counters.errors),
            show_failures: counters.failures > 0,
            show_errors: counters.errors > 0,
            duration: format_seconds(counters.time, 3),
            cases,
        })
    }
}

impl CaseView {
    fn build(position: usize, case: &Case, suite: &str) -> Result<Self, RenderError> {
        let name = case.name.as_deref().ok_or_else(|| {
            debug!("Case {} of suite '{}' has no name", position, suite);
            RenderError::MissingField {
                element: "testcase",
                field: "name",
                position,
            }
        })?;
        let status = case.status();
        Ok(Self {
            status: status.as_str(),
            icon: match status {
                Status::Passed => "✓",
                Status::Failed => "✗",
            },
            name: escape(name),
            detail: case.detail().map(|detail| escape(&detail.message)),
        })
    }
}

fn checked_passed(counters: &Counters, owner: &str) -> i64 {
    let passed = counters.passed();
    if passed < 0 {
        warn!(
            "'{}' reports {} tests but {} failures and {} errors",
            owner, counters.tests, counters.failures, counters.errors
        );
    }
    passed
}
