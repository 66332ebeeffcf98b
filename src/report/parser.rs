use crate::report::{Case, Counters, Detail, Report, Suite};
use std::str::FromStr;
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use thiserror::Error;

const TAG_REPORT: &str = "testsuites";
const TAG_TEST_SUITE: &str = "testsuite";
const TAG_TEST_CASE: &str = "testcase";
const TAG_FAILURE: &str = "failure";
const TAG_ERROR: &str = "error";

mod attrs {
    pub const NAME: &str = "name";
    pub const TESTS: &str = "tests";
    pub const FAILURES: &str = "failures";
    pub const ERRORS: &str = "errors";
    pub const TIME: &str = "time";
    pub const TIMESTAMP: &str = "timestamp";
    pub const MESSAGE: &str = "message";
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Syntax(String),
    #[error("document has no root element")]
    MissingRoot,
    #[error("unexpected root element <{0}>, expected <testsuites> or <testsuite>")]
    UnexpectedRoot(String),
    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("<{element}> attribute '{attribute}' is not a valid number: '{value}'")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

/// Maps JUnit XML text onto the typed report model.
///
/// A leading byte order mark is dropped before parsing.
pub fn parse(xml: &str) -> Result<Report, ParseError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let package =
        sxd_document::parser::parse(xml).map_err(|err| ParseError::Syntax(err.to_string()))?;
    let document = package.as_document();
    let root = document
        .root()
        .children()
        .into_iter()
        .find_map(|child| match child {
            ChildOfRoot::Element(element) => Some(element),
            _ => None,
        })
        .ok_or(ParseError::MissingRoot)?;

    match root.name().local_part() {
        TAG_REPORT => {
            let counters = parse_counters(root, TAG_REPORT)?;
            let suites = child_elements(root, TAG_TEST_SUITE)
                .map(parse_suite)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Report { counters, suites })
        }
        TAG_TEST_SUITE => {
            debug!("Root element is a single <{}>", TAG_TEST_SUITE);
            let suite = parse_suite(root)?;
            Ok(Report {
                counters: suite.counters,
                suites: vec![suite],
            })
        }
        other => Err(ParseError::UnexpectedRoot(other.to_owned())),
    }
}

fn parse_suite(element: Element) -> Result<Suite, ParseError> {
    let cases = child_elements(element, TAG_TEST_CASE).map(parse_case).collect();
    Ok(Suite {
        name: element.attribute_value(attrs::NAME).map(str::to_owned),
        counters: parse_counters(element, TAG_TEST_SUITE)?,
        timestamp: element.attribute_value(attrs::TIMESTAMP).map(str::to_owned),
        cases,
    })
}

fn parse_case(element: Element) -> Case {
    Case {
        name: element.attribute_value(attrs::NAME).map(str::to_owned),
        failure: child_elements(element, TAG_FAILURE).next().map(parse_detail),
        error: child_elements(element, TAG_ERROR).next().map(parse_detail),
    }
}

fn parse_detail(element: Element) -> Detail {
    let text: String = element
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Text(text) => Some(text.text().to_owned()),
            _ => None,
        })
        .collect();
    let message = if text.trim().is_empty() {
        element
            .attribute_value(attrs::MESSAGE)
            .map(str::to_owned)
            .unwrap_or_default()
    } else {
        text
    };
    Detail { message }
}

fn parse_counters(element: Element, tag: &'static str) -> Result<Counters, ParseError> {
    Ok(Counters {
        tests: number(element, tag, attrs::TESTS)?,
        failures: number(element, tag, attrs::FAILURES)?,
        errors: number(element, tag, attrs::ERRORS)?,
        time: number(element, tag, attrs::TIME)?,
    })
}

fn number<T: FromStr + Finite>(
    element: Element,
    tag: &'static str,
    attribute: &'static str,
) -> Result<T, ParseError> {
    let raw = element
        .attribute_value(attribute)
        .ok_or(ParseError::MissingAttribute {
            element: tag,
            attribute,
        })?;
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(Finite::finite)
        .ok_or_else(|| ParseError::InvalidNumber {
            element: tag,
            attribute,
            value: raw.to_owned(),
        })
}

/// Rejects `NaN`/`inf`, which `f64::from_str` happily accepts. Counters are
/// `u32`, so negative or oversized values already fail in `from_str`.
trait Finite {
    fn finite(&self) -> bool;
}

impl Finite for u32 {
    fn finite(&self) -> bool {
        true
    }
}

impl Finite for f64 {
    fn finite(&self) -> bool {
        self.is_finite()
    }
}

fn child_elements<'d>(
    element: Element<'d>,
    tag: &'static str,
) -> impl Iterator<Item = Element<'d>> {
    element
        .children()
        .into_iter()
        .filter_map(move |child| match child {
            ChildOfElement::Element(child) if child.name().local_part() == tag => Some(child),
            ChildOfElement::Element(child) => {
                trace!("Skipping <{}> while collecting <{}>", child.name().local_part(), tag);
                None
            }
            _ => None,
        })
}
