pub mod parser;

/// Root of a parsed JUnit document.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub counters: Counters,
    pub suites: Vec<Suite>,
}

/// Aggregate counters shared by the report and every suite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Counters {
    pub tests: u32,
    pub failures: u32,
    pub errors: u32,
    /// Seconds.
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    pub name: Option<String>,
    pub counters: Counters,
    pub timestamp: Option<String>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub name: Option<String>,
    pub failure: Option<Detail>,
    pub error: Option<Detail>,
}

/// Free text carried by a `failure` or `error` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Detail {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }
}

impl Counters {
    /// Can go negative on inconsistent input; callers treat that as a data
    /// quality signal rather than an error.
    pub fn passed(&self) -> i64 {
        i64::from(self.tests) - i64::from(self.failures) - i64::from(self.errors)
    }

    pub fn status(&self) -> Status {
        if self.failures == 0 && self.errors == 0 {
            Status::Passed
        } else {
            Status::Failed
        }
    }
}

impl Case {
    pub fn status(&self) -> Status {
        if self.failure.is_some() || self.error.is_some() {
            Status::Failed
        } else {
            Status::Passed
        }
    }

    /// The failure text wins over the error text when both are present.
    pub fn detail(&self) -> Option<&Detail> {
        self.failure.as_ref().or_else(|| self.error.as_ref())
    }
}
