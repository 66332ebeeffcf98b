pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod defaults {
    pub const INPUT_PATH: &'static str = "reports/report.xml";
    pub const OUTPUT_PATH: &'static str = "reports/report.html";

    pub const TITLE: &'static str = "Test Report - Hoppscotch API Tests";
    pub const HEADING: &'static str = "Hoppscotch API Test Report";
    pub const SUBTITLE: &'static str = "expandtesting Notes API";
    pub const FOOTER: &'static str = "Hoppscotch CLI Test Report";
    pub const LANG: &'static str = "pt-BR";
    /// pt-BR locale rendering of a date and time.
    pub const DATE_FORMAT: &'static str = "%d/%m/%Y, %H:%M:%S";
}
