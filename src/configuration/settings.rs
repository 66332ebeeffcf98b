use crate::configuration::constants::defaults;
use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Labels and formats printed into the generated page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub footer: String,
    pub lang: String,
    pub date_format: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_owned(),
            heading: defaults::HEADING.to_owned(),
            subtitle: defaults::SUBTITLE.to_owned(),
            footer: defaults::FOOTER.to_owned(),
            lang: defaults::LANG.to_owned(),
            date_format: defaults::DATE_FORMAT.to_owned(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(defaults::INPUT_PATH)
}

fn default_output() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_PATH)
}

impl Settings {
    /// Defaults, then the optional settings file, then explicit path overrides.
    pub fn load(
        file: Option<PathBuf>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        if let Some(input) = input {
            config.set("input", path_value(&input))?;
        }
        if let Some(output) = output {
            config.set("output", path_value(&output))?;
        }

        config.try_into()
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None, None, None).unwrap();
        assert_eq!(settings.input, PathBuf::from("reports/report.xml"));
        assert_eq!(settings.output, PathBuf::from("reports/report.html"));
        assert_eq!(settings.report.lang, "pt-BR");
        assert_eq!(settings.report.date_format, "%d/%m/%Y, %H:%M:%S");
    }

    #[test]
    fn test_file_then_overrides() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "input = \"from-file.xml\"\noutput = \"from-file.html\"\n\n[report]\nheading = \"Nightly run\""
        )
        .unwrap();

        let settings = Settings::load(
            Some(file.path().to_path_buf()),
            Some(PathBuf::from("cli.xml")),
            None,
        )
        .unwrap();

        assert_eq!(settings.input, PathBuf::from("cli.xml"));
        assert_eq!(settings.output, PathBuf::from("from-file.html"));
        assert_eq!(settings.report.heading, "Nightly run");
        assert_eq!(settings.report.title, defaults::TITLE);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let result = Settings::load(Some(PathBuf::from("does/not/exist.toml")), None, None);
        assert!(result.is_err());
    }
}
