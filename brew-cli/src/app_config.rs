use clap::ValueEnum;
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub receipt: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_filter() -> String {
    "brew_cli=info,brew_catalog=info".to_string()
}

pub const VERBOSE_FILTER: &str = "brew_cli=debug,brew_catalog=debug";

impl AppConfig {
    /// Files under `config/`, then `BREW_*` environment variables
    /// (`BREW_OUTPUT__FORMAT=json` sets `output.format`)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build("config", true)
    }

    /// `<dir>/default` then `<dir>/local`, both optional. The environment is
    /// not consulted.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        Self::build(dir, false)
    }

    fn build(dir: &str, from_env: bool) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("log.filter", default_filter())?
            .set_default("output.format", "text")?
            .set_default("output.receipt", false)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false));

        if from_env {
            builder = builder.add_source(
                config::Environment::with_prefix("BREW")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }

    /// Command-line flags win over file and environment values
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if args.receipt {
            self.output.receipt = true;
        }
        if args.verbose {
            self.log.filter = VERBOSE_FILTER.to_string();
        }
    }
}
