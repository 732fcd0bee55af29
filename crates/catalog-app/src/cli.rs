//! Command-line flags and how they merge into the demo run

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::DemoConfig;
use crate::demo::DemoReport;

#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(about = "Repository design pattern over an in-memory product catalog")]
#[command(version)]
pub struct Cli {
    /// Demo configuration file (JSON, or YAML for .yaml/.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output the run as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject products whose id is already stored
    #[arg(long)]
    pub unique_ids: bool,
}

impl Cli {
    /// Resolve the configuration: the file (or defaults), then flag overrides.
    /// `--unique-ids` wins over whatever the file says.
    pub fn load_config(&self) -> crate::Result<DemoConfig> {
        let config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    pub fn apply_overrides(&self, config: DemoConfig) -> DemoConfig {
        if self.unique_ids {
            config.with_unique_ids(true)
        } else {
            config
        }
    }

    /// Text with a banner, or pretty JSON with `--json`
    pub fn render(&self, report: &DemoReport) -> crate::Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let rule = "------------------------------------";
        let mut lines = vec![
            rule.to_string(),
            style("Repository Design Pattern in Rust.").bold().to_string(),
            rule.to_string(),
            String::new(),
        ];
        lines.extend(report.text_lines());
        Ok(lines.join("\n"))
    }
}
