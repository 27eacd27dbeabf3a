//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs, WindowArgs};
use crate::config::{load_config, PagerConfig};
use crate::envelope::{PageEnvelope, PageLinks, PageQuery};
use crate::error::Result;
use crate::pagination::{PageMarker, Paginable, Paginator};
use crate::types::JsonValue;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parsed command line
    pub fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load the configuration named by `--config`, or the defaults
    pub fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(PagerConfig::default()),
        }
    }

    /// Run the command and print its output
    pub fn run(&self, config: &PagerConfig) -> Result<()> {
        let output = self.execute(config)?;
        println!("{output}");
        Ok(())
    }

    /// Run the command and return its output
    pub fn execute(&self, config: &PagerConfig) -> Result<String> {
        tracing::debug!(command = ?self.cli.command, "Executing command");
        match &self.cli.command {
            Commands::Info { page } => self.info(page, config),
            Commands::Pages { page, window } => self.pages(page, window, config),
            Commands::Envelope {
                url,
                total,
                page,
                page_size,
            } => self.envelope(url, *total, *page, *page_size, config),
            Commands::Config => self.show_config(config),
        }
    }

    /// Build the paginator described by the page arguments.
    ///
    /// Goes through [`PageQuery`] so the page size is clamped the same way
    /// as for request URLs.
    fn paginator(args: &PageArgs, config: &PagerConfig) -> Result<Paginator> {
        PageQuery::new(Some(args.page), args.page_size).paginate(args.total, config)
    }

    /// Show page details
    fn info(&self, args: &PageArgs, config: &PagerConfig) -> Result<String> {
        let pager = Self::paginator(args, config)?;
        let summary = pager.summary();

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
            OutputFormat::Pretty => {
                let items = if summary.page_start > summary.page_end {
                    format!("No items on this page ({} total)", summary.total)
                } else {
                    format!(
                        "Items {}-{} of {}",
                        summary.page_start, summary.page_end, summary.total
                    )
                };
                Ok(format!(
                    "Page {} of {}\n{items}\nPrevious: {}\nNext: {}",
                    summary.page,
                    summary.pages,
                    yes_no(summary.has_prev),
                    yes_no(summary.has_next)
                ))
            }
        }
    }

    /// Show the navigation sequence
    fn pages(&self, args: &PageArgs, window: &WindowArgs, config: &PagerConfig) -> Result<String> {
        let pager = Self::paginator(args, config)?;
        let window = window.apply(config.window);
        let markers: Vec<PageMarker> = pager.iter_pages_with(window).collect();

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string(&markers)?),
            OutputFormat::Pretty => Ok(render_markers(&markers, pager.page())),
        }
    }

    /// Build the envelope for a request URL
    fn envelope(
        &self,
        url: &str,
        total: u64,
        page: Option<u64>,
        page_size: Option<u64>,
        config: &PagerConfig,
    ) -> Result<String> {
        let url = Url::parse(url)?;
        let query = PageQuery::from_url(&url, config)?.merge(PageQuery::new(page, page_size));
        let pager = query.paginate(total, config)?;
        let links = PageLinks::new(url, &config.page_param)?;
        let envelope = PageEnvelope::<JsonValue>::new(Vec::new(), &pager, &links);

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&envelope)?),
            OutputFormat::Pretty => Ok(format!(
                "Page {} of {} ({} per page, {} total)\nNext: {}\nPrevious: {}",
                envelope.page,
                envelope.pages(),
                envelope.page_size,
                envelope.total,
                envelope.next_page.as_deref().unwrap_or("-"),
                envelope.previous_page.as_deref().unwrap_or("-")
            )),
        }
    }

    /// Show the effective configuration
    fn show_config(&self, config: &PagerConfig) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
        }
    }
}

/// Render markers on one line, the current page in brackets
fn render_markers(markers: &[PageMarker], current: u64) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(num) if *num == current => format!("[{num}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn execute(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("pagekit").chain(args.iter().copied()))
            .expect("valid arguments");
        let runner = Runner::new(cli);
        let config = runner.load_config()?;
        runner.execute(&config)
    }

    #[test]
    fn test_info_json() {
        let out = execute(&["info", "--page", "10", "--page-size", "10", "--total", "95"]).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pages"], 10);
        assert_eq!(value["page_start"], 91);
        assert_eq!(value["page_end"], 95);
        assert_eq!(value["has_next"], false);
    }

    #[test]
    fn test_info_pretty() {
        let out = execute(&[
            "-f", "pretty", "info", "--page", "2", "--page-size", "10", "--total", "95",
        ])
        .unwrap();
        assert_eq!(out, "Page 2 of 10\nItems 11-20 of 95\nPrevious: yes\nNext: yes");
    }

    #[test]
    fn test_info_pretty_out_of_range() {
        let out = execute(&["-f", "pretty", "info", "--page", "5", "--total", "10"]).unwrap();
        assert!(out.contains("No items on this page (10 total)"));
    }

    #[test]
    fn test_info_uses_default_page_size() {
        let out = execute(&["info", "--total", "95"]).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        assert_eq!(value["page_size"], 20);
        assert_eq!(value["pages"], 5);
    }

    #[test]
    fn test_info_and_pages_clamp_page_size() {
        let out = execute(&["info", "--page-size", "500", "--total", "1000"]).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        assert_eq!(value["page_size"], 100);
        assert_eq!(value["pages"], 10);

        let out = execute(&["pages", "--page-size", "500", "--total", "1000"]).unwrap();
        assert_eq!(out, "[1,2,3,4,5,null,9,10]");
    }

    #[test]
    fn test_info_rejects_page_zero() {
        let err = execute(&["info", "--page", "0", "--total", "10"]).unwrap_err();
        assert!(err.is_user_input());
    }

    #[test]
    fn test_pages_json() {
        let out = execute(&["pages", "--page", "10", "--page-size", "10", "--total", "200"]).unwrap();
        assert_eq!(out, "[1,2,null,8,9,10,11,12,13,14,null,19,20]");
    }

    #[test]
    fn test_pages_pretty_with_window() {
        let out = execute(&[
            "-f",
            "pretty",
            "pages",
            "--page",
            "50",
            "--page-size",
            "1",
            "--total",
            "100",
            "--left-edge",
            "1",
            "--left-current",
            "1",
            "--right-current",
            "2",
            "--right-edge",
            "1",
        ])
        .unwrap();
        assert_eq!(out, "1 … 49 [50] 51 … 100");
    }

    #[test]
    fn test_envelope_from_url() {
        let out = execute(&[
            "envelope",
            "--url",
            "https://api.example.com/items?q=x&page=2&page_size=10",
            "--total",
            "95",
        ])
        .unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["page_size"], 10);
        assert_eq!(
            value["next_page"],
            "https://api.example.com/items?q=x&page=3&page_size=10"
        );
        assert_eq!(
            value["previous_page"],
            "https://api.example.com/items?q=x&page=1&page_size=10"
        );
        assert_eq!(value["data"], serde_json::json!([]));
    }

    #[test]
    fn test_envelope_override_page() {
        let out = execute(&[
            "-f",
            "pretty",
            "envelope",
            "--url",
            "https://api.example.com/items?page=2",
            "--total",
            "30",
            "--page",
            "1",
        ])
        .unwrap();
        assert_eq!(
            out,
            "Page 1 of 2 (20 per page, 30 total)\n\
             Next: https://api.example.com/items?page=2\n\
             Previous: -"
        );
    }

    #[test]
    fn test_envelope_bad_url() {
        let err = execute(&["envelope", "--url", "not a url", "--total", "1"]).unwrap_err();
        assert!(err.is_user_input());
    }

    #[test]
    fn test_config_defaults() {
        let out = execute(&["config"]).unwrap();
        let config: PagerConfig = serde_json::from_str(&out).unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_config_pretty_is_yaml() {
        let out = execute(&["-f", "pretty", "config"]).unwrap();
        assert_eq!(crate::config::load_config_from_str(&out).unwrap(), PagerConfig::default());
    }
}
