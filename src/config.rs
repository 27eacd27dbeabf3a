//! Pager configuration
//!
//! Defaults for the navigation window, request parameter names and page
//! size limits. Loaded from a YAML or JSON file; every field is optional.
//!
//! ```yaml
//! window:
//!   left_edge: 2
//!   left_current: 2
//!   right_current: 5
//!   right_edge: 2
//! page_param: page
//! page_size_param: page_size
//! default_page_size: 20
//! max_page_size: 100
//! log_level: INFO
//! ```

use crate::error::{Error, Result};
use crate::pagination::PageWindow;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// PagerConfig
// ============================================================================

/// Complete pager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    /// Navigation window used by `iter_pages`
    pub window: PageWindow,

    /// Query parameter carrying the page number
    pub page_param: String,

    /// Query parameter carrying the page size
    pub page_size_param: String,

    /// Page size when the request does not specify one
    pub default_page_size: u64,

    /// Upper bound for requested page sizes (`None` = no limit)
    pub max_page_size: Option<u64>,

    /// Log level when `RUST_LOG` is not set
    pub log_level: LogLevel,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            window: PageWindow::default(),
            page_param: "page".to_string(),
            page_size_param: "page_size".to_string(),
            default_page_size: 20,
            max_page_size: Some(100),
            log_level: LogLevel::default(),
        }
    }
}

impl PagerConfig {
    /// Validate field combinations that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.page_param.trim().is_empty() {
            return Err(Error::config("page_param cannot be empty"));
        }

        if self.page_size_param.trim().is_empty() {
            return Err(Error::config("page_size_param cannot be empty"));
        }

        if self.page_param == self.page_size_param {
            return Err(Error::config(format!(
                "page_param and page_size_param are both '{}'",
                self.page_param
            )));
        }

        if let Some(max) = self.max_page_size {
            if max == 0 {
                return Err(Error::config(
                    "max_page_size must be positive (omit it to disable the limit)",
                ));
            }
            if self.default_page_size > max {
                return Err(Error::config(format!(
                    "default_page_size ({}) exceeds max_page_size ({max})",
                    self.default_page_size
                )));
            }
        }

        Ok(())
    }

    /// Clamp a requested page size to `max_page_size`.
    ///
    /// An unbounded request (0) is clamped too when a limit is set.
    pub fn clamp_page_size(&self, requested: u64) -> u64 {
        match self.max_page_size {
            Some(max) if requested == 0 || requested > max => max,
            _ => requested,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration file.
///
/// `.json` files are parsed as JSON; anything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        let config: PagerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        config
    } else {
        load_config_from_str(&content)?
    };

    tracing::info!("Loaded pager config from {}", path.display());
    Ok(config)
}

/// Load a configuration from a YAML string (JSON documents parse as well)
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    if yaml.trim().is_empty() {
        tracing::debug!("Empty config document, using defaults");
        return Ok(PagerConfig::default());
    }

    let config: PagerConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse pager config: {e}")))?;

    config.validate()?;
    Ok(config)
}
