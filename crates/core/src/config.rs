//! Configuration for the site interactions
//!
//! Every field has a default matching the site's markup, so an empty JSON
//! object (or no config at all) is a complete configuration. Pages can
//! override individual values through an inline JSON block.

use serde::Deserialize;
use thiserror::Error;

use crate::reveal::DEFAULT_THRESHOLD;
use crate::scroll::DEFAULT_HIDE_AFTER;
use crate::submit::{SubmitTiming, DEFAULT_BUSY_MS, DEFAULT_SUCCESS_MS};
use crate::theme::DEFAULT_STORAGE_KEY;
use crate::validate::PASSWORD_FIELD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Element that carries the `data-theme` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTarget {
    /// `<html>`
    #[default]
    Root,
    Body,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_selector: String,
    pub attribute: String,
    pub target: ThemeTarget,
    pub light_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggle_selector: "[data-theme-toggle]".to_string(),
            attribute: "data-theme".to_string(),
            target: ThemeTarget::Root,
            light_query: "(prefers-color-scheme: light)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub selector: String,
    pub hidden_class: String,
    /// Offset (px) the page must pass before the header hides
    pub hide_after: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            selector: "header".to_string(),
            hidden_class: "nav-hidden".to_string(),
            hide_after: DEFAULT_HIDE_AFTER,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub selector: String,
    pub trigger_attribute: String,
    pub alt_attribute: String,
    pub close_selector: String,
    pub active_class: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selector: ".lightbox".to_string(),
            trigger_attribute: "data-lightbox-target".to_string(),
            alt_attribute: "data-lightbox-alt".to_string(),
            close_selector: "[data-lightbox-close]".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl LightboxConfig {
    pub fn trigger_selector(&self) -> String {
        format!("[{}]", self.trigger_attribute)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub selector: String,
    pub track_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            selector: "[data-slider]".to_string(),
            track_selector: "[data-slider-track]".to_string(),
            prev_selector: "[data-slider-prev]".to_string(),
            next_selector: "[data-slider-next]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "[data-animate]".to_string(),
            class: "in-view".to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub selector: String,
    /// Labeled containers, tried in order
    pub containers: Vec<String>,
    pub error_selector: String,
    pub invalid_class: String,
    pub success_selector: String,
    pub success_class: String,
    pub submit_selector: String,
    pub busy_class: String,
    pub busy_ms: u32,
    pub success_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selector: r#"form[data-validate="true"]"#.to_string(),
            containers: vec![".input-field".to_string(), ".remember-line".to_string()],
            error_selector: ".error".to_string(),
            invalid_class: "invalid".to_string(),
            success_selector: ".auth-success".to_string(),
            success_class: "active".to_string(),
            submit_selector: r#"[type="submit"]"#.to_string(),
            busy_class: "pulse".to_string(),
            busy_ms: DEFAULT_BUSY_MS,
            success_ms: DEFAULT_SUCCESS_MS,
        }
    }
}

impl FormConfig {
    pub const fn timing(&self) -> SubmitTiming {
        SubmitTiming {
            busy_ms: self.busy_ms,
            success_ms: self.success_ms,
        }
    }

    /// Selector for controls sitting inside an invalid container
    pub fn first_invalid_selector(&self) -> String {
        self.containers
            .iter()
            .flat_map(|container| {
                ["input", "textarea", "select"]
                    .into_iter()
                    .map(move |tag| format!("{container}.{} {tag}", self.invalid_class))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Selector for containers still marked invalid
    pub fn invalid_container_selector(&self) -> String {
        self.containers
            .iter()
            .map(|container| format!("{container}.{}", self.invalid_class))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn password_selector() -> String {
        format!(r#"[name="{PASSWORD_FIELD}"]"#)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShimmerConfig {
    pub container: String,
    pub class: String,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            container: ".input-field".to_string(),
            class: "shimmer".to_string(),
        }
    }
}

impl ShimmerConfig {
    /// Focusable controls inside the container
    pub fn control_selector(&self) -> String {
        let c = &self.container;
        format!("{c} input, {c} textarea, {c} select")
    }
}

/// Full site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub lightbox: LightboxConfig,
    pub slider: SliderConfig,
    pub reveal: RevealConfig,
    pub forms: FormConfig,
    pub shimmer: ShimmerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            lightbox: LightboxConfig::default(),
            slider: SliderConfig::default(),
            reveal: RevealConfig::default(),
            forms: FormConfig::default(),
            shimmer: ShimmerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal.threshold",
                value: threshold,
            });
        }
        if self.nav.hide_after < 0.0 || self.nav.hide_after.is_nan() {
            return Err(ConfigError::OutOfRange {
                field: "nav.hide_after",
                value: self.nav.hide_after,
            });
        }
        if self.forms.containers.is_empty() {
            return Err(ConfigError::Empty("forms.containers"));
        }
        Ok(())
    }

    /// Log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
