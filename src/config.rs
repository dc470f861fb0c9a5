//! Configuration handling for generated projects.
//! This module provides the immutable [`ServerConfig`] built once per generation
//! request, the closed set of [`Feature`] toggles, and the optional settings file
//! that can pre-populate them.

use crate::constants::{DEFAULT_DESCRIPTION_SUFFIX, DEFAULT_PYTHON_VERSION};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

/// Runs of characters that cannot appear in an identifier.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("separator pattern is valid"));

/// Optional capability of a generated server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Prompts,
    Sampling,
    Elicitation,
    Roots,
    Completion,
    Auth,
}

impl Feature {
    /// Every feature, in the order their files are appended to a manifest.
    pub const ALL: [Feature; 6] = [
        Feature::Prompts,
        Feature::Sampling,
        Feature::Elicitation,
        Feature::Roots,
        Feature::Completion,
        Feature::Auth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Prompts => "prompts",
            Feature::Sampling => "sampling",
            Feature::Elicitation => "elicitation",
            Feature::Roots => "roots",
            Feature::Completion => "completion",
            Feature::Auth => "auth",
        }
    }

    /// Whether the feature is on when nobody asked for it either way.
    pub fn default_enabled(self) -> bool {
        !matches!(self, Feature::Auth)
    }

    /// Key under which templates see this toggle, e.g. `with_prompts`.
    pub fn context_key(self) -> String {
        format!("with_{}", self.name())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| Error::ConfigError(format!("unknown feature '{s}'")))
    }
}

/// Derives the identifier-safe package name from a project name.
///
/// Lower-cases the name and collapses every run of characters that cannot appear
/// in an identifier into a single underscore. Unicode letters and digits are kept.
/// Leading and trailing underscores are dropped, so a name made only of separators
/// yields an empty string.
pub fn package_name_from(project_name: &str) -> String {
    let lowered = project_name.trim().to_lowercase();
    SEPARATORS.replace_all(&lowered, "_").trim_matches('_').to_string()
}

/// Configuration for a new MCP server.
///
/// Built once from validated inputs; nothing downstream can change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    project_name: String,
    description: String,
    python_version: String,
    package_name: String,
    features: IndexMap<Feature, bool>,
}

impl ServerConfig {
    /// Creates a configuration from user inputs.
    ///
    /// # Arguments
    /// * `project_name` - Human-facing project name, may contain hyphens
    /// * `description` - Free text; defaults to `"<project_name> MCP server"`
    /// * `python_version` - Version constraint written into the generated project
    /// * `toggles` - Explicit feature states; missing features take their default
    ///
    /// # Errors
    /// * `Error::InvalidInput` if the name is blank, contains a path separator, or
    ///   normalizes to nothing
    pub fn new(
        project_name: impl Into<String>,
        description: Option<String>,
        python_version: impl Into<String>,
        toggles: &IndexMap<Feature, bool>,
    ) -> Result<Self> {
        let project_name = project_name.into().trim().to_string();
        if project_name.is_empty() {
            return Err(Error::InvalidInput("project name must not be empty".to_string()));
        }
        if project_name.contains(&['/', '\\'][..]) || project_name == "." || project_name == ".." {
            return Err(Error::InvalidInput(format!(
                "project name '{project_name}' must be a single directory name"
            )));
        }

        let package_name = package_name_from(&project_name);
        if package_name.is_empty() {
            return Err(Error::InvalidInput(format!(
                "project name '{project_name}' does not contain any identifier characters"
            )));
        }

        let features = Feature::ALL
            .into_iter()
            .map(|feature| {
                let enabled =
                    toggles.get(&feature).copied().unwrap_or(feature.default_enabled());
                (feature, enabled)
            })
            .collect();

        let description = description
            .unwrap_or_else(|| format!("{project_name} {DEFAULT_DESCRIPTION_SUFFIX}"));

        debug!("Derived package name '{package_name}' from '{project_name}'");

        Ok(Self {
            project_name,
            description,
            python_version: python_version.into(),
            package_name,
            features,
        })
    }

    /// Creates a configuration from layered settings, falling back to built-in defaults.
    pub fn from_settings(
        project_name: impl Into<String>,
        settings: &ProjectSettings,
    ) -> Result<Self> {
        let python_version = settings
            .python_version
            .clone()
            .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string());
        Self::new(
            project_name,
            settings.description.clone(),
            python_version,
            &settings.features,
        )
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.get(&feature).copied().unwrap_or(false)
    }

    /// Every feature together with its state, in [`Feature::ALL`] order.
    pub fn features(&self) -> &IndexMap<Feature, bool> {
        &self.features
    }

    pub fn enabled_features(&self) -> Vec<Feature> {
        self.features
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(feature, _)| *feature)
            .collect()
    }

    /// Builds the read-only view templates are rendered against.
    ///
    /// Templates see the configuration under `config` and the tool version under
    /// `forge.version`.
    pub fn render_context(&self) -> serde_json::Value {
        let mut config = serde_json::Map::new();
        config.insert("project_name".to_string(), json!(self.project_name));
        config.insert("description".to_string(), json!(self.description));
        config.insert("python_version".to_string(), json!(self.python_version));
        config.insert("package_name".to_string(), json!(self.package_name));
        for (feature, enabled) in &self.features {
            config.insert(feature.context_key(), json!(enabled));
        }
        let enabled: Vec<&str> =
            self.enabled_features().into_iter().map(Feature::name).collect();
        config.insert("features".to_string(), json!(enabled));

        json!({
            "config": config,
            "forge": { "version": env!("CARGO_PKG_VERSION") },
        })
    }
}

/// Optional inputs that can come from a settings file or from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    pub description: Option<String>,
    pub python_version: Option<String>,
    #[serde(default)]
    pub features: IndexMap<Feature, bool>,
}

impl ProjectSettings {
    /// Layers `other` on top of `self`; values present in `other` win.
    pub fn overlay(mut self, other: ProjectSettings) -> ProjectSettings {
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.python_version.is_some() {
            self.python_version = other.python_version;
        }
        for (feature, enabled) in other.features {
            self.features.insert(feature, enabled);
        }
        self
    }
}

/// Parses settings content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the settings schema
pub fn parse_settings(content: &str) -> Result<ProjectSettings> {
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid settings format: {e}"))),
    }
}

/// Reads and parses a settings file.
pub fn load_settings<P: AsRef<Path>>(settings_path: P) -> Result<ProjectSettings> {
    let settings_path = settings_path.as_ref();
    if !settings_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid settings path: {}",
            settings_path.display()
        )));
    }

    debug!("Loading settings from {}", settings_path.display());
    let content = std::fs::read_to_string(settings_path)?;
    parse_settings(&content)
}
