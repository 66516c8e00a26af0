//! Module rules: the transformation and static-analysis pipeline.
//!
//! A rule pairs a condition (`test`, `include`, `exclude`) with the loader
//! that runs on matching files. Conditions are regular expressions matched
//! against `/`-separated absolute paths, the same way the bundler applies
//! them.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

/// Files the lint and transpile stages apply to.
pub const SCRIPT_TEST: &str = r"\.(js|mjs|ts)$";

/// Dependency directories the transpile stage skips.
pub const DEPENDENCY_EXCLUDE: &str = "(node_modules)";

/// Which pipeline stage a rule implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    Lint,
    SourceMap,
    Transpile,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lint => write!(f, "lint"),
            Self::SourceMap => write!(f, "source-map"),
            Self::Transpile => write!(f, "transpile"),
        }
    }
}

/// Rule ordering hint for the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Run before normal loaders.
    Pre,
}

/// Options for the lint pre-pass.
///
/// Findings are reported as warnings so lint never fails the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintOptions {
    /// Cache analysis results across runs.
    pub cache: bool,
    /// Report findings as warnings rather than errors.
    pub emit_warning: bool,
    /// Read the project's local lint configuration.
    #[serde(rename = "useEslintrc")]
    pub use_project_config: bool,
}

/// A syntax transformation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Preset {
    /// Lower modern syntax to a broadly compatible baseline.
    #[serde(rename = "@babel/preset-env")]
    Env,
    /// Strip type annotations.
    #[serde(rename = "@babel/preset-typescript")]
    Typescript,
}

/// Options for the syntax transformation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileOptions {
    pub presets: Vec<Preset>,
    /// Compact (minify) emitted code.
    pub compact: bool,
}

/// The loader a rule runs, with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "loader", content = "options")]
pub enum Loader {
    #[serde(rename = "eslint-loader")]
    Lint(LintOptions),
    #[serde(rename = "source-map-loader")]
    SourceMap,
    #[serde(rename = "babel-loader")]
    Transpile(TranspileOptions),
}

/// A single module rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRule {
    pub stage: StageKind,
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(rename = "use")]
    pub loader: Loader,
}

impl ModuleRule {
    /// Lint pre-pass over the project's own sources and tests.
    pub fn lint(project_root: &Path) -> Self {
        Self {
            stage: StageKind::Lint,
            test: SCRIPT_TEST.to_string(),
            enforce: Some(Enforce::Pre),
            include: vec![project_root.join("src"), project_root.join("test")],
            exclude: None,
            loader: Loader::Lint(LintOptions {
                cache: true,
                emit_warning: true,
                use_project_config: true,
            }),
        }
    }

    /// Source-map passthrough for the shared dependency's own files.
    pub fn library_source_maps(package: &str) -> Self {
        Self {
            stage: StageKind::SourceMap,
            test: format!(r"({}/.*\.js)$", regex::escape(package)),
            enforce: Some(Enforce::Pre),
            include: Vec::new(),
            exclude: None,
            loader: Loader::SourceMap,
        }
    }

    /// Syntax transformation for everything outside `node_modules`.
    pub fn transpile(options: TranspileOptions) -> Self {
        Self {
            stage: StageKind::Transpile,
            test: SCRIPT_TEST.to_string(),
            enforce: None,
            include: Vec::new(),
            exclude: Some(DEPENDENCY_EXCLUDE.to_string()),
            loader: Loader::Transpile(options),
        }
    }

    /// Whether this rule's condition matches an absolute file path.
    pub fn applies_to(&self, file: &Path) -> Result<bool> {
        let normalized = file.to_string_lossy().replace('\\', "/");

        if !Regex::new(&self.test)?.is_match(&normalized) {
            return Ok(false);
        }

        if !self.include.is_empty() && !self.include.iter().any(|dir| file.starts_with(dir)) {
            return Ok(false);
        }

        if let Some(exclude) = &self.exclude {
            if Regex::new(exclude)?.is_match(&normalized) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
