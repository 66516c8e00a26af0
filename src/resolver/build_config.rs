//! The resolved build configuration handed to the bundler.
//!
//! Field names serialize in the bundler's camelCase vocabulary. Maps are
//! ordered so two resolutions of the same input serialize identically.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::plugins::{Plugin, TypeCheckOptions};
use super::rules::{ModuleRule, StageKind};
use crate::environment::Mode;
use crate::error::Result;

/// Source-map detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Devtool {
    /// Full external source maps.
    #[serde(rename = "source-map")]
    SourceMap,
    /// Line-level maps that rebuild quickly.
    #[serde(rename = "cheap-module-source-map")]
    CheapModuleSourceMap,
}

/// Library export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Universal module definition: script tag, CommonJS and AMD.
    Umd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    pub public_path: String,
    pub filename: String,
    pub library_target: LibraryTarget,
    /// Expression bound as the module-level global; `this` stays neutral
    /// across browser and Node hosts.
    pub global_object: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub alias: BTreeMap<String, PathBuf>,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<ModuleRule>,
}

/// How the host environment provides an external module under each
/// module-loading convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalModule {
    pub root: String,
    pub commonjs: String,
    pub commonjs2: String,
    pub amd: String,
}

impl ExternalModule {
    /// Global `root` name, module request everywhere else.
    pub fn new(global_name: &str, request: &str) -> Self {
        Self {
            root: global_name.to_string(),
            commonjs: request.to_string(),
            commonjs2: request.to_string(),
            amd: request.to_string(),
        }
    }
}

/// A complete build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfiguration {
    pub mode: Mode,
    pub entry: String,
    pub devtool: Devtool,
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
    pub module: ModuleConfig,
    pub plugins: Vec<Plugin>,
    pub externals: BTreeMap<String, ExternalModule>,
}

impl BuildConfiguration {
    /// The type-checking plugin's options, if the build type-checks.
    pub fn type_check(&self) -> Option<&TypeCheckOptions> {
        self.plugins
            .iter()
            .map(|plugin| match plugin {
                Plugin::TypeCheck(options) => options,
            })
            .next()
    }

    /// Stages whose rule conditions match `file`, in pipeline order.
    ///
    /// Include directories are canonical, so `file` should be too; pass it
    /// through [`crate::detection::canonicalize_existing`] when it may
    /// traverse a symlink.
    pub fn stages_for(&self, file: &Path) -> Result<Vec<StageKind>> {
        let mut stages = Vec::new();
        for rule in &self.module.rules {
            if rule.applies_to(file)? {
                stages.push(rule.stage);
            }
        }
        Ok(stages)
    }
}
