//! Build configuration resolution.
//!
//! [`ConfigResolver`] turns an [`EnvironmentDescriptor`] and a project
//! directory into a [`BuildConfiguration`]. Resolution has two halves:
//!
//! 1. [`ProjectLayout::probe`] reads every filesystem fact up front
//! 2. [`ConfigResolver::resolve_layout`] maps that snapshot to a
//!    configuration without touching the disk
//!
//! Either the whole configuration is produced or resolution fails; there
//! are no partial results.

pub mod build_config;
pub mod pipeline;
pub mod plugins;
pub mod rules;

pub use build_config::{
    BuildConfiguration, Devtool, ExternalModule, LibraryTarget, ModuleConfig, OutputConfig,
    ResolveConfig,
};
pub use pipeline::Pipeline;
pub use plugins::{Plugin, TypeCheckOptions};
pub use rules::{
    Enforce, LintOptions, Loader, ModuleRule, Preset, StageKind, TranspileOptions,
    DEPENDENCY_EXCLUDE, SCRIPT_TEST,
};

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Settings;
use crate::detection::{EntryRoot, ProjectLayout};
use crate::environment::EnvironmentDescriptor;
use crate::error::{DevpackError, Result};

/// Resolves build configurations for projects.
///
/// # Example
///
/// ```
/// use devpack::environment::{EnvironmentDescriptor, Mode};
/// use devpack::resolver::ConfigResolver;
/// use std::fs;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// fs::create_dir_all(temp.path().join("src")).unwrap();
/// fs::write(temp.path().join("src/index.js"), "").unwrap();
///
/// let resolver = ConfigResolver::default();
/// let env = EnvironmentDescriptor::new(Mode::Production);
/// let config = resolver.resolve(&env, temp.path()).unwrap();
///
/// assert_eq!(config.entry, "./src/index.js");
/// assert_eq!(config.output.filename, "index.js");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    settings: Settings,
}

impl ConfigResolver {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Probe `project_root` and resolve its configuration.
    pub fn resolve(
        &self,
        env: &EnvironmentDescriptor,
        project_root: &Path,
    ) -> Result<BuildConfiguration> {
        let layout = ProjectLayout::probe(project_root)?;
        self.resolve_layout(env, &layout)
    }

    /// Resolve a configuration from an already-probed layout.
    ///
    /// Fails with `MissingEntry` when the layout has no entry for the
    /// environment's mode.
    pub fn resolve_layout(
        &self,
        env: &EnvironmentDescriptor,
        layout: &ProjectLayout,
    ) -> Result<BuildConfiguration> {
        let is_production = env.is_production();
        let is_typescript = layout.is_typescript;
        let root = layout.root.as_path();

        let entry = layout
            .entry_for(env)
            .ok_or_else(|| DevpackError::MissingEntry {
                mode: env.mode(),
                candidates: EntryRoot::for_env(env).candidates(),
            })?
            .relative_path();

        tracing::info!(mode = %env.mode(), entry = %entry, "Resolved entry");

        let names = &self.settings.output;
        let (dir, filename, devtool) = if is_production {
            (&names.production_dir, &names.production_filename, Devtool::SourceMap)
        } else {
            (
                &names.development_dir,
                &names.development_filename,
                Devtool::CheapModuleSourceMap,
            )
        };

        let output = OutputConfig {
            path: root.join(dir),
            public_path: format!("/{}/", dir),
            filename: filename.clone(),
            library_target: LibraryTarget::Umd,
            global_object: "this".to_string(),
        };

        let shared = &self.settings.shared_dependency;

        let resolve = ResolveConfig {
            alias: BTreeMap::from([(
                shared.package.clone(),
                root.join("node_modules").join(&shared.package),
            )]),
            extensions: Pipeline::new()
                .stage_if(is_typescript, || ".ts".to_string())
                .stage(".js".to_string())
                .build(),
        };

        let presets = Pipeline::new()
            .stage(Preset::Env)
            .stage_if(is_typescript, || Preset::Typescript)
            .build();

        let rules = Pipeline::new()
            .stage(ModuleRule::lint(root))
            .stage(ModuleRule::library_source_maps(&shared.package))
            .stage(ModuleRule::transpile(TranspileOptions {
                presets,
                compact: is_production,
            }))
            .build();

        let plugins = Pipeline::new()
            .stage_if(is_typescript, || {
                Plugin::TypeCheck(TypeCheckOptions::new(root, env.is_development()))
            })
            .build();

        let mut externals = BTreeMap::new();
        if is_production {
            externals.insert(
                shared.external_request.clone(),
                ExternalModule::new(&shared.global_name, &shared.external_request),
            );
        }

        tracing::debug!(
            rules = rules.len(),
            plugins = plugins.len(),
            externals = externals.len(),
            "Composed build pipeline"
        );

        Ok(BuildConfiguration {
            mode: env.mode(),
            entry,
            devtool,
            output,
            resolve,
            module: ModuleConfig { rules },
            plugins,
            externals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{EntryFile, SourceExtension};
    use crate::environment::Mode;
    use std::path::PathBuf;

    fn layout(is_typescript: bool) -> ProjectLayout {
        ProjectLayout {
            root: PathBuf::from("/project"),
            is_typescript,
            src_entry: Some(EntryFile::new(EntryRoot::Src, SourceExtension::Js)),
            test_entry: Some(EntryFile::new(EntryRoot::Test, SourceExtension::Ts)),
            lint_config: None,
        }
    }

    fn resolve(mode: Mode, layout: &ProjectLayout) -> Result<BuildConfiguration> {
        ConfigResolver::default().resolve_layout(&EnvironmentDescriptor::new(mode), layout)
    }

    #[test]
    fn production_uses_src_entry() {
        let config = resolve(Mode::Production, &layout(false)).unwrap();
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.entry, "./src/index.js");
    }

    #[test]
    fn development_uses_test_entry() {
        let config = resolve(Mode::Development, &layout(false)).unwrap();
        assert_eq!(config.entry, "./test/index.ts");
    }

    #[test]
    fn production_output_settings() {
        let config = resolve(Mode::Production, &layout(false)).unwrap();

        assert_eq!(config.devtool, Devtool::SourceMap);
        assert_eq!(config.output.path, PathBuf::from("/project/dist"));
        assert_eq!(config.output.public_path, "/dist/");
        assert_eq!(config.output.filename, "index.js");
        assert_eq!(config.output.library_target, LibraryTarget::Umd);
        assert_eq!(config.output.global_object, "this");
    }

    #[test]
    fn development_output_settings() {
        let config = resolve(Mode::Development, &layout(false)).unwrap();

        assert_eq!(config.devtool, Devtool::CheapModuleSourceMap);
        assert_eq!(config.output.path, PathBuf::from("/project/build"));
        assert_eq!(config.output.public_path, "/build/");
        assert_eq!(config.output.filename, "test_bundle.js");
    }

    #[test]
    fn alias_points_at_installed_copy() {
        let config = resolve(Mode::Development, &layout(false)).unwrap();
        assert_eq!(
            config.resolve.alias.get("blockly"),
            Some(&PathBuf::from("/project/node_modules/blockly"))
        );
        assert_eq!(config.resolve.alias.len(), 1);
    }

    #[test]
    fn extensions_follow_typescript_flag() {
        let js = resolve(Mode::Production, &layout(false)).unwrap();
        let ts = resolve(Mode::Production, &layout(true)).unwrap();

        assert_eq!(js.resolve.extensions, vec![".js"]);
        assert_eq!(ts.resolve.extensions, vec![".ts", ".js"]);
    }

    #[test]
    fn ts_entry_without_tsconfig_keeps_js_only_extensions() {
        // Entry discovery and module-resolution extensions are separate concerns.
        let config = resolve(Mode::Development, &layout(false)).unwrap();
        assert_eq!(config.entry, "./test/index.ts");
        assert_eq!(config.resolve.extensions, vec![".js"]);
    }

    #[test]
    fn rules_are_ordered_lint_source_map_transpile() {
        let config = resolve(Mode::Production, &layout(true)).unwrap();
        let stages: Vec<StageKind> = config.module.rules.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![StageKind::Lint, StageKind::SourceMap, StageKind::Transpile]
        );
    }

    #[test]
    fn transpile_presets_and_compaction() {
        let cases = [
            (Mode::Production, false, vec![Preset::Env], true),
            (Mode::Production, true, vec![Preset::Env, Preset::Typescript], true),
            (Mode::Development, false, vec![Preset::Env], false),
            (Mode::Development, true, vec![Preset::Env, Preset::Typescript], false),
        ];

        for (mode, is_typescript, presets, compact) in cases {
            let config = resolve(mode, &layout(is_typescript)).unwrap();
            let Loader::Transpile(options) = &config.module.rules[2].loader else {
                panic!("third rule should transpile");
            };
            assert_eq!(options.presets, presets, "{mode} ts={is_typescript}");
            assert_eq!(options.compact, compact, "{mode} ts={is_typescript}");
        }
    }

    #[test]
    fn type_check_present_only_for_typescript() {
        let config = resolve(Mode::Production, &layout(false)).unwrap();
        assert!(config.plugins.is_empty());
        assert!(config.type_check().is_none());
    }

    #[test]
    fn type_check_async_in_development_only() {
        let dev = resolve(Mode::Development, &layout(true)).unwrap();
        let prod = resolve(Mode::Production, &layout(true)).unwrap();

        let dev_check = dev.type_check().unwrap();
        let prod_check = prod.type_check().unwrap();

        assert!(dev_check.is_async);
        assert!(!prod_check.is_async);
        assert_eq!(
            prod_check.tsconfig,
            PathBuf::from("/project/tsconfig.json")
        );
    }

    #[test]
    fn externals_only_in_production() {
        let prod = resolve(Mode::Production, &layout(false)).unwrap();
        let dev = resolve(Mode::Development, &layout(false)).unwrap();

        assert_eq!(
            prod.externals.get("blockly/core"),
            Some(&ExternalModule::new("Blockly", "blockly/core"))
        );
        assert!(dev.externals.is_empty());
    }

    #[test]
    fn missing_entry_fails_with_candidates() {
        let mut layout = layout(false);
        layout.src_entry = None;

        let err = resolve(Mode::Production, &layout).unwrap_err();
        match err {
            DevpackError::MissingEntry { mode, candidates } => {
                assert_eq!(mode, Mode::Production);
                assert_eq!(candidates, vec!["./src/index.js", "./src/index.ts"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_test_entry_does_not_affect_production() {
        let mut layout = layout(false);
        layout.test_entry = None;

        assert!(resolve(Mode::Production, &layout).is_ok());
        assert!(resolve(Mode::Development, &layout).is_err());
    }

    #[test]
    fn resolution_is_idempotent() {
        let layout = layout(true);
        for mode in [Mode::Development, Mode::Production] {
            assert_eq!(
                resolve(mode, &layout).unwrap(),
                resolve(mode, &layout).unwrap()
            );
        }
    }

    #[test]
    fn settings_override_shared_dependency_and_output() {
        let mut settings = Settings::default();
        settings.shared_dependency.package = "widgets".to_string();
        settings.shared_dependency.global_name = "Widgets".to_string();
        settings.shared_dependency.external_request = "widgets/core".to_string();
        settings.output.production_dir = "lib".to_string();

        let config = ConfigResolver::new(settings)
            .resolve_layout(&EnvironmentDescriptor::new(Mode::Production), &layout(false))
            .unwrap();

        assert!(config.resolve.alias.contains_key("widgets"));
        assert_eq!(config.module.rules[1].test, r"(widgets/.*\.js)$");
        assert_eq!(config.externals["widgets/core"].root, "Widgets");
        assert_eq!(config.output.path, PathBuf::from("/project/lib"));
        assert_eq!(config.output.public_path, "/lib/");
    }

    #[test]
    fn stages_for_project_and_library_files() {
        let config = resolve(Mode::Development, &layout(false)).unwrap();

        assert_eq!(
            config.stages_for(Path::new("/project/src/index.js")).unwrap(),
            vec![StageKind::Lint, StageKind::Transpile]
        );
        assert_eq!(
            config
                .stages_for(Path::new("/project/node_modules/blockly/core/block.js"))
                .unwrap(),
            vec![StageKind::SourceMap]
        );
        assert!(config
            .stages_for(Path::new("/project/README.md"))
            .unwrap()
            .is_empty());
    }
}
