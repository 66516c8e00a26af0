//! Project layout probing.
//!
//! [`ProjectLayout::probe`] is the only place that touches the filesystem
//! during resolution. Everything downstream works from the snapshot it
//! returns.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::file_detection::{file_exists, first_existing};
use crate::environment::EnvironmentDescriptor;
use crate::error::Result;

/// Marker file that switches a project into TypeScript mode.
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Local lint configuration files, in lookup order.
pub const LINT_CONFIG_FILES: &[&str] = &[
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc.json",
    ".eslintrc",
];

/// Extension of an entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceExtension {
    Js,
    Ts,
}

impl SourceExtension {
    /// Trial order for entry discovery. Plain JavaScript wins a tie.
    pub const PREFERENCE: [Self; 2] = [Self::Js, Self::Ts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

/// Directory an entry file lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRoot {
    /// Library sources, bundled for production.
    Src,
    /// Test harness, bundled for everything else.
    Test,
}

impl EntryRoot {
    /// The entry root a build in this environment starts from.
    pub fn for_env(env: &EnvironmentDescriptor) -> Self {
        if env.is_production() {
            Self::Src
        } else {
            Self::Test
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Test => "test",
        }
    }

    /// Candidate entry files in trial order, as `./src/index.js`-style paths.
    pub fn candidates(&self) -> Vec<String> {
        SourceExtension::PREFERENCE
            .iter()
            .map(|ext| EntryFile::new(*self, *ext).relative_path())
            .collect()
    }
}

/// An entry file found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryFile {
    pub root: EntryRoot,
    pub extension: SourceExtension,
}

impl EntryFile {
    pub fn new(root: EntryRoot, extension: SourceExtension) -> Self {
        Self { root, extension }
    }

    /// Path relative to the project root, e.g. `src/index.ts`.
    pub fn file_path(&self) -> String {
        format!("{}/index.{}", self.root.dir_name(), self.extension.as_str())
    }

    /// Path in the form the bundler expects for `entry`, e.g. `./src/index.ts`.
    pub fn relative_path(&self) -> String {
        format!("./{}", self.file_path())
    }
}

/// Facts about a project directory, read once at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Canonical project root.
    pub root: PathBuf,
    /// `tsconfig.json` exists at the root.
    pub is_typescript: bool,
    /// First existing of `src/index.js`, `src/index.ts`.
    pub src_entry: Option<EntryFile>,
    /// First existing of `test/index.js`, `test/index.ts`.
    pub test_entry: Option<EntryFile>,
    /// Local lint configuration file, if any. Reported only; the lint stage
    /// always reads project configuration.
    pub lint_config: Option<String>,
}

impl ProjectLayout {
    /// Probe a project directory.
    ///
    /// The root is canonicalized first, so a missing root or an unreadable
    /// path fails with `Io`.
    pub fn probe(project_root: &Path) -> Result<Self> {
        let root = fs::canonicalize(project_root)?;

        let is_typescript = file_exists(&root, TSCONFIG_FILE)?;
        let src_entry = Self::probe_entry(&root, EntryRoot::Src)?;
        let test_entry = Self::probe_entry(&root, EntryRoot::Test)?;
        let lint_config = first_existing(&root, LINT_CONFIG_FILES)?.map(str::to_string);

        tracing::debug!(
            root = %root.display(),
            is_typescript,
            src_entry = ?src_entry.map(|e| e.file_path()),
            test_entry = ?test_entry.map(|e| e.file_path()),
            lint_config = ?lint_config,
            "Probed project layout"
        );

        Ok(Self {
            root,
            is_typescript,
            src_entry,
            test_entry,
            lint_config,
        })
    }

    fn probe_entry(root: &Path, entry_root: EntryRoot) -> Result<Option<EntryFile>> {
        for ext in SourceExtension::PREFERENCE {
            let entry = EntryFile::new(entry_root, ext);
            if file_exists(root, &entry.file_path())? {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    /// The entry the given environment builds from, if one was found.
    pub fn entry_for(&self, env: &EnvironmentDescriptor) -> Option<EntryFile> {
        match EntryRoot::for_env(env) {
            EntryRoot::Src => self.src_entry,
            EntryRoot::Test => self.test_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Mode;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, file: &str) {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn probe_empty_project() {
        let temp = TempDir::new().unwrap();

        let layout = ProjectLayout::probe(temp.path()).unwrap();

        assert!(!layout.is_typescript);
        assert_eq!(layout.src_entry, None);
        assert_eq!(layout.test_entry, None);
        assert_eq!(layout.lint_config, None);
    }

    #[test]
    fn probe_detects_typescript() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "tsconfig.json");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert!(layout.is_typescript);
    }

    #[test]
    fn probe_prefers_js_entry() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/index.js");
        touch(temp.path(), "src/index.ts");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert_eq!(
            layout.src_entry,
            Some(EntryFile::new(EntryRoot::Src, SourceExtension::Js))
        );
    }

    #[test]
    fn probe_falls_back_to_ts_entry() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "test/index.ts");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert_eq!(
            layout.test_entry,
            Some(EntryFile::new(EntryRoot::Test, SourceExtension::Ts))
        );
    }

    #[test]
    fn probe_finds_lint_config() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".eslintrc.json");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert_eq!(layout.lint_config.as_deref(), Some(".eslintrc.json"));
    }

    #[test]
    fn probe_canonicalizes_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();

        let layout = ProjectLayout::probe(&temp.path().join("nested").join("..")).unwrap();
        assert_eq!(layout.root, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn probe_treats_regular_file_named_test_as_absent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/index.js");
        touch(temp.path(), "test");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert_eq!(
            layout.src_entry,
            Some(EntryFile::new(EntryRoot::Src, SourceExtension::Js))
        );
        assert_eq!(layout.test_entry, None);
    }

    #[test]
    fn probe_treats_regular_file_named_src_as_absent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src");
        touch(temp.path(), "test/index.ts");

        let layout = ProjectLayout::probe(temp.path()).unwrap();
        assert_eq!(layout.src_entry, None);
        assert_eq!(
            layout.test_entry,
            Some(EntryFile::new(EntryRoot::Test, SourceExtension::Ts))
        );
    }

    #[test]
    fn probe_missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();

        let err = ProjectLayout::probe(&temp.path().join("does-not-exist")).unwrap_err();
        assert!(matches!(err, crate::error::DevpackError::Io(_)));
    }

    #[test]
    fn entry_for_selects_by_mode() {
        let layout = ProjectLayout {
            root: PathBuf::from("/project"),
            is_typescript: false,
            src_entry: Some(EntryFile::new(EntryRoot::Src, SourceExtension::Js)),
            test_entry: Some(EntryFile::new(EntryRoot::Test, SourceExtension::Ts)),
            lint_config: None,
        };

        let prod = EnvironmentDescriptor::new(Mode::Production);
        let dev = EnvironmentDescriptor::new(Mode::Development);

        assert_eq!(
            layout.entry_for(&prod).map(|e| e.relative_path()),
            Some("./src/index.js".to_string())
        );
        assert_eq!(
            layout.entry_for(&dev).map(|e| e.relative_path()),
            Some("./test/index.ts".to_string())
        );
    }

    #[test]
    fn candidates_in_trial_order() {
        assert_eq!(
            EntryRoot::Src.candidates(),
            vec!["./src/index.js", "./src/index.ts"]
        );
        assert_eq!(
            EntryRoot::Test.candidates(),
            vec!["./test/index.js", "./test/index.ts"]
        );
    }
}
