//! Manifest selection for generated projects.
//!
//! A manifest is the set of directories and the ordered list of
//! (template, output path) pairs one generation request produces. It is computed
//! from a static table: a base manifest that is always present, plus one fixed
//! sub-manifest per enabled [`Feature`]. Building is a fold over the enabled
//! features; no feature looks at any other.

use crate::config::{Feature, ServerConfig};
use indexmap::{IndexMap, IndexSet};
use log::trace;
use std::path::{Path, PathBuf};

/// Directory an output path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// The project root.
    Root,
    /// The package directory named after the package identifier.
    Package,
}

/// Fixed binding between a bundled template and the file it produces.
#[derive(Debug, Clone, Copy)]
struct Binding {
    template: &'static str,
    anchor: Anchor,
    path: &'static str,
}

const fn root(template: &'static str, path: &'static str) -> Binding {
    Binding { template, anchor: Anchor::Root, path }
}

const fn package(template: &'static str, path: &'static str) -> Binding {
    Binding { template, anchor: Anchor::Package, path }
}

/// Package subdirectories every project has.
const BASE_DIRS: &[&str] = &["tools", "services", "interfaces", "resources"];

const BASE_FILES: &[Binding] = &[
    root("root/pyproject.toml.j2", "pyproject.toml"),
    root("root/README.md.j2", "README.md"),
    root("root/demo.py.j2", "demo.py"),
    package("core/server.py.j2", "server.py"),
    package("core/__init__.py.j2", "__init__.py"),
    package("core/__main__.py.j2", "__main__.py"),
    // Transport choice happens when the generated server starts, so every
    // transport entry point is always generated.
    package("core/server_stdio.py.j2", "server_stdio.py"),
    package("core/server_http.py.j2", "server_http.py"),
    package("core/server_sse.py.j2", "server_sse.py"),
    package("services/tool_service.py.j2", "services/tool_service.py"),
    package("services/resource_service.py.j2", "services/resource_service.py"),
    package("services/__init__.py.j2", "services/__init__.py"),
    package("interfaces/tool.py.j2", "interfaces/tool.py"),
    package("interfaces/resource.py.j2", "interfaces/resource.py"),
    package("interfaces/__init__.py.j2", "interfaces/__init__.py"),
    package("tools/__init__.py.j2", "tools/__init__.py"),
    package("tools/add_numbers.py.j2", "tools/add_numbers.py"),
    package("tools/date_difference.py.j2", "tools/date_difference.py"),
    package("tools/reverse_string.py.j2", "tools/reverse_string.py"),
    package("tools/current_time.py.j2", "tools/current_time.py"),
    package("tools/random_number.py.j2", "tools/random_number.py"),
    package("tools/weather_tool.py.j2", "tools/weather_tool.py"),
    package("resources/__init__.py.j2", "resources/__init__.py"),
    package("resources/hello_world.py.j2", "resources/hello_world.py"),
    package("resources/user_profile.py.j2", "resources/user_profile.py"),
];

const PROMPTS_FILES: &[Binding] = &[
    package("interfaces/prompt.py.j2", "interfaces/prompt.py"),
    package("services/prompt_service.py.j2", "services/prompt_service.py"),
    package("prompts/__init__.py.j2", "prompts/__init__.py"),
    package("prompts/code_review.py.j2", "prompts/code_review.py"),
    package("prompts/data_analysis.py.j2", "prompts/data_analysis.py"),
    package("prompts/debug_assistant.py.j2", "prompts/debug_assistant.py"),
];

const SAMPLING_FILES: &[Binding] =
    &[package("tools/reasoning_tool.py.j2", "tools/reasoning_tool.py")];

const ELICITATION_FILES: &[Binding] = &[
    package("tools/greeting_elicitation.py.j2", "tools/greeting_elicitation.py"),
    package(
        "tools/task_creation_elicitation.py.j2",
        "tools/task_creation_elicitation.py",
    ),
    package(
        "tools/meeting_planner_elicitation.py.j2",
        "tools/meeting_planner_elicitation.py",
    ),
    package("tools/approval_elicitation.py.j2", "tools/approval_elicitation.py"),
];

const ROOTS_FILES: &[Binding] = &[
    package("services/root_service.py.j2", "services/root_service.py"),
    root("root/roots_config.py.j2", "roots_config.py"),
];

const COMPLETION_FILES: &[Binding] = &[
    package("services/completion_service.py.j2", "services/completion_service.py"),
    root("root/completions.py.j2", "completions.py"),
];

const AUTH_FILES: &[Binding] = &[
    package("services/auth_service.py.j2", "services/auth_service.py"),
    package("core/auth_middleware.py.j2", "auth_middleware.py"),
    root("root/auth_config.py.j2", "auth_config.py"),
    root("root/AUTH.md.j2", "AUTH.md"),
];

const PROMPTS_DIRS: &[&str] = &["prompts"];

const NO_DIRS: &[&str] = &[];

/// Package subdirectories and files a feature contributes.
fn sub_manifest(feature: Feature) -> (&'static [&'static str], &'static [Binding]) {
    match feature {
        Feature::Prompts => (PROMPTS_DIRS, PROMPTS_FILES),
        Feature::Sampling => (NO_DIRS, SAMPLING_FILES),
        Feature::Elicitation => (NO_DIRS, ELICITATION_FILES),
        Feature::Roots => (NO_DIRS, ROOTS_FILES),
        Feature::Completion => (NO_DIRS, COMPLETION_FILES),
        Feature::Auth => (NO_DIRS, AUTH_FILES),
    }
}

/// A template paired with the file it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    template: &'static str,
    path: PathBuf,
}

impl ManifestEntry {
    /// Logical identifier of the bundled template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Output path relative to the project root.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directories and files for one generation request.
///
/// Directories are relative to the project root, which itself is the empty path
/// and always comes first. Every directory's parent appears before it. Output
/// paths are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    directories: Vec<PathBuf>,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Anchors the manifest at a concrete project root.
    pub fn resolve<P: AsRef<Path>>(&self, root: P) -> Plan {
        let root = root.as_ref();
        Plan {
            root: root.to_path_buf(),
            directories: self
                .directories
                .iter()
                .map(|dir| {
                    if dir.as_os_str().is_empty() {
                        root.to_path_buf()
                    } else {
                        root.join(dir)
                    }
                })
                .collect(),
            files: self
                .entries
                .iter()
                .map(|entry| (entry.template, root.join(&entry.path)))
                .collect(),
        }
    }
}

/// A manifest anchored at a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<(&'static str, PathBuf)>,
}

/// Accumulates a manifest starting from the base set of files.
///
/// Adding a file whose output path is already taken is ignored, so the first
/// binding for a path wins and requesting the same feature twice is harmless.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    package_dir: PathBuf,
    directories: IndexSet<PathBuf>,
    entries: IndexMap<PathBuf, &'static str>,
}

impl ManifestBuilder {
    /// Starts a builder holding the base manifest for `package_name`.
    pub fn base(package_name: &str) -> Self {
        let mut builder = Self {
            package_dir: PathBuf::from(package_name),
            directories: IndexSet::new(),
            entries: IndexMap::new(),
        };
        builder.add_dir(PathBuf::new());
        builder.add_dir(builder.package_dir.clone());
        for dir in BASE_DIRS {
            builder.add_dir(builder.package_dir.join(dir));
        }
        for binding in BASE_FILES {
            builder.add_binding(binding);
        }
        builder
    }

    /// Appends the sub-manifest of `feature`.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        let (dirs, files) = sub_manifest(feature);
        for dir in dirs {
            self.add_dir(self.package_dir.join(dir));
        }
        for binding in files {
            self.add_binding(binding);
        }
        self
    }

    pub fn build(self) -> Manifest {
        Manifest {
            directories: self.directories.into_iter().collect(),
            entries: self
                .entries
                .into_iter()
                .map(|(path, template)| ManifestEntry { template, path })
                .collect(),
        }
    }

    /// Inserts `dir` after any of its missing ancestors.
    fn add_dir(&mut self, dir: PathBuf) {
        if self.directories.contains(&dir) {
            return;
        }
        if let Some(parent) = dir.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.directories.insert(dir);
    }

    fn add_binding(&mut self, binding: &Binding) {
        let path = match binding.anchor {
            Anchor::Root => PathBuf::from(binding.path),
            Anchor::Package => self.package_dir.join(binding.path),
        };
        if self.entries.contains_key(&path) {
            trace!("Skipping duplicate output path {}", path.display());
            return;
        }
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.entries.insert(path, binding.template);
    }
}

/// Computes the manifest for `config`.
pub fn build_manifest(config: &ServerConfig) -> Manifest {
    config
        .enabled_features()
        .into_iter()
        .fold(ManifestBuilder::base(config.package_name()), ManifestBuilder::with_feature)
        .build()
}
