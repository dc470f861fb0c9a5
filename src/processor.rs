//! Project materialization.
//! Turns a manifest into a directory tree on disk: checks that the destination is
//! free, renders every entry, then creates directories and writes files in manifest
//! order.

use crate::config::{Feature, ServerConfig};
use crate::error::{Error, Result};
use crate::manifest::{build_manifest, Manifest, Plan};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful generation, used to build the user-facing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub project_name: String,
    pub package_name: String,
    /// Features that were enabled, in manifest order.
    pub features: Vec<Feature>,
    pub root: PathBuf,
    /// Written files, relative to `root`.
    pub files: Vec<PathBuf>,
}

/// Fails if `root` already exists; generation never merges into a directory.
///
/// Symlinks count as present even when their target is missing.
///
/// # Errors
/// * `Error::DestinationExists` if anything is present at `root`
/// * `Error::IoError` if `root` cannot be inspected
pub fn ensure_destination_free<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    match fs::symlink_metadata(root) {
        Ok(_) => Err(Error::DestinationExists { path: root.display().to_string() }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::IoError(e)),
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(Error::IoError)
}

/// Writes `content` to a file that must not exist yet.
fn write_new_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes()).map_err(Error::IoError)
}

/// Materializes manifests through a template renderer.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Anchors `manifest` at `root` after checking the destination, without
    /// touching the filesystem.
    pub fn plan<P: AsRef<Path>>(&self, manifest: &Manifest, root: P) -> Result<Plan> {
        let root = root.as_ref();
        ensure_destination_free(root)?;
        Ok(manifest.resolve(root))
    }

    /// Renders every planned file in memory.
    fn render_all(&self, config: &ServerConfig, plan: &Plan) -> Result<Vec<(PathBuf, String)>> {
        let context = config.render_context();
        plan.files
            .iter()
            .map(|(template, target)| {
                debug!("Rendering {template}");
                let content = self.renderer.render(template, &context)?;
                Ok((target.clone(), content))
            })
            .collect()
    }

    /// Generates the project described by `manifest` under `root`.
    ///
    /// Every template is rendered before the first directory is created, so a
    /// rendering failure leaves the filesystem untouched. A write failure aborts the
    /// remaining entries; whatever was already written stays in place.
    ///
    /// # Errors
    /// * `Error::DestinationExists` if `root` is present
    /// * `Error::TemplateNotFound` / `Error::ContextFieldMissing` on a manifest and
    ///   template mismatch
    /// * `Error::IoError` if a directory or file cannot be created
    pub fn materialize<P: AsRef<Path>>(
        &self,
        config: &ServerConfig,
        manifest: &Manifest,
        root: P,
    ) -> Result<Report> {
        let plan = self.plan(manifest, root)?;
        let rendered = self.render_all(config, &plan)?;

        for dir in &plan.directories {
            debug!("Creating directory: {}", dir.display());
            create_dir_all(dir)?;
        }

        for (target, content) in &rendered {
            debug!("Writing file: {}", target.display());
            write_new_file(target, content)?;
        }

        info!("Generated {} files in {}", rendered.len(), plan.root.display());

        Ok(Report {
            project_name: config.project_name().to_string(),
            package_name: config.package_name().to_string(),
            features: config.enabled_features(),
            root: plan.root,
            files: manifest.entries().iter().map(|entry| entry.path().to_path_buf()).collect(),
        })
    }
}

/// Creates a new MCP server project at `output_dir/<project name>`.
pub fn generate_project<P: AsRef<Path>>(config: &ServerConfig, output_dir: P) -> Result<Report> {
    let renderer = MiniJinjaRenderer::new();
    let manifest = build_manifest(config);
    let root = output_dir.as_ref().join(config.project_name());
    Processor::new(&renderer).materialize(config, &manifest, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn destination_check_rejects_existing_paths() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ensure_destination_free(temp_dir.path().join("fresh")).is_ok());
        assert!(matches!(
            ensure_destination_free(temp_dir.path()),
            Err(Error::DestinationExists { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_present() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("my-server");
        std::os::unix::fs::symlink(temp_dir.path().join("nowhere"), &link).unwrap();

        assert!(matches!(
            ensure_destination_free(&link),
            Err(Error::DestinationExists { .. })
        ));
    }

    #[test]
    fn new_files_are_never_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("once.txt");
        write_new_file(&path, "first").unwrap();
        assert!(write_new_file(&path, "second").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
