use color_eyre::{Result, eyre::bail};
use std::{
    fs::{self, DirEntry, ReadDir},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{config::TasksConfig, task::TaskFile};

pub struct VaultParser {
    config: TasksConfig,
}

impl VaultParser {
    pub const fn new(config: TasksConfig) -> Self {
        Self { config }
    }

    /// Reads every file of the vault and returns those containing tasks, sorted by path.
    ///
    /// # Errors
    ///
    /// Will return an error if no vault path is set, if it doesn't exist, or if it can't be
    /// listed. Directories that can't be listed and files that can't be read as UTF-8 below
    /// it are skipped.
    pub fn scan_vault(&self) -> Result<Vec<TaskFile>> {
        let root = &self.config.vault_path;
        if root.to_str().is_some_and(str::is_empty) {
            bail!(
                "No vault path provided (use `--vault-path <PATH>`) and no default path set in config file"
            );
        }
        if !root.exists() {
            bail!("Vault path does not exist: {root:?}");
        }

        info!("Scanning {root:?}");
        let mut sources = vec![];
        if root.is_file() {
            if let Some(content) = Self::read_file(root) {
                sources.push((root.clone(), content));
            }
        } else {
            self.scan_entries(root.read_dir()?, &mut sources);
        }
        Ok(scan_sources(root, sources))
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.config.vault_path).ok();
        self.config
            .ignored
            .iter()
            .any(|ignored| ignored == path || relative.is_some_and(|r| r == ignored))
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        if self.config.file_extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                self.config
                    .file_extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }

    /// Adds the files below `path` to `sources`. A directory that can't be listed is skipped.
    fn scan(&self, path: &Path, sources: &mut Vec<(PathBuf, String)>) {
        match path.read_dir() {
            Ok(entries) => self.scan_entries(entries, sources),
            Err(e) => debug!("Skipping {path:?}: {e}"),
        }
    }

    fn scan_entries(&self, entries: ReadDir, sources: &mut Vec<(PathBuf, String)>) {
        let mut entries: Vec<DirEntry> = entries.flatten().collect();
        entries.sort_by_key(DirEntry::path);

        for entry in entries {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let entry_path = entry.path();

            if !self.config.parse_dot_files && name.starts_with('.') {
                debug!("Ignoring {name:?} (dot file)");
                continue;
            }
            if self.is_ignored(&entry_path) {
                debug!("Ignoring {name:?} (ignored list)");
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    debug!("Skipping {entry_path:?}: {e}");
                    continue;
                }
            };
            if file_type.is_dir() {
                self.scan(&entry_path, sources);
            } else {
                if !self.has_wanted_extension(&entry_path) {
                    debug!("Ignoring {name:?} (extension not wanted)");
                    continue;
                }
                if let Some(content) = Self::read_file(&entry_path) {
                    sources.push((entry_path, content));
                }
            }
        }
    }

    fn read_file(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Parsing {path:?}");
                Some(content)
            }
            Err(e) => {
                debug!("Skipping {path:?}: {e}");
                None
            }
        }
    }
}

/// Builds a `TaskFile` for every source that contains at least one task.
///
/// Names are made relative to `root` when possible.
pub fn scan_sources<I>(root: &Path, sources: I) -> Vec<TaskFile>
where
    I: IntoIterator<Item = (PathBuf, String)>,
{
    sources
        .into_iter()
        .filter_map(|(path, content)| {
            let name = path
                .strip_prefix(root)
                .ok()
                .filter(|relative| !relative.as_os_str().is_empty())
                .unwrap_or(&path)
                .display()
                .to_string();
            let file = TaskFile::from_content(name, path.clone(), &content);
            debug!("Found {} task(s) in {:?}", file.tasks.len(), path);
            file.has_tasks().then_some(file)
        })
        .collect()
}
