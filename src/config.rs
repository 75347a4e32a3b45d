use std::{
    env,
    fs::{File, create_dir_all},
    io::Write,
    path::PathBuf,
};

use color_eyre::{Result, eyre::bail};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, info};

const CONFIG: &str = include_str!("../.config/config.toml");
const CONFIG_FILE_NAME: &str = "config";

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TasksConfig {
    /// Directory or file to scan.
    #[serde(default)]
    pub vault_path: PathBuf,
    #[serde(default)]
    pub parse_dot_files: bool,
    #[serde(default)]
    pub ignored: Vec<PathBuf>,
    /// Extensions of the files to read, every file is read when empty.
    #[serde(default)]
    pub file_extensions: Vec<String>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        let mut config: Self =
            toml::from_str(CONFIG).expect("embedded default configuration is valid");
        if cfg!(test) {
            config.vault_path = PathBuf::from("./test-vault");
        }
        config
    }
}

/// What the command line knows before the configuration is loaded.
pub struct ProtoConfig {
    pub vault_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

impl TasksConfig {
    /// Loads the configuration from the config directory (or the given file) and applies
    /// command line overrides.
    ///
    /// # Errors
    ///
    /// Will return an error if a configuration file exists but can't be parsed.
    pub fn new(params: &ProtoConfig) -> Result<Self> {
        let data_dir = get_data_dir();
        let config_path = params.config_path.clone().unwrap_or_else(get_config_dir);
        debug!(
            "Using data directory at {} and config directory at {}",
            data_dir.display(),
            config_path.display()
        );

        // A config file was provided
        let builder = if config_path.is_file() {
            config::Config::builder()
                .set_default("data_dir", data_dir.to_string_lossy().to_string())?
                .add_source(config::File::from(config_path))
        } else {
            let mut builder = config::Config::builder()
                .set_default("data_dir", data_dir.to_string_lossy().to_string())?
                .set_default("config_dir", config_path.to_string_lossy().to_string())?;

            let config_files = [
                (
                    format!("{CONFIG_FILE_NAME}.json5"),
                    config::FileFormat::Json5,
                ),
                (format!("{CONFIG_FILE_NAME}.json"), config::FileFormat::Json),
                (format!("{CONFIG_FILE_NAME}.yaml"), config::FileFormat::Yaml),
                (format!("{CONFIG_FILE_NAME}.toml"), config::FileFormat::Toml),
                (format!("{CONFIG_FILE_NAME}.ini"), config::FileFormat::Ini),
            ];
            let mut found_config = false;
            for (file, format) in &config_files {
                let source = config::File::from(config_path.join(file))
                    .format(*format)
                    .required(false);
                builder = builder.add_source(source);
                if config_path.join(file).exists() {
                    found_config = true;
                }
            }
            if !found_config && !cfg!(test) {
                info!(
                    "No configuration file found.\nCreate one at {config_path:?} or generate one using `brackets generate-config`"
                );
            }
            builder
        };

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        if let Some(path) = &params.vault_path {
            cfg.vault_path.clone_from(path);
        }
        Ok(cfg)
    }

    /// Writes the default configuration file to `path` or to the config directory.
    ///
    /// # Errors
    ///
    /// Will return an error if the directory or the file can't be created.
    pub fn generate_config(path: Option<PathBuf>) -> Result<()> {
        let config_dir = path.unwrap_or_else(get_config_dir);
        let dest = config_dir.join(format!("{CONFIG_FILE_NAME}.toml"));
        if create_dir_all(config_dir).is_err() {
            bail!("Failed to create config directory at {dest:?}".to_owned());
        }
        if let Ok(mut file) = File::create(dest.clone()) {
            if file.write_all(CONFIG.as_bytes()).is_err() {
                bail!("Failed to write default config at {dest:?}".to_owned());
            }
        } else {
            bail!("Failed to create default config at {dest:?}".to_owned());
        }
        println!(
            "Configuration has been created at {}. You can fill the `vault_path` value to set a default vault.",
            dest.display()
        );
        Ok(())
    }
}

pub fn get_data_dir() -> PathBuf {
    DATA_FOLDER.clone().map_or_else(
        || {
            project_directory().map_or_else(
                || PathBuf::from(".").join(".data"),
                |proj_dirs| proj_dirs.data_local_dir().to_path_buf(),
            )
        },
        |s| s,
    )
}

pub fn get_config_dir() -> PathBuf {
    CONFIG_FOLDER.clone().map_or_else(
        || {
            project_directory().map_or_else(
                || PathBuf::from(".").join(".config"),
                |proj_dirs| proj_dirs.config_local_dir().to_path_buf(),
            )
        },
        |s| s,
    )
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "calebhearth", env!("CARGO_PKG_NAME"))
}
