use std::path::PathBuf;

use brackets::{Task, TaskFile, config::get_config_dir, config::get_data_dir};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Vault to scan (can be a single file or a directory)
    #[arg(short, long, value_name = "PATH")]
    pub vault_path: Option<PathBuf>,
    /// Use a custom config file
    #[arg(short, long, value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Optional subcommand to run, defaults to `list`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List tasks, grouped by file
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter_args: TaskFilterArgs,
    },
    /// Print the tokens of a single task line
    Tokenize {
        /// Task line, e.g. "- [ ] example task 📅 2025-02-03 #tag"
        #[arg(allow_hyphen_values = true)]
        line: String,
    },
    /// Generates a new configuration file from the default one
    GenerateConfig { path: Option<PathBuf> },
}

/// Filter tasks based on different criteria.
#[derive(Args, Debug, Clone, Default)]
pub struct TaskFilterArgs {
    /// Tags to keep separated by comma.
    #[arg(long, alias = "wt", value_delimiter = ',')]
    pub with_tag: Vec<String>,
    /// Tags to exclude separated by comma.
    #[arg(long, alias = "nt", value_delimiter = ',')]
    pub without_tag: Vec<String>,
    /// Checkbox contents to keep separated by comma, e.g. `--status x` for done tasks.
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,
}

impl TaskFilterArgs {
    fn keeps(&self, task: &Task) -> bool {
        let tags = task.tags();
        let has_tag = |wanted: &String| tags.iter().any(|t| t == wanted);

        (self.with_tag.is_empty() || self.with_tag.iter().all(has_tag))
            && !self.without_tag.iter().any(has_tag)
            && (self.status.is_empty() || self.status.iter().any(|s| s == task.status()))
    }

    /// Keeps matching tasks, and drops files left without any.
    pub fn apply(&self, files: Vec<TaskFile>) -> Vec<TaskFile> {
        files
            .into_iter()
            .filter_map(|mut file| {
                file.tasks.retain(|task| self.keeps(task));
                file.has_tasks().then_some(file)
            })
            .collect()
    }
}

const VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    let author = clap::crate_authors!();

    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
