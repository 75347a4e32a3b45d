mod cli;
mod errors;

use brackets::{
    TaskFile, VaultParser, init_logging,
    config::{ProtoConfig, TasksConfig},
    render, tokenize,
};
use clap::Parser;
use cli::{Cli, Commands, TaskFilterArgs};
use color_eyre::Result;

fn main() -> Result<()> {
    crate::errors::init()?;
    init_logging()?;

    let args = Cli::parse();
    match args.command.clone().unwrap_or(Commands::List {
        filter_args: TaskFilterArgs::default(),
    }) {
        Commands::GenerateConfig { path } => TasksConfig::generate_config(path),
        Commands::Tokenize { line } => {
            let tokens = tokenize(&line);
            for token in &tokens {
                println!("{token:?}");
            }
            println!("=> {}", render(&tokens));
            Ok(())
        }
        Commands::List { filter_args } => {
            let config = TasksConfig::new(&ProtoConfig {
                vault_path: args.vault_path,
                config_path: args.config_path,
            })?;
            let files = VaultParser::new(config).scan_vault()?;
            print_files(&filter_args.apply(files));
            Ok(())
        }
    }
}

fn print_files(files: &[TaskFile]) {
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{file}");
    }
}
