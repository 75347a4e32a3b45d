//! Finds checklist items (`- [ ] task`) in plain text files and splits each of them into
//! tokens that render back to the exact source line.

pub mod config;
pub mod logging;
pub mod parser;
pub mod task;
pub mod vault_parser;

pub use config::TasksConfig;
pub use logging::init as init_logging;
pub use parser::{
    parser_line::{MatchedLine, match_lines},
    task::{
        token::{Token, render},
        tokenize,
    },
};
pub use task::{Task, TaskFile};
pub use vault_parser::{VaultParser, scan_sources};
