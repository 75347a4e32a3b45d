pub mod parser_line;
pub mod task;
