//! CLI domain: parse, route, help, output, and presentation only.
//! Store logic lives in `store` and `generator`; the route table only dispatches.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ShowFormat};
pub use presentation::{format_tree_json, format_tree_text, StoreTree};
pub use route::RunContext;
