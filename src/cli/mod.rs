pub mod commands;
pub mod core;
mod help;
pub mod io;
pub mod notifier;
pub mod output;
pub mod registry;
pub mod render;
mod shell;
pub mod shell_context;

pub use shell::run_cli;
