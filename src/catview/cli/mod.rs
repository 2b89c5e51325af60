mod args;
mod commands;
mod logging;
mod print;
mod shell;

pub use commands::run;
