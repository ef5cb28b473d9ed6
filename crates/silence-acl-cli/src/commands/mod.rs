//! CLI commands

pub mod check;
pub mod permit;
pub mod validate;

/// Output flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub verbose: bool,
    pub json: bool,
}
