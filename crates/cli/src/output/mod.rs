//! Output configuration and formatting

mod formatter;

pub use formatter::Formatter;

/// Global output flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Emit strict JSON instead of human-readable text
    pub json: bool,
    /// Suppress non-essential output (errors still print)
    pub quiet: bool,
    /// Disable colored output
    pub no_color: bool,
}
