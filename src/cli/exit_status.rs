use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// linter-style tools.
///
/// - `Success` (0): Command completed; nothing is wrong
/// - `Failure` (1): Command completed but found incomplete translations
/// - `Error` (2): Command failed (config, I/O, parse, or compile error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
