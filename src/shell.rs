//! Subprocess helper
//!
//! Both sensing and actuation shell out to vendor tools; this module wraps
//! `std::process::Command` with error context carrying the full command line.

use crate::error::ShellError;
use std::process::Command;

/// Run a command and return its trimmed stdout
///
/// # Errors
/// Returns `ShellError` when the command cannot be spawned, exits non-zero,
/// or prints non-UTF-8 output. The error message carries the command line
/// and captured stderr.
pub fn run(program: &str, args: &[&str]) -> Result<String, ShellError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ShellError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let command = render(program, args);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ShellError::Failed {
            command,
            status: output.status.to_string(),
            stderr,
        });
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| ShellError::InvalidOutput { command })?;
    Ok(stdout.trim().to_string())
}

/// Check whether a command is available on PATH
pub fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn render(program: &str, args: &[&str]) -> String {
    let mut command = String::from(program);
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let out = run("echo", &["hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_run_missing_program() {
        let result = run("definitely-not-a-real-command-fangov", &[]);
        assert!(matches!(result, Err(ShellError::Spawn { .. })));
    }

    #[test]
    fn test_run_nonzero_exit() {
        let result = run("false", &[]);
        assert!(matches!(result, Err(ShellError::Failed { .. })));
    }

    #[test]
    fn test_command_exists() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-command-fangov"));
    }

    #[test]
    fn test_render_includes_args() {
        let err = run("false", &["raw", "0x30"]).unwrap_err();
        assert!(err.to_string().contains("false raw 0x30"));
    }
}
