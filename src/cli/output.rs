//! Output formatting utilities
//!
//! Provides table and JSON output formatting for the one-shot commands.

use crate::cli::args::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Telemetry snapshot plus decision preview for the status command
#[derive(Debug, Clone, Serialize)]
pub struct StatusOutput {
    pub gpu_temp_c: i32,
    pub cpu_temp_c: i32,
    pub gpu_util_pct: u8,
    pub level: String,
    pub duty_percent: u8,
    pub reason: String,
}

impl TableDisplay for StatusOutput {
    fn to_table(&self) -> String {
        format!(
            "GPU Temperature: {}°C\nCPU Temperature: {}°C\nGPU Utilization: {}%\nFan Level: {} ({}%)\nReason: {}",
            self.gpu_temp_c,
            self.cpu_temp_c,
            self.gpu_util_pct,
            self.level,
            self.duty_percent,
            self.reason
        )
    }

    fn to_compact(&self) -> String {
        format!(
            "gpu={}°C cpu={}°C util={}% -> {} ({}%)",
            self.gpu_temp_c, self.cpu_temp_c, self.gpu_util_pct, self.level, self.duty_percent
        )
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_output_table() {
        let status = StatusOutput {
            gpu_temp_c: 65,
            cpu_temp_c: 42,
            gpu_util_pct: 12,
            level: "Medium".to_string(),
            duty_percent: 50,
            reason: "MEDIUM temperature or HIGH utilization".to_string(),
        };

        let table = status.to_table();
        assert!(table.contains("65°C"));
        assert!(table.contains("Medium"));
        assert!(table.contains("50%"));
    }

    #[test]
    fn test_status_output_compact_single_line() {
        let status = StatusOutput {
            gpu_temp_c: 40,
            cpu_temp_c: 25,
            gpu_util_pct: 5,
            level: "Default".to_string(),
            duty_percent: 32,
            reason: "LOW temperatures and utilization".to_string(),
        };

        assert!(!status.to_compact().contains('\n'));
    }

    #[test]
    fn test_message_display() {
        let msg = Message {
            message: "Restored automatic fan control".to_string(),
            success: true,
        };

        assert!(msg.to_table().starts_with('✓'));
    }
}
