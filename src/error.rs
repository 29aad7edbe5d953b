//! Unified error types for fangov
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a sensor backend
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    /// Error from the fan actuator
    #[error("Actuator error: {0}")]
    Actuator(#[from] ActuatorError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// A required external tool is not installed
    #[error("Required command not found: {0}")]
    MissingDependency(String),

    /// Running without the privileges the actuator needs
    #[error("Insufficient privileges: root is required for IPMI access")]
    InsufficientPrivileges,

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Failed to install the termination signal handler
    #[error("Failed to install signal handler: {0}")]
    SignalHandler(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from running external commands
#[derive(Error, Debug)]
pub enum ShellError {
    /// The command could not be spawned at all
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited with a failure status
    #[error("Command '{command}' failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command produced output that was not valid UTF-8
    #[error("Command '{command}' produced non-UTF-8 output")]
    InvalidOutput { command: String },
}

/// Errors from sensor backends
///
/// These never escape `SensorReader::read`; they are logged as warnings and
/// the affected reading contributes zero.
#[derive(Error, Debug)]
pub enum SensorError {
    /// A sensor subprocess failed
    #[error(transparent)]
    Shell(#[from] ShellError),

    /// Sensor output could not be parsed
    #[error("Unparseable sensor output from {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    /// A sensor file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from fan actuator operations
#[derive(Error, Debug)]
pub enum ActuatorError {
    /// An ipmitool invocation failed
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid duty cycle value (raw byte must be 0-100)
    #[error("Invalid duty cycle: {0} (must be 0-100)")]
    InvalidDutyCycle(u8),

    /// Duty table not strictly increasing with fan level
    #[error("Duty table must increase strictly from Default to Max")]
    NonMonotonicDutyTable,

    /// Invalid utilization percentage
    #[error("Invalid utilization: {0}% (must be 0-100)")]
    InvalidUtilization(u8),

    /// Temperature breakpoints out of order
    #[error("Invalid {kind} thresholds: {message}")]
    InvalidThresholds {
        kind: &'static str,
        message: String,
    },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
