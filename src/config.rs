use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// Configuration - CLI flags with environment fallbacks
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiptFormat::Text => write!(f, "text"),
            ReceiptFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cafe", version, about = "Console café: order a drink, get a receipt")]
pub struct CliArgs {
    /// Do not print a line for every placed order
    #[arg(long, env = "CAFE_NO_CONSOLE_OBSERVER")]
    pub no_console_observer: bool,

    /// Do not collect the end-of-session order analytics
    #[arg(long, env = "CAFE_NO_ANALYTICS")]
    pub no_analytics: bool,

    /// Print Prometheus metrics when the session ends
    #[arg(long, env = "CAFE_METRICS")]
    pub metrics: bool,

    #[arg(long, value_enum, env = "CAFE_RECEIPT_FORMAT", default_value_t = ReceiptFormat::Text)]
    pub receipt_format: ReceiptFormat,

    /// tracing filter directive, logs go to stderr
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

/// Runtime configuration for one console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeConfig {
    pub console_observer: bool,
    pub analytics: bool,
    pub metrics: bool,
    pub receipt_format: ReceiptFormat,
    pub log_filter: String,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            console_observer: true,
            analytics: true,
            metrics: false,
            receipt_format: ReceiptFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CafeConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let CliArgs {
            no_console_observer,
            no_analytics,
            metrics,
            receipt_format,
            log_filter,
        } = args;

        Self {
            console_observer: !no_console_observer,
            analytics: !no_analytics,
            metrics,
            receipt_format,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let args = CliArgs::try_parse_from([
            "cafe",
            "--no-console-observer",
            "--metrics",
            "--receipt-format",
            "json",
            "--log-filter",
            "debug",
        ])
        .unwrap();

        let config = CafeConfig::from_args(args);
        assert!(!config.console_observer);
        assert!(config.analytics);
        assert!(config.metrics);
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_unknown_receipt_format() {
        let result = CliArgs::try_parse_from(["cafe", "--receipt-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CafeConfig::default();
        assert!(config.console_observer);
        assert!(config.analytics);
        assert!(!config.metrics);
        assert_eq!(config.receipt_format, ReceiptFormat::Text);
    }
}
