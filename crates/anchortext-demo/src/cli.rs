#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually, with environment overrides under the
//! `ANCHORTEXT_DEMO_*` prefix. Flags beat environment values, which beat
//! defaults.

use std::env;
use std::fmt;
use std::process;

use anchortext_text::TabSetting;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
anchortext demo: labels placed around a box on a character grid

USAGE:
    anchortext-demo [OPTIONS]

OPTIONS:
    --cols=N          Canvas width in cells (default: 60)
    --rows=N          Canvas height in cells (default: 16)
    --label=TEXT      Label drawn above the box (default: anchortext)
    --tab=N|measured  Tab length in cells, or measured from the font (default: 8)
    --help, -h        Show this help message
    --version, -V     Show version

ENVIRONMENT VARIABLES:
    ANCHORTEXT_DEMO_COLS    Override --cols
    ANCHORTEXT_DEMO_ROWS    Override --rows
    ANCHORTEXT_DEMO_LABEL   Override --label
    ANCHORTEXT_DEMO_TAB     Override --tab
    ANCHORTEXT_LOG          Log filter (same syntax as RUST_LOG, default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Canvas width in cells.
    pub cols: u16,
    /// Canvas height in cells.
    pub rows: u16,
    /// Label drawn above the box.
    pub label: String,
    /// Tab stop configuration.
    pub tab: TabSetting,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            cols: 60,
            rows: 16,
            label: "anchortext".into(),
            tab: TabSetting::Fixed(8),
        }
    }
}

/// Why argument parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `--help` was requested.
    Help,
    /// `--version` was requested.
    Version,
    /// A flag had a value that could not be used.
    InvalidValue { flag: &'static str, value: String },
    /// An argument was not recognized.
    UnknownArg(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help requested"),
            Self::Version => f.write_str("version requested"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArg(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_dimension(flag: &'static str, value: &str) -> Result<u16, CliError> {
    match value.trim().parse::<u16>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidValue {
            flag,
            value: value.to_owned(),
        }),
    }
}

fn parse_tab(value: &str) -> Result<TabSetting, CliError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("measured") {
        return Ok(TabSetting::Measured);
    }
    match trimmed.parse::<i32>() {
        Ok(n) if n > 0 => Ok(TabSetting::Fixed(n)),
        _ => Err(CliError::InvalidValue {
            flag: "--tab",
            value: value.to_owned(),
        }),
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version` or a bad argument.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(CliError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(CliError::Version) => {
                println!("anchortext-demo {VERSION}");
                process::exit(0);
            }
            Err(err @ CliError::InvalidValue { .. }) => {
                eprintln!("{err}");
                process::exit(1);
            }
            Err(err @ CliError::UnknownArg(_)) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse from explicit arguments and an environment lookup.
    ///
    /// Unusable environment values are ignored; unusable flag values are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] for help/version requests and bad arguments.
    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("ANCHORTEXT_DEMO_COLS")
            && let Ok(n) = parse_dimension("ANCHORTEXT_DEMO_COLS", &val)
        {
            opts.cols = n;
        }
        if let Some(val) = get_env("ANCHORTEXT_DEMO_ROWS")
            && let Ok(n) = parse_dimension("ANCHORTEXT_DEMO_ROWS", &val)
        {
            opts.rows = n;
        }
        if let Some(val) = get_env("ANCHORTEXT_DEMO_LABEL")
            && !val.trim().is_empty()
        {
            opts.label = val;
        }
        if let Some(val) = get_env("ANCHORTEXT_DEMO_TAB")
            && let Ok(tab) = parse_tab(&val)
        {
            opts.tab = tab;
        }

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Err(CliError::Help),
                "--version" | "-V" => return Err(CliError::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--cols=") {
                        opts.cols = parse_dimension("--cols", val)?;
                    } else if let Some(val) = other.strip_prefix("--rows=") {
                        opts.rows = parse_dimension("--rows", val)?;
                    } else if let Some(val) = other.strip_prefix("--label=") {
                        opts.label = val.to_owned();
                    } else if let Some(val) = other.strip_prefix("--tab=") {
                        opts.tab = parse_tab(val)?;
                    } else {
                        return Err(CliError::UnknownArg(other.to_owned()));
                    }
                }
            }
        }

        Ok(opts)
    }
}
