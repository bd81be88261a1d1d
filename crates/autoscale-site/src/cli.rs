#![forbid(unsafe_code)]

//! Command-line argument parsing for the site binary.
//!
//! Parses args by hand and layers `AUTOSCALE_*` environment overrides
//! underneath them: env first, then flags, so a flag always wins.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use autoscale_core::nav::{Page, ParsePageError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
AutoScale Site - the AutoScale agency site, in your terminal

USAGE:
    autoscale-site [OPTIONS]

OPTIONS:
    --screen-mode=MODE   Screen mode: 'alt' (default) or 'inline'
    --ui-height=N        UI height in rows for inline mode (default: 24)
    --page=SLUG          Start page (default: home)
    --case-study=ID      Start on the detail page of case study ID
    --exit-after-ms=N    Quit automatically after N milliseconds
    --log-file=PATH      Write structured logs to PATH
    --dump-catalog       Print the case-study catalog as JSON and exit
    --help, -h           Show this help message
    --version, -V        Show version

PAGES:
    1  home              Hero, featured projects, services, methodology
    2  projects          Every case study
    3  services          Services and pricing
    4  docs              How it Works
    5  contact           Book a free audit
       project-detail    One case study in depth

KEYBINDINGS:
    1-5             Jump to a page
    Tab / Shift-Tab Move focus between controls (also j / k)
    Enter           Activate the focused control
    Up/Down/PgUp/PgDn/Home/End  Scroll
    m               Toggle the menu (narrow terminals)
    Esc / b         Close the menu, or go back home
    ?               Toggle help overlay
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    AUTOSCALE_SCREEN_MODE     Override --screen-mode (alt|inline)
    AUTOSCALE_UI_HEIGHT       Override --ui-height
    AUTOSCALE_PAGE            Override --page
    AUTOSCALE_CASE_STUDY      Override --case-study
    AUTOSCALE_EXIT_AFTER_MS   Override --exit-after-ms
    AUTOSCALE_LOG_FILE        Override --log-file
    AUTOSCALE_LOG             Log filter directives (default: info)";

/// Terminal presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenModeOpt {
    #[default]
    Alt,
    Inline,
}

impl ScreenModeOpt {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value {
            "alt" | "altscreen" | "fullscreen" => Ok(Self::Alt),
            "inline" => Ok(Self::Inline),
            other => Err(CliError::InvalidScreenMode(other.to_string())),
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub screen_mode: ScreenModeOpt,
    pub ui_height: u16,
    pub start_page: Page,
    /// Case study to open on startup; overrides `start_page`.
    pub case_study: Option<String>,
    pub exit_after_ms: u64,
    pub log_file: Option<PathBuf>,
    pub dump_catalog: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            screen_mode: ScreenModeOpt::Alt,
            ui_height: 24,
            start_page: Page::Home,
            case_study: None,
            exit_after_ms: 0,
            log_file: None,
            dump_catalog: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

/// Errors from argument or environment parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidScreenMode(String),
    InvalidNumber { flag: &'static str, value: String },
    UnknownPage(ParsePageError),
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScreenMode(value) => {
                write!(f, "invalid screen mode '{value}' (expected 'alt' or 'inline')")
            }
            Self::InvalidNumber { flag, value } => {
                write!(f, "invalid value for {flag}: '{value}'")
            }
            Self::UnknownPage(err) => write!(f, "{err}"),
            Self::UnknownArgument(arg) => {
                write!(f, "unknown argument '{arg}' (try --help)")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownPage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParsePageError> for CliError {
    fn from(err: ParsePageError) -> Self {
        Self::UnknownPage(err)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        flag,
        value: value.to_string(),
    })
}

impl Opts {
    /// Parse from the process environment, exiting on `--help`,
    /// `--version`, or invalid input.
    pub fn parse() -> Self {
        match parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("autoscale-site {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    }
}

/// Parse `args` (without the program name), reading overrides through `env`.
pub fn parse_from<I, S, E>(args: I, env: E) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();

    if let Some(val) = env("AUTOSCALE_SCREEN_MODE") {
        opts.screen_mode = ScreenModeOpt::parse(&val)?;
    }
    if let Some(val) = env("AUTOSCALE_UI_HEIGHT") {
        opts.ui_height = parse_number("AUTOSCALE_UI_HEIGHT", &val)?;
    }
    if let Some(val) = env("AUTOSCALE_PAGE") {
        opts.start_page = val.parse()?;
    }
    if let Some(val) = env("AUTOSCALE_CASE_STUDY")
        && !val.trim().is_empty()
    {
        opts.case_study = Some(val);
    }
    if let Some(val) = env("AUTOSCALE_EXIT_AFTER_MS") {
        opts.exit_after_ms = parse_number("AUTOSCALE_EXIT_AFTER_MS", &val)?;
    }
    if let Some(val) = env("AUTOSCALE_LOG_FILE")
        && !val.is_empty()
    {
        opts.log_file = Some(PathBuf::from(val));
    }

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "--help" | "-h" => return Ok(Parsed::Help),
            "--version" | "-V" => return Ok(Parsed::Version),
            "--dump-catalog" => opts.dump_catalog = true,
            other => {
                if let Some(val) = other.strip_prefix("--screen-mode=") {
                    opts.screen_mode = ScreenModeOpt::parse(val)?;
                } else if let Some(val) = other.strip_prefix("--ui-height=") {
                    opts.ui_height = parse_number("--ui-height", val)?;
                } else if let Some(val) = other.strip_prefix("--page=") {
                    opts.start_page = val.parse()?;
                } else if let Some(val) = other.strip_prefix("--case-study=") {
                    opts.case_study = Some(val.to_string());
                } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                    opts.exit_after_ms = parse_number("--exit-after-ms", val)?;
                } else if let Some(val) = other.strip_prefix("--log-file=") {
                    opts.log_file = Some(PathBuf::from(val));
                } else {
                    return Err(CliError::UnknownArgument(other.to_string()));
                }
            }
        }
    }

    if opts.ui_height == 0 {
        return Err(CliError::InvalidNumber {
            flag: "--ui-height",
            value: "0".to_string(),
        });
    }
    Ok(Parsed::Run(opts))
}
