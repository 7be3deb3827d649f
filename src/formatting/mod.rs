//! Terminal styling for the text report.
//!
//! The report only needs four roles: section titles, names (authors and
//! directories), detail lines under a name, and notices. Colour is decided
//! once from the environment and the `--plain` flag.

use colored::{ColoredString, Colorize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal that is not `dumb`
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode from `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    ///
    /// `CLICOLOR_FORCE=1` wins over everything; `NO_COLOR` (any value) and
    /// `CLICOLOR=0` switch colour off.
    pub fn from_vars(
        no_color: Option<&str>,
        clicolor: Option<&str>,
        clicolor_force: Option<&str>,
    ) -> Self {
        if clicolor_force == Some("1") {
            Self::Always
        } else if no_color.is_some() || clicolor == Some("0") {
            Self::Never
        } else {
            Self::Auto
        }
    }

    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_supports_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        Self::new(ColorMode::from_vars(
            var("NO_COLOR").as_deref(),
            var("CLICOLOR").as_deref(),
            var("CLICOLOR_FORCE").as_deref(),
        ))
    }

    /// No colour, no styling; the output is byte-stable
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn style(&self) -> Box<dyn ReportStyle> {
        if self.color.enabled() {
            colored::control::set_override(true);
            Box::new(ColoredStyle)
        } else {
            Box::new(PlainStyle)
        }
    }
}

/// Decoration applied to report text by role
pub trait ReportStyle {
    fn section(&self, text: &str) -> String;
    fn name(&self, text: &str) -> String;
    fn detail(&self, text: &str) -> String;
    fn notice(&self, text: &str) -> String;
}

pub struct ColoredStyle;

impl ColoredStyle {
    fn paint(text: &str, paint: impl Fn(&str) -> ColoredString) -> String {
        paint(text).to_string()
    }
}

impl ReportStyle for ColoredStyle {
    fn section(&self, text: &str) -> String {
        Self::paint(text, |t| t.cyan().bold())
    }

    fn name(&self, text: &str) -> String {
        Self::paint(text, |t| t.bold())
    }

    fn detail(&self, text: &str) -> String {
        Self::paint(text, |t| t.dimmed())
    }

    fn notice(&self, text: &str) -> String {
        Self::paint(text, |t| t.yellow())
    }
}

/// Leaves text untouched
pub struct PlainStyle;

impl ReportStyle for PlainStyle {
    fn section(&self, text: &str) -> String {
        text.to_owned()
    }

    fn name(&self, text: &str) -> String {
        text.to_owned()
    }

    fn detail(&self, text: &str) -> String {
        text.to_owned()
    }

    fn notice(&self, text: &str) -> String {
        text.to_owned()
    }
}

fn stdout_supports_color() -> bool {
    env::var("TERM").map_or(true, |term| term != "dumb") && std::io::stdout().is_terminal()
}
