//! Terminal output for the armory CLI.
//!
//! Commands report progress as Cargo-style lines: a right-aligned,
//! coloured verb followed by a message, written to stderr. Item JSON and
//! the material listing go to stdout, so `armory generate --json` can be
//! piped uncoloured.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";

/// Verb column width, matching `cargo build`.
const VERB_WIDTH: usize = 12;

/// ANSI styles the printer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Yellow => "\x1b[33m",
            Style::Cyan => "\x1b[36m",
        }
    }
}

/// Status printer for CLI commands.
///
/// Colour is on when stderr is a terminal and `NO_COLOR` is unset.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: io::stderr().is_terminal() && !no_color,
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress, e.g. "    Building blades (3 swords)".
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Style::Green, verb, message);
    }

    /// A finished step, e.g. "   Generated Iron Mace -> mace-7.png".
    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Style::Green, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Style::Cyan, verb, message);
    }

    /// Substitutions and other recoverable problems.
    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Style::Yellow, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Style::Red, verb, message);
    }

    /// Secondary detail such as diagnostic codes.
    pub fn dim(&self, text: &str) -> String {
        self.paint(&[Style::Dim], text)
    }

    /// Item names.
    pub fn bold(&self, text: &str) -> String {
        self.paint(&[Style::Bold], text)
    }

    /// Paths.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(&[Style::Cyan], text)
    }

    fn paint(&self, styles: &[Style], text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let codes: String = styles.iter().map(|s| s.code()).collect();
        format!("{codes}{text}{RESET}")
    }

    /// One status line, without the trailing newline.
    fn line(&self, style: Style, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        format!("{} {}", self.paint(&[Style::Bold, style], &verb), message)
    }

    fn emit(&self, style: Style, verb: &str, message: &str) {
        let line = self.line(style, verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// Count with the right noun: `plural(3, "sword", "swords")` is "3 swords".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let noun = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, noun)
}

/// `path` relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "item", "items"), "1 item");
        assert_eq!(plural(0, "recipe", "recipes"), "0 recipes");
        assert_eq!(plural(3, "sword", "swords"), "3 swords");
    }

    #[test]
    fn test_plain_line_aligns_verb() {
        let printer = Printer::plain();
        assert_eq!(printer.line(Style::Green, "Building", "blades (3 swords)"), "    Building blades (3 swords)");
        assert_eq!(printer.line(Style::Yellow, "Warning", "x").find('W'), Some(5));
        assert_eq!(printer.dim("[armory::material::unknown]"), "[armory::material::unknown]");
    }

    #[test]
    fn test_coloured_line_wraps_verb_only() {
        let printer = Printer { color: true };
        assert_eq!(
            printer.line(Style::Red, "Error", "Broken Item"),
            "\x1b[1m\x1b[31m       Error\x1b[0m Broken Item"
        );
        assert_eq!(printer.bold("Gold Band"), "\x1b[1mGold Band\x1b[0m");
        assert_eq!(printer.cyan("dist"), "\x1b[36mdist\x1b[0m");
    }

    #[test]
    fn test_display_path_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd.join("dist").join("sword-7.png")), "dist/sword-7.png");
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(Path::new("/nonexistent/armory/sword-7.png")), "/nonexistent/armory/sword-7.png");
    }
}
