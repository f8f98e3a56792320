pub mod build;
pub mod completions;
pub mod generate;
pub mod materials;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::diagnostic::LOG_TARGET;

/// armory - Procedural pixel-art item sprites
#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log engine debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one item and write its PNG
    Generate(generate::GenerateArgs),

    /// Generate every recipe in a project (uses armory.yaml when present)
    Build(build::BuildArgs),

    /// List the built-in material catalog
    Materials(materials::MaterialsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Log filter for the binary: `RUST_LOG` when set, otherwise `warn` (or
/// `debug` with `-v`).
///
/// Item diagnostics are muted by default because commands already print
/// them through the [`Printer`](crate::output::Printer).
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::new(format!("{},{}=off", level, LOG_TARGET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{Diagnostic, UNKNOWN_MATERIAL};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged(verbose: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(default_filter(verbose))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            Diagnostic::warning(UNKNOWN_MATERIAL, "unknown blade material 'UNKNOWNIUM'").emit();
            tracing::warn!(target: "px_armory::assemble", "engine warning");
            tracing::debug!(target: "px_armory::assemble", "drew blade");
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_filter_leaves_diagnostics_to_printer() {
        let out = logged(false);
        assert!(out.contains("engine warning"));
        assert!(!out.contains("UNKNOWNIUM"));
        assert!(!out.contains("drew blade"));
    }

    #[test]
    fn test_verbose_filter_shows_debug_events() {
        let out = logged(true);
        assert!(out.contains("drew blade"));
        assert!(!out.contains("UNKNOWNIUM"));
    }
}
