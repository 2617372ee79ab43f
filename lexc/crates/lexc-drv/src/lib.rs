//! lexc-drv - Lexer Driver
//!
//! Reads source files, runs the lexer over each, and writes the token
//! listing to a file or stdout. Lexical diagnostics are printed to stderr;
//! in strict mode they also make the run fail once the listing is written.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use lexc_lex::Lexer;
use lexc_util::{Diagnostic, Handler, SourceSnippet};
use tracing::{debug, info};

pub use config::{Config, OutputFormat};
pub use error::{DriverError, Result};
use output::{open_destination, TokenOutput};

/// lexc - lexical analyzer for a small C-like language
///
/// Scans each input file and writes one line per token in the form
/// `(<category> , <lexeme>, line <line>)`.
#[derive(Parser, Debug)]
#[command(name = "lexc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for a small C-like language", long_about = None)]
pub struct Cli {
    /// Source files to scan (default: from config, `program.txt`)
    pub inputs: Vec<PathBuf>,

    /// Output file, or `-` for stdout (default: from config, `output.txt`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit with failure if any lexical error was reported
    #[arg(long)]
    pub strict: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LEXC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LEXC_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "LEXC_NO_COLOR")]
    pub no_color: bool,
}

/// Effective settings after applying command-line flags over the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Files to scan, in order.
    pub inputs: Vec<PathBuf>,
    /// Destination; `-` means stdout.
    pub output: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Fail on lexical errors.
    pub strict: bool,
    /// Verbose logging.
    pub verbose: bool,
    /// Plain, uncolored log output.
    pub no_color: bool,
}

impl Settings {
    /// Merges command-line flags over `config`.
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            inputs: if cli.inputs.is_empty() {
                config.input
            } else {
                cli.inputs.clone()
            },
            output: cli.output.clone().unwrap_or(config.output),
            format: cli.format.unwrap_or(config.format),
            strict: cli.strict || config.strict,
            verbose: cli.verbose || config.verbose,
            no_color: cli.no_color || config.no_color,
        }
    }
}

/// Totals over all inputs of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files scanned.
    pub files: usize,
    /// Tokens written.
    pub tokens: usize,
    /// Tokens that classified as invalid.
    pub invalid: usize,
    /// Lexical error diagnostics reported.
    pub errors: usize,
}

/// Scans every input and writes the listing.
///
/// All inputs are read before the destination is opened, so an unreadable
/// input leaves no output behind.
///
/// # Errors
///
/// Fails on unreadable input, unwritable output, and, in strict mode, after
/// writing the listing if any lexical error was reported.
pub fn run(settings: &Settings) -> Result<RunReport> {
    let sources = settings
        .inputs
        .iter()
        .map(|path| {
            std::fs::read(path)
                .map(|bytes| (path, String::from_utf8_lossy(&bytes).into_owned()))
                .map_err(|source| DriverError::Input {
                    path: path.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let destination = open_destination(&settings.output).map_err(|source| DriverError::Output {
        path: settings.output.clone(),
        source,
    })?;
    let mut sink = TokenOutput::new(settings.format, destination);

    let mut report = RunReport::default();
    let with_headers = sources.len() > 1;

    for (path, source) in &sources {
        let name = path.display().to_string();
        if with_headers {
            sink.file_header(&name);
        }

        let handler = Handler::new();
        let summary = Lexer::new(source, &handler).run(&mut sink);
        debug!(file = %name, tokens = summary.tokens, invalid = summary.invalid, "scanned");

        for diagnostic in handler.take() {
            report.errors += usize::from(diagnostic.level.is_error());
            eprintln!("{}: {}", name, with_snippet(diagnostic, source));
        }

        report.files += 1;
        report.tokens += summary.tokens;
        report.invalid += summary.invalid;
    }

    sink.finish().map_err(|err| match err {
        DriverError::Io(source) => DriverError::Output {
            path: settings.output.clone(),
            source,
        },
        other => other,
    })?;

    info!(
        files = report.files,
        tokens = report.tokens,
        output = %settings.output.display(),
        "wrote token listing"
    );

    if settings.strict && report.errors > 0 {
        return Err(DriverError::Lexical {
            errors: report.errors,
        });
    }

    Ok(report)
}

/// Attaches the offending source line when the span can be located.
fn with_snippet(diagnostic: Diagnostic, source: &str) -> Diagnostic {
    match SourceSnippet::from_span(source, diagnostic.span) {
        Ok(snippet) => diagnostic.with_snippet(snippet),
        Err(_) => diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexc_util::{DiagnosticCode, Span};
    use tempfile::TempDir;

    fn settings(inputs: Vec<PathBuf>, output: PathBuf) -> Settings {
        Settings {
            inputs,
            output,
            format: OutputFormat::Text,
            strict: false,
            verbose: false,
            no_color: false,
        }
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["lexc"]);
        assert!(cli.inputs.is_empty());
        assert!(cli.output.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_parse_everything() {
        let cli = Cli::parse_from([
            "lexc", "a.txt", "b.txt", "-o", "-", "--format", "json", "--strict", "-c", "x.toml",
        ]);
        assert_eq!(cli.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.output, Some(PathBuf::from("-")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.strict);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_settings_fall_back_to_config() {
        let cli = Cli::parse_from(["lexc"]);
        let resolved = Settings::resolve(&cli, Config::default());
        assert_eq!(resolved.inputs, vec![PathBuf::from("program.txt")]);
        assert_eq!(resolved.output, PathBuf::from("output.txt"));
        assert_eq!(resolved.format, OutputFormat::Text);
    }

    #[test]
    fn test_settings_flags_override_config() {
        let cli = Cli::parse_from(["lexc", "in.txt", "-o", "out.txt", "--format", "text"]);
        let config = Config {
            format: OutputFormat::Json,
            strict: true,
            ..Config::default()
        };
        let resolved = Settings::resolve(&cli, config);
        assert_eq!(resolved.inputs, vec![PathBuf::from("in.txt")]);
        assert_eq!(resolved.output, PathBuf::from("out.txt"));
        assert_eq!(resolved.format, OutputFormat::Text);
        assert!(resolved.strict);
    }

    #[test]
    fn test_settings_logging_switches_come_from_either_side() {
        let config = Config {
            no_color: true,
            ..Config::default()
        };
        let resolved = Settings::resolve(&Cli::parse_from(["lexc"]), config);
        assert!(resolved.no_color);
        assert!(!resolved.verbose);

        let cli = Cli::parse_from(["lexc", "--no-color", "-v"]);
        let resolved = Settings::resolve(&cli, Config::default());
        assert!(resolved.no_color);
        assert!(resolved.verbose);
    }

    #[test]
    fn test_run_writes_listing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("program.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, "int x;\nx = 5;\n").unwrap();

        let report = run(&settings(vec![input], output.clone())).unwrap();
        assert_eq!(report.files, 1);
        assert_eq!(report.tokens, 7);
        assert_eq!(report.errors, 0);

        let listing = std::fs::read_to_string(output).unwrap();
        assert_eq!(listing.lines().count(), 7);
        assert_eq!(listing.lines().nth(3), Some("(identifier , x, line 2)"));
    }

    #[test]
    fn test_run_multiple_inputs_get_headers() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&a, "x").unwrap();
        std::fs::write(&b, "\ny").unwrap();

        run(&settings(vec![a.clone(), b.clone()], output.clone())).unwrap();

        let listing = std::fs::read_to_string(output).unwrap();
        let expected = format!(
            "== {} ==\n(identifier , x, line 1)\n== {} ==\n(identifier , y, line 2)\n",
            a.display(),
            b.display()
        );
        assert_eq!(listing, expected);
    }

    #[test]
    fn test_run_missing_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");

        let err = run(&settings(vec![dir.path().join("missing.txt")], output.clone()))
            .unwrap_err();
        assert!(matches!(err, DriverError::Input { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_strict_fails_after_writing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("program.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "s = \"open").unwrap();

        let mut strict = settings(vec![input.clone()], output.clone());
        strict.strict = true;
        let err = run(&strict).unwrap_err();
        assert!(matches!(err, DriverError::Lexical { errors: 1 }));
        assert_eq!(std::fs::read_to_string(&output).unwrap().lines().count(), 3);

        let report = run(&settings(vec![input], output)).unwrap();
        assert_eq!(report.errors, 1);
        assert_eq!(report.invalid, 1);
    }

    #[test]
    fn test_with_snippet() {
        let diagnostic = Diagnostic::error("unterminated string constant", Span::new(4, 8, 1, 5))
            .with_code(DiagnosticCode::E_UNTERMINATED_STRING);
        let rendered = with_snippet(diagnostic, "s = \"abc").to_string();
        assert!(rendered.contains("s = \"abc"));
        assert!(rendered.contains("^^^^"));

        let dummy = Diagnostic::error("no location", Span::DUMMY);
        assert!(with_snippet(dummy, "x").snippets.is_empty());
    }
}
