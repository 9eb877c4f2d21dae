//! `nbyte` - highlight characters by their UTF-8 byte length
//!
//! # Usage
//!
//! ```bash
//! nbyte 'Aあ🙇🏼‍♀️'
//! echo 'か゚' | nbyte --enable 3 --format list
//! nbyte --sample --all --format html --inline-styles > out.html
//! ```

use nbyte_highlighter::highlight::{LossyHighlight, SAMPLE_INPUT, Summary, highlight_bytes};
use nbyte_highlighter::terminal::stdout_color_support;
use nbyte_highlighter::{
    AnsiRenderer, ByteCategory, ColorMode, Highlight, HtmlRenderer, ListRenderer, LogLevel,
    SegmentRenderer, Selection, set_log_callback,
};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "nbyte - highlight characters by UTF-8 byte length

USAGE:
    nbyte [OPTIONS] [TEXT]...

Text comes from TEXT arguments (joined with spaces), --file, --sample, or
standard input, in that order of preference.

OPTIONS:
    -h, --help              Print this help message and exit
    -e, --enable <LIST>     Highlight these categories (e.g. 1,2 or 4+)
    -d, --disable <LIST>    Stop highlighting these categories
    -a, --all               Highlight every category
        --none              Highlight nothing
    -f, --format <FMT>      Output format: ansi, html, list (default: ansi)
        --color <MODE>      auto, truecolor, 256, 16, none (default: auto)
        --inline-styles     HTML only: add style attributes
        --only-highlighted  list only: skip clusters that are not selected
        --file <PATH>       Read text from a file
        --sample            Use the built-in sample text
    -s, --summary           Print per-category counts to stderr
    -v, --verbose           Print diagnostics to stderr

Categories default to 4+ only. Colors: 1 blue, 2 green, 3 yellow, 4+ red.
Nothing is stored or sent anywhere.
";

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Ansi,
    Html,
    List,
}

impl Format {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ansi" | "terminal" => Some(Self::Ansi),
            "html" => Some(Self::Html),
            "list" | "tsv" => Some(Self::List),
            _ => None,
        }
    }
}

/// Where the text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Stdin,
    Args(String),
    File(PathBuf),
    Sample,
}

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub selection: Selection,
    pub format: Format,
    /// `None` means detect from the terminal.
    pub color_mode: Option<ColorMode>,
    pub inline_styles: bool,
    pub only_highlighted: bool,
    pub source: Source,
    pub summary: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

fn parse_categories(list: &str) -> Result<Vec<ByteCategory>, String> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<ByteCategory>().map_err(|e| e.to_string()))
        .collect()
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut text: Vec<String> = Vec::new();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            macro_rules! value {
                ($flag:expr) => {
                    match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error(format!("{} requires a value", $flag)),
                    }
                };
            }

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "-e" | "--enable" | "-d" | "--disable" => {
                    let enable = matches!(arg_str.as_ref(), "-e" | "--enable");
                    let value = value!(arg_str);
                    match parse_categories(&value) {
                        Ok(categories) => {
                            for category in categories {
                                config.selection = config.selection.toggle(category, enable);
                            }
                        }
                        Err(msg) => return ParseResult::Error(msg),
                    }
                }

                "-a" | "--all" => config.selection = Selection::all(),
                "--none" => config.selection = Selection::none(),

                "-f" | "--format" => {
                    let value = value!("--format");
                    match Format::from_str(&value) {
                        Some(format) => config.format = format,
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --format: {value} (valid: ansi, html, list)"
                            ));
                        }
                    }
                }

                "--color" => {
                    let value = value!("--color");
                    if value.eq_ignore_ascii_case("auto") {
                        config.color_mode = None;
                    } else {
                        match ColorMode::from_name(&value) {
                            Some(mode) => config.color_mode = Some(mode),
                            None => {
                                return ParseResult::Error(format!(
                                    "Unknown --color: {value} \
                                     (valid: auto, truecolor, 256, 16, none)"
                                ));
                            }
                        }
                    }
                }

                "--inline-styles" => config.inline_styles = true,
                "--only-highlighted" => config.only_highlighted = true,

                "--file" => {
                    let value = value!("--file");
                    config.source = Source::File(PathBuf::from(value));
                }

                "--sample" => config.source = Source::Sample,
                "-s" | "--summary" => config.summary = true,
                "-v" | "--verbose" => config.verbose = true,

                "--" => {
                    text.extend(args.by_ref().map(|a| a.to_string_lossy().to_string()));
                }

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    text.push(other.to_string());
                }
            }
        }

        if !text.is_empty() {
            config.source = Source::Args(text.join(" "));
        }

        ParseResult::Config(config)
    }

    /// Color mode after resolving `auto` against the terminal.
    #[must_use]
    pub fn resolved_color_mode(&self) -> ColorMode {
        self.color_mode
            .unwrap_or_else(|| ColorMode::from(stdout_color_support()))
    }
}

// ============================================================================
// Running
// ============================================================================

fn read_source(source: &Source) -> io::Result<Vec<u8>> {
    match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Source::Args(text) => Ok(text.clone().into_bytes()),
        Source::File(path) => std::fs::read(path),
        Source::Sample => Ok(SAMPLE_INPUT.as_bytes().to_vec()),
    }
}

fn render(config: &Config, result: &Highlight, out: impl Write) -> nbyte_highlighter::Result<()> {
    match config.format {
        Format::Ansi => {
            AnsiRenderer::with_color_mode(out, config.resolved_color_mode()).render(result)
        }
        Format::Html => HtmlRenderer::new(out)
            .with_inline_styles(config.inline_styles)
            .render(result),
        Format::List => ListRenderer::new(out)
            .only_highlighted(config.only_highlighted)
            .render(result),
    }
}

fn write_summary(summary: &Summary, err: &mut impl Write) -> io::Result<()> {
    for category in ByteCategory::ALL {
        writeln!(
            err,
            "{:>3} bytes: {}",
            category.to_string(),
            summary.count(category)
        )?;
    }
    writeln!(
        err,
        "clusters: {}, bytes: {}, highlighted: {}, decomposed: {}",
        summary.total_clusters(),
        summary.total_bytes,
        summary.highlighted,
        summary.decomposed
    )
}

fn run(config: &Config) -> nbyte_highlighter::Result<()> {
    if config.verbose {
        set_log_callback(|level, message| {
            eprintln!("[{}] {message}", level.as_str());
        });
    } else {
        set_log_callback(|level, message| {
            if level >= LogLevel::Warn {
                eprintln!("[{}] {message}", level.as_str());
            }
        });
    }

    let bytes = read_source(&config.source)?;
    let LossyHighlight { highlight, .. } = highlight_bytes(&bytes, &config.selection)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(config, &highlight, &mut out)?;
    let ends_with_newline = bytes.last() == Some(&b'\n');
    if config.format != Format::List && !ends_with_newline {
        writeln!(out)?;
    }
    out.flush()?;

    if config.summary {
        write_summary(&highlight.summary(), &mut io::stderr().lock())?;
    }
    Ok(())
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(nbyte_highlighter::Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            ExitCode::from(2)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    fn config(strs: &[&str]) -> Config {
        match Config::from_args(args(strs)) {
            ParseResult::Config(c) => c,
            ParseResult::Help => panic!("Expected Config, got Help"),
            ParseResult::Error(msg) => panic!("Expected Config, got Error({msg})"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = config(&["nbyte"]);
        assert_eq!(config.selection, Selection::default());
        assert_eq!(config.format, Format::Ansi);
        assert_eq!(config.color_mode, None);
        assert_eq!(config.source, Source::Stdin);
        assert!(!config.summary);
    }

    #[test]
    fn test_help_flag() {
        assert!(matches!(
            Config::from_args(args(&["nbyte", "--help"])),
            ParseResult::Help
        ));
    }

    #[test]
    fn test_enable_and_disable() {
        let config = config(&["nbyte", "--enable", "1,3", "-d", "4+"]);
        assert_eq!(
            config.selection.enabled().collect::<Vec<_>>(),
            vec![ByteCategory::One, ByteCategory::Three]
        );
    }

    #[test]
    fn test_invalid_category_is_error() {
        let result = Config::from_args(args(&["nbyte", "--enable", "5"]));
        match result {
            ParseResult::Error(msg) => assert!(msg.contains("invalid byte category: 5")),
            _ => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(matches!(
            Config::from_args(args(&["nbyte", "--format"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_format_and_color() {
        let config = config(&["nbyte", "-f", "html", "--color", "256", "--inline-styles"]);
        assert_eq!(config.format, Format::Html);
        assert_eq!(config.color_mode, Some(ColorMode::Color256));
        assert!(config.inline_styles);
        assert_eq!(config.resolved_color_mode(), ColorMode::Color256);
    }

    #[test]
    fn test_unknown_option() {
        assert!(matches!(
            Config::from_args(args(&["nbyte", "--bogus"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_positional_text_joined() {
        let config = config(&["nbyte", "hello", "world"]);
        assert_eq!(config.source, Source::Args("hello world".to_string()));
    }

    #[test]
    fn test_double_dash_allows_leading_hyphen() {
        let config = config(&["nbyte", "--", "-x", "y"]);
        assert_eq!(config.source, Source::Args("-x y".to_string()));
    }

    #[test]
    fn test_sample_and_file_sources() {
        assert_eq!(config(&["nbyte", "--sample"]).source, Source::Sample);
        assert_eq!(
            config(&["nbyte", "--file", "in.txt"]).source,
            Source::File(PathBuf::from("in.txt"))
        );
    }

    #[test]
    fn test_render_list_to_buffer() {
        let config = config(&["nbyte", "-f", "list", "--all"]);
        let result = nbyte_highlighter::highlight("a", &config.selection).unwrap();
        let mut buf = Vec::new();
        render(&config, &result, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\ta\t1\t1\ttrue\tU+0061\n");
    }

    #[test]
    fn test_summary_text() {
        let result = nbyte_highlighter::highlight("a\u{20BB7}", &Selection::default()).unwrap();
        let mut buf = Vec::new();
        write_summary(&result.summary(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  1 bytes: 1"));
        assert!(text.contains(" 4+ bytes: 1"));
        assert!(text.contains("clusters: 2, bytes: 5, highlighted: 1, decomposed: 0"));
    }
}
