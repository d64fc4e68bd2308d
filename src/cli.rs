use crate::config::Config;
use crate::error::Result;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Options shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct CommonOpts {
    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostic messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonOpts {
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_with_defaults(self.config.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "babynames")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract baby-name popularity rankings from HTML tables")]
#[command(
    long_about = "babynames scans HTML files for a 'Popularity in YYYY' heading and a \
                  rank/male/female table, then prints the year followed by every \
                  'name rank' entry in sorted order."
)]
#[command(after_help = "EXAMPLES:\n  \
    babynames baby1990.html\n  \
    babynames --summaryfile baby1990.html baby1992.html\n  \
    babynames --summaryfile --quiet baby/*.html")]
#[command(arg_required_else_help = true)]
pub struct NamesCli {
    /// Write each result to <file>.summary instead of stdout
    #[arg(long)]
    pub summaryfile: bool,

    /// HTML files to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonOpts,
}

#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count word frequencies in a text file")]
#[command(
    long_about = "wordcount splits a text file on whitespace, lowercases every token and \
                  prints either the full alphabetical word/count listing or the most \
                  frequent words."
)]
#[command(after_help = "EXAMPLES:\n  \
    wordcount --count alice.txt\n  \
    wordcount --topcount alice.txt")]
#[command(arg_required_else_help = true)]
pub struct CountCli {
    /// Print every word with its count, sorted by word
    #[arg(long, conflicts_with = "topcount")]
    pub count: bool,

    /// Print only the most frequent words, sorted by count
    #[arg(long)]
    pub topcount: bool,

    /// Text file to process
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonOpts,
}

impl CountCli {
    /// Exactly one of --count/--topcount must be selected. clap enforces the
    /// conflict; the neither-given case is checked here.
    pub fn has_mode(&self) -> bool {
        self.count || self.topcount
    }
}

/// Render a clap parse failure and map it to a process exit code. Help and
/// version requests are not failures; everything else (wrong argument count,
/// unknown option) exits 1.
pub fn report_parse_error(error: clap::Error) -> i32 {
    let code = match error.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => 1,
    };
    let _ = error.print();
    code
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}
