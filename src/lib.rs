pub mod cli;
pub mod config;
pub mod counts;
pub mod error;
pub mod names;
pub mod ui;

// Public API re-exports
pub use cli::{CommonOpts, CountCli, NamesCli, OutputFormat};
pub use config::{Config, CountsConfig, NamesConfig};
pub use error::{Result, TextTallyError, UserFriendlyError};

// Core functionality re-exports
pub use counts::{CountReporter, ListingMode, WordTally};
pub use names::{NameExtraction, NameExtractor, SummaryWriter};
pub use ui::{OutputFormatter, OutputMode};

use std::io;
use std::path::Path;

/// Orchestrator for the babynames binary: runs the read → extract → sort →
/// report pipeline over one file at a time.
pub struct BabyNames {
    config: Config,
    output_formatter: OutputFormatter,
    extractor: NameExtractor,
}

impl BabyNames {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let extractor = NameExtractor::new()?;

        Ok(Self {
            config,
            output_formatter,
            extractor,
        })
    }

    pub fn from_cli(cli_args: &NamesCli) -> Result<Self> {
        let config = cli_args.common.load_config()?;
        Self::new(
            config,
            output_mode_for(cli_args.common.output_format),
            cli_args.common.verbose,
            cli_args.common.quiet,
        )
    }

    /// Extract one file's result sequence without emitting anything.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<NameExtraction> {
        self.extractor.extract_from_path(path)
    }

    /// Full pipeline for one input file: extract, then emit to the selected
    /// sink. All state is rebuilt per file; a failure stops this file only
    /// and is surfaced to the caller.
    pub fn process_file(&self, path: &Path, summary: bool) -> Result<()> {
        self.output_formatter
            .debug(&format!("Processing {}", path.display()));

        let extraction = self.extract(path)?;
        self.output_formatter.debug(&format!(
            "Matched {} table rows in {}",
            extraction.rows_matched(),
            path.display()
        ));

        if summary {
            let writer = SummaryWriter::new(self.config.names.summary_suffix.clone());
            let written = writer.write(&extraction, path)?;
            self.output_formatter
                .success(&format!("Summary written to {}", written.display()));
        } else {
            println!("{}", extraction);
        }

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &TextTallyError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Orchestrator for the wordcount binary.
pub struct WordCount {
    config: Config,
    output_formatter: OutputFormatter,
}

impl WordCount {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    pub fn from_cli(cli_args: &CountCli) -> Result<Self> {
        let config = cli_args.common.load_config()?;
        Ok(Self::new(
            config,
            output_mode_for(cli_args.common.output_format),
            cli_args.common.verbose,
            cli_args.common.quiet,
        ))
    }

    /// Full alphabetical "<word> <count>" dump to stdout.
    pub fn print_words<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.report(path, ListingMode::Alphabetical)
    }

    /// Top-N-by-frequency dump to stdout, N from configuration.
    pub fn print_top<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.report(path, ListingMode::Top(self.config.counts.top_words))
    }

    fn report<P: AsRef<Path>>(&self, path: P, mode: ListingMode) -> Result<()> {
        let tally = WordTally::from_path(path.as_ref())?;
        self.output_formatter.debug(&format!(
            "{} tokens, {} distinct words in {}",
            tally.total_tokens(),
            tally.distinct_words(),
            path.as_ref().display()
        ));

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        CountReporter::new(mode).write_listing(&tally, &mut handle)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &TextTallyError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

pub fn output_mode_for(format: OutputFormat) -> OutputMode {
    match format {
        OutputFormat::Human => OutputMode::Human,
        OutputFormat::Json => OutputMode::Json,
        OutputFormat::Plain => OutputMode::Plain,
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_HTML: &str = r#"
<h3>Popularity in 1990</h3>
<table><tr><th>Rank</th><th>male</th><th>female</th></tr>
<tr><td>1</td><td>Michael</td><td>Jessica</td>
<tr><td>2</td><td>Christopher</td><td>Ashley</td>
</table>
"#;

    #[test]
    fn test_babynames_creation() {
        let app = BabyNames::new(Config::default(), OutputMode::Plain, 0, true);
        assert!(app.is_ok());
        assert_eq!(app.unwrap().config().names.summary_suffix, ".summary");
    }

    #[test]
    fn test_babynames_extract() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("baby.html");
        std::fs::write(&input, SAMPLE_HTML).unwrap();

        let app = BabyNames::new(Config::default(), OutputMode::Plain, 0, true).unwrap();
        let extraction = app.extract(&input).unwrap();
        assert_eq!(extraction.year(), "1990");
        assert_eq!(extraction.len(), 5);
    }

    #[test]
    fn test_babynames_summary_sink() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("baby.html");
        std::fs::write(&input, SAMPLE_HTML).unwrap();

        let app = BabyNames::new(Config::default(), OutputMode::Plain, 0, true).unwrap();
        app.process_file(&input, true).unwrap();

        let summary = std::fs::read_to_string(temp_dir.path().join("baby.html.summary")).unwrap();
        assert_eq!(summary, "1990\nAshley 2\nChristopher 2\nJessica 1\nMichael 1");
    }

    #[test]
    fn test_babynames_missing_year_fails() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("bad.html");
        std::fs::write(&input, "<p>no heading here</p>").unwrap();

        let app = BabyNames::new(Config::default(), OutputMode::Plain, 0, true).unwrap();
        let result = app.process_file(&input, false);
        assert!(matches!(result, Err(TextTallyError::YearNotFound { .. })));
        assert!(!input.with_extension("html.summary").exists());
    }

    #[test]
    fn test_wordcount_uses_configured_top_n() {
        let mut config = Config::default();
        config.counts.top_words = 3;
        let app = WordCount::new(config, OutputMode::Plain, 0, true);
        assert_eq!(app.config().counts.top_words, 3);
    }

    #[test]
    fn test_wordcount_missing_file() {
        let app = WordCount::new(Config::default(), OutputMode::Plain, 0, true);
        assert!(app.print_words("no-such-file.txt").is_err());
    }

    #[test]
    fn test_output_mode_mapping() {
        assert_eq!(output_mode_for(OutputFormat::Human), OutputMode::Human);
        assert_eq!(output_mode_for(OutputFormat::Json), OutputMode::Json);
        assert_eq!(output_mode_for(OutputFormat::Plain), OutputMode::Plain);
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
