use crate::error::{Result, TextTallyError};
use crate::names::NameExtraction;
use std::fs;
use std::path::{Path, PathBuf};

/// File sink for extraction results: `<input><suffix>`, one entry per line.
pub struct SummaryWriter {
    suffix: String,
}

impl SummaryWriter {
    pub fn new<S: Into<String>>(suffix: S) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Derived output path: the suffix is appended to the full input filename,
    /// extension included (`baby.html` becomes `baby.html.summary`).
    pub fn summary_path(&self, input: &Path) -> PathBuf {
        let mut name = input.as_os_str().to_os_string();
        name.push(&self.suffix);
        PathBuf::from(name)
    }

    /// Write the newline-joined result sequence next to the input file and
    /// return the path written.
    pub fn write(&self, extraction: &NameExtraction, input: &Path) -> Result<PathBuf> {
        let path = self.summary_path(input);

        fs::write(&path, extraction.summary_text()).map_err(|e| TextTallyError::SummaryWrite {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(path)
    }
}

impl Default for SummaryWriter {
    fn default() -> Self {
        Self::new(".summary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameExtractor;
    use tempfile::TempDir;

    const SAMPLE_HTML: &str = r#"
<h3>Popularity in 1990</h3>
<table><tr><th>Rank</th><th>male</th><th>female</th></tr>
<tr><td>1</td><td>Michael</td><td>Jessica</td>
<tr><td>2</td><td>Christopher</td><td>Ashley</td>
</table>
"#;

    fn sample_extraction() -> NameExtraction {
        NameExtractor::new()
            .unwrap()
            .extract_from_html(SAMPLE_HTML, "baby.html")
            .unwrap()
    }

    #[test]
    fn test_summary_path_keeps_extension() {
        let writer = SummaryWriter::default();
        assert_eq!(
            writer.summary_path(Path::new("baby.html")),
            PathBuf::from("baby.html.summary")
        );
        assert_eq!(
            writer.summary_path(Path::new("dir/baby1990.html")),
            PathBuf::from("dir/baby1990.html.summary")
        );
    }

    #[test]
    fn test_custom_suffix() {
        let writer = SummaryWriter::new(".out");
        assert_eq!(
            writer.summary_path(Path::new("baby.html")),
            PathBuf::from("baby.html.out")
        );
    }

    #[test]
    fn test_write_summary_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("baby.html");
        std::fs::write(&input, SAMPLE_HTML).unwrap();

        let writer = SummaryWriter::default();
        let written = writer.write(&sample_extraction(), &input).unwrap();

        assert_eq!(written, temp_dir.path().join("baby.html.summary"));
        let content = std::fs::read_to_string(&written).unwrap();
        assert_eq!(
            content,
            "1990\nAshley 2\nChristopher 2\nJessica 1\nMichael 1"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let writer = SummaryWriter::default();
        let input = Path::new("missing-dir/baby.html");

        let result = writer.write(&sample_extraction(), input);
        assert!(matches!(
            result,
            Err(TextTallyError::SummaryWrite { .. })
        ));
    }
}
