use crate::error::{Result, TextTallyError};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// One body row of the popularity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub rank: u32,
    pub male_name: String,
    pub female_name: String,
}

/// Result of scraping a single HTML file: the 4-digit year followed by every
/// "name rank" entry in byte-lexicographic order. Length is always
/// 1 + 2 × (matched rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameExtraction {
    year: String,
    entries: Vec<String>,
    rows_matched: usize,
}

impl NameExtraction {
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Sorted "name rank" entries, year excluded.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn rows_matched(&self) -> usize {
        self.rows_matched
    }

    /// Full result sequence: year first, then the sorted entries.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.entries.len());
        lines.push(self.year.clone());
        lines.extend(self.entries.iter().cloned());
        lines
    }

    /// Newline-joined result for the summary file sink. No trailing newline.
    pub fn summary_text(&self) -> String {
        self.to_lines().join("\n")
    }

    pub fn len(&self) -> usize {
        1 + self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the year always occupies position 0
    }
}

impl fmt::Display for NameExtraction {
    /// Single-line list representation for the console sink.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_lines())
    }
}

/// Regex-based scraper for the baby-name popularity pages. This is
/// deliberately not a structural HTML parser: the year, the table region and
/// the body rows are located with the same patterns the reference pages were
/// written against, and rows that do not match the strict
/// rank/word-name/word-name shape are skipped without comment.
pub struct NameExtractor {
    year_re: Regex,
    table_re: Regex,
    row_re: Regex,
}

impl NameExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year_re: compile(r"Popularity\s+in\s+(\d{4})")?,
            table_re: compile(r"(?is)<table.*?Rank.*?male.*?female.*?</tr>(.*?</table>)")?,
            row_re: compile(r"<td>(\d+)</td><td>(\w+)</td><td>(\w+)</td>")?,
        })
    }

    /// Read `path` and extract its result sequence. The file is read as raw
    /// bytes and lossily converted so an odd encoding never aborts the parse.
    pub fn extract_from_path<P: AsRef<Path>>(&self, path: P) -> Result<NameExtraction> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let html = String::from_utf8_lossy(&bytes);
        self.extract_from_html(&html, &path.display().to_string())
    }

    /// Extract from already-loaded HTML. `origin` names the source in errors.
    pub fn extract_from_html(&self, html: &str, origin: &str) -> Result<NameExtraction> {
        let year = self
            .find_year(html)
            .ok_or_else(|| TextTallyError::YearNotFound {
                path: origin.to_string(),
            })?;

        let rows = self
            .find_rows(html)
            .ok_or_else(|| TextTallyError::TableNotFound {
                path: origin.to_string(),
            })?;

        let mut entries = Vec::with_capacity(rows.len() * 2);
        for row in &rows {
            entries.push(format!("{} {}", row.male_name, row.rank));
            entries.push(format!("{} {}", row.female_name, row.rank));
        }
        // Byte-wise comparison gives the case-sensitive ASCII ordering
        entries.sort();

        Ok(NameExtraction {
            year,
            entries,
            rows_matched: rows.len(),
        })
    }

    fn find_year(&self, html: &str) -> Option<String> {
        self.year_re
            .captures(html)
            .map(|caps| caps[1].to_string())
    }

    /// Locate the ranking table region and collect its body rows, in document
    /// order. `None` when no table-like region exists at all.
    fn find_rows(&self, html: &str) -> Option<Vec<RankedRow>> {
        let caps = self.table_re.captures(html)?;
        let region = caps.get(1).map(|m| m.as_str())?;

        let rows = self
            .row_re
            .captures_iter(region)
            .filter_map(|row| {
                Some(RankedRow {
                    rank: row[1].parse().ok()?,
                    male_name: row[2].to_string(),
                    female_name: row[3].to_string(),
                })
            })
            .collect();

        Some(rows)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| TextTallyError::Config {
        message: format!("Failed to compile pattern {}: {}", pattern, e),
    })
}
