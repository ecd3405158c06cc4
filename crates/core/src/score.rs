//! Score ledger - high score persisted as comma-separated decimals
//!
//! File format: unsigned decimal values separated by commas, e.g. `10, 25,7`.
//! A single space may sit on either side of a value. The high score is the
//! largest value present.
//!
//! Anything else (an empty field, a stray character, a double space, a value
//! that overflows `u64`) makes the whole ledger invalid: the high score drops to
//! zero and the file is truncated so the next save starts clean.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Result of parsing ledger contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerParse {
    pub high_score: u64,
    pub needs_rewrite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// Start of input or right after a comma.
    Start,
    LeadingSpace,
    Digits,
    TrailingSpace,
}

/// Streaming parser: feed bytes one at a time, then [`LedgerParser::finish`].
#[derive(Debug, Clone)]
pub struct LedgerParser {
    field: Field,
    value: u64,
    max: u64,
    invalid: bool,
}

impl LedgerParser {
    pub fn new() -> Self {
        Self {
            field: Field::Start,
            value: 0,
            max: 0,
            invalid: false,
        }
    }

    /// Feed one byte. Returns `false` once the input is known to be invalid.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.invalid {
            return false;
        }

        self.field = match (self.field, byte) {
            (Field::Start | Field::LeadingSpace | Field::Digits, b'0'..=b'9') => {
                match self
                    .value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                {
                    Some(v) => {
                        self.value = v;
                        Field::Digits
                    }
                    None => return self.reject(),
                }
            }
            (Field::Start, b' ') => Field::LeadingSpace,
            (Field::Digits, b' ') => Field::TrailingSpace,
            (Field::Digits | Field::TrailingSpace, b',') => {
                self.fold();
                Field::Start
            }
            _ => return self.reject(),
        };
        true
    }

    pub fn finish(mut self) -> LedgerParse {
        if self.invalid {
            return LedgerParse {
                high_score: 0,
                needs_rewrite: true,
            };
        }
        if matches!(self.field, Field::Digits | Field::TrailingSpace) {
            self.fold();
        }
        LedgerParse {
            high_score: self.max,
            needs_rewrite: false,
        }
    }

    fn fold(&mut self) {
        self.max = self.max.max(self.value);
        self.value = 0;
    }

    fn reject(&mut self) -> bool {
        self.invalid = true;
        false
    }
}

impl Default for LedgerParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse ledger contents held in memory.
pub fn parse_scores(bytes: &[u8]) -> LedgerParse {
    let mut parser = LedgerParser::new();
    for &b in bytes {
        if !parser.push(b) {
            break;
        }
    }
    parser.finish()
}

/// High score loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreLedger {
    high_score: u64,
}

impl ScoreLedger {
    /// Load the ledger at `path`.
    ///
    /// A missing file is an empty ledger. Corrupt contents reset the high score
    /// and truncate the file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no score file, starting at zero");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("opening {}", path.display()));
            }
        };

        let mut parser = LedgerParser::new();
        for byte in BufReader::new(file).bytes() {
            let byte = byte.with_context(|| format!("reading {}", path.display()))?;
            if !parser.push(byte) {
                break;
            }
        }
        // The reader (and its handle) is dropped before any rewrite.
        let parsed = parser.finish();

        if parsed.needs_rewrite {
            warn!(
                path = %path.display(),
                "unable to retrieve high score, time for a new record then"
            );
            Self::truncate(path)?;
        }

        Ok(Self {
            high_score: parsed.high_score,
        })
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    fn truncate(path: &Path) -> Result<()> {
        fs::write(path, b"").with_context(|| format!("truncating {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spaced_list() {
        assert_eq!(
            parse_scores(b"10, 25,7"),
            LedgerParse {
                high_score: 25,
                needs_rewrite: false
            }
        );
    }

    #[test]
    fn test_parse_empty_field_is_invalid() {
        assert_eq!(
            parse_scores(b"10,,5"),
            LedgerParse {
                high_score: 0,
                needs_rewrite: true
            }
        );
        assert!(parse_scores(b",5").needs_rewrite);
        assert!(parse_scores(b"5, ,6").needs_rewrite);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_scores(b""), LedgerParse::default());
    }

    #[test]
    fn test_last_value_counts() {
        assert_eq!(parse_scores(b"3,99").high_score, 99);
        assert_eq!(parse_scores(b"42").high_score, 42);
        assert_eq!(parse_scores(b"42,").high_score, 42);
        assert_eq!(parse_scores(b" 8 , 9 ").high_score, 9);
    }

    #[test]
    fn test_parse_rejects_stray_characters() {
        assert!(parse_scores(b"10;20").needs_rewrite);
        assert!(parse_scores(b"-1").needs_rewrite);
        assert!(parse_scores(b"1 2").needs_rewrite);
        assert!(parse_scores(b"1  ,2").needs_rewrite);
        assert!(parse_scores(b"12\n").needs_rewrite);
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        assert_eq!(parse_scores(b"18446744073709551615").high_score, u64::MAX);
        assert!(parse_scores(b"18446744073709551616").needs_rewrite);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::load(&dir.path().join("scores.txt")).unwrap();
        assert_eq!(ledger.high_score(), 0);
    }

    #[test]
    fn test_load_clean_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "10, 25,7").unwrap();

        let ledger = ScoreLedger::load(&path).unwrap();
        assert_eq!(ledger.high_score(), 25);
        assert_eq!(fs::read(&path).unwrap(), b"10, 25,7");
    }

    #[test]
    fn test_load_corrupt_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "10,,5").unwrap();

        let ledger = ScoreLedger::load(&path).unwrap();
        assert_eq!(ledger.high_score(), 0);
        assert!(fs::read(&path).unwrap().is_empty());
    }
}
