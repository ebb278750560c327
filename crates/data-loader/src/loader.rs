//! Building a RatingStore from an input stream.
//!
//! Steps:
//! 1. Read the header (first non-blank line)
//! 2. Read exactly `nRatings` rating lines, ingesting each one
//! 3. Warn about (and ignore) anything left over
//!
//! Any malformed line aborts the whole load.

use crate::error::{DataLoadError, Result};
use crate::parser::{parse_header, parse_rating_line};
use crate::store::RatingStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

impl RatingStore {
    /// Load a rating stream from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;
        info!("Loading ratings from {:?}", path);
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load a rating stream from any buffered reader
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        // Pair every non-blank line with its 1-based line number
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(idx, line)| line.map(|l| (idx + 1, l)))
            .filter(|line| !matches!(line, Ok((_, l)) if l.trim().is_empty()));

        let (header_line_no, header_line) = lines
            .next()
            .transpose()?
            .ok_or_else(|| DataLoadError::ParseError {
                line: 1,
                reason: "Missing header 'nRatings nUsers nBooks'".to_string(),
            })?;
        let header = parse_header(&header_line, header_line_no)?;
        debug!(
            "Header declares {} ratings, {} users, {} books",
            header.n_ratings, header.n_users, header.n_items
        );

        let mut store = RatingStore::with_header(&header);

        for found in 0..header.n_ratings {
            let (line_no, line) = lines
                .next()
                .transpose()?
                .ok_or(DataLoadError::MissingRatings {
                    expected: header.n_ratings,
                    found,
                })?;

            let rating = parse_rating_line(&line, line_no)?;
            store
                .ingest(rating.user_id, rating.item_id, rating.raw_score)
                .map_err(|e| DataLoadError::ParseError {
                    line: line_no,
                    reason: e.to_string(),
                })?;
        }

        let leftover = lines.count();
        if leftover > 0 {
            warn!(
                "Ignoring {} line(s) after the {} declared ratings",
                leftover, header.n_ratings
            );
        }

        let (users, items, ratings) = store.counts();
        info!("Loaded {} ratings for {} users and {} books", ratings, users, items);
        Ok(store)
    }
}
