//! Parser for the whitespace-separated rating input.
//!
//! Format:
//! - header: `nRatings nUsers nBooks`
//! - rating: `userId itemId rawScore`
//!
//! Tokens may be separated by any whitespace (spaces or tabs). Each
//! function here looks at a single line; stitching lines into a
//! RatingStore happens in the loader.

use crate::error::{DataLoadError, Result};
use crate::types::{InputHeader, ItemId, UserId};
use std::str::FromStr;

/// One parsed rating line, before it has been checked against the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingLine {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub raw_score: f64,
}

/// Split a line into exactly `N` whitespace-separated tokens
fn split_fields<const N: usize>(line: &str, line_no: usize) -> Result<[&str; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens
        .try_into()
        .map_err(|tokens: Vec<&str>| DataLoadError::FieldCountMismatch {
            expected: N,
            found: tokens.len(),
            line: line_no,
        })
}

/// Parse a single token, naming the field in the error
fn parse_field<T>(token: &str, field: &str, line_no: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token.parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid {}: '{}' ({})", field, token, e),
    })
}

/// Parse the header line
///
/// Example: "3 2 2" -> 3 ratings, 2 users, 2 books
pub fn parse_header(line: &str, line_no: usize) -> Result<InputHeader> {
    let [n_ratings, n_users, n_items] = split_fields::<3>(line, line_no)?;

    Ok(InputHeader {
        n_ratings: parse_field(n_ratings, "nRatings", line_no)?,
        n_users: parse_id_count(n_users, "nUsers", line_no)?,
        n_items: parse_id_count(n_items, "nBooks", line_no)?,
    })
}

/// Parse a user or book count. Ids are `u32`, so the count can't exceed
/// `u32::MAX`.
fn parse_id_count(token: &str, field: &str, line_no: usize) -> Result<usize> {
    let count: usize = parse_field(token, field, line_no)?;
    if count > UserId::MAX as usize {
        return Err(DataLoadError::ParseError {
            line: line_no,
            reason: format!("{} = {} exceeds the id range (max {})", field, count, UserId::MAX),
        });
    }
    Ok(count)
}

/// Parse one rating line
///
/// Example: "0\t1\t4.5" -> user 0, item 1, raw score 4.5
pub fn parse_rating_line(line: &str, line_no: usize) -> Result<RatingLine> {
    let [user_id, item_id, raw_score] = split_fields::<3>(line, line_no)?;

    Ok(RatingLine {
        user_id: parse_field(user_id, "userId", line_no)?,
        item_id: parse_field(item_id, "itemId", line_no)?,
        raw_score: parse_field(raw_score, "rating", line_no)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header = parse_header("3 2 2", 1).unwrap();
        assert_eq!(header.n_ratings, 3);
        assert_eq!(header.n_users, 2);
        assert_eq!(header.n_items, 2);

        // Tabs and repeated whitespace are fine
        let header = parse_header("60000\t500\t\t200", 1).unwrap();
        assert_eq!(header.n_ratings, 60000);
        assert_eq!(header.n_items, 200);
    }

    #[test]
    fn test_parse_header_errors() {
        assert!(matches!(
            parse_header("3 2", 1),
            Err(DataLoadError::FieldCountMismatch { expected: 3, found: 2, line: 1 })
        ));
        assert!(matches!(
            parse_header("3 -2 2", 1),
            Err(DataLoadError::ParseError { line: 1, .. })
        ));
        assert!(parse_header("a b c", 1).is_err());
    }

    #[test]
    fn test_parse_header_id_range() {
        let header = parse_header("0 4294967295 4294967295", 1).unwrap();
        assert_eq!(header.n_users, u32::MAX as usize);

        assert!(matches!(
            parse_header("0 4294967296 1", 1),
            Err(DataLoadError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            parse_header("0 1 4294967296", 3),
            Err(DataLoadError::ParseError { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_rating_line() {
        let rating = parse_rating_line("0\t1\t4.5", 2).unwrap();
        assert_eq!(rating.user_id, 0);
        assert_eq!(rating.item_id, 1);
        assert_eq!(rating.raw_score, 4.5);

        let rating = parse_rating_line("4 2 3", 2).unwrap();
        assert_eq!(rating.raw_score, 3.0);
    }

    #[test]
    fn test_parse_rating_line_errors() {
        assert!(matches!(
            parse_rating_line("0 1 2 3", 7),
            Err(DataLoadError::FieldCountMismatch { found: 4, line: 7, .. })
        ));

        let err = parse_rating_line("0 x 3", 4).unwrap_err();
        assert!(err.to_string().contains("itemId"));
        assert!(err.to_string().contains("line 4"));

        assert!(parse_rating_line("0 1 five", 4).is_err());
    }
}
