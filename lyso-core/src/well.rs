//! Well-plate coordinate parsing.
//!
//! Two deliberately separate extractors exist: [`extract_well_id`] scans an
//! underscore-delimited tag for a plausible plate coordinate, while
//! [`crude_well_token`] blindly takes the second underscore token the way the
//! upstream table loader always has. They are not interchangeable.

/// Microplate format, which bounds the accepted row letters and column numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlateFormat {
    /// Rows A-H, columns 1-12.
    Well96,
    /// Rows A-P, columns 1-24.
    Well384,
}

impl PlateFormat {
    fn bounds(self) -> (char, u32) {
        match self {
            PlateFormat::Well96 => ('H', 12),
            PlateFormat::Well384 => ('P', 24),
        }
    }
}

/// Interpret one token as a well coordinate under the given format.
///
/// The first character (case-insensitive) must be a row letter; the digit run
/// immediately after it forms the column number, stopping at the first
/// non-digit so trailing text like `.tif` is tolerated. Leading zeros are
/// stripped; an all-zero run counts as column 0 and is rejected.
fn well_from_token(tok: &str, format: PlateFormat) -> Option<String> {
    let mut chars = tok.chars();
    let row = chars.next()?.to_ascii_uppercase();
    if !row.is_ascii_uppercase() {
        return None;
    }
    let digits: String = chars.take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let stripped = digits.trim_start_matches('0');
    let col: u32 = if stripped.is_empty() {
        0
    } else {
        stripped.parse().unwrap_or(0)
    };
    let (max_row, max_col) = format.bounds();
    if ('A'..=max_row).contains(&row) && (1..=max_col).contains(&col) {
        Some(format!("{row}{col}"))
    } else {
        None
    }
}

/// Return the first 96- or 384-well ID found in an underscore-delimited tag.
///
/// Tokens are scanned left to right and extraction short-circuits on the first
/// match; total for any input, `None` when nothing qualifies.
pub fn extract_well_id(tag: &str) -> Option<String> {
    for tok in tag.split('_') {
        if let Some(id) = well_from_token(tok, PlateFormat::Well96) {
            return Some(id);
        }
        if let Some(id) = well_from_token(tok, PlateFormat::Well384) {
            return Some(id);
        }
    }
    None
}

/// Same scan as [`extract_well_id`], restricted to a single plate format.
///
/// In a 96-well-only context a token like `A13` is rejected and scanning
/// continues with the next token.
pub fn extract_well_id_in(tag: &str, format: PlateFormat) -> Option<String> {
    tag.split('_').find_map(|tok| well_from_token(tok, format))
}

/// Strategy-B well derivation: second underscore token with its extension
/// stripped. Cruder than [`extract_well_id`] and kept separate on purpose.
pub fn crude_well_token(slice: &str) -> Option<String> {
    let tok = slice.split('_').nth(1)?;
    let bare = tok.split('.').next().unwrap_or(tok);
    Some(bare.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_96_well_tokens() {
        assert_eq!(extract_well_id("A1_suffix"), Some("A1".into()));
        assert_eq!(extract_well_id("h12_suffix"), Some("H12".into()));
        assert_eq!(extract_well_id("MAX_A1_img1.tif"), Some("A1".into()));
    }

    #[test]
    fn leading_zeros_are_stripped() {
        assert_eq!(extract_well_id("B02_x"), Some("B2".into()));
        assert_eq!(extract_well_id("B002.tif"), Some("B2".into()));
    }

    #[test]
    fn all_zero_column_is_rejected() {
        assert_eq!(extract_well_id("A00_B2"), Some("B2".into()));
    }

    #[test]
    fn digit_run_stops_at_first_non_digit() {
        assert_eq!(extract_well_id("C4.tif"), Some("C4".into()));
        assert_eq!(extract_well_id("C4x9"), Some("C4".into()));
    }

    #[test]
    fn row_range_extends_to_p_for_384() {
        assert_eq!(extract_well_id("P24_x"), Some("P24".into()));
        assert_eq!(extract_well_id("Q1_x"), None);
        // A13 is out of 96-well bounds but valid on a 384-well plate
        assert_eq!(extract_well_id("foo_A13_B2.tif"), Some("A13".into()));
    }

    #[test]
    fn restricted_96_well_scan_skips_384_only_tokens() {
        assert_eq!(
            extract_well_id_in("foo_A13_B2.tif", PlateFormat::Well96),
            Some("B2".into())
        );
        assert_eq!(extract_well_id_in("foo_A13.tif", PlateFormat::Well96), None);
        assert_eq!(
            extract_well_id_in("foo_A13.tif", PlateFormat::Well384),
            Some("A13".into())
        );
    }

    #[test]
    fn non_conforming_tags_yield_no_match() {
        assert_eq!(extract_well_id(""), None);
        assert_eq!(extract_well_id("no well here"), None);
        assert_eq!(extract_well_id("123_456"), None);
        assert_eq!(extract_well_id("A_1"), None);
    }

    #[test]
    fn crude_token_takes_second_underscore_field() {
        assert_eq!(crude_well_token("MAX_A1_img1.tif"), Some("A1".into()));
        assert_eq!(crude_well_token("A1_img1.tif"), Some("img1".into()));
        assert_eq!(crude_well_token("noseparator.tif"), None);
        assert_eq!(crude_well_token("x_"), Some("".into()));
    }
}
