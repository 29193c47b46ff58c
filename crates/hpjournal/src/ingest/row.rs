use std::collections::HashSet;

use csv::StringRecord;

use super::TrackerImportError;

/// One interpreted data row: the record fields plus the collection names
/// that should receive it.
#[derive(Debug)]
pub(crate) struct ParsedRow {
    pub(crate) locator: String,
    pub(crate) rationale: String,
    pub(crate) score: f64,
    pub(crate) subcategory: String,
    pub(crate) names: Vec<String>,
}

/// Spreadsheet exports pad the tail of the file with blank rows; the first
/// fully empty row marks end of data.
pub(crate) fn is_end_of_data(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Thumb codes arrive as `"1234:thumb"` or with stray colons; the journal
/// markup wants the bare numeric code.
pub(crate) fn clean_locator(raw: &str) -> String {
    raw.replace(":thumb", "").replace(':', "")
}

/// A trailing field names a collection only when it is non-empty and free of
/// whitespace; anything else is spreadsheet noise.
pub(crate) fn is_collection_name(field: &str) -> bool {
    !field.is_empty() && !field.chars().any(char::is_whitespace)
}

pub(crate) fn parse_row(record: &StringRecord, line: u64) -> Result<ParsedRow, TrackerImportError> {
    let locator = clean_locator(record.get(0).unwrap_or(""));
    if locator.is_empty() {
        return Err(TrackerImportError::MissingLocator { line });
    }

    let rationale = record.get(1).unwrap_or("").to_owned();

    let raw_score = record.get(2).unwrap_or("");
    let score: f64 = raw_score.trim().parse().map_err(|_| {
        TrackerImportError::InvalidScore {
            line,
            value: raw_score.to_owned(),
        }
    })?;

    let subcategory = record.get(3).unwrap_or("").to_owned();

    // A name repeated within one row still attaches the record only once.
    let mut names: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for field in record.iter().skip(4) {
        if is_collection_name(field) && seen.insert(field) {
            names.push(field.to_owned());
        }
    }

    Ok(ParsedRow {
        locator,
        rationale,
        score,
        subcategory,
        names,
    })
}
