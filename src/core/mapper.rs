use crate::domain::model::{IntegerPolicy, PuzzleRecord, RawRow};
use crate::utils::error::{EtlError, Result};

const ID_FIELD: usize = 0;
const FEN_FIELD: usize = 1;
const MOVES_FIELD: usize = 2;
const RATING_FIELD: usize = 3;
const PLAYS_FIELD: usize = 4;
const THEMES_FIELD: usize = 7;
const URL_FIELD: usize = 8;

fn split_tokens(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn parse_optional_int(
    row: &RawRow,
    index: usize,
    field: &'static str,
    policy: IntegerPolicy,
) -> Result<Option<i64>> {
    // 只有空字串才算缺值；只含空白字元的欄位仍需解析
    let raw = match row.field(index) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => match policy {
            IntegerPolicy::Fail => Err(EtlError::FieldTypeError {
                line: row.line,
                field,
                value: raw.to_string(),
            }),
            IntegerPolicy::Null => {
                tracing::warn!(
                    "Line {}: {} {:?} is not an integer, writing null",
                    row.line,
                    field,
                    raw
                );
                Ok(None)
            }
        },
    }
}

/// Projects a filtered row into a puzzle record.
///
/// Fields past the move list are optional: a short row yields `None` or an
/// empty list for whatever is missing.
pub fn map_row(row: &RawRow, policy: IntegerPolicy) -> Result<PuzzleRecord> {
    Ok(PuzzleRecord {
        id: row.field(ID_FIELD).unwrap_or_default().to_string(),
        fen: row.field(FEN_FIELD).unwrap_or_default().to_string(),
        solution: split_tokens(row.field(MOVES_FIELD)),
        rating: parse_optional_int(row, RATING_FIELD, "rating", policy)?,
        plays: parse_optional_int(row, PLAYS_FIELD, "plays", policy)?,
        themes: split_tokens(row.field(THEMES_FIELD)),
        url: row.field(URL_FIELD).map(str::to_string),
    })
}
