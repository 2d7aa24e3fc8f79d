use crate::domain::model::RawRow;
use crate::utils::error::Result;

/// Column holding the space separated move list.
pub const SOLUTION_FIELD: usize = 2;

/// Parses the whole CSV buffer into rows. Rows may have any number of fields.
pub fn parse_rows(data: &[u8], has_headers: bool) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(RawRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ));
    }

    tracing::debug!("Parsed {} rows (header skipped: {})", rows.len(), has_headers);
    Ok(rows)
}

pub fn has_solution(row: &RawRow) -> bool {
    row.field(SOLUTION_FIELD)
        .map(|moves| !moves.trim().is_empty())
        .unwrap_or(false)
}

/// Keeps rows with a non-blank solution, preserving input order.
pub fn filter_rows(rows: Vec<RawRow>) -> Vec<RawRow> {
    rows.into_iter().filter(has_solution).collect()
}
