use serde::{Deserialize, Serialize};

/// One line of the source CSV, fields in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub id: String,
    pub fen: String,
    pub solution: Vec<String>,
    pub rating: Option<i64>,
    pub plays: Option<i64>,
    pub themes: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub rows_read: usize,
    pub rows_with_solution: Vec<RawRow>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub puzzles: Vec<PuzzleRecord>,
}

/// What to do with a rating or play count that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerPolicy {
    #[default]
    Fail,
    Null,
}

impl IntegerPolicy {
    pub const NAMES: [&'static str; 2] = ["fail", "null"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fail" => Some(IntegerPolicy::Fail),
            "null" => Some(IntegerPolicy::Null),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = PuzzleRecord {
            id: "p1".to_string(),
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
            solution: vec!["e2e4".to_string()],
            rating: None,
            plays: None,
            themes: vec![],
            url: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["rating"], serde_json::Value::Null);
        assert_eq!(value["plays"], serde_json::Value::Null);
        assert_eq!(value["url"], serde_json::Value::Null);
        assert_eq!(value["themes"], serde_json::json!([]));
    }

    #[test]
    fn test_raw_row_field_access() {
        let row = RawRow::new(3, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(row.field(1), Some("b"));
        assert_eq!(row.field(2), None);
    }

    #[test]
    fn test_integer_policy_names() {
        assert_eq!(IntegerPolicy::from_name("fail"), Some(IntegerPolicy::Fail));
        assert_eq!(IntegerPolicy::from_name("null"), Some(IntegerPolicy::Null));
        assert_eq!(IntegerPolicy::from_name("skip"), None);
        assert_eq!(IntegerPolicy::default(), IntegerPolicy::Fail);
    }
}
