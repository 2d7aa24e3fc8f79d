use crate::core::loader::{filter_rows, parse_rows};
use crate::core::mapper::map_row;
use crate::core::sampler::{build_rng, sample};
use crate::core::{ConfigProvider, ExtractResult, Pipeline, PuzzleRecord, Storage, TransformResult};
use crate::utils::error::Result;

pub struct PuzzlePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PuzzlePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

/// Pretty-prints records as a JSON array with 2-space indentation.
pub fn render_json(puzzles: &[PuzzleRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(puzzles)?;
    json.push('\n');
    Ok(json)
}

impl<S: Storage, C: ConfigProvider> Pipeline for PuzzlePipeline<S, C> {
    fn extract(&self) -> Result<ExtractResult> {
        tracing::debug!("Reading puzzles from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;
        tracing::debug!("Read {} bytes", data.len());

        let rows = parse_rows(&data, self.config.has_headers())?;
        let rows_read = rows.len();
        let rows_with_solution = filter_rows(rows);

        tracing::info!(
            "{} of {} rows have a solution",
            rows_with_solution.len(),
            rows_read
        );

        Ok(ExtractResult {
            rows_read,
            rows_with_solution,
        })
    }

    fn transform(&self, extracted: ExtractResult) -> Result<TransformResult> {
        let mut rng = build_rng(self.config.seed());
        let rows = &extracted.rows_with_solution;
        let selected = sample(&mut rng, rows, self.config.sample_size());

        tracing::debug!(
            "Sampled {} of {} rows (seed: {:?})",
            selected.len(),
            rows.len(),
            self.config.seed()
        );

        let policy = self.config.integer_policy();
        let puzzles = selected
            .into_iter()
            .map(|row| map_row(row, policy))
            .collect::<Result<Vec<_>>>()?;

        Ok(TransformResult { puzzles })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let json = render_json(&result.puzzles)?;

        tracing::debug!("Writing {} bytes of JSON", json.len());
        self.storage
            .write_file(self.config.output_path(), json.as_bytes())?;

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IntegerPolicy;
    use crate::utils::error::EtlError;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        sample_size: usize,
        seed: Option<u64>,
        has_headers: bool,
        integer_policy: IntegerPolicy,
    }

    impl MockConfig {
        fn new(sample_size: usize) -> Self {
            Self {
                sample_size,
                seed: Some(42),
                has_headers: false,
                integer_policy: IntegerPolicy::Fail,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "puzzles.csv"
        }

        fn output_path(&self) -> &str {
            "puzzles.json"
        }

        fn sample_size(&self) -> usize {
            self.sample_size
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }

        fn has_headers(&self) -> bool {
            self.has_headers
        }

        fn integer_policy(&self) -> IntegerPolicy {
            self.integer_policy
        }
    }

    fn puzzle_csv(count: usize) -> String {
        (0..count)
            .map(|i| {
                format!(
                    "p{i},fen{i},e2e4 e7e5,{},{},90,http://a/{i},fork,http://x/{i}\n",
                    1000 + i,
                    i * 3
                )
            })
            .collect()
    }

    #[test]
    fn test_extract_filters_rows_without_solution() {
        let csv = "p1,fen,e2e4,1500,10\np2,fen,,1500,10\np3,fen,  ,1,1\np4,fen\n";
        let storage = MockStorage::with_file("puzzles.csv", csv);
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(10));

        let extracted = pipeline.extract().unwrap();

        assert_eq!(extracted.rows_read, 4);
        assert_eq!(extracted.rows_with_solution.len(), 1);
        assert_eq!(extracted.rows_with_solution[0].fields[0], "p1");
    }

    #[test]
    fn test_extract_missing_input_is_io_error() {
        let storage = MockStorage::default();
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(10));

        assert!(matches!(pipeline.extract(), Err(EtlError::IoError(_))));
    }

    #[test]
    fn test_extract_skips_header_when_configured() {
        let csv = "PuzzleId,FEN,Moves,Rating\np1,fen,e2e4,1500\n";
        let storage = MockStorage::with_file("puzzles.csv", csv);
        let mut config = MockConfig::new(10);
        config.has_headers = true;
        let pipeline = PuzzlePipeline::new(&storage, config);

        let extracted = pipeline.extract().unwrap();

        assert_eq!(extracted.rows_read, 1);
        assert_eq!(extracted.rows_with_solution[0].fields[0], "p1");
    }

    #[test]
    fn test_transform_samples_distinct_records() {
        let storage = MockStorage::with_file("puzzles.csv", &puzzle_csv(50));
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(20));

        let extracted = pipeline.extract().unwrap();
        let result = pipeline.transform(extracted).unwrap();

        assert_eq!(result.puzzles.len(), 20);
        let ids: HashSet<&str> = result.puzzles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
        assert!(result.puzzles.iter().all(|p| !p.solution.is_empty()));
    }

    #[test]
    fn test_transform_with_fewer_rows_than_requested() {
        let storage = MockStorage::with_file("puzzles.csv", &puzzle_csv(3));
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(100));

        let extracted = pipeline.extract().unwrap();
        let result = pipeline.transform(extracted).unwrap();

        assert_eq!(result.puzzles.len(), 3);
    }

    #[test]
    fn test_transform_is_deterministic_with_seed() {
        let storage = MockStorage::with_file("puzzles.csv", &puzzle_csv(200));
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(10));

        let first = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let second = pipeline.transform(pipeline.extract().unwrap()).unwrap();

        assert_eq!(first.puzzles, second.puzzles);
    }

    #[test]
    fn test_transform_propagates_field_type_error() {
        let storage = MockStorage::with_file("puzzles.csv", "p1,fen,e2e4,abc,1\n");
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(10));

        let extracted = pipeline.extract().unwrap();
        assert!(matches!(
            pipeline.transform(extracted),
            Err(EtlError::FieldTypeError { field: "rating", .. })
        ));
    }

    #[test]
    fn test_load_writes_pretty_json() {
        let storage = MockStorage::default();
        let pipeline = PuzzlePipeline::new(&storage, MockConfig::new(10));

        let result = TransformResult {
            puzzles: vec![PuzzleRecord {
                id: "p1".to_string(),
                fen: "fen".to_string(),
                solution: vec!["e2e4".to_string()],
                rating: Some(1500),
                plays: None,
                themes: vec![],
                url: None,
            }],
        };

        let output_path = pipeline.load(result).unwrap();
        assert_eq!(output_path, "puzzles.json");

        let written = String::from_utf8(storage.get_file("puzzles.json").unwrap()).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": \"p1\""));
        assert!(written.contains("\"plays\": null"));
        assert!(written.contains("\"themes\": []"));
        assert!(written.contains("\"url\": null"));
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }
}
