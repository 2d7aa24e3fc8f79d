pub mod etl;
pub mod loader;
pub mod mapper;
pub mod pipeline;
pub mod sampler;

pub use crate::domain::model::{
    ExtractResult, IntegerPolicy, PuzzleRecord, RawRow, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
