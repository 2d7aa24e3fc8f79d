use crate::domain::model::{ExtractResult, IntegerPolicy, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn sample_size(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn has_headers(&self) -> bool;
    fn integer_policy(&self) -> IntegerPolicy;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, extracted: ExtractResult) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
