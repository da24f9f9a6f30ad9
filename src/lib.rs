//! # Array Loader
//!
//! 把若干个并行的[ndarray](https://docs.rs/ndarray)数组（如特征和标签）打包成
//! 类似[pytorch](https://pytorch.org)中`TensorDataset` + `DataLoader`的小批量迭代器。
//!

pub mod data;

pub use data::{DataError, load_array};
