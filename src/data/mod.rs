//! 数据加载模块
//!
//! 把若干个第一维对齐的数组组合成数据集，并按批迭代。
//!
//! # 主要组件
//!
//! - [`load_array`]: 一步构造小批量迭代器
//! - [`TensorDataset`]: 持有并行数组的数据集
//! - [`DataLoader`]: `PyTorch` 风格的数据批量加载器
//! - [`Batch`]: 迭代产出的一个批次
//! - [`Sampler`]: 每轮的样本顺序（顺序 / 随机）
//! - [`LoaderConfig`]: 可从 JSON 读取的加载器配置
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use array_loader::data::load_array;
//!
//! let loader = load_array(vec![train_x.into_dyn(), train_y.into_dyn()], 32, true)?;
//!
//! // PyTorch 风格训练循环，每轮重新打乱
//! for epoch in 0..num_epochs {
//!     for batch in &loader {
//!         let (x_batch, y_batch) = batch.into_pair().unwrap();
//!         // ...
//!     }
//! }
//! ```

mod config;
mod dataloader;
mod dataset;
pub mod error;
mod sampler;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::LoaderConfig;
pub use dataloader::{Batch, DataLoader, DataLoaderIterator, load_array};
pub use dataset::TensorDataset;
pub use error::DataError;
pub use sampler::Sampler;
