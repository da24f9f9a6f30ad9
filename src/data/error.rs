//! 数据加载错误类型定义

use thiserror::Error;

/// 数据加载相关错误
///
/// 所有错误都在构造 [`TensorDataset`](super::TensorDataset) /
/// [`DataLoader`](super::DataLoader) 时立即返回，迭代过程本身不会出错。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// 各数组第一维（样本数）不一致
    #[error("样本数不一致: 第 {index} 个数组有 {got} 个样本，期望 {expected} 个")]
    LengthMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// 批大小非法
    #[error("batch_size 必须大于 0，实际为 {0}")]
    InvalidBatchSize(usize),

    /// 没有传入任何数组
    #[error("至少需要一个数组")]
    EmptyArrays,

    /// 标量（0 维数组）没有样本维
    #[error("第 {index} 个数组是 0 维的，缺少样本维")]
    MissingLeadingDim { index: usize },

    /// 索引越界
    #[error("索引越界: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// 配置解析失败
    #[error("配置错误: {0}")]
    Config(String),
}
