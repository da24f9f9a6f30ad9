//! DataLoader 配置
//!
//! 既可以在代码里直接构造，也可以从 JSON 读取：
//!
//! ```ignore
//! let config = LoaderConfig::from_json_str(r#"{"batch_size": 32, "seed": 42}"#)?;
//! let loader = DataLoader::from_config(dataset, &config)?;
//! ```

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// DataLoader 的可序列化配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// 批大小，必须大于 0
    pub batch_size: usize,
    /// 是否每轮打乱，缺省为 true（训练场景）
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    /// 是否丢弃最后一个不完整的批次
    #[serde(default)]
    pub drop_last: bool,
    /// 打乱用的随机种子，仅在 `shuffle` 为 true 时生效
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

const fn default_shuffle() -> bool {
    true
}

impl LoaderConfig {
    /// 以给定批大小创建配置，其余字段取缺省值（打乱、保留最后批次、无种子）
    pub const fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            shuffle: true,
            drop_last: false,
            seed: None,
        }
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> Result<(), DataError> {
        if self.batch_size == 0 {
            return Err(DataError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DataError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 JSON 字符串
    pub fn to_json_string(&self) -> Result<String, DataError> {
        serde_json::to_string(self).map_err(|e| DataError::Config(e.to_string()))
    }
}
