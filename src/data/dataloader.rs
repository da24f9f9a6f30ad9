/*
 * @Description  : DataLoader - PyTorch 风格的数据批量加载器
 *
 * 提供统一的数据迭代 API，支持：
 * - 自动分批 (batch_size)
 * - 随机打乱 (shuffle)，每轮独立重新打乱
 * - 丢弃不完整批次 (drop_last)
 */

use std::cell::Cell;
use std::iter::FusedIterator;

use log::{debug, trace};
use ndarray::ArrayD;

use super::config::LoaderConfig;
use super::dataset::TensorDataset;
use super::error::DataError;
use super::sampler::Sampler;

/// 一个批次：各数组按同一组样本索引取出的子数组
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<A> {
    arrays: Vec<ArrayD<A>>,
    indices: Vec<usize>,
}

impl<A> Batch<A> {
    /// 本批次包含的子数组，顺序与数据集中的数组一致
    pub fn arrays(&self) -> &[ArrayD<A>] {
        &self.arrays
    }

    /// 第 `k` 个子数组
    pub fn array(&self, k: usize) -> Option<&ArrayD<A>> {
        self.arrays.get(k)
    }

    /// 本批次样本在原数据集中的索引
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// 本批次样本数
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn into_arrays(self) -> Vec<ArrayD<A>> {
        self.arrays
    }

    /// 拆成 `(特征, 标签)`，仅当恰好有两个数组时返回 `Some`
    pub fn into_pair(self) -> Option<(ArrayD<A>, ArrayD<A>)> {
        let mut arrays = self.arrays.into_iter();
        match (arrays.next(), arrays.next(), arrays.next()) {
            (Some(x), Some(y), None) => Some((x, y)),
            _ => None,
        }
    }
}

/// DataLoader - PyTorch 风格的数据批量加载器
///
/// # 示例
/// ```ignore
/// let dataset = TensorDataset::new(vec![train_x.into_dyn(), train_y.into_dyn()])?;
/// let loader = DataLoader::new(dataset, 32)?
///     .shuffle(true)
///     .drop_last(true);
///
/// for epoch in 0..10 {
///     for batch in &loader {
///         let (x_batch, y_batch) = batch.into_pair().unwrap();
///         // ...
///     }
/// }
/// ```
#[derive(Debug)]
pub struct DataLoader<A> {
    dataset: TensorDataset<A>,
    batch_size: usize,
    shuffle: bool,
    drop_last: bool,
    seed: Option<u64>,
    // 已开始的轮数，带种子打乱时参与种子计算
    passes: Cell<u64>,
}

impl<A> DataLoader<A> {
    /// 创建新的 DataLoader（默认不打乱、保留最后一个不完整批次）
    ///
    /// # 参数
    /// - `dataset`: 数据集
    /// - `batch_size`: 批大小，必须大于 0
    pub fn new(dataset: TensorDataset<A>, batch_size: usize) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidBatchSize(batch_size));
        }
        debug!(
            "DataLoader: {} 个样本, {} 个数组, batch_size={}",
            dataset.len(),
            dataset.num_arrays(),
            batch_size
        );
        Ok(Self {
            dataset,
            batch_size,
            shuffle: false,
            drop_last: false,
            seed: None,
            passes: Cell::new(0),
        })
    }

    /// 按配置创建 DataLoader
    pub fn from_config(
        dataset: TensorDataset<A>,
        config: &LoaderConfig,
    ) -> Result<Self, DataError> {
        config.validate()?;
        let loader = Self::new(dataset, config.batch_size)?
            .shuffle(config.shuffle)
            .drop_last(config.drop_last);
        Ok(match config.seed {
            Some(seed) => loader.seed(seed),
            None => loader,
        })
    }

    /// 设置是否打乱数据
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// 设置是否丢弃最后一个不完整的批次
    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// 设置随机种子（用于 shuffle）
    ///
    /// 只有在 `shuffle(true)` 时生效；不打乱时始终按原顺序迭代，种子被忽略。
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 批大小
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 是否打乱
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// 获取批次数量
    pub fn num_batches(&self) -> usize {
        let n = self.dataset.len();
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    /// 获取数据集大小
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// 获取数据集引用
    pub fn dataset(&self) -> &TensorDataset<A> {
        &self.dataset
    }

    /// 已经开始过的轮数（每调用一次 `iter()` 加一）
    pub fn passes_started(&self) -> u64 {
        self.passes.get()
    }

    fn sampler(&self) -> Sampler {
        Sampler::new(self.shuffle, self.seed)
    }
}

impl<A: Clone> DataLoader<A> {
    /// 开始新的一轮并创建迭代器
    ///
    /// 打乱时每次调用都会生成新的排列。
    pub fn iter(&self) -> DataLoaderIterator<'_, A> {
        let pass = self.passes.get();
        self.passes.set(pass.wrapping_add(1));

        let indices = self.sampler().indices(self.dataset.len(), pass);
        debug!(
            "DataLoader: 第 {} 轮, shuffle={}, 共 {} 个批次",
            pass,
            self.shuffle,
            self.num_batches()
        );

        DataLoaderIterator {
            loader: self,
            indices,
            current_batch: 0,
        }
    }
}

impl<'a, A: Clone> IntoIterator for &'a DataLoader<A> {
    type Item = Batch<A>;
    type IntoIter = DataLoaderIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// DataLoader 迭代器，只持有本轮的索引顺序和当前位置
#[derive(Debug)]
pub struct DataLoaderIterator<'a, A> {
    loader: &'a DataLoader<A>,
    indices: Vec<usize>,
    current_batch: usize,
}

impl<A> DataLoaderIterator<'_, A> {
    /// 本轮的完整索引顺序
    pub fn order(&self) -> &[usize] {
        &self.indices
    }

    fn remaining(&self) -> usize {
        self.loader.num_batches().saturating_sub(self.current_batch)
    }
}

impl<A: Clone> Iterator for DataLoaderIterator<'_, A> {
    type Item = Batch<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let n = self.indices.len();
        let start = self.current_batch * self.loader.batch_size;
        let end = (start + self.loader.batch_size).min(n);
        self.current_batch += 1;

        let batch_indices = self.indices[start..end].to_vec();
        trace!("DataLoader: 批次 {} -> {:?}", self.current_batch - 1, batch_indices);
        let arrays = self.loader.dataset.gather(&batch_indices);

        Some(Batch {
            arrays,
            indices: batch_indices,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<A: Clone> ExactSizeIterator for DataLoaderIterator<'_, A> {}

impl<A: Clone> FusedIterator for DataLoaderIterator<'_, A> {}

/// 把若干个并行数组打包成小批量迭代器
///
/// 相当于 `TensorDataset` + `DataLoader` 的一步构造。
///
/// # 参数
/// - `arrays`: 并行数组，第一维（样本数）必须一致
/// - `batch_size`: 批大小，必须大于 0
/// - `is_train`: 为 true 时每轮打乱顺序，否则按原顺序
///
/// # 示例
/// ```ignore
/// let loader = load_array(vec![x.into_dyn(), y.into_dyn()], 10, true)?;
/// for batch in &loader {
///     let (x_batch, y_batch) = batch.into_pair().unwrap();
/// }
/// ```
pub fn load_array<A>(
    arrays: Vec<ArrayD<A>>,
    batch_size: usize,
    is_train: bool,
) -> Result<DataLoader<A>, DataError> {
    let dataset = TensorDataset::new(arrays)?;
    Ok(DataLoader::new(dataset, batch_size)?.shuffle(is_train))
}
