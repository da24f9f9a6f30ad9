//! TensorDataset - 由若干个并行数组组成的数据集

use ndarray::{ArrayD, ArrayViewD, Axis};

use super::error::DataError;

/// TensorDataset - 持有若干个第一维（样本数）相同的数组
///
/// 第 `i` 个样本即各数组沿第 0 维取第 `i` 个子数组后组成的元组。
/// 构造后不可变，取样本时只返回视图，不复制数据。
///
/// # 示例
/// ```ignore
/// let dataset = TensorDataset::new(vec![features.into_dyn(), labels.into_dyn()])?;
/// println!("样本数: {}", dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct TensorDataset<A> {
    arrays: Vec<ArrayD<A>>,
    len: usize,
}

impl<A> TensorDataset<A> {
    /// 创建新的 TensorDataset
    ///
    /// # 参数
    /// - `arrays`: 并行数组，第一维为样本数（必须全部一致）
    ///
    /// # 错误
    /// - [`DataError::EmptyArrays`]: `arrays` 为空
    /// - [`DataError::MissingLeadingDim`]: 某个数组是 0 维的
    /// - [`DataError::LengthMismatch`]: 样本数不一致
    pub fn new(arrays: Vec<ArrayD<A>>) -> Result<Self, DataError> {
        let first = arrays.first().ok_or(DataError::EmptyArrays)?;
        if first.ndim() == 0 {
            return Err(DataError::MissingLeadingDim { index: 0 });
        }
        let len = first.len_of(Axis(0));

        for (index, array) in arrays.iter().enumerate().skip(1) {
            if array.ndim() == 0 {
                return Err(DataError::MissingLeadingDim { index });
            }
            let got = array.len_of(Axis(0));
            if got != len {
                return Err(DataError::LengthMismatch {
                    index,
                    expected: len,
                    got,
                });
            }
        }

        Ok(Self { arrays, len })
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.len
    }

    /// 检查数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 并行数组的个数
    pub fn num_arrays(&self) -> usize {
        self.arrays.len()
    }

    /// 获取全部数组的引用
    pub fn arrays(&self) -> &[ArrayD<A>] {
        &self.arrays
    }

    /// 获取第 `k` 个数组
    pub fn array(&self, k: usize) -> Option<&ArrayD<A>> {
        self.arrays.get(k)
    }

    /// 取出第 `index` 个样本（各数组对应位置的视图）
    pub fn get(&self, index: usize) -> Result<Vec<ArrayViewD<'_, A>>, DataError> {
        self.check_index(index)?;
        Ok(self
            .arrays
            .iter()
            .map(|array| array.index_axis(Axis(0), index))
            .collect())
    }

    /// 拆出数据，消耗自身
    pub fn into_arrays(self) -> Vec<ArrayD<A>> {
        self.arrays
    }

    fn check_index(&self, index: usize) -> Result<(), DataError> {
        if index >= self.len {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<A: Clone> TensorDataset<A> {
    /// 按索引提取一组样本
    ///
    /// 每个数组都沿第 0 维按 `indices` 的顺序取行，其余维度保持不变，
    /// 结果形状为 `[indices.len(), ...]`。
    pub fn select(&self, indices: &[usize]) -> Result<Vec<ArrayD<A>>, DataError> {
        for &index in indices {
            self.check_index(index)?;
        }
        Ok(self.gather(indices))
    }

    /// 同 [`select`](Self::select)，但调用方保证索引均在 `0..len` 内
    pub(crate) fn gather(&self, indices: &[usize]) -> Vec<ArrayD<A>> {
        self.arrays
            .iter()
            .map(|array| array.select(Axis(0), indices))
            .collect()
    }
}
