//! 采样器：决定每一轮（pass）遍历样本的顺序

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// 样本顺序策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampler {
    /// 按 `0..n` 的自然顺序
    #[default]
    Sequential,
    /// 每轮重新打乱；给定种子时，第 `pass` 轮的随机数生成器由 `(seed, pass)` 共同决定
    Random { seed: Option<u64> },
}

impl Sampler {
    /// 根据是否打乱和可选种子构造采样器
    pub const fn new(shuffle: bool, seed: Option<u64>) -> Self {
        if shuffle {
            Self::Random { seed }
        } else {
            Self::Sequential
        }
    }

    /// 是否打乱顺序
    pub const fn is_random(&self) -> bool {
        matches!(self, Self::Random { .. })
    }

    /// 生成第 `pass` 轮的索引序列，恰好覆盖 `0..n` 各一次
    pub fn indices(&self, n: usize, pass: u64) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();

        match *self {
            Self::Sequential => {}
            Self::Random { seed: Some(seed) } => {
                let mut rng = pass_rng(seed, pass);
                indices.shuffle(&mut rng);
            }
            Self::Random { seed: None } => {
                let mut rng = rand::thread_rng();
                indices.shuffle(&mut rng);
            }
        }

        indices
    }
}

/// `seed` 与 `pass` 分别占据密钥的不同字节段，任意两组 `(seed, pass)` 都不会得到同一个生成器
fn pass_rng(seed: u64, pass: u64) -> StdRng {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..16].copy_from_slice(&pass.to_le_bytes());
    StdRng::from_seed(key)
}
