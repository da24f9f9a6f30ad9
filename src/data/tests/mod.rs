
use ndarray::{Array, ArrayD, IxDyn};

/// 特征 `[n, 2]`，第 i 行为 `[2i, 2i+1]`
fn features(n: usize) -> ArrayD<f32> {
    Array::from_shape_vec(IxDyn(&[n, 2]), (0..2 * n).map(|x| x as f32).collect()).unwrap()
}

/// 标签 `[n]`，第 i 个为 `i`
fn labels(n: usize) -> ArrayD<f32> {
    Array::from_shape_vec(IxDyn(&[n]), (0..n).map(|x| x as f32).collect()).unwrap()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
