use ndarray::{Array, IxDyn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::errors::TensorError;

mod ops {
    pub mod bias;
    pub mod conv2d;
    pub mod pad;
}
pub use ops::conv2d::conv2d_output_size;

mod index;
mod print;
mod property;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 本库中的卷积相关算子统一采用 NCHW（[batch, channels, height, width]）的4阶布局。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]...；
    /// 若为更高维度的数组，`shape`可以是[n,c,h,w,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    /// 需要以错误形式处理时请用[`Tensor::try_new`]。
    pub fn new(data: &[f32], shape: &[usize]) -> Self {
        match Self::try_new(data, shape) {
            Ok(tensor) => tensor,
            Err(e) => panic!("{e}"),
        }
    }

    /// 同[`Tensor::new`]，但数据长度与形状不符时返回`TensorError::DataLengthMismatch`
    pub fn try_new(data: &[f32], shape: &[usize]) -> Result<Self, TensorError> {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).map_err(|_| {
            TensorError::DataLengthMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            }
        })?;
        Ok(Self { data })
    }

    /// 将一个二维字面量矩阵（H行W列）提升为形状为[1, 1, H, W]的4阶张量
    pub fn from_matrix<const H: usize, const W: usize>(rows: &[[f32; W]; H]) -> Self {
        let data = rows.iter().flatten().copied().collect::<Vec<_>>();
        Self::new(&data, &[1, 1, H, W])
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// 创建一个服从正态分布的随机张量（使用指定的 RNG，便于复现）。
    /// 采用 Box-Muller 变换，每次生成一对样本。
    pub fn normal_with_rng(mean: f32, std_dev: f32, shape: &[usize], rng: &mut StdRng) -> Self {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);

        while data.len() < data_len {
            let u1: f32 = rng.r#gen();
            let u2: f32 = rng.r#gen();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            let z0 = mean + std_dev * r * theta.cos();
            let z1 = mean + std_dev * r * theta.sin();

            if z0.is_finite() {
                data.push(z0);
            }
            if data.len() < data_len && z1.is_finite() {
                data.push(z1);
            }
        }

        Self::new(&data, shape)
    }

    // 供算子内部直接以 ndarray 数组构造结果
    pub(crate) fn from_array(data: Array<f32, IxDyn>) -> Self {
        Self { data }
    }
}
