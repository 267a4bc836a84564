/*
 * @Description  : Layer 模块 - 所有层共享的前向接口
 *
 * 层只做一件事：`forward(&Tensor) -> Tensor`，
 * 并通过 `LayerKind` 静态分发，便于 `Sequential` 按顺序组合。
 */

mod conv2d;

pub use conv2d::{Conv2d, Conv2dOptions};

use enum_dispatch::enum_dispatch;

use super::Sequential;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[enum_dispatch]
pub enum LayerKind {
    Conv2d(Conv2d),
    Sequential(Sequential),
}

/// 层 trait
///
/// - `forward()` 不修改层本身，输入输出均为新张量
/// - `parameters()` 返回层持有的所有参数张量（卷积核、偏置等）
#[enum_dispatch(LayerKind)]
pub trait Layer {
    /// 前向计算
    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError>;

    /// 获取所有参数张量
    fn parameters(&self) -> Vec<&Tensor>;

    /// 参数中元素的总个数
    fn num_params(&self) -> usize {
        self.parameters().iter().map(|p| p.size()).sum()
    }
}
