use log::trace;

use super::{Layer, LayerKind};
use crate::errors::TensorError;
use crate::tensor::Tensor;

/// 按顺序组合的层序列，前一层的输出即后一层的输入。
/// 空序列等价于恒等映射。
#[derive(Default)]
pub struct Sequential {
    layers: Vec<LayerKind>,
}

impl Sequential {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一层（链式调用）
    pub fn add(mut self, layer: impl Into<LayerKind>) -> Self {
        self.layers.push(layer.into());
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Layer for Sequential {
    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError> {
        let mut out = x.clone();
        for (i, layer) in self.layers.iter().enumerate() {
            out = layer.forward(&out)?;
            trace!("Sequential 第{i}层输出形状: {:?}", out.shape());
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<&Tensor> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}
