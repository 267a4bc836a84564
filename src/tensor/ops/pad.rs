use ndarray::{Array, s};
use rayon::prelude::*;

use crate::errors::TensorError;
use crate::tensor::Tensor;

/// 计算某一空间维度两侧各填充`padding`后的长度，溢出时返回`PaddingOverflow`
pub(crate) fn padded_extent(size: usize, padding: usize) -> Result<usize, TensorError> {
    padding
        .checked_mul(2)
        .and_then(|total| total.checked_add(size))
        .ok_or(TensorError::PaddingOverflow { size, padding })
}

impl Tensor {
    /// 对4阶（NCHW）张量的空间维度（H、W）两侧各填充`padding`个零。
    /// `padding`为0时返回自身的拷贝；填充后尺寸超出`usize`时返回`PaddingOverflow`。
    pub fn pad_spatial(&self, padding: usize) -> Result<Self, TensorError> {
        let (batch_size, c, h, w) = self.nchw("输入")?;
        if padding == 0 {
            return Ok(self.clone());
        }

        let new_h = padded_extent(h, padding)?;
        let new_w = padded_extent(w, padding)?;

        // Rayon 并行处理每个 batch 样本
        let batch_results: Vec<Vec<f32>> = (0..batch_size)
            .into_par_iter()
            .map(|bi| {
                let mut sample = Array::<f32, _>::zeros((c, new_h, new_w));
                sample
                    .slice_mut(s![.., padding..padding + h, padding..padding + w])
                    .assign(&self.data.slice(s![bi, .., .., ..]));
                sample.iter().copied().collect()
            })
            .collect();

        // 合并结果
        let all_data: Vec<f32> = batch_results.into_iter().flatten().collect();
        Self::try_new(&all_data, &[batch_size, c, new_h, new_w])
    }
}
