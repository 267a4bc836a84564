/*
 * @Description  : 二维互相关（PyTorch 风格的 conv2d）
 *
 * - 输入: [batch, C_in, H, W]
 * - 卷积核: [C_out, C_in, kH, kW]
 * - 输出: [batch, C_out, H', W']
 *
 * H' = (H + 2*padding - kH) / stride + 1
 * W' = (W + 2*padding - kW) / stride + 1
 *
 * 不翻转卷积核，不加偏置。
 */

use std::borrow::Cow;

use log::debug;
use rayon::prelude::*;

use crate::errors::{ComparisonOperator, TensorError};
use crate::tensor::Tensor;
use crate::tensor::ops::pad::padded_extent;

/// 计算卷积输出的空间尺寸 (H', W')，向下取整
///
/// # 错误
/// - `stride`为0：`ValueMustSatisfyComparison`
/// - 填充后的输入在任一空间维度上小于卷积核：`KernelLargerThanInput`
/// - 填充后的尺寸超出`usize`范围：`PaddingOverflow`
pub fn conv2d_output_size(
    input_hw: (usize, usize),
    kernel_hw: (usize, usize),
    stride: usize,
    padding: usize,
) -> Result<(usize, usize), TensorError> {
    if stride == 0 {
        return Err(TensorError::ValueMustSatisfyComparison {
            value_name: "stride".to_string(),
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: 1,
        });
    }

    let padded_h = padded_extent(input_hw.0, padding)?;
    let padded_w = padded_extent(input_hw.1, padding)?;
    let (kernel_h, kernel_w) = kernel_hw;
    if kernel_h > padded_h || kernel_w > padded_w || kernel_h == 0 || kernel_w == 0 {
        return Err(TensorError::KernelLargerThanInput {
            padded_input: (padded_h, padded_w),
            kernel: kernel_hw,
        });
    }

    Ok((
        (padded_h - kernel_h) / stride + 1,
        (padded_w - kernel_w) / stride + 1,
    ))
}

impl Tensor {
    /// 以`self`为输入、`kernel`为卷积核做二维互相关
    ///
    /// # 参数
    /// - `kernel`: 卷积核，形状 [C_out, C_in, kH, kW]
    /// - `stride`: 步长（两个空间维度相同），须≥1
    /// - `padding`: 两侧零填充数（两个空间维度相同）
    ///
    /// # 返回
    /// 形状为 [batch, C_out, H', W'] 的新张量
    pub fn conv2d(&self, kernel: &Self, stride: usize, padding: usize) -> Result<Self, TensorError> {
        let (batch_size, in_c, in_h, in_w) = self.nchw("卷积输入")?;
        let (out_c, kernel_c, k_h, k_w) = kernel.nchw("卷积核")?;

        if in_c != kernel_c {
            return Err(TensorError::ChannelMismatch {
                input_channels: in_c,
                kernel_channels: kernel_c,
            });
        }

        let (out_h, out_w) = conv2d_output_size((in_h, in_w), (k_h, k_w), stride, padding)?;
        debug!(
            "conv2d: 输入{:?} * 卷积核{:?}（stride={stride}, padding={padding}）-> {:?}",
            self.shape(),
            kernel.shape(),
            [batch_size, out_c, out_h, out_w]
        );

        // 无填充时直接读取输入，不做拷贝
        let padded = if padding == 0 {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.pad_spatial(padding)?)
        };
        let single_sample_size = out_c * out_h * out_w;

        // Rayon 并行计算每个 batch 样本
        let batch_results: Vec<Vec<f32>> = (0..batch_size)
            .into_par_iter()
            .map(|b| {
                let mut sample_data = vec![0.0f32; single_sample_size];
                for oc in 0..out_c {
                    for oh in 0..out_h {
                        for ow in 0..out_w {
                            let mut sum = 0.0f32;
                            let h_start = oh * stride;
                            let w_start = ow * stride;

                            for ic in 0..in_c {
                                for kh in 0..k_h {
                                    for kw in 0..k_w {
                                        let input_val = padded[[b, ic, h_start + kh, w_start + kw]];
                                        sum += input_val * kernel[[oc, ic, kh, kw]];
                                    }
                                }
                            }
                            sample_data[oc * out_h * out_w + oh * out_w + ow] = sum;
                        }
                    }
                }
                sample_data
            })
            .collect();

        // 合并结果
        let all_data: Vec<f32> = batch_results.into_iter().flatten().collect();
        Self::try_new(&all_data, &[batch_size, out_c, out_h, out_w])
    }
}
