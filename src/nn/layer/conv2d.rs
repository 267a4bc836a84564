/*
 * @Description  : Conv2d (2D 卷积) 层 - PyTorch 风格 API
 *
 * 输入/输出形状：
 * - 输入：[batch_size, in_channels, H, W]
 * - 输出：[batch_size, out_channels, H', W']
 *
 * 计算：output = conv2d(x, K) + b
 */

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::Layer;
use crate::errors::TensorError;
use crate::tensor::{Tensor, conv2d_output_size};

/// Conv2d 层的超参数
///
/// 可从 JSON 等格式反序列化，缺失字段取默认值（stride=1, padding=0, 使用偏置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conv2dOptions {
    /// 步长（两个空间维度相同）
    pub stride: usize,
    /// 两侧零填充数（两个空间维度相同）
    pub padding: usize,
    /// 是否使用偏置
    pub use_bias: bool,
}

impl Conv2dOptions {
    /// 从 JSON 字符串读取超参数，如`{"stride": 2, "padding": 2}`
    pub fn from_json(json: &str) -> Result<Self, TensorError> {
        serde_json::from_str(json).map_err(|e| TensorError::InvalidConfig {
            message: e.to_string(),
        })
    }
}

impl Default for Conv2dOptions {
    fn default() -> Self {
        Self {
            stride: 1,
            padding: 0,
            use_bias: true,
        }
    }
}

/// Conv2d (2D 卷积) 层
///
/// # 使用示例
/// ```ignore
/// let conv = Conv2d::new_seeded(1, 32, 3, Conv2dOptions { stride: 2, padding: 2, use_bias: true }, 42);
/// let y = conv.forward(&x)?;
/// ```
#[derive(Debug, Clone)]
pub struct Conv2d {
    /// 卷积核参数 [out_channels, in_channels, kernel_h, kernel_w]
    kernel: Tensor,
    /// 偏置参数 [out_channels]（可选）
    bias: Option<Tensor>,
    options: Conv2dOptions,
}

impl Conv2d {
    /// 创建新的 Conv2d 层（带种子，确保可重复性）
    ///
    /// 卷积核采用 Kaiming 正态初始化（fan_in = in_channels * k * k），偏置零初始化
    pub fn new_seeded(
        in_channels: usize,
        out_channels: usize,
        kernel_size: usize,
        options: Conv2dOptions,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let fan_in = (in_channels * kernel_size * kernel_size).max(1);
        let std = (2.0 / fan_in as f32).sqrt();
        let kernel = Tensor::normal_with_rng(
            0.0,
            std,
            &[out_channels, in_channels, kernel_size, kernel_size],
            &mut rng,
        );
        let bias = options.use_bias.then(|| Tensor::zeros(&[out_channels]));

        Self {
            kernel,
            bias,
            options,
        }
    }

    /// 由给定的卷积核与偏置创建 Conv2d 层
    ///
    /// `options.use_bias`以是否传入`bias`为准
    pub fn from_weights(
        kernel: Tensor,
        bias: Option<Tensor>,
        options: Conv2dOptions,
    ) -> Result<Self, TensorError> {
        let (out_channels, _, _, _) = kernel.nchw("卷积核")?;
        if let Some(ref b) = bias {
            if b.dimension() != 1 || b.size() != out_channels {
                return Err(TensorError::BiasLengthMismatch {
                    bias_len: b.size(),
                    out_channels,
                });
            }
        }
        let options = Conv2dOptions {
            use_bias: bias.is_some(),
            ..options
        };

        Ok(Self {
            kernel,
            bias,
            options,
        })
    }

    /// 计算给定空间尺寸的输入经过本层后的输出尺寸 (H', W')
    pub fn output_size(&self, input_hw: (usize, usize)) -> Result<(usize, usize), TensorError> {
        conv2d_output_size(
            input_hw,
            self.kernel_size(),
            self.options.stride,
            self.options.padding,
        )
    }

    /// 获取输入通道数
    pub fn in_channels(&self) -> usize {
        self.kernel.shape()[1]
    }

    /// 获取输出通道数
    pub fn out_channels(&self) -> usize {
        self.kernel.shape()[0]
    }

    /// 获取卷积核大小 (kH, kW)
    pub fn kernel_size(&self) -> (usize, usize) {
        (self.kernel.shape()[2], self.kernel.shape()[3])
    }

    pub const fn options(&self) -> Conv2dOptions {
        self.options
    }

    pub const fn kernel(&self) -> &Tensor {
        &self.kernel
    }

    pub const fn bias(&self) -> Option<&Tensor> {
        self.bias.as_ref()
    }
}

impl Layer for Conv2d {
    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError> {
        let out = x.conv2d(&self.kernel, self.options.stride, self.options.padding)?;
        match self.bias {
            Some(ref bias) => out.add_channel_bias(bias),
            None => Ok(out),
        }
    }

    fn parameters(&self) -> Vec<&Tensor> {
        let mut params = vec![&self.kernel];
        if let Some(ref bias) = self.bias {
            params.push(bias);
        }
        params
    }
}
