//! 探针程序的固定输入与卷积核（字面量常量，非配置项）

use crate::errors::TensorError;
use crate::nn::{Conv2d, Conv2dOptions, Layer};
use crate::tensor::Tensor;

/// 10×10 输入：每行都是 1..=10，唯独第3行（下标2）的末尾两个数被替换为 11、15
pub const INPUT: [[f32; 10]; 10] = [
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 11., 15.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
    [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.],
];

/// 3×3 水平梯度检测核
pub const KERNEL: [[f32; 3]; 3] = [[-1., 0., 1.], [-1., 0., 1.], [-1., 0., 1.]];

pub const STRIDE: usize = 2;
pub const PADDING: usize = 0;

/// 形状为 [1, 1, 10, 10] 的输入张量
pub fn input() -> Tensor {
    Tensor::from_matrix(&INPUT)
}

/// 形状为 [1, 1, 3, 3] 的卷积核张量
pub fn kernel() -> Tensor {
    Tensor::from_matrix(&KERNEL)
}

/// 探针默认的超参数：stride=2, padding=0，不加偏置
pub const fn options() -> Conv2dOptions {
    Conv2dOptions {
        stride: STRIDE,
        padding: PADDING,
        use_bias: false,
    }
}

/// 用固定输入与卷积核跑一次前向计算。
/// `options_json`为`None`时使用[`options`]，否则按 JSON 解析（缺失字段取`Conv2dOptions`的默认值）。
pub fn run(options_json: Option<&str>) -> Result<Tensor, TensorError> {
    let options = match options_json {
        Some(json) => Conv2dOptions::from_json(json)?,
        None => self::options(),
    };
    let bias = options
        .use_bias
        .then(|| Tensor::zeros(&[kernel().shape()[0]]));
    let conv = Conv2d::from_weights(kernel(), bias, options)?;
    conv.forward(&input())
}
