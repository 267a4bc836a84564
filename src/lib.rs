//! # Conv Probe
//!
//! `conv_probe`是一个用纯rust手动验证二维互相关（即深度学习框架中的“卷积”，conv2d）
//! 在特定步长（stride）与填充（padding）下数值行为的小型张量库。
//!
//! - [`tensor::Tensor`]：基于`ndarray`的NCHW张量；
//! - [`tensor::Tensor::conv2d`]：不翻转卷积核、不加偏置的二维互相关算子；
//! - [`nn`]：可组合的`Layer`（目前有`Conv2d`与`Sequential`）；
//! - [`fixtures`]：探针程序使用的固定输入与卷积核。

pub mod errors;
pub mod fixtures;
pub mod nn;
pub mod tensor;
pub mod utils;
