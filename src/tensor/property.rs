/*
 * @Description  : 本文件仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 */

use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 张量的形状，如4阶的 NCHW 张量为[n, c, h, w]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 张量的维（dim）数、阶（rank）数
    /// 即`shape()`的元素个数--如：形状为`[]`的标量阶数为0，向量阶数为1，矩阵阶数为2，以此类推
    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为 [1, 4]，[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 以行优先顺序拷贝出所有元素
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 校验张量为4阶（NCHW），并返回其四个维度
    pub(crate) fn nchw(&self, tensor_name: &str) -> Result<(usize, usize, usize, usize), TensorError> {
        match *self.shape() {
            [n, c, h, w] => Ok((n, c, h, w)),
            _ => Err(TensorError::RankMismatch {
                tensor_name: tensor_name.to_string(),
                expected: 4,
                shape: self.shape().to_vec(),
            }),
        }
    }
}
