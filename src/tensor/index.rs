use std::ops::Index;

use super::Tensor;

// 引用式索引：索引数必须与张量阶数一致，越界时panic（同 ndarray）
impl Index<&[usize]> for Tensor {
    type Output = f32;

    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f32;

    fn index(&self, index: [usize; N]) -> &Self::Output {
        &self.data[&index[..]]
    }
}
