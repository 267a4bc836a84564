use crate::tensor::Tensor;
use ndarray::{Array, IxDyn};
use std::fmt;

impl Tensor {
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn display_recursive(
            f: &mut fmt::Formatter,
            data: &Array<f32, IxDyn>,
            indices: &mut Vec<usize>,
            depth: usize,
            rank: usize,
        ) -> fmt::Result {
            if depth == rank {
                write!(f, "{:8.4}", data[&indices[..]])?;
            } else {
                write!(f, "[")?;
                for i in 0..data.shape()[depth] {
                    indices[depth] = i;
                    display_recursive(f, data, indices, depth + 1, rank)?;

                    if i != data.shape()[depth] - 1 {
                        write!(f, ", ")?;
                        // 子数组之间换行，并按深度缩进以对齐左括号
                        if depth + 1 < rank {
                            write!(f, "\n{}", " ".repeat(depth + 1))?;
                        }
                    }
                }
                write!(f, "]")?;
            }
            Ok(())
        }

        let shape = self.shape();
        let rank = shape.len();
        let mut indices = vec![0; rank];
        if self.size() == 0 {
            return writeln!(f, "[]\n形状: {shape:?}");
        }
        display_recursive(f, &self.data, &mut indices, 0, rank)?;
        writeln!(f, "\n形状: {shape:?}")
    }
}
