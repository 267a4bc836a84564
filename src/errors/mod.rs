use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 数字比较用
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
    },

    // ShapeError 族
    #[error("数据长度为{data_len}，与形状{shape:?}所需的元素个数不一致")]
    DataLengthMismatch { data_len: usize, shape: Vec<usize> },
    #[error("{tensor_name}必须是{expected}阶张量，实际形状为{shape:?}")]
    RankMismatch {
        tensor_name: String,
        expected: usize,
        shape: Vec<usize>,
    },
    #[error("输入通道数{input_channels}与卷积核输入通道数{kernel_channels}不匹配")]
    ChannelMismatch {
        input_channels: usize,
        kernel_channels: usize,
    },
    #[error("卷积核{kernel:?}大于填充后的输入{padded_input:?}，输出尺寸无效")]
    KernelLargerThanInput {
        padded_input: (usize, usize),
        kernel: (usize, usize),
    },
    #[error("偏置长度{bias_len}与输出通道数{out_channels}不一致")]
    BiasLengthMismatch { bias_len: usize, out_channels: usize },
    #[error("尺寸{size}两侧各填充{padding}后超出usize范围")]
    PaddingOverflow { size: usize, padding: usize },

    // 配置解析
    #[error("配置解析失败：{message}")]
    InvalidConfig { message: String },
}

impl TensorError {
    /// 是否属于形状类错误（ShapeError 族）
    pub const fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::DataLengthMismatch { .. }
                | Self::RankMismatch { .. }
                | Self::ChannelMismatch { .. }
                | Self::KernelLargerThanInput { .. }
                | Self::BiasLengthMismatch { .. }
                | Self::PaddingOverflow { .. }
        )
    }
}
