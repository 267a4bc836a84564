use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 按通道加偏置：`self`为 [batch, C, H, W]，`bias`为 [C]，
    /// 第c个通道的所有元素都加上`bias[c]`
    pub fn add_channel_bias(&self, bias: &Self) -> Result<Self, TensorError> {
        let (_, channels, _, _) = self.nchw("输入")?;
        if bias.dimension() != 1 || bias.size() != channels {
            return Err(TensorError::BiasLengthMismatch {
                bias_len: bias.size(),
                out_channels: channels,
            });
        }

        let mut data = self.data.clone();
        for (index, value) in data.indexed_iter_mut() {
            *value += bias[[index[1]]];
        }
        Ok(Self::from_array(data))
    }
}
