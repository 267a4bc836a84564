/*
 * @Description  : 神经网络层：Layer trait、Conv2d 层与 Sequential 组合
 */

mod layer;
mod sequential;

pub use layer::{Conv2d, Conv2dOptions, Layer, LayerKind};
pub use sequential::Sequential;
