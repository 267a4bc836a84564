//! 用固定的输入与水平梯度卷积核跑一次 conv2d（默认 stride=2, padding=0），打印结果及其形状。
//!
//! 可选的第一个参数为 JSON 形式的超参数，如 `'{"stride": 2, "padding": 2}'`。
//! 日志级别由 `RUST_LOG` 控制，默认 `info`。

use conv_probe::errors::TensorError;
use conv_probe::fixtures;
use log::info;

fn main() -> Result<(), TensorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options_json = std::env::args().nth(1);
    info!(
        "输入形状: {:?}，卷积核形状: {:?}，超参数: {}",
        fixtures::input().shape(),
        fixtures::kernel().shape(),
        options_json.as_deref().unwrap_or("默认（stride=2, padding=0）")
    );

    // Display 的末尾已带形状
    let result = fixtures::run(options_json.as_deref())?;
    result.print();
    Ok(())
}
