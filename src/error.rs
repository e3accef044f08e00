//! 错误类型
//!
//! 只有加载类操作（文件 → 解码资源、配置文件、字体文件）会返回错误；
//! 控件、容器与资源缓存的操作全部降级处理，不会失败。

use std::path::PathBuf;
use thiserror::Error;

/// 加载错误
#[derive(Debug, Error)]
pub enum UiError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to decode audio: {0}")]
    Audio(#[from] rodio::decoder::DecoderError),

    #[error("failed to parse font: {0}")]
    Font(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("pixel buffer of {len} bytes does not match {width}x{height}")]
    BufferSize { width: u32, height: u32, len: usize },
}

impl UiError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
