//! Mini Widgets - 嵌入实时渲染循环的 2D 控件层
//! 控件拥有自己的渲染表面，通过小型状态机响应指针输入，
//! 容器负责布局、绘制与事件分发；资源缓存按名称提供图片与音频。

mod color;
mod geometry;
mod paint;
mod surface;
pub mod text;
pub mod error;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use surface::Surface;
pub use text::{FontHandle, TextRenderer};
pub use error::{Result, UiError};

// 配置与上下文
pub mod config;
pub use config::{UiConfig, UiContext};

// UI 控件系统
pub mod ui;

// 事件系统
pub mod event;

// 资源缓存
pub mod resources;
pub use resources::{Asset, AssetKind, AssetRef, AudioClip, InsertOutcome, ResourceCache};

// 单元测试
#[cfg(test)]
mod tests;
