//! 界面配置与上下文
//!
//! 字体、兜底资源路径等原本是进程级的隐式状态，这里集中到
//! `UiConfig`，并由 `UiContext` 在构造时显式传递给各个控件工厂。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Result, UiError};
use crate::resources::{AudioClip, ResourceCache};
use crate::text::{FontHandle, TextRenderer};
use crate::ui::ReleasePolicy;
use crate::{Color, Surface};

/// 配置（JSON，camelCase 键名，所有字段均有默认值）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default = "default_image_path")]
    pub default_image_path: PathBuf,
    #[serde(default = "default_audio_path")]
    pub default_audio_path: PathBuf,
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_list_spacing")]
    pub list_spacing: f32,
    #[serde(default = "default_border_width")]
    pub border_width: f32,
    #[serde(default)]
    pub release_policy: ReleasePolicy,
}

fn default_image_path() -> PathBuf { PathBuf::from("data/textures/missing.png") }
fn default_audio_path() -> PathBuf { PathBuf::from("data/sounds/missing.ogg") }
fn default_font_size() -> f32 { 18.0 }
fn default_list_spacing() -> f32 { 10.0 }
fn default_border_width() -> f32 { 5.0 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_image_path: default_image_path(),
            default_audio_path: default_audio_path(),
            font_path: None,
            font_size: default_font_size(),
            list_spacing: default_list_spacing(),
            border_width: default_border_width(),
            release_policy: ReleasePolicy::default(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| UiError::io(path, e))?;
        Self::from_json(&content)
    }
}

/// 应用上下文：配置、字体与本次会话的资源缓存
#[derive(Debug)]
pub struct UiContext {
    pub config: UiConfig,
    pub font: FontHandle,
    pub resources: ResourceCache,
}

impl UiContext {
    /// 按配置加载字体与兜底资源；任何缺失都只记录日志
    pub fn new(config: UiConfig) -> Self {
        let font = Arc::new(TextRenderer::load_or_blocks(config.font_path.as_deref()));
        let resources = ResourceCache::new(&config);
        Self { config, font, resources }
    }

    /// 方块字形与占位兜底资源，不访问磁盘
    pub fn in_memory(config: UiConfig) -> Self {
        let resources = ResourceCache::with_fallbacks(Surface::filled(1, 1, Color::BLACK), AudioClip::silent());
        Self::with_parts(config, Arc::new(TextRenderer::blocks()), resources)
    }

    /// 使用现成的字体与缓存组装
    pub fn with_parts(config: UiConfig, font: FontHandle, resources: ResourceCache) -> Self {
        Self { config, font, resources }
    }
}
