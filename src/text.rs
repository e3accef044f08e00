//! 文本渲染模块
//!
//! 有字体文件时使用 fontdue 光栅化；没有字体时退化为方块字形，
//! 保证标签和按钮始终可以渲染。

use crate::error::{Result, UiError};
use crate::{Color, Paint, PaintStyle, Point, Rect, Size, Surface};
use fontdue::{Font, FontSettings, Metrics};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 共享字体句柄
pub type FontHandle = Arc<TextRenderer>;

/// 方块字形的字符宽度比例
const BLOCK_CHAR_WIDTH: f32 = 0.6;

/// 文本渲染器
pub struct TextRenderer {
    /// 字体，None 表示使用方块字形
    font: Option<Font>,
    /// 字形缓存 (char, size_key) -> (Metrics, Bitmap)
    cache: Mutex<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| UiError::Font(e.to_string()))?;
        Ok(Self {
            font: Some(font),
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let font_data = std::fs::read(path).map_err(|e| UiError::io(path, e))?;
        Self::from_bytes(&font_data)
    }

    /// 方块字形渲染器（无字体文件时使用）
    pub fn blocks() -> Self {
        Self {
            font: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// 尝试加载字体，失败时退化为方块字形
    pub fn load_or_blocks(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::blocks();
        };
        match Self::from_file(path) {
            Ok(renderer) => {
                log::info!("Loaded font '{}'", path.display());
                renderer
            }
            Err(e) => {
                log::warn!("Falling back to block glyphs: {}", e);
                Self::blocks()
            }
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// 基线到文本框顶部的距离
    fn ascent(&self, size: f32) -> f32 {
        match &self.font {
            Some(font) => font
                .horizontal_line_metrics(size)
                .map(|m| m.ascent)
                .unwrap_or(size),
            None => size,
        }
    }

    /// 测量单行文本尺寸
    pub fn measure(&self, text: &str, size: f32) -> Size {
        match &self.font {
            Some(font) => {
                let width = text
                    .chars()
                    .map(|ch| font.metrics(ch, size).advance_width)
                    .sum::<f32>();
                let height = font
                    .horizontal_line_metrics(size)
                    .map(|m| m.ascent - m.descent)
                    .unwrap_or(size);
                Size::new(width.ceil(), height.ceil())
            }
            None => Size::new(
                (text.chars().count() as f32 * size * BLOCK_CHAR_WIDTH).ceil(),
                size.ceil(),
            ),
        }
    }

    /// 在 `surface` 上绘制文本，`origin` 为文本框左上角
    pub fn draw_text(&self, surface: &mut Surface, text: &str, origin: Point, size: f32, color: Color) {
        let Some(font) = &self.font else {
            self.draw_blocks(surface, text, origin, size, color);
            return;
        };

        let baseline = origin.y + self.ascent(size);
        let size_key = (size * 10.0) as u32; // 保留1位小数精度
        let mut cursor_x = origin.x;

        for ch in text.chars() {
            let cached = {
                let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
                cache.get(&(ch, size_key)).cloned()
            };

            let (metrics, bitmap) = match cached {
                Some(data) => data,
                None => {
                    let (metrics, bitmap) = font.rasterize(ch, size);
                    let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
                    cache.insert((ch, size_key), (metrics.clone(), bitmap.clone()));
                    (metrics, bitmap)
                }
            };

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = baseline - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let alpha = (color.a as f32 * coverage) as u8;
                    if alpha > 0 {
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;
                        surface.set_pixel(px, py, color.with_alpha(alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 每个字符用一个小矩形表示
    fn draw_blocks(&self, surface: &mut Surface, text: &str, origin: Point, size: f32, color: Color) {
        let char_width = size * BLOCK_CHAR_WIDTH;
        let paint = Paint::new().with_color(color).with_style(PaintStyle::Fill);

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin.x + i as f32 * char_width;
            let char_rect = Rect::new(x + 1.0, origin.y + 2.0, char_width - 2.0, size - 4.0);
            surface.draw_rect(&char_rect, &paint);
        }
    }
}
