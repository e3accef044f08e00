//! 外观：三态颜色与控件表面的绘制内容

use crate::text::FontHandle;
use crate::{Color, Paint, PaintStyle, Point, Surface};

/// 外观状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Default,
    Active,
    Selected,
}

/// 三种状态对应的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateColors {
    pub default: Color,
    pub active: Color,
    pub selected: Color,
}

impl StateColors {
    pub const fn new(default: Color, active: Color, selected: Color) -> Self {
        Self { default, active, selected }
    }

    /// 三种状态使用同一颜色
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color)
    }

    pub fn get(&self, state: VisualState) -> Color {
        match state {
            VisualState::Default => self.default,
            VisualState::Active => self.active,
            VisualState::Selected => self.selected,
        }
    }

    /// 应用部分更新，返回新值
    #[must_use]
    pub fn apply(self, update: ColorUpdate) -> Self {
        Self {
            default: update.default.unwrap_or(self.default),
            active: update.active.unwrap_or(self.active),
            selected: update.selected.unwrap_or(self.selected),
        }
    }
}

/// 颜色的部分更新，未给出的颜色保持不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorUpdate {
    pub default: Option<Color>,
    pub active: Option<Color>,
    pub selected: Option<Color>,
}

impl ColorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同时更新三种颜色
    pub fn all(colors: StateColors) -> Self {
        Self {
            default: Some(colors.default),
            active: Some(colors.active),
            selected: Some(colors.selected),
        }
    }

    pub fn with_default(mut self, color: Color) -> Self {
        self.default = Some(color);
        self
    }

    pub fn with_active(mut self, color: Color) -> Self {
        self.active = Some(color);
        self
    }

    pub fn with_selected(mut self, color: Color) -> Self {
        self.selected = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.active.is_none() && self.selected.is_none()
    }
}

/// 边框
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub colors: StateColors,
}

/// 居中绘制的文本
#[derive(Debug, Clone)]
pub struct TextFace {
    pub text: String,
    pub font: FontHandle,
    pub size: f32,
    /// None 时文本跟随边框颜色
    pub colors: Option<StateColors>,
}

/// 每次重绘时叠加在底色之上的内容
#[derive(Debug, Clone, Default)]
pub struct Face {
    pub image: Option<Surface>,
    pub border: Option<Border>,
    pub text: Option<TextFace>,
}

impl Face {
    /// 依次绘制图片、边框、文本
    pub(crate) fn paint(&self, surface: &mut Surface, state: VisualState) {
        if let Some(image) = &self.image {
            surface.blit(image, 0, 0);
        }

        let border_color = self.border.as_ref().map(|b| b.colors.get(state));
        if let (Some(border), Some(color)) = (&self.border, border_color) {
            if border.width > 0.0 {
                let paint = Paint::new()
                    .with_color(color)
                    .with_style(PaintStyle::Stroke)
                    .with_stroke_width(border.width);
                let bounds = surface.rect();
                surface.draw_rect(&bounds, &paint);
            }
        }

        if let Some(face) = &self.text {
            let color = match face.colors {
                Some(colors) => colors.get(state),
                None => border_color.unwrap_or(Color::WHITE),
            };
            let measured = face.font.measure(&face.text, face.size);
            let origin = Point::new(
                ((surface.width() as f32 - measured.width) / 2.0).floor(),
                ((surface.height() as f32 - measured.height) / 2.0).floor(),
            );
            face.font.draw_text(surface, &face.text, origin, face.size, color);
        }
    }
}
