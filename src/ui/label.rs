//! Label 组件 - 文本显示

use super::appearance::{Face, StateColors, TextFace};
use super::widget::{Widget, WidgetKind};
use crate::config::UiContext;
use crate::{Color, Point, Surface};

/// Label - 标签构建器，控件尺寸等于文本尺寸
pub struct Label {
    text: String,
    position: Point,
    font_size: Option<f32>,
    color: Color,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            position: Point::new(0.0, 0.0),
            font_size: None,
            color: Color::WHITE,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn build(self, ctx: &UiContext) -> Widget {
        let size = self.font_size.unwrap_or(ctx.config.font_size);
        let measured = ctx.font.measure(&self.text, size);
        let face = Face {
            image: None,
            border: None,
            text: Some(TextFace {
                text: self.text,
                font: ctx.font.clone(),
                size,
                colors: Some(StateColors::uniform(self.color)),
            }),
        };

        Widget::from_parts(
            self.position,
            Surface::new(measured.width as u32, measured.height as u32),
            face,
            StateColors::default(),
            WidgetKind::Static,
        )
    }
}

impl Widget {
    /// 标签或按钮的文本
    pub fn text(&self) -> Option<&str> {
        self.face().text.as_ref().map(|t| t.text.as_str())
    }
}
