//! Image 组件 - 图片显示
//!
//! 图片从资源缓存按名称取出；缺失时使用缓存的兜底图片且不记录告警。

use super::appearance::{Face, StateColors};
use super::widget::{Widget, WidgetKind};
use crate::config::UiContext;
use crate::{Point, Surface};

/// Image - 图片构建器，控件尺寸等于图片尺寸
pub struct Image {
    name: String,
    position: Point,
}

impl Image {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Point::new(0.0, 0.0),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn build(self, ctx: &UiContext) -> Widget {
        let source = ctx.resources.image(&self.name, true).clone();
        Self::from_surface(self.position, source)
    }

    /// 直接由表面创建图片控件
    pub fn from_surface(position: Point, source: Surface) -> Widget {
        let canvas = Surface::new(source.width(), source.height());
        let face = Face {
            image: Some(source),
            border: None,
            text: None,
        };
        Widget::from_parts(position, canvas, face, StateColors::default(), WidgetKind::Static)
    }
}
