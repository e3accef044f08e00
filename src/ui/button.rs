//! Button 组件 - 可点击的文本按钮
//!
//! 指针事件到外观状态的转换表：
//!
//! | 事件        | 指针在内                        | 指针在外   |
//! |-------------|---------------------------------|------------|
//! | PointerMove | Selected                        | Default    |
//! | PointerDown | 触发动作 → Selected → Active，按下 | Default    |
//! | PointerUp   | 仅在按下时：Selected            | 仅在按下时：Default |
//!
//! PointerMove 从不修改按下标记；PointerUp 之后是否清除按下标记由 `ReleasePolicy` 决定。

use std::fmt;

use serde::Deserialize;

use super::appearance::{Border, ColorUpdate, Face, StateColors, TextFace, VisualState};
use super::widget::{Widget, WidgetKind};
use crate::config::UiContext;
use crate::event::EventKind;
use crate::{Color, Point, Surface};

/// 松开指针后按下标记的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleasePolicy {
    /// PointerUp 后清除按下标记
    #[default]
    Clear,
    /// 保持按下标记（兼容旧行为：按钮点过一次后一直处于“已按下”）
    Latch,
}

/// 可交互控件的状态：按下标记与绑定的动作
pub struct Interaction {
    pressed: bool,
    action: Option<Box<dyn FnMut()>>,
    release_policy: ReleasePolicy,
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("pressed", &self.pressed)
            .field("has_action", &self.action.is_some())
            .field("release_policy", &self.release_policy)
            .finish()
    }
}

impl Interaction {
    pub fn new(action: Option<Box<dyn FnMut()>>, release_policy: ReleasePolicy) -> Self {
        Self {
            pressed: false,
            action,
            release_policy,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn release_policy(&self) -> ReleasePolicy {
        self.release_policy
    }

    /// 执行状态机一步，返回需要依次应用的外观状态
    pub(crate) fn respond(&mut self, kind: EventKind, inside: bool) -> &'static [VisualState] {
        match (kind, inside) {
            (EventKind::PointerMove, true) => &[VisualState::Selected],
            (EventKind::PointerMove, false) => &[VisualState::Default],
            (EventKind::PointerDown, true) => {
                if let Some(action) = self.action.as_mut() {
                    log::debug!("Button action fired");
                    action();
                }
                self.pressed = true;
                &[VisualState::Selected, VisualState::Active]
            }
            (EventKind::PointerDown, false) => &[VisualState::Default],
            (EventKind::PointerUp, inside) => {
                if !self.pressed {
                    return &[];
                }
                if self.release_policy == ReleasePolicy::Clear {
                    self.pressed = false;
                }
                if inside {
                    &[VisualState::Selected]
                } else {
                    &[VisualState::Default]
                }
            }
            (EventKind::KeyDown | EventKind::KeyUp, _) => &[],
        }
    }
}

impl Widget {
    /// 可交互控件的按下标记；其他控件返回 None
    pub fn is_pressed(&self) -> Option<bool> {
        match &self.kind {
            WidgetKind::Interactive(interaction) => Some(interaction.is_pressed()),
            _ => None,
        }
    }

    /// 替换绑定的动作；非交互控件忽略
    pub fn set_action<F>(&mut self, action: F)
    where
        F: FnMut() + 'static,
    {
        match &mut self.kind {
            WidgetKind::Interactive(interaction) => interaction.action = Some(Box::new(action)),
            _ => log::debug!("Widget {:?} is not interactive, ignoring action", self.id()),
        }
    }
}

/// Button - 按钮构建器
pub struct Button {
    label: String,
    position: Point,
    width: f32,
    height: f32,
    font_size: Option<f32>,
    colors: StateColors,
    border_colors: StateColors,
    border_width: Option<f32>,
    release_policy: Option<ReleasePolicy>,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            position: Point::new(0.0, 0.0),
            width: 120.0,
            height: 44.0,
            font_size: None,
            colors: StateColors::new(
                Color::TRANSPARENT,
                Color::rgb(100, 100, 100),
                Color::rgb(150, 150, 150),
            ),
            border_colors: StateColors::new(Color::WHITE, Color::YELLOW, Color::GREEN),
            border_width: None,
            release_policy: None,
            on_click: None,
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.position = Point::new(x, y);
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_colors(mut self, update: ColorUpdate) -> Self {
        self.colors = self.colors.apply(update);
        self
    }

    pub fn with_border_colors(mut self, update: ColorUpdate) -> Self {
        self.border_colors = self.border_colors.apply(update);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = Some(policy);
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn build(self, ctx: &UiContext) -> Widget {
        let face = Face {
            image: None,
            border: Some(Border {
                width: self.border_width.unwrap_or(ctx.config.border_width),
                colors: self.border_colors,
            }),
            text: Some(TextFace {
                text: self.label,
                font: ctx.font.clone(),
                size: self.font_size.unwrap_or(ctx.config.font_size),
                colors: None,
            }),
        };
        let interaction = Interaction::new(
            self.on_click,
            self.release_policy.unwrap_or(ctx.config.release_policy),
        );
        let surface = Surface::new(self.width.max(0.0).ceil() as u32, self.height.max(0.0).ceil() as u32);

        Widget::from_parts(
            self.position,
            surface,
            face,
            self.colors,
            WidgetKind::Interactive(interaction),
        )
    }
}
