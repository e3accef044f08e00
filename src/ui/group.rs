//! Group / List 组件 - 容器
//!
//! 容器本身也是控件，可以嵌套。子控件按插入顺序保存：
//! 这个顺序既是绘制的 z 序，也是事件分发顺序。

use super::appearance::{ColorUpdate, Face, StateColors};
use super::layout::{Alignment, ListLayout};
use super::widget::{Widget, WidgetId, WidgetKind};
use crate::config::UiContext;
use crate::event::Event;
use crate::{Point, Surface};

/// 容器数据
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<Widget>,
    layout: Option<ListLayout>,
}

impl Container {
    pub fn new(layout: Option<ListLayout>) -> Self {
        Self {
            children: Vec::new(),
            layout,
        }
    }

    /// 追加子控件（不检查重复），返回其 ID
    pub fn add_child(&mut self, child: Widget) -> WidgetId {
        let id = child.id();
        self.children.push(child);
        id
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Widget] {
        &mut self.children
    }

    pub fn layout(&self) -> Option<&ListLayout> {
        self.layout.as_ref()
    }

    pub fn layout_mut(&mut self) -> Option<&mut ListLayout> {
        self.layout.as_mut()
    }

    pub(crate) fn render(&self, target: &mut Surface) {
        for child in &self.children {
            child.render(target);
        }
    }

    /// 事件依次交给每个子控件，不因某个子控件命中而中断
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        let mut hit = false;
        for child in &mut self.children {
            hit |= child.handle_event(event);
        }
        hit
    }
}

impl Widget {
    /// 追加子控件；非容器控件丢弃该子控件并记录告警
    pub fn add_child(&mut self, child: Widget) -> WidgetId {
        match &mut self.kind {
            WidgetKind::Container(container) => container.add_child(child),
            _ => {
                let id = child.id();
                log::warn!("Widget {:?} is not a container, dropping child {:?}", self.id(), id);
                id
            }
        }
    }

    pub fn children(&self) -> &[Widget] {
        match &self.kind {
            WidgetKind::Container(container) => container.children(),
            _ => &[],
        }
    }

    pub fn container(&self) -> Option<&Container> {
        match &self.kind {
            WidgetKind::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            WidgetKind::Container(container) => Some(container),
            _ => None,
        }
    }
}

/// Group - 无布局的容器构建器
pub struct Group {
    position: Point,
    width: f32,
    height: f32,
    colors: StateColors,
}

impl Group {
    pub fn new() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            width: 0.0,
            height: 0.0,
            colors: StateColors::default(),
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

    pub fn build(self) -> Widget {
        container_widget(self.position, self.width, self.height, self.colors, None)
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

/// List - 纵向排列子控件的容器构建器
pub struct List {
    position: Point,
    width: f32,
    height: f32,
    spacing: Option<f32>,
    alignment: Alignment,
}

impl List {
    pub fn new() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            width: 0.0,
            height: 0.0,
            spacing: None,
            alignment: Alignment::Left,
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.position = Point::new(x, y);
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn build(self, ctx: &UiContext) -> Widget {
        let layout = ListLayout::new(
            self.spacing.unwrap_or(ctx.config.list_spacing),
            self.alignment,
        );
        container_widget(self.position, self.width, self.height, StateColors::default(), Some(layout))
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

fn container_widget(
    position: Point,
    width: f32,
    height: f32,
    colors: StateColors,
    layout: Option<ListLayout>,
) -> Widget {
    let surface = Surface::new(width.max(0.0).ceil() as u32, height.max(0.0).ceil() as u32);
    Widget::from_parts(
        position,
        surface,
        Face::default(),
        colors,
        WidgetKind::Container(Container::new(layout)),
    )
}
