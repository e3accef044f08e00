//! 控件基础定义
//!
//! 所有控件共用一条数据记录（几何、旋转、三态颜色、原始表面与渲染表面），
//! 行为差异由 `WidgetKind` 标签决定，渲染与事件分发按标签匹配。

use std::sync::atomic::{AtomicU64, Ordering};

use super::appearance::{ColorUpdate, Face, StateColors, VisualState};
use super::button::Interaction;
use super::group::Container;
use crate::event::Event;
use crate::{Point, Rect, Size, Surface};

static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 控件 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    pub fn new() -> Self {
        Self(WIDGET_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// 控件行为
#[derive(Debug)]
pub enum WidgetKind {
    /// 只绘制，不响应事件（普通元素、标签、图片）
    Static,
    /// 可交互（按钮）
    Interactive(Interaction),
    /// 容器（Group / List）
    Container(Container),
}

/// 控件
#[derive(Debug)]
pub struct Widget {
    id: WidgetId,
    /// 当前渲染表面的边界
    rect: Rect,
    /// 旋转角度（度），归一化到 [0, 360)
    rotation: f32,
    colors: StateColors,
    state: VisualState,
    face: Face,
    /// 未旋转的原始表面，旋转的唯一来源
    original: Surface,
    /// 渲染表面 = rotated(original)
    image: Surface,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    /// 创建普通元素，表面全透明
    pub fn new(position: Point, size: Size) -> Self {
        let surface = Surface::new(size.width.max(0.0).ceil() as u32, size.height.max(0.0).ceil() as u32);
        Self::from_parts(position, surface, Face::default(), StateColors::default(), WidgetKind::Static)
    }

    pub(crate) fn from_parts(
        position: Point,
        original: Surface,
        face: Face,
        colors: StateColors,
        kind: WidgetKind,
    ) -> Self {
        let mut widget = Self {
            id: WidgetId::new(),
            rect: Rect::from_origin_size(position, original.rect().size()),
            rotation: 0.0,
            colors,
            state: VisualState::Default,
            face,
            image: original.clone(),
            original,
            kind,
        };
        widget.repaint();
        widget
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// 当前渲染表面的边界
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// 左上角位置
    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// 未旋转时的尺寸
    pub fn base_size(&self) -> Size {
        self.original.rect().size()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn state(&self) -> VisualState {
        self.state
    }

    pub fn colors(&self) -> StateColors {
        self.colors
    }

    /// 当前状态对应的颜色
    pub fn current_color(&self) -> crate::Color {
        self.colors.get(self.state)
    }

    pub fn original_surface(&self) -> &Surface {
        &self.original
    }

    pub fn render_surface(&self) -> &Surface {
        &self.image
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    /// 移动到新的左上角，不影响尺寸与旋转
    pub fn set_position(&mut self, position: Point) {
        self.rect.set_origin(position);
    }

    pub fn set_center(&mut self, center: Point) {
        self.rect.set_center(center);
    }

    pub(crate) fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    pub fn set_default(&mut self) {
        self.set_state(VisualState::Default);
    }

    pub fn set_active(&mut self) {
        self.set_state(VisualState::Active);
    }

    pub fn set_selected(&mut self) {
        self.set_state(VisualState::Selected);
    }

    /// 切换状态：重绘原始表面并重新应用旋转
    pub fn set_state(&mut self, state: VisualState) {
        self.state = state;
        self.repaint();
    }

    /// 部分更新三态颜色，之后总是回到 Default 状态
    pub fn set_colors(&mut self, update: ColorUpdate) {
        self.colors = self.colors.apply(update);
        self.set_state(VisualState::Default);
    }

    /// 部分更新边框颜色，保持当前状态；没有边框的控件忽略
    pub fn set_border_colors(&mut self, update: ColorUpdate) {
        match &mut self.face.border {
            Some(border) => {
                border.colors = border.colors.apply(update);
                self.repaint();
            }
            None => log::debug!("Widget {:?} has no border, ignoring border colors", self.id),
        }
    }

    /// 设置旋转角度；总是从原始表面重新计算，不会累积
    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = crate::surface::normalize_degrees(angle);
        self.update_rotation();
    }

    fn repaint(&mut self) {
        self.original.fill(self.colors.get(self.state));
        self.face.paint(&mut self.original, self.state);
        self.update_rotation();
    }

    /// 以当前中心为基准重新派生渲染表面
    fn update_rotation(&mut self) {
        let center = self.rect.center();
        self.image = self.original.rotated(self.rotation);
        self.rect = Rect::from_center(center, self.image.rect().size());
    }

    /// 绘制到目标表面，容器随后按插入顺序绘制子控件
    pub fn render(&self, target: &mut Surface) {
        target.blit(&self.image, self.rect.x.round() as i32, self.rect.y.round() as i32);

        if let WidgetKind::Container(container) = &self.kind {
            container.render(target);
        }
    }

    /// 处理输入事件，返回事件位置是否落在本控件（或任一子控件）上
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match self.kind {
            WidgetKind::Static => false,
            WidgetKind::Container(ref mut container) => container.handle_event(event),
            WidgetKind::Interactive(_) => self.handle_pointer(event),
        }
    }

    fn handle_pointer(&mut self, event: &Event) -> bool {
        let Some(position) = event.position() else {
            return false;
        };
        let inside = self.rect.contains(&position);

        let WidgetKind::Interactive(interaction) = &mut self.kind else {
            return false;
        };
        let transitions = interaction.respond(event.kind(), inside);

        for &state in transitions {
            self.set_state(state);
        }
        inside
    }

    /// 按 ID 查找（包括自身与所有后代）
    pub fn find(&self, id: WidgetId) -> Option<&Widget> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        if self.id == id {
            return Some(self);
        }
        match &mut self.kind {
            WidgetKind::Container(container) => container
                .children_mut()
                .iter_mut()
                .find_map(|child| child.find_mut(id)),
            _ => None,
        }
    }
}
