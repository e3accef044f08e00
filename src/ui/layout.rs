//! 布局系统 - 列表纵向排列与对齐工具
//!
//! 布局只移动控件位置，不改变尺寸和旋转。

use super::widget::{Widget, WidgetKind};
use crate::Rect;

/// 列表对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// 左对齐，从顶部开始排列
    #[default]
    Left,
    /// 水平居中，整体垂直居中
    Center,
    /// 右对齐，整体贴住底部
    Right,
}

/// 列表布局参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayout {
    pub spacing: f32,
    pub alignment: Alignment,
}

impl ListLayout {
    pub fn new(spacing: f32, alignment: Alignment) -> Self {
        Self { spacing, alignment }
    }

    /// 子控件叠放后的总高度（相邻控件之间各一个间距）
    ///
    /// 最后一个控件之后不计间距：居中时整块上下留白相等，
    /// 右对齐时最后一个控件的底边正好贴住边界底边。
    pub fn stacked_height(&self, children: &[Widget]) -> f32 {
        let heights: f32 = children.iter().map(|c| c.bounds().height).sum();
        heights + self.spacing * children.len().saturating_sub(1) as f32
    }

    /// 在 `bounds` 内自上而下排列子控件
    pub fn arrange(&self, children: &mut [Widget], bounds: Rect) {
        let stacked = self.stacked_height(children);
        let mut y = match self.alignment {
            Alignment::Left => bounds.top(),
            Alignment::Center => bounds.center_y() - stacked / 2.0,
            Alignment::Right => bounds.bottom() - stacked,
        };

        for child in children.iter_mut() {
            let rect = child.rect_mut();
            rect.y = y;
            match self.alignment {
                Alignment::Left => rect.x = bounds.left(),
                Alignment::Center => rect.set_center_x(bounds.center_x()),
                Alignment::Right => rect.x = bounds.right() - rect.width,
            }
            y += rect.height + self.spacing;
        }

        log::debug!(
            "Arranged {} children ({:?}, spacing {})",
            children.len(),
            self.alignment,
            self.spacing
        );
    }
}

impl Widget {
    pub fn set_spacing(&mut self, spacing: f32) {
        match self.list_layout_mut() {
            Some(layout) => layout.spacing = spacing,
            None => log::debug!("Widget {:?} is not a list, ignoring spacing", self.id()),
        }
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        match self.list_layout_mut() {
            Some(layout) => layout.alignment = alignment,
            None => log::debug!("Widget {:?} is not a list, ignoring alignment", self.id()),
        }
    }

    fn list_layout_mut(&mut self) -> Option<&mut ListLayout> {
        match &mut self.kind {
            WidgetKind::Container(container) => container.layout_mut(),
            _ => None,
        }
    }

    /// 列表布局：在给定矩形内重新排列子控件；非列表控件无操作
    pub fn arrange(&mut self, bounds: Rect) {
        if let WidgetKind::Container(container) = &mut self.kind {
            if let Some(layout) = container.layout().copied() {
                layout.arrange(container.children_mut(), bounds);
                return;
            }
        }
        log::debug!("Widget {:?} has no list layout, nothing to arrange", self.id());
    }

    /// 在自身边界内排列子控件
    pub fn arrange_in_bounds(&mut self) {
        let bounds = self.bounds();
        self.arrange(bounds);
    }
}

/// 水平居中到 `container`
pub fn align_center_x(widget: &mut Widget, container: Rect) {
    widget.rect_mut().set_center_x(container.center_x());
}

/// 垂直居中到 `container`
pub fn align_center_y(widget: &mut Widget, container: Rect) {
    widget.rect_mut().set_center_y(container.center_y());
}

/// 中心对齐到 `container`
pub fn align_center(widget: &mut Widget, container: Rect) {
    widget.set_center(container.center());
}
