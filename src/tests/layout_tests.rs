//! 列表布局与对齐工具单元测试

use crate::ui::{align_center, align_center_x, align_center_y, Alignment, List, ListLayout, Widget};
use crate::{Point, Rect, Size};

use super::test_context;

/// 宽 50/60/70、高 20/30/40 的三个子控件
fn stacked_list(alignment: Alignment) -> Widget {
    let ctx = test_context();
    let mut list = List::new()
        .with_frame(0.0, 0.0, 200.0, 300.0)
        .with_alignment(alignment)
        .build(&ctx);
    for (w, h) in [(50.0, 20.0), (60.0, 30.0), (70.0, 40.0)] {
        list.add_child(Widget::new(Point::new(500.0, 500.0), Size::new(w, h)));
    }
    list
}

fn positions(list: &Widget) -> Vec<(f32, f32)> {
    list.children().iter().map(|c| (c.bounds().x, c.bounds().y)).collect()
}

/// 测试左对齐：从顶部开始，贴左边
#[test]
fn test_left_alignment() {
    let mut list = stacked_list(Alignment::Left);
    list.arrange_in_bounds();

    assert_eq!(positions(&list), vec![(0.0, 0.0), (0.0, 30.0), (0.0, 70.0)]);
}

/// 测试居中：整体垂直居中，每个子控件水平居中
#[test]
fn test_center_alignment() {
    let mut list = stacked_list(Alignment::Center);
    list.arrange_in_bounds();

    assert_eq!(positions(&list), vec![(75.0, 95.0), (70.0, 125.0), (65.0, 165.0)]);
}

/// 测试右对齐：整体贴底，每个子控件贴右边
#[test]
fn test_right_alignment() {
    let mut list = stacked_list(Alignment::Right);
    list.arrange_in_bounds();

    assert_eq!(positions(&list), vec![(150.0, 190.0), (140.0, 220.0), (130.0, 260.0)]);
    let last = list.children()[2].bounds();
    assert_eq!(last.bottom(), 300.0);
}

/// 测试布局不改变子控件尺寸
#[test]
fn test_arrange_keeps_sizes() {
    let mut list = stacked_list(Alignment::Center);
    list.arrange_in_bounds();

    let sizes: Vec<_> = list.children().iter().map(|c| c.bounds().size()).collect();
    assert_eq!(
        sizes,
        vec![Size::new(50.0, 20.0), Size::new(60.0, 30.0), Size::new(70.0, 40.0)]
    );
}

/// 测试修改间距与对齐后重新排列
#[test]
fn test_change_spacing_and_alignment() {
    let mut list = stacked_list(Alignment::Left);
    list.set_spacing(0.0);
    list.arrange_in_bounds();
    assert_eq!(positions(&list), vec![(0.0, 0.0), (0.0, 20.0), (0.0, 50.0)]);

    list.set_alignment(Alignment::Right);
    list.arrange(Rect::new(100.0, 0.0, 100.0, 100.0));
    assert_eq!(positions(&list), vec![(150.0, 10.0), (140.0, 30.0), (130.0, 60.0)]);
}

/// 测试默认间距来自配置
#[test]
fn test_default_spacing_from_config() {
    let ctx = test_context();
    let list = List::new().build(&ctx);

    let layout = list.container().and_then(|c| c.layout()).copied();
    assert_eq!(layout, Some(ListLayout::new(10.0, Alignment::Left)));
}

/// 测试叠放高度：相邻控件之间各一个间距
#[test]
fn test_stacked_height() {
    let list = stacked_list(Alignment::Left);
    let layout = ListLayout::new(10.0, Alignment::Left);

    assert_eq!(layout.stacked_height(list.children()), 110.0);
    assert_eq!(layout.stacked_height(&[]), 0.0);
}

/// 测试空列表排列不出错
#[test]
fn test_arrange_empty_list() {
    let ctx = test_context();
    let mut list = List::new().with_alignment(Alignment::Center).build(&ctx);
    list.arrange(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(list.children().is_empty());
}

/// 测试 Group 没有布局，arrange 不移动子控件
#[test]
fn test_group_arrange_is_noop() {
    let mut group = crate::ui::Group::new().build();
    group.add_child(Widget::new(Point::new(7.0, 8.0), Size::new(5.0, 5.0)));

    group.arrange(Rect::new(0.0, 0.0, 100.0, 100.0));

    assert_eq!(group.children()[0].position(), Point::new(7.0, 8.0));
}

/// 测试旋转后的子控件按渲染尺寸参与布局
#[test]
fn test_rotated_child_uses_rendered_size() {
    let ctx = test_context();
    let mut list = List::new().with_frame(0.0, 0.0, 200.0, 300.0).build(&ctx);
    let mut child = Widget::new(Point::new(0.0, 0.0), Size::new(40.0, 10.0));
    child.set_rotation(90.0);
    list.add_child(child);
    list.add_child(Widget::new(Point::new(0.0, 0.0), Size::new(40.0, 10.0)));

    list.arrange_in_bounds();

    assert_eq!(positions(&list), vec![(0.0, 0.0), (0.0, 50.0)]);
}

/// 测试对齐工具
#[test]
fn test_align_helpers() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let mut widget = Widget::new(Point::new(3.0, 4.0), Size::new(10.0, 10.0));

    align_center_x(&mut widget, bounds);
    assert_eq!(widget.position(), Point::new(45.0, 4.0));

    align_center_y(&mut widget, bounds);
    assert_eq!(widget.position(), Point::new(45.0, 20.0));

    widget.set_position(Point::new(0.0, 0.0));
    align_center(&mut widget, bounds);
    assert_eq!(widget.position(), Point::new(45.0, 20.0));
}

/// 测试间距只出现在相邻控件之间：居中时上下留白相等，右对齐时不留尾部间距
#[test]
fn test_no_trailing_spacing() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 300.0);

    let mut centered = stacked_list(Alignment::Center);
    centered.set_spacing(20.0);
    centered.arrange(bounds);
    let first = centered.children()[0].bounds();
    let last = centered.children()[2].bounds();
    assert_eq!(first.top() - bounds.top(), bounds.bottom() - last.bottom());
    assert_eq!(first.top(), 85.0);

    let mut right = stacked_list(Alignment::Right);
    right.set_spacing(20.0);
    right.arrange(bounds);
    assert_eq!(right.children()[2].bounds().bottom(), bounds.bottom());
    assert_eq!(right.children()[0].bounds().top(), 170.0);
}
