//! 控件基础单元测试：状态、颜色、旋转

use crate::ui::{ColorUpdate, Image, Label, StateColors, VisualState, Widget};
use crate::{Color, Point, Rect, Size, Surface};

fn plain_widget() -> Widget {
    Widget::new(Point::new(10.0, 10.0), Size::new(100.0, 30.0))
}

/// 测试新建控件的初始状态
#[test]
fn test_new_widget_defaults() {
    let widget = plain_widget();

    assert_eq!(widget.bounds(), Rect::new(10.0, 10.0, 100.0, 30.0));
    assert_eq!(widget.center(), Point::new(60.0, 25.0));
    assert_eq!(widget.rotation(), 0.0);
    assert_eq!(widget.state(), VisualState::Default);
    assert_eq!(widget.render_surface(), widget.original_surface());
    assert!(widget.children().is_empty());
}

/// 测试每个控件获得不同的 ID
#[test]
fn test_widget_ids_are_unique() {
    let a = plain_widget();
    let b = plain_widget();
    assert_ne!(a.id(), b.id());
}

/// 测试状态切换使用对应颜色重绘表面
#[test]
fn test_state_switch_repaints_surface() {
    let mut widget = plain_widget();
    widget.set_colors(ColorUpdate::all(StateColors::new(Color::RED, Color::GREEN, Color::BLUE)));

    assert_eq!(widget.original_surface().get_pixel(0, 0), Color::RED);

    widget.set_active();
    assert_eq!(widget.state(), VisualState::Active);
    assert_eq!(widget.current_color(), Color::GREEN);
    assert_eq!(widget.render_surface().get_pixel(50, 15), Color::GREEN);

    widget.set_selected();
    assert_eq!(widget.render_surface().get_pixel(50, 15), Color::BLUE);

    widget.set_default();
    assert_eq!(widget.render_surface().get_pixel(50, 15), Color::RED);
}

/// 测试部分更新颜色只替换给出的项，并回到 Default 状态
#[test]
fn test_partial_color_update_resets_state() {
    let mut widget = plain_widget();
    widget.set_colors(ColorUpdate::all(StateColors::new(Color::RED, Color::GREEN, Color::BLUE)));
    widget.set_selected();

    widget.set_colors(ColorUpdate::new().with_active(Color::YELLOW));

    assert_eq!(widget.state(), VisualState::Default);
    assert_eq!(widget.colors(), StateColors::new(Color::RED, Color::YELLOW, Color::BLUE));
    assert_eq!(widget.render_surface().get_pixel(0, 0), Color::RED);
}

/// 测试空更新不改变颜色，但仍回到 Default
#[test]
fn test_empty_color_update() {
    let mut widget = plain_widget();
    widget.set_colors(ColorUpdate::new().with_default(Color::BLACK));
    widget.set_active();

    let update = ColorUpdate::new();
    assert!(update.is_empty());
    widget.set_colors(update);

    assert_eq!(widget.state(), VisualState::Default);
    assert_eq!(widget.colors().default, Color::BLACK);
}

/// 测试旋转保持中心不变
#[test]
fn test_rotation_preserves_center() {
    let mut widget = plain_widget();

    widget.set_rotation(90.0);

    assert_eq!(widget.render_surface().width(), 30);
    assert_eq!(widget.render_surface().height(), 100);
    assert_eq!(widget.bounds(), Rect::new(45.0, -25.0, 30.0, 100.0));
    assert_eq!(widget.center(), Point::new(60.0, 25.0));
    assert_eq!(widget.base_size(), Size::new(100.0, 30.0));
}

/// 测试旋转不累积：重复设置同一角度结果相同
#[test]
fn test_rotation_is_not_cumulative() {
    let mut widget = plain_widget();

    widget.set_rotation(90.0);
    widget.set_rotation(90.0);
    assert_eq!(widget.bounds(), Rect::new(45.0, -25.0, 30.0, 100.0));

    widget.set_rotation(0.0);
    assert_eq!(widget.bounds(), Rect::new(10.0, 10.0, 100.0, 30.0));
}

/// 测试任意角度旋转后回到 0° 时像素与原始表面一致
#[test]
fn test_rotation_back_to_zero_restores_pixels() {
    let data = [
        255, 0, 0, 255, 0, 255, 0, 255,
        0, 0, 255, 255, 255, 255, 255, 255,
    ];
    let pattern = Surface::from_rgba(2, 2, &data).unwrap();
    let mut widget = Image::from_surface(Point::new(5.0, 5.0), pattern.clone());

    widget.set_rotation(37.0);
    assert_eq!(widget.rotation(), 37.0);
    assert_eq!(widget.center(), Point::new(6.0, 6.0));

    widget.set_rotation(0.0);
    assert_eq!(widget.render_surface(), &pattern);
    assert_eq!(widget.bounds(), Rect::new(5.0, 5.0, 2.0, 2.0));
}

/// 测试角度归一化
#[test]
fn test_rotation_normalized() {
    let mut widget = plain_widget();

    widget.set_rotation(450.0);
    assert_eq!(widget.rotation(), 90.0);

    widget.set_rotation(-90.0);
    assert_eq!(widget.rotation(), 270.0);
    assert_eq!(widget.render_surface().width(), 30);
}

/// 测试旋转后状态切换仍保持旋转
#[test]
fn test_state_change_keeps_rotation() {
    let mut widget = plain_widget();
    widget.set_colors(ColorUpdate::new().with_active(Color::GREEN));
    widget.set_rotation(90.0);

    widget.set_active();

    assert_eq!(widget.bounds(), Rect::new(45.0, -25.0, 30.0, 100.0));
    assert_eq!(widget.render_surface().get_pixel(10, 50), Color::GREEN);
}

/// 测试移动不改变尺寸
#[test]
fn test_set_position_and_center() {
    let mut widget = plain_widget();

    widget.set_position(Point::new(0.0, 0.0));
    assert_eq!(widget.bounds(), Rect::new(0.0, 0.0, 100.0, 30.0));

    widget.set_center(Point::new(100.0, 100.0));
    assert_eq!(widget.position(), Point::new(50.0, 85.0));
}

/// 测试渲染到目标表面的位置
#[test]
fn test_render_at_position() {
    let mut widget = Widget::new(Point::new(2.0, 3.0), Size::new(4.0, 4.0));
    widget.set_colors(ColorUpdate::new().with_default(Color::RED));

    let mut target = Surface::filled(10, 10, Color::BLACK);
    widget.render(&mut target);

    assert_eq!(target.get_pixel(1, 3), Color::BLACK);
    assert_eq!(target.get_pixel(2, 3), Color::RED);
    assert_eq!(target.get_pixel(5, 6), Color::RED);
    assert_eq!(target.get_pixel(6, 7), Color::BLACK);
}

/// 测试标签尺寸等于测量尺寸
#[test]
fn test_label_size_matches_measure() {
    let ctx = super::test_context();
    let label = Label::new("abc").with_position(3.0, 4.0).with_font_size(10.0).build(&ctx);

    let measured = ctx.font.measure("abc", 10.0);
    assert_eq!(measured.height, 10.0);
    assert_eq!(label.bounds(), Rect::from_origin_size(Point::new(3.0, 4.0), measured));
    assert_eq!(label.text(), Some("abc"));
    // 方块字形绘制在字符格内
    assert_eq!(label.render_surface().get_pixel(2, 3), Color::WHITE);
    assert_eq!(label.render_surface().get_pixel(0, 0), Color::TRANSPARENT);
}

/// 测试没有边框的控件忽略边框颜色更新
#[test]
fn test_border_colors_without_border() {
    let mut widget = plain_widget();
    widget.set_colors(ColorUpdate::new().with_default(Color::RED));
    widget.set_border_colors(ColorUpdate::new().with_default(Color::BLUE));

    assert!(widget.face().border.is_none());
    assert_eq!(widget.render_surface().get_pixel(0, 0), Color::RED);
}

/// 测试控件远在屏幕之外时渲染不会溢出，目标表面保持不变
#[test]
fn test_render_far_off_screen() {
    let mut target = Surface::filled(10, 10, Color::BLACK);

    let mut far_right = Widget::new(Point::new(3.0e9, 0.0), Size::new(4.0, 4.0));
    far_right.set_colors(ColorUpdate::new().with_default(Color::RED));
    far_right.render(&mut target);

    let mut far_left = Widget::new(Point::new(-3.0e9, -3.0e9), Size::new(4.0, 4.0));
    far_left.set_colors(ColorUpdate::new().with_default(Color::RED));
    far_left.render(&mut target);

    assert!(target.pixels().iter().all(|p| *p == Color::BLACK));
}

/// 测试极小的负角度归一化后落在 [0, 360)
#[test]
fn test_tiny_negative_rotation_wraps_to_zero() {
    let mut widget = plain_widget();

    widget.set_rotation(-1.0e-6);

    assert!(widget.rotation() >= 0.0 && widget.rotation() < 360.0);
    assert_eq!(widget.rotation(), 0.0);
    assert_eq!(widget.bounds(), Rect::new(10.0, 10.0, 100.0, 30.0));
}

/// 测试奇数尺寸控件在非直角旋转后中心不变
#[test]
fn test_odd_size_rotation_preserves_center() {
    let mut widget = Widget::new(Point::new(10.0, 10.0), Size::new(5.0, 3.0));
    let center = widget.center();
    assert_eq!(center, Point::new(12.5, 11.5));

    widget.set_rotation(45.0);
    assert_eq!(widget.render_surface().width(), 6);
    assert_eq!(widget.render_surface().height(), 6);
    assert_eq!(widget.center(), center);

    widget.set_rotation(0.0);
    assert_eq!(widget.center(), center);
    assert_eq!(widget.bounds(), Rect::new(10.0, 10.0, 5.0, 3.0));
}
