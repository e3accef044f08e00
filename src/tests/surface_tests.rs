//! 渲染表面与颜色单元测试

use crate::{Color, Paint, PaintStyle, Rect, Surface, UiError};

/// 2x2 四色图案：左上红、右上绿、左下蓝、右下白
fn quad() -> Surface {
    let data = [
        255, 0, 0, 255, 0, 255, 0, 255,
        0, 0, 255, 255, 255, 255, 255, 255,
    ];
    Surface::from_rgba(2, 2, &data).unwrap()
}

/// 测试新建表面为全透明
#[test]
fn test_new_surface_is_transparent() {
    let surface = Surface::new(4, 3);
    assert_eq!(surface.width(), 4);
    assert_eq!(surface.height(), 3);
    assert!(surface.pixels().iter().all(|p| *p == Color::TRANSPARENT));
}

/// 测试 RGBA 字节长度不匹配时报错
#[test]
fn test_from_rgba_rejects_wrong_length() {
    let result = Surface::from_rgba(2, 2, &[0u8; 15]);
    assert!(matches!(result, Err(UiError::BufferSize { width: 2, height: 2, len: 15 })));
}

/// 测试 blit 的位置与裁剪
#[test]
fn test_blit_clips_to_target() {
    let mut target = Surface::filled(4, 4, Color::BLACK);
    let src = Surface::filled(3, 3, Color::RED);

    target.blit(&src, 2, 2);

    assert_eq!(target.get_pixel(1, 1), Color::BLACK);
    assert_eq!(target.get_pixel(2, 2), Color::RED);
    assert_eq!(target.get_pixel(3, 3), Color::RED);

    // 负坐标同样裁剪
    target.blit(&Surface::filled(2, 2, Color::BLUE), -1, -1);
    assert_eq!(target.get_pixel(0, 0), Color::BLUE);
    assert_eq!(target.get_pixel(1, 1), Color::BLACK);
}

/// 测试 blit 时透明像素不覆盖目标
#[test]
fn test_blit_keeps_destination_under_transparent_pixels() {
    let mut target = Surface::filled(2, 2, Color::GREEN);
    target.blit(&Surface::new(2, 2), 0, 0);
    assert!(target.pixels().iter().all(|p| *p == Color::GREEN));
}

/// 测试描边矩形只绘制边框
#[test]
fn test_stroke_rect_leaves_interior() {
    let mut surface = Surface::new(10, 10);
    let paint = Paint::new()
        .with_color(Color::WHITE)
        .with_style(PaintStyle::Stroke)
        .with_stroke_width(2.0);
    surface.draw_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), &paint);

    assert_eq!(surface.get_pixel(0, 0), Color::WHITE);
    assert_eq!(surface.get_pixel(1, 5), Color::WHITE);
    assert_eq!(surface.get_pixel(9, 9), Color::WHITE);
    assert_eq!(surface.get_pixel(5, 5), Color::TRANSPARENT);
}

/// 测试 0° 与 360° 旋转返回相同像素
#[test]
fn test_rotate_zero_is_identity() {
    let src = quad();
    assert_eq!(src.rotated(0.0), src);
    assert_eq!(src.rotated(360.0), src);
    assert_eq!(src.rotated(-720.0), src);
}

/// 测试 90° 逆时针旋转：右上角转到左上角
#[test]
fn test_rotate_quarter_turns() {
    let src = quad();

    let ccw = src.rotated(90.0);
    assert_eq!(ccw.get_pixel(0, 0), Color::GREEN);
    assert_eq!(ccw.get_pixel(1, 0), Color::WHITE);
    assert_eq!(ccw.get_pixel(0, 1), Color::RED);
    assert_eq!(ccw.get_pixel(1, 1), Color::BLUE);

    let half = src.rotated(180.0);
    assert_eq!(half.get_pixel(0, 0), Color::WHITE);
    assert_eq!(half.get_pixel(1, 1), Color::RED);

    let cw = src.rotated(270.0);
    assert_eq!(cw.get_pixel(0, 0), Color::BLUE);
    assert_eq!(cw.get_pixel(1, 0), Color::RED);

    // -90° 等价于 270°
    assert_eq!(src.rotated(-90.0), cw);
}

/// 测试非直角旋转扩展包围盒
#[test]
fn test_rotate_expands_bounding_box() {
    let src = Surface::filled(100, 30, Color::RED);

    let rotated = src.rotated(90.0);
    assert_eq!((rotated.width(), rotated.height()), (30, 100));

    let diagonal = src.rotated(45.0);
    assert_eq!((diagonal.width(), diagonal.height()), (92, 92));
    // 中心仍有像素，角落为透明
    assert_eq!(diagonal.get_pixel(46, 46), Color::RED);
    assert_eq!(diagonal.get_pixel(0, 0), Color::TRANSPARENT);
}

/// 测试 HSVA 构造与不可变更新
#[test]
fn test_color_hsva() {
    assert_eq!(Color::from_hsva(0.0, 100.0, 100.0, 255), Color::RED);
    assert_eq!(Color::from_hsva(120.0, 100.0, 100.0, 255), Color::GREEN);
    assert_eq!(Color::from_hsva(240.0, 100.0, 100.0, 128), Color::new(0, 0, 255, 128));
    assert_eq!(Color::from_hsva(0.0, 0.0, 100.0, 255), Color::WHITE);

    let base = Color::RED;
    let shifted = base.with_hsva(240.0, 100.0, 100.0, 255);
    assert_eq!(base, Color::RED);
    assert_eq!(shifted, Color::BLUE);

    assert_eq!(Color::rainbow(360.0), Color::rainbow(0.0));
}
