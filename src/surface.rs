//! Surface 渲染表面模块 - 带 alpha 的像素缓冲
//!
//! 每个控件独占自己的 Surface；旋转总是从原始表面派生出新表面，
//! 原始表面本身不会被旋转修改。

use std::path::Path;

use crate::error::{Result, UiError};
use crate::{Color, Paint, PaintStyle, Rect};

/// 渲染表面
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// 创建全透明表面
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    /// 创建纯色表面
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// 从 RGBA 字节创建
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() != (width * height * 4) as usize {
            return Err(UiError::BufferSize { width, height, len: data.len() });
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| Color::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { width, height, pixels })
    }

    /// 从解码后的图片创建
    pub fn from_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Color::new(p[0], p[1], p[2], p[3]))
            .collect();
        Self { width, height, pixels }
    }

    /// 从文件加载图片
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref())?;
        Ok(Self::from_image(&img.to_rgba8()))
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// 以 (0, 0) 为原点的边界
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// 获取像素数据引用
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 整个表面填充为指定颜色（不混合，直接覆盖）
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 直接设置像素（不混合）
    pub fn set_pixel_direct(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.pixels[idx] = color;
        }
    }

    /// 绘制矩形
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_rect(rect, &paint.color),
            PaintStyle::Stroke => self.stroke_rect(rect, paint),
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Color) {
        let x0 = rect.x.max(0.0) as i32;
        let y0 = rect.y.max(0.0) as i32;
        let x1 = rect.right().min(self.width as f32) as i32;
        let y1 = rect.bottom().min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, *color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, paint: &Paint) {
        let w = paint.stroke_width.min(rect.width / 2.0).min(rect.height / 2.0);
        // 上边
        self.fill_rect(&Rect::new(rect.x, rect.y, rect.width, w), &paint.color);
        // 下边
        self.fill_rect(&Rect::new(rect.x, rect.bottom() - w, rect.width, w), &paint.color);
        // 左边（不与上下边重叠，避免半透明颜色叠加两次）
        self.fill_rect(&Rect::new(rect.x, rect.y + w, w, rect.height - 2.0 * w), &paint.color);
        // 右边
        self.fill_rect(&Rect::new(rect.right() - w, rect.y + w, w, rect.height - 2.0 * w), &paint.color);
    }

    /// 将另一个表面绘制到 (x, y)，带 alpha 混合，超出部分裁剪
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        // 在 i64 中计算裁剪范围，远离屏幕的坐标不会溢出
        let (x, y) = (x as i64, y as i64);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + src.width as i64).min(self.width as i64);
        let y1 = (y + src.height as i64).min(self.height as i64);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        for dy in y0..y1 {
            let sy = (dy - y) as u32;
            for dx in x0..x1 {
                let sx = (dx - x) as u32;
                let color = src.pixels[(sy * src.width + sx) as usize];
                self.set_pixel(dx as i32, dy as i32, color);
            }
        }
    }

    /// 返回逆时针旋转 `angle` 度后的新表面
    ///
    /// 新表面尺寸扩展为旋转后的包围盒，空白处透明。0° 返回逐像素相同的拷贝，
    /// 90° 的整数倍做精确的像素转置，其余角度使用最近邻采样。
    pub fn rotated(&self, angle: f32) -> Surface {
        let angle = normalize_degrees(angle);
        if angle == 0.0 || self.width == 0 || self.height == 0 {
            return self.clone();
        }

        let (w, h) = (self.width, self.height);
        if angle == 90.0 {
            let mut out = Surface::new(h, w);
            for sy in 0..h {
                for sx in 0..w {
                    let (dx, dy) = (sy, w - 1 - sx);
                    out.pixels[(dy * h + dx) as usize] = self.pixels[(sy * w + sx) as usize];
                }
            }
            return out;
        }
        if angle == 180.0 {
            let mut out = self.clone();
            out.pixels.reverse();
            return out;
        }
        if angle == 270.0 {
            let mut out = Surface::new(h, w);
            for sy in 0..h {
                for sx in 0..w {
                    let (dx, dy) = (h - 1 - sy, sx);
                    out.pixels[(dy * h + dx) as usize] = self.pixels[(sy * w + sx) as usize];
                }
            }
            return out;
        }

        let (sin, cos) = angle.to_radians().sin_cos();
        let (wf, hf) = (w as f32, h as f32);
        // 扣除浮点误差，避免包围盒多出一像素
        let new_w = (wf * cos.abs() + hf * sin.abs() - 1e-3).ceil().max(1.0) as u32;
        let new_h = (wf * sin.abs() + hf * cos.abs() - 1e-3).ceil().max(1.0) as u32;

        let mut out = Surface::new(new_w, new_h);
        let (half_nw, half_nh) = (new_w as f32 / 2.0, new_h as f32 / 2.0);
        let (half_w, half_h) = (wf / 2.0, hf / 2.0);

        for dy in 0..new_h {
            let y = dy as f32 + 0.5 - half_nh;
            for dx in 0..new_w {
                let x = dx as f32 + 0.5 - half_nw;
                // 屏幕坐标系 y 轴向下，逆时针旋转的逆映射
                let sx = x * cos - y * sin + half_w;
                let sy = x * sin + y * cos + half_h;
                if sx < 0.0 || sy < 0.0 || sx >= wf || sy >= hf {
                    continue;
                }
                let src = self.pixels[(sy as u32 * w + sx as u32) as usize];
                out.pixels[(dy * new_w + dx) as usize] = src;
            }
        }
        out
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba()).ok_or(
                UiError::BufferSize {
                    width: self.width,
                    height: self.height,
                    len: self.pixels.len() * 4,
                },
            )?;

        img.save(path.as_ref())?;
        Ok(())
    }
}

/// 角度归一化到 [0, 360)
///
/// 极小的负角度经 `rem_euclid` 会舍入为 360.0，这里折回 0。
pub(crate) fn normalize_degrees(angle: f32) -> f32 {
    let angle = angle.rem_euclid(360.0);
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}
