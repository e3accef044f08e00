//! 演示用主菜单：标题、旋转的标志与一列按钮
//!
//! 无窗口演示与窗口演示共用同一份菜单。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mini_widgets::ui::{
    Alignment, Button, ColorUpdate, Group, Image, Label, List, Widget, WidgetId, align_center_x,
};
use mini_widgets::{Color, Surface, UiContext};

pub const MENU_WIDTH: u32 = 480;
pub const MENU_HEIGHT: u32 = 360;

const LOGO_SIZE: u32 = 48;
const BACKGROUND: Color = Color::rgb(24, 26, 36);

pub struct Menu {
    pub root: Widget,
    logo: WidgetId,
    title: WidgetId,
    /// 已点击的按钮，按点击顺序记录
    pub clicks: Rc<RefCell<Vec<&'static str>>>,
    pub quit_requested: Rc<Cell<bool>>,
}

impl Menu {
    pub fn build(ctx: &mut UiContext) -> Self {
        ctx.resources.insert(Some(rainbow_logo(LOGO_SIZE)), "logo");

        let bounds = mini_widgets::Rect::new(0.0, 0.0, MENU_WIDTH as f32, MENU_HEIGHT as f32);
        let mut root = Group::new()
            .with_frame(0.0, 0.0, bounds.width, bounds.height)
            .with_colors(ColorUpdate::new().with_default(BACKGROUND))
            .build();

        let mut title = Label::new("Mini Widgets")
            .with_position(0.0, 24.0)
            .with_font_size(28.0)
            .build(ctx);
        align_center_x(&mut title, bounds);
        let title = root.add_child(title);

        let logo = root.add_child(Image::new("logo").with_position(24.0, 24.0).build(ctx));

        let clicks = Rc::new(RefCell::new(Vec::new()));
        let quit_requested = Rc::new(Cell::new(false));

        let mut list = List::new()
            .with_frame(0.0, 80.0, bounds.width, bounds.height - 100.0)
            .with_alignment(Alignment::Center)
            .build(ctx);
        for name in ["Play", "Options", "Quit"] {
            let clicks = clicks.clone();
            let quit = quit_requested.clone();
            let button = Button::new(name)
                .with_frame(0.0, 0.0, 160.0, 44.0)
                .on_click(move || {
                    log::info!("Clicked '{}'", name);
                    clicks.borrow_mut().push(name);
                    if name == "Quit" {
                        quit.set(true);
                    }
                })
                .build(ctx);
            list.add_child(button);
        }
        list.arrange_in_bounds();
        root.add_child(list);

        log::info!("Main menu built with {} top-level widgets", root.children().len());

        Self {
            root,
            logo,
            title,
            clicks,
            quit_requested,
        }
    }

    /// 每帧推进动画：标志持续旋转，标题底色沿色相循环
    pub fn tick(&mut self, frame: u32) {
        if let Some(logo) = self.root.find_mut(self.logo) {
            logo.set_rotation(frame as f32 * 3.0);
        }
        if let Some(title) = self.root.find_mut(self.title) {
            let tint = Color::rainbow(frame as f32 * 2.0).with_alpha(60);
            title.set_colors(ColorUpdate::new().with_default(tint));
        }
    }

    pub fn render(&self, target: &mut Surface) {
        target.fill(BACKGROUND);
        self.root.render(target);
    }
}

/// 彩虹渐变的方形标志
fn rainbow_logo(size: u32) -> Surface {
    let mut surface = Surface::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let hue = (x + y) as f32 / (2 * size) as f32 * 360.0;
            surface.set_pixel_direct(x as i32, y as i32, Color::rainbow(hue));
        }
    }
    surface
}
