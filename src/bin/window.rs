//! 带窗口的演示：winit 事件循环 + softbuffer 呈现
//!
//! 窗口事件被翻译为控件事件交给根容器；每帧推进动画、重绘并呈现。

mod demo_menu;

use std::num::NonZeroU32;
use std::sync::Arc;

use demo_menu::{Menu, MENU_HEIGHT, MENU_WIDTH};
use mini_widgets::event::Event;
use mini_widgets::{Surface, UiConfig, UiContext};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

struct WidgetWindow {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    menu: Menu,
    frame: Surface,
    frame_count: u32,
    mouse_pos: (f32, f32),
    scale_factor: f64,
}

impl WidgetWindow {
    fn new(mut ctx: UiContext) -> Self {
        let menu = Menu::build(&mut ctx);
        Self {
            window: None,
            surface: None,
            menu,
            frame: Surface::new(MENU_WIDTH, MENU_HEIGHT),
            frame_count: 0,
            mouse_pos: (0.0, 0.0),
            scale_factor: 1.0,
        }
    }

    fn dispatch(&mut self, event: Event) {
        if self.menu.root.handle_event(&event) {
            log::trace!("{:?} hit at {:?}", event.kind(), self.mouse_pos);
        }
    }

    fn render(&mut self) {
        self.menu.tick(self.frame_count);
        self.frame_count = self.frame_count.wrapping_add(1);
        self.menu.render(&mut self.frame);
    }

    fn present(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };
        let size = window.inner_size();
        let (Some(win_width), Some(win_height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        if let Err(e) = surface.resize(win_width, win_height) {
            log::warn!("Failed to resize surface: {}", e);
            return;
        }

        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::warn!("Failed to acquire buffer: {}", e);
                return;
            }
        };

        // 逻辑像素按缩放因子最近邻放大到物理像素
        let sf = self.scale_factor as f32;
        for py in 0..size.height {
            let fy = (py as f32 / sf) as u32;
            for px in 0..size.width {
                let fx = (px as f32 / sf) as u32;
                let c = self.frame.get_pixel(fx, fy);
                buffer[(py * size.width + px) as usize] =
                    ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32);
            }
        }

        if let Err(e) = buffer.present() {
            log::warn!("Failed to present frame: {}", e);
        }
    }
}

impl ApplicationHandler for WidgetWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Mini Widgets")
            .with_inner_size(winit::dpi::LogicalSize::new(MENU_WIDTH, MENU_HEIGHT))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let surface = softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()));
        let surface = match surface {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create softbuffer surface: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = window.scale_factor();
        self.window = Some(window);
        self.surface = Some(surface);

        self.render();
        self.present();

        println!("\n🎮 Ready! Click the buttons, Quit closes the window\n");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }

            WindowEvent::CursorMoved { position, .. } => {
                let x = position.x as f32 / self.scale_factor as f32;
                let y = position.y as f32 / self.scale_factor as f32;
                self.mouse_pos = (x, y);
                self.dispatch(Event::pointer_move(x, y));
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let (x, y) = self.mouse_pos;
                match state {
                    ElementState::Pressed => self.dispatch(Event::pointer_down(x, y)),
                    ElementState::Released => self.dispatch(Event::pointer_up(x, y)),
                }
                if self.menu.quit_requested.get() {
                    log::info!("Quit requested, clicks so far: {:?}", self.menu.clicks.borrow());
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
                self.present();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => UiConfig::from_file(path)?,
        None => UiConfig::default(),
    };

    println!("🚀 Mini Widgets - window demo\n");
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WidgetWindow::new(UiContext::new(config));
    event_loop.run_app(&mut app)?;
    Ok(())
}
