//! 无窗口演示：构建主菜单，回放一段指针事件并把最后一帧保存为 PNG
//!
//! 用法：widget-demo [config.json] [output.png]

mod demo_menu;

use demo_menu::{Menu, MENU_HEIGHT, MENU_WIDTH};
use mini_widgets::event::Event;
use mini_widgets::{Surface, UiConfig, UiContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => UiConfig::from_file(path)?,
        None => UiConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "widget-demo.png".to_string());

    let mut ctx = UiContext::new(config);
    let mut menu = Menu::build(&mut ctx);
    let mut frame = Surface::new(MENU_WIDTH, MENU_HEIGHT);

    // 悬停 Play，点击 Options，在按钮外松开后停在 Quit 上
    let script = [
        Event::pointer_move(240.0, 150.0),
        Event::pointer_move(240.0, 156.0),
        Event::pointer_down(240.0, 210.0),
        Event::pointer_up(240.0, 210.0),
        Event::pointer_down(240.0, 210.0),
        Event::pointer_up(10.0, 10.0),
        Event::pointer_move(240.0, 265.0),
    ];

    for (i, event) in script.iter().enumerate() {
        let hit = menu.root.handle_event(event);
        log::debug!("Event {:?} hit={}", event.kind(), hit);
        menu.tick(i as u32 * 5);
        menu.render(&mut frame);
    }

    log::info!("Clicked buttons: {:?}", menu.clicks.borrow());
    if menu.quit_requested.get() {
        log::info!("Quit was clicked during the replay");
    }
    frame.save_png(&output)?;
    println!("✅ Saved {}x{} frame to {}", frame.width(), frame.height(), output);
    Ok(())
}
