//! 事件系统 - 宿主循环送入控件树的输入事件

use crate::Point;

/// 事件种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerDown,
    PointerUp,
    KeyDown,
    KeyUp,
}

/// 事件
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerMove(PointerEvent),
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
}

/// 指针事件（主键）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
}

/// 键盘事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            code: key.to_string(),
            alt: false,
            ctrl: false,
            shift: false,
            meta: false,
        }
    }
}

impl Event {
    pub fn pointer_move(x: f32, y: f32) -> Self {
        Event::PointerMove(PointerEvent { position: Point::new(x, y) })
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Event::PointerDown(PointerEvent { position: Point::new(x, y) })
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Event::PointerUp(PointerEvent { position: Point::new(x, y) })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::PointerMove(_) => EventKind::PointerMove,
            Event::PointerDown(_) => EventKind::PointerDown,
            Event::PointerUp(_) => EventKind::PointerUp,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::KeyUp(_) => EventKind::KeyUp,
        }
    }

    /// 指针位置；键盘事件返回 None
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::PointerMove(p) | Event::PointerDown(p) | Event::PointerUp(p) => Some(p.position),
            Event::KeyDown(_) | Event::KeyUp(_) => None,
        }
    }
}
