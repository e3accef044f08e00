//! UI 控件系统

mod appearance;
mod widget;
mod button;
mod label;
mod image;
mod group;
mod layout;

pub use appearance::{Border, ColorUpdate, Face, StateColors, TextFace, VisualState};
pub use widget::{Widget, WidgetId, WidgetKind};
pub use button::{Button, Interaction, ReleasePolicy};
pub use label::Label;
pub use image::Image;
pub use group::{Container, Group, List};
pub use layout::{align_center, align_center_x, align_center_y, Alignment, ListLayout};
