//! 单元测试模块
//! 覆盖渲染表面、控件状态机、容器分发、列表布局、资源缓存与配置

pub mod surface_tests;
pub mod widget_tests;
pub mod layout_tests;

use crate::{UiConfig, UiContext};

/// 创建测试用上下文（方块字形、占位兜底资源）
pub(crate) fn test_context() -> UiContext {
    UiContext::in_memory(UiConfig::default())
}
