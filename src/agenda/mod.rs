//! 议程模块
//!
//! 与计算器模块相同的 MVI 架构：
//! - Model (state.rs): AgendaApp 及其状态数据
//! - View (view.rs): 纯函数，将状态映射为 UI
//! - Intent (actions.rs): 按键转化为明确的语义化 AgendaAction

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::AgendaApp;
pub use view::render;
