//! 计算器模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): CalcState / CalculatorApp 及其状态数据
//! - View (view.rs): 纯函数，将状态映射为 UI
//! - Intent (actions.rs): 按键转化为明确的语义化 CalcAction

pub mod actions;
pub mod input;
pub mod keypad;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::CalculatorApp;
pub use view::render;
