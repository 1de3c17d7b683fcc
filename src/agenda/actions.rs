//! 议程 Action 枚举 (Intent)
//!
//! 按键转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgendaAction {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    Invoke, // 点击选中的命令按钮
}
