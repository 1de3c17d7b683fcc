//! 计算器 Action 枚举 (Intent)
//!
//! 按键转化为明确的语义化 Action

use super::keypad::ButtonKind;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcAction {
    Close, // q / 关闭窗口

    // 直接按键等价于点击对应按钮
    Press(ButtonKind),
    // 点击光标选中的按钮
    PressSelected,

    // 按钮光标移动
    SelectUp,
    SelectDown,
    SelectLeft,
    SelectRight,
}
