//! 议程主窗口状态定义 (Model)

use crate::calc::CalculatorApp;
use crate::models::{AgendaEntry, sample_entries};

/// 主窗口的命令按钮，按显示顺序排列。
/// 目前只有 "Calculator" 接了处理器，其余按钮点击无效果
pub const COMMANDS: [&str; 4] = [
    "Add/Edit Courses",
    "Add/Edit Chapter",
    "Add/Edit Tasks",
    "Calculator",
];

/// 应用状态
pub struct AgendaApp {
    pub entries: Vec<AgendaEntry>,
    pub selected_command: usize,
    pub calculator: Option<CalculatorApp>,
}

impl AgendaApp {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            entries: sample_entries(),
            selected_command: 0,
            calculator: None,
        }
    }
}

impl Default for AgendaApp {
    fn default() -> Self {
        Self::new()
    }
}
