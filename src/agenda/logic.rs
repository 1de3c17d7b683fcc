//! 议程业务逻辑 (Update/Dispatch)

use super::actions::AgendaAction;
use super::state::{AgendaApp, COMMANDS};
use crate::calc::CalculatorApp;

impl AgendaApp {
    /// 核心逻辑分发，返回 true 表示应用应当退出
    pub fn dispatch(&mut self, action: AgendaAction) -> bool {
        match action {
            AgendaAction::Quit => return true,
            AgendaAction::MoveSelectionUp => self.move_up(),
            AgendaAction::MoveSelectionDown => self.move_down(),
            AgendaAction::Invoke => self.invoke_command(),
        }
        false
    }

    // ============ 导航相关 ============

    pub fn move_up(&mut self) {
        if self.selected_command > 0 {
            self.selected_command -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_command + 1 < COMMANDS.len() {
            self.selected_command += 1;
        }
    }

    // ============ 命令相关 ============

    /// 点击选中的命令按钮
    pub fn invoke_command(&mut self) {
        if COMMANDS[self.selected_command] == "Calculator" {
            self.calculator = Some(CalculatorApp::new());
        }
        // 其余按钮已注册但未接处理器，点击不产生任何效果
    }
}
