//! 键盘事件映射 (Input -> Action)
//!
//! 计算器悬浮窗打开期间，所有按键转发给计算器。

use crossterm::event::KeyCode;

use super::actions::AgendaAction;
use super::state::AgendaApp;
use crate::calc;

/// 主窗口按键映射
pub fn get_action(key: KeyCode) -> Option<AgendaAction> {
    match key {
        KeyCode::Char('q') => Some(AgendaAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AgendaAction::MoveSelectionDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AgendaAction::MoveSelectionUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AgendaAction::Invoke),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示应用应当退出
pub fn handle_key_event(app: &mut AgendaApp, key: KeyCode) -> bool {
    if let Some(calculator) = app.calculator.as_mut() {
        if calc::handle_key_event(calculator, key) {
            // 关闭即销毁，表达式状态不跨窗口保留
            app.calculator = None;
        }
        return false;
    }

    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::state::COMMANDS;

    fn open_calculator(app: &mut AgendaApp) {
        while COMMANDS[app.selected_command] != "Calculator" {
            handle_key_event(app, KeyCode::Char('j'));
        }
        handle_key_event(app, KeyCode::Enter);
    }

    #[test]
    fn test_enter_on_calculator_command_opens_overlay() {
        let mut app = AgendaApp::new();
        open_calculator(&mut app);
        assert!(app.calculator.is_some());
    }

    #[test]
    fn test_keys_route_to_open_calculator() {
        let mut app = AgendaApp::new();
        open_calculator(&mut app);

        // 'j' 在计算器里不是命令选择键，不应移动议程光标
        let before = app.selected_command;
        handle_key_event(&mut app, KeyCode::Char('5'));
        handle_key_event(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_command, before);
        assert_eq!(
            app.calculator.as_ref().unwrap().state.current_expression,
            "5"
        );
    }

    #[test]
    fn test_closing_calculator_drops_its_state() {
        let mut app = AgendaApp::new();
        open_calculator(&mut app);
        handle_key_event(&mut app, KeyCode::Char('7'));
        handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(app.calculator.is_none());

        // 重新打开是全新实例
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(
            app.calculator.as_ref().unwrap().state.current_expression,
            ""
        );
    }

    #[test]
    fn test_quit_key_exits_shell() {
        let mut app = AgendaApp::new();
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_quit_key_is_consumed_by_overlay() {
        let mut app = AgendaApp::new();
        open_calculator(&mut app);
        // 悬浮窗打开时 q 只关闭计算器，不退出应用
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
    }
}
