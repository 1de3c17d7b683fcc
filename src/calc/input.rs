//! 键盘事件映射 (Input -> Action)
//!
//! 数字、小数点与四个运算符直接映射到对应按钮，
//! Enter 求值、Esc 清空；C、x²、√x、= 没有专属按键，
//! 通过方向键移动光标后用空格点击。

use crossterm::event::KeyCode;

use super::actions::CalcAction;
use super::keypad::ButtonKind;
use super::state::CalculatorApp;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<CalcAction> {
    match key {
        KeyCode::Char('q') => Some(CalcAction::Close),
        KeyCode::Enter => Some(CalcAction::Press(ButtonKind::Equals)),
        KeyCode::Esc => Some(CalcAction::Press(ButtonKind::Clear)),
        KeyCode::Char(' ') => Some(CalcAction::PressSelected),
        KeyCode::Char('.') => Some(CalcAction::Press(ButtonKind::Point)),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(CalcAction::Press(ButtonKind::Digit(c))),
        KeyCode::Char(c) if matches!(c, '+' | '-' | '*' | '/') => {
            Some(CalcAction::Press(ButtonKind::Operator(c)))
        }
        KeyCode::Up => Some(CalcAction::SelectUp),
        KeyCode::Down => Some(CalcAction::SelectDown),
        KeyCode::Left => Some(CalcAction::SelectLeft),
        KeyCode::Right => Some(CalcAction::SelectRight),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示窗口应当关闭
pub fn handle_key_event(app: &mut CalculatorApp, key: KeyCode) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_to_buttons() {
        assert_eq!(
            get_action(KeyCode::Char('7')),
            Some(CalcAction::Press(ButtonKind::Digit('7')))
        );
        assert_eq!(
            get_action(KeyCode::Char('.')),
            Some(CalcAction::Press(ButtonKind::Point))
        );
    }

    #[test]
    fn test_operator_keys_map_to_buttons() {
        for op in ['+', '-', '*', '/'] {
            assert_eq!(
                get_action(KeyCode::Char(op)),
                Some(CalcAction::Press(ButtonKind::Operator(op)))
            );
        }
    }

    #[test]
    fn test_return_and_escape_bindings() {
        assert_eq!(
            get_action(KeyCode::Enter),
            Some(CalcAction::Press(ButtonKind::Equals))
        );
        assert_eq!(
            get_action(KeyCode::Esc),
            Some(CalcAction::Press(ButtonKind::Clear))
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(get_action(KeyCode::Char('x')), None);
        assert_eq!(get_action(KeyCode::Tab), None);
    }

    #[test]
    fn test_handle_key_event_types_into_entry() {
        let mut app = CalculatorApp::new();
        for key in [
            KeyCode::Char('1'),
            KeyCode::Char('+'),
            KeyCode::Char('2'),
            KeyCode::Enter,
        ] {
            assert!(!handle_key_event(&mut app, key));
        }
        assert_eq!(app.state.current_expression, "3");
    }

    #[test]
    fn test_quit_key_closes_window() {
        let mut app = CalculatorApp::new();
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }
}
