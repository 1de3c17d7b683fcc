//! 计算器业务逻辑 (Update/Dispatch)

use super::actions::CalcAction;
use super::keypad::ButtonKind;
use super::state::CalculatorApp;

impl CalculatorApp {
    /// 核心逻辑分发，返回 true 表示窗口应当关闭
    pub fn dispatch(&mut self, action: CalcAction) -> bool {
        match action {
            CalcAction::Close => return true,

            CalcAction::SelectUp => self.keypad.move_up(),
            CalcAction::SelectDown => self.keypad.move_down(),
            CalcAction::SelectLeft => self.keypad.move_left(),
            CalcAction::SelectRight => self.keypad.move_right(),

            CalcAction::PressSelected => self.press(self.keypad.selected().kind),
            CalcAction::Press(kind) => self.press(kind),
        }
        false
    }

    /// 执行一次按钮点击
    fn press(&mut self, kind: ButtonKind) {
        match kind {
            ButtonKind::Digit(ch) => self.state.add_to_expression(ch),
            ButtonKind::Point => self.state.add_to_expression('.'),
            ButtonKind::Operator(op) => self.state.append_operator(op),
            ButtonKind::Clear => self.state.clear(),
            ButtonKind::Square => self.state.square(),
            ButtonKind::Sqrt => self.state.sqrt(),
            ButtonKind::Equals => self.state.evaluate(),
        }
    }
}
