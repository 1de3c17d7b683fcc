//! 计算器状态定义 (Model)
//!
//! `current_expression` 是正在输入的操作数，`total_expression` 是
//! 已累计的左侧表达式（含悬挂运算符）。不变式：完整逻辑表达式
//! 恒等于 total_expression + current_expression。

use crate::expr::{self, ExprError};

use super::keypad::Keypad;

/// 运算符显示符号表（内部字符 -> 显示字形），构造后只读
pub const OPERATORS: [(char, char); 4] = [('/', '÷'), ('*', '×'), ('-', '-'), ('+', '+')];

/// 条目标签的显示上限（字符数）
pub const ENTRY_DISPLAY_LIMIT: usize = 11;

/// 求值失败时的显示文本
pub const ERROR_TEXT: &str = "Error";

/// 表达式累加器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcState {
    pub current_expression: String,
    pub total_expression: String,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ 输入相关 ============

    /// 追加数字或小数点。不做校验，重复小数点等问题留给求值阶段暴露
    pub fn add_to_expression(&mut self, token: char) {
        self.current_expression.push(token);
    }

    /// 追加运算符，并把当前输入整体并入累计表达式
    pub fn append_operator(&mut self, op: char) {
        self.current_expression.push(op);
        self.total_expression.push_str(&self.current_expression);
        self.current_expression.clear();
    }

    /// 清空两个表达式
    pub fn clear(&mut self) {
        self.current_expression.clear();
        self.total_expression.clear();
    }

    // ============ 求值相关 ============

    /// 把当前输入替换为它的平方
    pub fn square(&mut self) {
        self.apply_power(2.0);
    }

    /// 把当前输入替换为它的平方根
    pub fn sqrt(&mut self) {
        self.apply_power(0.5);
    }

    fn apply_power(&mut self, exponent: f64) {
        let result = expr::eval_str(&self.current_expression)
            .map(|value| value.powf(exponent))
            .and_then(|value| {
                // 负数开平方得到 NaN，归入同一个错误显示态
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(ExprError::NotFinite)
                }
            });

        self.current_expression = match result {
            Ok(value) => format_result(value),
            Err(_) => ERROR_TEXT.to_string(),
        };
    }

    /// 求值完整表达式：先把当前输入并入累计表达式，成功后结果成为
    /// 新的当前输入、累计清空；失败时当前输入变为 "Error"，累计保留
    pub fn evaluate(&mut self) {
        self.total_expression.push_str(&self.current_expression);
        self.current_expression.clear();

        match expr::eval_str(&self.total_expression) {
            Ok(value) => {
                self.current_expression = format_result(value);
                self.total_expression.clear();
            }
            Err(_) => {
                self.current_expression = ERROR_TEXT.to_string();
            }
        }
    }

    // ============ 显示相关 ============

    /// 条目标签文本，截断到前 11 个字符
    pub fn entry_display(&self) -> String {
        self.current_expression
            .chars()
            .take(ENTRY_DISPLAY_LIMIT)
            .collect()
    }

    /// 累计表达式标签文本，运算符替换为带空格的显示字形
    pub fn total_display(&self) -> String {
        let mut text = String::with_capacity(self.total_expression.len() * 3);
        for ch in self.total_expression.chars() {
            match OPERATORS.iter().find(|(op, _)| *op == ch) {
                Some((_, glyph)) => {
                    text.push(' ');
                    text.push(*glyph);
                    text.push(' ');
                }
                None => text.push(ch),
            }
        }
        text
    }
}

/// 数值结果的显示文本：整数不带小数部分，小数去掉末尾的零
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// 计算器窗口状态：表达式累加器 + 按钮网格。
/// 每次打开窗口都是全新实例，关闭即销毁
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    pub state: CalcState,
    pub keypad: Keypad,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self::default()
    }
}
