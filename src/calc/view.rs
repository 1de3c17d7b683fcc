//! 计算器视图
//!
//! 渲染到调用方给定的区域：独立窗口整屏渲染，
//! 议程的悬浮窗渲染到居中的小矩形，两边共用同一套代码。

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::CalculatorApp;

/// 渲染计算器
pub fn render(frame: &mut Frame, app: &CalculatorApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 显示区
            Constraint::Min(15),   // 按钮区
            Constraint::Length(3), // 帮助
        ])
        .split(area);

    render_display(frame, app, chunks[0]);
    render_keypad(frame, app, chunks[1]);
    render_help(frame, chunks[2]);
}

/// 显示区：累计表达式一行（暗色），当前输入一行（加粗），右对齐
fn render_display(frame: &mut Frame, app: &CalculatorApp, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.state.total_display(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            app.state.entry_display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().title("Calculator").borders(Borders::ALL));
    frame.render_widget(display, area);
}

fn render_keypad(frame: &mut Frame, app: &CalculatorApp, area: Rect) {
    let rows = app.keypad.rows();

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(area);

    for (r, row) in rows.iter().enumerate() {
        // 最后一行的 = 按钮占两列宽
        let constraints = if row.len() == 4 {
            vec![Constraint::Ratio(1, 4); 4]
        } else {
            vec![
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(2, 4),
            ]
        };

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(row_chunks[r]);

        for (c, button) in row.iter().enumerate() {
            let style = if app.keypad.is_selected(r, c) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            let cell = Paragraph::new(button.label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(cell, cells[c]);
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "[0-9 .] 输入  [+ - * /] 运算符  [Enter] 求值  [Esc] 清空  [方向键+空格] 点击按钮  [q] 关闭",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
