//! 议程视图
//!
//! 左侧命令按钮列，右侧只读课业表格；
//! 计算器以居中悬浮窗叠加渲染。

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row, Table},
};

use super::state::{AgendaApp, COMMANDS};
use crate::calc;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &AgendaApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主区域
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(40)])
        .split(chunks[1]);

    render_commands(frame, app, body[0]);
    render_notebook(frame, app, body[1]);
    render_help(frame, app, chunks[2]);

    // 计算器悬浮窗
    if let Some(calculator) = &app.calculator {
        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);
        calc::render(frame, calculator, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!("MyAgenda  {}", Local::now().format("%Y-%m-%d")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 垂直排列的命令按钮列
fn render_commands(frame: &mut Frame, app: &AgendaApp, area: Rect) {
    let items: Vec<ListItem> = COMMANDS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.selected_command {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(*label, style))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("命令").borders(Borders::ALL));

    let mut state = ListState::default();
    state.select(Some(app.selected_command));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 课业一览表：三列，固定数据，只读
fn render_notebook(frame: &mut Frame, app: &AgendaApp, area: Rect) {
    let header = Row::new(vec!["Course", "Chapter", "Task"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.course.clone(),
                entry.chapter.clone(),
                entry.task.clone(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(24),
        ],
    )
    .header(header)
    .block(Block::default().title("课业一览").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, app: &AgendaApp, area: Rect) {
    let text = if app.calculator.is_some() {
        "计算器已打开，按键由计算器处理  [q] 关闭计算器"
    } else {
        "[j/k] 选择命令  [Enter] 执行  [q] 退出"
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
