//! MyAgenda：课业议程与计算器
//!
//! 两个二进制入口共享的库：
//! - `myagenda`：议程主窗口，计算器以悬浮窗内嵌
//! - `calculator`：独立计算器窗口

pub mod agenda;
pub mod calc;
pub mod expr;
pub mod models;
