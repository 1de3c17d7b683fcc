//! 算术表达式引擎
//!
//! 词法分析 -> 递归下降解析 -> AST 求值。
//! 只支持计算器按钮能产生的内容：数字、小数点与四则运算符，
//! 其余字符一律按语法错误拒绝。

use thiserror::Error;

/// 求值错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("空表达式")]
    EmptyExpression,
    #[error("语法错误: {0}")]
    Syntax(String),
    #[error("除以零")]
    DivisionByZero,
    #[error("结果不是有限数")]
    NotFinite,
}

/// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// 词法单元
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Op(BinOp),
}

/// 表达式 AST
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        lhs: Box<Expr>,
        op: BinOp,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    fn negate(inner: Expr) -> Self {
        Self::Negate(Box::new(inner))
    }

    fn eval(&self) -> Result<f64, ExprError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Negate(inner) => Ok(-inner.eval()?),
            Self::Binary { lhs, op, rhs } => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                match op {
                    BinOp::Add => Ok(lhs + rhs),
                    BinOp::Sub => Ok(lhs - rhs),
                    BinOp::Mul => Ok(lhs * rhs),
                    BinOp::Div => {
                        if rhs == 0.0 {
                            Err(ExprError::DivisionByZero)
                        } else {
                            Ok(lhs / rhs)
                        }
                    }
                }
            }
        }
    }
}

/// 词法分析器
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, ExprError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, ExprError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' => {
                self.advance();
                Token::Op(BinOp::Add)
            }
            '-' => {
                self.advance();
                Token::Op(BinOp::Sub)
            }
            '*' => {
                self.advance();
                Token::Op(BinOp::Mul)
            }
            '/' => {
                self.advance();
                Token::Op(BinOp::Div)
            }
            _ => return Err(ExprError::Syntax(format!("无法识别的字符 '{ch}'"))),
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> Result<Token, ExprError> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| ExprError::Syntax(format!("无效的数字 '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// 递归下降解析器
///
/// 文法：
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= factor (('*' | '/') factor)*
/// factor     ::= '-' factor | NUMBER
/// ```
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Expr, ExprError> {
        let expr = self.parse_expression()?;

        // 所有词法单元都必须被消费
        if let Some(token) = self.current() {
            return Err(ExprError::Syntax(format!("多余的词法单元 {token:?}")));
        }

        Ok(expr)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn parse_expression(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_term()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Op(BinOp::Add) => BinOp::Add,
                Token::Op(BinOp::Sub) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.parse_term()?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_factor()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Op(BinOp::Mul) => BinOp::Mul,
                Token::Op(BinOp::Div) => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.parse_factor()?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expr, ExprError> {
        match self.current() {
            // 前导负号
            Some(Token::Op(BinOp::Sub)) => {
                self.pos += 1;
                let inner = self.parse_factor()?;
                Ok(Expr::negate(inner))
            }
            Some(Token::Number(n)) => {
                let n = *n;
                self.pos += 1;
                Ok(Expr::Number(n))
            }
            Some(token) => Err(ExprError::Syntax(format!("意外的词法单元 {token:?}"))),
            None => Err(ExprError::Syntax("表达式意外结束".to_string())),
        }
    }
}

/// 解析并求值完整表达式字符串
pub fn eval_str(input: &str) -> Result<f64, ExprError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    let tokens = Tokenizer::new(trimmed).tokenize()?;
    let value = Parser::new(tokens).parse()?.eval()?;

    if !value.is_finite() {
        return Err(ExprError::NotFinite);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_single_number() {
        assert_eq!(eval_str("42"), Ok(42.0));
        assert_eq!(eval_str("3.14"), Ok(3.14));
    }

    #[test]
    fn test_eval_simple_addition() {
        assert_eq!(eval_str("2+3"), Ok(5.0));
    }

    #[test]
    fn test_eval_all_operators() {
        assert_eq!(eval_str("10-3"), Ok(7.0));
        assert_eq!(eval_str("6*7"), Ok(42.0));
        assert_eq!(eval_str("20/4"), Ok(5.0));
    }

    #[test]
    fn test_eval_precedence() {
        // 2 + 3 * 4 = 2 + (3 * 4)
        assert_eq!(eval_str("2+3*4"), Ok(14.0));
        assert_eq!(eval_str("10-6/2"), Ok(7.0));
    }

    #[test]
    fn test_eval_left_associative() {
        // 8 / 2 / 2 = (8 / 2) / 2
        assert_eq!(eval_str("8/2/2"), Ok(2.0));
        assert_eq!(eval_str("10-3-2"), Ok(5.0));
    }

    #[test]
    fn test_eval_decimal() {
        assert_eq!(eval_str("1.5+2.25"), Ok(3.75));
        assert_eq!(eval_str("1/2"), Ok(0.5));
    }

    #[test]
    fn test_eval_leading_decimal_point() {
        assert_eq!(eval_str(".5"), Ok(0.5));
    }

    #[test]
    fn test_eval_unary_minus() {
        assert_eq!(eval_str("-5"), Ok(-5.0));
        assert_eq!(eval_str("2*-3"), Ok(-6.0));
        assert_eq!(eval_str("--5"), Ok(5.0));
    }

    #[test]
    fn test_eval_whitespace_tolerated() {
        assert_eq!(eval_str(" 2 + 3 "), Ok(5.0));
    }

    #[test]
    fn test_eval_empty() {
        assert_eq!(eval_str(""), Err(ExprError::EmptyExpression));
        assert_eq!(eval_str("   "), Err(ExprError::EmptyExpression));
    }

    #[test]
    fn test_eval_division_by_zero() {
        assert_eq!(eval_str("1/0"), Err(ExprError::DivisionByZero));
        assert_eq!(eval_str("0/0"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_eval_trailing_operator() {
        assert!(matches!(eval_str("2+"), Err(ExprError::Syntax(_))));
    }

    #[test]
    fn test_eval_consecutive_operators() {
        assert!(matches!(eval_str("2+*3"), Err(ExprError::Syntax(_))));
    }

    #[test]
    fn test_eval_double_decimal_point() {
        // "1.2.3" 被切成 "1.2" 与 ".3" 两个相邻数字
        assert!(matches!(eval_str("1.2.3"), Err(ExprError::Syntax(_))));
    }

    #[test]
    fn test_eval_lone_decimal_point() {
        assert!(matches!(eval_str("."), Err(ExprError::Syntax(_))));
    }

    #[test]
    fn test_eval_unknown_character() {
        assert!(matches!(eval_str("2^3"), Err(ExprError::Syntax(_))));
        assert!(matches!(eval_str("2 @ 3"), Err(ExprError::Syntax(_))));
    }

    #[test]
    fn test_eval_overflow_is_not_finite() {
        let huge = "9".repeat(200);
        let input = format!("{huge}*{huge}");
        assert_eq!(eval_str(&input), Err(ExprError::NotFinite));
    }
}
