use std::fmt;

/// Operators recognised by the lexer, including the structural parentheses.
///
/// Each operator carries a fixed precedence. Higher binds tighter; equal
/// precedence associates to the left.
///
/// | Precedence | Operators |
/// |---|---|
/// | 0 | `(` `)` |
/// | 1 | `&&` `\|\|` |
/// | 2 | `==` `!=` `##` `!#` |
/// | 3 | `>` `>=` `<` `<=` |
/// | 4 | `+` `-` |
/// | 5 | `*` `/` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Grouping
    /// Left parenthesis (`(`), never evaluated
    LeftParen,
    /// Right parenthesis (`)`), never evaluated
    RightParen,

    // Logical
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,

    // Equality and membership
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Contains (`##`): array membership, array superset or substring
    Contains,
    /// Does not contain (`!#`)
    NotContains,

    // Ordering
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,

    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 16] = [
        Operator::LeftParen,
        Operator::RightParen,
        Operator::And,
        Operator::Or,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Contains,
        Operator::NotContains,
        Operator::GreaterThan,
        Operator::GreaterEqual,
        Operator::LessThan,
        Operator::LessEqual,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Look up an operator by its exact source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use Operator::*;
        let op = match symbol {
            "(" => LeftParen,
            ")" => RightParen,
            "&&" => And,
            "||" => Or,
            "==" => Equal,
            "!=" => NotEqual,
            "##" => Contains,
            "!#" => NotContains,
            ">" => GreaterThan,
            ">=" => GreaterEqual,
            "<" => LessThan,
            "<=" => LessEqual,
            "+" => Add,
            "-" => Subtract,
            "*" => Multiply,
            "/" => Divide,
            _ => return None,
        };
        Some(op)
    }

    pub const fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            LeftParen => "(",
            RightParen => ")",
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            Contains => "##",
            NotContains => "!#",
            GreaterThan => ">",
            GreaterEqual => ">=",
            LessThan => "<",
            LessEqual => "<=",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
        }
    }

    pub const fn precedence(self) -> u8 {
        use Operator::*;
        match self {
            LeftParen | RightParen => 0,
            And | Or => 1,
            Equal | NotEqual | Contains | NotContains => 2,
            GreaterThan | GreaterEqual | LessThan | LessEqual => 3,
            Add | Subtract => 4,
            Multiply | Divide => 5,
        }
    }

    /// Parentheses only shape the tree; they are never applied to operands.
    pub const fn is_parenthesis(self) -> bool {
        matches!(self, Operator::LeftParen | Operator::RightParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
