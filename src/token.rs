use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) literal: Option<Literal>,
    pub(crate) line: usize,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Percent,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,
    Slash, DoubleSlash,
    Star, Power,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

/// The value carried by `String` and `Number` tokens.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, literal: Option<Literal>, line: usize) -> Token {
        Token { kind, lexeme: lexeme.into(), literal, line }
    }

    /// The end-of-input sentinel. Its lexeme is always empty.
    pub fn eof(line: usize) -> Token {
        Token::new(TokenKind::EndOfFile, "", None, line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Percent => "PERCENT",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Slash => "SLASH",
            DoubleSlash => "DOUBLE_SLASH",
            Star => "STAR",
            Power => "POWER",
            Identifier => "IDENTIFIER",
            String => "STRING",
            Number => "NUMBER",
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_has_empty_lexeme() {
        let eof = Token::eof(3);
        assert_eq!(TokenKind::EndOfFile, eof.kind());
        assert_eq!("", eof.lexeme());
        assert_eq!(None, eof.literal());
        assert_eq!(3, eof.line());
    }

    #[test]
    fn displays_kind_lexeme_and_literal() {
        let t = Token::new(TokenKind::Number, "1.5", Some(Literal::Number(1.5)), 1);
        assert_eq!("NUMBER 1.5 1.5", t.to_string());

        let t = Token::new(TokenKind::String, "\"hi\"", Some(Literal::String("hi".into())), 1);
        assert_eq!("STRING \"hi\" hi", t.to_string());
    }

    #[test]
    fn displays_nil_without_literal() {
        let t = Token::new(TokenKind::DoubleSlash, "//", None, 2);
        assert_eq!("DOUBLE_SLASH // nil", t.to_string());
        assert_eq!("EOF  nil", Token::eof(1).to_string());
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!("12", Literal::Number(12.0).to_string());
    }
}
