use phf::phf_map;

use crate::token::TokenKind;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Looks up a reserved word. Matching is exact and case-sensitive.
pub fn lookup(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reserved_word_is_found() {
        assert_eq!(16, KEYWORDS.len());
        for (spelling, kind) in KEYWORDS.entries() {
            assert_eq!(Some(*kind), lookup(spelling));
            assert_eq!(spelling.to_uppercase(), kind.name());
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(Some(TokenKind::Class), lookup("class"));
        assert_eq!(None, lookup("Class"));
        assert_eq!(None, lookup("CLASS"));
    }

    #[test]
    fn prefixes_and_extensions_are_not_keywords() {
        assert_eq!(None, lookup("classroom"));
        assert_eq!(None, lookup("cla"));
        assert_eq!(None, lookup(""));
    }
}
