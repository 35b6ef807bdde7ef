//! Split expression text into tokens.
//!
//! Each operator accepts a word form (case-insensitive, anchored on word boundaries),
//! an ASCII spelling and a unicode math symbol. The alternatives are tried in a fixed order
//! so that longer operators win over their prefixes: NAND before AND, NOR before OR.

use crate::error::LexError;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Kinds of tokens, listed in matching priority.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    Nand,
    Nor,
    And,
    Or,
    Not,
    Xor,
    Imp,
    Eqv,
    LParen,
    RParen,
    Const,
    Identifier,
    Eof,
}

/// A lexed token: its kind and the matched text (absent for the EOF sentinel).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
}

static TOKEN_TABLE: [(&str, Option<TokenKind>, &str); 14] = [
    ("NAND", Some(TokenKind::Nand), r"\b(?i:nand)\b|!&|¬&|↑"),
    ("NOR", Some(TokenKind::Nor), r"\b(?i:nor)\b|!v|¬∨|↓"),
    ("AND", Some(TokenKind::And), r"\b(?i:and)\b|&&|&|∧"),
    ("OR", Some(TokenKind::Or), r"\b(?i:or)\b|\|\||\||∨"),
    ("NOT", Some(TokenKind::Not), r"\b(?i:not)\b|!|~|¬"),
    ("XOR", Some(TokenKind::Xor), r"\b(?i:xor)\b|\^|⊕"),
    ("IMP", Some(TokenKind::Imp), r"\b(?i:imp)\b|=>|→|⇒"),
    ("EQV", Some(TokenKind::Eqv), r"\b(?i:eqv)\b|<=>|↔|⇔|=="),
    ("LPAREN", Some(TokenKind::LParen), r"\("),
    ("RPAREN", Some(TokenKind::RParen), r"\)"),
    ("CONST", Some(TokenKind::Const), r"\b(?i:1|0|true|false)\b"),
    ("IDENTIFIER", Some(TokenKind::Identifier), r"[A-Za-z]+"),
    ("SKIP", None, r"\s+"),
    ("MISMATCH", None, r"."),
];

static RE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = TOKEN_TABLE
        .iter()
        .map(|(name, _, pattern)| format!("(?P<{}>{})", name, pattern))
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    /// The terminal sentinel closing every token stream
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: None,
        }
    }
}

impl TokenKind {
    /// Upper-case name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Nand => "NAND",
            TokenKind::Nor => "NOR",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Xor => "XOR",
            TokenKind::Imp => "IMP",
            TokenKind::Eqv => "EQV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Const => "CONST",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            None => write!(f, "Token({})", self.kind),
            Some(text) => write!(f, "Token({}, {})", self.kind, text),
        }
    }
}

/// Convert an expression into a list of tokens, always terminated by [TokenKind::Eof].
///
/// Whitespace is skipped, any character which does not start a token is rejected
/// with its 1-based position.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for caps in RE_TOKEN.captures_iter(text) {
        for (name, kind, _) in TOKEN_TABLE.iter() {
            let m = match caps.name(name) {
                None => continue,
                Some(m) => m,
            };
            match (kind, *name) {
                (Some(kind), _) => tokens.push(Token::new(*kind, m.as_str())),
                (None, "MISMATCH") => {
                    return Err(LexError {
                        character: m.as_str().chars().next().unwrap_or_default(),
                        position: text[..m.start()].chars().count() + 1,
                    });
                }
                _ => (),
            }
            break;
        }
    }

    tokens.push(Token::eof());
    trace!("tokenize({:?}): {} tokens", text, tokens.len());
    Ok(tokens)
}
