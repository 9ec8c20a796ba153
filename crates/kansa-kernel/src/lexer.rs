//! Lexer for `.kai` source code.
//!
//! Tokenizes with logos. Every byte the lexer cannot place in a token
//! becomes one `LexError` with its span; the caller collects all of them
//! rather than stopping at the first. This is the "one diagnostic per bad
//! token" half of the script validator's message contract.

use std::fmt;
use std::ops::Range;

use logos::Logos;

/// A token with its byte span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// A lexing failure: the span and raw text of an unrecognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Range<usize>,
    pub slice: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized token {:?}", self.slice)
    }
}

/// Tokens of the kai language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"#[^\n]*", allow_greedy = true))]
pub enum Token {
    #[token("\n")]
    Newline,
    #[token(";")]
    Semi,
    #[token("|")]
    Pipe,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("&")]
    Amp,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Keywords
    #[token("set")]
    Set,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("fi")]
    Fi,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("do")]
    Do,
    #[token("done")]
    Done,
    #[token("true")]
    True,
    #[token("false")]
    False,

    /// Variable reference like `${NAME}`. The braces must close on the
    /// same line; an unterminated `${` surfaces as a lex error.
    #[regex(r"\$\{[^}\n]*\}", |lex| lex.slice().to_string())]
    VarRef(String),

    /// Double-quoted string with backslash escapes.
    #[regex(r#""([^"\\\n]|\\.)*""#, lex_string)]
    Str(String),

    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    /// Bareword: command names, argument words, paths.
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-./]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => write!(f, "newline"),
            Token::Semi => write!(f, "';'"),
            Token::Pipe => write!(f, "'|'"),
            Token::And => write!(f, "'&&'"),
            Token::Or => write!(f, "'||'"),
            Token::Amp => write!(f, "'&'"),
            Token::EqEq => write!(f, "'=='"),
            Token::NotEq => write!(f, "'!='"),
            Token::LtEq => write!(f, "'<='"),
            Token::GtEq => write!(f, "'>='"),
            Token::Lt => write!(f, "'<'"),
            Token::Gt => write!(f, "'>'"),
            Token::Eq => write!(f, "'='"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::Colon => write!(f, "':'"),
            Token::Set => write!(f, "'set'"),
            Token::If => write!(f, "'if'"),
            Token::Then => write!(f, "'then'"),
            Token::Else => write!(f, "'else'"),
            Token::Fi => write!(f, "'fi'"),
            Token::For => write!(f, "'for'"),
            Token::In => write!(f, "'in'"),
            Token::Do => write!(f, "'do'"),
            Token::Done => write!(f, "'done'"),
            Token::True => write!(f, "'true'"),
            Token::False => write!(f, "'false'"),
            Token::VarRef(raw) => write!(f, "{raw}"),
            Token::Str(s) => write!(f, "{s:?}"),
            Token::Float(v) => write!(f, "{v}"),
            Token::Int(v) => write!(f, "{v}"),
            Token::Ident(s) => write!(f, "{s}"),
        }
    }
}

/// Strip the surrounding quotes and process backslash escapes.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            // Unknown escape: keep it verbatim.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Tokenize a whole source file.
///
/// Collects every lex error instead of stopping at the first, so a file
/// with several bad tokens yields several diagnostics.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, Vec<LexError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => errors.push(LexError {
                slice: source[span.clone()].to_string(),
                span,
            }),
        }
    }

    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}
