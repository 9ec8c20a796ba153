//! Parser for kai source code.
//!
//! Transforms a token stream from the lexer into an Abstract Syntax Tree.
//! Uses chumsky for parser combinators with good error reporting: every
//! failure is a `Diagnostic` with a byte span and a message, and a single
//! parse may surface several of them. Callers must not assume exactly one.

use std::ops::Range;

use chumsky::{input::ValueInput, prelude::*};

use crate::ast::{
    Arg, Assignment, BinaryOp, Command, Expr, ForLoop, IfStmt, Pipeline, Program, Stmt, Value,
};
use crate::lexer::{self, Token};

/// Span type used throughout the parser.
pub type Span = SimpleSpan;

/// A structured parse (or lex) diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Range<usize>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
    }
}

impl std::error::Error for Diagnostic {}

/// Extract the variable name from a raw `${NAME}` slice.
fn var_name(raw: &str) -> String {
    raw[2..raw.len() - 1].to_string()
}

/// Parse kai source code into a Program AST.
///
/// On failure returns every diagnostic the lexer or parser produced, in
/// source order for lex errors and parser-reported order otherwise.
pub fn parse(source: &str) -> Result<Program, Vec<Diagnostic>> {
    // Tokenize with logos, collecting all lex errors.
    let tokens = lexer::tokenize(source).map_err(|errs| {
        errs.into_iter()
            .map(|e| Diagnostic {
                message: e.to_string(),
                span: e.span,
            })
            .collect::<Vec<_>>()
    })?;

    // Convert tokens to (Token, SimpleSpan) pairs.
    let tokens: Vec<(Token, Span)> = tokens
        .into_iter()
        .map(|spanned| (spanned.token, (spanned.span.start..spanned.span.end).into()))
        .collect();

    // End-of-input span.
    let end_span: Span = (source.len()..source.len()).into();

    let parser = program_parser();
    let result = parser.parse(tokens.as_slice().map(end_span, |(t, s)| (t, s)));

    result.into_result().map_err(|errs| {
        errs.into_iter()
            .map(|e| Diagnostic {
                span: e.span().start..e.span().end,
                message: e.to_string(),
            })
            .collect()
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Parser Combinators - generic over input type
// ═══════════════════════════════════════════════════════════════════════════

/// Top-level program parser.
fn program_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Program, extra::Err<Rich<'tokens, Token, Span>>>
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    statement_parser()
        .repeated()
        .collect::<Vec<_>>()
        .map(|statements| Program { statements })
}

/// Statement parser - dispatches based on leading token.
fn statement_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Stmt, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    recursive(|stmt| {
        let terminator = choice((just(Token::Newline), just(Token::Semi))).repeated();

        choice((
            just(Token::Newline).to(Stmt::Empty),
            assignment_parser().map(Stmt::Assignment),
            if_parser(stmt.clone()).map(Stmt::If),
            for_parser(stmt).map(Stmt::For),
            pipeline_parser().map(|p| {
                // Unwrap single-command pipelines without background
                if p.commands.len() == 1 && !p.background {
                    match p.commands.into_iter().next() {
                        Some(cmd) => Stmt::Command(cmd),
                        None => Stmt::Empty, // unreachable but safe
                    }
                } else {
                    Stmt::Pipeline(p)
                }
            }),
        ))
        .boxed()
        .then_ignore(terminator)
    })
}

/// Assignment: `set NAME = value`
fn assignment_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Assignment, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    just(Token::Set)
        .ignore_then(ident_parser())
        .then_ignore(just(Token::Eq))
        .then(primary_expr_parser())
        .map(|(name, value)| Assignment { name, value })
        .labelled("assignment")
        .boxed()
}

/// If statement: `if COND; then STMTS [else STMTS] fi`
fn if_parser<'tokens, I, S>(
    stmt: S,
) -> impl Parser<'tokens, I, IfStmt, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
    S: Parser<'tokens, I, Stmt, extra::Err<Rich<'tokens, Token, Span>>> + Clone + 'tokens,
{
    just(Token::If)
        .ignore_then(condition_parser())
        .then_ignore(just(Token::Semi).or_not())
        .then_ignore(just(Token::Newline).repeated())
        .then_ignore(just(Token::Then))
        .then_ignore(just(Token::Newline).repeated())
        .then(
            stmt.clone()
                .repeated()
                .collect::<Vec<_>>()
                .map(|stmts| stmts.into_iter().filter(|s| !matches!(s, Stmt::Empty)).collect()),
        )
        .then(
            just(Token::Else)
                .ignore_then(just(Token::Newline).repeated())
                .ignore_then(stmt.repeated().collect::<Vec<_>>())
                .map(|stmts| stmts.into_iter().filter(|s| !matches!(s, Stmt::Empty)).collect())
                .or_not(),
        )
        .then_ignore(just(Token::Fi))
        .map(|((condition, then_branch), else_branch)| IfStmt {
            condition: Box::new(condition),
            then_branch,
            else_branch,
        })
        .labelled("if statement")
        .boxed()
}

/// For loop: `for VAR in EXPR; do STMTS done`
fn for_parser<'tokens, I, S>(
    stmt: S,
) -> impl Parser<'tokens, I, ForLoop, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
    S: Parser<'tokens, I, Stmt, extra::Err<Rich<'tokens, Token, Span>>> + Clone + 'tokens,
{
    just(Token::For)
        .ignore_then(ident_parser())
        .then_ignore(just(Token::In))
        .then(primary_expr_parser())
        .then_ignore(just(Token::Semi).or_not())
        .then_ignore(just(Token::Newline).repeated())
        .then_ignore(just(Token::Do))
        .then_ignore(just(Token::Newline).repeated())
        .then(
            stmt.repeated()
                .collect::<Vec<_>>()
                .map(|stmts| stmts.into_iter().filter(|s| !matches!(s, Stmt::Empty)).collect()),
        )
        .then_ignore(just(Token::Done))
        .map(|((variable, iterable), body)| ForLoop {
            variable,
            iterable,
            body,
        })
        .labelled("for loop")
        .boxed()
}

/// Pipeline: `cmd | cmd | cmd [&]`
fn pipeline_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Pipeline, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    command_parser()
        .separated_by(just(Token::Pipe))
        .at_least(1)
        .collect::<Vec<_>>()
        .then(just(Token::Amp).or_not())
        .map(|(commands, bg)| Pipeline {
            commands,
            background: bg.is_some(),
        })
        .labelled("pipeline")
        .boxed()
}

/// Command: `name args...`
fn command_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Command, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    ident_parser()
        .then(arg_parser().repeated().collect::<Vec<_>>())
        .map(|(name, args)| Command { name, args })
        .labelled("command")
        .boxed()
}

/// Argument: positional value or `name=value`
fn arg_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Arg, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    ident_parser()
        .then_ignore(just(Token::Eq))
        .then(primary_expr_parser())
        .map(|(key, value)| Arg::Named { key, value })
        .or(primary_expr_parser().map(Arg::Positional))
        .boxed()
}

/// Condition parser: supports comparisons, && and || operators.
///
/// Grammar:
///   condition = or_expr
///   or_expr   = and_expr { "||" and_expr }
///   and_expr  = cmp_expr { "&&" cmp_expr }
///   cmp_expr  = value [ comp_op value ]
fn condition_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Expr, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    let comparison_op = select! {
        Token::EqEq => BinaryOp::Eq,
        Token::NotEq => BinaryOp::NotEq,
        Token::Lt => BinaryOp::Lt,
        Token::Gt => BinaryOp::Gt,
        Token::LtEq => BinaryOp::LtEq,
        Token::GtEq => BinaryOp::GtEq,
    };

    // cmp_expr: value [ comp_op value ]
    let cmp_expr = primary_expr_parser()
        .then(comparison_op.then(primary_expr_parser()).or_not())
        .map(|(left, maybe_op)| match maybe_op {
            Some((op, right)) => Expr::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            None => left,
        });

    // and_expr: cmp_expr { "&&" cmp_expr }
    let and_expr = cmp_expr.clone().foldl(
        just(Token::And).ignore_then(cmp_expr).repeated(),
        |left, right| Expr::BinaryOp {
            left: Box::new(left),
            op: BinaryOp::And,
            right: Box::new(right),
        },
    );

    // or_expr: and_expr { "||" and_expr }
    and_expr
        .clone()
        .foldl(
            just(Token::Or).ignore_then(and_expr).repeated(),
            |left, right| Expr::BinaryOp {
                left: Box::new(left),
                op: BinaryOp::Or,
                right: Box::new(right),
            },
        )
        .labelled("condition")
        .boxed()
}

/// Primary expression: literal, variable reference, or bare identifier.
fn primary_expr_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Expr, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    choice((
        var_ref_parser().map(Expr::VarRef),
        literal_parser().map(Expr::Literal),
        // Bare identifiers become string literals (shell barewords)
        ident_parser().map(|s| Expr::Literal(Value::String(s))),
    ))
    .labelled("expression")
    .boxed()
}

/// Variable reference: `${NAME}`.
fn var_ref_parser<'tokens, I>(
) -> impl Parser<'tokens, I, String, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    select! {
        Token::VarRef(raw) => var_name(&raw),
    }
    .labelled("variable reference")
}

/// Literal value parser: scalars plus nested arrays and objects.
fn literal_parser<'tokens, I>(
) -> impl Parser<'tokens, I, Value, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    recursive(|value| {
        let scalar = select! {
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Int(n) => Value::Int(n),
            Token::Float(f) => Value::Float(f),
            Token::Str(s) => Value::String(s),
        };

        // Elements of arrays and object values: any literal or a var ref.
        let element = choice((
            select! { Token::VarRef(raw) => Expr::VarRef(var_name(&raw)) },
            value.map(Expr::Literal),
        ));

        // Array: `[value, value, ...]`
        let array = element
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Value::Array);

        // Object: `{"key": value, ...}`
        let pair = select! { Token::Str(s) => s }
            .then_ignore(just(Token::Colon))
            .then(element);
        let object = pair
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(Value::Object);

        choice((scalar, array, object)).labelled("literal")
    })
    .boxed()
}

/// Identifier parser.
fn ident_parser<'tokens, I>(
) -> impl Parser<'tokens, I, String, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    select! {
        Token::Ident(s) => s,
    }
    .labelled("identifier")
}
