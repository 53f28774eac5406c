//! The built-in taxonomy table.
//!
//! Covers the type paths a Pygments-style lexer emits for Java-like sources.
//! Every branch below the root ends with a `_` fallback; the root has none,
//! so paths outside these flavours are rejected.

use qrp_ir::{
    CommentKind, KeywordKind, LiteralKind, NameKind, NumberKind, OperatorKind, PunctuationKind,
    TextKind, TokenKind,
};

pub static STANDARD_ENTRIES: &[(&str, TokenKind)] = &[
    // Keyword
    ("Token.Keyword.Constant", TokenKind::Keyword(KeywordKind::Constant)),
    ("Token.Keyword.Declaration", TokenKind::Keyword(KeywordKind::Declaration)),
    ("Token.Keyword.Namespace", TokenKind::Keyword(KeywordKind::Namespace)),
    ("Token.Keyword.Pseudo", TokenKind::Keyword(KeywordKind::Pseudo)),
    ("Token.Keyword.Reserved", TokenKind::Keyword(KeywordKind::Reserved)),
    ("Token.Keyword.Type", TokenKind::Keyword(KeywordKind::Type)),
    ("Token.Keyword._", TokenKind::Keyword(KeywordKind::Unflavoured)),
    // Comment
    ("Token.Comment.Hashbang", TokenKind::Comment(CommentKind::Hashbang)),
    ("Token.Comment.Multiline", TokenKind::Comment(CommentKind::Multiline)),
    ("Token.Comment.Preproc", TokenKind::Comment(CommentKind::Preproc)),
    ("Token.Comment.Single", TokenKind::Comment(CommentKind::Single)),
    ("Token.Comment.Special", TokenKind::Comment(CommentKind::Special)),
    ("Token.Comment._", TokenKind::Comment(CommentKind::Unflavoured)),
    // Name
    ("Token.Name.Attribute", TokenKind::Name(NameKind::Attribute)),
    ("Token.Name.Builtin", TokenKind::Name(NameKind::Builtin)),
    ("Token.Name.Class", TokenKind::Name(NameKind::Class)),
    ("Token.Name.Constant", TokenKind::Name(NameKind::Constant)),
    ("Token.Name.Decorator", TokenKind::Name(NameKind::Decorator)),
    ("Token.Name.Exception", TokenKind::Name(NameKind::Exception)),
    ("Token.Name.Function", TokenKind::Name(NameKind::Function)),
    ("Token.Name.Label", TokenKind::Name(NameKind::Label)),
    ("Token.Name.Namespace", TokenKind::Name(NameKind::Namespace)),
    ("Token.Name.Property", TokenKind::Name(NameKind::Property)),
    ("Token.Name.Tag", TokenKind::Name(NameKind::Tag)),
    ("Token.Name.Variable", TokenKind::Name(NameKind::Variable)),
    ("Token.Name._", TokenKind::Name(NameKind::Unflavoured)),
    // Literal
    (
        "Token.Literal.Number.Integer",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Integer)),
    ),
    (
        "Token.Literal.Number.Float",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Float)),
    ),
    (
        "Token.Literal.Number.Hex",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Hex)),
    ),
    (
        "Token.Literal.Number.Bin",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Bin)),
    ),
    (
        "Token.Literal.Number.Oct",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Oct)),
    ),
    (
        "Token.Literal.Number._",
        TokenKind::Literal(LiteralKind::Number(NumberKind::Unflavoured)),
    ),
    ("Token.Literal.String", TokenKind::Literal(LiteralKind::String)),
    ("Token.Literal._", TokenKind::Literal(LiteralKind::Unflavoured)),
    // Text
    ("Token.Text.Whitespace", TokenKind::Text(TextKind::Whitespace)),
    ("Token.Text._", TokenKind::Text(TextKind::Unflavoured)),
    // Punctuation
    ("Token.Punctuation.Marker", TokenKind::Punctuation(PunctuationKind::Marker)),
    ("Token.Punctuation._", TokenKind::Punctuation(PunctuationKind::Unflavoured)),
    // Operator
    ("Token.Operator.Word", TokenKind::Operator(OperatorKind::Word)),
    ("Token.Operator._", TokenKind::Operator(OperatorKind::Unflavoured)),
];
