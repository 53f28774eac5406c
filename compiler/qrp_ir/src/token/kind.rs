//! Classified token kinds.
//!
//! A kind is two-level: a [`Flavour`] (Keyword, Comment, ...) and, inside it,
//! a flavour-type. Every flavour has exactly one `Unflavoured` catch-all used
//! when the raw type path offers nothing finer. Literals go one level deeper
//! for numbers.

use std::fmt;

/// First segment of every dotted type path.
pub const TYPE_PATH_ROOT: &str = "Token";

/// Defines a flavour-type enum whose variants map to one type-path segment
/// each, plus the trailing `Unflavoured` catch-all.
macro_rules! flavour_type {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $segment:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum $name {
            $($variant,)*
            Unflavoured,
        }

        impl $name {
            /// Every variant, catch-all last.
            pub const ALL: &'static [$name] = &[$($name::$variant,)* $name::Unflavoured];

            /// Type-path segment naming this variant; `None` for the catch-all.
            pub const fn segment(self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($segment),)*
                    $name::Unflavoured => None,
                }
            }
        }
    };
}

flavour_type! {
    /// Keyword flavour-types.
    KeywordKind {
        Constant => "Constant",
        Declaration => "Declaration",
        Namespace => "Namespace",
        Pseudo => "Pseudo",
        Reserved => "Reserved",
        Type => "Type",
    }
}

flavour_type! {
    /// Comment flavour-types.
    CommentKind {
        Hashbang => "Hashbang",
        Multiline => "Multiline",
        Preproc => "Preproc",
        Single => "Single",
        Special => "Special",
    }
}

flavour_type! {
    /// Name flavour-types.
    NameKind {
        Attribute => "Attribute",
        Builtin => "Builtin",
        Class => "Class",
        Constant => "Constant",
        Decorator => "Decorator",
        Exception => "Exception",
        Function => "Function",
        Label => "Label",
        Namespace => "Namespace",
        Property => "Property",
        Tag => "Tag",
        Variable => "Variable",
    }
}

flavour_type! {
    /// Number literal subtypes.
    NumberKind {
        Integer => "Integer",
        Float => "Float",
        Hex => "Hex",
        Bin => "Bin",
        Oct => "Oct",
    }
}

flavour_type! {
    /// Text flavour-types. Whitespace runs and unlabelled text.
    TextKind {
        Whitespace => "Whitespace",
    }
}

flavour_type! {
    /// Punctuation flavour-types.
    PunctuationKind {
        Marker => "Marker",
    }
}

flavour_type! {
    /// Operator flavour-types. `Word` covers keyword-like operators (`instanceof`).
    OperatorKind {
        Word => "Word",
    }
}

/// Literal flavour-types.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum LiteralKind {
    Number(NumberKind),
    String,
    Unflavoured,
}

impl LiteralKind {
    /// Segments below `Literal`, outermost first.
    fn segments(self) -> &'static [&'static str] {
        match self {
            LiteralKind::Number(number) => match number {
                NumberKind::Integer => &["Number", "Integer"],
                NumberKind::Float => &["Number", "Float"],
                NumberKind::Hex => &["Number", "Hex"],
                NumberKind::Bin => &["Number", "Bin"],
                NumberKind::Oct => &["Number", "Oct"],
                NumberKind::Unflavoured => &["Number"],
            },
            LiteralKind::String => &["String"],
            LiteralKind::Unflavoured => &[],
        }
    }
}

/// Top-level classification axis.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Flavour {
    Keyword,
    Comment,
    Name,
    Literal,
    Text,
    Punctuation,
    Operator,
}

impl Flavour {
    pub const ALL: [Flavour; 7] = [
        Flavour::Keyword,
        Flavour::Comment,
        Flavour::Name,
        Flavour::Literal,
        Flavour::Text,
        Flavour::Punctuation,
        Flavour::Operator,
    ];

    /// Type-path segment naming this flavour.
    pub const fn segment(self) -> &'static str {
        match self {
            Flavour::Keyword => "Keyword",
            Flavour::Comment => "Comment",
            Flavour::Name => "Name",
            Flavour::Literal => "Literal",
            Flavour::Text => "Text",
            Flavour::Punctuation => "Punctuation",
            Flavour::Operator => "Operator",
        }
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// The semantic kind of a classified token.
///
/// A single tagged value: the flavour is the outer variant, the flavour-type
/// the payload. Kinds are compared and hashed structurally, so the resolved
/// kind for `Token.Keyword.Declaration` is exactly
/// `TokenKind::Keyword(KeywordKind::Declaration)`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TokenKind {
    Keyword(KeywordKind),
    Comment(CommentKind),
    Name(NameKind),
    Literal(LiteralKind),
    Text(TextKind),
    Punctuation(PunctuationKind),
    Operator(OperatorKind),
}

impl TokenKind {
    /// The flavour (outer axis) of this kind.
    pub const fn flavour(self) -> Flavour {
        match self {
            TokenKind::Keyword(_) => Flavour::Keyword,
            TokenKind::Comment(_) => Flavour::Comment,
            TokenKind::Name(_) => Flavour::Name,
            TokenKind::Literal(_) => Flavour::Literal,
            TokenKind::Text(_) => Flavour::Text,
            TokenKind::Punctuation(_) => Flavour::Punctuation,
            TokenKind::Operator(_) => Flavour::Operator,
        }
    }

    /// Path segments below the root, flavour first.
    ///
    /// Catch-all kinds stop at the level they stand in for, so
    /// `Keyword(Unflavoured)` is just `["Keyword"]`.
    pub fn segments(self) -> Vec<&'static str> {
        let mut segments = vec![self.flavour().segment()];
        match self {
            TokenKind::Keyword(kind) => segments.extend(kind.segment()),
            TokenKind::Comment(kind) => segments.extend(kind.segment()),
            TokenKind::Name(kind) => segments.extend(kind.segment()),
            TokenKind::Literal(kind) => segments.extend_from_slice(kind.segments()),
            TokenKind::Text(kind) => segments.extend(kind.segment()),
            TokenKind::Punctuation(kind) => segments.extend(kind.segment()),
            TokenKind::Operator(kind) => segments.extend(kind.segment()),
        }
        segments
    }

    /// Name of the flavour-type (second axis), `None` for a flavour catch-all.
    pub fn flavour_type(self) -> Option<&'static str> {
        self.segments().get(1).copied()
    }

    /// Canonical dotted type path, e.g. `Token.Literal.Number.Integer`.
    ///
    /// Resolving this path through the standard taxonomy yields `self`.
    pub fn type_path(self) -> String {
        let mut path = String::from(TYPE_PATH_ROOT);
        for segment in self.segments() {
            path.push('.');
            path.push_str(segment);
        }
        path
    }

    /// Whether the innermost level of this kind is a catch-all.
    pub const fn is_unflavoured(self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordKind::Unflavoured)
                | TokenKind::Comment(CommentKind::Unflavoured)
                | TokenKind::Name(NameKind::Unflavoured)
                | TokenKind::Literal(
                    LiteralKind::Unflavoured | LiteralKind::Number(NumberKind::Unflavoured)
                )
                | TokenKind::Text(TextKind::Unflavoured)
                | TokenKind::Punctuation(PunctuationKind::Unflavoured)
                | TokenKind::Operator(OperatorKind::Unflavoured)
        )
    }

    /// Whitespace and comments: tokens that carry no program structure.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Text(_) | TokenKind::Comment(_))
    }

    /// Every kind, grouped by flavour.
    pub fn all() -> Vec<TokenKind> {
        let mut all = Vec::new();
        all.extend(KeywordKind::ALL.iter().map(|&k| TokenKind::Keyword(k)));
        all.extend(CommentKind::ALL.iter().map(|&k| TokenKind::Comment(k)));
        all.extend(NameKind::ALL.iter().map(|&k| TokenKind::Name(k)));
        all.extend(
            NumberKind::ALL
                .iter()
                .map(|&n| TokenKind::Literal(LiteralKind::Number(n))),
        );
        all.push(TokenKind::Literal(LiteralKind::String));
        all.push(TokenKind::Literal(LiteralKind::Unflavoured));
        all.extend(TextKind::ALL.iter().map(|&k| TokenKind::Text(k)));
        all.extend(PunctuationKind::ALL.iter().map(|&k| TokenKind::Punctuation(k)));
        all.extend(OperatorKind::ALL.iter().map(|&k| TokenKind::Operator(k)));
        all
    }
}

/// Dotted path without the root, e.g. `Keyword.Declaration`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
