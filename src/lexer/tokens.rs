use std::fmt::Display;

use crate::Position;

/// Every lexical kind the tokenizer can emit. The set is closed: each kind
/// belongs to exactly one [`TokenGroup`], enforced by the exhaustive match
/// in [`TokenKind::group`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Basic keywords
    And,
    Eval,
    If,
    Then,
    Else,
    For,
    To,
    Step,
    Exit,
    Each,
    While,
    Function,
    Sub,
    As,
    Return,
    Print,
    Goto,
    Dim,
    Stop,
    Void,
    Number,
    Boolean,
    Integer,
    LongInteger,
    Float,
    Double,
    StringType,
    Object,
    Interface,
    Invalid,
    Dynamic,
    Or,
    Let,
    LineNum,
    Next,
    Not,
    Run,
    Mod,

    // Composite keywords ("end if", "exit for", ...) and conditional
    // compilation directives
    ElseIf,
    EndFunction,
    EndIf,
    EndSub,
    EndWhile,
    EndFor,
    ExitWhile,
    ExitFor,
    CondIf,
    CondElse,
    CondElseIf,
    CondEndIf,

    // Symbols
    LeftShiftAssignment,     // <<=
    RightShiftAssignment,    // >>=
    AdditionAssignment,      // +=
    SubtractionAssignment,   // -=
    MultiplicationAssignment, // *=
    DivisionAssignment,      // /=
    IntegerDivisionAssignment, // \=
    PlusPlus,                // ++
    MinusMinus,              // --
    NotEqual,                // <>
    LessOrEqual,             // <=
    GreaterOrEqual,          // >=
    LeftShift,               // <<
    RightShift,              // >>
    Asterisk,
    ForwardSlash,
    BackSlash,
    Plus,
    Minus,
    Caret,
    Percent,
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
    Period,
    Comma,
    Semicolon,
    Equal,
    LessThan,
    GreaterThan,
    Colon,

    // Literals
    NumberLiteral,
    BooleanLiteral,
    StringLiteral,

    // Structural
    Identifier,
    QuoteComment,
    RemComment,
    Newline,
    Spaces,
    Tabs,
    EndOfFile,
    InvalidToken,
}

/// The four disjoint buckets every [`TokenKind`] falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenGroup {
    Keyword,
    Symbol,
    Literal,
    Structural,
}

impl TokenKind {
    pub fn group(&self) -> TokenGroup {
        match self {
            TokenKind::And
            | TokenKind::Eval
            | TokenKind::If
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::For
            | TokenKind::To
            | TokenKind::Step
            | TokenKind::Exit
            | TokenKind::Each
            | TokenKind::While
            | TokenKind::Function
            | TokenKind::Sub
            | TokenKind::As
            | TokenKind::Return
            | TokenKind::Print
            | TokenKind::Goto
            | TokenKind::Dim
            | TokenKind::Stop
            | TokenKind::Void
            | TokenKind::Number
            | TokenKind::Boolean
            | TokenKind::Integer
            | TokenKind::LongInteger
            | TokenKind::Float
            | TokenKind::Double
            | TokenKind::StringType
            | TokenKind::Object
            | TokenKind::Interface
            | TokenKind::Invalid
            | TokenKind::Dynamic
            | TokenKind::Or
            | TokenKind::Let
            | TokenKind::LineNum
            | TokenKind::Next
            | TokenKind::Not
            | TokenKind::Run
            | TokenKind::Mod
            | TokenKind::ElseIf
            | TokenKind::EndFunction
            | TokenKind::EndIf
            | TokenKind::EndSub
            | TokenKind::EndWhile
            | TokenKind::EndFor
            | TokenKind::ExitWhile
            | TokenKind::ExitFor
            | TokenKind::CondIf
            | TokenKind::CondElse
            | TokenKind::CondElseIf
            | TokenKind::CondEndIf => TokenGroup::Keyword,

            TokenKind::LeftShiftAssignment
            | TokenKind::RightShiftAssignment
            | TokenKind::AdditionAssignment
            | TokenKind::SubtractionAssignment
            | TokenKind::MultiplicationAssignment
            | TokenKind::DivisionAssignment
            | TokenKind::IntegerDivisionAssignment
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::NotEqual
            | TokenKind::LessOrEqual
            | TokenKind::GreaterOrEqual
            | TokenKind::LeftShift
            | TokenKind::RightShift
            | TokenKind::Asterisk
            | TokenKind::ForwardSlash
            | TokenKind::BackSlash
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Caret
            | TokenKind::Percent
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenSquare
            | TokenKind::CloseSquare
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::Period
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Equal
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::Colon => TokenGroup::Symbol,

            TokenKind::NumberLiteral | TokenKind::BooleanLiteral | TokenKind::StringLiteral => {
                TokenGroup::Literal
            }

            TokenKind::Identifier
            | TokenKind::QuoteComment
            | TokenKind::RemComment
            | TokenKind::Newline
            | TokenKind::Spaces
            | TokenKind::Tabs
            | TokenKind::EndOfFile
            | TokenKind::InvalidToken => TokenGroup::Structural,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.group() == TokenGroup::Keyword
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Single-word reserved words, matched case-insensitively and only as whole
/// words (a keyword immediately followed by an identifier character falls
/// through to the identifier rule).
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("eval", TokenKind::Eval),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("to", TokenKind::To),
    ("step", TokenKind::Step),
    ("exit", TokenKind::Exit),
    ("each", TokenKind::Each),
    ("while", TokenKind::While),
    ("function", TokenKind::Function),
    ("sub", TokenKind::Sub),
    ("as", TokenKind::As),
    ("return", TokenKind::Return),
    ("print", TokenKind::Print),
    ("goto", TokenKind::Goto),
    ("dim", TokenKind::Dim),
    ("stop", TokenKind::Stop),
    ("void", TokenKind::Void),
    ("number", TokenKind::Number),
    ("boolean", TokenKind::Boolean),
    ("integer", TokenKind::Integer),
    ("longinteger", TokenKind::LongInteger),
    ("float", TokenKind::Float),
    ("double", TokenKind::Double),
    ("string", TokenKind::StringType),
    ("object", TokenKind::Object),
    ("interface", TokenKind::Interface),
    ("invalid", TokenKind::Invalid),
    ("dynamic", TokenKind::Dynamic),
    ("or", TokenKind::Or),
    ("let", TokenKind::Let),
    ("linenum", TokenKind::LineNum),
    ("next", TokenKind::Next),
    ("not", TokenKind::Not),
    ("run", TokenKind::Run),
    ("mod", TokenKind::Mod),
];

/// Two-word reserved phrases and conditional-compilation directives, as
/// regex fragments. Registered before the single-word keywords they are
/// built from, so "end if" never splits into `end` + `if`. Order within
/// this table matters: `#else if` must be tried before `#else`.
pub const COMPOSITE_KEYWORDS: &[(&str, TokenKind)] = &[
    (r"end\s*function", TokenKind::EndFunction),
    (r"end\s*if", TokenKind::EndIf),
    (r"end\s*sub", TokenKind::EndSub),
    (r"end\s*while", TokenKind::EndWhile),
    (r"exit\s*while", TokenKind::ExitWhile),
    (r"exit\s*for", TokenKind::ExitFor),
    (r"end\s*for", TokenKind::EndFor),
    (r"else[ \t]*if", TokenKind::ElseIf),
    (r"#if", TokenKind::CondIf),
    (r"#else[ \t]*if", TokenKind::CondElseIf),
    (r"#else", TokenKind::CondElse),
    (r"#end\s*if", TokenKind::CondEndIf),
];

/// Fixed literal symbols in registration order. Multi-character symbols
/// come strictly before every single-character symbol that prefixes them,
/// so `<=` is never split into `<` + `=`.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::LeftShiftAssignment),
    (">>=", TokenKind::RightShiftAssignment),
    ("+=", TokenKind::AdditionAssignment),
    ("-=", TokenKind::SubtractionAssignment),
    ("*=", TokenKind::MultiplicationAssignment),
    ("/=", TokenKind::DivisionAssignment),
    ("\\=", TokenKind::IntegerDivisionAssignment),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("<>", TokenKind::NotEqual),
    ("<=", TokenKind::LessOrEqual),
    (">=", TokenKind::GreaterOrEqual),
    ("<<", TokenKind::LeftShift),
    (">>", TokenKind::RightShift),
    ("*", TokenKind::Asterisk),
    ("/", TokenKind::ForwardSlash),
    ("\\", TokenKind::BackSlash),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("^", TokenKind::Caret),
    ("%", TokenKind::Percent),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenSquare),
    ("]", TokenKind::CloseSquare),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    (".", TokenKind::Period),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    ("=", TokenKind::Equal),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    (":", TokenKind::Colon),
];

/// Every kind in the enum, used by the partition tests and by consumers
/// that iterate the full catalog.
pub const ALL_KINDS: &[TokenKind] = &[
    TokenKind::And,
    TokenKind::Eval,
    TokenKind::If,
    TokenKind::Then,
    TokenKind::Else,
    TokenKind::For,
    TokenKind::To,
    TokenKind::Step,
    TokenKind::Exit,
    TokenKind::Each,
    TokenKind::While,
    TokenKind::Function,
    TokenKind::Sub,
    TokenKind::As,
    TokenKind::Return,
    TokenKind::Print,
    TokenKind::Goto,
    TokenKind::Dim,
    TokenKind::Stop,
    TokenKind::Void,
    TokenKind::Number,
    TokenKind::Boolean,
    TokenKind::Integer,
    TokenKind::LongInteger,
    TokenKind::Float,
    TokenKind::Double,
    TokenKind::StringType,
    TokenKind::Object,
    TokenKind::Interface,
    TokenKind::Invalid,
    TokenKind::Dynamic,
    TokenKind::Or,
    TokenKind::Let,
    TokenKind::LineNum,
    TokenKind::Next,
    TokenKind::Not,
    TokenKind::Run,
    TokenKind::Mod,
    TokenKind::ElseIf,
    TokenKind::EndFunction,
    TokenKind::EndIf,
    TokenKind::EndSub,
    TokenKind::EndWhile,
    TokenKind::EndFor,
    TokenKind::ExitWhile,
    TokenKind::ExitFor,
    TokenKind::CondIf,
    TokenKind::CondElse,
    TokenKind::CondElseIf,
    TokenKind::CondEndIf,
    TokenKind::LeftShiftAssignment,
    TokenKind::RightShiftAssignment,
    TokenKind::AdditionAssignment,
    TokenKind::SubtractionAssignment,
    TokenKind::MultiplicationAssignment,
    TokenKind::DivisionAssignment,
    TokenKind::IntegerDivisionAssignment,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::NotEqual,
    TokenKind::LessOrEqual,
    TokenKind::GreaterOrEqual,
    TokenKind::LeftShift,
    TokenKind::RightShift,
    TokenKind::Asterisk,
    TokenKind::ForwardSlash,
    TokenKind::BackSlash,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Caret,
    TokenKind::Percent,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::OpenSquare,
    TokenKind::CloseSquare,
    TokenKind::OpenCurly,
    TokenKind::CloseCurly,
    TokenKind::Period,
    TokenKind::Comma,
    TokenKind::Semicolon,
    TokenKind::Equal,
    TokenKind::LessThan,
    TokenKind::GreaterThan,
    TokenKind::Colon,
    TokenKind::NumberLiteral,
    TokenKind::BooleanLiteral,
    TokenKind::StringLiteral,
    TokenKind::Identifier,
    TokenKind::QuoteComment,
    TokenKind::RemComment,
    TokenKind::Newline,
    TokenKind::Spaces,
    TokenKind::Tabs,
    TokenKind::EndOfFile,
    TokenKind::InvalidToken,
];

/// A classified, positioned substring of the source text. Concatenating
/// the `value` of every token in sequence order reproduces the original
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if *kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::NumberLiteral,
            TokenKind::Identifier,
            TokenKind::QuoteComment,
            TokenKind::RemComment,
            TokenKind::InvalidToken,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
