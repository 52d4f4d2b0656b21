use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { literal } => ErrorTip::Suggestion(format!(
                "String `{}` is missing its closing quote",
                literal
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
}

/// Extracts every diagnostic carried by a token sequence: invalid tokens
/// and string literals that ran to a line boundary without their closing
/// quote. Severity is the caller's call; the lexer only records the facts.
pub fn scan(tokens: &[Token]) -> Vec<Error> {
    let mut errors = vec![];

    for token in tokens {
        match token.kind {
            TokenKind::InvalidToken => {
                errors.push(Error::new(
                    ErrorImpl::UnrecognisedCharacter {
                        character: token.value.clone(),
                    },
                    token.position,
                ));
            }
            TokenKind::StringLiteral => {
                if !string_is_terminated(&token.value) {
                    errors.push(Error::new(
                        ErrorImpl::UnterminatedString {
                            literal: token.value.clone(),
                        },
                        token.position,
                    ));
                }
            }
            _ => {}
        }
    }

    errors
}

/// A string token is terminated when its body ends with a lone (non
/// doubled) closing quote.
fn string_is_terminated(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('"') {
        return false;
    }

    let mut chars = chars.peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
            } else {
                // a lone quote terminates the literal
                return true;
            }
        }
    }

    false
}
