//! Lexical analysis module for BrightScript source text.
//!
//! This module contains the tokenizer that converts a whole source
//! document into a flat stream of tokens. It handles:
//!
//! - Tokenization driven by an ordered, first-match regex rule table
//! - Recognition of keywords (including composites like "end if"),
//!   identifiers, literals, symbols, comments and whitespace
//! - Offset/line/column tracking for every token
//! - Lossless output: token values concatenate back to the exact input

pub mod lexer;
pub mod tokens;
