//! Diagnostics derived from the token stream.
//!
//! The lexer itself never fails; anything unusual it finds is represented
//! as token data. This module gives consumers the error view of that
//! data. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the anomalies a token stream can carry
//! - A scan pass that extracts every diagnostic from a token sequence
//! - Helpful error messages and suggestions

pub mod errors;
