//! Integration tests for whole-document tokenization.
//!
//! These tests run the lexer over a realistic BrightScript channel source
//! and verify the round-trip guarantee, keyword handling and the
//! diagnostics scan end to end.

use brslex::{
    errors::errors::scan,
    lexer::{
        lexer::tokenize,
        tokens::{TokenGroup, TokenKind},
    },
};

const CHANNEL_SOURCE: &str = include_str!("channel.brs");

#[test]
fn test_tokenize_channel_source_round_trips() {
    let tokens = tokenize(CHANNEL_SOURCE);

    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(rebuilt, CHANNEL_SOURCE);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
}

#[test]
fn test_channel_source_has_no_diagnostics() {
    let tokens = tokenize(CHANNEL_SOURCE);
    let errors = scan(&tokens);

    assert!(errors.is_empty(), "unexpected diagnostics: {} found", errors.len());
}

#[test]
fn test_channel_source_keyword_structure() {
    let tokens = tokenize(CHANNEL_SOURCE);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(kinds[0], TokenKind::Sub);
    for expected in [
        TokenKind::While,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::ExitWhile,
        TokenKind::ElseIf,
        TokenKind::EndIf,
        TokenKind::EndWhile,
        TokenKind::EndSub,
        TokenKind::Function,
        TokenKind::As,
        TokenKind::StringType,
        TokenKind::Return,
        TokenKind::EndFunction,
        TokenKind::QuoteComment,
        TokenKind::RemComment,
        TokenKind::BooleanLiteral,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
    ] {
        assert!(kinds.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn test_member_named_after_keyword_lexes_as_identifier() {
    let tokens = tokenize(CHANNEL_SOURCE);

    // "itemQueue.next" must not produce a `next` keyword
    assert!(!tokens.iter().any(|token| token.kind == TokenKind::Next));
    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Identifier && token.value == "next"));
}

#[test]
fn test_identifier_type_designator_survives() {
    let tokens = tokenize(CHANNEL_SOURCE);

    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Identifier && token.value == "count%"));
}

#[test]
fn test_channel_source_offsets_are_contiguous() {
    let tokens = tokenize(CHANNEL_SOURCE);

    let mut expected_offset = 0;
    for token in &tokens {
        assert_eq!(token.position.offset, expected_offset);
        expected_offset += token.value.len();
    }
    assert_eq!(expected_offset, CHANNEL_SOURCE.len());
}

#[test]
fn test_tokenize_is_idempotent_across_calls() {
    assert_eq!(tokenize(CHANNEL_SOURCE), tokenize(CHANNEL_SOURCE));
}

#[test]
fn test_crlf_source_does_not_add_extra_newlines() {
    let source = "sub Main()\r\n    showChannelSGScreen()\r\n    end sub";
    let tokens = tokenize(source);

    let newlines = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 2);

    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_malformed_source_is_fully_reported() {
    let source = "sub Broken()\n    s = \"no closing quote\n    k = @\nend sub";
    let tokens = tokenize(source);
    let errors = scan(&tokens);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    assert_eq!(errors[0].get_position().line, 1);
    assert_eq!(errors[1].get_error_name(), "UnrecognisedCharacter");
    assert_eq!(errors[1].get_position().line, 2);

    // malformed input still round-trips
    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_structural_tokens_cover_all_whitespace() {
    let tokens = tokenize(CHANNEL_SOURCE);

    for token in &tokens {
        if token.value.chars().all(|c| c == ' ') && !token.value.is_empty() {
            assert_eq!(token.kind, TokenKind::Spaces);
        }
        if token.kind == TokenKind::Spaces || token.kind == TokenKind::Tabs {
            assert_eq!(token.kind.group(), TokenGroup::Structural);
        }
    }
}
