use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, COMPOSITE_KEYWORDS, KEYWORDS, SYMBOLS};

/// One entry of the matcher chain. Rules are tried strictly in
/// registration order; the first rule whose regex matches a prefix of the
/// remaining text wins, even when a later rule would match more characters.
///
/// `whole_word` stands in for the original negative lookahead on
/// identifier characters (the regex crate has no look-around): when set,
/// a prefix match is rejected if the character immediately after it could
/// continue an identifier, so `fortune` never yields a `for` keyword.
pub struct MatchRule {
    kind: TokenKind,
    regex: Regex,
    whole_word: bool,
}

/// A successful prefix match against the rule table.
pub struct Match<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
}

fn pattern_rule(pattern: &str, kind: TokenKind, whole_word: bool) -> MatchRule {
    MatchRule {
        kind,
        regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
        whole_word,
    }
}

fn keyword_rule(keyword: &str, kind: TokenKind) -> MatchRule {
    pattern_rule(&format!("(?i:{})", regex::escape(keyword)), kind, true)
}

fn composite_rule(fragment: &str, kind: TokenKind) -> MatchRule {
    pattern_rule(&format!("(?i:{})", fragment), kind, true)
}

fn symbol_rule(symbol: &str, kind: TokenKind) -> MatchRule {
    pattern_rule(&regex::escape(symbol), kind, false)
}

fn build_match_rules() -> Vec<MatchRule> {
    let mut rules = vec![];

    // comments and newlines win over any keyword/identifier interpretation
    rules.push(pattern_rule(r"'[^\r\n]*", TokenKind::QuoteComment, false));
    rules.push(pattern_rule(r"(?i:rem)[ \t][^\r\n]*", TokenKind::RemComment, false));
    rules.push(pattern_rule(r"\r\n|\n\r|\r|\n", TokenKind::Newline, false));

    // composite keywords before the single-word keywords they contain
    for (fragment, kind) in COMPOSITE_KEYWORDS {
        rules.push(composite_rule(fragment, *kind));
    }

    rules.push(pattern_rule(r" +", TokenKind::Spaces, false));
    rules.push(pattern_rule(r"\t+", TokenKind::Tabs, false));

    for (keyword, kind) in KEYWORDS {
        rules.push(keyword_rule(keyword, *kind));
    }

    rules.push(pattern_rule(r"(?i:true|false)", TokenKind::BooleanLiteral, true));
    // a terminated string, then the unterminated fallback that runs to the
    // line boundary ("" is an escaped quote in both)
    rules.push(pattern_rule(r#""(?:[^"\r\n]|"")*""#, TokenKind::StringLiteral, false));
    rules.push(pattern_rule(r#""(?:[^"\r\n]|"")*"#, TokenKind::StringLiteral, false));
    rules.push(pattern_rule(r"[0-9]+[%!#]?", TokenKind::NumberLiteral, false));

    // multi-character symbols are registered before their prefixes
    for (symbol, kind) in SYMBOLS {
        rules.push(symbol_rule(symbol, *kind));
    }

    // the identifier rule is the most permissive, so it goes last
    rules.push(pattern_rule(
        r"[\p{L}_][\p{L}0-9_]*[$%!#]?",
        TokenKind::Identifier,
        false,
    ));

    rules
}

lazy_static! {
    static ref MATCH_RULES: Vec<MatchRule> = build_match_rules();
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds the first rule in registration order that matches a prefix of
/// `text`, or `None` when no rule applies at this position.
pub fn find_match(text: &str) -> Option<Match<'_>> {
    for rule in MATCH_RULES.iter() {
        if let Some(found) = rule.regex.find(text) {
            if rule.whole_word {
                let next = text[found.end()..].chars().next();
                if next.is_some_and(is_identifier_char) {
                    continue;
                }
            }
            return Some(Match {
                kind: rule.kind,
                value: found.as_str(),
            });
        }
    }

    None
}

/// The kinds that have at least one rule registered, in registration order.
pub fn registered_kinds() -> Vec<TokenKind> {
    MATCH_RULES.iter().map(|rule| rule.kind).collect()
}

/// Line/column bookkeeping over consumed text. `\r\n` and `\n\r` count as
/// a single line break, so values that span lines (like `end\nfunction`)
/// keep the tracker consistent.
struct PositionTracker {
    line: usize,
    column: usize,
}

impl PositionTracker {
    fn new() -> Self {
        PositionTracker { line: 0, column: 0 }
    }

    fn position(&self, offset: usize) -> Position {
        Position {
            offset,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\n' || c == '\r' {
                if let Some(&next) = chars.peek() {
                    if (next == '\n' || next == '\r') && next != c {
                        chars.next();
                    }
                }
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Walks the already-emitted tokens backward, skipping whitespace, to
/// decide whether a just-matched keyword is really an object member name
/// (`someArray.next()`), in which case it must be reclassified as an
/// identifier.
fn follows_member_access(tokens: &[Token]) -> bool {
    for token in tokens.iter().rev() {
        match token.kind {
            TokenKind::Spaces | TokenKind::Tabs => continue,
            TokenKind::Period => return true,
            _ => return false,
        }
    }

    false
}

/// Converts `text` into its full token sequence. Total over all input:
/// unrecognized characters become invalid tokens (one per character) and
/// the pass never fails. The returned sequence always ends with a single
/// end-of-file token, and concatenating every token value reproduces
/// `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = vec![];
    let mut pos = 0;
    let mut tracker = PositionTracker::new();

    while pos < text.len() {
        let remainder = &text[pos..];
        let position = tracker.position(pos);

        let (kind, value) = match find_match(remainder) {
            Some(matched) => {
                let kind = if matched.kind.is_keyword() && follows_member_access(&tokens) {
                    TokenKind::Identifier
                } else {
                    matched.kind
                };
                (kind, matched.value)
            }
            None => {
                // consume exactly one character and keep going
                let length = remainder
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                (TokenKind::InvalidToken, &remainder[..length])
            }
        };

        tokens.push(MK_TOKEN!(kind, String::from(value), position));
        tracker.advance(value);
        pos += value.len();
    }

    tokens.push(MK_TOKEN!(
        TokenKind::EndOfFile,
        String::new(),
        tracker.position(pos)
    ));
    tokens
}
