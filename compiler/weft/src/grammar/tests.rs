#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{alternative, discard, literal, repeat, sequence, tag};
use pretty_assertions::assert_eq;

// === Node actions ===

#[test]
fn test_on_match_replaces_result() {
    let g = literal("yes").on_match(|_| Ok(Match::literal("true")));
    assert_eq!(g.parse_text("yes").unwrap(), Match::literal("true"));
}

#[test]
fn test_on_match_composes_in_attachment_order() {
    let g = literal("a")
        .on_match(|m| Ok(Match::literal(format!("{}1", m.flatten()))))
        .on_match(|m| Ok(Match::literal(format!("{}2", m.flatten()))));
    assert_eq!(g.parse_text("a").unwrap(), Match::literal("a12"));
}

#[test]
fn test_on_match_decorates_shared_node() {
    let num = literal("1");
    let user = sequence([num.clone()]);
    num.clone().on_match(|_| Ok(Match::literal("one")));
    assert_eq!(
        user.parse_text("1").unwrap(),
        Match::Sequence(vec![Match::literal("one")])
    );
    assert_eq!(num.parse_text("1").unwrap(), Match::literal("one"));
}

#[test]
fn test_on_match_on_placeholder_runs_after_binding() {
    let slot = Grammar::placeholder();
    let user = sequence([slot.clone()]);
    slot.clone().on_match(|m| Ok(Match::tagged("slot", m)));
    slot.rebind(&literal("z").on_match(|_| Ok(Match::literal("Z"))))
        .unwrap();
    assert_eq!(
        user.parse_text("z").unwrap(),
        Match::Sequence(vec![Match::tagged("slot", Match::literal("Z"))])
    );
}

#[test]
fn test_on_match_not_called_on_failure() {
    let g = literal("a").on_match(|_| Err(ParseError::rejected("unreachable")));
    assert_eq!(
        g.parse_text("b"),
        Err(ParseError::Recoverable(Failure::Mismatch {
            expected: "a".into(),
            found: "b".into(),
        }))
    );
}

#[test]
fn test_on_match_sees_discard_as_empty() {
    let g = discard(literal("a")).on_match(|m| {
        assert_eq!(m, Match::empty());
        Ok(Match::literal("seen"))
    });
    assert_eq!(g.parse_text("a").unwrap(), Match::literal("seen"));
}

#[test]
fn test_transform_error_does_not_rewind_node() {
    let g = literal("ab").on_match(|_| Err(ParseError::rejected("no")));
    let mut source = SliceSource::new("abc");
    let result = g.parse(&mut source);
    assert_eq!(result, Err(ParseError::rejected("no")));
    assert_eq!(source.remaining(), b"c");
}

#[test]
fn test_transform_error_backtracked_by_caller() {
    let picky = literal("ab").on_match(|_| Err(ParseError::rejected("no")));
    let g = alternative([picky, literal("a")]);
    let mut source = SliceSource::new("abc");
    assert_eq!(g.parse(&mut source).unwrap(), Match::literal("a"));
    assert_eq!(source.remaining(), b"bc");
}

#[test]
fn test_transform_error_inside_repeat_rewinds_iteration() {
    let odd = literal("x").on_match(|_| Err(ParseError::rejected("no x")));
    let g = repeat(0, 0, alternative([literal("a"), odd]));
    let mut source = SliceSource::new("aax");
    assert_eq!(
        g.parse(&mut source).unwrap(),
        Match::Sequence(vec![Match::literal("a"), Match::literal("a")])
    );
    assert_eq!(source.remaining(), b"x");
}

#[test]
fn test_fatal_transform_error() {
    let g = alternative([
        literal("a").on_match(|_| Err(ParseError::rejected("bad").into_fatal())),
        literal("a"),
    ]);
    assert_eq!(
        g.parse_text("a"),
        Err(ParseError::Fatal(Failure::Rejected("bad".into())))
    );
}

// === Placeholders / rebind ===

#[test]
fn test_unbound_placeholder_is_fatal() {
    let g = Grammar::placeholder();
    assert!(!g.is_bound());
    assert_eq!(g.parse_text("x"), Err(ParseError::Fatal(Failure::Unbound)));
}

#[test]
fn test_rebind_by_reference() {
    let later = Grammar::placeholder();
    // Captured before it has a body.
    let g = sequence([literal("<"), later.clone(), literal(">")]);
    later.rebind(&literal("x")).unwrap();
    assert!(later.is_bound());
    assert_eq!(
        g.parse_text("<x>").unwrap(),
        Match::Sequence(vec![
            Match::literal("<"),
            Match::literal("x"),
            Match::literal(">"),
        ])
    );
}

#[test]
fn test_rebind_exactly_once() {
    let g = Grammar::placeholder();
    g.rebind(&literal("a")).unwrap();
    assert_eq!(g.rebind(&literal("b")), Err(BindError::AlreadyBound));
    assert_eq!(g.parse_text("a").unwrap(), Match::literal("a"));
}

#[test]
fn test_rebind_rejects_built_grammar() {
    assert_eq!(
        literal("a").rebind(&literal("b")),
        Err(BindError::AlreadyBound)
    );
}

#[test]
fn test_rebind_rejects_self() {
    let g = Grammar::placeholder();
    assert_eq!(g.rebind(&g), Err(BindError::Cycle));
    assert!(!g.is_bound());
}

#[test]
fn test_rebind_rejects_alias_cycle() {
    let a = Grammar::placeholder();
    let b = Grammar::placeholder();
    b.rebind(&a).unwrap();
    assert_eq!(a.rebind(&b), Err(BindError::Cycle));
}

#[test]
fn test_recursion_through_combinator() {
    // nested := "(" nested ")" | "x"
    let nested = Grammar::placeholder();
    let body = alternative([
        sequence([
            discard(literal("(")),
            nested.clone(),
            discard(literal(")")),
        ]),
        tag("leaf", literal("x")),
    ]);
    nested.rebind(&body).unwrap();

    let m = nested.parse_text("((x))").unwrap();
    assert_eq!(m.find_tag("leaf"), Some(&Match::literal("x")));
    assert_eq!(m.flatten(), "x");
}

#[test]
fn test_deep_recursion_does_not_overflow() {
    // Each level collapses to a literal so the result tree stays shallow.
    let nested = Grammar::placeholder();
    let body = alternative([
        sequence([
            discard(literal("(")),
            nested.clone(),
            discard(literal(")")),
        ])
        .on_match(|m| Ok(Match::literal(m.flatten()))),
        literal("x"),
    ]);
    nested.rebind(&body).unwrap();

    let depth = 20_000;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(nested.parse_text(&input).unwrap(), Match::literal("x"));
}

#[test]
fn test_decorated_target_observed_through_alias() {
    let alias = Grammar::placeholder();
    let user = sequence([alias.clone()]);
    alias
        .rebind(&literal("n").on_match(|_| Ok(Match::literal("node"))))
        .unwrap();
    assert_eq!(
        user.parse_text("n").unwrap(),
        Match::Sequence(vec![Match::literal("node")])
    );
}

// === Entry points ===

#[test]
fn test_parse_text_leaves_trailing_input() {
    assert_eq!(literal("a").parse_text("abc").unwrap(), Match::literal("a"));
}

#[test]
fn test_parse_reader_source() {
    let g = sequence([
        literal("key"),
        discard(literal("=")),
        tag("v", literal("1")),
    ]);
    let reader = std::io::Cursor::new(b"key=1".to_vec());
    let mut source = weft_source::ReaderSource::new(reader).unwrap();
    let m = g.parse(&mut source).unwrap();
    assert_eq!(m.find_tag("v"), Some(&Match::literal("1")));
    assert_eq!(source.save().offset(), 5);
}

#[test]
fn test_debug_shows_state() {
    let g = Grammar::placeholder();
    assert_eq!(format!("{g:?}"), r#"Grammar { state: "unbound", actions: 0 }"#);
    g.rebind(&literal("a")).unwrap();
    assert_eq!(format!("{g:?}"), r#"Grammar { state: "alias", actions: 0 }"#);
    assert_eq!(
        format!("{:?}", literal("a").on_match(Ok)),
        r#"Grammar { state: "operation", actions: 1 }"#
    );
}

#[test]
fn test_grammar_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();
}
