//! `Match` trees survive a JSON round trip (`serde` feature).

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use weft::{literal, sequence, tag, Match};

#[test]
fn test_match_tree_roundtrip() {
    let tree = Match::Sequence(vec![
        Match::tagged("x", Match::literal("a")),
        Match::Sequence(vec![
            Match::tagged("y", Match::tagged("x", Match::literal("b"))),
            Match::literal("c"),
        ]),
        Match::empty(),
    ]);
    let json = serde_json::to_string(&tree).unwrap();
    let back: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_parsed_tree_roundtrip() {
    let g = sequence([tag("key", literal("k")), literal("="), tag("value", literal("v"))]);
    let parsed = g.parse_text("k=v").unwrap();
    let back: Match = serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
    assert_eq!(back.find_tag("value"), Some(&Match::literal("v")));
    assert_eq!(back, parsed);
}
