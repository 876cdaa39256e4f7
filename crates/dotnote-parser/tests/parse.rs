use dotnote_core::ast::{Separator, Sign, Term};
use dotnote_parser::{
    ParserConfig,
    error::{ErrorCode, Phase},
    parse,
};

#[test]
fn test_single_cluster() {
    let tree = parse("3•", ParserConfig::default()).expect("Failed to parse");

    assert_eq!(tree.body().len(), 1);
    assert_eq!(tree.dot_count(), 3);

    match tree.terms().next().map(|term| term.inner()) {
        Some(Term::Cluster(cluster)) => {
            assert_eq!(cluster.count(), 3);
            assert_eq!(cluster.symbol().glyph(), '•');
            assert_eq!(cluster.sign(), Sign::Plus);
        }
        other => panic!("Expected a cluster, got {other:?}"),
    }
}

#[test]
fn test_negative_cluster() {
    let tree = parse("-2•", ParserConfig::default()).expect("Failed to parse");

    match tree.terms().next().map(|term| term.inner()) {
        Some(Term::Cluster(cluster)) => {
            assert_eq!(cluster.count(), -2);
            assert_eq!(cluster.magnitude(), 2);
            assert_eq!(cluster.sign(), Sign::Minus);
        }
        other => panic!("Expected a cluster, got {other:?}"),
    }
}

#[test]
fn test_group_sequence() {
    let source = "(3• 2★)+-(1○)";
    let tree = parse(source, ParserConfig::default()).expect("Failed to parse");

    let entries = tree.body().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].separator(), Some(Separator::Plus));
    assert_eq!(entries[1].separator(), None);

    let first = entries[0].term().as_group().expect("Expected a group");
    assert_eq!(first.sign(), None);
    let inner = first.group().body().entries();
    assert_eq!(inner.len(), 2);
    assert_eq!(inner[0].separator(), Some(Separator::Space));

    let second = entries[1].term().as_group().expect("Expected a group");
    assert_eq!(second.sign(), Some(Sign::Minus));
    assert!(second.is_negated());
    assert_eq!(tree.dot_count(), 6);
}

#[test]
fn test_empty_group() {
    let tree = parse("()", ParserConfig::default()).expect("Failed to parse");

    let group = tree.groups().next().expect("Expected a group");
    assert!(group.group().is_empty());
    assert_eq!(tree.dot_count(), 0);
}

#[test]
fn test_canonical_printing() {
    let cases = [
        ("  ( 1•   2★ ) ", "(1• 2★)"),
        ("(1•) (2★)", "(1•)(2★)"),
        ("(1•  +  2★)", "(1•+2★)"),
        ("1•\t-2★", "1• -2★"),
        ("--3( )", "--3()"),
    ];

    for (source, canonical) in cases {
        let tree = parse(source, ParserConfig::default()).expect("Failed to parse");
        assert_eq!(tree.to_string(), canonical, "canonical form of `{source}`");

        let reparsed = parse(canonical, ParserConfig::default()).expect("Failed to reparse");
        assert_eq!(reparsed, tree);
    }
}

#[test]
fn test_unbalanced_parentheses() {
    let err = parse("(1•", ParserConfig::default()).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E101));
    assert_eq!(err.offset(), Some(0));
    assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn test_leading_zero() {
    let err = parse("01•", ParserConfig::default()).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E002));
    assert_eq!(err.offset(), Some(0));
    assert_eq!(err.code().map(ErrorCode::phase), Some(Phase::Lex));
}

#[test]
fn test_lexical_errors_are_collected() {
    let err = parse("1• 012★ 3e\u{0301}", ParserConfig::default()).unwrap_err();

    let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, vec![ErrorCode::E002, ErrorCode::E001]);
}

#[test]
fn test_combining_marks_are_lexical_errors() {
    // Arabic fathatan and Thai mai ek after a count.
    for source in ["3\u{064B}", "(1• 2\u{0E48})"] {
        let err = parse(source, ParserConfig::default()).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E001), "source {source:?}");
        assert_eq!(err.code().map(ErrorCode::phase), Some(Phase::Lex));
    }

    let err = parse("\u{FEFF}3•", ParserConfig::default()).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::E001));
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn test_integer_out_of_range() {
    let err = parse("9223372036854775808•", ParserConfig::default()).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::E003));

    let tree = parse("-9223372036854775807•", ParserConfig::default()).expect("Failed to parse");
    assert_eq!(tree.body().clusters().next().map(|c| c.count()), Some(-i64::MAX));
}

#[test]
fn test_syntax_errors() {
    let cases = [
        ("3", ErrorCode::E100),
        ("+3•", ErrorCode::E100),
        ("(1•+)", ErrorCode::E100),
        ("1•2★", ErrorCode::E102),
        ("★", ErrorCode::E103),
        (")", ErrorCode::E101),
    ];

    for (source, code) in cases {
        let err = parse(source, ParserConfig::default()).unwrap_err();
        assert_eq!(err.code(), Some(code), "code for `{source}`");
        assert_eq!(err.code().map(ErrorCode::phase), Some(Phase::Syntax));
    }
}

#[test]
fn test_max_depth_configuration() {
    let source = "(((1•)))";

    assert!(parse(source, ParserConfig::new(3)).is_ok());

    let err = parse(source, ParserConfig::new(2)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::E104));
    assert_eq!(err.offset(), Some(2));
}
