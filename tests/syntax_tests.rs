//! Notation conformance tests: sugar, indentation, quoting, block strings
//! and the exact output of every renderer.

use termpose::{
    parse_document, parse_term, term, Error, LineEnding, PrettyOptions, Term,
};

fn canonical(text: &str) -> String {
    parse_term(text).unwrap().to_canonical_string()
}

// Sugar

#[test]
fn test_colon_pairs_with_next_term() {
    assert_eq!(parse_term("a:b").unwrap(), parse_term("a(b)").unwrap());
    assert_eq!(canonical("a:b:c"), "(a (b c))");
    assert_eq!(canonical("a:b c"), "((a b) c)");
    assert_eq!(canonical("(a b):c"), "((a b) c)");
    assert_eq!(canonical("a:(b c)"), "(a (b c))");
}

#[test]
fn test_colon_with_space_takes_rest_of_line() {
    assert_eq!(canonical("foo: bar baz"), "(foo bar baz)");
    assert_eq!(canonical("(x foo: bar baz) y"), "((x (foo bar baz)) y)");
    assert_eq!(canonical("a:\n  b\n  c"), "(a b c)");
}

#[test]
fn test_bare_colon_is_empty_sequence() {
    assert_eq!(parse_term(":").unwrap(), Term::seq(vec![]));
    assert_eq!(canonical("a :"), "(a ())");
}

#[test]
fn test_paren_after_head() {
    assert_eq!(canonical("a()"), "(a)");
    assert_eq!(canonical("a(b)(c)"), "((a b) c)");
    assert_eq!(canonical("a(b c(d))"), "(a b (c d))");
    assert_eq!(canonical("a\"b c\""), "(a \"b c\")");
}

#[test]
fn test_separators() {
    assert_eq!(canonical("a\tb  c"), "(a b c)");
    assert_eq!(canonical("  (a   b)  "), "(a b)");
}

#[test]
fn test_blank_lines_between_items() {
    let doc = parse_document("a\n\n   \nb\n").unwrap();
    assert_eq!(doc.items, vec![Term::from("a"), Term::from("b")]);
}

// Indentation

#[test]
fn test_nested_indentation() {
    assert_eq!(canonical("a\n  b\n    c\n  d"), "(a (b c) d)");
    assert_eq!(canonical("a\n\tb\n\tc"), "(a b c)");
    assert_eq!(canonical("a b\n  c"), "(a b c)");
}

#[test]
fn test_dedent_to_top_level() {
    let doc = parse_document("a\n  b\n    c\nd").unwrap();
    assert_eq!(doc.items.len(), 2);
    assert_eq!(doc.items[0].to_string(), "(a (b c))");
    assert_eq!(doc.items[1].to_string(), "d");
}

#[test]
fn test_indented_first_line_sets_top_level() {
    let expected = vec![Term::from("a"), term!(b c)];
    assert_eq!(parse_document("  a\n  b c").unwrap().items, expected);
    assert_eq!(parse_document("\ta\n\tb c").unwrap().items, expected);

    let doc = parse_document("  a\n    b\n  c").unwrap();
    assert_eq!(doc.items, vec![term!(a b), Term::from("c")]);

    let doc = parse_document("  a\nb").unwrap();
    assert_eq!(doc.items, vec![Term::from("a"), Term::from("b")]);
}

#[test]
fn test_mixed_indentation_is_rejected() {
    let err = parse_document("a\n\tb\n  c").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 3, .. }));

    let err = parse_document("a\n  b\n\t\t\tc").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 3, .. }));
    assert_eq!(err.message(), "inconsistent indentation");
}

#[test]
fn test_equal_length_different_indent_is_rejected() {
    let err = parse_document("a\n \tb\n\t c").unwrap_err();
    assert!(matches!(err, Error::Indentation { line: 3, .. }));
}

#[test]
fn test_dedent_between_levels_is_rejected() {
    let err = parse_document("a\n    b\n  c").unwrap_err();
    assert_eq!(
        err,
        Error::indentation(3, 3, "siblings have inconsistent indentation")
    );
}

// Structural errors

#[test]
fn test_unbalanced_parens() {
    assert_eq!(
        parse_document(")").unwrap_err(),
        Error::structural(1, 1, "nothing to close")
    );
    assert_eq!(
        parse_document("a b)").unwrap_err(),
        Error::structural(1, 4, "unmatched closing paren")
    );
    let err = parse_document("a\n  )").unwrap_err();
    assert_eq!(err.position().map(|p| p.line), Some(2));
}

#[test]
fn test_terms_need_separators() {
    let err = parse_document("(a)b").unwrap_err();
    assert!(matches!(err, Error::Structural { line: 1, column: 4, .. }));
    assert_eq!(err.message(), "separator required between terms");
}

// Quoting

#[test]
fn test_escapes() {
    let term = parse_term(r#""a\\b\"c\n\t\h\q""#).unwrap();
    assert_eq!(term.as_str(), Some("a\\b\"c\n\t☃q"));

    let term = parse_term(r#""cr\r""#).unwrap();
    assert_eq!(term.as_str(), Some("cr\r"));
}

#[test]
fn test_unterminated_quotes() {
    assert_eq!(parse_term("\"abc").unwrap().as_str(), Some("abc"));

    let doc = parse_document("\"abc\nd").unwrap();
    assert_eq!(doc.items, vec![Term::from("abc"), Term::from("d")]);

    let err = parse_document("\"abc\\").unwrap_err();
    assert!(matches!(err, Error::StringLiteral { .. }));
}

#[test]
fn test_quoted_atom_characters_survive() {
    for value in ["a b", "(", ")", "k:v", "tab\there", "", "\"", "\\"] {
        let written = Term::from(value).to_canonical_string();
        if termpose::render::needs_quotes(value) {
            assert!(written.starts_with('"'), "{value:?} should be quoted");
            assert_eq!(parse_term(&written).unwrap().as_str(), Some(value));
        } else {
            assert_eq!(written, value);
        }
    }
}

// Block strings

#[test]
fn test_block_string() {
    let term = parse_term("poem \"\n  roses are red\n  violets are blue").unwrap();
    assert_eq!(
        term.tail()[0].as_str(),
        Some("roses are red\nviolets are blue")
    );
}

#[test]
fn test_block_string_keeps_extra_indentation() {
    let term = parse_term("code \"\n  if x\n    y").unwrap();
    assert_eq!(term.tail()[0].as_str(), Some("if x\n  y"));
}

#[test]
fn test_block_string_drops_blank_lines() {
    let term = parse_term("t \"\n  one\n\n  two").unwrap();
    assert_eq!(term.tail()[0].as_str(), Some("one\ntwo"));
}

#[test]
fn test_block_string_ends_at_dedent() {
    assert_eq!(canonical("a\n  t \"\n    x\n  b"), "(a (t x) b)");
}

#[test]
fn test_empty_block_string() {
    let doc = parse_document("a \"\nb").unwrap();
    assert_eq!(doc.items.len(), 2);
    assert_eq!(doc.items[0].tail()[0].as_str(), Some(""));
    assert_eq!(doc.items[1], Term::from("b"));
}

#[test]
fn test_block_string_indentation_must_match() {
    let err = parse_document("t \"\n  one\n\t\ttwo").unwrap_err();
    assert!(matches!(err, Error::StringLiteral { line: 3, .. }));
}

#[test]
fn test_crlf_block_string() {
    let term = parse_term("t \"\r\n  one\r\n  two\r\n").unwrap();
    assert_eq!(term.tail()[0].as_str(), Some("one\ntwo"));
}

// Rendering

#[test]
fn test_canonical_output() {
    let t = term!(a (b "c d") ());
    assert_eq!(t.to_canonical_string(), "(a (b \"c d\") ())");
    assert_eq!(Term::from("line\nbreak").to_string(), "\"line\\nbreak\"");
    assert_eq!(Term::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
}

#[test]
fn test_compact_output() {
    assert_eq!(term!(a b c).to_compact_string(), "a(b c)");
    assert_eq!(term!(a b).to_compact_string(), "a:b");
    assert_eq!(term!(a (b c)).to_compact_string(), "a:b:c");
    assert_eq!(term!((a)).to_compact_string(), "a()");
    assert_eq!(term!(()).to_compact_string(), ":");
    assert_eq!(term!((a b c) d e).to_compact_string(), "(a(b c) d e)");
    assert_eq!(term!(x "y z").to_compact_string(), "x:\"y z\"");
}

#[test]
fn test_pretty_output_breaks_wide_sequences() {
    let t = term!(aaaa bbbb cccc);
    let narrow = PrettyOptions::new().with_max_width(10);
    assert_eq!(t.to_pretty_string(&narrow), "aaaa\n  aaaa\n  bbbb\n  cccc\n");

    let tabs = narrow.with_tabs().with_line_ending(LineEnding::CrLf);
    assert_eq!(
        t.to_pretty_string(&tabs),
        "aaaa\r\n\taaaa\r\n\tbbbb\r\n\tcccc\r\n"
    );

    assert_eq!(
        t.to_pretty_string(&PrettyOptions::default()),
        "aaaa bbbb cccc\n"
    );
}

#[test]
fn test_pretty_output_nests() {
    let t = term!(config (name demo) (ports 80 443 8080));
    let options = PrettyOptions::new().with_max_width(30).with_indent(4);
    assert_eq!(
        t.to_pretty_string(&options),
        "config\n    config\n    name demo\n    ports 80 443 8080\n"
    );
}

#[test]
fn test_json_output() {
    assert_eq!(term!(a (b c) ()).to_json_string(), r#"["a",["b","c"],[]]"#);
    assert_eq!(
        Term::from("a\"b\\c\nd\re\tf").to_json_string(),
        "\"a\\\"b\\\\c\\nd\\re\tf\""
    );
}
