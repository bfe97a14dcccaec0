use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use termpose::{
    from_str, parse_document, parse_term, to_string, to_term, Error, Position, PrettyOptions,
    Term,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Shape {
    Empty,
    Circle(f64),
    Rect(u32, u32),
    Labeled { text: String },
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Profile {
    nickname: Option<String>,
    motto: Option<String>,
    shape: Shape,
}

#[test]
fn test_scenario_line_is_sequence() {
    let term = parse_term("foo bar baz").unwrap();
    assert_eq!(term.to_string(), "(foo bar baz)");
    assert_eq!(term.len(), 3);
}

#[test]
fn test_scenario_colon_takes_rest_of_line() {
    assert_eq!(
        parse_term("foo: bar baz").unwrap(),
        parse_term("foo bar baz").unwrap()
    );
}

#[test]
fn test_scenario_indented_children() {
    assert_eq!(parse_term("a\n  b\n  c").unwrap().to_string(), "(a b c)");
}

#[test]
fn test_scenario_paren_after_head() {
    assert_eq!(parse_term("x(y z)").unwrap().to_string(), "(x y z)");
}

#[test]
fn test_scenario_quoted_atom() {
    let term = parse_term("\"hello world\"").unwrap();
    assert_eq!(term.as_str(), Some("hello world"));
    assert_eq!(term.to_canonical_string(), "\"hello world\"");
    assert_eq!(term.to_json_string(), "\"hello world\"");
}

#[test]
fn test_scenario_unbalanced_close() {
    let err = parse_document(")").unwrap_err();
    assert!(matches!(err, Error::Structural { .. }));
    assert_eq!(err.position(), Some(Position::new(1, 1)));
    assert_eq!(err.message(), "nothing to close");
    assert_eq!(
        err.to_string(),
        "Structural error at line 1, column 1: nothing to close"
    );
}

#[test]
fn test_document_walkthrough() {
    let text = "\
server
  host example.org
  ports 80 443
  motd \"
    welcome
    be nice
  limits
    connections 100
";
    let doc = parse_document(text).unwrap();
    assert_eq!(doc.len(), 1);
    let server = &doc.items[0];
    assert_eq!(server.initial_str(), "server");
    assert_eq!(
        server.find("host").unwrap().tail()[0].as_str(),
        Some("example.org")
    );
    assert_eq!(server.find("ports").unwrap().tail().len(), 2);
    assert_eq!(
        server.find("motd").unwrap().tail()[0].as_str(),
        Some("welcome\nbe nice")
    );
    let limits = server.find("limits").unwrap();
    assert_eq!(limits.to_string(), "(limits (connections 100))");
    assert_eq!(limits.position(), Position::new(7, 3));
}

#[test]
fn test_renderings_agree_on_tree() {
    let term = parse_term("let\n  x 1\n  y \"two words\"").unwrap();
    assert_eq!(term.to_canonical_string(), "(let (x 1) (y \"two words\"))");
    assert_eq!(term.to_compact_string(), "let(x:1 y:\"two words\")");
    assert_eq!(
        term.to_pretty_string(&PrettyOptions::default()),
        "let x:1 y:\"two words\"\n"
    );
    assert_eq!(
        term.to_json_string(),
        r#"["let",["x","1"],["y","two words"]]"#
    );
    for text in [term.to_canonical_string(), term.to_compact_string()] {
        assert_eq!(parse_term(&text).unwrap(), term);
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        "id 123\nname Alice\nactive true\ntags (admin developer)\n"
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice Smith".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 25.0,
                quantity: 1,
            },
        ],
        total: 84.98,
    };

    let text = to_string(&order).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_hand_written_nested_struct() {
    let text = "\
order_id 7
customer
  id 1
  name \"Bob Stone\"
  active yes
  tags friend family
items
  (sku A-1) (price 1.5) (quantity 3)
  (sku B-2) (price 1) (quantity 1)
total 5.5
";
    let order: Order = from_str(text).unwrap();
    assert_eq!(order.customer.name, "Bob Stone");
    assert_eq!(order.customer.tags, vec!["friend", "family"]);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 3);
    assert_eq!(order.items[1].sku, "B-2");
    assert_eq!(order.total, 5.5);
}

#[test]
fn test_options_and_enums() {
    let profiles = vec![
        Profile {
            nickname: None,
            motto: Some("carpe diem".to_string()),
            shape: Shape::Empty,
        },
        Profile {
            nickname: Some("ace".to_string()),
            motto: None,
            shape: Shape::Circle(2.5),
        },
        Profile {
            nickname: Some(String::new()),
            motto: None,
            shape: Shape::Rect(3, 4),
        },
        Profile {
            nickname: None,
            motto: None,
            shape: Shape::Labeled {
                text: "say \"hi\"".to_string(),
            },
        },
    ];

    let text = to_string(&profiles).unwrap();
    let back: Vec<Profile> = from_str(&text).unwrap();
    assert_eq!(profiles, back);
}

#[test]
fn test_enum_term_layout() {
    assert_eq!(to_term(&Shape::Empty).unwrap(), Term::from("Empty"));
    assert_eq!(
        to_term(&Shape::Rect(3, 4)).unwrap().to_string(),
        "(Rect 3 4)"
    );
    assert_eq!(
        to_term(&Shape::Labeled { text: "x".into() }).unwrap().to_string(),
        "(Labeled (text x))"
    );
}

#[test]
fn test_hashmap_round_trip() {
    let mut map = HashMap::new();
    map.insert("alpha".to_string(), 1i64);
    map.insert("beta gamma".to_string(), -2);
    map.insert("".to_string(), 3);

    let text = to_string(&map).unwrap();
    let back: HashMap<String, i64> = from_str(&text).unwrap();
    assert_eq!(map, back);
}

#[test]
fn test_vectors_and_tuples() {
    let grid = vec![vec![1, 2], vec![3], vec![]];
    let text = to_string(&grid).unwrap();
    let back: Vec<Vec<i32>> = from_str(&text).unwrap();
    assert_eq!(grid, back);

    let pair = ("left".to_string(), 9u8);
    let back: (String, u8) = from_str(&to_string(&pair).unwrap()).unwrap();
    assert_eq!(pair, back);
}

#[test]
fn test_awkward_strings() {
    let values = vec![
        String::new(),
        "say \"hi\"".to_string(),
        "a\"b".to_string(),
        "back\\slash".to_string(),
        "line\nbreak".to_string(),
        "(paren)".to_string(),
        "key:value".to_string(),
        "☃".to_string(),
    ];
    let text = to_string(&values).unwrap();
    let back: Vec<String> = from_str(&text).unwrap();
    assert_eq!(values, back);
}

#[test]
fn test_decode_errors() {
    let err = from_str::<User>("id abc\nname x\nactive true\ntags").unwrap_err();
    assert!(matches!(err, Error::Decode { line: 1, column: 4, .. }));
    assert!(err.message().contains("abc"));

    let err = from_str::<User>("id 1\nname x\nactive maybe\ntags").unwrap_err();
    assert_eq!(err.line(), Some(3));

    let err = from_str::<User>("id 1\n  )").unwrap_err();
    assert!(matches!(err, Error::Structural { .. }));
}

#[test]
fn test_term_serde_json_interop() {
    let term = parse_term("point (x 1) (y \"two words\")").unwrap();
    let json = serde_json::to_string(&term).unwrap();
    assert_eq!(json, term.to_json_string());

    let back: Term = serde_json::from_str(&json).unwrap();
    assert_eq!(back, term);
}
