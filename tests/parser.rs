use confex::{
    ast::{Ast, Fields, Node},
    compiler::{
        lexer::{TokenKind, tokenize},
        parser::{expression::split_expression, parse},
    },
    error::ParseError,
};

fn parse_source(src: &str) -> Result<Ast, ParseError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse(&tokens)
}

fn assert_parses(src: &str) -> Ast {
    parse_source(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

#[test]
fn const_declaration() {
    let ast = assert_parses("MAX_THREADS := 10; struct {}");

    assert_eq!(ast.consts.len(), 1);
    assert_eq!(ast.consts[0].name, "MAX_THREADS");
    assert_eq!(ast.consts[0].value, Node::Number(10.0));
    assert!(ast.root.is_empty());
}

#[test]
fn declarations_keep_source_order() {
    let ast = assert_parses("C := 1; A := \"a\"; B := C; struct {}");
    let names: Vec<_> = ast.consts.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, ["C", "A", "B"]);
    assert_eq!(ast.consts[1].value, Node::from("a"));
    assert_eq!(ast.consts[2].value, Node::Identifier("C".to_string()));
}

#[test]
fn nested_struct() {
    let ast = assert_parses(
                            r"
        struct {
            Server = struct {
                Port = 8080;
                SSL = struct {
                    Enabled = 1;
                };
            };
        }
    ",
    );

    let Node::Struct(server) = &ast.root["Server"] else {
        panic!("Server is not a struct");
    };
    let Node::Struct(ssl) = &server["SSL"] else {
        panic!("SSL is not a struct");
    };

    assert_eq!(server["Port"], Node::Number(8080.0));
    assert_eq!(ssl["Enabled"], Node::Number(1.0));
}

#[test]
fn const_expression_in_struct() {
    let ast = assert_parses("PI := 3.14; struct { Area = .[ PI 5 * 5 * ]. }");

    assert_eq!(ast.root["Area"],
               Node::ConstExpression(["PI", "5", "*", "5", "*"].map(String::from).to_vec()));
}

#[test]
fn struct_can_be_a_constant_value_syntactically() {
    let ast = assert_parses("S := struct { A = 1 }; struct {}");

    let mut fields = Fields::new();
    fields.insert("A".to_string(), Node::Number(1.0));
    assert_eq!(ast.consts[0].value, Node::Struct(fields));
}

#[test]
fn separators_are_optional() {
    let a = assert_parses("struct { A = 1, B = 2; C = 3 D = 4, }");
    let names: Vec<_> = a.root.keys().map(String::as_str).collect();

    assert_eq!(names, ["A", "B", "C", "D"]);
}

#[test]
fn strings_are_unescaped() {
    let ast = assert_parses(r#"struct { Message = "Hello \"World\"", Path = "C:\\dir\n" }"#);

    assert_eq!(ast.root["Message"], Node::from(r#"Hello "World""#));
    assert_eq!(ast.root["Path"], Node::from(r"C:\dir\n"));
}

#[test]
fn duplicate_fields_last_value_wins() {
    let ast = assert_parses("struct { A = 1, B = 2, A = \"x\" }");
    let names: Vec<_> = ast.root.keys().map(String::as_str).collect();

    assert_eq!(names, ["A", "B"]);
    assert_eq!(ast.root["A"], Node::from("x"));
}

#[test]
fn identifier_without_colon_equals_is_not_a_declaration() {
    assert_eq!(parse_source("A = 1; struct {}"),
               Err(ParseError::MissingRootStruct { found: Some((TokenKind::Identifier, 0)) }));
}

#[test]
fn missing_root_struct() {
    let err = parse_source("MAX := 10;").unwrap_err();

    assert_eq!(err, ParseError::MissingRootStruct { found: None });
    assert!(err.to_string().contains("root struct"));
}

#[test]
fn trailing_content() {
    assert_eq!(parse_source("struct {} struct {}"),
               Err(ParseError::TrailingContent { kind:     TokenKind::StructKeyword,
                                                 text:     "struct".to_string(),
                                                 position: 10, }));
}

#[test]
fn unclosed_struct() {
    assert!(matches!(parse_source("struct { A = 1,"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn missing_semicolon_after_declaration() {
    assert!(matches!(parse_source("A := 1 struct {}"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::StructKeyword,
                                                       position: 7,
                                                       .. })));
}

#[test]
fn invalid_value_token() {
    assert!(matches!(parse_source("struct { A = ; }"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::Semicolon,
                                                       .. })));
    assert!(matches!(parse_source("struct { A = }"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::RBrace,
                                                       .. })));
}

#[test]
fn field_name_must_be_identifier() {
    assert!(matches!(parse_source("struct { 5 = 1 }"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::Number,
                                                       .. })));
}

#[test]
fn parsing_is_deterministic() {
    let src = "A := 2; B := .[ A 3 * ].; struct { X = B, Y = struct { Z = \"z\" } }";

    assert_eq!(assert_parses(src), assert_parses(src));
}

#[test]
fn splitting_expression_bodies() {
    assert_eq!(split_expression("A 3 *"), ["A", "3", "*"]);
    assert_eq!(split_expression("A+B"), ["A", "+", "B"]);
    assert_eq!(split_expression("(1 2) mod"), ["(", "1", "2", ")", "mod"]);
    assert_eq!(split_expression("10\t2\n/"), ["10", "2", "/"]);
    assert!(split_expression("   ").is_empty());
}
