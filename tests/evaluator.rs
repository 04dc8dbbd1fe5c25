use confex::{
    ast::{Ast, ConstDeclaration, Fields, Node},
    compiler::{
        evaluator::{Context, evaluate},
        value::{Constant, Document, Value},
    },
    error::EvalError,
};

fn expr(tokens: &[&str]) -> Node {
    Node::ConstExpression(tokens.iter().map(ToString::to_string).collect())
}

fn fields<const N: usize>(entries: [(&str, Node); N]) -> Fields {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn consts<const N: usize>(entries: [(&str, Node); N]) -> Vec<ConstDeclaration> {
    entries.into_iter()
           .map(|(name, value)| ConstDeclaration { name: name.to_string(),
                                                   value })
           .collect()
}

fn eval_value(tokens: &[&str]) -> Result<f64, EvalError> {
    Context::new().eval_expression(&tokens.iter().map(ToString::to_string).collect::<Vec<_>>())
}

fn eval_root(consts: Vec<ConstDeclaration>, root: Fields) -> Result<Document, EvalError> {
    evaluate(&Ast { consts, root })
}

#[test]
fn basic_evaluation() {
    let document = eval_root(Vec::new(),
                             fields([("Count", Node::Number(42.0)),
                                     ("Ratio", Node::Number(2.5)),
                                     ("Active", Node::from("true"))])).unwrap();

    assert_eq!(document["Count"], Value::Number(42.0));
    assert_eq!(document["Ratio"], Value::Number(2.5));
    assert_eq!(document["Active"], Value::from("true"));
}

#[test]
fn constants_and_expressions() {
    let document = eval_root(consts([("TWO", Node::Number(2.0)), ("HALF", Node::Number(0.5))]),
                             fields([("Double", expr(&["TWO", "TWO", "*"])),
                                     ("Sqrt", expr(&["TWO", "sqrt"])),
                                     ("Fraction", expr(&["HALF", "2", "*"]))])).unwrap();

    assert_eq!(document["Double"], Value::Number(4.0));
    assert!((document["Sqrt"].as_number().unwrap() - 1.414_213_56).abs() < 1e-8);
    assert_eq!(document["Fraction"], Value::Number(1.0));
}

#[test]
fn constants_resolve_in_declaration_order() {
    let document = eval_root(consts([("A", Node::Number(2.0)), ("B", expr(&["A", "3", "*"]))]),
                             fields([("B", Node::Identifier("B".to_string()))])).unwrap();

    assert_eq!(document["B"], Value::Number(6.0));
}

#[test]
fn forward_reference_is_undefined() {
    let err = eval_root(consts([("B", expr(&["A", "3", "*"])), ("A", Node::Number(2.0))]),
                        Fields::new()).unwrap_err();

    assert_eq!(err, EvalError::UndefinedConstant { name: "A".to_string() });
}

#[test]
fn self_reference_is_undefined() {
    let err = eval_root(consts([("A", expr(&["A", "1", "+"]))]), Fields::new()).unwrap_err();

    assert_eq!(err, EvalError::UndefinedConstant { name: "A".to_string() });
}

#[test]
fn undefined_identifier_in_field() {
    let err = eval_root(Vec::new(), fields([("X", Node::Identifier("NOPE".to_string()))])).unwrap_err();

    assert_eq!(err, EvalError::UndefinedConstant { name: "NOPE".to_string() });
    assert!(err.to_string().contains("NOPE"));
}

#[test]
fn struct_constant_is_rejected() {
    let err = eval_root(consts([("S", Node::Struct(Fields::new()))]), Fields::new()).unwrap_err();

    assert_eq!(err, EvalError::NonScalarConstant { name: "S".to_string() });
}

#[test]
fn redeclared_constant_replaces_earlier_value() {
    let document = eval_root(consts([("A", Node::Number(1.0)),
                                     ("B", expr(&["A", "10", "*"])),
                                     ("A", Node::Number(5.0))]),
                             fields([("A", Node::Identifier("A".to_string())),
                                     ("B", Node::Identifier("B".to_string()))])).unwrap();

    assert_eq!(document["A"], Value::Number(5.0));
    assert_eq!(document["B"], Value::Number(10.0));
}

#[test]
fn string_constant_in_expression() {
    let err = eval_root(consts([("NAME", Node::from("mage"))]),
                        fields([("X", expr(&["NAME", "1", "+"]))])).unwrap_err();

    assert_eq!(err, EvalError::NonNumericConstant { name: "NAME".to_string() });
}

#[test]
fn arithmetic_operators() {
    assert_eq!(eval_value(&["7", "2", "+"]), Ok(9.0));
    assert_eq!(eval_value(&["7", "2", "-"]), Ok(5.0));
    assert_eq!(eval_value(&["7", "2", "*"]), Ok(14.0));
    assert_eq!(eval_value(&["7", "2", "/"]), Ok(3.5));
    assert_eq!(eval_value(&["7", "2", "mod"]), Ok(1.0));
    assert_eq!(eval_value(&["4", "sqrt"]), Ok(2.0));
    assert_eq!(eval_value(&["2", "3", "4", "*", "+"]), Ok(14.0));
}

#[test]
fn mod_takes_sign_of_divisor() {
    assert_eq!(eval_value(&["0", "5", "-", "3", "mod"]), Ok(1.0));
    assert_eq!(eval_value(&["5", "0", "3", "-", "mod"]), Ok(-1.0));
    assert_eq!(eval_value(&["7.5", "2", "mod"]), Ok(1.5));
}

#[test]
fn numbers_stay_doubles() {
    assert_eq!(eval_value(&["10", "4", "/"]), Ok(2.5));
    assert_eq!(eval_value(&["1.5e2"]), Ok(150.0));
    assert_eq!(eval_value(&[".5", "2", "*"]), Ok(1.0));
}

#[test]
fn square_root_of_two() {
    let value = eval_value(&["2", "sqrt"]).unwrap();

    assert!((value - 1.414_213_56).abs() < 1e-8);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_value(&["10", "0", "/"]),
               Err(EvalError::DivisionByZero { operator: "/".to_string() }));
    assert_eq!(eval_value(&["10", "0", "mod"]),
               Err(EvalError::DivisionByZero { operator: "mod".to_string() }));
}

#[test]
fn negative_sqrt() {
    assert_eq!(eval_value(&["0", "9", "-", "sqrt"]),
               Err(EvalError::NegativeSqrt { operand: -9.0 }));
}

#[test]
fn stack_underflow() {
    assert_eq!(eval_value(&["+"]),
               Err(EvalError::StackUnderflow { operator:  "+".to_string(),
                                               required:  2,
                                               available: 0, }));
    assert_eq!(eval_value(&["1", "mod"]),
               Err(EvalError::StackUnderflow { operator:  "mod".to_string(),
                                               required:  2,
                                               available: 1, }));
    assert!(matches!(eval_value(&["sqrt"]), Err(EvalError::StackUnderflow { required: 1, .. })));
}

#[test]
fn malformed_expression() {
    assert_eq!(eval_value(&["1", "1"]), Err(EvalError::MalformedExpression { remaining: 2 }));
    assert_eq!(eval_value(&[]), Err(EvalError::MalformedExpression { remaining: 0 }));
}

#[test]
fn unknown_tokens() {
    for token in ["pow", "(", "inf", "nan", "1.5e", "x"] {
        assert_eq!(eval_value(&["1", token]),
                   Err(EvalError::UnknownExpressionToken { token: token.to_string() }),
                   "token {token}");
    }
}

#[test]
fn evaluation_does_not_change_the_tree() {
    let ast = Ast { consts: consts([("A", Node::Number(1.0))]),
                    root:   fields([("A", Node::Identifier("A".to_string()))]), };
    let before = ast.clone();

    let first = evaluate(&ast).unwrap();
    let second = evaluate(&ast).unwrap();

    assert_eq!(first, second);
    assert_eq!(ast, before);
}

#[test]
fn context_exposes_defined_constants() {
    let mut context = Context::new();
    context.define_constants(&consts([("A", Node::Number(1.0)), ("S", Node::from("s"))]))
           .unwrap();

    assert_eq!(context.constant("A"), Some(&Constant::Number(1.0)));
    assert_eq!(context.constant("S"), Some(&Constant::String("s".to_string())));
    assert_eq!(context.constant("B"), None);
}

#[test]
fn unknown_constant_name_in_expression_is_undefined() {
    assert_eq!(eval_value(&["1", "LATER", "+"]),
               Err(EvalError::UndefinedConstant { name: "LATER".to_string() }));
    assert_eq!(eval_value(&["_Hidden"]),
               Err(EvalError::UndefinedConstant { name: "_Hidden".to_string() }));
}
