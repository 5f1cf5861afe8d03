use carrot_diagnostics::{DiagnosticLevel, Position};
use carrot_driver::{check, check_file, CompileError};
use carrot_sema::{Category, Type};

#[test]
fn test_clean_program() {
    let source = r#"
        struct Point {
            int x;
            int y;
        };

        Point origin;
        bool verbose;

        int add(int a, int b) {
            return a + b;
        }

        void main() {
            int n;
            cin >> n;
            origin.x = add(n, 1);
            if (verbose) {
                cout << "x = ";
                cout << origin.x;
            }
            while (n > 0) {
                n--;
            }
        }
    "#;

    let output = check(source).unwrap();
    assert!(
        !output.has_errors(),
        "unexpected diagnostics: {:?}",
        output.diagnostics.messages()
    );
    assert_eq!(output.analysis.scopes.depth(), 1);

    let add = output.analysis.scopes.lookup_global("add").unwrap().unwrap();
    assert_eq!(add.category(), Category::Function);
    assert_eq!(add.to_string(), "int,int->int");
}

#[test]
fn test_sibling_duplicates_report_once() {
    let output = check("void f() {\n    int x;\n    int x;\n}\n").unwrap();

    assert_eq!(output.diagnostics.messages(), vec!["multiply declared identifier"]);
    let diagnostic = &output.diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.level, DiagnosticLevel::Fatal);
    assert_eq!(diagnostic.position, Some(Position::new(3, 9)));
}

#[test]
fn test_struct_field_resolves() {
    let output = check("struct Pt { int x; int y; };\nPt p;\nvoid f() { p.x = 3; }\n").unwrap();
    assert!(output.diagnostics.is_empty());

    // p.x 中 x 在第 3 行第 14 列
    let field = output
        .analysis
        .resolutions
        .get(Position::new(3, 14))
        .unwrap();
    assert_eq!(field.ty(), Type::Int);
}

#[test]
fn test_undeclared_identifier() {
    let output = check("void f() {\n    y = 1;\n}\n").unwrap();

    assert_eq!(output.diagnostics.messages(), vec!["undeclared identifier"]);
    assert_eq!(
        output.diagnostics.diagnostics()[0].position,
        Some(Position::new(2, 5))
    );
    assert!(output
        .analysis
        .resolutions
        .get(Position::new(2, 5))
        .unwrap()
        .is_undefined());
}

#[test]
fn test_lexical_diagnostics_precede_semantic_ones() {
    let output = check("int big;\nvoid f() { big = 4294967296; q = 1; }\n").unwrap();

    assert_eq!(
        output.diagnostics.messages(),
        vec![
            "integer literal too large; using max value",
            "undeclared identifier",
        ]
    );
    assert_eq!(output.diagnostics.warning_count(), 1);
    assert_eq!(output.diagnostics.error_count(), 1);
}

#[test]
fn test_illegal_character_is_reported_but_analysis_continues() {
    let output = check("int x; @\nvoid f() { x = 1; }\n").unwrap();
    assert_eq!(
        output.diagnostics.messages(),
        vec!["illegal character ignored: @"]
    );
    assert!(output.has_errors());
}

#[test]
fn test_syntax_error_stops_pipeline() {
    let err = check("int x;\nvoid f( {\n").unwrap_err();
    match err {
        CompileError::Syntax(diagnostics) => {
            assert!(!diagnostics.is_empty());
            assert!(diagnostics.iter().all(|d| d.message == "syntax error"));
            assert!(diagnostics[0].position.is_some());
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let err = check_file("definitely/not/here.carrot").unwrap_err();
    assert!(matches!(err, CompileError::Io(_)));
}
