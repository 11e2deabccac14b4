use protoclass_ast::{AstDocument, AstError, JsDocInfo, NodeArena, NodeIndex, SyntaxKind};
use protoclass_transforms::qualified_name::build;
use protoclass_transforms::{
    ClassConversionPass, ConversionDiagnosticKind, ConversionError, ConversionOptions,
    convert_script,
};

/// `function name() { return <value>; }`, or an empty body without a value.
fn function(arena: &mut NodeArena, name: Option<&str>, value: Option<&str>) -> NodeIndex {
    let name = match name {
        Some(name) => arena.add_identifier(name),
        None => arena.add_empty(),
    };
    let params = arena.add_parameter_list(vec![]);
    let statements = match value {
        Some(value) => {
            let literal = arena.add_numeric_literal(value);
            vec![arena.add_return(Some(literal))]
        }
        None => vec![],
    };
    let body = arena.add_block(statements);
    arena.add_function(name, params, body)
}

/// `/** @constructor */ function name() {}`
fn constructor(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let func = function(arena, Some(name), None);
    arena.attach_jsdoc(func, JsDocInfo::constructor());
    func
}

/// `target = <value>;`
fn assign(arena: &mut NodeArena, target: &str, value: NodeIndex) -> NodeIndex {
    let target = build(arena, target).expect("valid name");
    let assignment = arena.add_assignment(target, value);
    arena.add_expression_statement(assignment)
}

/// `target = function() { return <value>; };`
fn method(arena: &mut NodeArena, target: &str, value: &str) -> NodeIndex {
    let func = function(arena, None, Some(value));
    assign(arena, target, func)
}

fn run(arena: &mut NodeArena, root: NodeIndex) -> protoclass_transforms::ConversionResult {
    ClassConversionPass::default()
        .run(arena, root)
        .expect("conversion succeeds")
}

#[test]
fn test_constructor_and_prototype_method_become_class() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let script = arena.add_script("a.js", vec![ctor, foo]);

    let result = run(&mut arena, script);

    assert_eq!(
        arena.dump(script),
        "(Script a.js (Class (Identifier A) (Empty) (ClassMembers \
         (MemberFunction constructor (Function (Empty) (ParameterList) (Block))) \
         (MemberFunction foo (Function (Empty) (ParameterList) (Block (Return (NumericLiteral 1))))))))"
    );
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.stats.classes_promoted, 1);
    assert_eq!(result.stats.members_merged, 1);
    assert_eq!(result.stats.code_changes, 2);
    assert!(arena.validate().is_ok());
}

#[test]
fn test_static_method_is_merged_as_static() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let bar = method(&mut arena, "A.bar", "2");
    let script = arena.add_script("a.js", vec![ctor, bar]);

    run(&mut arena, script);

    let class = arena.first_child(script);
    assert_eq!(arena.children(script).len(), 1);
    assert_eq!(arena.member_names(class), vec!["constructor", "bar"]);
    let bar_member = arena.last_child(arena.class_members(class));
    assert!(arena.is_static_member(bar_member));
}

#[test]
fn test_members_keep_source_order() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let create = method(&mut arena, "A.create", "2");
    let bar = method(&mut arena, "A.prototype.bar", "3");
    let script = arena.add_script("a.js", vec![ctor, foo, create, bar]);

    let result = run(&mut arena, script);

    let class = arena.first_child(script);
    assert_eq!(
        arena.member_names(class),
        vec!["constructor", "foo", "create", "bar"]
    );
    assert_eq!(result.stats.members_merged, 3);
}

#[test]
fn test_unknown_class_is_reported_and_left_alone() {
    let mut arena = NodeArena::new();
    let stmt = method(&mut arena, "X.prototype.m", "1");
    let target = arena.first_child(arena.first_child(stmt));
    arena.set_span(target, 30, 45);
    let script = arena.add_script("x.js", vec![stmt]);
    let before = arena.dump(script);

    let result = run(&mut arena, script);

    assert_eq!(arena.dump(script), before);
    assert!(!result.changed());
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, ConversionDiagnosticKind::UnknownClass);
    assert_eq!(diagnostic.class_name, "X");
    assert_eq!(diagnostic.diagnostic.code, 9002);
    assert_eq!(diagnostic.diagnostic.file, "x.js");
    assert_eq!(diagnostic.diagnostic.start, 30);
    assert_eq!(diagnostic.diagnostic.length, 15);
    assert_eq!(diagnostic.diagnostic.message_text, "The class X could not be found.");
}

#[test]
fn test_deep_class_paths_resolve_and_report() {
    let path: Vec<String> = (0..=100).map(|i| format!("n{i}")).collect();
    let path = path.join(".");

    let mut arena = NodeArena::new();
    let stmt = method(&mut arena, &format!("{path}.prototype.m"), "1");
    let script = arena.add_script("deep.js", vec![stmt]);
    let result = run(&mut arena, script);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ConversionDiagnosticKind::UnknownClass);
    assert_eq!(result.diagnostics[0].class_name, path);

    let mut arena = NodeArena::new();
    let func = function(&mut arena, None, None);
    let ctor = assign(&mut arena, &path, func);
    arena.attach_jsdoc(ctor, JsDocInfo::constructor());
    let m = method(&mut arena, &format!("{path}.prototype.m"), "1");
    let script = arena.add_script("deep.js", vec![ctor, m]);
    let result = run(&mut arena, script);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.stats.members_merged, 1);
    let class = arena.second_child(arena.first_child(ctor));
    assert_eq!(arena.member_names(class), vec!["constructor", "m"]);
}

#[test]
fn test_unknown_static_target_is_silent() {
    let mut arena = NodeArena::new();
    let stmt = method(&mut arena, "Y.m", "1");
    let script = arena.add_script("y.js", vec![stmt]);
    let before = arena.dump(script);

    let result = run(&mut arena, script);

    assert_eq!(arena.dump(script), before);
    assert!(result.diagnostics.is_empty());
    assert!(!result.changed());
}

#[test]
fn test_redefinition_reports_once_and_first_wins() {
    let mut arena = NodeArena::new();
    let first = constructor(&mut arena, "A");
    let second = constructor(&mut arena, "A");
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let script = arena.add_script("a.js", vec![first, second, foo]);
    let second_before = arena.dump(second);

    let result = run(&mut arena, script);

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, ConversionDiagnosticKind::ClassRedefined);
    assert_eq!(diagnostic.node, second);
    assert_eq!(diagnostic.diagnostic.code, 9001);

    let children = arena.children(script).to_vec();
    assert_eq!(children.len(), 2);
    assert!(arena.is_kind(children[0], SyntaxKind::Class));
    assert_eq!(children[1], second);
    assert_eq!(arena.dump(second), second_before);
    assert_eq!(arena.member_names(children[0]), vec!["constructor", "foo"]);
}

#[test]
fn test_native_class_redefined_by_constructor() {
    let mut arena = NodeArena::new();
    let name = arena.add_identifier("A");
    let superclass = arena.add_empty();
    let members = arena.add_class_members(vec![]);
    let class = arena.add_class(name, superclass, members);
    let ctor = constructor(&mut arena, "A");
    let script = arena.add_script("a.js", vec![class, ctor]);

    let result = run(&mut arena, script);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ConversionDiagnosticKind::ClassRedefined);
    assert_eq!(arena.children(script), &[class, ctor]);
}

#[test]
fn test_extends_sets_superclass() {
    let mut arena = NodeArena::new();
    let ctor = function(&mut arena, Some("A"), None);
    arena.attach_jsdoc(ctor, JsDocInfo::constructor_extending("{Base}"));
    let script = arena.add_script("a.js", vec![ctor]);

    run(&mut arena, script);

    let class = arena.first_child(script);
    assert_eq!(arena.dump(arena.class_superclass(class)), "(Identifier Base)");
}

#[test]
fn test_extends_non_null_qualified_base() {
    let mut arena = NodeArena::new();
    let ctor = function(&mut arena, Some("A"), None);
    arena.attach_jsdoc(ctor, JsDocInfo::constructor_extending("{!a.b.Base}"));
    let script = arena.add_script("a.js", vec![ctor]);

    run(&mut arena, script);

    let class = arena.first_child(script);
    assert_eq!(
        arena.dump(arena.class_superclass(class)),
        "(PropertyAccess (PropertyAccess (Identifier a) (Identifier b)) (Identifier Base))"
    );
}

#[test]
fn test_variable_bound_constructor() {
    let mut arena = NodeArena::new();
    let func = function(&mut arena, None, None);
    let decl = arena.add_variable_declaration("A", Some(func));
    let var = arena.add_variable_statement(vec![decl]);
    arena.attach_jsdoc(var, JsDocInfo::constructor());
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let script = arena.add_script("a.js", vec![var, foo]);

    let result = run(&mut arena, script);

    assert_eq!(
        arena.dump(script),
        "(Script a.js (VariableStatement (VariableDeclaration (Identifier A) \
         (Class (Empty) (Empty) (ClassMembers \
         (MemberFunction constructor (Function (Empty) (ParameterList) (Block))) \
         (MemberFunction foo (Function (Empty) (ParameterList) (Block (Return (NumericLiteral 1))))))))))"
    );
    assert_eq!(result.stats.classes_registered, 1);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_namespaced_constructor_and_members() {
    let mut arena = NodeArena::new();
    let func = function(&mut arena, None, None);
    let ctor = assign(&mut arena, "ns.B", func);
    arena.attach_jsdoc(ctor, JsDocInfo::constructor());
    let m = method(&mut arena, "ns.B.prototype.m", "1");
    let create = method(&mut arena, "ns.B.create", "2");
    let script = arena.add_script("b.js", vec![ctor, m, create]);

    let result = run(&mut arena, script);

    assert!(result.diagnostics.is_empty());
    assert_eq!(arena.children(script), &[ctor]);
    let class = arena.second_child(arena.first_child(ctor));
    assert!(arena.is_kind(class, SyntaxKind::Class));
    assert_eq!(arena.member_names(class), vec!["constructor", "m", "create"]);
}

#[test]
fn test_native_classes_register() {
    let mut arena = NodeArena::new();
    let name = arena.add_identifier("C");
    let superclass = arena.add_empty();
    let members = arena.add_class_members(vec![]);
    let declared = arena.add_class(name, superclass, members);

    let anon_name = arena.add_empty();
    let anon_super = arena.add_empty();
    let anon_members = arena.add_class_members(vec![]);
    let expression = arena.add_class(anon_name, anon_super, anon_members);
    let decl = arena.add_variable_declaration("D", Some(expression));
    let var = arena.add_variable_statement(vec![decl]);

    let c_method = method(&mut arena, "C.prototype.m", "1");
    let d_method = method(&mut arena, "D.prototype.n", "2");
    let script = arena.add_script("c.js", vec![declared, var, c_method, d_method]);

    let result = run(&mut arena, script);

    assert!(result.diagnostics.is_empty());
    assert_eq!(result.stats.classes_registered, 2);
    assert_eq!(result.stats.classes_promoted, 0);
    assert_eq!(arena.member_names(declared), vec!["m"]);
    assert_eq!(arena.member_names(expression), vec!["n"]);
    assert_eq!(arena.children(script), &[declared, var]);
}

#[test]
fn test_anonymous_class_expression_is_skipped() {
    let mut arena = NodeArena::new();
    let name = arena.add_empty();
    let superclass = arena.add_empty();
    let members = arena.add_class_members(vec![]);
    let class = arena.add_class(name, superclass, members);
    let callee = arena.add_identifier("register");
    let key = arena.add_string_literal("widget");
    let call = arena.add_call(callee, vec![key, class]);
    let stmt = arena.add_expression_statement(call);
    let script = arena.add_script("e.js", vec![stmt]);

    let result = run(&mut arena, script);

    assert_eq!(result.stats.classes_registered, 0);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_registries_do_not_span_scripts() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let first = arena.add_script("a.js", vec![ctor]);
    let stmt = method(&mut arena, "A.prototype.m", "1");
    let second = arena.add_script("b.js", vec![stmt]);
    let root = arena.add_root(vec![first, second]);

    let result = run(&mut arena, root);

    assert_eq!(result.stats.classes_promoted, 1);
    assert_eq!(result.stats.members_merged, 0);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ConversionDiagnosticKind::UnknownClass);
    assert_eq!(result.diagnostics[0].diagnostic.file, "b.js");
    assert_eq!(arena.children(second), &[stmt]);
}

#[test]
fn test_diagnostics_follow_file_then_document_order() {
    let mut arena = NodeArena::new();
    let x = method(&mut arena, "X.prototype.a", "1");
    let first_ctor = constructor(&mut arena, "A");
    let second_ctor = constructor(&mut arena, "A");
    let first = arena.add_script("a.js", vec![x, first_ctor, second_ctor]);
    let z = method(&mut arena, "Z.prototype.b", "2");
    let second = arena.add_script("b.js", vec![z]);
    let root = arena.add_root(vec![first, second]);

    let result = run(&mut arena, root);

    let summary: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.class_name.as_str(), d.diagnostic.file.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ConversionDiagnosticKind::UnknownClass, "X", "a.js"),
            (ConversionDiagnosticKind::ClassRedefined, "A", "a.js"),
            (ConversionDiagnosticKind::UnknownClass, "Z", "b.js"),
        ]
    );
}

#[test]
fn test_nested_statements_are_not_merged() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let late = method(&mut arena, "A.prototype.late", "1");
    let setup_name = arena.add_identifier("setup");
    let params = arena.add_parameter_list(vec![]);
    let body = arena.add_block(vec![late]);
    let setup = arena.add_function(setup_name, params, body);
    let script = arena.add_script("a.js", vec![ctor, setup]);

    let result = run(&mut arena, script);

    assert_eq!(arena.children(body), &[late]);
    assert_eq!(arena.member_names(arena.first_child(script)), vec!["constructor"]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_field_assignments_are_not_merged() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let zero = arena.add_numeric_literal("0");
    let field = assign(&mut arena, "A.prototype.count", zero);
    let script = arena.add_script("a.js", vec![ctor, field]);

    run(&mut arena, script);

    assert_eq!(arena.children(script).len(), 2);
    assert_eq!(arena.children(script)[1], field);
}

#[test]
fn test_options_disable_static_merge_and_unknown_reports() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let create = method(&mut arena, "A.create", "1");
    let unknown = method(&mut arena, "X.prototype.m", "2");
    let script = arena.add_script("a.js", vec![ctor, create, unknown]);

    let options = ConversionOptions {
        merge_static_methods: false,
        report_unknown_classes: false,
    };
    let result = convert_script(&mut arena, script, &options).expect("conversion succeeds");

    assert!(result.diagnostics.is_empty());
    let children = arena.children(script).to_vec();
    assert_eq!(children.len(), 3);
    assert_eq!(&children[1..], &[create, unknown]);
    assert_eq!(arena.member_names(children[0]), vec!["constructor"]);
}

#[test]
fn test_second_run_is_a_no_op() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let script = arena.add_script("a.js", vec![ctor, foo]);

    run(&mut arena, script);
    let converted = arena.dump(script);
    let again = run(&mut arena, script);

    assert!(!again.changed());
    assert!(again.diagnostics.is_empty());
    assert_eq!(arena.dump(script), converted);
}

#[test]
fn test_root_skips_non_script_children() {
    let mut arena = NodeArena::new();
    let stray = arena.add_empty();
    let ctor = constructor(&mut arena, "A");
    let script = arena.add_script("a.js", vec![ctor]);
    let root = arena.add_root(vec![stray, script]);

    let result = run(&mut arena, root);

    assert_eq!(result.stats.classes_promoted, 1);
    assert_eq!(arena.children(root), &[stray, script]);
}

#[test]
fn test_run_rejects_non_root_nodes() {
    let mut arena = NodeArena::new();
    let ident = arena.add_identifier("A");
    let err = ClassConversionPass::default()
        .run(&mut arena, ident)
        .expect_err("identifier is not a root");
    assert!(matches!(
        err,
        ConversionError::Ast(AstError::UnexpectedKind {
            expected: SyntaxKind::Root,
            found: SyntaxKind::Identifier,
            ..
        })
    ));
}

#[test]
fn test_document_round_trip_then_convert() {
    let mut arena = NodeArena::new();
    let ctor = constructor(&mut arena, "A");
    let foo = method(&mut arena, "A.prototype.foo", "1");
    let script = arena.add_script("a.js", vec![ctor, foo]);
    let root = arena.add_root(vec![script]);
    let json = AstDocument::new(arena, root)
        .to_json(false)
        .expect("serializes");

    let mut document = AstDocument::from_json(&json).expect("valid document");
    let result = run(&mut document.arena, document.root);

    assert_eq!(result.stats.members_merged, 1);
    let class = document.arena.first_child(script);
    assert_eq!(document.arena.member_names(class), vec!["constructor", "foo"]);
    let reloaded = AstDocument::from_json(&document.to_json(true).expect("serializes"))
        .expect("converted tree stays valid");
    assert_eq!(reloaded.arena.dump(script), document.arena.dump(script));
}
