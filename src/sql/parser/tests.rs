use super::*;
use crate::sql::ast::*;

fn parse_select_stmt(query: &str) -> SelectStatement {
    match parse_query(query).unwrap() {
        Statement::Select(sel) => sel,
        other => panic!("Expected Select, got {:?}", other),
    }
}

#[test]
fn test_parse_select_star() {
    let sel = parse_select_stmt("SELECT * FROM users");
    assert_eq!(sel.projections, vec![ProjectionItem::Wildcard]);
    assert_eq!(sel.from.name, "users");
    assert_eq!(sel.selection, None);
    assert_eq!(sel.limit, None);
}

#[test]
fn test_parse_select_columns() {
    let sel = parse_select_stmt("SELECT id, name FROM users");
    assert_eq!(
        sel.projections,
        vec![
            ProjectionItem::Expression(Expr::ColumnRef {
                name: "id".to_string()
            }),
            ProjectionItem::Expression(Expr::ColumnRef {
                name: "name".to_string()
            }),
        ]
    );
}

#[test]
fn test_parse_select_where_and_limit() {
    let sel = parse_select_stmt("SELECT id FROM users WHERE age > 18 LIMIT 10");
    assert_eq!(
        sel.selection,
        Some(Expr::Comparison {
            left: Box::new(Expr::ColumnRef {
                name: "age".to_string()
            }),
            operator: ComparisonOperator::Gt,
            right: Box::new(Expr::LiteralInt { value: 18 }),
        })
    );
    assert_eq!(sel.limit, Some(10));
}

#[test]
fn test_parse_select_trailing_semicolon() {
    let sel = parse_select_stmt("SELECT * FROM users;");
    assert_eq!(sel.from.name, "users");
}

#[test]
fn test_parse_select_keywords_case_insensitive() {
    let sel = parse_select_stmt("select id from users where age >= 21 limit 5");
    assert_eq!(sel.from.name, "users");
    assert_eq!(sel.limit, Some(5));
}

#[test]
fn test_parse_select_where_after_limit_rejected() {
    let err = parse_query("SELECT name FROM users LIMIT 10 WHERE age > 18").unwrap_err();
    assert!(err
        .to_string()
        .contains("WHERE clause must come before LIMIT"));
}

#[test]
fn test_parse_select_repeated_where_overwrites() {
    // Preserved behavior: a second WHERE before any LIMIT replaces the first.
    let sel = parse_select_stmt("SELECT id FROM users WHERE a = 1 WHERE b = 2");
    assert_eq!(
        sel.selection,
        Some(Expr::Comparison {
            left: Box::new(Expr::ColumnRef {
                name: "b".to_string()
            }),
            operator: ComparisonOperator::Eq,
            right: Box::new(Expr::LiteralInt { value: 2 }),
        })
    );
}

#[test]
fn test_parse_select_repeated_limit_overwrites() {
    let sel = parse_select_stmt("SELECT id FROM users LIMIT 10 LIMIT 20");
    assert_eq!(sel.limit, Some(20));
}

#[test]
fn test_parse_select_unexpected_trailing_token() {
    let err = parse_query("SELECT id FROM users GROUP").unwrap_err();
    assert!(err
        .to_string()
        .contains("unexpected token after SELECT statement"));
}

#[test]
fn test_parse_select_missing_projections() {
    let err = parse_query("SELECT FROM users").unwrap_err();
    assert!(err.to_string().contains("expected column name or *"));
}

#[test]
fn test_parse_select_missing_from() {
    assert!(parse_query("SELECT name").is_err());
}

#[test]
fn test_parse_select_invalid_limit_value() {
    // Out of u64 range
    let err = parse_query("SELECT id FROM users LIMIT 99999999999999999999").unwrap_err();
    assert!(err.to_string().contains("invalid LIMIT value"));
}

#[test]
fn test_parse_select_limit_requires_number() {
    let err = parse_query("SELECT id FROM users LIMIT abc").unwrap_err();
    assert!(err.to_string().contains("expected number after LIMIT"));
}

#[test]
fn test_parse_expression_logical_right_associative() {
    // AND/OR share one precedence level and group to the right:
    // a=1 AND (b=2 OR c=3)
    let sel = parse_select_stmt("SELECT * FROM t WHERE a = 1 AND b = 2 OR c = 3");
    let comparison = |name: &str, value: i64| Expr::Comparison {
        left: Box::new(Expr::ColumnRef {
            name: name.to_string(),
        }),
        operator: ComparisonOperator::Eq,
        right: Box::new(Expr::LiteralInt { value }),
    };
    assert_eq!(
        sel.selection,
        Some(Expr::Logical {
            left: Box::new(comparison("a", 1)),
            operator: LogicalOperator::And,
            right: Box::new(Expr::Logical {
                left: Box::new(comparison("b", 2)),
                operator: LogicalOperator::Or,
                right: Box::new(comparison("c", 3)),
            }),
        })
    );
}

#[test]
fn test_parse_expression_string_and_column_operands() {
    let sel = parse_select_stmt("SELECT * FROM t WHERE name = 'Alice' AND a != b");
    if let Some(Expr::Logical { left, right, .. }) = sel.selection {
        assert_eq!(
            *left,
            Expr::Comparison {
                left: Box::new(Expr::ColumnRef {
                    name: "name".to_string()
                }),
                operator: ComparisonOperator::Eq,
                right: Box::new(Expr::LiteralString {
                    value: "Alice".to_string()
                }),
            }
        );
        assert_eq!(
            *right,
            Expr::Comparison {
                left: Box::new(Expr::ColumnRef {
                    name: "a".to_string()
                }),
                operator: ComparisonOperator::Ne,
                right: Box::new(Expr::ColumnRef {
                    name: "b".to_string()
                }),
            }
        );
    } else {
        panic!("Expected Logical");
    }
}

#[test]
fn test_parse_expression_invalid_operator() {
    let err = parse_query("SELECT name FROM users WHERE age <=> 18").unwrap_err();
    assert!(err
        .to_string()
        .contains("expected comparison operator (>, <, =, !=, >=, <=)"));
}

#[test]
fn test_parse_expression_truncated_where() {
    let err = parse_query("SELECT name FROM users WHERE").unwrap_err();
    assert!(err.to_string().contains("expected column name"));
}

#[test]
fn test_parse_expression_parentheses_unsupported() {
    assert!(parse_query("SELECT name FROM users WHERE (age > 18)").is_err());
}

#[test]
fn test_parse_expression_missing_value() {
    let err = parse_query("SELECT * FROM t WHERE a = ;").unwrap_err();
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn test_parse_create_table() {
    let stmt = parse_query("CREATE TABLE users (id INT, name TEXT)").unwrap();
    assert_eq!(
        stmt,
        Statement::CreateTable(CreateTableStatement {
            table_name: "users".to_string(),
            columns: vec![
                ColumnDef {
                    name: "id".to_string(),
                    column_type: ColumnType::Int,
                },
                ColumnDef {
                    name: "name".to_string(),
                    column_type: ColumnType::Text,
                },
            ],
        })
    );
}

#[test]
fn test_parse_create_table_lowercase_types() {
    let stmt = parse_query("create table t (a int, b bigint, c text)").unwrap();
    if let Statement::CreateTable(ct) = stmt {
        let types: Vec<ColumnType> = ct.columns.iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![ColumnType::Int, ColumnType::BigInt, ColumnType::Text]
        );
    } else {
        panic!("Expected CreateTable");
    }
}

#[test]
fn test_parse_create_table_empty_columns() {
    let err = parse_query("CREATE TABLE t()").unwrap_err();
    assert!(err
        .to_string()
        .contains("table must have at least one column"));
}

#[test]
fn test_parse_create_table_unsupported_type() {
    let err = parse_query("CREATE TABLE t (id VARCHAR)").unwrap_err();
    assert!(err.to_string().contains("unsupported column type VARCHAR"));
}

#[test]
fn test_parse_create_table_trailing_garbage() {
    let err = parse_query("CREATE TABLE t (id INT) extra").unwrap_err();
    assert!(err
        .to_string()
        .contains("unexpected token after CREATE TABLE statement"));
}

#[test]
fn test_parse_insert() {
    let stmt = parse_query("INSERT INTO users VALUES (1, 'Alice')").unwrap();
    assert_eq!(
        stmt,
        Statement::Insert(InsertStatement {
            table_name: "users".to_string(),
            values: vec![
                Expr::LiteralInt { value: 1 },
                Expr::LiteralString {
                    value: "Alice".to_string()
                },
            ],
        })
    );
}

#[test]
fn test_parse_insert_null() {
    let stmt = parse_query("INSERT INTO t VALUES (1, NULL, 'x')").unwrap();
    if let Statement::Insert(ins) = stmt {
        assert_eq!(ins.values[1], Expr::LiteralNull);
    } else {
        panic!("Expected Insert");
    }
}

#[test]
fn test_parse_insert_missing_values() {
    assert!(parse_query("INSERT INTO users VALUES").is_err());
    assert!(parse_query("INSERT INTO users").is_err());
}

#[test]
fn test_parse_insert_empty_values() {
    let err = parse_query("INSERT INTO t VALUES ()").unwrap_err();
    assert!(err
        .to_string()
        .contains("INSERT statement must have at least one value"));
}

#[test]
fn test_parse_insert_integer_overflow() {
    let err = parse_query("INSERT INTO t VALUES (99999999999999999999)").unwrap_err();
    assert!(err.to_string().contains("invalid integer"));
}

#[test]
fn test_parse_insert_trailing_garbage() {
    let err = parse_query("INSERT INTO t VALUES (1) extra").unwrap_err();
    assert!(err
        .to_string()
        .contains("unexpected token after INSERT statement"));
}

#[test]
fn test_parse_unsupported_statement() {
    let err = parse_query("DELETE FROM users").unwrap_err();
    assert!(err
        .to_string()
        .contains("unsupported statement type: \"DELETE\""));
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_query("").unwrap_err(), ParseError::Failed);
    assert_eq!(parse_query("   ").unwrap_err(), ParseError::Failed);
}

#[test]
fn test_parse_is_deterministic() {
    let query = "SELECT id, name FROM users WHERE age > 18 AND city = 'Tokyo' LIMIT 10";
    let first = parse_query(query).unwrap();
    let second = parse_query(query).unwrap();
    assert_eq!(first, second);
}
