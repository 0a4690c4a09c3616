use sqlvalue::executor::{collect_rows, ColumnInfo, FilterExecutor, ValuesExecutor};
use sqlvalue::expression::evaluate_expression;
use sqlvalue::literal::{convert, ErrorCategory, LiteralToken};
use sqlvalue::sql::{conversion_error, sql_expr};
use sqlvalue::value::{DataType, ScalarValue};

fn bin(bytes: &[u8]) -> ScalarValue {
    ScalarValue::binary(bytes.to_vec())
}

/// Run `predicate` over the given columns and return the values of `output`
fn select(
    columns: Vec<(ColumnInfo, Vec<ScalarValue>)>,
    predicate: &str,
    output: usize,
) -> anyhow::Result<Vec<ScalarValue>> {
    let schema: Vec<ColumnInfo> = columns.iter().map(|(col, _)| col.clone()).collect();
    let filter = sql_expr(predicate, &schema)?;
    let source = ValuesExecutor::from_columns(columns)?;
    let mut executor = FilterExecutor::new(Box::new(source), filter);
    Ok(collect_rows(&mut executor)?
        .into_iter()
        .map(|mut row| row.swap_remove(output))
        .collect())
}

fn binary_table() -> Vec<(ColumnInfo, Vec<ScalarValue>)> {
    vec![
        (
            ColumnInfo::new("bin", DataType::Binary),
            vec![bin(&[0x01]), bin(&[0x02]), bin(&[0x03]), bin(&[0x04])],
        ),
        (
            ColumnInfo::new("val", DataType::Integer),
            vec![9, 8, 7, 6].into_iter().map(ScalarValue::Integer).collect(),
        ),
    ]
}

fn membership_table() -> Vec<(ColumnInfo, Vec<ScalarValue>)> {
    vec![
        (
            ColumnInfo::new("x", DataType::Binary),
            vec![bin(&[0x05]), bin(&[0xFF]), bin(&[0xCC]), bin(&[0x0B])],
        ),
        (
            ColumnInfo::new("y", DataType::Integer),
            vec![1, 2, 3, 4].into_iter().map(ScalarValue::Integer).collect(),
        ),
    ]
}

fn constant(sql: &str) -> anyhow::Result<ScalarValue> {
    let expr = sql_expr(sql, &[])?;
    Ok(evaluate_expression(&expr, &[])?)
}

#[test]
fn test_binary_literal_table() {
    let cases: [(&str, &[u8]); 8] = [
        ("b''", &[]),
        ("b'1001'", &[0x09]),
        ("b'11101011'", &[0xEB]),
        ("b'1111110100110010'", &[0xFD, 0x32]),
        ("x''", &[]),
        ("x'FF'", &[0xFF]),
        ("x'4142'", b"AB"),
        ("x'DeadBeef'", &[0xDE, 0xAD, 0xBE, 0xEF]),
    ];
    for (sql, expected) in cases {
        assert_eq!(constant(sql).unwrap(), bin(expected), "literal {}", sql);
    }
}

#[test]
fn test_filter_with_equivalent_literals() {
    // b'10', x'02', '\x02' and b'0010' all denote the single byte 0x02
    for literal in ["b'10'", "x'02'", "'\x02'", "b'0010'"] {
        let predicate = format!("bin > {}", literal);
        let selected = select(binary_table(), &predicate, 1).unwrap();
        assert_eq!(
            selected,
            vec![ScalarValue::Integer(7), ScalarValue::Integer(6)],
            "predicate {}",
            predicate
        );
    }
}

#[test]
fn test_membership_with_bit_and_hex_lists() {
    for predicate in ["x IN (b'0101', b'1011')", "x IN (x'05', x'0b')"] {
        let selected = select(membership_table(), predicate, 1).unwrap();
        assert_eq!(
            selected,
            vec![ScalarValue::Integer(1), ScalarValue::Integer(4)],
            "predicate {}",
            predicate
        );
    }
}

#[test]
fn test_negated_membership() {
    let selected = select(membership_table(), "x NOT IN (x'05', x'0b')", 1).unwrap();
    assert_eq!(
        selected,
        vec![ScalarValue::Integer(2), ScalarValue::Integer(3)]
    );
}

#[test]
fn test_combined_predicate() {
    let selected = select(binary_table(), "bin >= x'02' AND val IN (9, 8)", 1).unwrap();
    assert_eq!(selected, vec![ScalarValue::Integer(8)]);
}

#[test]
fn test_error_categories() {
    let cases = [
        ("b'007'", ErrorCategory::SyntaxViolation, "bit string literal should contain only 0s and 1s"),
        ("x'00F'", ErrorCategory::SyntaxViolation, "hex string literal must have an even number of digits"),
        ("N'hmmm'", ErrorCategory::UnsupportedConstruct, "NationalStringLiteral(\"hmmm\") is not supported"),
    ];
    for (sql, category, message) in cases {
        let err = constant(sql).unwrap_err();
        let conversion = conversion_error(&err).unwrap();
        assert_eq!(conversion.category(), category, "literal {}", sql);
        assert!(err.to_string().contains(message), "literal {}: {}", sql, err);
    }
}

#[test]
fn test_malformed_list_element_fails_whole_query() {
    let err = select(membership_table(), "x IN (x'FF',x'123')", 1).unwrap_err();
    let conversion = conversion_error(&err).unwrap();
    assert_eq!(conversion.category(), ErrorCategory::SyntaxViolation);
    assert!(err
        .to_string()
        .contains("hex string literal must have an even number of digits"));
}

#[test]
fn test_error_category_prefixes() {
    let syntax = convert(&LiteralToken::bits("2")).unwrap_err();
    assert!(syntax.to_string().starts_with("SQL syntax error:"));

    let unsupported = convert(&LiteralToken::national("a")).unwrap_err();
    assert!(unsupported.to_string().starts_with("SQL interface error:"));
}

#[test]
fn test_null_propagation_in_filter() {
    let columns = vec![
        (
            ColumnInfo::new("x", DataType::Binary),
            vec![bin(&[0x05]), ScalarValue::Null, bin(&[0x07])],
        ),
        (
            ColumnInfo::new("y", DataType::Integer),
            vec![1, 2, 3].into_iter().map(ScalarValue::Integer).collect(),
        ),
    ];
    let selected = select(columns.clone(), "x NOT IN (x'05')", 1).unwrap();
    assert_eq!(selected, vec![ScalarValue::Integer(3)]);

    let selected = select(columns, "x IS NULL", 1).unwrap();
    assert_eq!(selected, vec![ScalarValue::Integer(2)]);
}

#[test]
fn test_incompatible_comparison_rejected() {
    assert!(select(binary_table(), "val > x'01'", 1).is_err());
}
