//! sqlvalue - convert SQL literals to typed values and filter rows with them

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use log::{debug, info};
use sqlvalue::executor::{collect_rows, ColumnInfo, Executor, FilterExecutor, ValuesExecutor};
use sqlvalue::expression::{evaluate_expression, Expression};
use sqlvalue::sql::{conversion_error, parse_list, sql_expr, Binder};
use sqlvalue::value::{DataType, ScalarValue};

/// Convert SQL literal expressions into typed scalar values
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Constant SQL expressions to evaluate, e.g. "x'DeadBeef'"
    exprs: Vec<String>,

    /// In-memory column as name:type=lit1,lit2,... (repeatable)
    #[arg(short, long = "column", value_parser = parse_column_arg)]
    columns: Vec<ColumnArg>,

    /// Predicate applied to the rows built from --column
    #[arg(short, long = "where")]
    predicate: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone)]
struct ColumnArg {
    name: String,
    data_type: DataType,
    values: String,
}

fn parse_column_arg(arg: &str) -> Result<ColumnArg, String> {
    let (name, rest) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected name:type=values, got '{}'", arg))?;
    let (type_name, values) = rest.split_once('=').unwrap_or((rest, ""));
    let data_type = DataType::from_name(type_name.trim())
        .ok_or_else(|| format!("unknown column type '{}'", type_name))?;
    if name.trim().is_empty() {
        return Err(format!("missing column name in '{}'", arg));
    }
    Ok(ColumnArg {
        name: name.trim().to_string(),
        data_type,
        values: values.to_string(),
    })
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

/// Render the whole error chain, tagged with the conversion category if any
fn error_message(err: &anyhow::Error) -> String {
    match conversion_error(err) {
        Some(conversion) => format!("Error: {:#} ({:?})", err, conversion.category()),
        None => format!("Error: {:#}", err),
    }
}

fn run(args: &Args) -> Result<()> {
    for sql in &args.exprs {
        let value = evaluate_constant(sql)?;
        let type_name = value
            .data_type()
            .map_or("null".to_string(), |t| t.to_string());
        println!("{} => {} :: {}", sql, value, type_name);
    }

    if args.columns.is_empty() {
        if args.predicate.is_some() {
            bail!("--where needs at least one --column");
        }
        return Ok(());
    }

    let columns = args
        .columns
        .iter()
        .map(build_column)
        .collect::<Result<Vec<_>>>()?;
    let schema: Vec<ColumnInfo> = columns.iter().map(|(col, _)| col.clone()).collect();

    let mut executor: Box<dyn Executor> =
        Box::new(ValuesExecutor::from_columns(columns)?);
    if let Some(predicate) = &args.predicate {
        let filter = bind_predicate(predicate, &schema)?;
        debug!("Filter: {:?}", filter);
        executor = Box::new(FilterExecutor::new(executor, filter));
    }

    let rows = collect_rows(executor.as_mut())?;
    info!("{} rows selected", rows.len());

    let header: Vec<&str> = schema.iter().map(|col| col.name.as_str()).collect();
    println!("{}", header.join("\t"));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", cells.join("\t"));
    }
    Ok(())
}

fn bind_predicate(predicate: &str, schema: &[ColumnInfo]) -> Result<Expression> {
    sql_expr(predicate, schema).with_context(|| format!("Failed to bind predicate '{}'", predicate))
}

/// Evaluate an expression that references no columns
fn evaluate_constant(sql: &str) -> Result<ScalarValue> {
    let expr = sql_expr(sql, &[])?;
    Ok(evaluate_expression(&expr, &[])?)
}

fn build_column(arg: &ColumnArg) -> Result<(ColumnInfo, Vec<ScalarValue>)> {
    let values = if arg.values.trim().is_empty() {
        Vec::new()
    } else {
        let list = parse_list(&arg.values)
            .with_context(|| format!("Failed to parse values of column {}", arg.name))?;
        Binder::new(&[]).bind_list(&list)?
    };
    debug!("Column {} :: {} with {} values", arg.name, arg.data_type, values.len());
    Ok((ColumnInfo::new(arg.name.clone(), arg.data_type), values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_arg() {
        let col = parse_column_arg("bin:binary=x'01',b'10'").unwrap();
        assert_eq!(col.name, "bin");
        assert_eq!(col.data_type, DataType::Binary);
        assert_eq!(col.values, "x'01',b'10'");

        assert!(parse_column_arg("bin").is_err());
        assert!(parse_column_arg("bin:decimal=1").is_err());
        assert!(parse_column_arg(":int=1").is_err());
    }

    #[test]
    fn test_build_column() {
        let col = parse_column_arg("val:int=9, 8, -7").unwrap();
        let (info, values) = build_column(&col).unwrap();
        assert_eq!(info, ColumnInfo::new("val", DataType::Integer));
        assert_eq!(
            values,
            vec![
                ScalarValue::Integer(9),
                ScalarValue::Integer(8),
                ScalarValue::Integer(-7)
            ]
        );
    }

    #[test]
    fn test_error_message_keeps_violated_rule() {
        let schema = vec![ColumnInfo::new("x", DataType::Binary)];
        let err = bind_predicate("x IN (x'FF', x'123')", &schema).unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with("Error: Failed to bind predicate"));
        assert!(message.contains("hex string literal must have an even number of digits"));
        assert!(message.ends_with("(SyntaxViolation)"));

        let err = bind_predicate("x = N'hmmm'", &schema).unwrap_err();
        let message = error_message(&err);
        assert!(message.contains("NationalStringLiteral(\"hmmm\") is not supported"));
        assert!(message.ends_with("(UnsupportedConstruct)"));

        let err = bind_predicate("y = 1", &schema).unwrap_err();
        assert_eq!(
            error_message(&err),
            "Error: Failed to bind predicate 'y = 1': Unknown column: y"
        );
    }

    #[test]
    fn test_evaluate_constant() {
        assert_eq!(
            evaluate_constant("x'DeadBeef'").unwrap(),
            ScalarValue::binary(vec![0xDE, 0xAD, 0xBE, 0xEF])
        );
        assert_eq!(
            evaluate_constant("b'10' > x'01'").unwrap(),
            ScalarValue::Boolean(true)
        );
        assert!(evaluate_constant("b'007'").is_err());
    }
}
