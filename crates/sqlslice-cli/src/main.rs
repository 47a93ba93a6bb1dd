//! sqlslice CLI
//!
//! Parses a SELECT statement (a built-in sample when none is given) and
//! prints the extracted structure recursively.

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sqlslice_core::{SelectStatement, Statement, parse};

/// A multi-line sample exercising the dialect subset the splitter handles:
/// TOP ... PERCENT, bracket-quoted identifiers, a sub-select in the field
/// list, wildcards, operator expressions, quoted literals containing
/// delimiters, and every clause keyword.
const SAMPLE: &str = "Select Top 10 Percent [t].[Id], [db].[dbo].[t].[Label],\n\
                      ( select * from audit where ok = 1 ) As LastAudit,\n\
                      *, ( 1 - 4 ) ,\n\
                      Orders.*, a +     b, '(','(',1 + 2, [a], [b] tag, c, ')'\n\
                      from t\n\
                      where a=1 and b=2\n\
                      group by c, b + 1\n\
                      having x=1 and y=2\n\
                      order by a, b desc";

/// Best-effort structural splitter for SQL SELECT statements.
#[derive(Parser)]
#[command(name = "sqlslice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL statement to parse; the built-in sample is used when omitted.
    sql: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sql = cli.sql.unwrap_or_else(|| SAMPLE.to_string());
    info!("parsing:\n{sql}");

    let statement = parse(&sql)?;
    match statement {
        Statement::Select(select) => print_select(&select, 0),
    }

    Ok(())
}

fn print_select(select: &SelectStatement, depth: usize) {
    let pad = "  ".repeat(depth);

    println!("{pad}distinct: {}", select.distinct);
    match &select.top {
        Some(top) => println!("{pad}top: {} (percent: {})", top.value, top.percent),
        None => println!("{pad}top: none"),
    }
    println!("{pad}union: {}", select.union);
    println!("{pad}fields: {}", select.fields_expression);
    for field in &select.fields {
        println!("{pad}  {} AS {}", field.expression, field.masked_alias());
        if let Some(sub) = &field.sub_select {
            print_select(sub, depth + 2);
        }
    }

    println!("{pad}from: {}", select.from_expression);
    if let Some(where_expression) = &select.where_expression {
        println!("{pad}where: {where_expression}");
    }
    if let Some(group_by) = &select.group_by_expression {
        println!("{pad}group by: {group_by}");
        for group in &select.groups {
            println!("{pad}  group: {group}");
        }
    }
    if let Some(having) = &select.having_expression {
        println!("{pad}having: {having}");
    }
    if let Some(order_by) = &select.order_by_expression {
        println!("{pad}order by: {order_by}");
        for order in &select.orders {
            println!(
                "{pad}  order: {} {}",
                order.expression,
                order.direction.as_str()
            );
        }
    }
}
