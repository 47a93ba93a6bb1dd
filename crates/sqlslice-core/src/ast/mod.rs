//! Parsed statement structure.

mod field;
mod statement;

pub use field::Field;
pub use statement::{
    OrderDirection, OrderItem, SelectStatement, Statement, StatementKind, TopClause,
};
