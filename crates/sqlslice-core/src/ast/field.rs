//! Projected field entries.

use super::statement::SelectStatement;

/// One projected field of a SELECT.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The raw field expression, trimmed.
    pub expression: String,
    /// The resolved alias, unique within the owning statement.
    pub alias: String,
    /// Reserved for qualified-name resolution; not populated by the parser.
    pub qualified_name: Option<String>,
    /// The recursively parsed sub-select when the expression is a
    /// parenthesized SELECT.
    pub sub_select: Option<Box<SelectStatement>>,
}

impl Field {
    /// Synthetic base name for fields whose alias could not be derived.
    pub const UNKNOWN_FIELD_NAME: &'static str = "Expr";
    /// Synthetic base name for wildcard fields.
    pub const STAR_FIELD_NAME: &'static str = "StarExpr";

    /// The alias, bracket-quoted when it would not stand alone as an
    /// identifier (leading digit or any non-alphanumeric character).
    #[must_use]
    pub fn masked_alias(&self) -> String {
        if alias_needs_brackets(&self.alias) {
            format!("[{}]", self.alias)
        } else {
            self.alias.clone()
        }
    }

    /// Whether this field came from a wildcard expression.
    #[must_use]
    pub fn is_star_expression(&self) -> bool {
        !self.alias.trim().is_empty() && self.alias.starts_with(Self::STAR_FIELD_NAME)
    }
}

fn alias_needs_brackets(alias: &str) -> bool {
    if alias.trim().is_empty() {
        return false;
    }
    let Some(first) = alias.chars().next() else {
        return false;
    };
    first.is_numeric() || alias.chars().any(|c| !c.is_numeric() && !c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(alias: &str) -> Field {
        Field {
            expression: String::new(),
            alias: alias.to_string(),
            qualified_name: None,
            sub_select: None,
        }
    }

    #[test]
    fn plain_alias_stays_unquoted() {
        assert_eq!(field("name").masked_alias(), "name");
    }

    #[test]
    fn synthetic_and_awkward_aliases_get_brackets() {
        assert_eq!(field("Expr_1").masked_alias(), "[Expr_1]");
        assert_eq!(field("1st").masked_alias(), "[1st]");
        assert_eq!(field("a b").masked_alias(), "[a b]");
    }

    #[test]
    fn star_detection() {
        assert!(field("StarExpr_2").is_star_expression());
        assert!(!field("name").is_star_expression());
    }
}
