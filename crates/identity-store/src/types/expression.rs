//! Filter expressions for paginated user listing.
//!
//! An [`ExpressionCondition`] is one `attribute <op> value` term of a user
//! filter such as `emails co example.com`. Conditions are handed to the data
//! store unchanged; backends that evaluate them in memory can use
//! [`ExpressionCondition::matches`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Comparison operator of an expression condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpressionOperation {
    /// Equals.
    Eq,
    /// Starts with.
    Sw,
    /// Ends with.
    Ew,
    /// Contains.
    Co,
    /// Greater than or equal.
    Ge,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
}

impl ExpressionOperation {
    /// Returns the operator code, e.g. `"EQ"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionOperation::Eq => "EQ",
            ExpressionOperation::Sw => "SW",
            ExpressionOperation::Ew => "EW",
            ExpressionOperation::Co => "CO",
            ExpressionOperation::Ge => "GE",
            ExpressionOperation::Le => "LE",
            ExpressionOperation::Gt => "GT",
            ExpressionOperation::Lt => "LT",
        }
    }
}

impl fmt::Display for ExpressionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpressionOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EQ" => Ok(ExpressionOperation::Eq),
            "SW" => Ok(ExpressionOperation::Sw),
            "EW" => Ok(ExpressionOperation::Ew),
            "CO" => Ok(ExpressionOperation::Co),
            "GE" => Ok(ExpressionOperation::Ge),
            "LE" => Ok(ExpressionOperation::Le),
            "GT" => Ok(ExpressionOperation::Gt),
            "LT" => Ok(ExpressionOperation::Lt),
            _ => Err(format!("unknown expression operation: {}", s)),
        }
    }
}

/// A single `attribute <op> value` filter term.
///
/// # Examples
///
/// ```
/// use helios_identity_store::types::{ExpressionCondition, ExpressionOperation};
///
/// let condition = ExpressionCondition::new(
///     ExpressionOperation::Sw,
///     "http://wso2.org/claims/identity/accountState",
///     "LOCK",
/// );
/// assert!(condition.matches("LOCKED"));
/// assert!(!condition.matches("UNLOCKED"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionCondition {
    /// The comparison operator.
    pub operation: ExpressionOperation,
    /// The attribute (claim URI or store attribute) being filtered on.
    pub attribute_name: String,
    /// The value to compare against.
    pub attribute_value: String,
}

impl ExpressionCondition {
    /// Creates a new condition.
    pub fn new(
        operation: ExpressionOperation,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            attribute_name: attribute_name.into(),
            attribute_value: attribute_value.into(),
        }
    }

    /// Evaluates the condition against a candidate attribute value.
    ///
    /// Ordering operators compare numerically when both sides parse as
    /// integers, and lexically otherwise.
    pub fn matches(&self, value: &str) -> bool {
        let expected = self.attribute_value.as_str();
        match self.operation {
            ExpressionOperation::Eq => value == expected,
            ExpressionOperation::Sw => value.starts_with(expected),
            ExpressionOperation::Ew => value.ends_with(expected),
            ExpressionOperation::Co => value.contains(expected),
            ExpressionOperation::Ge => compare(value, expected) != Ordering::Less,
            ExpressionOperation::Le => compare(value, expected) != Ordering::Greater,
            ExpressionOperation::Gt => compare(value, expected) == Ordering::Greater,
            ExpressionOperation::Lt => compare(value, expected) == Ordering::Less,
        }
    }
}

impl fmt::Display for ExpressionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.attribute_name, self.operation, self.attribute_value
        )
    }
}

fn compare(left: &str, right: &str) -> Ordering {
    match (left.trim().parse::<i64>(), right.trim().parse::<i64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        _ => left.cmp(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_parse_and_display() {
        assert_eq!(
            "co".parse::<ExpressionOperation>().unwrap(),
            ExpressionOperation::Co
        );
        assert_eq!(ExpressionOperation::Ge.to_string(), "GE");
        assert!("XX".parse::<ExpressionOperation>().is_err());
    }

    #[test]
    fn test_string_operators() {
        let eq = ExpressionCondition::new(ExpressionOperation::Eq, "uid", "alice");
        assert!(eq.matches("alice"));
        assert!(!eq.matches("alice2"));

        let ew = ExpressionCondition::new(ExpressionOperation::Ew, "mail", "@example.com");
        assert!(ew.matches("alice@example.com"));

        let co = ExpressionCondition::new(ExpressionOperation::Co, "mail", "example");
        assert!(co.matches("bob@example.org"));
        assert!(!co.matches("bob@test.org"));
    }

    #[test]
    fn test_numeric_ordering() {
        let ge = ExpressionCondition::new(ExpressionOperation::Ge, "attempts", "3");
        assert!(ge.matches("3"));
        assert!(ge.matches("10"));
        assert!(!ge.matches("2"));

        let lt = ExpressionCondition::new(ExpressionOperation::Lt, "attempts", "10");
        assert!(lt.matches("9"));
        assert!(!lt.matches("10"));
    }

    #[test]
    fn test_lexical_ordering_fallback() {
        let gt = ExpressionCondition::new(ExpressionOperation::Gt, "name", "bob");
        assert!(gt.matches("carol"));
        assert!(!gt.matches("alice"));
    }

    #[test]
    fn test_condition_serde() {
        let condition = ExpressionCondition::new(ExpressionOperation::Le, "age", "40");
        let json = serde_json::to_string(&condition).unwrap();
        assert!(json.contains("\"LE\""));
        let parsed: ExpressionCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, condition);
        assert_eq!(parsed.to_string(), "age LE 40");
    }
}
