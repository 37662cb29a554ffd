use super::Value;

/// A statement together with its fully resolved SQL text and parameter
/// values, ready for execution.
///
/// Owned by the execution pipeline for the lifetime of one call. The SQL
/// text is mutable so a pre-execution hook can rewrite it before the driver
/// runs the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    sql: String,
    params: Vec<Value>,
}

impl BoundStatement {
    pub fn new(sql: impl Into<String>) -> BoundStatement {
        BoundStatement {
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> BoundStatement {
        BoundStatement {
            sql: sql.into(),
            params,
        }
    }

    /// The SQL text the driver will execute.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameter values, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Replace the SQL text.
    pub fn set_sql(&mut self, sql: String) {
        self.sql = sql;
    }
}
