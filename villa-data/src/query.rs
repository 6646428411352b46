/// An explicit query specification for constructing SELECT statements.
///
/// Replaces ad-hoc predicate arguments with the small set of filter shapes
/// the repositories actually use: exact equality and case-insensitive
/// equality, optionally limited. `build_select` returns `(sql, bind_values)`
/// with `?` placeholders; callers bind the values through sqlx.
///
/// # Example
///
/// ```ignore
/// let (sql, params) = QueryBuilder::new("villas")
///     .where_eq("id", "7")
///     .limit(1)
///     .build_select("id, name");
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    conditions: Vec<Condition>,
    limit_val: Option<u64>,
}

#[derive(Debug, Clone)]
enum Condition {
    Eq(String, String),
    /// Case-insensitive equality, compiled to `LOWER(col) = LOWER(?)`.
    EqNoCase(String, String),
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
            limit_val: None,
        }
    }

    pub fn where_eq(mut self, column: &str, value: &str) -> Self {
        self.conditions
            .push(Condition::Eq(column.to_string(), value.to_string()));
        self
    }

    pub fn where_eq_nocase(mut self, column: &str, value: &str) -> Self {
        self.conditions
            .push(Condition::EqNoCase(column.to_string(), value.to_string()));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit_val = Some(limit);
        self
    }

    /// Build a SELECT query returning `(sql, bind_values)`.
    ///
    /// The `columns` parameter determines which columns to select
    /// (e.g., `"*"` or `"id, name"`).
    pub fn build_select(&self, columns: &str) -> (String, Vec<String>) {
        let mut sql = format!("SELECT {columns} FROM {}", self.table);
        let mut params = Vec::new();
        self.append_where(&mut sql, &mut params);
        if let Some(limit) = self.limit_val {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        (sql, params)
    }

    fn append_where(&self, sql: &mut String, params: &mut Vec<String>) {
        if self.conditions.is_empty() {
            return;
        }
        sql.push_str(" WHERE ");
        let mut first = true;
        for cond in &self.conditions {
            if !first {
                sql.push_str(" AND ");
            }
            first = false;
            match cond {
                Condition::Eq(col, val) => {
                    sql.push_str(&format!("{col} = ?"));
                    params.push(val.clone());
                }
                Condition::EqNoCase(col, val) => {
                    sql.push_str(&format!("LOWER({col}) = LOWER(?)"));
                    params.push(val.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let (sql, params) = QueryBuilder::new("villas").build_select("*");
        assert_eq!(sql, "SELECT * FROM villas");
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_eq() {
        let (sql, params) = QueryBuilder::new("villas")
            .where_eq("id", "7")
            .build_select("*");
        assert_eq!(sql, "SELECT * FROM villas WHERE id = ?");
        assert_eq!(params, vec!["7"]);
    }

    #[test]
    fn test_where_eq_nocase() {
        let (sql, params) = QueryBuilder::new("villas")
            .where_eq_nocase("name", "Casa Bella")
            .limit(1)
            .build_select("id, name");
        assert_eq!(
            sql,
            "SELECT id, name FROM villas WHERE LOWER(name) = LOWER(?) LIMIT 1"
        );
        assert_eq!(params, vec!["Casa Bella"]);
    }

    #[test]
    fn test_multiple_conditions() {
        let (sql, params) = QueryBuilder::new("villas")
            .where_eq("occupancy", "4")
            .where_eq_nocase("amenity", "pool")
            .build_select("*");
        assert_eq!(
            sql,
            "SELECT * FROM villas WHERE occupancy = ? AND LOWER(amenity) = LOWER(?)"
        );
        assert_eq!(params, vec!["4", "pool"]);
    }
}
