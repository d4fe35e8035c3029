// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Number of entities requested per page. The remote service caps pages at this size, so a
/// different value would make the [`crate::Paginator`] under- or over-step its offset.
pub const SUGGESTED_PAGE_LIMIT: usize = 500;

/// A named, typed literal that fills a `:key` placeholder in a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundParameter {
    pub key: String,
    pub value: Value,
}

impl BoundParameter {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// The wire form of a [`FilterStatement`]: the query text (with paging applied) and its
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub query: String,
    pub values: Vec<BoundParameter>,
}

/// A parameterized filter plus its paging cursor.
///
/// The where clause and its parameters are fixed once built. Only `limit` and `offset` change,
/// and only the paginator driving the query should change them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStatement {
    where_clause: String,
    values: Vec<BoundParameter>,
    pub limit: usize,
    pub offset: usize,
}

impl FilterStatement {
    /// Create a statement from a clause such as `WHERE name = :name` and the parameters for its
    /// placeholders. Placeholder names are not checked against the parameter keys; the remote
    /// service rejects a mismatch.
    pub fn new(where_clause: impl Into<String>, values: Vec<BoundParameter>) -> Self {
        Self {
            where_clause: where_clause.into(),
            values,
            limit: SUGGESTED_PAGE_LIMIT,
            offset: 0,
        }
    }

    pub fn where_clause(&self) -> &str {
        &self.where_clause
    }

    pub fn values(&self) -> &[BoundParameter] {
        &self.values
    }

    /// Render the statement for the current page: `<where clause> LIMIT <limit> OFFSET <offset>`
    pub fn to_statement(&self) -> Statement {
        let paging = format!("LIMIT {} OFFSET {}", self.limit, self.offset);
        let where_clause = self.where_clause.trim();

        let query = if where_clause.is_empty() {
            paging
        } else {
            format!("{where_clause} {paging}")
        };

        Statement {
            query,
            values: self.values.clone(),
        }
    }
}

struct Condition {
    text: String,
    // Caller-supplied templates may contain OR, so they get parenthesized when combined
    raw: bool,
}

/// Assembles a [`FilterStatement`] from conditions that are ANDed together.
///
/// ```ignore
/// let statement = StatementBuilder::new()
///     .equals("name", Value::text("Prebid creative"))
///     .equals("advertiserId", Value::number(advertiser_id))
///     .build();
///
/// assert_eq!(
///     statement.where_clause(),
///     "WHERE name = :name AND advertiserId = :advertiser_id"
/// );
/// ```
pub struct StatementBuilder {
    conditions: Vec<Condition>,
    values: Vec<BoundParameter>,
    limit: usize,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            values: Vec::new(),
            limit: SUGGESTED_PAGE_LIMIT,
        }
    }

    /// Add a condition written by hand, e.g. `status = :status OR isArchived = :archived`. A
    /// leading `WHERE` is accepted and dropped. Bind its placeholders with [`Self::with_value`].
    pub fn where_clause(mut self, template: impl AsRef<str>) -> Self {
        let text = strip_where_keyword(template.as_ref());
        if !text.is_empty() {
            self.conditions.push(Condition {
                text: text.to_string(),
                raw: true,
            });
        }
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.push(BoundParameter::new(key, value));
        self
    }

    /// Add `<field> = :<key>`, where the key is the snake-cased field name
    pub fn equals(mut self, field: &str, value: Value) -> Self {
        let key = self.unique_key(field.to_snake_case());
        self.conditions.push(Condition {
            text: format!("{field} = :{key}"),
            raw: false,
        });
        self.values.push(BoundParameter::new(key, value));
        self
    }

    /// Add `<field> IN (:<key>_0, :<key>_1, ...)` with one parameter per element
    pub fn is_in(mut self, field: &str, values: impl IntoIterator<Item = Value>) -> Self {
        let base = field.to_snake_case();

        let placeholders: Vec<String> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let key = self.unique_key(format!("{base}_{index}"));
                let placeholder = format!(":{key}");
                self.values.push(BoundParameter::new(key, value));
                placeholder
            })
            .collect();

        self.conditions.push(Condition {
            text: format!("{field} IN ({})", placeholders.join(", ")),
            raw: false,
        });
        self
    }

    /// Page size for a single fetch such as [`crate::lookup`]. A [`crate::Paginator`] replaces
    /// it with its own page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(self) -> FilterStatement {
        let combined = self.conditions.len() > 1;

        let where_clause = if self.conditions.is_empty() {
            String::new()
        } else {
            let conditions: Vec<String> = self
                .conditions
                .into_iter()
                .map(|condition| {
                    if combined && condition.raw {
                        format!("({})", condition.text)
                    } else {
                        condition.text
                    }
                })
                .collect();
            format!("WHERE {}", conditions.join(" AND "))
        };

        FilterStatement {
            where_clause,
            values: self.values,
            limit: self.limit,
            offset: 0,
        }
    }

    /// The key itself if unused so far, otherwise the key with the first free numeric suffix
    fn unique_key(&self, key: String) -> String {
        let taken = |candidate: &str| self.values.iter().any(|v| v.key == candidate);

        if !taken(&key) {
            return key;
        }

        let mut suffix = 1;
        loop {
            let candidate = format!("{key}_{suffix}");
            if !taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_where_keyword(template: &str) -> &str {
    let template = template.trim();
    match template.get(..5) {
        Some(keyword)
            if keyword.eq_ignore_ascii_case("where")
                && template[5..].starts_with(char::is_whitespace) =>
        {
            template[5..].trim_start()
        }
        _ => template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_text_includes_paging() {
        let mut statement = FilterStatement::new(
            "WHERE advertiserId = :advertiser_id",
            vec![BoundParameter::new("advertiser_id", Value::number(42))],
        );

        assert_eq!(
            statement.to_statement().query,
            "WHERE advertiserId = :advertiser_id LIMIT 500 OFFSET 0"
        );

        statement.offset = 1000;
        assert_eq!(
            statement.to_statement().query,
            "WHERE advertiserId = :advertiser_id LIMIT 500 OFFSET 1000"
        );
    }

    #[test]
    fn unfiltered_statement() {
        let statement = StatementBuilder::new().limit(10).build();

        assert_eq!(statement.where_clause(), "");
        assert_eq!(statement.to_statement().query, "LIMIT 10 OFFSET 0");
        assert!(statement.values().is_empty());
    }

    #[test]
    fn equality_conditions_are_anded_with_typed_parameters() {
        let statement = StatementBuilder::new()
            .equals("name", Value::text("Prebid creative"))
            .equals("advertiserId", Value::number("8675309"))
            .build();

        assert_eq!(
            statement.where_clause(),
            "WHERE name = :name AND advertiserId = :advertiser_id"
        );
        assert_eq!(
            statement.values(),
            &[
                BoundParameter::new("name", Value::Text("Prebid creative".into())),
                BoundParameter::new("advertiser_id", Value::Number("8675309".into())),
            ]
        );
    }

    #[test]
    fn repeated_fields_get_distinct_keys() {
        let statement = StatementBuilder::new()
            .equals("name", Value::text("a"))
            .equals("name", Value::text("b"))
            .build();

        assert_eq!(
            statement.where_clause(),
            "WHERE name = :name AND name = :name_1"
        );
    }

    #[test]
    fn in_condition_binds_each_element() {
        let statement = StatementBuilder::new()
            .is_in(
                "name",
                ["Leaderboard", "Sidebar"].into_iter().map(Value::text),
            )
            .build();

        assert_eq!(statement.where_clause(), "WHERE name IN (:name_0, :name_1)");
        assert_eq!(
            statement
                .values()
                .iter()
                .map(|v| v.key.as_str())
                .collect::<Vec<_>>(),
            vec!["name_0", "name_1"]
        );
    }

    #[test]
    fn raw_templates() {
        let statement = StatementBuilder::new()
            .where_clause("WHERE status = :status")
            .with_value("status", Value::text("DRAFT"))
            .build();
        assert_eq!(statement.where_clause(), "WHERE status = :status");

        let statement = StatementBuilder::new()
            .where_clause("status = :status OR isArchived = :archived")
            .with_value("status", Value::text("DRAFT"))
            .with_value("archived", Value::boolean(true))
            .equals("orderId", Value::number(1))
            .build();
        assert_eq!(
            statement.where_clause(),
            "WHERE (status = :status OR isArchived = :archived) AND orderId = :order_id"
        );

        // Not the keyword, just a field that starts with it
        let statement = StatementBuilder::new()
            .where_clause("whereabouts = :w")
            .build();
        assert_eq!(statement.where_clause(), "WHERE whereabouts = :w");
    }
}
