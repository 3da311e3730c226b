//! Single-purpose SQL builders.
//!
//! Each builder renders one statement kind plus the ordered list of values
//! bound to its `?` placeholders. Conditions passed to `filter` are raw SQL
//! fragments; values belong in `add_params`, never in the condition text.

use std::fmt;

use rusqlite::types::Value;

/// Rendered statement and its positional parameters.
pub trait Query {
    fn sql(&self) -> String;
    fn params(&self) -> &[Value];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

fn extend_params<I, V>(target: &mut Vec<Value>, values: I)
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    target.extend(values.into_iter().map(Into::into));
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(",")
}

#[derive(Debug, Clone)]
pub struct SelectQuery {
    select: String,
    filter: Option<String>,
    order_by: Option<String>,
    params: Vec<Value>,
}

impl SelectQuery {
    /// `SELECT <columns> FROM <table>`. Pass `"*"` for every column.
    pub fn select(table: &str, columns: &str) -> Self {
        SelectQuery {
            select: format!("SELECT {} FROM {}", columns, table),
            filter: None,
            order_by: None,
            params: Vec::new(),
        }
    }

    pub fn filter(mut self, condition: &str) -> Self {
        self.filter = Some(format!("WHERE {}", condition));
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some(format!("ORDER BY {} {}", field, direction));
        self
    }

    pub fn add_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        extend_params(&mut self.params, values);
        self
    }
}

impl Query for SelectQuery {
    fn sql(&self) -> String {
        let mut query = self.select.clone();
        for clause in [&self.filter, &self.order_by].into_iter().flatten() {
            query.push('\n');
            query.push_str(clause);
        }
        query
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[derive(Debug, Clone)]
pub struct InsertQuery {
    head: String,
    values: String,
    params: Vec<Value>,
}

impl InsertQuery {
    /// `INSERT INTO <table> (<columns>) VALUES (?,…)` with one placeholder per column.
    pub fn insert_into(table: &str, columns: &[&str]) -> Self {
        InsertQuery {
            head: format!("INSERT INTO {} ({})", table, columns.join(",")),
            values: format!("VALUES ({})", placeholders(columns.len())),
            params: Vec::new(),
        }
    }

    pub fn values<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add_params(values)
    }

    pub fn add_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        extend_params(&mut self.params, values);
        self
    }
}

impl Query for InsertQuery {
    fn sql(&self) -> String {
        format!("{} {}", self.head, self.values)
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQuery {
    head: String,
    filter: Option<String>,
    params: Vec<Value>,
}

impl UpdateQuery {
    /// `UPDATE <table> SET c1 = ?, c2 = ?, …`
    pub fn update(table: &str, columns: &[&str]) -> Self {
        let assignments = columns
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        UpdateQuery {
            head: format!("UPDATE {} SET {}", table, assignments),
            filter: None,
            params: Vec::new(),
        }
    }

    pub fn filter(mut self, condition: &str) -> Self {
        self.filter = Some(format!("WHERE {}", condition));
        self
    }

    /// Values bind in order: the SET columns first, then any filter placeholders.
    pub fn add_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        extend_params(&mut self.params, values);
        self
    }
}

impl Query for UpdateQuery {
    fn sql(&self) -> String {
        match &self.filter {
            Some(filter) => format!("{}\n{}", self.head, filter),
            None => self.head.clone(),
        }
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[derive(Debug, Clone)]
pub struct DeleteQuery {
    head: String,
    filter: Option<String>,
    params: Vec<Value>,
}

impl DeleteQuery {
    pub fn delete_from(table: &str) -> Self {
        DeleteQuery {
            head: format!("DELETE FROM {}", table),
            filter: None,
            params: Vec::new(),
        }
    }

    pub fn filter(mut self, condition: &str) -> Self {
        self.filter = Some(format!("WHERE {}", condition));
        self
    }

    pub fn add_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        extend_params(&mut self.params, values);
        self
    }
}

impl Query for DeleteQuery {
    fn sql(&self) -> String {
        match &self.filter {
            Some(filter) => format!("{}\n{}", self.head, filter),
            None => self.head.clone(),
        }
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}
