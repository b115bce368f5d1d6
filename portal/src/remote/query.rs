//! PostgREST query encoding.

use url::Url;

use crate::error::RemoteError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Filter {
    Eq(String, String),
    /// Case-insensitive substring match.
    Contains(String, String),
}

/// Read filters for a table select; encoded as PostgREST query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    columns: Option<String>,
    filters: Vec<Filter>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict returned columns; defaults to `*`.
    #[must_use]
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_owned());
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push(Filter::Eq(column.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn contains(mut self, column: &str, needle: &str) -> Self {
        self.filters.push(Filter::Contains(column.to_owned(), needle.to_owned()));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_owned(), ascending));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters in the order they are appended to the URL.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_owned(), self.columns.clone().unwrap_or_else(|| "*".to_owned()))];
        for filter in &self.filters {
            pairs.push(match filter {
                Filter::Eq(column, value) => (column.clone(), format!("eq.{value}")),
                Filter::Contains(column, needle) => (column.clone(), format!("ilike.*{needle}*")),
            });
        }
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            pairs.push(("order".to_owned(), format!("{column}.{direction}")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }

    /// Append the encoded parameters to a table URL.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Decode`] when `base` is not a valid URL.
    pub fn url(&self, base: &str) -> Result<String, RemoteError> {
        let mut url = Url::parse(base).map_err(|e| RemoteError::Decode(format!("invalid table URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.to_pairs() {
                pairs.append_pair(&key, &value);
            }
        }
        Ok(url.into())
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
