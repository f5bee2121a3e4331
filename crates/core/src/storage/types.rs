/// Condition applied to the sort key of a partition query.
///
/// Prefix matching is the only operator the key design needs: "all of a tag"
/// and "children of a parent" are both prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKeyCondition {
    /// Sort key starts with the prefix.
    BeginsWith(String),
}

impl SortKeyCondition {
    /// Creates a prefix condition.
    pub fn begins_with(prefix: impl Into<String>) -> Self {
        SortKeyCondition::BeginsWith(prefix.into())
    }

    /// Returns true if the sort key satisfies this condition.
    pub fn matches(&self, sort_key: &str) -> bool {
        match self {
            SortKeyCondition::BeginsWith(prefix) => sort_key.starts_with(prefix.as_str()),
        }
    }
}
