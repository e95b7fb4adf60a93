//! Query parameter building.
//!
//! [`QueryPairs`] collects the named parameters of a single API call in
//! insertion order. Optional parameters that are absent are never pushed, so
//! they never reach the outgoing query string.

use std::fmt::Display;

/// Trait for types that can be converted to query parameter pairs.
///
/// Implemented by the per-method options structs; fields left `None` must not
/// produce a pair.
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}

/// Insertion-ordered query parameters for a single request.
///
/// Values are formatted with [`Display`], so `1.0_f64` serializes as `1` and
/// `37.788022` keeps its full precision. No validation or encoding happens
/// here; percent-encoding is applied when the pairs are appended to the URL.
///
/// # Example
///
/// ```
/// use yelp_core::QueryPairs;
///
/// let params = QueryPairs::new()
///     .pair("lat", 37.788022)
///     .pair("long", -122.399797)
///     .opt_pair("cc", None::<&str>);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn pair(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Appends a parameter when the value is present, otherwise does nothing.
    #[must_use]
    pub fn opt_pair<V: Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.pair(name, value),
            None => self,
        }
    }

    /// Appends every pair produced by `params`.
    #[must_use]
    pub fn extend_from(mut self, params: &impl ToQueryPairs) -> Self {
        self.pairs.extend(params.to_query_pairs());
        self
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume into the underlying pairs.
    #[must_use]
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_keep_insertion_order() {
        let params = QueryPairs::new()
            .pair("lat", 37.788022)
            .pair("long", -122.399797)
            .pair("radius", 20);

        let pairs = params.into_vec();
        assert_eq!(
            pairs,
            vec![
                ("lat".to_string(), "37.788022".to_string()),
                ("long".to_string(), "-122.399797".to_string()),
                ("radius".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn absent_values_are_omitted() {
        let params = QueryPairs::new()
            .pair("phone", "6505833244")
            .opt_pair("cc", None::<&str>);

        assert_eq!(params.len(), 1);
        assert!(params.iter().all(|(name, _)| name != "cc"));
    }

    #[test]
    fn present_optional_values_are_kept() {
        let params = QueryPairs::new()
            .pair("location", "Noe Valley, San Francisco CA")
            .opt_pair("cc", Some("US"));

        let pairs = params.into_vec();
        assert_eq!(pairs.last(), Some(&("cc".to_string(), "US".to_string())));
    }

    #[test]
    fn whole_numbers_format_without_fraction() {
        let params = QueryPairs::new().pair("lat", 1.0).pair("long", 2.0);

        let pairs = params.into_vec();
        assert_eq!(
            pairs,
            vec![
                ("lat".to_string(), "1".to_string()),
                ("long".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn extend_from_options() {
        struct Filters {
            term: Option<String>,
            category: Option<String>,
        }

        impl ToQueryPairs for Filters {
            fn to_query_pairs(&self) -> Vec<(String, String)> {
                QueryPairs::new()
                    .opt_pair("term", self.term.as_deref())
                    .opt_pair("category", self.category.as_deref())
                    .into_vec()
            }
        }

        let filters = Filters {
            term: Some("sushi".to_string()),
            category: None,
        };

        let params = QueryPairs::new().pair("lat", 1.0).extend_from(&filters);
        let pairs = params.into_vec();
        assert_eq!(
            pairs,
            vec![
                ("lat".to_string(), "1".to_string()),
                ("term".to_string(), "sushi".to_string()),
            ]
        );
    }
}
