use url::form_urlencoded;

/// Ordered collection of named string parameters for a request.
///
/// Parameters are encoded as a query string for GET requests and as a
/// form-encoded body for POST requests. Insertion order is preserved in the
/// encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Percent-encode every name and value individually and join the pairs
    /// with `&` as `name=value` (application/x-www-form-urlencoded).
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_insertion_order() {
        let params = Params::new()
            .param("zebra", "1")
            .param("apple", "2")
            .param("mango", "3");

        assert_eq!(params.encode(), "zebra=1&apple=2&mango=3");
    }

    #[test]
    fn test_encode_escapes_names_and_values() {
        let params = Params::new()
            .param("email", "test@example.com")
            .param("full name", "Jane Doe");

        assert_eq!(
            params.encode(),
            "email=test%40example.com&full+name=Jane+Doe"
        );
    }

    #[test]
    fn test_empty_bag_encodes_to_empty_string() {
        assert_eq!(Params::new().encode(), "");
        assert!(Params::new().is_empty());
    }

    #[test]
    fn test_encode_round_trips() {
        let params = Params::new()
            .param("email", "test@example.com")
            .param("newsletter", "false")
            .param("note", "a b&c=d");

        let encoded = params.encode();
        let decoded: Params = form_urlencoded::parse(encoded.as_bytes())
            .map(|(n, v)| (n.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(decoded, params);
    }
}
