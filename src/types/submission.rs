use std::collections::HashMap;

/// One complete set of submitted field values.
///
/// The explicit stand-in for an ambient request body: the caller builds it
/// from whatever the transport delivered and hands it to
/// [`Validator::validate()`](super::Validator::validate). An empty
/// submission is still a submission; a request that carried none at all is
/// expressed by passing `None` to `validate()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    fields: HashMap<String, String>,
}

impl Submission {
    /// Create an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Consuming builder form.
    #[must_use]
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field value (mutable reference version).
    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_owned(), value.to_owned());
    }

    /// Look up a submitted value. `None` if the field was not submitted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub(crate) fn to_values(&self) -> HashMap<String, String> {
        self.fields.clone()
    }
}

impl From<HashMap<String, String>> for Submission {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}
