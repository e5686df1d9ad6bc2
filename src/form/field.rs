//! State for a single validated input.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// One input slot: its raw value, whether the user has interacted with it,
/// and the messages for every rule the current value violates.
///
/// `errors` is always current. `touched` only decides whether they are shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub errors: Vec<String>,
}

impl FieldState {
    /// Empty, untouched field carrying the errors of the empty input.
    #[must_use]
    pub fn new(errors: Vec<String>) -> Self {
        Self { value: String::new(), touched: false, errors }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors the presentation layer should display: none until touched.
    #[must_use]
    pub fn visible_errors(&self) -> &[String] {
        if self.touched { &self.errors } else { &[] }
    }

    pub(crate) fn reset(&mut self, errors: Vec<String>) {
        *self = Self::new(errors);
    }
}
