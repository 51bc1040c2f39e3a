#[derive(Debug, Clone, PartialEq, Eq)]
/// The input string could not be interpreted as a decimal number.
pub struct ParseDecimalError {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot interpret '{}' as a decimal.", self.input)
    }
}

impl std::error::Error for ParseDecimalError {}
