use std::fmt;

/// Opaque token from a verification or deletion link.
///
/// Only presence is checked: an absent or empty `token` parameter is no token.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Wrap a value the router already pulled out of the query string.
    pub fn from_param(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens authorize account actions; keep them out of logs.
impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerificationToken(len={})", self.0.len())
    }
}
