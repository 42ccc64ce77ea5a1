//! File name matching against the configured schema extension.

/// How a file name is compared with the schema extension token (`.graphql`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtensionMatch {
    /// The name contains the token anywhere, so `a.graphqlx` and
    /// `a.graphql.bak` match `graphql`.
    #[default]
    Contains,
    /// The name ends with the token.
    Suffix,
}

impl ExtensionMatch {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Suffix } else { Self::Contains }
    }

    /// Check `file_name` against `extension` (with or without a leading dot).
    #[must_use]
    pub fn matches(self, file_name: &str, extension: &str) -> bool {
        let token = extension_token(extension);
        match self {
            Self::Contains => file_name.contains(&token),
            Self::Suffix => file_name.ends_with(&token),
        }
    }
}

/// `graphql` and `.graphql` both become `.graphql`.
fn extension_token(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.'))
}
