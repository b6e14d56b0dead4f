//! Splitting a free-text patient name into FHIR search terms

/// Given/family pair sent to the FHIR store as search filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub given: String,
    pub family: String,
}

impl NameQuery {
    /// Split `full_name` on whitespace: first token is the given name,
    /// second is the family name, anything after that is dropped.
    ///
    /// A single token leaves `family` empty.
    pub fn parse(full_name: &str) -> Self {
        let mut tokens = full_name.split_whitespace();
        let given = tokens.next().unwrap_or_default().to_string();
        let family = tokens.next().unwrap_or_default().to_string();
        Self { given, family }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tokens() {
        let q = NameQuery::parse("John Smith");
        assert_eq!(q.given, "John");
        assert_eq!(q.family, "Smith");
    }

    #[test]
    fn extra_tokens_are_dropped() {
        let q = NameQuery::parse("Mary Ann Jones");
        assert_eq!(q.given, "Mary");
        assert_eq!(q.family, "Ann");
    }

    #[test]
    fn single_token_leaves_family_empty() {
        let q = NameQuery::parse("Cher");
        assert_eq!(q.given, "Cher");
        assert_eq!(q.family, "");
    }

    #[test]
    fn surrounding_and_repeated_whitespace() {
        let q = NameQuery::parse("  Wei \t  Zhang \n");
        assert_eq!(q.given, "Wei");
        assert_eq!(q.family, "Zhang");
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(NameQuery::parse("   "), NameQuery::default());
    }
}
