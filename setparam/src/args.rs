use std::collections::BTreeMap;

use text_colorizer::Colorize;

use crate::error::{ArgsError, USAGE};

/// Replacement values keyed by setting name, built from `key=val` arguments.
///
/// The table is read-only once built. A key given twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: BTreeMap<String, String>,
}

impl ReplacementTable {
    /// Build a table from command-line arguments, program name excluded.
    ///
    /// Every argument is split on each `=`: the first segment is the key and
    /// the second is the value, anything after a second `=` is dropped.
    pub fn from_args<I, S>(args: I) -> Result<ReplacementTable, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();

        for arg in args {
            let arg = arg.as_ref();
            if !arg.contains('=') {
                return Err(ArgsError::MissingSeparator(arg.to_string()));
            }

            let mut parts = arg.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            if key.is_empty() {
                return Err(ArgsError::EmptyKey(arg.to_string()));
            }

            entries.insert(key.to_string(), value.to_string());
        }

        if entries.is_empty() {
            return Err(ArgsError::NoParameters);
        }

        Ok(ReplacementTable { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Print the usage message for a rejected command line to stderr.
pub fn print_usage(error: &ArgsError) {
    if let Some(arg) = error.argument() {
        eprintln!("{} - invalid parameter {}", "setparam".green(), arg.yellow());
    }
    eprintln!("{}", USAGE);
    eprintln!(
        "Usage: {} {} {}",
        "setparam".green(),
        "key=val".yellow(),
        "[key=val ...]".blue()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let table = ReplacementTable::from_args(["NTrustees=3"]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("NTrustees"), Some("3"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let table = ReplacementTable::from_args(["a=1", "b=2", "a=3"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some("3"));
        assert_eq!(table.get("b"), Some("2"));
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let table = ReplacementTable::from_args(["PCAPFolder="]).unwrap();
        assert_eq!(table.get("PCAPFolder"), Some(""));
    }

    #[test]
    fn test_extra_separators_keep_first_two_segments() {
        let table = ReplacementTable::from_args(["a=b=c"]).unwrap();
        assert_eq!(table.get("a"), Some("b"));
    }

    #[test]
    fn test_key_and_value_are_not_trimmed() {
        let table = ReplacementTable::from_args(["Name= \"x\""]).unwrap();
        assert_eq!(table.get("Name"), Some(" \"x\""));
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = ReplacementTable::from_args(["a=1", "foo"]).unwrap_err();
        assert_eq!(err, ArgsError::MissingSeparator("foo".to_string()));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = ReplacementTable::from_args(["=5"]).unwrap_err();
        assert_eq!(err, ArgsError::EmptyKey("=5".to_string()));
    }

    #[test]
    fn test_no_arguments_is_rejected() {
        let err = ReplacementTable::from_args(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ArgsError::NoParameters);
    }

    #[test]
    fn test_keys_are_sorted() {
        let table = ReplacementTable::from_args(["b=1", "c=2", "a=3"]).unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(table.contains_key("c"));
        assert!(!table.contains_key("d"));
        assert!(!table.is_empty());
    }
}
