//! Classification and rendering of configuration lines

use crate::args::ReplacementTable;

/// One line of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine<'a> {
    /// Exactly one `=`; key and value are trimmed.
    Settable { key: &'a str, value: &'a str },
    /// Anything else: blank lines, comments, section headers, `x=y=z`.
    PassThrough(&'a str),
}

impl<'a> ConfigLine<'a> {
    /// Classify a raw line, terminator included.
    ///
    /// A `=` inside a quoted value still counts, so `key = "a=b"` passes
    /// through untouched.
    pub fn parse(raw: &'a str) -> ConfigLine<'a> {
        let mut parts = raw.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => ConfigLine::Settable {
                key: key.trim(),
                value: value.trim(),
            },
            _ => ConfigLine::PassThrough(raw),
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        match self {
            ConfigLine::Settable { key, .. } => Some(*key),
            ConfigLine::PassThrough(_) => None,
        }
    }

    /// Render the line for the rewritten file.
    ///
    /// Settable lines are normalized to `key = value\n` whether or not the
    /// table overrides them.
    pub fn render(&self, table: &ReplacementTable) -> String {
        match self {
            ConfigLine::Settable { key, value } => {
                let value = table.get(key).unwrap_or(*value);
                format!("{} = {}\n", key, value)
            }
            ConfigLine::PassThrough(raw) => raw.to_string(),
        }
    }
}
