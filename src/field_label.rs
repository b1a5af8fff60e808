//! Field Label Lookup
//!
//! Maps a qualified field name such as `items[0]-fallback` to the label shown
//! above the input and the canonical key the value is stored under.

use std::fmt;

/// Prefix of the array holding the order lines
pub const ITEMS_FIELD: &str = "items";

/// Kind of field, taken from the suffix after the first `-`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Url,
    Item,
    Fallback,
    Unknown(String),
}

impl FieldKind {
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "name" => Self::Name,
            "url" => Self::Url,
            "item" => Self::Item,
            "fallback" => Self::Fallback,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Parse the kind out of a full field name, e.g. `items[2]-item`
    pub fn from_qualified(name: &str) -> Self {
        Self::from_suffix(name.split('-').nth(1).unwrap_or(""))
    }

    pub fn suffix(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Url => "url",
            Self::Item => "item",
            Self::Fallback => "fallback",
            Self::Unknown(s) => s,
        }
    }
}

/// Display label and canonical key for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    pub label: &'static str,
    pub key: &'static str,
}

impl FieldLabel {
    pub const BLANK: FieldLabel = FieldLabel { label: "", key: "" };

    pub fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

/// Resolve a field kind through the fixed label table.
///
/// Unknown kinds degrade to a blank label and key; a warning is logged so the
/// unhandled field shows up in the console instead of silently rendering bare.
pub fn resolve(kind: &FieldKind) -> FieldLabel {
    match kind {
        FieldKind::Name => FieldLabel { label: "Restaurant Name", key: "item" },
        FieldKind::Url => FieldLabel { label: "Menu Link", key: "url" },
        FieldKind::Item => FieldLabel { label: "Item", key: "item" },
        FieldKind::Fallback => FieldLabel { label: "Fallback", key: "fallback" },
        FieldKind::Unknown(suffix) => {
            log::warn!("[FIELD] No label for field suffix {:?}", suffix);
            FieldLabel::BLANK
        }
    }
}

/// Qualified name of one field in one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub row: usize,
    pub kind: FieldKind,
}

impl FieldName {
    pub fn new(row: usize, kind: FieldKind) -> Self {
        Self { row, kind }
    }

    /// Parse `items[<row>]-<suffix>`; `None` when the row part is malformed
    pub fn parse(name: &str) -> Option<Self> {
        let (head, suffix) = name.split_once('-')?;
        let row = head
            .strip_prefix(ITEMS_FIELD)?
            .strip_prefix('[')?
            .strip_suffix(']')?
            .parse()
            .ok()?;
        let suffix = suffix.split('-').next().unwrap_or("");
        Some(Self::new(row, FieldKind::from_suffix(suffix)))
    }

    pub fn qualified(&self) -> String {
        self.to_string()
    }

    pub fn label(&self) -> FieldLabel {
        resolve(&self.kind)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]-{}", ITEMS_FIELD, self.row, self.kind.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        let cases = [
            ("items[0]-name", "Restaurant Name", "item"),
            ("items[0]-url", "Menu Link", "url"),
            ("items[0]-item", "Item", "item"),
            ("items[0]-fallback", "Fallback", "fallback"),
        ];
        for (name, label, key) in cases {
            let resolved = resolve(&FieldKind::from_qualified(name));
            assert_eq!(resolved.label, label, "label for {}", name);
            assert_eq!(resolved.key, key, "key for {}", name);
        }
    }

    #[test]
    fn test_unknown_suffix_degrades_to_blank() {
        let kind = FieldKind::from_qualified("items[3]-garbage");
        assert_eq!(kind, FieldKind::Unknown("garbage".to_string()));
        let resolved = resolve(&kind);
        assert_eq!(resolved.label, "");
        assert_eq!(resolved.key, "");
        assert!(resolved.is_blank());
    }

    #[test]
    fn test_name_without_suffix_is_unknown() {
        assert_eq!(FieldKind::from_qualified("items[0]"), FieldKind::Unknown(String::new()));
    }

    #[test]
    fn test_field_name_parse_and_format() {
        let name = FieldName::parse("items[12]-fallback").unwrap();
        assert_eq!(name.row, 12);
        assert_eq!(name.kind, FieldKind::Fallback);
        assert_eq!(name.qualified(), "items[12]-fallback");

        assert!(FieldName::parse("orders[1]-item").is_none());
        assert!(FieldName::parse("items[x]-item").is_none());
        assert!(FieldName::parse("_form").is_none());
    }
}
