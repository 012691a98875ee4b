use serde::{Deserialize, Serialize};

/// How late/early flags are rendered in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagEncoding {
    #[default]
    Bool,
    YesNo,
    Numeric,
}

/// Rendered flag, serialized without a tag so JSON gets `true`, `"Yes"` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(u8),
    Text(String),
}

impl FlagEncoding {
    pub fn encode(&self, flag: bool) -> FlagValue {
        match self {
            FlagEncoding::Bool => FlagValue::Bool(flag),
            FlagEncoding::YesNo => FlagValue::Text(if flag { "Yes" } else { "No" }.to_string()),
            FlagEncoding::Numeric => FlagValue::Number(u8::from(flag)),
        }
    }
}

impl FlagValue {
    /// Interpret any encoding back as a boolean (used when reading summaries).
    pub fn is_set(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Number(n) => *n != 0,
            FlagValue::Text(s) => s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true"),
        }
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Number(n) => write!(f, "{n}"),
            FlagValue::Text(s) => write!(f, "{s}"),
        }
    }
}
