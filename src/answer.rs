use std::fmt;

use serde::Serialize;

/// The value printed for a puzzle. Most answers are numbers; a few are text
/// such as rendered screens or crate labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(v) => write!(f, "{}", v),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(v: $t) -> Self {
                    Answer::Int(v as i64)
                }
            }
        )*
    };
}

from_int!(i32, i64, u32, u64, usize, u8);

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_value() {
        assert_eq!(Answer::from(42usize).to_string(), "42");
        assert_eq!(Answer::from("CMZ").to_string(), "CMZ");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Answer::from(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Answer::from("x")).unwrap(), "\"x\"");
    }
}
