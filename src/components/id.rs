use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace the base game registers its own content under.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespaced identifier of a registered enchantment, effect, item or book,
/// e.g. `botania:mana_gush`. The namespace is the id of the mod that owns
/// the entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdentifierError {
    EmptyNamespace(String),
    EmptyPath(String),
    InvalidNamespace(String),
    InvalidPath(String),
}

impl fmt::Display for ParseIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdentifierError::EmptyNamespace(raw) => {
                write!(f, "Empty namespace in identifier `{}`", raw)
            }
            ParseIdentifierError::EmptyPath(raw) => {
                write!(f, "Empty path in identifier `{}`", raw)
            }
            ParseIdentifierError::InvalidNamespace(raw) => {
                write!(f, "Invalid character in namespace of identifier `{}`", raw)
            }
            ParseIdentifierError::InvalidPath(raw) => {
                write!(f, "Invalid character in path of identifier `{}`", raw)
            }
        }
    }
}

impl Identifier {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_default_namespace(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }
}

fn valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn valid_path_char(c: char) -> bool {
    valid_namespace_char(c) || c == '/'
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    /// A bare path with no `:` takes the default namespace, so
    /// `"stone"` parses as `minecraft:stone`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, s),
        };

        if namespace.is_empty() {
            return Err(ParseIdentifierError::EmptyNamespace(s.to_string()));
        }
        if path.is_empty() {
            return Err(ParseIdentifierError::EmptyPath(s.to_string()));
        }
        if !namespace.chars().all(valid_namespace_char) {
            return Err(ParseIdentifierError::InvalidNamespace(s.to_string()));
        }
        // A second `:` lands in the path and is rejected here.
        if !path.chars().all(valid_path_char) {
            return Err(ParseIdentifierError::InvalidPath(s.to_string()));
        }

        Ok(Identifier::new(namespace, path))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_namespaced() {
        let id: Identifier = "botania:mana_gush".parse().unwrap();
        assert_eq!(id.namespace(), "botania");
        assert_eq!(id.path(), "mana_gush");
        assert!(!id.is_default_namespace());
    }

    #[rstest]
    fn parse_bare_path_defaults_namespace() {
        let id: Identifier = "night_vision".parse().unwrap();
        assert_eq!(id, Identifier::new(DEFAULT_NAMESPACE, "night_vision"));
        assert!(id.is_default_namespace());
    }

    #[rstest]
    fn parse_rejects_empty_parts() {
        assert_eq!(
            "".parse::<Identifier>(),
            Err(ParseIdentifierError::EmptyPath("".to_string()))
        );
        assert_eq!(
            ":stone".parse::<Identifier>(),
            Err(ParseIdentifierError::EmptyNamespace(":stone".to_string()))
        );
        assert_eq!(
            "botania:".parse::<Identifier>(),
            Err(ParseIdentifierError::EmptyPath("botania:".to_string()))
        );
    }

    #[rstest]
    fn parse_rejects_invalid_characters() {
        assert_eq!(
            "Botania:lexicon".parse::<Identifier>(),
            Err(ParseIdentifierError::InvalidNamespace(
                "Botania:lexicon".to_string()
            ))
        );
        assert_eq!(
            "botania:lexicon pages".parse::<Identifier>(),
            Err(ParseIdentifierError::InvalidPath(
                "botania:lexicon pages".to_string()
            ))
        );
        assert_eq!(
            "a:b:c".parse::<Identifier>(),
            Err(ParseIdentifierError::InvalidPath("a:b:c".to_string()))
        );
    }

    #[rstest]
    fn display_round_trip() {
        let id = Identifier::new("patchouli", "guide_book");
        assert_eq!(id.to_string(), "patchouli:guide_book");
        assert_eq!(id.to_string().parse::<Identifier>().unwrap(), id);
    }

    #[rstest]
    fn serde_string_form() {
        let id = Identifier::new("extraalchemy", "effect.recall");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"extraalchemy:effect.recall\"");
        assert_eq!(serde_json::from_str::<Identifier>(&json).unwrap(), id);
        assert!(serde_json::from_str::<Identifier>("\"No Namespace Here\"").is_err());
    }
}
