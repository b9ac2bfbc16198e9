//! Dotted paths into item objects, e.g. `answer.commentary_en`.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::FieldPathError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(FieldPathError::Empty);
        }
        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError::EmptySegment {
                path: trimmed.to_string(),
            });
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Mutable access to the string at this path.
    ///
    /// Returns `None` when any step is missing or not an object, or when the
    /// target is not a string.
    pub fn string_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut String> {
        let (last, parents) = self.segments.split_last()?;
        let mut current = value;
        for segment in parents {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        match current.as_object_mut()?.get_mut(last)? {
            Value::String(text) => Some(text),
            _ => None,
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_dotted_paths() {
        let path = FieldPath::parse("answer.commentary_en").unwrap();
        assert_eq!(path.segments(), ["answer", "commentary_en"]);
        assert_eq!(path.to_string(), "answer.commentary_en");
    }

    #[test]
    fn rejects_empty_paths() {
        assert_eq!(FieldPath::parse("  "), Err(FieldPathError::Empty));
        assert_eq!(
            FieldPath::parse("answer..x"),
            Err(FieldPathError::EmptySegment {
                path: "answer..x".to_string()
            })
        );
    }

    #[test]
    fn finds_nested_strings_only() {
        let path = FieldPath::parse("answer.ayah_ar").unwrap();
        let mut item = json!({ "answer": { "ayah_ar": "text" } });
        path.string_mut(&mut item).unwrap().push('!');
        assert_eq!(item["answer"]["ayah_ar"], "text!");

        let mut not_string = json!({ "answer": { "ayah_ar": 3 } });
        assert!(path.string_mut(&mut not_string).is_none());
        let mut no_answer = json!({ "answer": [] });
        assert!(path.string_mut(&mut no_answer).is_none());
    }
}
