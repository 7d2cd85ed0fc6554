use std::fmt;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
        }
    }

    /// Parse a string into a `CellValue` with type inference.
    /// Tries: null -> bool -> int -> float -> string, working on the
    /// trimmed input; the string fallback keeps the trimmed form.
    ///
    /// Integers with leading zeros stay strings so that codes like "007"
    /// survive the import. Non-finite float spellings ("nan", "inf") also
    /// stay strings; a missing value is [`CellValue::Null`], never a NaN.
    #[must_use]
    pub fn parse(s: &str) -> CellValue {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return CellValue::Null;
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "true" => return CellValue::Bool(true),
            "false" => return CellValue::Bool(false),
            _ => {}
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            if trimmed.len() > 1 && trimmed.starts_with('0') {
                return CellValue::String(trimmed.to_string());
            }
            return CellValue::Int(i);
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }

        CellValue::String(trimmed.to_string())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_null() {
        assert_eq!(CellValue::parse(""), CellValue::Null);
        assert_eq!(CellValue::parse("  "), CellValue::Null);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(CellValue::parse("true"), CellValue::Bool(true));
        assert_eq!(CellValue::parse("FALSE"), CellValue::Bool(false));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(CellValue::parse("42"), CellValue::Int(42));
        assert_eq!(CellValue::parse("-123"), CellValue::Int(-123));
        assert_eq!(CellValue::parse("0"), CellValue::Int(0));
    }

    #[test]
    fn test_parse_keeps_leading_zeros() {
        assert_eq!(
            CellValue::parse("007"),
            CellValue::String("007".to_string())
        );
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(CellValue::parse("1.422"), CellValue::Float(1.422));
        assert_eq!(CellValue::parse("-2.5"), CellValue::Float(-2.5));
    }

    #[test]
    fn test_parse_non_finite_stays_string() {
        assert_eq!(
            CellValue::parse("nan"),
            CellValue::String("nan".to_string())
        );
        assert_eq!(
            CellValue::parse("inf"),
            CellValue::String("inf".to_string())
        );
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(
            CellValue::parse("ageGroup"),
            CellValue::String("ageGroup".to_string())
        );
    }

    #[test]
    fn test_parse_trims_text_fallback() {
        assert_eq!(
            CellValue::parse("  ageGroup "),
            CellValue::String("ageGroup".to_string())
        );
    }

    #[test]
    fn test_display_and_as_str() {
        assert_eq!(CellValue::Null.as_str(), "");
        assert_eq!(CellValue::Int(3).to_string(), "3");
        assert_eq!(CellValue::Float(0.492).as_str(), "0.492");
        assert_eq!(
            CellValue::String("x".to_string()).to_string(),
            "x".to_string()
        );
    }

    #[test]
    fn test_is_null() {
        assert!(CellValue::Null.is_null());
        assert!(!CellValue::String(String::new()).is_null());
        assert!(!CellValue::Int(0).is_null());
    }
}
