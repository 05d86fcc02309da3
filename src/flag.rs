//! Interpretation of loosely typed on/off flags found in YAML documents.

use serde_yaml::Value;

/// Spellings accepted as "on", compared after trimming and lowercasing.
const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

/// Interpret a YAML node as a boolean flag.
///
/// Booleans are taken as-is and strings are matched against [`TRUTHY`].
/// Every other node (numbers included) is false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => {
            let text = text.trim().to_lowercase();
            TRUTHY.contains(&text.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_booleans_pass_through() {
        assert!(is_truthy(&Value::Bool(true)));
        assert!(!is_truthy(&Value::Bool(false)));
        assert!(is_truthy(&yaml("true")));
        assert!(!is_truthy(&yaml("false")));
    }

    #[test]
    fn test_truthy_strings() {
        let cases = ["1", "true", "yes", "on", " YES ", "True", "\tOn\n", "TRUE"];
        for case in cases {
            assert!(
                is_truthy(&Value::String(case.to_string())),
                "expected {case:?} to be truthy"
            );
        }
    }

    #[test]
    fn test_falsy_strings() {
        let cases = ["", "0", "no", "off", "false", "y", "enabled", "1.0", "yes please"];
        for case in cases {
            assert!(
                !is_truthy(&Value::String(case.to_string())),
                "expected {case:?} to be falsy"
            );
        }
    }

    #[test]
    fn test_quoted_yaml_strings_are_strings() {
        assert!(is_truthy(&yaml("'yes'")));
        assert!(is_truthy(&yaml("\"1\"")));
        // serde_yaml follows YAML 1.2, so bare `yes`/`on` are strings too
        assert!(is_truthy(&yaml("yes")));
        assert!(is_truthy(&yaml("on")));
    }

    #[test]
    fn test_other_types_are_false() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&yaml("1")));
        assert!(!is_truthy(&yaml("0")));
        assert!(!is_truthy(&yaml("1.5")));
        assert!(!is_truthy(&yaml("[yes]")));
        assert!(!is_truthy(&yaml("{on: true}")));
    }
}
