use serde_json::Value;

/// Convert a JSON value into the string form used for classification.
///
/// Strings pass through verbatim. Numbers keep the literal they were parsed
/// from, so integers of any length stay exact digits and floats keep their
/// fraction or exponent (`3.0`, `1e3`, `1e+16`) and never read as integers.
/// Booleans become `True`/`False`, null becomes `None`, and arrays/objects
/// render as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(literal: &str) -> Value {
        serde_json::from_str(literal).unwrap()
    }

    #[test]
    fn test_string_passes_through() {
        assert_eq!(stringify(&json!("abc")), "abc");
        assert_eq!(stringify(&json!(" 4 ")), " 4 ");
        assert_eq!(stringify(&json!("")), "");
    }

    #[test]
    fn test_integers() {
        assert_eq!(stringify(&json!(7)), "7");
        assert_eq!(stringify(&json!(-3)), "-3");
        assert_eq!(stringify(&json!(0)), "0");
        assert_eq!(stringify(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_integers_beyond_u64_stay_exact() {
        assert_eq!(
            stringify(&parsed("100000000000000000000")),
            "100000000000000000000"
        );
        assert_eq!(
            stringify(&parsed("-12345678901234567890123")),
            "-12345678901234567890123"
        );
    }

    #[test]
    fn test_floats_keep_fraction() {
        assert_eq!(stringify(&parsed("3.0")), "3.0");
        assert_eq!(stringify(&parsed("2.5")), "2.5");
        assert_eq!(stringify(&parsed("-0.25")), "-0.25");
    }

    #[test]
    fn test_floats_keep_exponent() {
        assert_eq!(stringify(&parsed("1e3")), "1e3");
        assert_eq!(stringify(&parsed("1e+16")), "1e+16");
        assert_eq!(stringify(&parsed("2.5E-4")), "2.5E-4");
    }

    #[test]
    fn test_booleans_and_null() {
        assert_eq!(stringify(&json!(true)), "True");
        assert_eq!(stringify(&json!(false)), "False");
        assert_eq!(stringify(&Value::Null), "None");
    }

    #[test]
    fn test_containers_render_as_compact_json() {
        assert_eq!(stringify(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(stringify(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
