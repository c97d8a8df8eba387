use serde::{Deserialize, Serialize};

/// User preferences, stored under `settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_shape() {
        let json = serde_json::to_string(&Preferences { dark_mode: true }).unwrap();
        assert_eq!(json, r#"{"darkMode":true}"#);

        let parsed: Preferences = serde_json::from_str("{}").unwrap();
        assert!(!parsed.dark_mode);
    }
}
