use serde::Deserialize;
use serde::de::Error as DeError;

/// `charged_amount`, `prefix`, `country_code` and message timestamps arrive as a
/// JSON number on some CheckMobi endpoints and as a string on others. Both are
/// normalized to the string the server wrote, with numbers taken token-for-token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportText(String);

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        if token.starts_with('"') {
            return serde_json::from_str::<String>(token)
                .map(Self)
                .map_err(D::Error::custom);
        }
        if token.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            return Ok(Self(token.to_owned()));
        }
        Err(D::Error::custom(format!(
            "expected a string or number, got `{token}`"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::TransportText;

    #[derive(Debug, serde::Deserialize)]
    struct Charge {
        charged_amount: Option<TransportText>,
        prefix: Option<TransportText>,
    }

    fn charge(json: &str) -> (Option<String>, Option<String>) {
        let parsed = serde_json::from_str::<Charge>(json).unwrap();
        (
            parsed.charged_amount.map(TransportText::into_string),
            parsed.prefix.map(TransportText::into_string),
        )
    }

    #[test]
    fn sub_cent_amounts_keep_trailing_zeros() {
        let (amount, _) = charge(r#"{"charged_amount": 0.0050}"#);
        assert_eq!(amount.as_deref(), Some("0.0050"));
    }

    #[test]
    fn prefix_as_number_or_string_reads_the_same() {
        assert_eq!(charge(r#"{"prefix": 44}"#).1.as_deref(), Some("44"));
        assert_eq!(charge(r#"{"prefix": "44"}"#).1.as_deref(), Some("44"));
    }

    #[test]
    fn missing_and_null_fields_are_none() {
        assert_eq!(charge(r#"{"charged_amount": null}"#), (None, None));
    }

    #[test]
    fn boolean_amount_is_rejected() {
        let err = serde_json::from_str::<Charge>(r#"{"charged_amount": false}"#).unwrap_err();
        assert!(err.to_string().contains("expected a string or number"));
    }
}
