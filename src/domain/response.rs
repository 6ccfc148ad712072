#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageInformation {
    pub id: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub status: Option<String>,
    pub charged_amount: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberInformation {
    pub country_code: Option<u32>,
    pub country_iso_code: Option<String>,
    pub carrier: Option<String>,
    pub is_mobile: Option<bool>,
    pub e164_format: Option<String>,
    pub formatting: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRequestResponse {
    pub id: String,
    pub validation_type: Option<String>,
    /// Number the user must dial for `cli` / `reverse_cli` flows.
    pub dial_number: Option<String>,
    pub validation_info: Option<NumberInformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyPinResponse {
    pub validated: bool,
    pub number: Option<String>,
    pub validation_date: Option<i64>,
    pub charged_amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStatus {
    pub validated: bool,
    pub number: Option<String>,
    pub validation_date: Option<i64>,
    pub charged_amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryPrefix {
    pub iso: Option<String>,
    pub name: Option<String>,
    pub prefix: Option<String>,
}

/// Remote configuration is account-defined, so it is kept as raw JSON.
pub type RemoteConfig = serde_json::Value;
