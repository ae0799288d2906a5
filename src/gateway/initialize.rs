use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct InitializeRequest<'a> {
    /// Customer identity on the gateway side
    pub email: &'a str,
    /// Amount in minor units (kobo)
    pub amount: u64,
    pub metadata: InitializeMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeMetadata<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub course: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct InitializeData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}
