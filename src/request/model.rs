use serde::Deserialize;

/// `email` is checked against the token; `volunteerEmail` selects the rows.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    pub email: Option<String>,
    pub volunteer_email: Option<String>,
}
