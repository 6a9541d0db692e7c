use serde::Deserialize;

/// `?domain=` on the mutation links. A missing parameter reads as empty.
#[derive(Deserialize, Debug, Default)]
pub struct DomainQuery {
    #[serde(default)]
    pub domain: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct AddRecordForm {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub ip: String,
}
