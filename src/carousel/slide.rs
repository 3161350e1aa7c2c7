use serde::{Deserialize, Serialize};

/// One banner record as served by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Banner identifier. Numeric ids from the API are kept as their string form.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "imageUrl", alias = "image")]
    pub image_url: String,
    #[serde(default, alias = "linkTarget", alias = "link")]
    pub link_target: Option<String>,
}

impl Slide {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            link_target: None,
        }
    }

    pub fn with_link(mut self, link_target: impl Into<String>) -> Self {
        self.link_target = Some(link_target.into());
        self
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
