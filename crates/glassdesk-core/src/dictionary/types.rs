//! Dictionary entry types as returned by the upstream lookup service.
//!
//! Field names on the wire are the service's own (`madde`, `anlamlarListe`,
//! ...). Missing fields are defaulted and unknown ones ignored, since the
//! upstream schema is not under our control.

use serde::{Deserialize, Deserializer, Serialize};

/// One headword record from a lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "madde_id", default)]
    pub id: String,
    /// The headword as displayed.
    #[serde(rename = "madde", default)]
    pub headword: String,
    /// Headword without diacritics.
    #[serde(rename = "madde_duz", default, skip_serializing_if = "Option::is_none")]
    pub plain_headword: Option<String>,
    #[serde(rename = "lisan", default, skip_serializing_if = "Option::is_none")]
    pub origin_language: Option<String>,
    #[serde(rename = "telaffuz", default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Comma separated compound words built on this headword.
    #[serde(rename = "birlesikler", default, skip_serializing_if = "Option::is_none")]
    pub compounds: Option<String>,
    #[serde(rename = "on_taki", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(rename = "taki", default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(rename = "cogul_mu", default, skip_serializing_if = "Option::is_none")]
    pub plural_flag: Option<String>,
    #[serde(rename = "ozel_mi", default, skip_serializing_if = "Option::is_none")]
    pub proper_noun_flag: Option<String>,
    #[serde(rename = "anlamlarListe", default)]
    pub meanings: Vec<Meaning>,
}

impl WordEntry {
    /// Compound words, split and trimmed. Empty when the entry has none.
    pub fn compound_list(&self) -> Vec<&str> {
        self.compounds
            .as_deref()
            .map(|c| {
                c.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_plural(&self) -> bool {
        self.plural_flag.as_deref() == Some("1")
    }

    pub fn is_proper_noun(&self) -> bool {
        self.proper_noun_flag.as_deref() == Some("1")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "anlam_id", default)]
    pub id: String,
    #[serde(rename = "anlam", default)]
    pub text: String,
    #[serde(rename = "orneklerListe", default, deserialize_with = "null_as_empty")]
    pub examples: Vec<Example>,
}

/// A usage example attached to a meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "ornek", default)]
    pub text: String,
    #[serde(rename = "yazar", default, deserialize_with = "first_author")]
    pub author: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "tam_adi", default)]
    pub full_name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// The service sends the author either as an object or as a list of them.
fn first_author<'de, D>(deserializer: D) -> Result<Option<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Author),
        Many(Vec<Author>),
    }

    Ok(
        match Option::<OneOrMany>::deserialize(deserializer)? {
            Some(OneOrMany::One(author)) => Some(author),
            Some(OneOrMany::Many(authors)) => authors.into_iter().next(),
            None => None,
        },
    )
}
