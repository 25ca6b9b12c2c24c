//! Value objects shared by several entity records, plus the lenient field decoders.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Decode `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept either a single string or a list of strings.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

/// Numeric ids such as `mag` arrive as JSON numbers or strings.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

/// Latest year a record may claim. Preprints dated into next year are common.
#[must_use]
pub fn max_publication_year() -> i32 {
    Utc::now().year() + 1
}

fn check_year<E: de::Error>(year: i32) -> Result<i32, E> {
    let max = max_publication_year();
    if (0..=max).contains(&year) {
        Ok(year)
    } else {
        Err(E::custom(format!("year {year} outside 0..={max}")))
    }
}

pub(crate) fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    check_year(i32::deserialize(deserializer)?)
}

pub(crate) fn optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer)?.map(check_year::<D::Error>).transpose()
}

/// ISO 3166-1 alpha-2 codes only.
pub(crate) fn country_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(code) if code.chars().count() != 2 => {
            Err(de::Error::custom(format!("country code must be two characters: {code:?}")))
        }
        other => Ok(other),
    }
}

fn strip<'a>(value: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    value.map(|v| v.strip_prefix(prefix).unwrap_or(v))
}

/// External identifiers attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ids {
    #[serde(default)]
    pub openalex: Option<String>,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default)]
    pub pmid: Option<String>,

    #[serde(default)]
    pub pmcid: Option<String>,

    /// Microsoft Academic Graph id.
    #[serde(default, deserialize_with = "string_or_number")]
    pub mag: Option<String>,

    #[serde(default)]
    pub orcid: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,

    #[serde(default)]
    pub wikipedia: Option<String>,

    #[serde(default)]
    pub wikidata: Option<String>,

    #[serde(default)]
    pub scopus: Option<String>,

    #[serde(default)]
    pub ror: Option<String>,

    #[serde(default)]
    pub grid: Option<String>,

    #[serde(default)]
    pub issn_l: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub issn: Vec<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub umls_aui: Vec<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub umls_cui: Vec<String>,
}

impl Ids {
    /// DOI without the `https://doi.org/` resolver prefix.
    #[must_use]
    pub fn doi_id(&self) -> Option<&str> {
        strip(self.doi.as_deref(), "https://doi.org/")
    }

    /// PubMed id without the `https://pubmed.ncbi.nlm.nih.gov/` prefix.
    #[must_use]
    pub fn pmid_id(&self) -> Option<&str> {
        strip(self.pmid.as_deref(), "https://pubmed.ncbi.nlm.nih.gov/")
    }

    /// ORCID without the `https://orcid.org/` prefix.
    #[must_use]
    pub fn orcid_id(&self) -> Option<&str> {
        strip(self.orcid.as_deref(), "https://orcid.org/")
    }

    /// Wikidata QID without the entity URL prefix.
    #[must_use]
    pub fn wikidata_id(&self) -> Option<&str> {
        let id = strip(self.wikidata.as_deref(), "https://www.wikidata.org/wiki/");
        strip(id, "https://www.wikidata.org/entity/")
    }
}

/// Yearly citation and output counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsByYear {
    #[serde(deserialize_with = "year")]
    pub year: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cited_by_count: u64,

    #[serde(default)]
    pub works_count: Option<u64>,
}

/// Volume, issue and page range of a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biblio {
    #[serde(default)]
    pub volume: Option<String>,

    #[serde(default)]
    pub issue: Option<String>,

    #[serde(default)]
    pub first_page: Option<String>,

    #[serde(default)]
    pub last_page: Option<String>,
}

/// Open access status of a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAccess {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_oa: bool,

    #[serde(default)]
    pub oa_status: Option<super::OpenAccessStatus>,

    #[serde(default)]
    pub oa_url: Option<String>,
}

/// MeSH subject heading attached to a PubMed-indexed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesh {
    pub descriptor_ui: String,

    pub descriptor_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_major_topic: bool,

    #[serde(default)]
    pub qualifier_ui: Option<String>,

    #[serde(default)]
    pub qualifier_name: Option<String>,
}

/// Location of an institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub geonames_city_id: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default, deserialize_with = "country_code")]
    pub country_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}
