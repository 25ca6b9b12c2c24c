//! Institution data model matching the OpenAlex `/institutions` schema.

use serde::{Deserialize, Serialize};

use super::common::{country_code, null_as_default};
use super::{
    CountsByYear, DehydratedConcept, Geo, Ids, InstitutionType, InstitutionalRelationship,
    Reference,
};

/// A university, company, hospital or other research organisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    /// OpenAlex id URL, e.g. `https://openalex.org/I114027177`.
    pub id: String,

    #[serde(default)]
    pub ror: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default, deserialize_with = "country_code")]
    pub country_code: Option<String>,

    #[serde(default, rename = "type")]
    pub institution_type: Option<InstitutionType>,

    #[serde(default)]
    pub homepage_url: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name_acronyms: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name_alternatives: Vec<String>,

    #[serde(default)]
    pub works_count: Option<u64>,

    #[serde(default)]
    pub cited_by_count: Option<u64>,

    #[serde(default)]
    pub ids: Option<Ids>,

    #[serde(default)]
    pub geo: Option<Geo>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub associated_institutions: Vec<AssociatedInstitution>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub x_concepts: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counts_by_year: Vec<CountsByYear>,

    #[serde(default)]
    pub works_api_url: Option<String>,

    #[serde(default)]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub created_date: Option<String>,
}

/// Institution as embedded in authorships and author records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedInstitution {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub ror: Option<String>,

    #[serde(default, deserialize_with = "country_code")]
    pub country_code: Option<String>,

    #[serde(default, rename = "type")]
    pub institution_type: Option<InstitutionType>,
}

impl Reference for DehydratedInstitution {
    fn reference_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A parent, child or related institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociatedInstitution {
    #[serde(flatten)]
    pub institution: DehydratedInstitution,

    #[serde(default)]
    pub relationship: Option<InstitutionalRelationship>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_institution_type_and_relationships() {
        let inst: Institution = serde_json::from_value(json!({
            "id": "https://openalex.org/I1",
            "type": "education",
            "country_code": "US",
            "associated_institutions": [
                {"id": "https://openalex.org/I2", "type": "healthcare", "relationship": "child"}
            ]
        }))
        .unwrap();

        assert_eq!(inst.institution_type, Some(InstitutionType::Education));
        let child = &inst.associated_institutions[0];
        assert_eq!(child.relationship, Some(InstitutionalRelationship::Child));
        assert_eq!(child.institution.short_id(), Some("I2"));
    }

    #[test]
    fn test_bad_country_code_is_rejected() {
        let result = serde_json::from_value::<DehydratedInstitution>(json!({"country_code": "Norway"}));
        assert!(result.is_err());
    }
}
