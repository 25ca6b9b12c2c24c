//! Single-entity lookups.

use super::OpenAlexClient;
use crate::error::{ClientError, ClientResult};
use crate::id::EntityId;
use crate::models::{AnyEntity, Author, Concept, Entity, Institution, Venue, Work};

impl OpenAlexClient {
    /// Get any entity by OpenAlex id, classifying it by its prefix.
    ///
    /// Returns `Ok(None)` when the service answers 404. Namespaced ids cannot
    /// be classified; use [`Self::get_work`] for `doi:` and `pmid:` lookups.
    ///
    /// # Errors
    ///
    /// Returns error on empty or unrecognized ids and on API failure.
    pub async fn get_entity(&self, id: &str) -> ClientResult<Option<AnyEntity>> {
        let id = EntityId::parse(id)?;
        let entity_type = id.entity_type().ok_or_else(|| ClientError::unrecognized(id.to_string()))?;

        let url = self.entity_url(entity_type, &id.to_string())?;
        self.execute(url)
            .await?
            .into_optional()?
            .map(|value| entity_type.decode(value))
            .transpose()
    }

    /// Get an entity of a statically known type.
    ///
    /// Namespaced ids are passed through unchanged; a canonical id with
    /// another type's prefix is rejected before any request is made.
    ///
    /// # Errors
    ///
    /// Returns error on invalid ids and on API failure.
    pub async fn get<T: Entity>(&self, id: &str) -> ClientResult<Option<T>> {
        let id = EntityId::parse(id)?;
        match id.entity_type() {
            Some(found) if found != T::TYPE => {
                return Err(ClientError::invalid_argument(format!(
                    "{id} is a {found} id, not a {} id",
                    T::TYPE
                )));
            }
            _ => {}
        }

        let url = self.entity_url(T::TYPE, &id.to_string())?;
        self.execute(url).await?.into_optional()?.map(|value| T::decode(T::TYPE, value)).transpose()
    }

    /// Get a single work by OpenAlex id or namespaced id (`doi:...`, `pmid:...`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_work(&self, id: &str) -> ClientResult<Option<Work>> {
        self.get(id).await
    }

    /// Get a single author by id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author(&self, id: &str) -> ClientResult<Option<Author>> {
        self.get(id).await
    }

    /// Get a single institution by id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_institution(&self, id: &str) -> ClientResult<Option<Institution>> {
        self.get(id).await
    }

    /// Get a single venue by id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_venue(&self, id: &str) -> ClientResult<Option<Venue>> {
        self.get(id).await
    }

    /// Get a single concept by id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_concept(&self, id: &str) -> ClientResult<Option<Concept>> {
        self.get(id).await
    }
}
