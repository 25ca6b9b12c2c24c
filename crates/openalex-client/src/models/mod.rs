//! Data models for OpenAlex entities.
//!
//! Every field except `id` is optional and `null` decodes like an absent field;
//! values that break the schema (years out of range, malformed country codes)
//! fail decoding.

mod author;
mod common;
mod concept;
mod entity;
mod enums;
mod institution;
mod response;
mod venue;
mod work;

pub use author::{Author, DehydratedAuthor};
pub use common::{Biblio, CountsByYear, Geo, Ids, Mesh, OpenAccess, max_publication_year};
pub use concept::{Concept, DehydratedConcept};
pub use entity::{AnyEntity, Decode, Entity, EntityType, Reference};
pub use enums::{InstitutionType, InstitutionalRelationship, OpenAccessStatus, VersionType, WorkType};
pub use institution::{AssociatedInstitution, DehydratedInstitution, Institution};
pub use response::{ListResponse, Meta};
pub use venue::{DehydratedVenue, HostVenue, Venue};
pub use work::{Authorship, Work};
