pub mod coordinate;
pub mod declared_dependency;
pub mod pom_model;
pub mod property_map;
pub mod resolution_state;
pub mod skip_reason;
pub mod substitution;

pub use coordinate::{ArtifactKey, MavenCoordinate, Packaging, Scope};
pub use declared_dependency::DeclaredDependency;
pub use pom_model::{ParentRef, PomHierarchy, PomModel, RawDependency};
pub use property_map::{contains_placeholder, PropertyMap, IMPLICIT_PROPERTIES};
pub use resolution_state::ResolutionState;
pub use skip_reason::SkipReason;
pub use substitution::{Substitution, SubstitutionReason, UNSPECIFIED_VERSION};
