pub mod property_precedence;
pub mod scope_priority;
pub mod version_ordering;

pub use property_precedence::PropertyPrecedence;
pub use scope_priority::ScopePriority;
pub use version_ordering::VersionOrdering;
