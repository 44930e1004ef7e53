/// Resolution domain - coordinate model, pure resolution services and policies
///
/// Nothing in this module touches the filesystem; it works on POM models
/// handed in by the application layer.
pub mod domain;
pub mod policies;
pub mod services;
