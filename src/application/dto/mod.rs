/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use case and the adapters.
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolve_request::{ResolveRequest, PLUGIN_MARKER_SUFFIX};
pub use resolve_response::ResolveResponse;
