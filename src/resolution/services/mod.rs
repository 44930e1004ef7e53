pub mod dependency_management;
pub mod direct_dependencies;
pub mod filename_matcher;
pub mod plugin_candidates;
pub mod property_resolver;
pub mod substitution_planner;

pub use dependency_management::{
    DependencyManagementResolver, ManagedDependencies, ManagedDependency,
};
pub use direct_dependencies::{DirectDependencies, DirectDependencyResolver};
pub use filename_matcher::PomFilenameMatcher;
pub use plugin_candidates::PluginCandidates;
pub use property_resolver::{PropertyResolver, MAX_SUBSTITUTION_ROUNDS};
pub use substitution_planner::SubstitutionPlanner;
