use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::application::services::{
    ArtifactScanner, BomProcessor, PomParser, TransitiveResolver,
};
use crate::ports::inbound::ResolutionConsumer;
use crate::ports::outbound::{ArtifactVerifier, PomFinder, PomReader, ProgressReporter};
use crate::resolution::domain::{ArtifactKey, MavenCoordinate};
use crate::resolution::services::SubstitutionPlanner;
use crate::shared::error::ResolverError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

/// ResolveDependenciesUseCase - resolves a build's declared dependencies
/// against the locally installed Maven artifacts
///
/// # Type Parameters
/// * `R` - PomReader implementation behind the shared parser
/// * `F` - PomFinder implementation (directory walk or index)
/// * `V` - ArtifactVerifier implementation
/// * `PR` - ProgressReporter implementation
///
/// The parser carries the session's cache. Build one parser per use case
/// and share it with the finder so both see the same memoized POMs.
pub struct ResolveDependenciesUseCase<R, F, V, PR>
where
    R: PomReader,
{
    parser: Arc<PomParser<R>>,
    finder: F,
    verifier: V,
    progress_reporter: PR,
}

impl<R, F, V, PR> ResolveDependenciesUseCase<R, F, V, PR>
where
    R: PomReader,
    F: PomFinder,
    V: ArtifactVerifier,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(parser: Arc<PomParser<R>>, finder: F, verifier: V, progress_reporter: PR) -> Self {
        Self {
            parser,
            finder,
            verifier,
            progress_reporter,
        }
    }

    pub fn parser(&self) -> &Arc<PomParser<R>> {
        &self.parser
    }

    /// Executes one resolution run
    ///
    /// # Errors
    /// Fails only when the request declares nothing. Missing POMs and jars
    /// are reported in the response, not as errors.
    pub fn execute(&self, request: &ResolveRequest) -> Result<ResolveResponse> {
        if request.is_empty() {
            return Err(ResolverError::Validation {
                message: "No dependencies or plugins declared. Nothing to resolve.".to_string(),
            }
            .into());
        }

        let declared = request.declared();
        self.progress_reporter.report(&format!(
            "📋 Resolving {} declared dependencies and {} plugins",
            request.dependencies.len(),
            request.plugins.len()
        ));

        // Step 1: Expand BOMs
        let boms = BomProcessor::new(&self.finder, self.parser.as_ref()).process(&declared);
        if !boms.processed_boms.is_empty() {
            self.progress_reporter.report(&format!(
                "📦 Processed {} BOM(s) managing {} versions",
                boms.processed_boms.len(),
                boms.managed_versions.len()
            ));
        }

        // Step 2: Match declared identities to installed artifacts
        let scan = ArtifactScanner::new(self.parser.as_ref(), &self.finder, &self.verifier)
            .scan(&declared, &boms);
        self.progress_reporter.report(&format!(
            "🔍 Found {} of {} declared identities on the system",
            scan.system_artifacts.len(),
            declared.len()
        ));

        // Step 3: Roots are the installed artifacts. BOMs never get here and
        // test-only declarations stay, flagged through test context.
        let roots: BTreeMap<ArtifactKey, MavenCoordinate> = scan.system_artifacts.clone();

        // Step 4: Transitive closure
        self.progress_reporter
            .report("🔗 Resolving transitive dependencies...");
        let transitive = TransitiveResolver::new(self.parser.as_ref(), &self.finder, &self.verifier)
            .with_managed_versions(boms.version_lookup())
            .resolve(&roots, &scan.system_artifacts);
        self.progress_reporter.report(&format!(
            "   - Transitive dependencies: {}",
            transitive.true_transitive.len()
        ));

        // Step 5: Test context, after the walk has propagated and cleared flags
        let test_context = transitive.test_context();

        // Step 6: Substitutions for the host
        let substitutions = SubstitutionPlanner::plan(
            &request.dependencies,
            &transitive.resolved,
            &boms.managed_versions,
        );

        let mut skipped = scan.skipped;
        for (key, reason) in transitive.skipped {
            skipped.entry(key).or_insert(reason);
        }
        skipped.retain(|key, _| !transitive.resolved.contains_key(key));

        let mut not_found = scan.not_found;
        not_found.extend(transitive.not_found);
        not_found.retain(|key| !transitive.resolved.contains_key(key));

        for key in &not_found {
            self.progress_reporter
                .report_error(&format!("⚠️  Not found on the system: {}", key));
        }

        self.progress_reporter.report_completion(&format!(
            "Resolved {} artifacts ({} skipped, {} not found)",
            transitive.resolved.len(),
            skipped.len(),
            not_found.len()
        ));

        Ok(ResolveResponse {
            resolved: transitive.resolved,
            true_transitive: transitive.true_transitive,
            managed_versions: boms.managed_versions,
            processed_boms: boms.processed_boms,
            bom_entries: boms.bom_entries,
            skipped,
            not_found,
            provided: transitive.provided,
            test_context,
            substitutions,
            plugins: scan.plugins,
        })
    }

    /// Runs a resolution on behalf of a host build
    ///
    /// Declared dependencies come from the consumer. It then receives the
    /// resolved map once, followed by each substitution in order.
    pub fn apply<C: ResolutionConsumer + ?Sized>(&self, consumer: &mut C) -> Result<ResolveResponse> {
        let request = ResolveRequest::new(
            consumer.declared_dependencies(),
            consumer.declared_plugins(),
        );
        let response = self.execute(&request)?;

        consumer.accept_resolved(&response.resolved);
        for substitution in &response.substitutions {
            consumer.accept_substitution(substitution);
        }
        Ok(response)
    }
}
