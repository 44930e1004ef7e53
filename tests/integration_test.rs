/// Integration tests for the application layer
mod test_utilities;

use std::sync::Arc;
use sysdeps::prelude::*;
use test_utilities::fixtures::*;
use test_utilities::mocks::*;

fn key(gav: &str) -> ArtifactKey {
    MavenCoordinate::parse(gav).unwrap().key()
}

fn declared(values: &[&str]) -> Vec<DeclaredDependency> {
    values
        .iter()
        .map(|v| DeclaredDependency::parse(v, false).unwrap())
        .collect()
}

fn execute(repo: Repository, dependencies: &[&str]) -> ResolveResponse {
    repo.use_case(MockProgressReporter::new())
        .execute(&ResolveRequest::new(declared(dependencies), vec![]))
        .unwrap()
}

mod pom_pipeline_tests {
    use super::*;

    fn chain_properties(levels: usize) -> String {
        let mut xml = String::from("<properties>");
        for level in 1..levels {
            xml.push_str(&format!("<k{}>${{k{}}}</k{}>", level, level + 1, level));
        }
        xml.push_str(&format!("<k{}>done</k{}>", levels, levels));
        xml.push_str("</properties>");
        xml
    }

    fn chained_version(levels: usize) -> String {
        let repo = Repository::new().artifact(
            "g:app:1",
            &format!(
                "{}<dependencies>{}</dependencies>",
                chain_properties(levels),
                dependency("g", "lib", "${k1}", "")
            ),
        );
        let parser = repo.parser();
        let dependencies = parser.dependencies(&pom_path("app"));
        dependencies[&key("g:lib")].version.clone()
    }

    #[test]
    fn test_twenty_level_property_chain_resolves() {
        assert_eq!(chained_version(20), "done");
    }

    #[test]
    fn test_twenty_one_level_property_chain_stays_partial() {
        let version = chained_version(21);
        assert!(version.contains("${"), "{}", version);
    }

    fn parent_child_repo() -> Repository {
        Repository::new()
            .document(
                "parent",
                &project(
                    "g",
                    "parent",
                    "1",
                    "<packaging>pom</packaging><properties><lib.version>1.0</lib.version>\
                     <shared.version>3.3</shared.version></properties>",
                ),
            )
            .document(
                "child",
                &format!(
                    "<project><parent><groupId>g</groupId><artifactId>parent</artifactId>\
                     <version>1</version></parent><artifactId>child</artifactId>\
                     <properties><lib.version>2.0</lib.version></properties>\
                     <dependencies>{}{}</dependencies></project>",
                    dependency("g", "lib", "${lib.version}", ""),
                    dependency("g", "shared", "${shared.version}", "")
                ),
            )
    }

    fn resolve_child(precedence: PropertyPrecedence) -> Vec<(String, String)> {
        let repo = parent_child_repo();
        let parser = PomParser::new(
            repo.reader.clone(),
            Arc::new(ResolutionCache::new()),
            precedence,
        );
        parser
            .dependencies(&pom_path("child"))
            .values()
            .map(|c| (c.artifact_id.clone(), c.version.clone()))
            .collect()
    }

    #[test]
    fn test_descendant_property_wins() {
        let versions = resolve_child(PropertyPrecedence::DescendantWins);
        assert!(versions.contains(&("lib".to_string(), "2.0".to_string())));
        assert!(versions.contains(&("shared".to_string(), "3.3".to_string())));
    }

    #[test]
    fn test_ancestor_property_wins() {
        let versions = resolve_child(PropertyPrecedence::AncestorWins);
        assert!(versions.contains(&("lib".to_string(), "1.0".to_string())));
        assert!(versions.contains(&("shared".to_string(), "3.3".to_string())));
    }

    #[test]
    fn test_child_dependency_management_overrides_parent() {
        let repo = Repository::new()
            .document(
                "parent",
                &project(
                    "g",
                    "parent",
                    "1",
                    &format!(
                        "<dependencyManagement><dependencies>{}</dependencies></dependencyManagement>",
                        dependency("g", "a", "1.0", "")
                    ),
                ),
            )
            .document(
                "child",
                &format!(
                    "<project><parent><groupId>g</groupId><artifactId>parent</artifactId>\
                     <version>1</version></parent><artifactId>child</artifactId>\
                     <dependencyManagement><dependencies>{}</dependencies></dependencyManagement>\
                     <dependencies>{}</dependencies></project>",
                    dependency("g", "a", "2.0", ""),
                    dependency("g", "a", "", "")
                ),
            );

        let parser = repo.parser();
        let dependencies = parser.dependencies(&pom_path("child"));
        assert_eq!(dependencies[&key("g:a")].version, "2.0");
    }

    #[test]
    fn test_parent_chain_is_bounded() {
        let mut repo = Repository::new().document("level0", &project("g", "level0", "1", ""));
        for level in 1..15 {
            repo = repo.document(
                &format!("level{}", level),
                &format!(
                    "<project><parent><groupId>g</groupId><artifactId>level{}</artifactId>\
                     <version>1</version></parent><artifactId>level{}</artifactId></project>",
                    level - 1,
                    level
                ),
            );
        }

        let parser = repo.parser();
        assert_eq!(parser.hierarchy(&pom_path("level14")).len(), 10);
    }

    #[test]
    fn test_each_pom_read_once_per_session() {
        let repo = Repository::new().artifact(
            "g:app:1",
            &format!("<dependencies>{}</dependencies>", dependency("g", "lib", "1", "")),
        );
        let parser = repo.parser();
        let path = pom_path("app");

        parser.dependencies(&path);
        parser.coordinate(&path);
        parser.dependency_management(&path);
        assert_eq!(repo.reader.read_count(), 1);

        // a second session starts from an empty cache
        repo.parser().dependencies(&path);
        assert_eq!(repo.reader.read_count(), 2);
    }
}

mod resolution_tests {
    use super::*;

    fn deps(entries: &[(&str, &str)]) -> String {
        let body: String = entries
            .iter()
            .map(|(a, scope)| dependency("g", a, "1", scope))
            .collect();
        format!("<dependencies>{}</dependencies>", body)
    }

    #[test]
    fn test_diamond_resolves_each_identity_once() {
        let repo = Repository::new()
            .artifact("g:a:1", &deps(&[("b", ""), ("c", "")]))
            .artifact("g:b:1", &deps(&[("d", "")]))
            .artifact("g:c:1", &deps(&[("d", "")]))
            .artifact("g:d:1", "");

        let response = execute(repo, &["g:a"]);
        assert_eq!(response.resolved.len(), 4);
        assert_eq!(response.true_transitive.len(), 3);
        assert!(response.skipped.is_empty());
    }

    #[test]
    fn test_test_scope_only_in_skipped() {
        let repo = Repository::new()
            .artifact("g:app:1", &deps(&[("junit", "test")]))
            .artifact("g:junit:1", "");

        let response = execute(repo, &["g:app"]);
        assert!(!response.resolved.contains_key(&key("g:junit")));
        assert_eq!(response.skipped[&key("g:junit")], SkipReason::Test);
    }

    #[test]
    fn test_pom_typed_dependency_never_becomes_artifact() {
        let repo = Repository::new()
            .artifact(
                "g:app:1",
                "<dependencies><dependency><groupId>g</groupId><artifactId>platform</artifactId>\
                 <version>1</version><type>pom</type></dependency></dependencies>",
            )
            .artifact("g:platform:1", "");

        let response = execute(repo, &["g:app"]);
        assert!(!response.resolved.contains_key(&key("g:platform")));
        assert_eq!(response.skipped[&key("g:platform")], SkipReason::Bom);
    }

    #[test]
    fn test_bom_version_fills_unresolved_property() {
        let repo = Repository::new()
            .artifact(
                "g:root:1",
                &format!(
                    "<dependencies>{}</dependencies>",
                    dependency("d", "a", "${d.version}", "compile")
                ),
            )
            .bom("b:bom:1", &["d:a:2.0"])
            .artifact("d:a:2.0", "");

        let response = execute(repo, &["g:root", "b:bom"]);
        assert_eq!(response.resolved[&key("d:a")].gav(), "d:a:2.0");
        assert_eq!(response.managed_versions[&key("d:a")], "2.0");
        assert!(response.processed_boms.contains(&key("b:bom")));
        assert!(!response.resolved.contains_key(&key("b:bom")));
    }

    #[test]
    fn test_mutually_referencing_boms_are_idempotent() {
        let repo = || {
            Repository::new()
                .bom("b:bom-a:1", &["b:bom-b:1", "x:one:1.0"])
                .bom("b:bom-b:1", &["b:bom-a:1", "x:two:2.0"])
        };

        let first = execute(repo(), &["b:bom-a"]);
        let second = execute(repo(), &["b:bom-a"]);

        assert_eq!(first.processed_boms.len(), 2);
        assert_eq!(first.managed_versions[&key("x:one")], "1.0");
        assert_eq!(first.managed_versions[&key("x:two")], "2.0");
        assert_eq!(first.processed_boms, second.processed_boms);
        assert_eq!(first.managed_versions, second.managed_versions);
    }

    #[test]
    fn test_missing_pom_and_jar_are_reported() {
        let reporter = MockProgressReporter::new();
        let repo = Repository::new()
            .artifact("g:app:1", &deps(&[("ghost", "")]))
            .pom_without_jar("g:nojar:1", "");

        let response = repo
            .use_case(reporter.clone())
            .execute(&ResolveRequest::new(declared(&["g:app", "g:nojar"]), vec![]))
            .unwrap();

        assert!(response.not_found.contains(&key("g:ghost")));
        assert_eq!(response.skipped[&key("g:nojar")], SkipReason::ArtifactMissing);
        assert!(response.has_missing());
        assert!(reporter.errors().iter().any(|e| e.contains("g:ghost")));
    }

    #[test]
    fn test_plugin_id_resolves_to_gradle_prefixed_artifact() {
        let repo = Repository::new().artifact("com.example.shadow:gradle-shadow-plugin:8.1.1", "");

        let response = repo
            .use_case(MockProgressReporter::new())
            .execute(&ResolveRequest::new(
                vec![],
                vec!["com.example.shadow".to_string()],
            ))
            .unwrap();

        assert_eq!(response.plugins.len(), 1);
        assert_eq!(
            response.plugins[0].artifact.gav(),
            "com.example.shadow:gradle-shadow-plugin:8.1.1"
        );
        assert!(response
            .resolved
            .contains_key(&key("com.example.shadow:gradle-shadow-plugin")));
    }

    #[test]
    fn test_test_declarations_mark_test_context() {
        let repo = Repository::new()
            .artifact("g:app:1", "")
            .artifact("org.junit:junit:4.13", "");

        let mut dependencies = declared(&["g:app"]);
        dependencies.push(DeclaredDependency::parse("org.junit:junit", true).unwrap());
        let response = repo
            .use_case(MockProgressReporter::new())
            .execute(&ResolveRequest::new(dependencies, vec![]))
            .unwrap();

        assert!(response.test_context.contains(&key("org.junit:junit")));
        assert!(!response.test_context.contains(&key("g:app")));
    }

    #[test]
    fn test_apply_pushes_resolved_then_substitutions() {
        let repo = Repository::new().artifact("g:root:1", "");
        let mut consumer = RecordingConsumer::new(declared(&["g:root:0.9"]));

        repo.use_case(MockProgressReporter::new())
            .apply(&mut consumer)
            .unwrap();

        assert_eq!(consumer.calls, vec!["resolved", "substitution"]);
        assert!(consumer.resolved.unwrap().contains_key(&key("g:root")));
        let substitution = &consumer.substitutions[0];
        assert_eq!(substitution.requested_version, "0.9");
        assert_eq!(substitution.target_version, "1");
        assert_eq!(substitution.reason, SubstitutionReason::SystemOverride);
    }

    #[test]
    fn test_report_reflects_response() {
        let repo = Repository::new()
            .artifact("g:a:1", &deps(&[("b", "")]))
            .artifact("g:b:1", "");
        let response = execute(repo, &["g:a", "g:missing"]);

        let report = ResolutionReportBuilder::build(&response);
        assert_eq!(report.summary.resolved, 2);
        assert_eq!(report.summary.transitive, 1);
        assert_eq!(report.not_found, vec!["g:missing"]);

        let json = JsonFormatter::new().format(&report).unwrap();
        assert!(json.contains("\"artifactId\": \"b\""));
        let markdown = MarkdownFormatter::new().format(&report).unwrap();
        assert!(markdown.contains("# System Dependency Resolution"));
    }
}

mod filesystem_tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_verifier_requires_version_or_exact_name() {
        let coordinate = MavenCoordinate::new("g", "foo", "1.2.3");

        let with_version = TempDir::new().unwrap();
        fs::write(with_version.path().join("foo-1.2.3.jar"), "").unwrap();
        let verifier = JarArtifactVerifier::new(with_version.path().to_path_buf(), 3);
        assert!(verifier.exists(&coordinate));

        let unrelated = TempDir::new().unwrap();
        fs::write(unrelated.path().join("foo-bar.jar"), "").unwrap();
        let verifier = JarArtifactVerifier::new(unrelated.path().to_path_buf(), 3);
        assert!(!verifier.exists(&coordinate));
    }

    #[test]
    fn test_relative_root_shares_cache_entries_with_absolute_paths() {
        let relative = PathBuf::from("tests/fixtures/system/poms");
        let parser = Arc::new(PomParser::with_fresh_cache(PomFileReader::new()));
        let finder = DirectoryPomFinder::new(vec![relative.clone()], 3, Arc::clone(&parser));

        let found = finder.find("ch.qos.logback", "logback-classic").unwrap();
        let pom_path = found.pom_path.clone().unwrap();
        assert!(pom_path.is_absolute());

        // The parent was loaded beside the child, under the same absolute root.
        let models = parser.cache().model_count();
        let parent = std::path::absolute(relative.join("logback/logback-parent.pom")).unwrap();
        assert!(parser.model(&parent).is_some());
        assert!(parser.coordinate(&pom_path).is_some());
        assert_eq!(parser.cache().model_count(), models);
    }

    #[test]
    fn test_directory_finder_and_index_agree_on_single_versions() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("apache-commons");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join("apache-commons-commons-lang3.pom"),
            project("org.apache.commons", "commons-lang3", "3.14.0", ""),
        )
        .unwrap();

        let parser = Arc::new(PomParser::with_fresh_cache(PomFileReader::new()));
        let finder =
            DirectoryPomFinder::new(vec![dir.path().to_path_buf()], 3, Arc::clone(&parser));
        let index = PomIndex::build(
            &BulkClassifier::new(Arc::clone(&parser)).with_workers(2),
            &[dir.path().to_path_buf()],
            3,
            None,
        )
        .unwrap();

        let walked = finder.find("org.apache.commons", "commons-lang3").unwrap();
        let indexed = index.find("org.apache.commons", "commons-lang3").unwrap();
        assert_eq!(walked.gav(), "org.apache.commons:commons-lang3:3.14.0");
        assert_eq!(walked.gav(), indexed.gav());
    }

    #[test]
    fn test_directory_finder_and_index_agree_on_multiple_versions_and_odd_names() {
        let dir = TempDir::new().unwrap();
        for (file, artifact, version) in [
            ("lib-1.0.pom", "lib", "1.0"),
            ("lib-2.0.pom", "lib", "2.0"),
            ("unrelated-name.pom", "other", "3.0"),
        ] {
            fs::write(dir.path().join(file), project("g", artifact, version, "")).unwrap();
        }

        let roots = [dir.path().to_path_buf()];
        let parser = Arc::new(PomParser::with_fresh_cache(PomFileReader::new()));
        let finder = DirectoryPomFinder::new(roots.to_vec(), 3, Arc::clone(&parser));
        let index = PomIndex::build(
            &BulkClassifier::new(Arc::clone(&parser)).with_workers(2),
            &roots,
            3,
            None,
        )
        .unwrap();

        let version = |found: Option<MavenCoordinate>| found.map(|c| c.version);
        assert_eq!(version(finder.find("g", "lib")), Some("1.0".to_string()));
        assert_eq!(version(index.find("g", "lib")), Some("1.0".to_string()));
        assert_eq!(finder.find("g", "other"), None);
        assert_eq!(index.find("g", "other"), None);

        let gavs = |found: Vec<MavenCoordinate>| found.into_iter().map(|c| c.gav()).collect::<Vec<_>>();
        assert_eq!(gavs(finder.find_all_for_group("g")), gavs(index.find_all_for_group("g")));
    }
}
