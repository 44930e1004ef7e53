use crate::ports::outbound::PomReader;
use crate::resolution::domain::{ParentRef, PomModel, RawDependency};
use crate::shared::error::ResolverError;
use crate::shared::security::{validate_metadata_file, MAX_POM_SIZE};
use crate::shared::Result;
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;

/// PomFileReader adapter parsing POM XML with roxmltree
///
/// Elements are matched by local name, so both plain and
/// `xmlns="http://maven.apache.org/POM/4.0.0"` POMs are understood.
/// Only the subset needed for coordinate resolution is read: coordinates,
/// parent, properties, dependencies and dependencyManagement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PomFileReader;

impl PomFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses POM text that was read from `path`.
    pub fn parse_document(path: &Path, content: &str) -> Result<PomModel> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let document =
            Document::parse_with_options(content, options).map_err(|e| ResolverError::PomParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let root = document.root_element();
        if root.tag_name().name() != "project" {
            return Err(ResolverError::PomParse {
                path: path.to_path_buf(),
                details: format!(
                    "root element is <{}>, expected <project>",
                    root.tag_name().name()
                ),
            }
            .into());
        }

        let mut model = PomModel::new(path);
        model.group_id = child_text(&root, "groupId");
        model.artifact_id = child_text(&root, "artifactId");
        model.version = child_text(&root, "version");
        model.packaging = child_text(&root, "packaging");
        model.parent = child_element(&root, "parent").map(|parent| ParentRef {
            group_id: child_text(&parent, "groupId"),
            artifact_id: child_text(&parent, "artifactId"),
            version: child_text(&parent, "version"),
        });

        if let Some(properties) = child_element(&root, "properties") {
            for property in properties.children().filter(Node::is_element) {
                let value = property.text().map(str::trim).unwrap_or_default();
                model
                    .properties
                    .insert(property.tag_name().name().to_string(), value.to_string());
            }
        }

        if let Some(dependencies) = child_element(&root, "dependencies") {
            model.dependencies = parse_dependencies(&dependencies);
        }

        if let Some(dependencies) = child_element(&root, "dependencyManagement")
            .and_then(|management| child_element(&management, "dependencies"))
        {
            model.dependency_management = parse_dependencies(&dependencies);
        }

        Ok(model)
    }
}

impl PomReader for PomFileReader {
    fn read_pom(&self, path: &Path) -> Result<PomModel> {
        validate_metadata_file(path, MAX_POM_SIZE).map_err(|e| ResolverError::PomRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let bytes = fs::read(path).map_err(|e| ResolverError::PomRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse_document(path, &String::from_utf8_lossy(&bytes))
    }
}

fn parse_dependencies(dependencies: &Node<'_, '_>) -> Vec<RawDependency> {
    dependencies
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "dependency")
        .map(|dependency| RawDependency {
            group_id: child_text(&dependency, "groupId"),
            artifact_id: child_text(&dependency, "artifactId"),
            version: child_text(&dependency, "version"),
            scope: child_text(&dependency, "scope"),
            packaging: child_text(&dependency, "type"),
        })
        .collect()
}

fn child_element<'a, 'input>(node: &Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    child_element(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
