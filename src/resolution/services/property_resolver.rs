use crate::resolution::domain::{PomHierarchy, PomModel, PropertyMap};
use crate::resolution::policies::PropertyPrecedence;

/// Upper bound on substitution passes over a single value.
pub const MAX_SUBSTITUTION_ROUNDS: usize = 20;

/// PropertyResolver folds a hierarchy into one property map and expands
/// `${...}` placeholders against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyResolver {
    precedence: PropertyPrecedence,
}

impl PropertyResolver {
    pub fn new(precedence: PropertyPrecedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> PropertyPrecedence {
        self.precedence
    }

    /// Collects properties across the hierarchy, ancestor first.
    ///
    /// Each model contributes its coordinates (as `project.X` and bare `X`),
    /// its parent coordinates (`project.parent.X` and `parent.X`) and its
    /// `<properties>` block. Duplicate keys are settled by the precedence.
    pub fn collect(&self, hierarchy: &PomHierarchy) -> PropertyMap {
        let mut properties = PropertyMap::with_defaults();

        for model in hierarchy.models() {
            for (key, value) in Self::model_entries(model) {
                match self.precedence {
                    PropertyPrecedence::DescendantWins => properties.insert(key, value),
                    PropertyPrecedence::AncestorWins => properties.insert_if_absent(key, value),
                }
            }
        }

        properties
    }

    /// Replaces `${key}` tokens with their values, repeating until nothing
    /// changes or [`MAX_SUBSTITUTION_ROUNDS`] passes have run. Unknown keys
    /// stay in the output verbatim.
    pub fn substitute(value: &str, properties: &PropertyMap) -> String {
        let mut current = value.to_string();
        for _ in 0..MAX_SUBSTITUTION_ROUNDS {
            let (next, replaced) = Self::substitute_once(&current, properties);
            if !replaced {
                break;
            }
            current = next;
        }
        current
    }

    /// [`PropertyResolver::substitute`] over an optional, trimmed value.
    /// Blank results become `None`.
    pub fn substitute_opt(value: Option<&str>, properties: &PropertyMap) -> Option<String> {
        value
            .map(|v| Self::substitute(v.trim(), properties))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn substitute_once(value: &str, properties: &PropertyMap) -> (String, bool) {
        let mut output = String::with_capacity(value.len());
        let mut rest = value;
        let mut replaced = false;

        while let Some(start) = rest.find("${") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                output.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let key = &after[..end];
            match properties.get(key) {
                Some(resolved) => {
                    output.push_str(resolved);
                    replaced = true;
                }
                None => output.push_str(&rest[start..start + 2 + end + 1]),
            }
            rest = &after[end + 1..];
        }
        output.push_str(rest);

        (output, replaced)
    }

    fn model_entries(model: &PomModel) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        let mut push_both = |name: &str, value: Option<&str>| {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                entries.push((format!("project.{}", name), value.to_string()));
                entries.push((name.to_string(), value.to_string()));
            }
        };

        push_both("groupId", model.effective_group_id());
        push_both("artifactId", model.artifact_id.as_deref());
        push_both("version", model.effective_version());
        push_both("packaging", model.packaging.as_deref());

        if let Some(parent) = &model.parent {
            for (name, value) in [
                ("groupId", parent.group_id.as_deref()),
                ("artifactId", parent.artifact_id.as_deref()),
                ("version", parent.version.as_deref()),
            ] {
                if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                    entries.push((format!("project.parent.{}", name), value.to_string()));
                    entries.push((format!("parent.{}", name), value.to_string()));
                }
            }
        }

        let mut declared: Vec<(&String, &String)> = model.properties.iter().collect();
        declared.sort();
        for (key, value) in declared {
            entries.push((key.clone(), value.trim().to_string()));
        }

        entries
    }
}
