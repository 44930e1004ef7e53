use std::fmt;
use std::str::FromStr;

/// Which model wins when an ancestor and a descendant set the same property key.
///
/// Applies uniformly to `<properties>` entries and to the coordinate keys
/// (`project.version`, `groupId`, ...) every model contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyPrecedence {
    /// The most-descendant declaration wins (Maven's own behavior).
    #[default]
    DescendantWins,
    /// The first declaration in ancestor-to-descendant order wins.
    AncestorWins,
}

impl FromStr for PropertyPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "descendant" | "child" | "descendant-wins" => Ok(PropertyPrecedence::DescendantWins),
            "ancestor" | "parent" | "ancestor-wins" => Ok(PropertyPrecedence::AncestorWins),
            _ => Err(format!(
                "Invalid property precedence: {}. Please specify 'descendant' or 'ancestor'",
                s
            )),
        }
    }
}

impl fmt::Display for PropertyPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyPrecedence::DescendantWins => f.write_str("descendant"),
            PropertyPrecedence::AncestorWins => f.write_str("ancestor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_descendant_wins() {
        assert_eq!(
            PropertyPrecedence::default(),
            PropertyPrecedence::DescendantWins
        );
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "Child".parse::<PropertyPrecedence>().unwrap(),
            PropertyPrecedence::DescendantWins
        );
        assert_eq!(
            "ancestor".parse::<PropertyPrecedence>().unwrap(),
            PropertyPrecedence::AncestorWins
        );
        assert!("sideways".parse::<PropertyPrecedence>().is_err());
    }
}
