//! Bug traits - descriptive labels attached to a hive by its kind
//!
//! Traits carry no behaviour of their own. A hive holds an ordered list of
//! them and renders their text fragments in sequence when described.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BugTrait {
    Winged,
    Stinging,
    Pollinating,
    Burrowing,
    Armored,
    Nocturnal,
}

impl BugTrait {
    pub fn label(&self) -> &'static str {
        match self {
            BugTrait::Winged => "Winged",
            BugTrait::Stinging => "Stinging",
            BugTrait::Pollinating => "Pollinating",
            BugTrait::Burrowing => "Burrowing",
            BugTrait::Armored => "Armored",
            BugTrait::Nocturnal => "Nocturnal",
        }
    }

    /// Sentence fragment appended to a hive description
    pub fn fragment(&self) -> &'static str {
        match self {
            BugTrait::Winged => "takes to the air",
            BugTrait::Stinging => "defends itself with a sting",
            BugTrait::Pollinating => "carries pollen between flowers",
            BugTrait::Burrowing => "tunnels beneath the soil",
            BugTrait::Armored => "shrugs off blows with a hard shell",
            BugTrait::Nocturnal => "forages after dark",
        }
    }
}

impl std::fmt::Display for BugTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the trait list for a hive kind. Unknown kinds get no traits.
pub fn traits_for_kind(kind: &str) -> Vec<BugTrait> {
    use BugTrait::*;

    match kind.trim().to_lowercase().as_str() {
        "bee" | "honeybee" | "bumblebee" => vec![Winged, Pollinating, Stinging],
        "wasp" | "hornet" => vec![Winged, Stinging],
        "ant" => vec![Burrowing, Stinging],
        "termite" => vec![Burrowing],
        "beetle" => vec![Armored, Winged],
        "moth" => vec![Winged, Nocturnal, Pollinating],
        "firefly" => vec![Winged, Nocturnal],
        _ => Vec::new(),
    }
}

/// Render traits as one line: "Base bug that takes to the air and ..."
pub fn render_traits(traits: &[BugTrait]) -> String {
    let mut text = String::from("Base bug");
    for (i, t) in traits.iter().enumerate() {
        text.push_str(if i == 0 { " that " } else { " and " });
        text.push_str(t.fragment());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_is_case_insensitive() {
        assert_eq!(traits_for_kind("Bee"), traits_for_kind("bee"));
        assert_eq!(traits_for_kind(" WASP "), vec![BugTrait::Winged, BugTrait::Stinging]);
    }

    #[test]
    fn test_unknown_kind_has_no_traits() {
        assert!(traits_for_kind("mantis").is_empty());
        assert_eq!(render_traits(&[]), "Base bug");
    }

    #[test]
    fn test_render_in_sequence() {
        let text = render_traits(&[BugTrait::Burrowing, BugTrait::Stinging]);
        assert_eq!(
            text,
            "Base bug that tunnels beneath the soil and defends itself with a sting"
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(BugTrait::Nocturnal.to_string(), "Nocturnal");
        assert_eq!(BugTrait::Armored.label(), "Armored");
    }
}
