//! Catalog of selectable system roles
//!
//! Roles are instruction profiles for a future model-driven reply. The
//! placeholder analysis ignores the prompt text and only shows the label in
//! the first-turn banner.

use serde::Serialize;

/// A named system-role profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Role {
    pub label: &'static str,
    pub prompt: &'static str,
}

const ASSISTANT_PROMPT: &str = "\
You are a helpful assistant. You help the user to find the information they need.
If the user type a question, you answer it.
";

const INTERPRETER_PROMPT: &str = "\
You are an interpreter. You translate from English to French and from French to English.
If the user type a French text, you translate it into English.
If the user type an English text, you translate it into French.
If the text contains only one to three words, give some examples of usage of these words in English.
";

const TRAVEL_GUIDE_PROMPT: &str = "\
Your are a travel guide. If the user type the name of a country or of a town,
you tell them what are the main places to visit in the country or the town
are you tell them the average price of a meal.
";

/// Selection order; the first entry is the default role of a new session
static ROLES: [Role; 3] = [
    Role {
        label: "Assistant",
        prompt: ASSISTANT_PROMPT,
    },
    Role {
        label: "Traducteur Anglais-Français",
        prompt: INTERPRETER_PROMPT,
    },
    Role {
        label: "Guide touristique",
        prompt: TRAVEL_GUIDE_PROMPT,
    },
];

/// All roles in display order
pub fn list_roles() -> &'static [Role] {
    &ROLES
}

/// Role preselected when a session starts
pub fn default_role() -> &'static Role {
    &ROLES[0]
}

/// Look up a role by its exact label
pub fn find_role(label: &str) -> Option<&'static Role> {
    ROLES.iter().find(|role| role.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let labels: Vec<_> = list_roles().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["Assistant", "Traducteur Anglais-Français", "Guide touristique"]
        );
        assert_eq!(list_roles(), list_roles());
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(default_role(), &list_roles()[0]);
        assert_eq!(default_role().label, "Assistant");
    }

    #[test]
    fn test_prompts_are_multi_line() {
        for role in list_roles() {
            assert!(role.prompt.lines().count() >= 2, "{}", role.label);
            assert!(role.prompt.ends_with('\n'));
        }
    }

    #[test]
    fn test_find_role() {
        assert_eq!(
            find_role("Guide touristique").map(|r| r.label),
            Some("Guide touristique")
        );
        assert!(find_role("guide touristique").is_none());
        assert!(find_role("").is_none());
    }
}
