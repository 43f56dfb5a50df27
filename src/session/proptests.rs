//! Property-based tests for the session engine
//!
//! These check the turn and role invariants over arbitrary action sequences.

use super::*;
use crate::analysis::CaseLocale;
use crate::roles::list_roles;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_session(seed: u64) -> ConversationSession {
    ConversationSession::new("prop-session", TurnProcessor::seeded(seed, CaseLocale::French))
}

#[derive(Debug, Clone)]
enum Action {
    Submit(String),
    SelectRole(usize),
}

fn arb_question() -> impl Strategy<Value = String> {
    "[a-zA-Zéèàùç ]{0,12}[a-zA-Zéèàù]{1,8}[ \t]{0,3}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,6}"
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_question().prop_map(Action::Submit),
        1 => arb_blank().prop_map(Action::Submit),
        2 => (0usize..3).prop_map(Action::SelectRole),
    ]
}

fn count_blocks(transcript: &str) -> usize {
    transcript.matches("== User:\n").count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // A non-blank question appends exactly one record and one transcript block
    #[test]
    fn prop_valid_turn_appends_one_record(
        seed in any::<u64>(),
        history in proptest::collection::vec(arb_question(), 0..5),
        question in arb_question(),
    ) {
        let mut session = test_session(seed);
        for q in &history {
            session.submit_turn(q).unwrap();
        }
        let before_len = session.transcript().len();
        let before_blocks = count_blocks(&session.transcript().render());

        let outcome = session.submit_turn(&question).unwrap();

        prop_assert_eq!(session.transcript().len(), before_len + 1);
        prop_assert_eq!(count_blocks(&session.transcript().render()), before_blocks + 1);
        prop_assert_eq!(session.transcript().last(), Some(&outcome.record));
        prop_assert!(session.transcript().render().ends_with(&outcome.record.to_string()));
    }

    // Blank questions are rejected without touching the session
    #[test]
    fn prop_blank_turn_is_noop(
        seed in any::<u64>(),
        history in proptest::collection::vec(arb_question(), 0..3),
        blank in arb_blank(),
    ) {
        let mut session = test_session(seed);
        for q in &history {
            session.submit_turn(q).unwrap();
        }
        let transcript = session.transcript().clone();
        let state = session.state();

        prop_assert_eq!(session.submit_turn(&blank).unwrap_err(), ValidationError::EmptyQuestion);
        prop_assert_eq!(session.transcript(), &transcript);
        prop_assert_eq!(session.state(), state);
    }

    // Once locked, the role never changes and exactly the first record has a banner
    #[test]
    fn prop_role_lock_is_permanent(
        seed in any::<u64>(),
        actions in proptest::collection::vec(arb_action(), 0..25),
    ) {
        let mut session = test_session(seed);
        let mut locked_role = None;

        for action in actions {
            match action {
                Action::Submit(q) => {
                    let _ = session.submit_turn(&q);
                }
                Action::SelectRole(i) => {
                    let result = session.select_role(&list_roles()[i]);
                    prop_assert_eq!(result.is_err(), locked_role.is_some());
                }
            }

            prop_assert_eq!(session.is_role_locked(), !session.transcript().is_empty());
            if let Some(role) = locked_role {
                prop_assert_eq!(session.selected_role(), Some(role));
            } else if session.is_role_locked() {
                locked_role = session.selected_role();
            }
        }

        for (i, turn) in session.transcript().turns().iter().enumerate() {
            prop_assert_eq!(turn.report.starts_with("🧠 Mode d'analyse linguistique : "), i == 0);
        }
    }
}
