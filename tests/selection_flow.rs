use director_suite::options::{ACTION, CHARACTERS, CHAR_COUNT, NON_HUMAN_ACTIONS, NON_HUMAN_SUBJECTS};
use director_suite::{Choice, Field, Selections};
use proptest::prelude::*;

fn human_counts() -> Vec<&'static str> {
    CHAR_COUNT
        .values()
        .iter()
        .copied()
        .filter(|v| *v != "No Humans")
        .collect()
}

#[test]
fn switching_to_non_human_resets_subject_and_action() {
    let mut s = Selections::new();
    s.select(Field::Characters, "Astronaut");
    s.select(Field::Action, "Dancing");

    s.select(Field::CharCount, "No Humans");
    assert!(!s.is_human());
    assert_eq!(s.raw(Field::Characters), NON_HUMAN_SUBJECTS.values()[0]);
    assert_eq!(s.raw(Field::Action), NON_HUMAN_ACTIONS.values()[0]);

    s.select(Field::CharCount, "Two Subjects");
    assert!(s.is_human());
    assert_eq!(s.raw(Field::Characters), CHARACTERS.values()[0]);
    assert_eq!(s.raw(Field::Action), ACTION.values()[0]);
}

#[test]
fn custom_subject_does_not_survive_class_change() {
    let mut s = Selections::new();
    s.set(Field::Characters, Choice::custom("Clockwork Owl"));
    s.select(Field::CharCount, "No Humans");
    assert_eq!(s.choice(Field::Characters), &Choice::Listed(0));
    assert_eq!(s.raw(Field::Characters), "Futuristic Vehicle");
}

#[test]
fn expression_is_kept_but_ignored_for_objects() {
    let mut s = Selections::new();
    s.select(Field::Expression, "Angry");
    s.select(Field::CharCount, "No Humans");
    assert_eq!(s.raw(Field::Expression), "Angry");
}

proptest! {
    // Toggling into the same class twice leaves the state unchanged.
    #[test]
    fn prop_reset_is_idempotent(
        first in proptest::sample::select(human_counts()),
        second in proptest::sample::select(human_counts()),
        to_objects in any::<bool>(),
    ) {
        let mut s = Selections::new();
        s.select(Field::CharCount, first);
        if to_objects {
            s.select(Field::CharCount, "No Humans");
            let once = s.clone();
            s.select(Field::CharCount, "No Humans");
            prop_assert_eq!(&s, &once);
            prop_assert_eq!(s.raw(Field::Characters), "Futuristic Vehicle");
            prop_assert_eq!(s.raw(Field::Action), "Stationary");
        } else {
            let before_subject = s.raw(Field::Characters).to_string();
            s.select(Field::CharCount, second);
            prop_assert_eq!(s.raw(Field::Characters), before_subject.as_str());
            prop_assert!(s.is_human());
        }
    }
}
