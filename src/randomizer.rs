use rand::Rng;
use tracing::debug;

use crate::options::Field;
use crate::selection::{Choice, Selections};

/// Pick a random listed value for every field.
///
/// The reference sentinel is never chosen since it is not part of any list.
/// Technical fields are shuffled like the rest. A non-human result gets the
/// first non-human subject and motion, and notes are always cleared.
pub fn randomize<R: Rng + ?Sized>(selections: &Selections, rng: &mut R) -> Selections {
    let mut next = selections.clone();

    for field in Field::ALL {
        let list = field.options(true);
        let choice = if list.is_empty() {
            Choice::custom("")
        } else {
            Choice::Listed(rng.gen_range(0..list.len()))
        };
        next.set(field, choice);
    }

    if !next.is_human() {
        next.set(Field::Characters, Choice::Listed(0));
        next.set(Field::Action, Choice::Listed(0));
    }
    next.set_notes("");

    debug!(is_human = next.is_human(), "Randomized selections");
    next
}
