//! A random password generator with a length slider and two character-set toggles.
//!
//! The password is regenerated whenever an option actually changes. Copying is reported back as
//! an [`Effect`] because the clipboard belongs to the host, not to this state machine.

use domkit_core::ElementDescription;
use rand::Rng;
use std::ops::RangeInclusive;

/// The lengths the slider allows.
pub const LENGTH_RANGE: RangeInclusive<usize> = 8..=24;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()[]{}";

/// What kind of password to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub length: usize,
    pub numbers_allowed: bool,
    pub chars_allowed: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: *LENGTH_RANGE.start(),
            numbers_allowed: false,
            chars_allowed: false,
        }
    }
}

impl Options {
    /// Options with `length` clamped into [`LENGTH_RANGE`].
    pub fn new(length: usize, numbers_allowed: bool, chars_allowed: bool) -> Self {
        Self {
            length: clamp_length(length),
            numbers_allowed,
            chars_allowed,
        }
    }

    /// The characters a password may be drawn from.
    pub fn alphabet(&self) -> Vec<char> {
        let mut alphabet: Vec<char> = LETTERS.chars().collect();
        if self.numbers_allowed {
            alphabet.extend(DIGITS.chars());
        }
        if self.chars_allowed {
            alphabet.extend(SPECIAL.chars());
        }
        alphabet
    }

    /// Draw `length` characters uniformly from the alphabet.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let alphabet = self.alphabet();
        (0..self.length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end())
}

/// The generator's state: its options and the password they produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordGenerator {
    pub options: Options,
    pub password: String,
}

impl PasswordGenerator {
    /// Start with `options` and a freshly generated password.
    pub fn new(options: Options, rng: &mut impl Rng) -> Self {
        let password = options.generate(rng);
        Self { options, password }
    }
}

/// Something the user did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The slider moved. Values outside [`LENGTH_RANGE`] are clamped.
    SetLength(usize),
    ToggleNumbers,
    ToggleChars,
    /// Ask for a new password with the same options.
    Regenerate,
    /// The copy button was pressed.
    Copy,
}

/// Work the host has to carry out after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
}

/// The result of applying an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: PasswordGenerator,
    pub effect: Option<Effect>,
}

impl Transition {
    fn state(state: PasswordGenerator) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Apply `event` to `state`, drawing any new password from `rng`.
pub fn update(state: PasswordGenerator, event: Event, rng: &mut impl Rng) -> Transition {
    let mut options = state.options;
    match event {
        Event::SetLength(length) => options.length = clamp_length(length),
        Event::ToggleNumbers => options.numbers_allowed = !options.numbers_allowed,
        Event::ToggleChars => options.chars_allowed = !options.chars_allowed,
        Event::Regenerate => return Transition::state(PasswordGenerator::new(options, rng)),
        Event::Copy => {
            let effect = Effect::CopyToClipboard(state.password.clone());
            return Transition {
                state,
                effect: Some(effect),
            };
        }
    }

    if options == state.options {
        return Transition::state(state);
    }

    tracing::debug!(?options, "options changed, regenerating password");
    Transition::state(PasswordGenerator::new(options, rng))
}

pub fn view(state: &PasswordGenerator) -> ElementDescription {
    let options = &state.options;

    let output = ElementDescription::new("div")
        .attr("class", "flex shadow rounded-lg overflow-hidden mb-4")
        .child(
            ElementDescription::new("input")
                .attr("type", "text")
                .attr("value", state.password.as_str())
                .attr("readonly", "")
                .attr("class", "w-full outline-none bg-zinc-900 px-3 py-2"),
        )
        .child(
            ElementDescription::new("button")
                .attr("class", "bg-blue-600 px-3 py-2 text-white cursor-pointer")
                .text("copy"),
        );

    let length = ElementDescription::new("label")
        .attr("class", "flex flex-wrap justify-center")
        .child(
            ElementDescription::new("input")
                .attr("type", "range")
                .attr("min", LENGTH_RANGE.start().to_string())
                .attr("max", LENGTH_RANGE.end().to_string())
                .attr("value", options.length.to_string())
                .attr("class", "cursor-pointer"),
        )
        .child(
            ElementDescription::new("span")
                .attr("class", "ml-3")
                .text(format!("Length: ({})", options.length)),
        );

    let controls = ElementDescription::new("div")
        .attr("class", "flex flex-wrap gap-3 items-center justify-center")
        .child(length)
        .child(toggle("numberInput", "Numbers", options.numbers_allowed))
        .child(toggle("characterInput", "Character", options.chars_allowed));

    ElementDescription::new("div")
        .attr(
            "class",
            "h-screen w-full bg-zinc-900 flex flex-col justify-start items-center p-10",
        )
        .child(
            ElementDescription::new("h1")
                .attr("class", "text-4xl font-semibold mb-3 text-zinc-600")
                .text("Password Generator"),
        )
        .child(
            ElementDescription::new("div")
                .attr("class", "bg-zinc-800 rounded-lg px-10 py-5 text-orange-600")
                .child(output)
                .child(controls),
        )
}

fn toggle(id: &str, label: &str, checked: bool) -> ElementDescription {
    let mut input = ElementDescription::new("input")
        .attr("type", "checkbox")
        .attr("id", id);
    if checked {
        input = input.attr("checked", "");
    }

    ElementDescription::new("label")
        .attr("for", id)
        .attr("class", "flex")
        .child(input)
        .child(
            ElementDescription::new("span")
                .attr("class", "ml-3")
                .text(label),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn alphabet_grows_with_options() {
        assert_eq!(Options::default().alphabet().len(), 52);
        assert_eq!(Options::new(8, true, false).alphabet().len(), 62);
        assert_eq!(Options::new(8, false, true).alphabet().len(), 66);
        assert_eq!(Options::new(8, true, true).alphabet().len(), 76);
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(Options::new(3, false, false).length, 8);
        assert_eq!(Options::new(100, false, false).length, 24);
        assert_eq!(Options::new(12, false, false).length, 12);
    }

    #[test]
    fn passwords_have_the_requested_length() {
        let mut rng = rng();
        for length in LENGTH_RANGE {
            let options = Options::new(length, true, true);
            assert_eq!(options.generate(&mut rng).chars().count(), length);
        }
    }

    #[test]
    fn letters_only_by_default() {
        let mut rng = rng();
        for _ in 0..50 {
            let password = Options::new(24, false, false).generate(&mut rng);
            assert!(password.chars().all(|c| c.is_ascii_alphabetic()), "{password}");
        }
    }

    #[test]
    fn same_seed_same_password() {
        let options = Options::new(16, true, true);
        assert_eq!(
            options.generate(&mut StdRng::seed_from_u64(1)),
            options.generate(&mut StdRng::seed_from_u64(1))
        );
    }
}
