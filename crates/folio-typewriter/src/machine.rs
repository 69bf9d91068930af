//! Typing and erasing state machine.

use thiserror::Error;

/// Errors raised when building a [`Typewriter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// Which way the caption is currently moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Typing,
    Erasing,
}

/// Cycles through phrases, typing and erasing one character per tick.
///
/// The shown text is always a prefix of the active phrase, counted in
/// `char`s so multi-byte phrases never split inside a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Index of the active phrase.
    index: usize,
    /// Number of characters of the active phrase currently shown.
    shown: usize,
    direction: Direction,
}

impl Typewriter {
    /// Start typing the first phrase from empty text.
    pub fn new<I, S>(phrases: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            direction: Direction::Typing,
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The full phrase being typed or erased.
    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// The text currently shown.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advance by one character and return the new text.
    ///
    /// Reaching the full phrase switches to erasing; reaching empty text
    /// moves to the next phrase (wrapping) and switches back to typing.
    pub fn tick(&mut self) -> &str {
        match self.direction {
            Direction::Typing => {
                let len = self.phrase().chars().count();
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.direction = Direction::Erasing;
                }
            }
            Direction::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.direction = Direction::Typing;
                }
            }
        }
        self.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(Typewriter::new(empty), Err(TypewriterError::NoPhrases));
    }

    #[test]
    fn test_initial_state() {
        let tw = Typewriter::new(["Hello"]).unwrap();
        assert_eq!(tw.index(), 0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.direction(), Direction::Typing);
    }

    #[test]
    fn test_single_phrase_cycle() {
        let mut tw = Typewriter::new(["AB"]).unwrap();
        assert_eq!(tw.tick(), "A");
        assert_eq!(tw.tick(), "AB");
        assert_eq!(tw.direction(), Direction::Erasing);

        assert_eq!(tw.tick(), "A");
        assert_eq!(tw.tick(), "");
        assert_eq!(tw.direction(), Direction::Typing);
        assert_eq!(tw.index(), 0);
    }

    #[test]
    fn test_advances_to_next_phrase() {
        let mut tw = Typewriter::new(["A", "B"]).unwrap();
        assert_eq!(tw.tick(), "A");
        assert_eq!(tw.direction(), Direction::Erasing);
        assert_eq!(tw.tick(), "");
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.direction(), Direction::Typing);
        assert_eq!(tw.tick(), "B");

        // Wraps back to the first phrase
        tw.tick();
        assert_eq!(tw.index(), 0);
    }

    #[test]
    fn test_transition_after_exactly_len_ticks() {
        let phrase = "Full Stack Developer";
        let len = phrase.chars().count();
        let mut tw = Typewriter::new([phrase, "next"]).unwrap();

        for _ in 0..len - 1 {
            tw.tick();
            assert_eq!(tw.direction(), Direction::Typing);
        }
        tw.tick();
        assert_eq!(tw.direction(), Direction::Erasing);
        assert_eq!(tw.text(), phrase);

        for _ in 0..len - 1 {
            tw.tick();
            assert_eq!(tw.direction(), Direction::Erasing);
            assert_eq!(tw.index(), 0);
        }
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.direction(), Direction::Typing);
    }

    #[test]
    fn test_text_is_always_a_monotonic_prefix() {
        let mut tw = Typewriter::new(["Full Stack Developer", "AI & Cloud Enthusiast", "Problem Solver"])
            .unwrap();
        let mut prev_len = 0;
        let mut prev_dir = tw.direction();
        let mut prev_index = tw.index();

        for _ in 0..500 {
            let len = tw.tick().chars().count();
            assert!(tw.phrase().starts_with(tw.text()));
            assert!(len <= tw.phrase().chars().count());

            if tw.index() == prev_index {
                match prev_dir {
                    Direction::Typing => assert!(len >= prev_len),
                    Direction::Erasing => assert!(len <= prev_len),
                }
            }
            prev_len = len;
            prev_dir = tw.direction();
            prev_index = tw.index();
        }
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = Typewriter::new(["héllo ✦"]).unwrap();
        assert_eq!(tw.tick(), "h");
        assert_eq!(tw.tick(), "hé");
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.text(), "héllo ✦");
        assert_eq!(tw.direction(), Direction::Erasing);
        assert_eq!(tw.tick(), "héllo ");
    }

    #[test]
    fn test_empty_phrase_takes_one_tick_each_way() {
        let mut tw = Typewriter::new(["", "x"]).unwrap();
        assert_eq!(tw.tick(), "");
        assert_eq!(tw.direction(), Direction::Erasing);
        assert_eq!(tw.tick(), "");
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.direction(), Direction::Typing);
    }
}
