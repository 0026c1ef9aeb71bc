// mood.rs

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidMood;

/// A mood token, passed verbatim to the recipe service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mood(String);

impl Mood {
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidMood> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidMood);
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Mood {
    type Err = InvalidMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::new(s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One mood selector on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodButton {
    pub mood: Mood,
    pub active: bool,
}

/// Marks `selected` active and every other button inactive.
pub fn activate(buttons: &mut [MoodButton], selected: &Mood) {
    for button in buttons {
        button.active = button.mood == *selected;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn moods(tokens: &[&str]) -> Vec<Mood> {
        tokens.iter().map(|token| Mood::new(*token).unwrap()).collect()
    }

    #[test]
    fn blank_moods_are_rejected() {
        assert_eq!(Mood::new(""), Err(InvalidMood));
        assert_eq!(Mood::new("   "), Err(InvalidMood));
        assert_eq!(Mood::new("happy").unwrap().as_str(), "happy");
    }

    #[test]
    fn mood_token_is_kept_verbatim() {
        let mood: Mood = "Cozy Evening".parse().unwrap();
        assert_eq!(mood.to_string(), "Cozy Evening");
    }

    #[test]
    fn activate_leaves_exactly_one_active() {
        let mut buttons: Vec<_> = ["happy", "sad", "excited"]
            .into_iter()
            .map(|token| MoodButton {
                mood: Mood::new(token).unwrap(),
                active: false,
            })
            .collect();
        buttons[0].active = true;

        activate(&mut buttons, &Mood::new("sad").unwrap());

        let active: Vec<_> = buttons.iter().map(|b| b.active).collect();
        assert_eq!(active, [false, true, false]);
    }
}
