//! Render props for the card list and the detail modal.
//!
//! These are the data contracts handed to whatever component layer draws
//! the UI; how cards and modals actually look is out of scope here.

use pawbook::{Person, Pet};
use serde::Serialize;

// The list payload carries no pet counts; cards show a fixed value.
const CARD_PET_COUNT: &str = "3";

/// A single stat line on a person card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStat {
    pub name: String,
    pub value: String,
}

/// Props for one person card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardProps {
    pub name: String,
    pub avatar: String,
    pub header: String,
    pub stats: Vec<CardStat>,
}

impl CardProps {
    pub fn for_person(person: &Person) -> Self {
        let married = if person.is_married() { "Yes" } else { "No" };
        Self {
            name: person.name.clone(),
            avatar: person.avatar.clone(),
            header: person.header.clone(),
            stats: vec![
                CardStat {
                    name: "married?".to_string(),
                    value: married.to_string(),
                },
                CardStat {
                    name: "pets".to_string(),
                    value: CARD_PET_COUNT.to_string(),
                },
            ],
        }
    }
}

/// An image shown in the detail modal.
///
/// Immutable; toggling grayscale constructs a replacement record rather
/// than flipping the flag in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedImage {
    pub id: i64,
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub is_gray: bool,
}

impl SelectedImage {
    pub fn new(id: i64, src: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            width: None,
            height: None,
            is_gray: false,
        }
    }

    /// Copy of this image with the grayscale flag set to `on`.
    pub fn with_grayscale(&self, on: bool) -> Self {
        Self {
            is_gray: on,
            ..self.clone()
        }
    }

    /// URL the modal displays; gains a literal `?grayscale` suffix while
    /// the toggle is on.
    pub fn display_url(&self) -> String {
        if self.is_gray {
            format!("{}?grayscale", self.src)
        } else {
            self.src.clone()
        }
    }
}

/// Content of the detail modal.
///
/// One component, two configurations: an image preview or a person with
/// their pets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailModal {
    Image(SelectedImage),
    Person { person: Person, pets: Vec<Pet> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_stats_for_married_person() {
        let person = Person::new(1, "A", "B", Some(2));
        let card = CardProps::for_person(&person);
        assert_eq!(card.name, "A B");
        assert_eq!(card.stats[0].name, "married?");
        assert_eq!(card.stats[0].value, "Yes");
        assert_eq!(card.stats[1].name, "pets");
    }

    #[test]
    fn test_card_stats_for_single_person() {
        let person = Person::new(1, "A", "B", None);
        let card = CardProps::for_person(&person);
        assert_eq!(card.stats[0].value, "No");
    }

    #[test]
    fn test_grayscale_suffix_round_trip() {
        let image = SelectedImage::new(1, "http://x/img.png");
        assert_eq!(image.display_url(), "http://x/img.png");

        let gray = image.with_grayscale(true);
        assert_eq!(gray.display_url(), "http://x/img.png?grayscale");

        let restored = gray.with_grayscale(false);
        assert_eq!(restored.display_url(), "http://x/img.png");
        assert_eq!(restored, image);
    }
}
