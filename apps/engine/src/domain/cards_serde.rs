//! Serialization and deserialization for card types
//!
//! Cards are stored in the shape collaborators already persist:
//! `{"id": "<uuid>", "value": "7", "color": "red"}`, with `value` one of
//! `"1"`..`"12"`, `"wild"` or `"skip"` and `color` present only for numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::cards_types::{Card, CardId, Color, Face, Rank};

// Color serde
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            _ => Err(serde::de::Error::custom(format!("Invalid color: {s}"))),
        }
    }
}

impl Serialize for CardId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer).map(CardId)
    }
}

#[derive(Serialize, Deserialize)]
struct StoredCard {
    id: CardId,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (value, color) = match self.face {
            Face::Number { rank, color } => (rank.to_string(), Some(color)),
            Face::Wild => ("wild".to_string(), None),
            Face::Skip => ("skip".to_string(), None),
        };
        StoredCard {
            id: self.id,
            value,
            color,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let stored = StoredCard::deserialize(deserializer)?;
        let face = match (stored.value.as_str(), stored.color) {
            ("wild", None) => Face::Wild,
            ("skip", None) => Face::Skip,
            ("wild" | "skip", Some(_)) => {
                return Err(D::Error::custom(format!(
                    "{} card must not carry a color",
                    stored.value
                )))
            }
            (value, Some(color)) => {
                let n: u8 = value
                    .parse()
                    .map_err(|_| D::Error::custom(format!("Invalid card value: {value}")))?;
                let rank = Rank::new(n).map_err(|e| D::Error::custom(e.to_string()))?;
                Face::Number { rank, color }
            }
            (value, None) => {
                return Err(D::Error::custom(format!(
                    "Numbered card {value} requires a color"
                )))
            }
        };
        Ok(Card::new(stored.id, face))
    }
}
