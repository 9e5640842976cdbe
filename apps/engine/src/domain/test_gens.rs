// Proptest generators for domain types.
// Groups are built valid by construction rather than filtered.

use proptest::prelude::*;

use crate::domain::{Card, CardId, Color, Face, Rank};

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Blue),
        Just(Color::Green),
        Just(Color::Yellow),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    (Rank::MIN..=Rank::MAX).prop_map(|v| Rank::new(v).unwrap())
}

pub fn face() -> impl Strategy<Value = Face> {
    prop_oneof![
        10 => (rank(), color()).prop_map(|(r, c)| Face::number(r, c)),
        1 => Just(Face::Wild),
        1 => Just(Face::Skip),
    ]
}

fn with_ids(faces: Vec<Face>, salt: u128) -> Vec<Card> {
    faces
        .into_iter()
        .enumerate()
        .map(|(i, face)| Card::new(CardId(uuid::Uuid::from_u128(salt + i as u128)), face))
        .collect()
}

/// Any mix of faces, ids unique within the vector.
pub fn cards(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(face(), 0..=max).prop_map(|faces| with_ids(faces, 1))
}

/// A set: one rank in mixed colors, wilds sprinkled in, at least one number.
pub fn valid_set() -> impl Strategy<Value = Vec<Card>> {
    (rank(), prop::collection::vec(color(), 1..=5), 0usize..=3)
        .prop_map(|(rank, colors, wilds)| {
            let mut faces: Vec<Face> = colors.into_iter().map(|c| Face::number(rank, c)).collect();
            faces.extend(std::iter::repeat(Face::Wild).take(wilds));
            if faces.len() < 2 {
                faces.push(Face::Wild);
            }
            faces
        })
        .prop_shuffle()
        .prop_map(|faces| with_ids(faces, 100))
}

/// A run: consecutive ranks with some positions replaced by wilds, at
/// least one number kept.
pub fn valid_run() -> impl Strategy<Value = Vec<Card>> {
    (3u8..=9)
        .prop_flat_map(|len| {
            (
                Just(len),
                Rank::MIN..=(Rank::MAX - len + 1),
                prop::collection::vec((color(), any::<bool>()), len as usize),
            )
        })
        .prop_map(|(_, start, slots)| {
            let mut faces: Vec<Face> = slots
                .iter()
                .enumerate()
                .map(|(i, (c, wild))| {
                    if *wild {
                        Face::Wild
                    } else {
                        Face::number(Rank::new(start + i as u8).unwrap(), *c)
                    }
                })
                .collect();
            if faces.iter().all(|f| f.is_wild()) {
                faces[0] = Face::number(Rank::new(start).unwrap(), slots[0].0);
            }
            faces
        })
        .prop_shuffle()
        .prop_map(|faces| with_ids(faces, 200))
}

/// A color group: one color, any ranks, wilds sprinkled in.
pub fn valid_color_group() -> impl Strategy<Value = Vec<Card>> {
    (color(), prop::collection::vec(rank(), 1..=8), 0usize..=3)
        .prop_map(|(color, ranks, wilds)| {
            let mut faces: Vec<Face> = ranks.into_iter().map(|r| Face::number(r, color)).collect();
            faces.extend(std::iter::repeat(Face::Wild).take(wilds));
            faces
        })
        .prop_shuffle()
        .prop_map(|faces| with_ids(faces, 300))
}
