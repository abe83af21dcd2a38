//! Answering "tell me about <character>'s <move>" requests
//!
//! The voice front ends hand over whatever character and move they could
//! recognize. Every outcome, including missing data, becomes a response
//! that can be spoken; errors never reach the listener.

use crate::error::{Error, Result};
use crate::moveset::{CharacterMoveset, SpecialKind};
use crate::narrator::narrate;
use crate::store::MovesetStore;
use serde::{Deserialize, Serialize};

/// A character/move request; either part may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQuery {
    pub character: Option<String>,
    pub move_key: Option<String>,
}

impl MoveQuery {
    pub fn new(character: impl Into<String>, move_key: impl Into<String>) -> Self {
        Self {
            character: Some(character.into()),
            move_key: Some(move_key.into()),
        }
    }
}

/// Text to speak plus a short card title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub title: String,
    pub speech: String,
    pub reprompt: String,
}

impl Response {
    fn repeat(title: impl Into<String>, speech: String) -> Self {
        Self {
            title: title.into(),
            reprompt: speech.clone(),
            speech,
        }
    }
}

/// Answer a query from the store
pub fn answer(store: &MovesetStore, query: &MoveQuery) -> Response {
    match (non_blank(&query.character), non_blank(&query.move_key)) {
        (None, None) => Response {
            title: "Choose a character and move".to_string(),
            speech: "What character and move are you interested in?".to_string(),
            reprompt: "Please name a character and move. For example, say, tell me about Mario's up smash.".to_string(),
        },
        (Some(character), None) => {
            let speech = format!("Which of {}'s moves?", capitalize(character));
            Response {
                title: capitalize(character),
                reprompt: format!("I didn't get that. {}", speech),
                speech,
            }
        }
        (None, Some(move_key)) => {
            let speech = format!("Which character's {} do you want to know about?", move_key);
            Response {
                title: capitalize(move_key),
                reprompt: format!("I didn't get that. {}", speech),
                speech,
            }
        }
        (Some(character), Some(move_key)) => match store.load(character) {
            Ok(moveset) => answer_for(&moveset, character, move_key),
            Err(e) => {
                log::warn!("no moveset for '{}': {}", character, e);
                Response::repeat(
                    "Please try again",
                    format!("My B. I can't find any information about {}.", character),
                )
            }
        },
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Answer for an already-loaded moveset
pub fn answer_for(moveset: &CharacterMoveset, character: &str, move_key: &str) -> Response {
    let spoken = capitalize(character);
    match describe(moveset, &spoken, move_key) {
        Ok((label, text)) => {
            let follow_up = format!(
                "Ask about another one of {}'s moves, or name another character and move.",
                spoken
            );
            Response {
                title: capitalize(&format!("{}'s {}", character, label)),
                speech: format!(
                    "{} You can ask about another one of {}'s moves, or name another character and move.",
                    text, spoken
                ),
                reprompt: follow_up,
            }
        }
        Err(e) => {
            log::info!("cannot narrate {} for {}: {}", move_key, character, e);
            Response::repeat(
                "Please try again",
                format!(
                    "Sorry, I don't have any information about the {} for {}. Please name another character and move.",
                    move_key, spoken
                ),
            )
        }
    }
}

/// Resolve the move and narrate it, returning the spoken move label and text
pub fn describe(moveset: &CharacterMoveset, character: &str, move_key: &str) -> Result<(String, String)> {
    let not_found = || Error::MoveNotFound {
        character: moveset.character.clone(),
        name: move_key.to_string(),
    };

    if move_key.contains("special") {
        let kind = SpecialKind::from_name(move_key).ok_or_else(not_found)?;
        let slot = moveset.moveset.special(kind).ok_or_else(not_found)?;
        let label = if slot.label.is_empty() {
            move_key.to_string()
        } else {
            format!("{}, {},", move_key, capitalize(&slot.label))
        };
        let text = narrate(character, &label, &slot.parts)?;
        Ok((label, text))
    } else {
        let entry = moveset.moveset.get(move_key).ok_or_else(not_found)?;
        let text = narrate(character, move_key, entry.parts())?;
        Ok((move_key.to_string(), text))
    }
}

/// Upper-case the first letter of every space-separated word
pub fn capitalize(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
