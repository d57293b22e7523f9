use core::cmp::Ordering;

use gdrs::{
    Card, Combination, Deck, DeckOptions, Hand, Rank, RawCard, Suit, beats_raw, classify_raw,
    compare_raw,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Classifies a JS array of `{ rank, suit }` objects.
///
/// Returns `null` for cards that form no combination, including any set that
/// holds a malformed card.
#[wasm_bindgen]
pub fn classify(cards: JsValue) -> Result<JsValue, JsValue> {
    let raw = from_js_cards(cards)?;
    match classify_raw(&raw) {
        Some(combination) => to_js_value(&JsCombination::from(&combination)),
        None => Ok(JsValue::NULL),
    }
}

/// Returns whether `challenger` beats the cards on the table.
#[wasm_bindgen]
pub fn beats(challenger: JsValue, table: JsValue) -> Result<bool, JsValue> {
    let challenger = from_js_cards(challenger)?;
    let table = from_js_cards(table)?;
    Ok(beats_raw(&challenger, &table))
}

/// Orders two cards, returning -1, 0 or 1. Malformed cards compare equal.
#[wasm_bindgen]
pub fn compare(a: JsValue, b: JsValue) -> Result<i32, JsValue> {
    let a: RawCard = serde_wasm_bindgen::from_value(a).map_err(js_err)?;
    let b: RawCard = serde_wasm_bindgen::from_value(b).map_err(js_err)?;
    Ok(match compare_raw(&a, &b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::new(DeckOptions::default(), seed as u64),
        }
    }

    pub fn reshuffle(&mut self) {
        self.deck.reshuffle();
    }

    pub fn cards_remaining(&self) -> u32 {
        self.deck.len() as u32
    }

    /// Deals every card and returns one array of cards per hand.
    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let hands = self.deck.deal().map_err(js_err)?;
        let hands: Vec<Vec<JsCard>> = hands.iter().map(hand_to_js).collect();
        to_js_value(&hands)
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: Rank,
    suit: Suit,
    label: String,
    value: u8,
}

#[derive(Serialize)]
struct JsCombination {
    kind: &'static str,
    is_bomb: bool,
    cards: Vec<JsCard>,
}

impl From<&Combination> for JsCombination {
    fn from(combination: &Combination) -> Self {
        Self {
            kind: combination.kind().name(),
            is_bomb: combination.is_bomb(),
            cards: combination.cards().iter().map(card_to_js).collect(),
        }
    }
}

fn hand_to_js(hand: &Hand) -> Vec<JsCard> {
    hand.cards().iter().map(card_to_js).collect()
}

fn card_to_js(card: &Card) -> JsCard {
    JsCard {
        rank: card.rank(),
        suit: card.suit(),
        label: card.to_string(),
        value: card.value(),
    }
}

fn from_js_cards(value: JsValue) -> Result<Vec<RawCard>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(value).map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
