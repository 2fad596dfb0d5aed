use bjsolo::{Card, Game, GameOptions, Outcome, Suit, TableView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    /// Returns `false` if the hit was ignored because the round is over.
    pub fn hit(&mut self) -> bool {
        self.game.hit().is_some()
    }

    /// Returns the outcome message, or `None` if the stand was ignored.
    pub fn stand(&mut self) -> Option<String> {
        self.game.stand().map(|outcome| outcome.message().to_string())
    }

    pub fn rounds_played(&self) -> u32 {
        self.game.rounds_played()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: self.game.state().as_str(),
            table: self.game.view().map(JsTable::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    table: Option<JsTable>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsTable {
    player: Vec<JsCard>,
    player_score: u8,
    /// `None` entries are face-down cards.
    dealer: Vec<Option<JsCard>>,
    dealer_score: Option<u8>,
    outcome: Option<&'static str>,
    message: &'static str,
    cards_remaining: u32,
}

impl From<TableView> for JsTable {
    fn from(view: TableView) -> Self {
        Self {
            player: view.player.into_iter().map(card_to_js).collect(),
            player_score: view.player_score,
            dealer: view
                .dealer
                .into_iter()
                .map(|card| card.map(card_to_js))
                .collect(),
            dealer_score: view.dealer_score,
            outcome: view.outcome.map(outcome_to_str),
            message: view.message,
            cards_remaining: view.cards_remaining as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        red: card.suit.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBusts => "PlayerBusts",
        Outcome::DealerBusts => "DealerBusts",
        Outcome::PlayerWins => "PlayerWins",
        Outcome::DealerWins => "DealerWins",
        Outcome::Tie => "Tie",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
