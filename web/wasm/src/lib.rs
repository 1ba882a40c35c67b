use std::sync::Arc;

use casino_sim::{
    BlackjackSnapshot, BlackjackState, Blackjack, Card, Color, MemoryBalanceStore, Outcome,
    Roulette, RouletteSnapshot, RouletteState, RoundResult, Slot, SpinResult, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

type Store = Arc<MemoryBalanceStore>;

#[wasm_bindgen]
pub struct WasmCasino {
    blackjack: Blackjack<Store>,
    roulette: Roulette<Store>,
}

#[wasm_bindgen]
impl WasmCasino {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let store = Arc::new(MemoryBalanceStore::new());
        Self {
            blackjack: Blackjack::new(TableOptions::default(), Arc::clone(&store), seed as u64),
            roulette: Roulette::new(store, (seed as u64).wrapping_add(1)),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn reset_balance(&mut self) {
        self.blackjack.reset_balance();
    }

    pub fn blackjack_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.blackjack.place_bet(amount as usize).map_err(js_err)
    }

    pub fn blackjack_start(&mut self) -> Result<(), JsValue> {
        self.blackjack.start_game().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.blackjack.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.blackjack.stand().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn double_down(&mut self) -> Result<JsValue, JsValue> {
        let result = self.blackjack.double_down().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn shuffle(&mut self) -> Result<(), JsValue> {
        self.blackjack.shuffle().map_err(js_err)
    }

    pub fn roulette_bet(&mut self, amount: u32, color: &str) -> Result<(), JsValue> {
        let color = color_from_str(color)?;
        self.roulette
            .place_bet(amount as usize, color)
            .map_err(js_err)
    }

    pub fn spin(&mut self) -> Result<JsValue, JsValue> {
        let result = self.roulette.spin().map_err(js_err)?;
        to_js_value(&JsSpin::from(result))
    }

    pub fn blackjack_snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsBlackjack::from(self.blackjack.snapshot()))
    }

    pub fn roulette_snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsRoulette::from(self.roulette.snapshot()))
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsBlackjack {
    state: &'static str,
    player_cards: Vec<JsCard>,
    dealer_cards: Vec<Option<JsCard>>,
    player_score: u8,
    dealer_score: String,
    bet_amount: u32,
    pot: u32,
    balance: u32,
    winnings: u32,
    outcome: Option<&'static str>,
    message: String,
    cards_remaining: u32,
    can_bet: bool,
    can_start: bool,
    can_hit: bool,
    can_stand: bool,
    can_double: bool,
    can_shuffle: bool,
}

impl From<BlackjackSnapshot> for JsBlackjack {
    fn from(snapshot: BlackjackSnapshot) -> Self {
        Self {
            state: blackjack_state_to_str(snapshot.state),
            player_cards: snapshot.player_cards.iter().copied().map(card_to_js).collect(),
            dealer_cards: snapshot
                .dealer_cards
                .iter()
                .map(|card| card.map(card_to_js))
                .collect(),
            player_score: snapshot.player_score,
            dealer_score: snapshot.dealer_score_label(),
            bet_amount: snapshot.bet_amount as u32,
            pot: snapshot.pot as u32,
            balance: snapshot.balance as u32,
            winnings: snapshot.winnings as u32,
            outcome: snapshot.outcome.map(outcome_to_str),
            cards_remaining: snapshot.cards_remaining as u32,
            can_bet: snapshot.can_bet(),
            can_start: snapshot.can_start(),
            can_hit: snapshot.can_hit(),
            can_stand: snapshot.can_stand(),
            can_double: snapshot.can_double(),
            can_shuffle: snapshot.can_shuffle(),
            message: snapshot.message,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    message: &'static str,
    stake: u32,
    payout: u32,
    player_value: u8,
    dealer_value: u8,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.message(),
            stake: result.stake as u32,
            payout: result.payout as u32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
        }
    }
}

#[derive(Serialize)]
struct JsSlot {
    label: String,
    color: &'static str,
}

impl From<Slot> for JsSlot {
    fn from(slot: Slot) -> Self {
        Self {
            label: slot.pocket.to_string(),
            color: slot.color.name(),
        }
    }
}

#[derive(Serialize)]
struct JsSpin {
    slot: JsSlot,
    bet_color: &'static str,
    stake: u32,
    won: bool,
    payout: u32,
}

impl From<SpinResult> for JsSpin {
    fn from(result: SpinResult) -> Self {
        Self {
            slot: JsSlot::from(result.slot),
            bet_color: result.bet_color.name(),
            stake: result.stake as u32,
            won: result.won,
            payout: result.payout as u32,
        }
    }
}

#[derive(Serialize)]
struct JsRoulette {
    state: &'static str,
    wheel: Vec<JsSlot>,
    pot: u32,
    bet_color: Option<&'static str>,
    balance: u32,
    winnings: u32,
    last_spin: Option<JsSpin>,
    message: String,
    can_bet: bool,
    can_spin: bool,
}

impl From<RouletteSnapshot> for JsRoulette {
    fn from(snapshot: RouletteSnapshot) -> Self {
        Self {
            state: roulette_state_to_str(snapshot.state),
            wheel: snapshot.wheel.iter().copied().map(JsSlot::from).collect(),
            pot: snapshot.pot as u32,
            bet_color: snapshot.bet_color.map(Color::name),
            balance: snapshot.balance as u32,
            winnings: snapshot.winnings as u32,
            last_spin: snapshot.last_spin.map(JsSpin::from),
            can_bet: snapshot.can_bet(),
            can_spin: snapshot.can_spin(),
            message: snapshot.message,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank_label(),
    }
}

fn color_from_str(color: &str) -> Result<Color, JsValue> {
    match color {
        "Red" | "red" => Ok(Color::Red),
        "Black" | "black" => Ok(Color::Black),
        "Green" | "green" => Ok(Color::Green),
        _ => Err(JsValue::from_str("unknown color")),
    }
}

fn blackjack_state_to_str(state: BlackjackState) -> &'static str {
    match state {
        BlackjackState::Idle => "Idle",
        BlackjackState::Betting => "Betting",
        BlackjackState::InProgress => "InProgress",
        BlackjackState::Resolved => "Resolved",
    }
}

fn roulette_state_to_str(state: RouletteState) -> &'static str {
    match state {
        RouletteState::Idle => "Idle",
        RouletteState::Betting => "Betting",
        RouletteState::Spinning => "Spinning",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Bust => "Bust",
        Outcome::Blackjack => "Blackjack",
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
