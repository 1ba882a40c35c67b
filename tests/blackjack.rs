//! Blackjack table integration tests.

use casino_sim::{
    ActionError, BetError, Blackjack, BlackjackState, Card, DealError, Deck, EmptyDeckError,
    MemoryBalanceStore, Outcome, ShuffleError, Suit, TableOptions,
};
use rand::RngCore;

/// Always yields zero, so every draw takes the front card.
struct FrontRng;

impl RngCore for FrontRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

type RiggedTable = Blackjack<MemoryBalanceStore, FrontRng>;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn rigged(options: TableOptions, store: MemoryBalanceStore, draws: &[Card]) -> RiggedTable {
    let mut table = Blackjack::with_rng(options.with_penetration(0.0), store, FrontRng);
    table.shoe = Deck::from_cards(draws.to_vec());
    table
}

fn rigged_default(draws: &[Card]) -> RiggedTable {
    rigged(TableOptions::default(), MemoryBalanceStore::new(), draws)
}

#[test]
fn bet_and_deal_from_full_shoe() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 42);
    assert_eq!(table.state(), BlackjackState::Idle);

    table.place_bet(100).unwrap();
    assert_eq!(table.balance(), 900);
    assert_eq!(table.pot(), 100);
    assert_eq!(table.state(), BlackjackState::Betting);

    table.start_game().unwrap();
    assert_eq!(table.state(), BlackjackState::InProgress);
    assert_eq!(table.cards_remaining(), 204);
    assert_eq!(table.player_hand().len(), 2);
    assert_eq!(table.dealer_hand().len(), 2);
    assert_eq!(table.message(), "Game in progress...");
}

#[test]
fn bet_errors_leave_balance_untouched() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 1);

    let err = table.place_bet(1001).unwrap_err();
    assert_eq!(err, BetError::InsufficientBalance);
    assert_eq!(table.message(), err.to_string());
    assert_eq!(table.balance(), 1000);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.bet_amount(), 0);

    assert_eq!(table.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(table.balance(), 1000);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.place_bet(10).unwrap_err(), BetError::RoundInProgress);
    assert_eq!(table.balance(), 990);
    assert_eq!(table.pot(), 10);
}

#[test]
fn repeated_bets_accumulate_pot_and_keep_last_stake() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 3);

    table.place_bet(25).unwrap();
    table.place_bet(50).unwrap();

    assert_eq!(table.balance(), 925);
    assert_eq!(table.pot(), 75);
    assert_eq!(table.bet_amount(), 50);
}

#[test]
fn deal_errors() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 1);
    assert_eq!(table.start_game().unwrap_err(), DealError::NoBetPlaced);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.start_game().unwrap_err(), DealError::RoundInProgress);
    assert_eq!(table.cards_remaining(), 204);
}

#[test]
fn deal_with_short_shoe_changes_nothing() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 7),
    ]);
    table.place_bet(10).unwrap();

    assert_eq!(
        table.start_game().unwrap_err(),
        DealError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(table.state(), BlackjackState::Betting);
    assert_eq!(table.cards_remaining(), 3);
    assert_eq!(table.balance(), 990);
    assert!(table.player_hand().is_empty());
}

#[test]
fn actions_rejected_outside_a_round() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 9);

    assert_eq!(table.hit().unwrap_err(), ActionError::NotInProgress);
    assert_eq!(table.stand().unwrap_err(), ActionError::NotInProgress);
    assert_eq!(table.double_down().unwrap_err(), ActionError::NotInProgress);
    assert_eq!(table.message(), ActionError::NotInProgress.to_string());
    assert_eq!(table.cards_remaining(), 208);
}

#[test]
fn natural_pays_three_to_two_once() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Spades, 1),   // player
        card(Suit::Diamonds, 8), // dealer hole
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    assert!(table.player_hand().is_natural());

    let result = table.stand().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.payout, 250);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 17);

    assert_eq!(table.balance(), 1150);
    assert_eq!(table.winnings(), 250);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.state(), BlackjackState::Resolved);
    assert_eq!(table.outcome(), Some(Outcome::Blackjack));
    assert_eq!(table.message(), "Blackjack! Player wins!");

    assert_eq!(table.stand().unwrap_err(), ActionError::NotInProgress);
    assert_eq!(table.balance(), 1150);
}

#[test]
fn natural_payout_rounds_down_on_odd_stake() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 7),
    ]);

    table.place_bet(5).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(result.payout, 12);
    assert_eq!(table.balance(), 1007);
}

#[test]
fn hit_to_twenty_two_busts_immediately() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Spades, 2),   // player
        card(Suit::Diamonds, 7), // dealer hole
        card(Suit::Hearts, 13),  // player hit
        card(Suit::Clubs, 5),    // left in the shoe
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();

    let hit = table.hit().unwrap();
    assert_eq!(hit.rank, 13);
    assert_eq!(table.player_hand().value(), 22);

    assert_eq!(table.state(), BlackjackState::Resolved);
    assert_eq!(table.outcome(), Some(Outcome::Bust));
    assert_eq!(table.balance(), 900);
    assert_eq!(table.winnings(), 0);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.dealer_hand().len(), 2);
    assert_eq!(table.cards_remaining(), 1);

    assert_eq!(table.hit().unwrap_err(), ActionError::NotInProgress);
}

#[test]
fn higher_value_pays_double() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 7),
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.payout, 200);
    assert_eq!(table.balance(), 1100);
    assert_eq!(table.winnings(), 200);
}

#[test]
fn dealer_draws_below_seventeen_and_busts() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 10),  // dealer up
        card(Suit::Spades, 6),  // player
        card(Suit::Diamonds, 6), // dealer hole
        card(Suit::Hearts, 12), // dealer draw
    ]);

    table.place_bet(50).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(table.dealer_hand().len(), 3);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(table.balance(), 1050);
}

#[test]
fn lower_value_loses_stake() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 7),
        card(Suit::Diamonds, 9),
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.payout, 0);
    assert_eq!(table.balance(), 900);
    assert_eq!(table.winnings(), 0);
    assert_eq!(table.message(), "Dealer wins!");
}

#[test]
fn tie_refunds_stake() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 12),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 8),
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.payout, 100);
    assert_eq!(table.balance(), 1000);
    assert_eq!(table.pot(), 0);
}

#[test]
fn low_hole_card_is_hidden_until_stand() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 7),
        card(Suit::Diamonds, 8),
    ]);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();

    let snapshot = table.snapshot();
    assert!(snapshot.hole_hidden);
    assert_eq!(snapshot.dealer_cards, vec![Some(card(Suit::Clubs, 9)), None]);
    assert_eq!(snapshot.dealer_score, 9);
    assert_eq!(snapshot.dealer_score_label(), "9 ?");
    assert_eq!(snapshot.player_score, 17);
    assert!(snapshot.can_hit());
    assert!(snapshot.can_double());
    assert!(!snapshot.can_start());
    assert!(!snapshot.can_shuffle());

    table.stand().unwrap();
    let snapshot = table.snapshot();
    assert!(!snapshot.hole_hidden);
    assert_eq!(snapshot.dealer_score_label(), "17");
    assert!(snapshot.can_start());
    assert!(!snapshot.can_hit());
}

#[test]
fn ace_or_ten_hole_card_is_shown() {
    for hole in [1, 10, 11, 12, 13] {
        let mut table = rigged_default(&[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 6),
            card(Suit::Spades, 5),
            card(Suit::Diamonds, hole),
        ]);

        table.place_bet(10).unwrap();
        table.start_game().unwrap();

        assert!(!table.dealer_hand().is_hole_hidden(), "hole rank {hole}");
        assert_eq!(table.snapshot().dealer_cards.iter().flatten().count(), 2);
    }
}

#[test]
fn double_down_draws_one_card_and_settles() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 5),   // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Spades, 6),   // player
        card(Suit::Diamonds, 8), // dealer hole
        card(Suit::Hearts, 10),  // double draw
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.double_down().unwrap();

    assert_eq!(table.player_hand().len(), 3);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.stake, 100);
    assert_eq!(result.payout, 200);
    assert_eq!(table.balance(), 1100);
    assert_eq!(table.state(), BlackjackState::Resolved);
}

#[test]
fn double_down_bust_loses() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 9),
    ]);

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.double_down().unwrap();

    assert_eq!(result.player_value, 25);
    assert_eq!(result.outcome, Outcome::Bust);
    assert_eq!(table.balance(), 900);
    assert_eq!(table.winnings(), 0);
}

#[test]
fn double_down_charges_stake_when_enabled() {
    let mut table = rigged(
        TableOptions::default().with_charge_double_down(true),
        MemoryBalanceStore::new(),
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 6),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 10),
        ],
    );

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    let result = table.double_down().unwrap();

    assert_eq!(result.stake, 200);
    assert_eq!(result.payout, 400);
    assert_eq!(table.balance(), 1200);
}

#[test]
fn double_down_rejections() {
    let mut table = rigged(
        TableOptions::default(),
        MemoryBalanceStore::with_values(150, 0),
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 3),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 4),
        ],
    );

    table.place_bet(100).unwrap();
    table.start_game().unwrap();
    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::InsufficientBalance
    );
    assert_eq!(table.player_hand().len(), 2);
    assert_eq!(table.cards_remaining(), 1);

    table.hit().unwrap();
    assert_eq!(table.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(table.state(), BlackjackState::InProgress);
}

#[test]
fn stand_with_exhausted_shoe_changes_nothing() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 2),
    ]);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();

    assert_eq!(
        table.stand().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(table.state(), BlackjackState::InProgress);
    assert!(table.dealer_hand().is_hole_hidden());
    assert_eq!(table.dealer_hand().len(), 2);
    assert_eq!(table.balance(), 990);
    assert_eq!(table.pot(), 10);
}

#[test]
fn shuffle_refills_exhausted_shoe_mid_round() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 6),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 2),
    ]);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    assert!(!table.snapshot().can_shuffle());

    assert_eq!(
        table.stand().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(table.message(), EmptyDeckError.to_string());
    assert!(table.snapshot().can_shuffle());

    table.shuffle().unwrap();
    assert_eq!(table.state(), BlackjackState::InProgress);
    assert_eq!(table.cards_remaining(), 208);
    assert_eq!(table.player_hand().value(), 19);
    assert_eq!(table.dealer_hand().len(), 2);
    assert!(table.dealer_hand().is_hole_hidden());
    assert_eq!(table.pot(), 10);
    assert!(!table.snapshot().can_shuffle());

    table.stand().unwrap();
    assert_eq!(table.state(), BlackjackState::Resolved);
    assert_eq!(table.pot(), 0);
}

#[test]
fn winning_payout_saturates_balance() {
    let store = MemoryBalanceStore::with_values(usize::MAX - 1, 0);
    let mut table = rigged(
        TableOptions::default(),
        store,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 7),
        ],
    );

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    let result = table.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.payout, 20);
    assert_eq!(table.balance(), usize::MAX);
}

#[test]
fn shuffle_rebuilds_full_shoe() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 5);

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.shuffle().unwrap_err(), ShuffleError::RoundInProgress);
    assert_eq!(table.cards_remaining(), 204);

    table.stand().unwrap();
    table.shuffle().unwrap();
    assert_eq!(table.cards_remaining(), 208);
    assert_eq!(table.state(), BlackjackState::Idle);
    assert!(table.player_hand().is_empty());
    assert!(table.dealer_hand().is_empty());
    assert_eq!(table.outcome(), None);

    table.shuffle().unwrap();
    assert_eq!(table.cards_remaining(), 208);
    assert_eq!(table.message(), casino_sim::blackjack::WELCOME_MESSAGE);
}

#[test]
fn resolved_round_can_be_dealt_again_with_same_stake() {
    let mut table = rigged_default(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 7),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 7),
    ]);

    table.place_bet(20).unwrap();
    table.start_game().unwrap();
    table.stand().unwrap();
    assert_eq!(table.balance(), 980);

    table.start_game().unwrap();
    assert_eq!(table.state(), BlackjackState::InProgress);
    assert_eq!(table.bet_amount(), 20);
    assert_eq!(table.player_hand().value(), 10);
    assert_eq!(table.outcome(), None);
}

#[test]
fn start_game_clears_previous_winnings() {
    let mut table = rigged(
        TableOptions::default(),
        MemoryBalanceStore::with_values(500, 75),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 7),
            card(Suit::Diamonds, 9),
        ],
    );

    table.place_bet(10).unwrap();
    assert_eq!(table.winnings(), 75);
    table.start_game().unwrap();
    assert_eq!(table.winnings(), 0);
}

#[test]
fn reshuffle_when_penetration_reached() {
    let options = TableOptions::default().with_decks(1).with_penetration(0.5);
    let mut table = Blackjack::new(options, MemoryBalanceStore::new(), 1);
    table.shoe = Deck::from_cards(vec![card(Suit::Hearts, 2); 10]);
    assert!(table.needs_reshuffle());

    table.place_bet(10).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.cards_remaining(), 48);
}

#[test]
fn reset_balance_restores_default() {
    let mut table = Blackjack::new(TableOptions::default(), MemoryBalanceStore::new(), 2);
    table.place_bet(400).unwrap();
    table.start_game().unwrap();

    table.reset_balance();
    assert_eq!(table.balance(), 1000);
    assert_eq!(table.winnings(), 0);
    assert_eq!(table.state(), BlackjackState::InProgress);
}
