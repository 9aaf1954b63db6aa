//! Turn engine.
//!
//! `Game` owns the three players and the table. Controlled seats act through
//! `step`; every other seat is answered by its `Player::respond` as the
//! rotation reaches it. A call to `step` returns as soon as a controlled
//! seat is to act or a hand empties, and the next call resumes from there.

use im::Vector;
use tracing::{debug, info, warn};

use super::player::Player;
use super::policy::{LastPlay, Response};
use crate::cards::{ActionCatalog, CardSet, Deck};
use crate::core::{ActionIndex, ActionRecord, GameConfig, GameError, GameRng, Seat, SeatMap, PASS};
use crate::nn::{EncodedState, LandlordEncoder, StateEncoder};
use crate::rules::{Environment, Outcome};

/// One episode of the game, reusable across episodes via `reset`.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    catalog: &'static ActionCatalog,
    rng: GameRng,
    deck: Deck,
    /// Public record of the landlord's bottom cards once dealt.
    bottom: CardSet,
    players: SeatMap<Player>,
    landlord: Option<Seat>,
    last_play: Option<LastPlay>,
    /// Every card played this episode.
    history: CardSet,
    log: Vector<ActionRecord>,
    next_seat: Option<Seat>,
    outcome: Outcome,
    winner: Option<Seat>,
    turn: u32,
}

impl Game {
    /// Create a game with a freshly shuffled deck.
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let players = SeatMap::new(|seat| Player::new(seat, config.is_controlled(seat)));
        let mut game = Self {
            config,
            catalog: ActionCatalog::shared(),
            rng,
            deck: Deck::empty(),
            bottom: CardSet::new(),
            players,
            landlord: None,
            last_play: None,
            history: CardSet::new(),
            log: Vector::new(),
            next_seat: None,
            outcome: Outcome::Continue,
            winner: None,
            turn: 0,
        };
        game.reset();
        game
    }

    /// Start a new episode: reshuffle and seat fresh players.
    ///
    /// Successive resets continue the same seeded stream, so a seed fixes
    /// the whole sequence of deals.
    pub fn reset(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        let config = &self.config;
        self.players = SeatMap::new(|seat| Player::new(seat, config.is_controlled(seat)));
        self.bottom = CardSet::new();
        self.landlord = None;
        self.last_play = None;
        self.history = CardSet::new();
        self.log = Vector::new();
        self.next_seat = None;
        self.outcome = Outcome::Continue;
        self.winner = None;
        self.turn = 0;
    }

    /// Change whether a seat is driven through `step`. Persists across resets.
    pub fn set_controlled(&mut self, seat: Seat, controlled: bool) {
        self.config.controlled[seat] = controlled;
        self.players[seat].set_controlled(controlled);
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Dealing ===

    /// Deal the shuffled deck, crown `landlord`, and play uncontrolled seats
    /// until a controlled seat is to act.
    pub fn prepare(&mut self, landlord: Seat) -> Result<Outcome, GameError> {
        if self.landlord.is_some() || self.deck.len() != Deck::SIZE {
            return Err(GameError::AlreadyDealt);
        }
        let bottom = self.deck.take_bottom();
        let hands = self.deck.deal();
        self.seat_cards(hands, bottom, landlord);
        self.open(landlord)
    }

    /// Like `prepare`, but with fixed hands and bottom instead of the deck.
    ///
    /// The undealt deck is discarded. The given cards need not add up to a
    /// full deck.
    pub fn prepare_with(
        &mut self,
        hands: SeatMap<CardSet>,
        bottom: CardSet,
        landlord: Seat,
    ) -> Result<Outcome, GameError> {
        if self.landlord.is_some() || self.deck.len() != Deck::SIZE {
            return Err(GameError::AlreadyDealt);
        }
        self.deck = Deck::empty();
        self.seat_cards(hands, bottom, landlord);
        self.open(landlord)
    }

    fn seat_cards(&mut self, hands: SeatMap<CardSet>, bottom: CardSet, landlord: Seat) {
        for (seat, hand) in hands.iter() {
            self.players[seat].draw(hand);
        }
        let lord = &mut self.players[landlord];
        lord.draw(&bottom);
        lord.crown();

        self.bottom = bottom;
        self.landlord = Some(landlord);
        info!(landlord = %landlord, bottom = %bottom, "dealt");
    }

    /// One rotation from the landlord, stopping at the first controlled seat.
    /// With no controlled seat the rotation ends back at the landlord.
    fn open(&mut self, landlord: Seat) -> Result<Outcome, GameError> {
        let mut seat = landlord;
        for _ in 0..Seat::COUNT {
            if self.players[seat].is_controlled() {
                self.next_seat = Some(seat);
                return Ok(Outcome::Continue);
            }
            if self.players[seat].hand().is_empty() {
                return Err(self.exhausted(seat));
            }
            let outcome = self.auto_respond(seat);
            if outcome.is_terminal() {
                return Ok(outcome);
            }
            seat = seat.next();
        }
        self.next_seat = Some(seat);
        Ok(Outcome::Continue)
    }

    // === Turns ===

    /// Legality of every catalog action for `seat`.
    #[must_use]
    pub fn get_mask(&self, seat: Seat) -> Vec<bool> {
        let hand = self.players[seat].hand();
        let contested = self.last_play.as_ref().filter(|last| last.owner != seat);

        let mut mask = vec![false; self.catalog.len()];
        for (index, group) in self.catalog.plays() {
            mask[index] = hand.contains_all(group.cards())
                && contested.map_or(true, |last| group.bigger_than(&last.group));
        }
        mask[PASS] = contested.is_some();
        mask
    }

    /// Apply a controlled seat's action, then play uncontrolled seats until a
    /// controlled seat is to act or a hand empties.
    ///
    /// # Panics
    ///
    /// Panics if `action` is outside the catalog, if it is not to `seat` to
    /// act, or if `action` is not set in `get_mask(seat)`.
    pub fn step(&mut self, seat: Seat, action: ActionIndex) -> Result<Outcome, GameError> {
        let group = self.catalog.group(action).copied();
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.landlord.is_none() {
            return Err(GameError::NotDealt);
        }
        assert_eq!(
            self.next_seat,
            Some(seat),
            "{} acted out of turn",
            seat
        );
        assert!(
            self.get_mask(seat)[action],
            "{} submitted action {} outside its mask",
            seat,
            action
        );

        let response = match group {
            Some(group) => {
                self.players[seat].discard(group.cards());
                Response::Play(group)
            }
            None => Response::Pass,
        };
        let outcome = self.apply(seat, response, true);
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        self.advance(seat)
    }

    /// Scan the two seats after `from`. Uncontrolled seats respond; the first
    /// controlled seat takes over.
    fn advance(&mut self, from: Seat) -> Result<Outcome, GameError> {
        let mut seat = from.next();
        for _ in 1..Seat::COUNT {
            if self.players[seat].is_controlled() {
                self.next_seat = Some(seat);
                return Ok(Outcome::Continue);
            }
            if self.players[seat].hand().is_empty() {
                return Err(self.exhausted(seat));
            }
            let outcome = self.auto_respond(seat);
            if outcome.is_terminal() {
                return Ok(outcome);
            }
            seat = seat.next();
        }

        if self.players[seat].is_controlled() {
            self.next_seat = Some(seat);
            Ok(Outcome::Continue)
        } else {
            Err(self.exhausted(seat))
        }
    }

    fn exhausted(&mut self, seat: Seat) -> GameError {
        warn!(seat = %seat, turn = self.turn, "rotation exhausted without a controlled turn");
        self.next_seat = Some(seat);
        GameError::RotationExhausted { seat }
    }

    fn auto_respond(&mut self, seat: Seat) -> Outcome {
        let before = self.players[seat.prev()].neighbor();
        let after = self.players[seat.next()].neighbor();
        let last = self.last_play;
        let response = self.players[seat].respond(last.as_ref(), before, after);
        self.apply(seat, response, false)
    }

    /// Record a response whose cards have already left the hand.
    fn apply(&mut self, seat: Seat, response: Response, controlled: bool) -> Outcome {
        let record = match response {
            Response::Play(group) => {
                debug!(seat = %seat, cards = %group.cards(), controlled, "play");
                self.last_play = Some(LastPlay { owner: seat, group });
                self.history.insert_all(group.cards());
                ActionRecord::play(seat, self.turn, *group.cards(), controlled)
            }
            Response::Pass => {
                debug!(seat = %seat, controlled, "pass");
                ActionRecord::pass(seat, self.turn, controlled)
            }
        };
        self.log.push_back(record);
        self.turn += 1;

        let player = &self.players[seat];
        if !response.is_pass() && player.hand().is_empty() {
            self.outcome = Outcome::emptied_by(player.is_landlord());
            self.winner = Some(seat);
            self.next_seat = None;
            info!(winner = %seat, outcome = ?self.outcome, turns = self.turn, "game over");
        }
        self.outcome
    }

    /// Play every remaining turn with the rule-based policy, controlled seats
    /// included.
    pub fn autoplay(&mut self) -> Result<Outcome, GameError> {
        if self.landlord.is_none() {
            return Err(GameError::NotDealt);
        }
        let start = self.turn;
        let budget = self.config.max_turns;

        while !self.outcome.is_terminal() {
            let Some(seat) = self.next_seat else {
                break;
            };
            if self.turn - start >= budget {
                warn!(turns = budget, "autoplay stalled");
                return Err(GameError::Stalled { turns: budget });
            }
            if self.players[seat].hand().is_empty() {
                return Err(self.exhausted(seat));
            }
            if !self.auto_respond(seat).is_terminal() {
                self.next_seat = Some(seat.next());
            }
        }
        Ok(self.outcome)
    }

    // === Observation ===

    /// Seat whose turn is pending, `None` before dealing or after the game.
    #[must_use]
    pub fn to_act(&self) -> Option<Seat> {
        self.next_seat
    }

    #[must_use]
    pub fn landlord(&self) -> Option<Seat> {
        self.landlord
    }

    /// Seat that emptied its hand.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn last_play(&self) -> Option<&LastPlay> {
        self.last_play.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &CardSet {
        &self.history
    }

    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    #[must_use]
    pub fn bottom(&self) -> &CardSet {
        &self.bottom
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &CardSet {
        self.players[seat].hand()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Cards in the deck, the hands and the history.
    ///
    /// The bottom is not counted separately: once dealt it sits in the
    /// landlord's hand.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.deck.len() + self.history.len() + self.players.values().map(Player::cards_left).sum::<usize>()
    }

    /// Observation for `seat`: history, bottom, own hand.
    #[must_use]
    pub fn get_state(&self, seat: Seat) -> EncodedState {
        LandlordEncoder.encode(self, seat)
    }
}

impl Environment for Game {
    fn reset(&mut self) {
        Game::reset(self);
    }

    fn prepare(&mut self, landlord: Seat) -> Result<Outcome, GameError> {
        Game::prepare(self, landlord)
    }

    fn get_state(&self, seat: Seat) -> EncodedState {
        Game::get_state(self, seat)
    }

    fn get_mask(&self, seat: Seat) -> Vec<bool> {
        Game::get_mask(self, seat)
    }

    fn step(&mut self, seat: Seat, action: ActionIndex) -> Result<Outcome, GameError> {
        Game::step(self, seat, action)
    }

    fn autoplay(&mut self) -> Result<Outcome, GameError> {
        Game::autoplay(self)
    }

    fn to_act(&self) -> Option<Seat> {
        Game::to_act(self)
    }

    fn is_controlled(&self, seat: Seat) -> bool {
        self.players[seat].is_controlled()
    }

    fn landlord(&self) -> Option<Seat> {
        Game::landlord(self)
    }

    fn winner(&self) -> Option<Seat> {
        Game::winner(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardGroup, Rank, ACTION_SPACE_SIZE};

    fn cards(s: &str) -> CardSet {
        s.parse().unwrap()
    }

    fn hands(a: &str, b: &str, c: &str) -> SeatMap<CardSet> {
        let mut map = SeatMap::with_default();
        map[Seat::new(0)] = cards(a);
        map[Seat::new(1)] = cards(b);
        map[Seat::new(2)] = cards(c);
        map
    }

    #[test]
    fn test_prepare_deals_everything() {
        let mut game = Game::new(GameConfig::new(7).all_controlled());
        assert_eq!(game.card_total(), 54);

        let outcome = game.prepare(Seat::new(0)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(game.deck().is_empty());
        assert_eq!(game.hand(Seat::new(0)).len(), 20);
        assert_eq!(game.hand(Seat::new(1)).len(), 17);
        assert_eq!(game.hand(Seat::new(2)).len(), 17);
        assert_eq!(game.bottom().len(), 3);
        assert!(game.hand(Seat::new(0)).contains_all(game.bottom()));
        assert!(game.history().is_empty());
        assert_eq!(game.card_total(), 54);
        assert_eq!(game.to_act(), Some(Seat::new(0)));
        assert!(game.player(Seat::new(0)).is_landlord());
    }

    #[test]
    fn test_prepare_twice_fails() {
        let mut game = Game::new(GameConfig::new(7).all_controlled());
        game.prepare(Seat::new(1)).unwrap();
        assert_eq!(game.prepare(Seat::new(1)), Err(GameError::AlreadyDealt));

        game.reset();
        assert!(game.prepare(Seat::new(1)).is_ok());
    }

    #[test]
    fn test_step_before_deal() {
        let mut game = Game::new(GameConfig::new(7).all_controlled());
        assert_eq!(game.step(Seat::new(0), PASS), Err(GameError::NotDealt));
        assert_eq!(game.autoplay(), Err(GameError::NotDealt));
    }

    #[test]
    #[should_panic(expected = "outside the catalog")]
    fn test_step_out_of_range_panics() {
        let mut game = Game::new(GameConfig::new(7).all_controlled());
        game.prepare(Seat::new(0)).unwrap();
        let _ = game.step(Seat::new(0), ACTION_SPACE_SIZE);
    }

    #[test]
    #[should_panic(expected = "outside its mask")]
    fn test_pass_on_lead_panics() {
        let mut game = Game::new(GameConfig::new(3).all_controlled());
        game.prepare_with(hands("3 4 4", "5", "6"), CardSet::new(), Seat::new(0))
            .unwrap();
        let _ = game.step(Seat::new(0), PASS);
    }

    #[test]
    #[should_panic(expected = "outside its mask")]
    fn test_wrong_shape_over_last_play_panics() {
        let mut game = Game::new(GameConfig::new(3).all_controlled());
        game.prepare_with(hands("K 9", "4 4 7", "6"), CardSet::new(), Seat::new(0))
            .unwrap();
        let king = ActionCatalog::shared().index_of(&cards("K")).unwrap();
        let pair = ActionCatalog::shared().index_of(&cards("4 4")).unwrap();
        game.step(Seat::new(0), king).unwrap();
        let _ = game.step(Seat::new(1), pair);
    }

    #[test]
    #[should_panic(expected = "acted out of turn")]
    fn test_step_out_of_turn_panics() {
        let mut game = Game::new(GameConfig::new(3).all_controlled());
        game.prepare_with(hands("3 4 4", "5", "6"), CardSet::new(), Seat::new(0))
            .unwrap();
        let five = ActionCatalog::shared().index_of(&cards("5")).unwrap();
        let _ = game.step(Seat::new(1), five);
    }

    #[test]
    fn test_lead_mask_forbids_pass() {
        let mut game = Game::new(GameConfig::new(3).all_controlled());
        game.prepare_with(hands("3 4 4", "5", "6"), CardSet::new(), Seat::new(0))
            .unwrap();

        let mask = game.get_mask(Seat::new(0));
        assert!(!mask[PASS]);
        let catalog = ActionCatalog::shared();
        let legal: Vec<_> = (0..mask.len()).filter(|&i| mask[i]).collect();
        let expected: Vec<_> = [
            CardGroup::single(Rank::Three),
            CardGroup::single(Rank::Four),
            CardGroup::pair(Rank::Four),
        ]
        .iter()
        .filter_map(|g| catalog.index_of(g.cards()))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
        assert_eq!(legal, expected);
    }

    #[test]
    fn test_step_returns_at_next_controlled_seat() {
        let config = GameConfig::new(3)
            .with_controlled(Seat::new(0))
            .with_controlled(Seat::new(2));
        let mut game = Game::new(config);
        game.prepare_with(hands("3 3 9 K", "4 8", "5 6 7 J"), CardSet::new(), Seat::new(0))
            .unwrap();
        assert_eq!(game.to_act(), Some(Seat::new(0)));

        let catalog = ActionCatalog::shared();
        let three = catalog.index_of(&cards("3")).unwrap();
        let outcome = game.step(Seat::new(0), three).unwrap();
        assert_eq!(outcome, Outcome::Continue);

        // Seat 1 answers the landlord's 3 with its cheapest beat.
        assert_eq!(game.hand(Seat::new(1)), &cards("8"));
        assert_eq!(game.to_act(), Some(Seat::new(2)));
        assert_eq!(game.last_play().map(|l| l.owner), Some(Seat::new(1)));
        assert_eq!(game.history(), &cards("3 4"));
        assert_eq!(game.log().len(), 2);
        assert!(game.log()[0].controlled);
        assert!(!game.log()[1].controlled);
    }

    #[test]
    fn test_landlord_empties_hand() {
        let mut game = Game::new(GameConfig::new(3).all_controlled());
        game.prepare_with(hands("9 9", "3 4", "5 6"), CardSet::new(), Seat::new(0))
            .unwrap();

        let pair = ActionCatalog::shared().index_of(&cards("9 9")).unwrap();
        assert_eq!(game.step(Seat::new(0), pair), Ok(Outcome::LandlordWins));
        assert_eq!(game.winner(), Some(Seat::new(0)));
        assert_eq!(game.to_act(), None);
        assert_eq!(game.history(), &cards("9 9"));
        assert_eq!(game.step(Seat::new(1), PASS), Err(GameError::GameOver));
    }

    #[test]
    fn test_auto_seat_can_win_during_advance() {
        let mut game = Game::new(GameConfig::new(3).with_controlled(Seat::new(0)));
        game.prepare_with(hands("3 9 K", "5", "6 6"), CardSet::new(), Seat::new(0))
            .unwrap();

        let three = ActionCatalog::shared().index_of(&cards("3")).unwrap();
        assert_eq!(game.step(Seat::new(0), three), Ok(Outcome::PeasantsWin));
        assert_eq!(game.winner(), Some(Seat::new(1)));
    }

    #[test]
    fn test_empty_uncontrolled_hand_is_an_anomaly() {
        let mut game = Game::new(GameConfig::new(3).with_controlled(Seat::new(0)));
        game.prepare_with(hands("3 9 K", "", "6 6"), CardSet::new(), Seat::new(0))
            .unwrap();

        let three = ActionCatalog::shared().index_of(&cards("3")).unwrap();
        assert_eq!(
            game.step(Seat::new(0), three),
            Err(GameError::RotationExhausted { seat: Seat::new(1) })
        );
    }

    #[test]
    fn test_uncontrolled_prepare_then_autoplay() {
        let mut game = Game::new(GameConfig::new(11));
        let outcome = game.prepare(Seat::new(2)).unwrap();
        if !outcome.is_terminal() {
            assert_eq!(game.to_act(), Some(Seat::new(2)));
            assert_eq!(game.log().len(), 3);
        }

        let outcome = game.autoplay().unwrap();
        assert!(outcome.is_terminal());
        let winner = game.winner().unwrap();
        assert!(game.hand(winner).is_empty());
        assert_eq!(outcome.is_winner(true), winner == Seat::new(2));
        assert_eq!(game.card_total(), 54);
    }

    #[test]
    fn test_set_controlled_survives_reset() {
        let mut game = Game::new(GameConfig::new(5));
        game.set_controlled(Seat::new(1), true);
        game.reset();
        assert!(game.player(Seat::new(1)).is_controlled());
        assert!(game.config().is_controlled(Seat::new(1)));
    }
}
