//! Integration tests for dealing, masks and the resumable turn loop.

use rust_landlord::cards::{ActionCatalog, CardSet};
use rust_landlord::core::{GameConfig, GameError, Seat, SeatMap, PASS};
use rust_landlord::games::landlord::Game;
use rust_landlord::rules::{Environment, Outcome};

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

fn action(s: &str) -> usize {
    ActionCatalog::shared().index_of(&cards(s)).unwrap()
}

fn first_legal(mask: &[bool]) -> usize {
    mask.iter().position(|&legal| legal).unwrap()
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_prepare_absorbs_bottom_into_landlord() {
    let mut game = Game::new(GameConfig::new(42).all_controlled());
    game.prepare(Seat::new(0)).unwrap();

    let lord = game.hand(Seat::new(0));
    assert_eq!(lord.len(), 20);
    assert!(lord.contains_all(game.bottom()));

    let in_hands: usize = Seat::all().map(|s| game.hand(s).len()).sum();
    assert_eq!(in_hands + game.history().len(), 54);
    assert!(game.deck().is_empty());
    assert_eq!(game.log().len(), 0);

    let mut all = CardSet::new();
    for seat in Seat::all() {
        all.insert_all(game.hand(seat));
    }
    assert_eq!(all, CardSet::full_deck());
}

#[test]
fn test_prepare_stops_at_first_controlled_seat() {
    let mut game = Game::new(GameConfig::new(42).with_controlled(Seat::new(2)));
    let outcome = game.prepare(Seat::new(0)).unwrap();

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(game.to_act(), Some(Seat::new(2)));
    // Seats 0 and 1 each took one automatic turn.
    assert_eq!(game.log().len(), 2);
    assert!(!game.log()[0].is_pass());
    assert_eq!(game.card_total(), 54);
}

#[test]
fn test_reset_reshuffles() {
    let mut game = Game::new(GameConfig::new(8).all_controlled());
    let first = game.deck().cards().to_vec();
    game.prepare(Seat::new(1)).unwrap();

    game.reset();
    assert_eq!(game.deck().len(), 54);
    assert_ne!(game.deck().cards(), first.as_slice());
    assert_eq!(game.landlord(), None);
    assert_eq!(game.to_act(), None);
    assert!(game.history().is_empty());
}

// =============================================================================
// Masks
// =============================================================================

#[test]
fn test_lone_weak_card_can_only_pass() {
    let mut game = Game::new(GameConfig::new(1).all_controlled());
    game.prepare_with(hands("5 9", "3", "4 4"), CardSet::new(), Seat::new(0))
        .unwrap();
    game.step(Seat::new(0), action("5")).unwrap();

    let mask = game.get_mask(Seat::new(1));
    assert!(mask[PASS]);
    assert_eq!(mask.iter().filter(|&&legal| legal).count(), 1);

    game.step(Seat::new(1), PASS).unwrap();
    assert!(game.log().last().unwrap().is_pass());
    assert_eq!(game.hand(Seat::new(1)), &cards("3"));
}

#[test]
fn test_pass_illegal_when_own_play_uncontested() {
    let mut game = Game::new(GameConfig::new(1).all_controlled());
    game.prepare_with(hands("5 9 K", "3", "4"), CardSet::new(), Seat::new(0))
        .unwrap();

    assert!(!game.get_mask(Seat::new(0))[PASS]);
    game.step(Seat::new(0), action("9")).unwrap();
    game.step(Seat::new(1), PASS).unwrap();
    game.step(Seat::new(2), PASS).unwrap();

    assert_eq!(game.to_act(), Some(Seat::new(0)));
    let mask = game.get_mask(Seat::new(0));
    assert!(!mask[PASS]);
    // Back on lead: any owned card is playable, not just ones above the 9.
    assert!(mask[action("5")]);
}

#[test]
fn test_bomb_legal_over_any_plain_group() {
    let mut game = Game::new(GameConfig::new(1).all_controlled());
    game.prepare_with(hands("3 4 5 6 7 K", "8 8 8 8", "9"), CardSet::new(), Seat::new(0))
        .unwrap();
    game.step(Seat::new(0), action("3 4 5 6 7")).unwrap();

    let mask = game.get_mask(Seat::new(1));
    assert!(mask[action("8 8 8 8")]);
    assert!(!mask[action("8")]);
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_landlord_plays_out_returns_code_two() {
    let mut game = Game::new(GameConfig::new(1).all_controlled());
    game.prepare_with(hands("8 8 8 J", "3 4", "5 6"), CardSet::new(), Seat::new(0))
        .unwrap();

    let outcome = game.step(Seat::new(0), action("8 8 8 J")).unwrap();
    assert_eq!(outcome.code(), 2);
    assert_eq!(game.history(), &cards("8 8 8 J"));
    assert_eq!(game.winner(), Some(Seat::new(0)));
}

#[test]
fn test_peasant_plays_out_returns_code_one() {
    let mut game = Game::new(GameConfig::new(1).all_controlled());
    game.prepare_with(hands("3 K", "5", "4 4"), CardSet::new(), Seat::new(0))
        .unwrap();

    assert_eq!(game.step(Seat::new(0), action("3")), Ok(Outcome::Continue));
    let outcome = game.step(Seat::new(1), action("5")).unwrap();
    assert_eq!(outcome.code(), 1);
    assert_eq!(game.to_act(), None);
    assert_eq!(game.step(Seat::new(2), PASS), Err(GameError::GameOver));
}

// =============================================================================
// Resumable Loop
// =============================================================================

#[test]
fn test_single_controlled_seat_plays_to_the_end() {
    let seat = Seat::new(1);
    let mut game = Game::new(GameConfig::new(99).with_controlled(seat));
    let mut outcome = game.prepare(Seat::new(0)).unwrap();

    let mut steps = 0;
    while !outcome.is_terminal() {
        assert_eq!(game.to_act(), Some(seat));
        let mask = game.get_mask(seat);
        outcome = game.step(seat, first_legal(&mask)).unwrap();
        assert_eq!(game.card_total(), 54);
        steps += 1;
        assert!(steps < 100);
    }

    let winner = game.winner().unwrap();
    assert!(game.hand(winner).is_empty());
    assert_eq!(outcome, Outcome::emptied_by(winner == Seat::new(0)));
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::new(GameConfig::new(seed));
        game.prepare(Seat::new(1)).unwrap();
        game.autoplay().unwrap();
        (game.log().clone(), game.winner())
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_autoplay_from_controlled_position() {
    let mut game = Game::new(GameConfig::new(5).all_controlled());
    game.prepare(Seat::new(2)).unwrap();
    let mask = game.get_mask(Seat::new(2));
    game.step(Seat::new(2), first_legal(&mask)).unwrap();

    let outcome = game.autoplay().unwrap();
    assert!(outcome.is_terminal());
    assert_eq!(game.to_act(), None);
    assert_eq!(game.autoplay(), Ok(outcome));
}

#[test]
fn test_environment_trait_drives_game() {
    fn drive<E: Environment>(env: &mut E) -> Outcome {
        env.reset();
        let mut outcome = env.prepare(Seat::new(0)).unwrap();
        while let Some(seat) = env.to_act() {
            if !env.is_controlled(seat) {
                return env.autoplay().unwrap();
            }
            let legal = env.legal_actions(seat);
            outcome = env.step(seat, *legal.last().unwrap()).unwrap();
        }
        outcome
    }

    let mut game = Game::new(GameConfig::new(3).with_controlled(Seat::new(0)));
    assert_eq!(game.action_space_size(), 527);
    assert!(drive(&mut game).is_terminal());
    assert!(game.winner().is_some());
}
