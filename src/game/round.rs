//! Round coordinator
//!
//! Owns the game state, the player registry and the table logger, and is the
//! only place where cards move between the draw piles, hands and round plays.
//! Every operation validates completely before it mutates anything, so a
//! rejected call leaves the table exactly as it was.

use crate::config::{TableConfig, MIN_PLAYERS};
use crate::core::{
    AnswerCard, AnswerId, Deck, DeckId, PlayerId, PlayerRecord, PlayerSummary, Secret,
};
use crate::game::view::{GameView, PromptView, RoundResult, Submission};
use crate::game::{GameLogger, GameState, Phase, PlayerRegistry, TableEvent};
use crate::loader::CardCatalog;
use crate::{CahError, Result};
use std::sync::Arc;

/// Per-card logging, compiled out without the `verbose-logging` feature
macro_rules! log_if_verbose {
    ($logger:expr, $category:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $logger.event($category, &format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$logger;
        }
    };
}

pub struct RoundCoordinator {
    catalog: Arc<CardCatalog>,
    config: TableConfig,
    state: GameState,
    players: PlayerRegistry,
    logger: GameLogger,
}

impl RoundCoordinator {
    pub fn new(catalog: Arc<CardCatalog>, config: TableConfig) -> Self {
        let state = match config.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        RoundCoordinator {
            catalog,
            config,
            state,
            players: PlayerRegistry::new(),
            logger: GameLogger::new(),
        }
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn list_players(&self) -> Vec<PlayerSummary> {
        self.players.list(self.state.czar())
    }

    /// Seat a new player; the first player at an empty table becomes czar
    pub fn join_player(&mut self, name: &str) -> Result<PlayerRecord> {
        self.require_phase(Phase::WaitingToStart)?;

        let player = self.players.create(name, &self.config)?;
        let (id, name, secret) = (player.id, player.name.clone(), player.secret());

        if self.state.czar().is_none() {
            self.state.set_czar(id);
            self.logger.event(TableEvent::Czar, &format!("{name} is the card czar"));
        }
        self.logger.event(TableEvent::Join, &format!("{name} joins the table"));

        Ok(PlayerRecord {
            id,
            czar: self.state.is_czar(id),
            name,
            secret,
        })
    }

    /// Unseat a player, keeping the table playable for everyone else
    pub fn leave_player(&mut self, secret: &Secret) -> Result<()> {
        let leaving = self.players.by_secret(secret)?.id;
        let was_czar = self.state.is_czar(leaving);
        let successor = if was_czar {
            self.players.next_after(leaving)
        } else {
            None
        };

        let player = self.players.remove(secret)?;
        self.logger.event(TableEvent::Leave, &format!("{} leaves the table", player.name));

        if self.players.is_empty() {
            self.state.clear();
            return Ok(());
        }

        if let Some(next) = successor {
            self.state.set_czar(next);
            self.log_czar(next);
        }

        if !self.state.phase().is_in_game() {
            return Ok(());
        }

        if self.players.len() < MIN_PLAYERS {
            self.state.end_game();
            for player in self.players.iter_mut() {
                player.clear_cards();
            }
            self.logger.event(
                TableEvent::GameAbandoned,
                "Not enough players left, back to the lobby",
            );
            return Ok(());
        }

        if was_czar {
            // The new czar may already have played; restart the round around them
            for player in self.players.iter_mut() {
                player.return_round_to_hand();
            }
            self.state.draw_prompt_card()?;
            self.state.begin_round();
            self.log_round_start();
        } else {
            self.state.withdraw_submission(leaving);
            if self.state.phase() == Phase::PickingAnswers {
                self.check_round_complete()?;
            }
        }
        Ok(())
    }

    /// Start a game with every deck in the catalog
    pub fn start_game(&mut self, secret: &Secret, necessary_wins: u32) -> Result<()> {
        let deck_ids: Vec<DeckId> = self.catalog.decks().iter().map(|deck| deck.id).collect();
        self.start_game_with_decks(secret, necessary_wins, &deck_ids)
    }

    /// Start a game with the chosen decks; czar only, from the lobby
    pub fn start_game_with_decks(
        &mut self,
        secret: &Secret,
        necessary_wins: u32,
        deck_ids: &[DeckId],
    ) -> Result<()> {
        self.require_phase(Phase::WaitingToStart)?;
        let caller = self.players.by_secret(secret)?.id;
        if !self.state.is_czar(caller) {
            return Err(CahError::NotCzar(caller));
        }
        self.config.validate_necessary_wins(necessary_wins)?;
        if self.players.len() < MIN_PLAYERS {
            return Err(CahError::NotEnoughPlayers {
                present: self.players.len(),
                required: MIN_PLAYERS,
            });
        }

        // A deck picked twice still contributes each card once
        let catalog = Arc::clone(&self.catalog);
        let mut decks: Vec<&Deck> = Vec::with_capacity(deck_ids.len());
        for id in deck_ids {
            let deck = catalog.deck(*id)?;
            if !decks.iter().any(|seen| seen.id == deck.id) {
                decks.push(deck);
            }
        }
        if decks.iter().all(|deck| deck.answer_cards.is_empty()) {
            return Err(CahError::EmptyDeckSelection("answer"));
        }
        if decks.iter().all(|deck| deck.prompt_cards.is_empty()) {
            return Err(CahError::EmptyDeckSelection("prompt"));
        }

        self.state.setup_game(necessary_wins, &decks)?;
        for player in self.players.iter_mut() {
            player.reset_for_new_game();
        }
        let dealt = self.refill_hands();

        self.logger.event(
            TableEvent::GameStart,
            &format!(
                "Game starts: {} players, {} wins needed, {} decks",
                self.players.len(),
                necessary_wins,
                decks.len()
            ),
        );
        log_if_verbose!(self.logger, TableEvent::Deal, "Dealt {} answer cards", dealt);
        self.log_round_start();
        Ok(())
    }

    /// Play one answer card from hand into this round's plays
    pub fn play_card(&mut self, secret: &Secret, card: AnswerId) -> Result<()> {
        self.require_phase(Phase::PickingAnswers)?;
        let player = self.players.by_secret(secret)?;
        if self.state.is_czar(player.id) {
            return Err(CahError::CzarCannotPlay(player.id));
        }
        let allowed = self.state.prompt_card()?.field_count();
        let played = player.cards_this_round.len();
        if played >= allowed {
            return Err(CahError::PlayLimitReached { played, allowed });
        }
        if !player.cards_in_hand.contains(&card) {
            return Err(CahError::CardNotInHand(card));
        }

        let player = self.players.by_secret_mut(secret)?;
        let moved = player.play_from_hand(card);
        debug_assert!(moved, "hand membership checked above");
        log_if_verbose!(
            self.logger,
            TableEvent::Play,
            "{} plays card {} ({}/{})",
            player.name,
            card,
            player.cards_this_round.len(),
            allowed
        );

        self.check_round_complete()?;
        Ok(())
    }

    /// Czar turns the shown submissions over for judging
    pub fn reveal_answers(&mut self, secret: &Secret) -> Result<()> {
        self.require_phase(Phase::ShowingAnswers)?;
        self.require_czar(secret)?;

        self.state.set_phase(Phase::PickingWinner);
        self.logger.event(
            TableEvent::Reveal,
            &format!("{} submissions revealed", self.state.submissions().len()),
        );
        Ok(())
    }

    /// Czar picks the winning submission by its display index
    ///
    /// The winner scores a point. Reaching the win target ends the game and
    /// returns the table to the lobby; otherwise the czar role moves on and
    /// the next round is dealt.
    pub fn pick_winner(&mut self, secret: &Secret, index: usize) -> Result<RoundResult> {
        self.require_phase(Phase::PickingWinner)?;
        let czar = self.require_czar(secret)?;
        let winner = *self
            .state
            .submissions()
            .get(index)
            .ok_or(CahError::SubmissionNotFound(index))?;
        let necessary_wins = self.state.necessary_wins()?;

        let player = self
            .players
            .get_mut(winner)
            .ok_or(CahError::UnknownPlayer)?;
        player.wins += 1;
        let (winner_wins, name) = (player.wins, player.name.clone());
        self.logger.event(
            TableEvent::RoundWinner,
            &format!("{name} wins the round ({winner_wins}/{necessary_wins})"),
        );

        let game_over = winner_wins >= necessary_wins;
        if game_over {
            self.state.finish_game(winner);
            for player in self.players.iter_mut() {
                player.clear_cards();
            }
            self.logger.event(
                TableEvent::GameOver,
                &format!("{name} wins the game with {winner_wins} points"),
            );
        } else {
            for player in self.players.iter_mut() {
                player.discard_round();
            }
            if let Some(next) = self.players.next_after(czar) {
                self.state.set_czar(next);
                self.log_czar(next);
            }
            self.state.draw_prompt_card()?;
            let dealt = self.refill_hands();
            log_if_verbose!(self.logger, TableEvent::Deal, "Dealt {} answer cards", dealt);
            self.state.begin_round();
            self.log_round_start();
        }

        Ok(RoundResult {
            winner,
            winner_wins,
            game_over,
        })
    }

    /// What the player holding `secret` may see
    pub fn game_view(&self, secret: &Secret) -> Result<GameView> {
        let player = self.players.by_secret(secret)?;
        let phase = self.state.phase();

        let submissions = if phase.reveals_submissions() {
            self.state
                .submissions()
                .iter()
                .enumerate()
                .map(|(index, id)| -> Result<Submission> {
                    let cards = match self.players.get(*id) {
                        Some(submitter) => self.answer_cards(&submitter.cards_this_round)?,
                        None => Vec::new(),
                    };
                    Ok(Submission { index, cards })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(GameView {
            player: player.summary(self.state.is_czar(player.id)),
            hand: self.answer_cards(&player.cards_in_hand)?,
            round_plays: self.answer_cards(&player.cards_this_round)?,
            phase,
            prompt: self.state.current_prompt().map(PromptView::from),
            submissions,
            necessary_wins: self.state.necessary_wins().ok(),
            round_number: self.state.round_number(),
            last_winner: self.state.last_winner(),
        })
    }

    fn answer_cards<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a AnswerId>,
    ) -> Result<Vec<AnswerCard>> {
        ids.into_iter()
            .map(|id| self.catalog.answer_card(*id).cloned())
            .collect()
    }

    fn require_phase(&self, expected: Phase) -> Result<()> {
        let actual = self.state.phase();
        if actual != expected {
            return Err(CahError::WrongPhase { expected, actual });
        }
        Ok(())
    }

    fn require_czar(&self, secret: &Secret) -> Result<PlayerId> {
        let caller = self.players.by_secret(secret)?.id;
        if !self.state.is_czar(caller) {
            return Err(CahError::NotCzar(caller));
        }
        Ok(caller)
    }

    /// Advance to `ShowingAnswers` once every non-czar player has filled
    /// every blank
    fn check_round_complete(&mut self) -> Result<bool> {
        if self.state.phase() != Phase::PickingAnswers {
            return Ok(false);
        }
        let field_count = self.state.prompt_card()?.field_count();

        let mut submitters = Vec::with_capacity(self.players.len());
        for player in self.players.iter() {
            if self.state.is_czar(player.id) {
                continue;
            }
            if player.cards_this_round.len() != field_count {
                return Ok(false);
            }
            submitters.push(player.id);
        }
        if submitters.is_empty() {
            return Ok(false);
        }

        let count = submitters.len();
        self.state.begin_showing(submitters);
        self.logger.event(TableEvent::RoundComplete, &format!("All {count} submissions are in"));
        Ok(true)
    }

    /// Top every player up to a full hand; returns how many cards were dealt
    ///
    /// A reshuffle can hand out a card the player already holds, so each
    /// player is topped up until full or until the pile has been cycled.
    fn refill_hands(&mut self) -> usize {
        let hand_size = self.config.hand_size;
        let pile_size = self.state.answer_pile().len();
        let mut dealt = 0;

        for player in self.players.iter_mut() {
            let mut drawn = 0;
            while player.missing_cards(hand_size) > 0 && drawn <= pile_size {
                let missing = player.missing_cards(hand_size);
                for card in self.state.draw_answer_cards(missing) {
                    if player.cards_in_hand.insert(card.id) {
                        dealt += 1;
                    }
                }
                drawn += missing;
            }
        }
        dealt
    }

    fn log_czar(&self, czar: PlayerId) {
        if let Some(player) = self.players.get(czar) {
            self.logger.event(TableEvent::Czar, &format!("{} is the card czar", player.name));
        }
    }

    fn log_round_start(&self) {
        if let Ok(prompt) = self.state.prompt_card() {
            self.logger.event(
                TableEvent::RoundStart,
                &format!("Round {}: {}", self.state.round_number(), prompt.text),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DeckSource;

    const PROMPTS: &str = "Why ___?\nWhat ends the party? ___.\nNever forget ___.\n";

    fn answers(count: usize) -> String {
        (0..count).map(|i| format!("Answer {i}.\n")).collect()
    }

    fn coordinator() -> RoundCoordinator {
        let mut catalog = CardCatalog::new();
        catalog
            .add_deck(DeckSource::new("Base", PROMPTS, &answers(40)))
            .unwrap();
        let mut coordinator = RoundCoordinator::new(Arc::new(catalog), TableConfig::with_seed(42));
        coordinator.logger_mut().enable_capture();
        coordinator
    }

    /// A joins first (czar), then B and C
    fn three_players(coordinator: &mut RoundCoordinator) -> (Secret, Secret, Secret) {
        let a = coordinator.join_player("A").unwrap().secret;
        let b = coordinator.join_player("B").unwrap().secret;
        let c = coordinator.join_player("C").unwrap().secret;
        (a, b, c)
    }

    fn first_card(coordinator: &RoundCoordinator, secret: &Secret) -> AnswerId {
        *coordinator
            .players()
            .by_secret(secret)
            .unwrap()
            .cards_in_hand
            .iter()
            .next()
            .unwrap()
    }

    fn play_round(coordinator: &mut RoundCoordinator, secrets: &[&Secret]) {
        for secret in secrets {
            let card = first_card(coordinator, secret);
            coordinator.play_card(secret, card).unwrap();
        }
    }

    #[test]
    fn test_first_joiner_is_czar() {
        let mut coordinator = coordinator();
        let a = coordinator.join_player("A").unwrap();
        let b = coordinator.join_player("B").unwrap();

        assert!(a.czar);
        assert!(!b.czar);
        assert_eq!(coordinator.state().czar(), Some(a.id));

        let list = coordinator.list_players();
        assert!(list[0].czar);
        assert!(!list[1].czar);
    }

    #[test]
    fn test_start_deals_full_hands() {
        let mut coordinator = coordinator();
        let (a, _, _) = three_players(&mut coordinator);

        coordinator.start_game(&a, 5).unwrap();

        assert_eq!(coordinator.phase(), Phase::PickingAnswers);
        assert_eq!(coordinator.state().necessary_wins().unwrap(), 5);
        assert!(coordinator.state().prompt_card().unwrap().field_count() >= 1);
        for player in coordinator.players().iter() {
            assert_eq!(player.cards_in_hand.len(), 8);
        }
    }

    #[test]
    fn test_start_rejections_leave_lobby_untouched() {
        let mut coordinator = coordinator();
        let (a, b, _) = three_players(&mut coordinator);

        assert!(matches!(
            coordinator.start_game(&b, 5),
            Err(CahError::NotCzar(_))
        ));
        assert!(matches!(
            coordinator.start_game(&a, 0),
            Err(CahError::InvalidWinTarget { .. })
        ));
        assert!(matches!(
            coordinator.start_game(&a, 21),
            Err(CahError::InvalidWinTarget { .. })
        ));
        assert!(matches!(
            coordinator.start_game(&Secret::from_u128(1), 5),
            Err(CahError::UnknownPlayer)
        ));

        assert_eq!(coordinator.phase(), Phase::WaitingToStart);
        assert!(coordinator
            .players()
            .iter()
            .all(|p| p.cards_in_hand.is_empty()));

        coordinator.start_game(&a, 5).unwrap();
        assert!(matches!(
            coordinator.start_game(&a, 5),
            Err(CahError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_start_needs_two_players() {
        let mut coordinator = coordinator();
        let a = coordinator.join_player("A").unwrap().secret;
        assert!(matches!(
            coordinator.start_game(&a, 3),
            Err(CahError::NotEnoughPlayers { present: 1, .. })
        ));
    }

    #[test]
    fn test_start_with_unknown_deck() {
        let mut coordinator = coordinator();
        let (a, _, _) = three_players(&mut coordinator);

        let err = coordinator
            .start_game_with_decks(&a, 3, &[crate::core::EntityId::new(999)])
            .unwrap_err();
        assert!(matches!(err, CahError::DeckNotFound(_)));
        assert!(matches!(
            coordinator.start_game_with_decks(&a, 3, &[]),
            Err(CahError::EmptyDeckSelection(_))
        ));
        assert_eq!(coordinator.phase(), Phase::WaitingToStart);
    }

    #[test]
    fn test_join_rejected_mid_game() {
        let mut coordinator = coordinator();
        let (a, _, _) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();

        assert!(matches!(
            coordinator.join_player("Late"),
            Err(CahError::WrongPhase { .. })
        ));
        assert_eq!(coordinator.players().len(), 3);
    }

    #[test]
    fn test_play_before_start_changes_nothing() {
        let mut coordinator = coordinator();
        let (_, b, _) = three_players(&mut coordinator);

        let err = coordinator
            .play_card(&b, crate::core::EntityId::new(1))
            .unwrap_err();
        assert!(matches!(err, CahError::WrongPhase { .. }));
        assert_eq!(coordinator.phase(), Phase::WaitingToStart);
        let player = coordinator.players().by_secret(&b).unwrap();
        assert!(player.cards_this_round.is_empty());
    }

    #[test]
    fn test_play_card_rules() {
        let mut coordinator = coordinator();
        let (a, b, _) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();

        // The czar never plays
        let czar_card = first_card(&coordinator, &a);
        assert!(matches!(
            coordinator.play_card(&a, czar_card),
            Err(CahError::CzarCannotPlay(_))
        ));

        // A card from someone else's hand
        assert!(matches!(
            coordinator.play_card(&b, czar_card),
            Err(CahError::CardNotInHand(_))
        ));

        let card = first_card(&coordinator, &b);
        coordinator.play_card(&b, card).unwrap();
        let player = coordinator.players().by_secret(&b).unwrap();
        assert!(!player.cards_in_hand.contains(&card));
        assert_eq!(player.cards_this_round.as_slice(), &[card]);
        assert_eq!(player.cards_in_hand.len(), 7);

        // Every prompt in this deck has a single blank
        let next = first_card(&coordinator, &b);
        assert!(matches!(
            coordinator.play_card(&b, next),
            Err(CahError::PlayLimitReached {
                played: 1,
                allowed: 1
            })
        ));
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);
    }

    #[test]
    fn test_round_completes_when_everyone_played() {
        let mut coordinator = coordinator();
        let (a, b, c) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();

        play_round(&mut coordinator, &[&b]);
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);
        play_round(&mut coordinator, &[&c]);
        assert_eq!(coordinator.phase(), Phase::ShowingAnswers);

        let view = coordinator.game_view(&a).unwrap();
        assert_eq!(view.submissions.len(), 2);
        assert!(view.submissions.iter().all(|s| s.cards.len() == 1));
        assert_eq!(coordinator.logger().logs().count(TableEvent::RoundComplete), 1);
    }

    #[test]
    fn test_only_czar_reveals_and_picks() {
        let mut coordinator = coordinator();
        let (a, b, c) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();
        play_round(&mut coordinator, &[&b, &c]);

        assert!(matches!(
            coordinator.reveal_answers(&b),
            Err(CahError::NotCzar(_))
        ));
        assert!(matches!(
            coordinator.pick_winner(&a, 0),
            Err(CahError::WrongPhase { .. })
        ));
        coordinator.reveal_answers(&a).unwrap();
        assert_eq!(coordinator.phase(), Phase::PickingWinner);

        assert!(matches!(
            coordinator.pick_winner(&a, 2),
            Err(CahError::SubmissionNotFound(2))
        ));
        assert!(matches!(
            coordinator.pick_winner(&c, 0),
            Err(CahError::NotCzar(_))
        ));
    }

    #[test]
    fn test_pick_winner_rotates_czar_and_refills() {
        let mut coordinator = coordinator();
        let (a, b, c) = three_players(&mut coordinator);
        let b_id = coordinator.players().by_secret(&b).unwrap().id;
        coordinator.start_game(&a, 5).unwrap();
        play_round(&mut coordinator, &[&b, &c]);
        coordinator.reveal_answers(&a).unwrap();

        let result = coordinator.pick_winner(&a, 0).unwrap();
        assert!(!result.game_over);
        assert_eq!(result.winner_wins, 1);

        assert_eq!(coordinator.phase(), Phase::PickingAnswers);
        assert_eq!(coordinator.state().round_number(), 2);
        assert_eq!(coordinator.state().czar(), Some(b_id));
        for player in coordinator.players().iter() {
            assert_eq!(player.cards_in_hand.len(), 8);
            assert!(player.cards_this_round.is_empty());
        }

        // B is czar now, A plays
        assert!(matches!(
            coordinator.play_card(&b, first_card(&coordinator, &b)),
            Err(CahError::CzarCannotPlay(_))
        ));
        play_round(&mut coordinator, &[&a]);
    }

    #[test]
    fn test_reaching_win_target_ends_game() {
        let mut coordinator = coordinator();
        let (a, b, c) = three_players(&mut coordinator);
        coordinator.start_game(&a, 1).unwrap();
        play_round(&mut coordinator, &[&b, &c]);
        coordinator.reveal_answers(&a).unwrap();

        let result = coordinator.pick_winner(&a, 1).unwrap();
        assert!(result.game_over);
        assert_eq!(coordinator.phase(), Phase::WaitingToStart);
        assert_eq!(coordinator.state().last_winner(), Some(result.winner));
        assert!(coordinator.players().iter().all(|p| p.cards_in_hand.is_empty()));

        // Scores stay visible in the lobby until the next start
        let winner = coordinator.players().get(result.winner).unwrap();
        assert_eq!(winner.wins, 1);
        assert_eq!(coordinator.logger().logs().count(TableEvent::GameOver), 1);

        // New players may join between games
        assert!(coordinator.join_player("D").is_ok());
    }

    #[test]
    fn test_czar_leaving_hands_off_role() {
        let mut coordinator = coordinator();
        let (a, b, _) = three_players(&mut coordinator);
        let b_id = coordinator.players().by_secret(&b).unwrap().id;

        coordinator.leave_player(&a).unwrap();
        assert_eq!(coordinator.state().czar(), Some(b_id));
        assert!(coordinator.list_players()[0].czar);
    }

    #[test]
    fn test_czar_leaving_mid_round_restarts_it() {
        let mut coordinator = coordinator();
        let (a, b, c, d) = {
            let (a, b, c) = three_players(&mut coordinator);
            let d = coordinator.join_player("D").unwrap().secret;
            (a, b, c, d)
        };
        coordinator.start_game(&a, 5).unwrap();
        play_round(&mut coordinator, &[&b, &c]);

        coordinator.leave_player(&a).unwrap();

        let b_id = coordinator.players().by_secret(&b).unwrap().id;
        assert_eq!(coordinator.state().czar(), Some(b_id));
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);
        for player in coordinator.players().iter() {
            assert!(player.cards_this_round.is_empty());
            assert_eq!(player.cards_in_hand.len(), 8);
        }

        play_round(&mut coordinator, &[&c, &d]);
        assert_eq!(coordinator.phase(), Phase::ShowingAnswers);
    }

    #[test]
    fn test_last_holdout_leaving_completes_round() {
        let mut coordinator = coordinator();
        let (a, b, c) = three_players(&mut coordinator);
        let d = coordinator.join_player("D").unwrap().secret;
        coordinator.start_game(&a, 5).unwrap();
        play_round(&mut coordinator, &[&b, &c]);
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);

        coordinator.leave_player(&d).unwrap();
        assert_eq!(coordinator.phase(), Phase::ShowingAnswers);
        assert_eq!(coordinator.state().submissions().len(), 2);
    }

    #[test]
    fn test_too_few_players_abandons_game() {
        let mut coordinator = coordinator();
        let a = coordinator.join_player("A").unwrap().secret;
        let b = coordinator.join_player("B").unwrap().secret;
        coordinator.start_game(&a, 5).unwrap();

        coordinator.leave_player(&b).unwrap();
        assert_eq!(coordinator.phase(), Phase::WaitingToStart);
        assert!(coordinator.state().necessary_wins().is_err());
        assert_eq!(coordinator.logger().logs().count(TableEvent::GameAbandoned), 1);

        coordinator.leave_player(&a).unwrap();
        assert!(coordinator.players().is_empty());
        assert_eq!(coordinator.state().czar(), None);

        // Next joiner at the empty table becomes czar again
        assert!(coordinator.join_player("E").unwrap().czar);
    }

    #[test]
    fn test_game_view_hides_other_hands() {
        let mut coordinator = coordinator();
        let (a, b, _) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();

        let view = coordinator.game_view(&b).unwrap();
        assert_eq!(view.hand.len(), 8);
        assert_eq!(view.phase, Phase::PickingAnswers);
        assert_eq!(view.plays_remaining(), 1);
        assert!(view.submissions.is_empty());
        assert!(!view.player.czar);

        let a_view = coordinator.game_view(&a).unwrap();
        assert!(a_view.hand.iter().all(|card| !view.hand.contains(card)));
        assert!(matches!(
            coordinator.game_view(&Secret::from_u128(5)),
            Err(CahError::UnknownPlayer)
        ));
    }

    #[test]
    fn test_events_are_logged() {
        let mut coordinator = coordinator();
        let (a, _, _) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();

        let logs = coordinator.logger().logs();
        assert_eq!(logs.count(TableEvent::Join), 3);
        assert_eq!(logs.count(TableEvent::Czar), 1);
        assert_eq!(logs.count(TableEvent::GameStart), 1);
        assert_eq!(logs.count(TableEvent::RoundStart), 1);
    }

    #[test]
    fn test_repeated_deck_counts_once() {
        let mut coordinator = coordinator();
        let (a, _, _) = three_players(&mut coordinator);
        let base = coordinator.catalog().decks()[0].id;

        coordinator.start_game_with_decks(&a, 5, &[base, base]).unwrap();

        assert_eq!(coordinator.state().decks_in_play(), &[base]);
        assert_eq!(coordinator.state().answer_pile().len(), 40);
    }

    #[test]
    fn test_two_field_prompt_needs_two_cards_each() {
        let mut catalog = CardCatalog::new();
        catalog
            .add_deck(DeckSource::new("Pairs", "Two ___ and ___.
", &answers(40)))
            .unwrap();
        let mut coordinator = RoundCoordinator::new(Arc::new(catalog), TableConfig::with_seed(9));
        let (a, b, c) = three_players(&mut coordinator);
        coordinator.start_game(&a, 5).unwrap();
        assert_eq!(coordinator.state().prompt_card().unwrap().field_count(), 2);

        play_round(&mut coordinator, &[&b, &c]);
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);

        let second = first_card(&coordinator, &b);
        coordinator.play_card(&b, second).unwrap();
        assert_eq!(coordinator.phase(), Phase::PickingAnswers);

        let third = first_card(&coordinator, &b);
        assert!(matches!(
            coordinator.play_card(&b, third),
            Err(CahError::PlayLimitReached {
                played: 2,
                allowed: 2
            })
        ));
        let b_player = coordinator.players().by_secret(&b).unwrap();
        assert_eq!(b_player.cards_this_round.len(), 2);
        assert_eq!(b_player.cards_in_hand.len(), 6);

        let last = first_card(&coordinator, &c);
        coordinator.play_card(&c, last).unwrap();
        assert_eq!(coordinator.phase(), Phase::ShowingAnswers);
        assert_eq!(coordinator.state().submissions().len(), 2);
    }
}
