//! Game state store
//!
//! The single authoritative record of phase, czar, win target, current prompt
//! and the two draw piles. Fields that only exist once a game is set up are
//! `Option`s and their getters fail loudly instead of inventing defaults.

use crate::core::{AnswerCard, Deck, DeckId, PlayerId, PromptCard};
use crate::draw_pile::DrawPile;
use crate::game::Phase;
use crate::{CahError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,

    /// Current card czar; set on first join, rotated between rounds
    czar: Option<PlayerId>,

    /// Rounds a player must win to take the game
    necessary_wins: Option<u32>,

    /// Prompt for the round being played
    current_prompt: Option<PromptCard>,

    /// Decks the current game was built from
    decks_in_play: Vec<DeckId>,

    answer_pile: DrawPile<AnswerCard>,
    prompt_pile: DrawPile<PromptCard>,

    /// Players whose plays are up for judging, in shuffled display order
    submissions: Vec<PlayerId>,

    /// Round number within the current game (starts at 1)
    round_number: u32,

    /// Winner of the most recently finished game
    last_winner: Option<PlayerId>,

    /// Random number generator for all shuffling
    rng: ChaCha12Rng,
}

impl GameState {
    /// Empty state for a freshly opened table, seeded from the OS
    pub fn new() -> Self {
        Self::from_rng(ChaCha12Rng::from_entropy())
    }

    /// Empty state with a fixed seed for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha12Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha12Rng) -> Self {
        GameState {
            phase: Phase::WaitingToStart,
            czar: None,
            necessary_wins: None,
            current_prompt: None,
            decks_in_play: Vec::new(),
            answer_pile: DrawPile::empty(),
            prompt_pile: DrawPile::empty(),
            submissions: Vec::new(),
            round_number: 0,
            last_winner: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn czar(&self) -> Option<PlayerId> {
        self.czar
    }

    pub fn is_czar(&self, player: PlayerId) -> bool {
        self.czar == Some(player)
    }

    pub fn set_czar(&mut self, player: PlayerId) {
        self.czar = Some(player);
    }

    /// Win target of the running game
    pub fn necessary_wins(&self) -> Result<u32> {
        self.necessary_wins
            .ok_or(CahError::GameNotSetUp("necessary wins"))
    }

    /// Prompt of the running round
    pub fn prompt_card(&self) -> Result<&PromptCard> {
        self.current_prompt
            .as_ref()
            .ok_or(CahError::GameNotSetUp("prompt card"))
    }

    /// Prompt of the running round, if any (for views)
    pub fn current_prompt(&self) -> Option<&PromptCard> {
        self.current_prompt.as_ref()
    }

    pub fn decks_in_play(&self) -> &[DeckId] {
        &self.decks_in_play
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn last_winner(&self) -> Option<PlayerId> {
        self.last_winner
    }

    pub fn submissions(&self) -> &[PlayerId] {
        &self.submissions
    }

    pub fn answer_pile(&self) -> &DrawPile<AnswerCard> {
        &self.answer_pile
    }

    /// Start a new game from the given decks
    ///
    /// Builds fresh draw piles from the union of the decks' cards, draws the
    /// first prompt and moves to `PickingAnswers`. Calling it again throws
    /// the old piles away. The win target is range-checked by the caller.
    pub fn setup_game(&mut self, necessary_wins: u32, decks: &[&Deck]) -> Result<()> {
        let answer_pile = DrawPile::new(
            decks.iter().flat_map(|deck| deck.answer_cards.iter().cloned()),
            &mut self.rng,
        );
        let mut prompt_pile = DrawPile::new(
            decks.iter().flat_map(|deck| deck.prompt_cards.iter().cloned()),
            &mut self.rng,
        );
        if answer_pile.is_empty() {
            return Err(CahError::EmptyDrawPile("answer cards"));
        }
        let prompt = prompt_pile
            .draw_one(&mut self.rng)
            .ok_or(CahError::EmptyDrawPile("prompt cards"))?;

        self.answer_pile = answer_pile;
        self.prompt_pile = prompt_pile;
        self.necessary_wins = Some(necessary_wins);
        self.decks_in_play = decks.iter().map(|deck| deck.id).collect();
        self.current_prompt = Some(prompt);
        self.submissions.clear();
        self.round_number = 1;
        self.last_winner = None;
        self.phase = Phase::PickingAnswers;
        Ok(())
    }

    pub fn draw_answer_cards(&mut self, count: usize) -> Vec<AnswerCard> {
        self.answer_pile.draw_many(count, &mut self.rng)
    }

    /// Replace the current prompt with the next one from the pile
    pub fn draw_prompt_card(&mut self) -> Result<&PromptCard> {
        let prompt = self
            .prompt_pile
            .draw_one(&mut self.rng)
            .ok_or(CahError::EmptyDrawPile("prompt cards"))?;
        let prompt: &PromptCard = self.current_prompt.insert(prompt);
        Ok(prompt)
    }

    /// Close the round for judging: shuffle the submitters into display order
    pub(crate) fn begin_showing(&mut self, mut submitters: Vec<PlayerId>) {
        submitters.shuffle(&mut self.rng);
        self.submissions = submitters;
        self.phase = Phase::ShowingAnswers;
    }

    /// Forget a player's submission (they left the table)
    pub(crate) fn withdraw_submission(&mut self, player: PlayerId) {
        self.submissions.retain(|id| *id != player);
    }

    /// Open the next round on the prompt already drawn
    pub(crate) fn begin_round(&mut self) {
        self.submissions.clear();
        self.round_number += 1;
        self.phase = Phase::PickingAnswers;
    }

    /// Record the game's winner and return to the lobby
    pub(crate) fn finish_game(&mut self, winner: PlayerId) {
        self.end_game();
        self.last_winner = Some(winner);
    }

    /// Back to the lobby without a winner; the czar keeps the role
    pub(crate) fn end_game(&mut self) {
        self.phase = Phase::WaitingToStart;
        self.necessary_wins = None;
        self.current_prompt = None;
        self.decks_in_play.clear();
        self.answer_pile = DrawPile::empty();
        self.prompt_pile = DrawPile::empty();
        self.submissions.clear();
        self.round_number = 0;
    }

    /// Everyone left: forget the czar and the last result too
    pub(crate) fn clear(&mut self) {
        self.end_game();
        self.czar = None;
        self.last_winner = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
