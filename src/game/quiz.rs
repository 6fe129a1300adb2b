//! Timed question-pool variant.
//!
//! A player picks a name and a time limit, then spins a wheel of candidate
//! questions. Each solved question scores its own points and leaves the pool.
//! Every wrong guess costs a fixed penalty. The game ends when the pool is
//! exhausted or the countdown runs out.

use std::{ops::RangeInclusive, time::Duration};

use serde::Serialize;
use tracing::{debug, error, info, trace};

use super::timer::{Countdown, Tick};
use crate::{
    errors::Error,
    puzzle::{Letter, LetterSet, Puzzle, PuzzleCatalog, PuzzleId},
    random::{RandomSource, ThreadRandom},
    wheel::{self, Segment, SpinResult, Wheel, DEFAULT_ROTATIONS, DEFAULT_SETTLE_DELAY},
};

pub const MINUTES: RangeInclusive<u32> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRules {
    pub wrong_guess_penalty: u32,
    pub clue_cost: u32,
    /// Clues available per question.
    pub max_clues: u32,
    /// Most questions shown on the wheel at once.
    pub wheel_size: usize,
    pub minutes: u32,
    pub rotations: RangeInclusive<u32>,
    pub settle_delay: Duration,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            wrong_guess_penalty: 10,
            clue_cost: 50,
            max_clues: 3,
            wheel_size: 8,
            minutes: 3,
            rotations: DEFAULT_ROTATIONS,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Setup,
    Spin,
    Play,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizGuess {
    Hit { letter: Letter, occurrences: usize },
    /// The guess completed the question.
    Solved { letter: Letter, points: u32 },
    Miss { letter: Letter, penalty: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSnapshot<'a> {
    pub phase: Phase,
    pub player_name: &'a str,
    pub minutes: u32,
    pub remaining_seconds: u32,
    pub timer_running: bool,
    pub score: i64,
    pub questions_passed: u32,
    pub questions_left: usize,
    pub wrong_guesses: u32,
    pub category: Option<&'a str>,
    pub board: Option<String>,
    /// The active question's phrase, once the game is over.
    pub answer: Option<&'a str>,
    pub revealed: LetterSet,
    pub used: LetterSet,
    pub clues_remaining: u32,
    pub clue_letters: &'a [Letter],
    pub wheel: Vec<&'a str>,
    pub spinning: bool,
    pub data_error: bool,
}

#[derive(Debug)]
pub struct QuizEngine<R = ThreadRandom> {
    rules: QuizRules,
    rng: R,

    questions: Vec<Puzzle>,
    pool: PuzzleCatalog,
    wheel: Option<Wheel<PuzzleId>>,
    active: Option<usize>,

    player_name: String,
    minutes: u32,
    phase: Phase,
    countdown: Countdown,
    data_error: bool,

    score: i64,
    questions_passed: u32,
    wrong_guesses: u32,
    revealed: LetterSet,
    used: LetterSet,
    clue_letters: Vec<Letter>,
    clues_remaining: u32,
}

impl<R: RandomSource> QuizEngine<R> {
    pub fn new(rules: QuizRules, rng: R) -> Result<Self, Error> {
        if rules.rotations.is_empty() {
            return Err(wheel::Error::EmptyRotations(rules.rotations).into());
        }

        Ok(Self {
            minutes: rules.minutes.clamp(*MINUTES.start(), *MINUTES.end()),
            clues_remaining: rules.max_clues,
            rules,
            rng,
            questions: Vec::new(),
            pool: PuzzleCatalog::default(),
            wheel: None,
            active: None,
            player_name: String::new(),
            phase: Phase::Setup,
            countdown: Countdown::new(),
            data_error: false,
            score: 0,
            questions_passed: 0,
            wrong_guesses: 0,
            revealed: LetterSet::new(),
            used: LetterSet::new(),
            clue_letters: Vec::new(),
        })
    }

    /// Replaces the question set. An empty set flags a data error, which
    /// blocks [`start_game`](Self::start_game).
    pub fn load_questions(&mut self, questions: Vec<Puzzle>) {
        self.data_error = questions.is_empty();

        if self.data_error {
            error!("no questions loaded");
        } else {
            info!(count = questions.len(), "questions loaded");
        }

        self.questions = questions;
        if self.phase == Phase::Setup {
            self.pool = PuzzleCatalog::new(self.questions.clone());
        }
    }

    /// Sets the player name and time limit. Minutes are clamped to 1..=5.
    pub fn configure(&mut self, player_name: &str, minutes: u32) -> bool {
        if self.phase != Phase::Setup {
            trace!("configure rejected outside setup");
            return false;
        }

        self.player_name = player_name.trim().to_owned();
        self.minutes = minutes.clamp(*MINUTES.start(), *MINUTES.end());
        debug!(player = %self.player_name, minutes = self.minutes, "configured");

        true
    }

    pub fn start_game(&mut self) -> bool {
        if self.phase != Phase::Setup
            || self.player_name.is_empty()
            || self.data_error
            || self.questions.is_empty()
        {
            trace!(
                phase = ?self.phase,
                data_error = self.data_error,
                "start rejected"
            );
            return false;
        }

        self.score = 0;
        self.questions_passed = 0;
        self.wrong_guesses = 0;
        self.pool = PuzzleCatalog::new(self.questions.clone());
        self.countdown.start(self.minutes * 60);

        info!(
            player = %self.player_name,
            minutes = self.minutes,
            questions = self.pool.len(),
            "quiz started"
        );
        self.enter_spin();

        true
    }

    fn candidate_wheel(&mut self) -> Option<Wheel<PuzzleId>> {
        let mut candidates: Vec<&Puzzle> = self.pool.list().iter().collect();
        self.rng.shuffle(&mut candidates);

        let segments = candidates
            .into_iter()
            .take(self.rules.wheel_size.max(1))
            .map(|puzzle| Segment::new(puzzle.id(), puzzle.category()))
            .collect();

        Wheel::new(segments)
            .and_then(|wheel| wheel.with_rotations(self.rules.rotations.clone()))
            .map(|wheel| wheel.with_settle_delay(self.rules.settle_delay))
            .map_err(|err| error!(%err, "couldn't build the question wheel"))
            .ok()
    }

    fn enter_spin(&mut self) {
        self.active = None;
        self.wheel = self.candidate_wheel();

        if self.wheel.is_some() {
            self.phase = Phase::Spin;
            debug!(questions_left = self.pool.len(), "spin for a question");
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.countdown.stop();
        if let Some(wheel) = self.wheel.as_mut() {
            wheel.cancel();
        }
        self.phase = Phase::Result;

        info!(
            player = %self.player_name,
            score = self.score,
            passed = self.questions_passed,
            "quiz over"
        );
    }

    fn can_spin(&self) -> bool {
        self.phase == Phase::Spin && self.wheel.as_ref().is_some_and(|wheel| !wheel.is_busy())
    }

    pub fn spin(&mut self) -> Option<SpinResult> {
        if !self.can_spin() {
            trace!("spin rejected");
            return None;
        }

        self.wheel.as_mut()?.spin(&mut self.rng)
    }

    pub fn settle_spin(&mut self, result: &SpinResult) -> Option<PuzzleId> {
        if self.phase != Phase::Spin {
            trace!("stale spin ignored");
            return None;
        }

        let id = self.wheel.as_mut()?.settle(result)?.id;
        self.spin_complete(id)
    }

    fn on_wheel(&self, id: PuzzleId) -> bool {
        self.wheel
            .as_ref()
            .is_some_and(|wheel| wheel.segments().iter().any(|segment| segment.id == id))
    }

    /// Makes the question with `id` active. Ids that aren't on the current
    /// wheel are ignored.
    pub fn spin_complete(&mut self, id: PuzzleId) -> Option<PuzzleId> {
        if !self.can_spin() {
            trace!(%id, "selection rejected");
            return None;
        }

        if !self.on_wheel(id) {
            trace!(%id, "not on the wheel");
            return None;
        }

        let Some(index) = self.pool.position(id) else {
            trace!(%id, "not in the pool");
            return None;
        };

        self.active = Some(index);
        self.revealed.clear();
        self.used.clear();
        self.clue_letters.clear();
        self.clues_remaining = self.rules.max_clues;
        self.phase = Phase::Play;

        debug!(%id, category = self.pool[index].category(), "question selected");
        Some(id)
    }

    fn active_question(&self) -> Option<&Puzzle> {
        self.active.and_then(|index| self.pool.get(index))
    }

    pub fn guess_letter(&mut self, ch: char) -> Option<QuizGuess> {
        let letter = Letter::new(ch)?;

        if self.phase != Phase::Play || self.used.contains(letter) {
            trace!(%letter, "guess rejected");
            return None;
        }

        let occurrences = self.active_question()?.occurrences(letter);
        self.used.insert(letter);

        let guess = if occurrences > 0 {
            self.revealed.insert(letter);
            match self.complete_if_solved() {
                Some(points) => QuizGuess::Solved { letter, points },
                None => QuizGuess::Hit {
                    letter,
                    occurrences,
                },
            }
        } else {
            let penalty = self.rules.wrong_guess_penalty;
            self.score -= i64::from(penalty);
            self.wrong_guesses += 1;
            QuizGuess::Miss { letter, penalty }
        };

        debug!(?guess, score = self.score, "guessed");
        Some(guess)
    }

    pub fn use_clue(&mut self) -> Option<Letter> {
        let cost = i64::from(self.rules.clue_cost);

        if self.phase != Phase::Play || self.clues_remaining == 0 || self.score < cost {
            trace!(
                clues = self.clues_remaining,
                score = self.score,
                "clue rejected"
            );
            return None;
        }

        let unrevealed = self.active_question()?.unrevealed(&self.revealed);
        let letter = *self.rng.pick(&unrevealed)?;

        self.revealed.insert(letter);
        self.used.insert(letter);
        self.clue_letters.push(letter);
        self.clues_remaining -= 1;
        self.score -= cost;
        debug!(%letter, clues = self.clues_remaining, "clue used");

        self.complete_if_solved();
        Some(letter)
    }

    /// Drops the active question without scoring it.
    pub fn skip_question(&mut self) -> Option<PuzzleId> {
        if self.phase != Phase::Play {
            trace!("skip rejected");
            return None;
        }

        let skipped = self.retire_active()?;
        info!(id = %skipped.id(), "question skipped");

        self.after_question();
        Some(skipped.id())
    }

    /// On a solved board, scores and retires the active question, returning
    /// its points.
    fn complete_if_solved(&mut self) -> Option<u32> {
        if !self.active_question()?.is_solved_by(&self.revealed) {
            return None;
        }

        let solved = self.retire_active()?;
        let points = solved.points();

        self.score += i64::from(points);
        self.questions_passed += 1;
        info!(id = %solved.id(), points, score = self.score, "question solved");

        self.after_question();
        Some(points)
    }

    fn retire_active(&mut self) -> Option<Puzzle> {
        let removed = self.active?;
        let puzzle = self.pool.remove(removed)?;
        self.active = self
            .active
            .and_then(|held| PuzzleCatalog::reindex(held, removed));

        Some(puzzle)
    }

    fn after_question(&mut self) {
        if self.pool.is_empty() {
            self.finish();
        } else {
            self.enter_spin();
        }
    }

    /// Advances the countdown by one second, ending the game at zero.
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();

        if tick == Tick::Expired {
            info!("time's up");
            self.finish();
        }

        tick
    }

    /// Returns to setup with a fresh pool. Always legal.
    pub fn reset_game(&mut self) {
        self.countdown.stop();
        self.pool = PuzzleCatalog::new(self.questions.clone());
        self.wheel = None;
        self.active = None;
        self.score = 0;
        self.questions_passed = 0;
        self.wrong_guesses = 0;
        self.revealed.clear();
        self.used.clear();
        self.clue_letters.clear();
        self.clues_remaining = self.rules.max_clues;
        self.phase = Phase::Setup;

        info!("quiz reset");
    }

    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        let question = self.active_question();

        QuizSnapshot {
            phase: self.phase,
            player_name: &self.player_name,
            minutes: self.minutes,
            remaining_seconds: self.countdown.remaining(),
            timer_running: self.countdown.is_running(),
            score: self.score,
            questions_passed: self.questions_passed,
            questions_left: self.pool.len(),
            wrong_guesses: self.wrong_guesses,
            category: question.map(Puzzle::category),
            board: question.map(|puzzle| puzzle.masked(&self.revealed)),
            answer: question
                .filter(|_| self.phase == Phase::Result)
                .map(Puzzle::phrase),
            revealed: self.revealed,
            used: self.used,
            clues_remaining: self.clues_remaining,
            clue_letters: &self.clue_letters,
            wheel: self
                .wheel
                .iter()
                .flat_map(|wheel| wheel.segments())
                .map(|segment| segment.label.as_str())
                .collect(),
            spinning: self.wheel.as_ref().is_some_and(Wheel::is_busy),
            data_error: self.data_error,
        }
    }
}

impl<R> QuizEngine<R> {
    pub const fn rules(&self) -> &QuizRules {
        &self.rules
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    pub const fn score(&self) -> i64 {
        self.score
    }

    pub const fn questions_passed(&self) -> u32 {
        self.questions_passed
    }

    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub const fn data_error(&self) -> bool {
        self.data_error
    }

    pub fn pool(&self) -> &PuzzleCatalog {
        &self.pool
    }

    pub const fn wheel(&self) -> Option<&Wheel<PuzzleId>> {
        self.wheel.as_ref()
    }

    pub fn active_id(&self) -> Option<PuzzleId> {
        self.active
            .and_then(|index| self.pool.get(index))
            .map(Puzzle::id)
    }

    pub const fn revealed(&self) -> &LetterSet {
        &self.revealed
    }

    pub const fn used(&self) -> &LetterSet {
        &self.used
    }

    pub const fn clues_remaining(&self) -> u32 {
        self.clues_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, QuizEngine, QuizGuess, QuizRules};
    use crate::{
        game::Tick,
        puzzle::{Letter, Puzzle, PuzzleId},
        random::Scripted,
    };
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn questions() -> Vec<Puzzle> {
        [("CAT", 10), ("DOG", 20), ("BIRD", 30)]
            .into_iter()
            .zip(1..)
            .map(|((phrase, points), id)| {
                Puzzle::new(PuzzleId(id), phrase, "Animals", points).expect("hard-coded")
            })
            .collect()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).expect("hard-coded letter")
    }

    fn quiz_with(rules: QuizRules) -> QuizEngine<Scripted> {
        let mut quiz = QuizEngine::new(rules, Scripted::ints([0])).expect("valid rules");
        quiz.load_questions(questions());
        quiz
    }

    fn started(rules: QuizRules) -> QuizEngine<Scripted> {
        let mut quiz = quiz_with(rules);
        assert!(quiz.configure("Ana", 1));
        assert!(quiz.start_game());
        quiz
    }

    fn solve(quiz: &mut QuizEngine<Scripted>, phrase: &str) {
        for ch in phrase.chars() {
            quiz.guess_letter(ch);
        }
    }

    #[test]
    fn start_needs_a_name() {
        let mut quiz = quiz_with(QuizRules::default());

        assert!(!quiz.start_game());
        quiz.configure("   ", 2);
        assert!(!quiz.start_game());
        assert_eq!(quiz.phase(), Phase::Setup);

        quiz.configure(" Ana ", 2);
        assert!(quiz.start_game());
        assert_eq!(quiz.player_name(), "Ana");
        assert_eq!(quiz.phase(), Phase::Spin);
        assert_eq!(quiz.countdown().remaining(), 120);
    }

    #[test]
    #[traced_test]
    fn empty_questions_block_start() {
        let mut quiz = quiz_with(QuizRules::default());
        quiz.load_questions(Vec::new());
        quiz.configure("Ana", 2);

        assert!(quiz.data_error());
        assert!(!quiz.start_game());
        assert!(logs_contain("no questions loaded"));
    }

    #[test]
    fn minutes_are_clamped() {
        let mut quiz = quiz_with(QuizRules::default());

        quiz.configure("Ana", 0);
        assert_eq!(quiz.minutes(), 1);
        quiz.configure("Ana", 60);
        assert_eq!(quiz.minutes(), 5);
    }

    #[test]
    fn configure_only_in_setup() {
        let mut quiz = started(QuizRules::default());

        assert!(!quiz.configure("Bo", 5));
        assert_eq!(quiz.player_name(), "Ana");
    }

    #[test]
    fn wheel_holds_at_most_wheel_size() {
        let rules = QuizRules {
            wheel_size: 2,
            ..QuizRules::default()
        };
        let quiz = started(rules);

        assert_eq!(quiz.wheel().map(|wheel| wheel.len()), Some(2));
        assert_eq!(quiz.snapshot().wheel, vec!["Animals", "Animals"]);
    }

    #[test]
    fn spin_selects_a_question() {
        let mut quiz = started(QuizRules::default());

        let result = quiz.spin().expect("spin phase");
        assert_eq!(quiz.spin(), None);
        let id = quiz.settle_spin(&result).expect("wheel was spinning");

        assert_eq!(quiz.phase(), Phase::Play);
        assert_eq!(quiz.active_id(), Some(id));
        assert_eq!(quiz.clues_remaining(), 3);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut quiz = started(QuizRules::default());

        assert_eq!(quiz.spin_complete(PuzzleId(99)), None);
        assert_eq!(quiz.phase(), Phase::Spin);
    }

    #[test]
    fn only_questions_on_the_wheel_can_be_selected() {
        let rules = QuizRules {
            wheel_size: 1,
            ..QuizRules::default()
        };
        let mut quiz = started(rules);

        // the scripted shuffle leaves question 2 first
        let on_wheel: Vec<PuzzleId> = quiz
            .wheel()
            .map(|wheel| wheel.segments().iter().map(|s| s.id).collect())
            .unwrap_or_default();
        assert_eq!(on_wheel, vec![PuzzleId(2)]);

        assert_eq!(quiz.spin_complete(PuzzleId(1)), None);
        assert_eq!(quiz.spin_complete(PuzzleId(3)), None);
        assert_eq!(quiz.phase(), Phase::Spin);
        assert_eq!(quiz.active_id(), None);

        assert_eq!(quiz.spin_complete(PuzzleId(2)), Some(PuzzleId(2)));
        assert_eq!(quiz.phase(), Phase::Play);
    }

    #[test]
    #[traced_test]
    fn misses_cost_the_penalty() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(2));

        assert_eq!(
            quiz.guess_letter('x'),
            Some(QuizGuess::Miss {
                letter: letter('X'),
                penalty: 10,
            })
        );
        quiz.guess_letter('Z');

        assert_eq!(quiz.score(), -20);
        assert_eq!(quiz.wrong_guesses(), 2);
        assert_eq!(quiz.guess_letter('X'), None);
        assert_eq!(quiz.score(), -20);
    }

    #[test]
    #[traced_test]
    fn solving_scores_and_removes() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(2));

        assert_eq!(
            quiz.guess_letter('D'),
            Some(QuizGuess::Hit {
                letter: letter('D'),
                occurrences: 1,
            })
        );
        quiz.guess_letter('O');
        assert_eq!(
            quiz.guess_letter('G'),
            Some(QuizGuess::Solved {
                letter: letter('G'),
                points: 20,
            })
        );

        assert_eq!(quiz.score(), 20);
        assert_eq!(quiz.questions_passed(), 1);
        assert_eq!(quiz.phase(), Phase::Spin);
        assert_eq!(quiz.active_id(), None);

        let left: Vec<PuzzleId> = quiz.pool().ids().collect();
        assert_eq!(left, vec![PuzzleId(1), PuzzleId(3)]);
        assert_eq!(quiz.pool().position(PuzzleId(3)), Some(1));

        // the rebuilt wheel only offers what's left
        let on_wheel: Vec<PuzzleId> = quiz
            .wheel()
            .map(|wheel| wheel.segments().iter().map(|s| s.id).collect())
            .unwrap_or_default();
        assert!(!on_wheel.contains(&PuzzleId(2)));
        assert_eq!(on_wheel.len(), 2);
    }

    #[test]
    fn emptying_the_pool_ends_the_game() {
        let mut quiz = started(QuizRules::default());

        for (id, phrase) in [(3, "BIRD"), (1, "CAT"), (2, "DOG")] {
            assert_eq!(quiz.spin_complete(PuzzleId(id)), Some(PuzzleId(id)));
            solve(&mut quiz, phrase);
        }

        assert_eq!(quiz.phase(), Phase::Result);
        assert_eq!(quiz.score(), 60);
        assert_eq!(quiz.questions_passed(), 3);
        assert!(!quiz.countdown().is_running());
    }

    #[test]
    fn clues_cost_and_refuse_when_broke() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(3));

        assert_eq!(quiz.use_clue(), None);
        assert_eq!(quiz.clues_remaining(), 3);

        let rules = QuizRules {
            clue_cost: 0,
            ..QuizRules::default()
        };
        let mut quiz = started(rules);
        quiz.spin_complete(PuzzleId(3));

        assert_eq!(quiz.use_clue(), Some(letter('B')));
        assert!(quiz.used().contains(letter('B')));
        assert_eq!(quiz.clues_remaining(), 2);
    }

    #[test]
    fn clue_can_solve() {
        let rules = QuizRules {
            clue_cost: 0,
            ..QuizRules::default()
        };
        let mut quiz = started(rules);
        quiz.spin_complete(PuzzleId(1));

        solve(&mut quiz, "CA");
        assert_eq!(quiz.use_clue(), Some(letter('T')));

        assert_eq!(quiz.questions_passed(), 1);
        assert_eq!(quiz.score(), 10);
        assert_eq!(quiz.phase(), Phase::Spin);
    }

    #[test]
    fn skip_removes_without_points() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(1));

        assert_eq!(quiz.skip_question(), Some(PuzzleId(1)));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.questions_passed(), 0);
        assert_eq!(quiz.pool().len(), 2);
        assert_eq!(quiz.phase(), Phase::Spin);
        assert_eq!(quiz.skip_question(), None);
    }

    #[test]
    #[traced_test]
    fn timer_expiry_forces_result_once() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(1));
        quiz.guess_letter('C');

        for remaining in (1..60).rev() {
            assert_eq!(quiz.tick(), Tick::Running(remaining));
        }
        assert_eq!(quiz.tick(), Tick::Expired);
        assert_eq!(quiz.phase(), Phase::Result);
        assert_eq!(quiz.snapshot().answer, Some("CAT"));

        assert_eq!(quiz.tick(), Tick::Ignored);
        assert_eq!(quiz.guess_letter('A'), None);
        assert_eq!(quiz.phase(), Phase::Result);
        assert!(logs_contain("time's up"));
    }

    #[test]
    fn expiry_drops_an_inflight_spin() {
        let mut quiz = started(QuizRules::default());
        let result = quiz.spin().expect("spin phase");

        while quiz.tick() != Tick::Expired {}

        assert_eq!(quiz.settle_spin(&result), None);
        assert_eq!(quiz.phase(), Phase::Result);
    }

    #[test]
    fn setup_ignores_ticks() {
        let mut quiz = quiz_with(QuizRules::default());

        assert_eq!(quiz.tick(), Tick::Ignored);
        assert_eq!(quiz.phase(), Phase::Setup);
    }

    #[test]
    fn reset_restores_the_pool() {
        let mut quiz = started(QuizRules::default());
        quiz.spin_complete(PuzzleId(1));
        solve(&mut quiz, "CAT");
        assert_eq!(quiz.pool().len(), 2);

        quiz.reset_game();

        assert_eq!(quiz.phase(), Phase::Setup);
        assert_eq!(quiz.pool().len(), 3);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.countdown().is_running());
        assert_eq!(quiz.tick(), Tick::Ignored);

        assert!(quiz.start_game());
        assert_eq!(quiz.questions_passed(), 0);
    }
}
