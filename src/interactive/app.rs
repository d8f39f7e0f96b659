//! TUI application state and logic
//!
//! Owns the session plus the two wall-clock timers the session itself will
//! not run: the spelling-mode repeat-word cue and the delayed advance to the
//! next round. Both carry session tokens, so a timer that outlives its round
//! is discarded instead of firing into the wrong one.

use crate::adapters::{CuePlayer, Speech};
use crate::session::{
    AdvanceToken, AnswerOutcome, GameMode, GameSession, Phase, RoundPlan, RoundToken,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes to check timers
const TICK: Duration = Duration::from_millis(100);

/// Longest answer the input box accepts
const MAX_INPUT_LEN: usize = 24;

/// Transient status line
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<R: Rng = StdRng> {
    pub session: GameSession<R>,
    speech: Box<dyn Speech>,
    cues: Box<dyn CuePlayer>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub current_plan: Option<RoundPlan>,
    pub should_quit: bool,
    pending_repeat: Option<(Instant, RoundToken)>,
    pending_advance: Option<(Instant, AdvanceToken)>,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: GameSession<R>, speech: Box<dyn Speech>, cues: Box<dyn CuePlayer>) -> Self {
        cues.welcome();

        let mut app = Self {
            session,
            speech,
            cues,
            input_buffer: String::new(),
            messages: Vec::new(),
            current_plan: None,
            should_quit: false,
            pending_repeat: None,
            pending_advance: None,
        };
        app.add_message("Welcome! Pick a game with 1, 2 or 3.", MessageStyle::Info);
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.state().phase() {
            Phase::Welcome => self.handle_welcome_key(key),
            Phase::AwaitingAnswer => self.handle_answer_key(key),
            Phase::RoundOver => self.handle_round_over_key(key),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.start(GameMode::Spelling),
            KeyCode::Char('2') => self.start(GameMode::Scramble),
            KeyCode::Char('3') => self.start(GameMode::Blanks),
            KeyCode::Char('s') => self.cycle_word_set(),
            _ => {}
        }
    }

    fn handle_answer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_to_menu(),
            KeyCode::Tab => {
                // Hear the word again (spelling mode)
                self.pending_repeat = None;
                if let Some(word) = self.session.hear_again() {
                    self.speech.speak(&word);
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < MAX_INPUT_LEN {
                    self.input_buffer.push(c.to_ascii_lowercase());
                    // Typing cancels the pending repeat cue
                    self.pending_repeat = None;
                    self.session.note_input_activity();
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_round_over_key(&mut self, key: KeyEvent) {
        // The advance timer owns the next transition; only leaving is allowed
        match key.code {
            KeyCode::Esc => self.go_to_menu(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn start(&mut self, mode: GameMode) {
        match self.session.start_game(mode) {
            Ok(plan) => {
                self.messages.clear();
                self.begin_plan(plan);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn cycle_word_set(&mut self) {
        let names: Vec<String> = self
            .session
            .sets()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        let active = self.session.state().active_set();
        let next = names[(active + 1) % names.len()].clone();

        match self.session.switch_word_set(&next) {
            Ok(()) => self.add_message(&format!("Word set: {next}"), MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Present a fresh round: show it, speak it, arm its repeat cue
    fn begin_plan(&mut self, plan: RoundPlan) {
        self.input_buffer.clear();
        self.pending_advance = None;

        if let Some(text) = &plan.speak {
            self.speech.speak(text);
        }
        self.pending_repeat = plan
            .repeat_after
            .map(|delay| (Instant::now() + delay, plan.token));
        self.current_plan = Some(plan);
    }

    fn submit(&mut self) {
        let raw = self.input_buffer.clone();

        let Ok(outcome) = self.session.submit_answer(&raw) else {
            return;
        };

        match outcome {
            AnswerOutcome::Correct { advance, delay } => {
                self.speech.cancel();
                self.cues.correct();
                self.pending_repeat = None;
                self.pending_advance = Some((Instant::now() + delay, advance));
                self.add_message("\u{1f389} Fantastic! You got it right!", MessageStyle::Success);
            }
            AnswerOutcome::Exhausted {
                answer,
                advance,
                delay,
            } => {
                self.speech.cancel();
                self.cues.wrong();
                self.pending_repeat = None;
                self.pending_advance = Some((Instant::now() + delay, advance));
                self.add_message(
                    &format!("Sorry, the correct word was: {}", answer.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            AnswerOutcome::Incorrect { attempts_remaining } => {
                self.cues.wrong();
                self.input_buffer.clear();
                let tries = if attempts_remaining == 1 { "try" } else { "tries" };
                self.add_message(
                    &format!("Not quite — have another go! ({attempts_remaining} {tries} left)"),
                    MessageStyle::Error,
                );
            }
            AnswerOutcome::Unrecognized => {
                self.add_message("Please type the word first!", MessageStyle::Info);
            }
        }
    }

    fn go_to_menu(&mut self) {
        self.speech.cancel();
        self.pending_repeat = None;
        self.pending_advance = None;
        self.current_plan = None;
        self.session.return_to_welcome();
        self.cues.welcome();
        self.add_message("Back at the menu. Pick a game with 1, 2 or 3.", MessageStyle::Info);
    }

    /// Fire any timer that has come due
    pub fn on_tick(&mut self, now: Instant) {
        if let Some((when, token)) = self.pending_repeat
            && now >= when
        {
            self.pending_repeat = None;
            if let Some(word) = self.session.repeat_cue(token).map(str::to_string) {
                self.speech.speak(&word);
            }
        }

        if let Some((when, token)) = self.pending_advance
            && now >= when
        {
            self.pending_advance = None;
            if let Some(plan) = self.session.advance(token) {
                self.begin_plan(plan);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoids double input on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{NullCues, NullSpeech};
    use crate::core::WordSet;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App<StdRng> {
        let set = WordSet::from_pairs(
            "practice",
            &[("pram", "baby carriage"), ("shed", "tool hut")],
        );
        let session = GameSession::with_rng(vec![set], StdRng::seed_from_u64(3)).unwrap();
        App::new(session, Box::new(NullSpeech), Box::new(NullCues))
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn mode_key_starts_a_round() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));

        assert_eq!(app.session.state().phase(), Phase::AwaitingAnswer);
        assert!(app.current_plan.is_some());
    }

    #[test]
    fn typed_answer_is_buffered_and_submitted() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));

        type_word(&mut app, "pram");
        assert_eq!(app.session.state().score(), 1);
        assert_eq!(app.session.state().phase(), Phase::RoundOver);
    }

    #[test]
    fn advance_timer_presents_next_round() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));
        type_word(&mut app, "pram");

        let (when, _) = app.pending_advance.unwrap();
        app.on_tick(when);

        assert_eq!(app.session.state().phase(), Phase::AwaitingAnswer);
        assert_eq!(app.session.current_entry().unwrap().word(), "shed");
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn early_tick_leaves_advance_pending() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));
        type_word(&mut app, "pram");

        app.on_tick(Instant::now());
        assert_eq!(app.session.state().phase(), Phase::RoundOver);
        assert!(app.pending_advance.is_some());
    }

    #[test]
    fn typing_disarms_repeat_timer() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('1'))); // spelling arms the repeat cue
        assert!(app.pending_repeat.is_some());

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.pending_repeat.is_none());
    }

    #[test]
    fn stale_repeat_timer_does_not_fire_after_round_end() {
        use std::cell::RefCell;
        use std::rc::Rc;

        #[derive(Clone, Default)]
        struct RecordingSpeech(Rc<RefCell<Vec<String>>>);

        impl Speech for RecordingSpeech {
            fn speak(&self, text: &str) {
                self.0.borrow_mut().push(text.to_string());
            }
            fn cancel(&self) {}
        }

        let set = WordSet::from_pairs(
            "practice",
            &[("pram", "baby carriage"), ("shed", "tool hut")],
        );
        let session = GameSession::with_rng(vec![set], StdRng::seed_from_u64(3)).unwrap();
        let spoken = RecordingSpeech::default();
        let mut app = App::new(session, Box::new(spoken.clone()), Box::new(NullCues));

        app.handle_key(key(KeyCode::Char('1')));
        let (_, token) = app.pending_repeat.unwrap();
        assert_eq!(spoken.0.borrow().as_slice(), ["pram"]);

        type_word(&mut app, "pram");
        // Simulate the old timer firing late, ahead of the advance timer
        app.pending_repeat = Some((Instant::now(), token));
        app.on_tick(Instant::now());

        // Session rejected the stale token: nothing spoken over the result
        assert!(app.pending_repeat.is_none());
        assert_eq!(spoken.0.borrow().as_slice(), ["pram"]);
        assert_eq!(app.session.state().phase(), Phase::RoundOver);
    }

    #[test]
    fn escape_returns_to_menu_and_clears_timers() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('1')));
        type_word(&mut app, "wrong");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.session.state().phase(), Phase::Welcome);
        assert!(app.pending_repeat.is_none());
        assert!(app.pending_advance.is_none());
        assert!(app.current_plan.is_none());
    }

    #[test]
    fn set_cycling_only_on_welcome() {
        let set_a = WordSet::from_pairs("practice", &[("pram", "baby carriage")]);
        let set_b = WordSet::from_pairs("animals", &[("frog", "ribbit")]);
        let session = GameSession::with_rng(vec![set_a, set_b], StdRng::seed_from_u64(3)).unwrap();
        let mut app = App::new(session, Box::new(NullSpeech), Box::new(NullCues));

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.session.active_set().name(), "animals");

        app.handle_key(key(KeyCode::Char('1')));
        let before = app.session.state().active_set();
        // 's' is now just a letter for the answer box
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.session.state().active_set(), before);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn ctrl_c_quits_in_any_phase() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
