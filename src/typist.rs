//! Hero headline typing effect.
//!
//! A `PhraseTypist` types a phrase one character at a time, holds it, deletes
//! it, then moves on to the next phrase, forever. Each timer firing is one
//! `step()`, and `next_delay()` says how long to wait before the next one.

use std::rc::Rc;

use log::debug;
use thiserror::Error;
use yew::functional::Reducible;

use crate::config;
use crate::timer::Scheduler;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypistError {
    #[error("a phrase typist needs at least one phrase")]
    NoPhrases,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypistMode {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_ms: u32,
    pub hold_ms: u32,
    pub delete_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_ms: config::TYPE_MS_PER_CHAR,
            hold_ms: config::HOLD_FULL_PHRASE_MS,
            delete_ms: config::DELETE_MS_PER_CHAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseTypist {
    phrases: Rc<[String]>,
    index: usize,
    // counted in chars, never bytes
    typed: usize,
    mode: TypistMode,
    timing: TypingTiming,
}

impl PhraseTypist {
    pub fn new<I, P>(phrases: I, timing: TypingTiming) -> Result<Self, TypistError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Rc<[String]> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypistError::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            typed: 0,
            mode: TypistMode::Typing,
            timing,
        })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn mode(&self) -> TypistMode {
        self.mode
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// The prefix of the current phrase that is on screen.
    pub fn current_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.typed)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn next_delay(&self) -> u32 {
        match self.mode {
            TypistMode::Typing => self.timing.type_ms,
            TypistMode::Pausing => self.timing.hold_ms,
            TypistMode::Deleting => self.timing.delete_ms,
        }
    }

    pub fn step(&mut self) {
        match self.mode {
            TypistMode::Typing => {
                let len = self.phrase_len();
                if self.typed < len {
                    self.typed += 1;
                }
                if self.typed >= len {
                    self.mode = TypistMode::Pausing;
                }
            }
            TypistMode::Pausing => {
                self.mode = TypistMode::Deleting;
            }
            TypistMode::Deleting => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.mode = TypistMode::Typing;
                    debug!("typist moving to phrase {}", self.index);
                }
            }
        }
    }

    /// Arms the timer for the next step. Dropping the handle cancels it.
    pub fn schedule_step<S, F>(&self, scheduler: &S, on_step: F) -> S::Handle
    where
        S: Scheduler,
        F: FnOnce() + 'static,
    {
        scheduler.once(self.next_delay(), Box::new(on_step))
    }
}

pub enum TypistAction {
    Step,
}

impl Reducible for PhraseTypist {
    type Action = TypistAction;

    fn reduce(self: Rc<Self>, action: TypistAction) -> Rc<Self> {
        match action {
            TypistAction::Step => {
                let mut next = (*self).clone();
                next.step();
                Rc::new(next)
            }
        }
    }
}

/// Text cursor that blinks on its own clock, whatever the typist is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn schedule<S, F>(scheduler: &S, period_ms: u32, on_toggle: F) -> S::Handle
    where
        S: Scheduler,
        F: FnMut() + 'static,
    {
        scheduler.repeating(period_ms, Box::new(on_toggle))
    }
}

impl Reducible for CursorBlink {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = *self;
        next.toggle();
        Rc::new(next)
    }
}
