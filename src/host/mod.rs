//! Host-side session logic.
//!
//! One explicitly constructed [`HostSession`] per host device owns the round:
//! the names entered up front, the number draws, the reveal sequencing, and
//! the topic deck. The "show the next QR" action is a single consumer
//! ([`HostSession::handle_trigger`]) fed by one [`DrawTrigger`] event type
//! with two producers: the host tapping the next button, and the relayed
//! scan hint from a participant device. The hint is advisory only; this
//! session stays the authority for which numbers were issued.

use crate::game::{AssignmentRegistry, GameError, RevealSequencer};
use crate::topics::TopicDeck;
use crate::types::{Assignment, Number, Topic};

/// Where the host UI currently is: entering names, distributing QR codes,
/// or revealing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    Entry,
    Game,
    Result,
}

/// The two producers of the next-number action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawTrigger {
    /// The host pressed the next button.
    HostAction,
    /// A participant device reported scanning the code for `number`
    /// (relayed `qr-scanned-notification`).
    RemoteScan { number: Number },
}

/// One round of the lottery from the host's point of view.
pub struct HostSession {
    names: Vec<String>,
    registry: AssignmentRegistry,
    /// Index of the participant whose QR code is currently displayed.
    cursor: usize,
    reveal: Option<RevealSequencer>,
    topics: TopicDeck,
    phase: HostPhase,
}

impl HostSession {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            registry: AssignmentRegistry::new(),
            cursor: 0,
            reveal: None,
            topics: TopicDeck::default(),
            phase: HostPhase::Entry,
        }
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    /// Leave the entry screen with the given participant names. Blank names
    /// are dropped; at least one real name is required. The first
    /// participant is assigned a number immediately so their QR code can be
    /// shown.
    pub fn begin(&mut self, names: Vec<String>) -> Result<&Assignment, GameError> {
        if self.phase != HostPhase::Entry {
            return Err(GameError::InvalidPhase(
                "begin is only valid on the entry screen".to_string(),
            ));
        }

        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(GameError::NoParticipants);
        }

        self.registry.register(&names[0])?;
        self.names = names;
        self.cursor = 0;
        self.phase = HostPhase::Game;
        Ok(&self.registry.list()[0])
    }

    /// The single consumer of next-number triggers.
    ///
    /// Returns the newly displayed assignment, or `None` when the trigger
    /// was ignored (already at the last participant, or a scan hint that
    /// does not match the code currently on screen).
    pub fn handle_trigger(
        &mut self,
        trigger: DrawTrigger,
    ) -> Result<Option<&Assignment>, GameError> {
        match trigger {
            DrawTrigger::HostAction => {
                if self.phase != HostPhase::Game {
                    return Err(GameError::InvalidPhase(
                        "numbers can only be drawn during QR distribution".to_string(),
                    ));
                }
                self.advance_slot()
            }
            DrawTrigger::RemoteScan { number } => {
                // Hints are fire-and-forget: outside the game phase, or for
                // a number that is not on screen, they are ignored.
                if self.phase != HostPhase::Game {
                    return Ok(None);
                }
                if self.current().map(|a| a.number) == Some(number) {
                    self.advance_slot()
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn advance_slot(&mut self) -> Result<Option<&Assignment>, GameError> {
        if self.cursor + 1 >= self.names.len() {
            return Ok(None);
        }
        self.cursor += 1;
        if self.cursor >= self.registry.count() {
            let name = self.names[self.cursor].clone();
            if let Err(e) = self.registry.register(&name) {
                self.cursor -= 1;
                return Err(e);
            }
        }
        Ok(self.registry.list().get(self.cursor))
    }

    /// Step back to the previous participant's code. No new draw happens;
    /// the earlier assignment is shown again.
    pub fn previous(&mut self) -> Option<&Assignment> {
        if self.phase == HostPhase::Game && self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// The assignment whose QR code is currently displayed.
    pub fn current(&self) -> Option<&Assignment> {
        self.registry.list().get(self.cursor)
    }

    /// Assignments in registration order.
    pub fn assignments(&self) -> &[Assignment] {
        self.registry.list()
    }

    pub fn numbers_issued(&self) -> usize {
        self.registry.numbers_issued()
    }

    pub fn numbers_remaining(&self) -> usize {
        self.registry.numbers_remaining()
    }

    /// Freeze the assignment set and move to the reveal screen. Every
    /// entered name must have received a number.
    pub fn finalize(&mut self) -> Result<(), GameError> {
        if self.phase != HostPhase::Game {
            return Err(GameError::InvalidPhase(
                "finalize is only valid during QR distribution".to_string(),
            ));
        }
        if self.registry.count() < self.names.len() {
            return Err(GameError::NotFullyAssigned);
        }

        self.reveal = Some(RevealSequencer::new(self.registry.list()));
        self.phase = HostPhase::Result;
        Ok(())
    }

    pub fn reveal(&self) -> Option<&RevealSequencer> {
        self.reveal.as_ref()
    }

    pub fn start_reveal(&mut self) -> Result<(), GameError> {
        match self.reveal.as_mut() {
            Some(sequencer) => {
                sequencer.start();
                Ok(())
            }
            None => Err(GameError::InvalidPhase(
                "reveal has not been finalized".to_string(),
            )),
        }
    }

    /// Disclose one more participant; returns the new revealed count.
    pub fn advance_reveal(&mut self) -> Result<usize, GameError> {
        match self.reveal.as_mut() {
            Some(sequencer) => Ok(sequencer.advance()),
            None => Err(GameError::InvalidPhase(
                "reveal has not been finalized".to_string(),
            )),
        }
    }

    /// Back to the topic-selection screen without losing assignments.
    pub fn reset_reveal(&mut self) {
        if let Some(sequencer) = self.reveal.as_mut() {
            sequencer.reset();
        }
    }

    pub fn set_topics(&mut self, topics: Vec<Topic>) {
        self.topics.replace(topics);
    }

    pub fn topics(&self) -> &TopicDeck {
        &self.topics
    }

    pub fn topics_mut(&mut self) -> &mut TopicDeck {
        &mut self.topics
    }

    /// Discard the whole round and return to the entry screen.
    pub fn reset(&mut self) {
        self.names.clear();
        self.registry.reset();
        self.cursor = 0;
        self.reveal = None;
        self.topics = TopicDeck::default();
        self.phase = HostPhase::Entry;
    }
}

impl Default for HostSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the QR payload: the page's base URL plus `?n=<number>`. Scanning
/// and opening this URL is how a participant device learns its number.
pub fn qr_url(base_url: &str, number: Number) -> String {
    let base = base_url.split('?').next().unwrap_or(base_url);
    format!("{}?n={}", base, number)
}
