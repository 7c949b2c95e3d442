//! The drag/match coordinator.
//!
//! `Coordinator` owns every slot and choice of one widget instance together
//! with the pointer gesture in flight. Host code forwards pointer events to
//! it and applies the returned [`Action`]s to the page: moving, resetting or
//! removing choice elements, clearing filled slots, and announcing the final
//! outcome. Nothing here touches the DOM, so the whole state machine runs in
//! plain unit tests.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, ChoiceId};
use crate::config::{DragnetConfig, MatchPolicy};
use crate::error::Result;
use crate::geom::{GeometryProvider, Point, Rect};
use crate::input::{Button, InputState};
use crate::markup::ScannedLabel;
use crate::slot::{Slot, SlotId};

/// Changes the host must reflect on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A new choice element should be drawn at `position`.
    ChoiceSpawned { id: ChoiceId, value: String, position: Point },
    /// A dragged choice moved.
    ChoiceMoved { id: ChoiceId, position: Point },
    /// A released choice missed every slot and went back to `position`.
    ChoiceReset { id: ChoiceId, position: Point },
    /// A released choice missed every slot and should be removed.
    ChoiceDiscarded { id: ChoiceId },
    /// A slot took a choice; the slot element's text should be cleared.
    SlotFilled { slot: SlotId, choice: ChoiceId, value: String },
    /// A choice is locked and no longer draggable.
    ChoicePlaced { id: ChoiceId },
    /// Every slot is filled; announce the result. Emitted once.
    Completed { outcome: Outcome },
}

/// Result of a finished exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    AllCorrect,
    SomeIncorrect,
}

impl Outcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::AllCorrect)
    }

    /// Message shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::AllCorrect => "All answers are correct.",
            Self::SomeIncorrect => "Some answers wrong",
        }
    }
}

/// Drag/match state for one widget.
#[derive(Debug, Default)]
pub struct Coordinator {
    config: DragnetConfig,
    slots: Vec<Slot>,
    /// Creation order, which is also stacking order: later choices draw on top.
    choices: Vec<Choice>,
    input: InputState,
    started: bool,
    outcome: Option<Outcome>,
}

impl Coordinator {
    #[must_use]
    pub fn new(config: DragnetConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Build a coordinator whose slots come from embedded-answer labels.
    ///
    /// `texts` yields each candidate label's text in document order; labels
    /// without an answer span are skipped. `measure` is called once per
    /// scanned label, in order: the host writes `markup.rewritten` into the
    /// label's element and returns that element's client rect, which becomes
    /// the slot region. Measuring after the rewrite keeps the drop target to
    /// the placeholder rather than the original sentence.
    ///
    /// # Errors
    ///
    /// [`crate::DragnetError::InvalidAnswerPattern`] if the configured
    /// pattern is unusable.
    pub fn from_markup<'a, I, F>(config: DragnetConfig, texts: I, mut measure: F) -> Result<(Self, Vec<ScannedLabel>)>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&ScannedLabel) -> Rect,
    {
        let scanned = config.scanner()?.scan(texts);

        let mut coordinator = Self::new(config);
        for label in &scanned {
            let region = measure(label);
            coordinator.add_slot(label.markup.answer.clone(), region);
        }
        Ok((coordinator, scanned))
    }

    // --- Setup ---

    /// Register a slot expecting `expected` over `region`. Slots added after
    /// [`Coordinator::start`] get no choice of their own.
    pub fn add_slot(&mut self, expected: impl Into<String>, region: Rect) -> SlotId {
        let id = SlotId(self.slots.len());
        let slot = Slot::new(id, expected, region).with_placeholder(self.config.placeholder.clone());
        self.slots.push(slot);
        id
    }

    /// Spawn one choice per slot, stacked in the staging column in slot
    /// order. Only the first call has any effect.
    pub fn start(&mut self) -> Vec<Action> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut actions = Vec::with_capacity(self.slots.len());
        for (i, slot) in self.slots.iter().enumerate() {
            let choice = Choice::new(slot.expected(), self.config.staging.position(i));
            actions.push(spawned(&choice));
            self.choices.push(choice);
        }
        tracing::debug!(slots = self.slots.len(), "exercise started");
        actions
    }

    // --- Input events ---

    /// Begin dragging `target` if it is an unplaced choice and no other
    /// gesture is active. Only the primary button drags.
    pub fn on_pointer_down(&mut self, pointer: Point, button: Button, target: Option<ChoiceId>) -> Vec<Action> {
        if button != Button::Primary || self.input != InputState::Idle {
            return Vec::new();
        }
        let Some(id) = target else {
            return Vec::new();
        };
        let Some(idx) = self.choice_index(id) else {
            tracing::debug!(%id, "pointer down on unknown choice");
            return Vec::new();
        };
        if self.choices[idx].is_placed() {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.config.reuse_answers {
            let original = &self.choices[idx];
            let copy = Choice::new(original.value(), original.origin());
            actions.push(spawned(&copy));
            self.choices.push(copy);
        }

        if self.choices[idx].begin_drag(pointer) {
            self.input = InputState::Dragging { id };
            tracing::debug!(%id, x = pointer.x, y = pointer.y, "drag started");
        }
        actions
    }

    /// Move the dragged choice, if any, to follow the pointer.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let Some(id) = self.input.dragging() else {
            return Vec::new();
        };
        let tracking = self.config.tracking;
        let Some(choice) = self.choices.iter_mut().find(|c| c.id() == id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        if !choice.update_position(pointer, tracking) {
            return Vec::new();
        }
        vec![Action::ChoiceMoved { id, position: choice.position() }]
    }

    /// Release the dragged choice: drop it into the slot chosen by the match
    /// policy, or reset it. Reports the outcome once the last slot fills.
    pub fn on_pointer_up<G>(&mut self, pointer: Point, geometry: &G) -> Vec<Action>
    where
        G: GeometryProvider + ?Sized,
    {
        let Some(id) = self.input.dragging() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let Some(ci) = self.choice_index(id) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        let choice = &mut self.choices[ci];
        let before = choice.position();
        choice.update_position(pointer, self.config.tracking);
        if choice.position() != before {
            actions.push(Action::ChoiceMoved { id, position: choice.position() });
        }

        let bounds = geometry.choice_bounds(&self.choices[ci]);
        match self.resolve_slot(&bounds) {
            Some(si) => self.place(si, ci, &mut actions),
            None => {
                tracing::debug!(%id, "released outside every open slot");
                self.miss(ci, &mut actions);
            }
        }

        if let Some(completed) = self.check_completion() {
            actions.push(completed);
        }
        actions
    }

    /// Abandon the drag in progress as if it had missed every slot.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        let Some(id) = self.input.dragging() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if let Some(ci) = self.choice_index(id) {
            self.miss(ci, &mut actions);
        }
        actions
    }

    // --- Queries ---

    /// Topmost unplaced choice under `pt`, for hosts without an event target.
    #[must_use]
    pub fn choice_at<G>(&self, pt: Point, geometry: &G) -> Option<ChoiceId>
    where
        G: GeometryProvider + ?Sized,
    {
        self.choices
            .iter()
            .rev()
            .filter(|c| !c.is_placed())
            .find(|c| geometry.choice_bounds(c).contains(pt))
            .map(Choice::id)
    }

    #[must_use]
    pub fn config(&self) -> &DragnetConfig {
        &self.config
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.0)
    }

    /// All live choices in stacking order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    /// The choice currently being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<ChoiceId> {
        self.input.dragging()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.dragging().is_some()
    }

    #[must_use]
    pub fn all_filled(&self) -> bool {
        self.slots.iter().all(Slot::has_choice)
    }

    /// The reported outcome, once the exercise is complete.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Score the exercise.
    ///
    /// # Errors
    ///
    /// [`crate::DragnetError::EvaluateBeforeFill`] naming the first empty slot.
    pub fn evaluate(&self) -> Result<Outcome> {
        let mut all_correct = true;
        for slot in &self.slots {
            all_correct &= slot.is_correct()?;
        }
        Ok(if all_correct { Outcome::AllCorrect } else { Outcome::SomeIncorrect })
    }

    // --- Internals ---

    fn choice_index(&self, id: ChoiceId) -> Option<usize> {
        self.choices.iter().position(|c| c.id() == id)
    }

    /// Index of the open slot a choice occupying `bounds` lands in.
    fn resolve_slot(&self, bounds: &Rect) -> Option<usize> {
        let mut open = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.has_choice() && s.overlaps(bounds));

        match self.config.match_policy {
            MatchPolicy::FirstMatch => open.next().map(|(i, _)| i),
            MatchPolicy::LargestOverlap => {
                let (first, slot) = open.next()?;
                let mut best = (first, slot.region().intersection_area(bounds));
                for (i, s) in open {
                    let area = s.region().intersection_area(bounds);
                    if area > best.1 {
                        best = (i, area);
                    }
                }
                Some(best.0)
            }
        }
    }

    fn place(&mut self, si: usize, ci: usize, actions: &mut Vec<Action>) {
        let slot = &mut self.slots[si];
        let choice = &mut self.choices[ci];
        match slot.fill(choice) {
            Ok(()) => {
                tracing::debug!(slot = %slot.id(), choice = %choice.id(), "slot filled");
                actions.push(Action::SlotFilled { slot: slot.id(), choice: choice.id(), value: choice.value().to_string() });
                actions.push(Action::ChoicePlaced { id: choice.id() });
            }
            Err(e) => {
                tracing::warn!(error = %e, "fill rejected");
                self.miss(ci, actions);
            }
        }
    }

    /// Undo a release that found no slot: discard the dragged copy in reuse
    /// mode, otherwise send it back to where the drag began.
    fn miss(&mut self, ci: usize, actions: &mut Vec<Action>) {
        if self.config.reuse_answers {
            let choice = self.choices.remove(ci);
            actions.push(Action::ChoiceDiscarded { id: choice.id() });
        } else {
            let choice = &mut self.choices[ci];
            choice.reset_position();
            actions.push(Action::ChoiceReset { id: choice.id(), position: choice.position() });
        }
    }

    fn check_completion(&mut self) -> Option<Action> {
        if self.outcome.is_some() || self.slots.is_empty() || !self.all_filled() {
            return None;
        }
        let outcome = match self.evaluate() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "evaluation failed with every slot filled");
                return None;
            }
        };
        self.outcome = Some(outcome);
        tracing::info!(?outcome, slots = self.slots.len(), "exercise complete");
        Some(Action::Completed { outcome })
    }
}

fn spawned(choice: &Choice) -> Action {
    Action::ChoiceSpawned { id: choice.id(), value: choice.value().to_string(), position: choice.position() }
}
