//! Resource session that owns one authoritative snapshot.

use crate::bounds::list_violations;
use crate::codec::decode_action;
use crate::core::{
    transition_with, ActionDefaults, Guard, ResourceAction, ResourceSnapshot, TransitionHistory,
    TransitionRecord,
};
use crate::session::error::SessionError;
use chrono::Utc;
use log::{debug, trace, warn};
use uuid::Uuid;

/// Caller-owned loop around the transition engine.
///
/// A session holds exactly one snapshot. Every dispatch feeds it through
/// the engine, replaces it wholesale with the result and records the
/// step in history. Actions are applied one at a time in call order.
pub struct ResourceSession {
    id: Uuid,
    current: ResourceSnapshot,
    defaults: ActionDefaults,
    history: TransitionHistory,
}

impl ResourceSession {
    /// Start a session with every resource full.
    pub fn new() -> Self {
        Self::starting_at(ResourceSnapshot::FULL)
    }

    /// Start a session from a caller-supplied snapshot.
    ///
    /// The snapshot must be within bounds; every offending field is
    /// reported, not only the first.
    pub fn from_snapshot(snapshot: ResourceSnapshot) -> Result<Self, SessionError> {
        let violations = list_violations(&snapshot);
        if !violations.is_empty() {
            warn!(
                "rejected starting snapshot ({snapshot}) with {} violation(s)",
                violations.len()
            );
            return Err(SessionError::InvalidSnapshot(violations));
        }
        Ok(Self::starting_at(snapshot))
    }

    fn starting_at(snapshot: ResourceSnapshot) -> Self {
        let id = Uuid::new_v4();
        debug!("session {id} started at {snapshot}");
        Self {
            id,
            current: snapshot,
            defaults: ActionDefaults::STANDARD,
            history: TransitionHistory::new(),
        }
    }

    /// Use `defaults` for actions dispatched without magnitudes.
    pub fn with_defaults(mut self, defaults: ActionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current snapshot (pure)
    pub fn current(&self) -> &ResourceSnapshot {
        &self.current
    }

    pub fn defaults(&self) -> &ActionDefaults {
        &self.defaults
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Apply one action and return the new snapshot.
    pub fn dispatch(&mut self, action: &ResourceAction) -> ResourceSnapshot {
        let from = self.current;
        let to = transition_with(&self.defaults, &from, action);

        if action.kind().is_none() {
            warn!(
                "session {}: ignoring unrecognized action '{}'",
                self.id,
                action.tag()
            );
        } else if from == to {
            trace!("session {}: {} left {from} unchanged", self.id, action.tag());
        } else {
            debug!("session {}: {} {from} -> {to}", self.id, action.tag());
        }

        let record = TransitionRecord {
            sequence: self.history.len() as u64 + 1,
            action: action.tag().to_string(),
            from,
            to,
            timestamp: Utc::now(),
        };
        self.history.push(record);
        self.current = to;
        to
    }

    /// Decode an action envelope and apply it.
    pub fn dispatch_json(&mut self, json: &str) -> Result<ResourceSnapshot, SessionError> {
        let action = decode_action(json)?;
        Ok(self.dispatch(&action))
    }

    /// Return every resource to full.
    pub fn reset(&mut self) -> ResourceSnapshot {
        self.dispatch(&ResourceAction::ResetResources)
    }

    /// Apply actions in order and return the final snapshot.
    pub fn run<'a, I>(&mut self, actions: I) -> ResourceSnapshot
    where
        I: IntoIterator<Item = &'a ResourceAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
        self.current
    }

    /// Repeat `action` while `guard` passes, at most `max_steps` times.
    ///
    /// Returns the number of times the action was applied.
    pub fn run_while(&mut self, guard: &Guard, action: &ResourceAction, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && guard.check(&self.current) {
            self.dispatch(action);
            steps += 1;
        }
        debug!(
            "session {}: {} applied {steps} time(s), now {}",
            self.id,
            action.tag(),
            self.current
        );
        steps
    }
}

impl Default for ResourceSession {
    fn default() -> Self {
        Self::new()
    }
}
