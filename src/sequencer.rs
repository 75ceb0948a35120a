//! Request Sequencer
//!
//! Hands out a token per remote call and per output slot. Only the latest
//! token for a slot may write into it, so a slow response can never
//! overwrite a newer one.

use std::collections::HashMap;

use crate::models::OutputSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub slot: OutputSlot,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequencer {
    latest: HashMap<OutputSlot, u64>,
}

impl Sequencer {
    /// Issue a new token for `slot`, superseding any outstanding one
    pub fn issue(&mut self, slot: OutputSlot) -> RequestToken {
        let seq = self.latest.entry(slot).or_insert(0);
        *seq += 1;
        RequestToken { slot, seq: *seq }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.slot).copied() == Some(token.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let mut seq = Sequencer::default();
        let first = seq.issue(OutputSlot::ProjectsList);
        let second = seq.issue(OutputSlot::ProjectsList);

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut seq = Sequencer::default();
        let files = seq.issue(OutputSlot::FilesList);
        let _status = seq.issue(OutputSlot::SystemStatus);
        let _status = seq.issue(OutputSlot::SystemStatus);

        assert!(seq.is_current(files));
    }

    #[test]
    fn test_unknown_token_is_stale() {
        let seq = Sequencer::default();
        let foreign = RequestToken { slot: OutputSlot::PromptResponse, seq: 1 };
        assert!(!seq.is_current(foreign));
    }
}
