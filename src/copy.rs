/// Bookkeeping for "Copied!" feedback on copy buttons
///
/// Each button has at most one pending restore. Re-arming a button that is
/// still showing feedback hands back the previous timer so the caller can
/// cancel it, and keeps the label captured by the first copy.
use std::collections::HashMap;

pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_CLASS: &str = "copied";
pub const FEEDBACK_MS: u32 = 2000;

#[derive(Debug)]
struct PendingRestore<T> {
    label: String,
    timer: T,
}

#[derive(Debug)]
pub struct RestoreLedger<T> {
    pending: HashMap<String, PendingRestore<T>>,
}

/// Result of arming a button's restore timer
#[derive(Debug)]
pub struct Armed<T> {
    /// Label to put back when the timer fires.
    pub restore_label: String,
    /// Timer of an earlier copy that must be cancelled.
    pub superseded: Option<T>,
}

impl<T> RestoreLedger<T> {
    pub fn new() -> Self {
        RestoreLedger {
            pending: HashMap::new(),
        }
    }

    pub fn arm(&mut self, button_id: &str, current_label: &str, timer: T) -> Armed<T> {
        match self.pending.remove(button_id) {
            Some(previous) => {
                let restore_label = previous.label.clone();
                self.pending.insert(
                    button_id.to_string(),
                    PendingRestore {
                        label: previous.label,
                        timer,
                    },
                );
                Armed {
                    restore_label,
                    superseded: Some(previous.timer),
                }
            }
            None => {
                self.pending.insert(
                    button_id.to_string(),
                    PendingRestore {
                        label: current_label.to_string(),
                        timer,
                    },
                );
                Armed {
                    restore_label: current_label.to_string(),
                    superseded: None,
                }
            }
        }
    }

    /// Called when a button's timer fires. Returns the label to restore and
    /// hands the timer back to the caller.
    pub fn fire(&mut self, button_id: &str) -> Option<(String, T)> {
        self.pending
            .remove(button_id)
            .map(|pending| (pending.label, pending.timer))
    }

    /// Label a button would be restored to, without disarming it.
    pub fn original_label(&self, button_id: &str) -> Option<&str> {
        self.pending.get(button_id).map(|pending| pending.label.as_str())
    }

    pub fn is_pending(&self, button_id: &str) -> bool {
        self.pending.contains_key(button_id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for RestoreLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_fire() {
        let mut ledger = RestoreLedger::new();

        let armed = ledger.arm("btn-1", "Copy", 7);
        assert_eq!(armed.restore_label, "Copy");
        assert!(armed.superseded.is_none());
        assert!(ledger.is_pending("btn-1"));

        assert_eq!(ledger.fire("btn-1"), Some(("Copy".to_string(), 7)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_rearm_keeps_first_label() {
        let mut ledger = RestoreLedger::new();
        ledger.arm("btn-1", "Copy", 1);

        // second click while the label still reads "Copied!"
        let armed = ledger.arm("btn-1", COPIED_LABEL, 2);

        assert_eq!(armed.restore_label, "Copy");
        assert_eq!(armed.superseded, Some(1));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.original_label("btn-1"), Some("Copy"));
        // the surviving entry carries the newer timer
        assert_eq!(ledger.fire("btn-1"), Some(("Copy".to_string(), 2)));
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut ledger = RestoreLedger::new();
        ledger.arm("btn-1", "Copy", 1);
        ledger.arm("btn-2", "Copy code", 2);

        assert_eq!(ledger.fire("btn-2"), Some(("Copy code".to_string(), 2)));
        assert!(ledger.is_pending("btn-1"));
        assert!(!ledger.is_pending("btn-2"));
    }

    #[test]
    fn test_fire_unknown_button() {
        let mut ledger: RestoreLedger<i32> = RestoreLedger::new();
        assert_eq!(ledger.fire("missing"), None);
    }
}
