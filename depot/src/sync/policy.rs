//! Per-change accept/reject policies.
//!
//! One engine implements sync, dry-run, and interactive patching; the only
//! difference between those modes is the policy consulted before each
//! change.

/// Answers yes/no confirmation questions for the interactive policy.
///
/// Anything but an affirmative answer is a rejection; implementations are
/// expected to make the rejection visible to the user.
pub trait UserPrompt {
    /// Ask the user to confirm a change.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Decides whether a detected change is applied or skipped.
///
/// The engine consults the policy exactly once per detected change, after
/// the change has been reported and before any transfer or deletion.
pub enum SyncPolicy {
    /// Apply every change (a real sync).
    ApplyAll,
    /// Reject every change (a verification pass; nothing is touched).
    RejectAll,
    /// Ask the user about each change.
    Interactive(Box<dyn UserPrompt>),
}

impl SyncPolicy {
    /// Decide the pending change; `true` applies it, `false` skips it.
    pub fn decide(&mut self) -> bool {
        match self {
            SyncPolicy::ApplyAll => true,
            SyncPolicy::RejectAll => false,
            SyncPolicy::Interactive(prompt) => prompt.confirm("Should I perform this change?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompt replaying a fixed sequence of answers.
    struct ScriptedPrompt {
        answers: Vec<bool>,
        asked: usize,
    }

    impl UserPrompt for ScriptedPrompt {
        fn confirm(&mut self, _message: &str) -> bool {
            let answer = self.answers[self.asked];
            self.asked += 1;
            answer
        }
    }

    #[test]
    fn test_apply_all_always_accepts() {
        let mut policy = SyncPolicy::ApplyAll;
        assert!(policy.decide());
        assert!(policy.decide());
    }

    #[test]
    fn test_reject_all_always_rejects() {
        let mut policy = SyncPolicy::RejectAll;
        assert!(!policy.decide());
        assert!(!policy.decide());
    }

    #[test]
    fn test_interactive_delegates_to_the_prompt() {
        let mut policy = SyncPolicy::Interactive(Box::new(ScriptedPrompt {
            answers: vec![true, false, true],
            asked: 0,
        }));
        assert!(policy.decide());
        assert!(!policy.decide());
        assert!(policy.decide());
    }
}
