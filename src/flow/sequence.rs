//! Step sequence: an ordered, fixed-length list of steps with a 1-based cursor.
//!
//! Navigation saturates at both ends instead of wrapping or failing. Only
//! `jump_to` can fail, because it accepts an arbitrary ordinal.

use crate::error::FlowError;

#[derive(Debug, Clone)]
pub struct StepSequence<S> {
    steps: Vec<S>,
    current: usize,
}

impl<S> StepSequence<S> {
    /// Create a sequence positioned on ordinal 1; `None` when `steps` is empty
    pub fn new(steps: Vec<S>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { steps, current: 1 })
    }

    pub fn current_ordinal(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current(&self) -> &S {
        &self.steps[self.current - 1]
    }

    pub fn get(&self, ordinal: usize) -> Option<&S> {
        ordinal.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.steps.len()
    }

    /// Move to the next step. Returns false (and stays put) on the last step.
    pub fn advance(&mut self) -> bool {
        if self.current < self.steps.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous step. Returns false (and stays put) on step 1.
    pub fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump directly to `ordinal`, which must lie in `1..=step_count`
    pub fn jump_to(&mut self, ordinal: usize) -> Result<(), FlowError> {
        self.check_ordinal(ordinal)?;
        self.current = ordinal;
        Ok(())
    }

    pub fn check_ordinal(&self, ordinal: usize) -> Result<(), FlowError> {
        if ordinal == 0 || ordinal > self.steps.len() {
            return Err(FlowError::OutOfRange {
                ordinal,
                step_count: self.steps.len(),
            });
        }
        Ok(())
    }

    /// Position within the module as a percentage (last step = 100)
    pub fn progress_percent(&self) -> u16 {
        (self.current * 100 / self.steps.len()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn four_steps() -> StepSequence<&'static str> {
        StepSequence::new(vec!["a", "b", "c", "d"]).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(StepSequence::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_starts_on_first_step() {
        let seq = four_steps();
        assert_eq!(seq.current_ordinal(), 1);
        assert_eq!(*seq.current(), "a");
        assert!(seq.is_first());
        assert!(!seq.is_last());
    }

    #[test]
    fn test_advance_saturates_at_last_step() {
        let mut seq = four_steps();
        for _ in 0..10 {
            seq.advance();
        }
        assert_eq!(seq.current_ordinal(), 4);
        assert!(seq.is_last());
        assert!(!seq.advance());
    }

    #[test]
    fn test_retreat_saturates_at_one() {
        let mut seq = four_steps();
        assert!(!seq.retreat());
        seq.advance();
        assert!(seq.retreat());
        assert_eq!(seq.current_ordinal(), 1);
    }

    #[test]
    fn test_jump_to_validates_range() {
        let mut seq = four_steps();
        assert_eq!(seq.jump_to(3), Ok(()));
        assert_eq!(*seq.current(), "c");

        assert_eq!(
            seq.jump_to(0),
            Err(FlowError::OutOfRange {
                ordinal: 0,
                step_count: 4
            })
        );
        assert!(seq.jump_to(5).is_err());
        assert_eq!(seq.current_ordinal(), 3);
    }

    #[test]
    fn test_get_by_ordinal() {
        let seq = four_steps();
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.get(1), Some(&"a"));
        assert_eq!(seq.get(4), Some(&"d"));
        assert_eq!(seq.get(5), None);
    }

    #[test]
    fn test_progress_percent() {
        let mut seq = four_steps();
        assert_eq!(seq.progress_percent(), 25);
        seq.jump_to(4).unwrap();
        assert_eq!(seq.progress_percent(), 100);
    }

    proptest! {
        #[test]
        fn prop_ordinal_stays_in_bounds(
            len in 1usize..12,
            moves in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut seq = StepSequence::new(vec![(); len]).unwrap();
            for forward in moves {
                if forward {
                    seq.advance();
                } else {
                    seq.retreat();
                }
                prop_assert!(seq.current_ordinal() >= 1);
                prop_assert!(seq.current_ordinal() <= len);
            }
        }
    }
}
