//! Splitting strategies for chapter boundary detection.

use super::types::{HeadingCandidate, SplitContext};

/// Trait for configurable splitting strategies.
///
/// Implementations decide which paragraphs open a new chapter and what
/// ordinal the heading declares.
pub trait SplitStrategy {
    /// Extract the declared chapter ordinal from a heading candidate.
    fn get_number(&self, candidate: &HeadingCandidate) -> Option<u32>;

    /// Determine whether a candidate with the given ordinal starts a new
    /// chapter in the current context.
    fn should_split_here(
        &self,
        candidate: &HeadingCandidate,
        ordinal: u32,
        context: &SplitContext,
    ) -> bool;

    /// Evaluate a candidate and, on acceptance, raise the context's
    /// high-water mark to its ordinal.
    fn detect(&self, candidate: &HeadingCandidate, context: &mut SplitContext) -> Option<u32> {
        let ordinal = self.get_number(candidate)?;
        if !self.should_split_here(candidate, ordinal, context) {
            return None;
        }
        context.last_ordinal = ordinal;
        Some(ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits at every candidate whose text is a bare number.
    struct NumericStrategy;

    impl SplitStrategy for NumericStrategy {
        fn get_number(&self, candidate: &HeadingCandidate) -> Option<u32> {
            candidate.text.parse().ok()
        }

        fn should_split_here(
            &self,
            _candidate: &HeadingCandidate,
            ordinal: u32,
            context: &SplitContext,
        ) -> bool {
            ordinal > context.last_ordinal
        }
    }

    #[test]
    fn test_detect_updates_high_water_mark() {
        let mut context = SplitContext::new();
        let strategy = NumericStrategy;

        let five = HeadingCandidate::new("", "5", true);
        let three = HeadingCandidate::new("", "3", true);
        let prose = HeadingCandidate::new("", "text", true);

        assert_eq!(strategy.detect(&five, &mut context), Some(5));
        assert_eq!(context.last_ordinal, 5);
        assert_eq!(strategy.detect(&three, &mut context), None);
        assert_eq!(strategy.detect(&prose, &mut context), None);
        assert_eq!(context.last_ordinal, 5);
    }
}
