//! Registry of consumed redemption codes.

use std::collections::HashSet;

/// Tracks which virtual-product redemption codes have been consumed.
///
/// Caller-owned: the driver constructs one instance and keeps it for the
/// process lifetime. It tracks arbitrary code strings — a code existing on
/// some product but never marked still probes `false`. No removal.
///
/// - No IO / no async
/// - Single-threaded by design; serialize access externally if shared
#[derive(Debug, Default)]
pub struct CodeRegistry {
    used: HashSet<String>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a code as consumed. Idempotent.
    pub fn mark_used(&mut self, code: impl Into<String>) {
        self.used.insert(code.into());
    }

    /// Whether the code was previously marked consumed.
    pub fn is_used(&self, code: &str) -> bool {
        self.used.contains(code)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_codes_probe_true_unseen_codes_false() {
        let mut registry = CodeRegistry::new();

        registry.mark_used("xxx");

        assert!(registry.is_used("xxx"));
        assert!(!registry.is_used("yyy"));
    }

    #[test]
    fn marking_is_idempotent() {
        let mut registry = CodeRegistry::new();

        registry.mark_used("xxx");
        registry.mark_used("xxx");

        assert!(registry.is_used("xxx"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn starts_empty() {
        let registry = CodeRegistry::new();

        assert!(registry.is_empty());
        assert!(!registry.is_used("xxx"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: probing reports exactly the marked codes.
            #[test]
            fn probes_reflect_marks(
                marked in proptest::collection::vec("[a-z]{1,8}", 0..16),
                probe in "[a-z]{1,8}"
            ) {
                let mut registry = CodeRegistry::new();
                for code in &marked {
                    registry.mark_used(code.clone());
                }

                prop_assert_eq!(registry.is_used(&probe), marked.contains(&probe));
            }

            /// Property: re-marking never grows the registry.
            #[test]
            fn remarking_is_a_no_op(codes in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
                let mut registry = CodeRegistry::new();
                for code in &codes {
                    registry.mark_used(code.clone());
                }
                let len_before = registry.len();

                for code in &codes {
                    registry.mark_used(code.clone());
                }

                prop_assert_eq!(registry.len(), len_before);
            }
        }
    }
}
