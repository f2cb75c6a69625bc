//! Decoding of inline chains embedded in resolved symbol names.
//!
//! The symbolizer joins a real frame and the functions inlined into it with
//! `--`, outermost inlined call first:
//!
//! ```text
//! execute_native_thread_routine--operator()--~unique_ptr
//! ```

use crate::utils::config::INLINE_DELIMITER;

/// A resolved name split into its real frame and inlined frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineChain<'a> {
    symbol: &'a str,
    frame: &'a str,
}

impl<'a> InlineChain<'a> {
    /// The non-inlined function the address belongs to
    pub fn frame(&self) -> &'a str {
        self.frame
    }

    /// Inlined functions from outermost to innermost
    pub fn inlined(&self) -> impl Iterator<Item = &'a str> {
        let mut components = split_components(self.symbol).filter(|c| !c.is_empty());
        // The first non-empty component is the real frame
        components.next();
        components
    }

    pub fn has_inlined(&self) -> bool {
        self.inlined().next().is_some()
    }
}

/// Split a resolved name into its inline chain
///
/// Empty components are dropped. The first non-empty component is the real
/// frame; a name without any non-empty component is kept whole.
pub fn decode_inline_chain(symbol: &str) -> InlineChain<'_> {
    let frame = split_components(symbol)
        .find(|c| !c.is_empty())
        .unwrap_or(symbol);

    InlineChain { symbol, frame }
}

/// Iterate `--` separated components, leaving C++ `operator--` intact
fn split_components(symbol: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(symbol);
    std::iter::from_fn(move || {
        let current = rest?;
        match find_delimiter(current) {
            Some(at) => {
                rest = Some(&current[at + INLINE_DELIMITER.len()..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn find_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = s[offset..].find(INLINE_DELIMITER) {
        let at = offset + found;
        if !s[..at].ends_with("operator") {
            return Some(at);
        }
        offset = at + INLINE_DELIMITER.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(symbol: &str) -> (&str, Vec<&str>) {
        let chain = decode_inline_chain(symbol);
        (chain.frame(), chain.inlined().collect())
    }

    #[test]
    fn test_plain_symbol() {
        assert_eq!(parts("main"), ("main", vec![]));
        assert!(!decode_inline_chain("main").has_inlined());
    }

    #[test]
    fn test_inline_chain_order() {
        assert_eq!(
            parts("execute_native_thread_routine--operator()--~unique_ptr"),
            (
                "execute_native_thread_routine",
                vec!["operator()", "~unique_ptr"]
            )
        );
    }

    #[test]
    fn test_empty_components_dropped() {
        assert_eq!(parts("main----a--"), ("main", vec!["a"]));
        assert_eq!(parts("--a--b"), ("a", vec!["b"]));
        assert_eq!(parts("--"), ("--", vec![]));
    }

    #[test]
    fn test_operator_decrement_is_not_a_delimiter() {
        assert_eq!(
            parts("walk--std::_Rb_tree_iterator<int>::operator--()"),
            ("walk", vec!["std::_Rb_tree_iterator<int>::operator--()"])
        );
        assert_eq!(parts("Counter::operator--(int)"), ("Counter::operator--(int)", vec![]));
    }
}
