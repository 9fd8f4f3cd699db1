//! The StringOps instance: result slots and typed operations.
//!
//! One owned record per instance, no global or singleton state. Every
//! operation computes its result in full and then overwrites exactly
//! one slot; the other slots are untouched. The typed operations are
//! total — argument validation belongs to the dispatch boundary.

use scriptstr_core::{case, search, slice, split};

/// Sentinel stored in the uint slot when `indexOf`/`lastIndexOf` find
/// no match.
///
/// Valid match indices are slice offsets and therefore bounded by the
/// input length, so the maximum representable unsigned value can never
/// collide with a real index.
pub const NOT_FOUND: u64 = u64::MAX;

/// Per-instance string-operations state.
///
/// A fresh instance holds the empty string, 0, `false`, and an empty
/// string array — the state an external `deploy()` observes before
/// any operation runs.
#[derive(Debug, Clone, Default)]
pub struct StringOps {
    string_out: Vec<u8>,
    uint_out: u64,
    bool_out: bool,
    array_out: Vec<Vec<u8>>,
}

impl StringOps {
    /// Creates a fresh instance with all slots at their zero value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- reads -------------------------------------------------------

    /// Current value of the string slot.
    pub fn string_result(&self) -> &[u8] {
        &self.string_out
    }

    /// Current value of the uint slot.
    pub fn uint_result(&self) -> u64 {
        self.uint_out
    }

    /// Current value of the bool slot.
    pub fn bool_result(&self) -> bool {
        self.bool_out
    }

    /// The `i`-th element of the string-array slot, or `None` past
    /// the end.
    pub fn array_result(&self, i: usize) -> Option<&[u8]> {
        self.array_out.get(i).map(Vec::as_slice)
    }

    /// Number of elements currently in the string-array slot.
    pub fn array_len(&self) -> usize {
        self.array_out.len()
    }

    // -- operations --------------------------------------------------

    /// Stores `s` verbatim in the string slot.
    pub fn set_string(&mut self, s: &[u8]) {
        self.string_out = s.to_vec();
    }

    /// Stores the ASCII-lowercased copy of `s` in the string slot.
    pub fn set_lower_case_string(&mut self, s: &[u8]) {
        self.string_out = case::lower_case(s);
    }

    /// Stores the ASCII-uppercased copy of `s` in the string slot.
    pub fn set_upper_case_string(&mut self, s: &[u8]) {
        self.string_out = case::upper_case(s);
    }

    /// Stores the code-unit count of `s` in the uint slot.
    pub fn set_length(&mut self, s: &[u8]) {
        self.uint_out = slice::length(s) as u64;
    }

    /// Stores the single-unit string at index `i` of `s` in the string
    /// slot, or the empty string if `i` is outside `[0, s.len())`.
    pub fn set_char_at(&mut self, s: &[u8], i: u64) {
        self.string_out = match slice::char_at(s, i) {
            Some(b) => vec![b],
            None => Vec::new(),
        };
    }

    /// Stores whether `s` starts with `prefix` in the bool slot.
    pub fn set_starts_with(&mut self, s: &[u8], prefix: &[u8]) {
        self.bool_out = search::starts_with(s, prefix);
    }

    /// Stores whether `s` ends with `suffix` in the bool slot.
    pub fn set_ends_with(&mut self, s: &[u8], suffix: &[u8]) {
        self.bool_out = search::ends_with(s, suffix);
    }

    /// Stores whether `needle` occurs in `s` in the bool slot.
    pub fn set_includes(&mut self, s: &[u8], needle: &[u8]) {
        self.bool_out = search::includes(s, needle);
    }

    /// Stores whether `s` and `other` are byte-identical in the bool
    /// slot.
    pub fn set_equals(&mut self, s: &[u8], other: &[u8]) {
        self.bool_out = search::equals(s, other);
    }

    /// Stores the lowest match index of `needle` in `s` in the uint
    /// slot, or [`NOT_FOUND`].
    pub fn set_index_of(&mut self, s: &[u8], needle: &[u8]) {
        self.uint_out = match search::index_of(s, needle) {
            Some(i) => i as u64,
            None => NOT_FOUND,
        };
    }

    /// Stores the highest match index of `needle` in `s` in the uint
    /// slot, or [`NOT_FOUND`].
    pub fn set_last_index_of(&mut self, s: &[u8], needle: &[u8]) {
        self.uint_out = match search::last_index_of(s, needle) {
            Some(i) => i as u64,
            None => NOT_FOUND,
        };
    }

    /// Stores the sub-sequence of `s` between the normalized bounds in
    /// the string slot. Negative bounds count from the end; all bounds
    /// clamp into `[0, s.len()]`.
    pub fn set_slice(&mut self, s: &[u8], start: i64, end: i64) {
        self.string_out = slice::slice(s, start, end);
    }

    /// Stores the segments of `s` cut at `delimiter` in the
    /// string-array slot.
    pub fn set_split(&mut self, s: &[u8], delimiter: &[u8]) {
        self.array_out = split::split(s, delimiter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_instance_zero_slots() {
        let ops = StringOps::new();
        assert_eq!(ops.string_result(), b"");
        assert_eq!(ops.uint_result(), 0);
        assert!(!ops.bool_result());
        assert_eq!(ops.array_len(), 0);
        assert_eq!(ops.array_result(0), None);
    }

    #[test]
    fn test_set_string_verbatim() {
        let mut ops = StringOps::new();
        ops.set_string(b"Hello World!");
        assert_eq!(ops.string_result(), b"Hello World!");
        ops.set_string(b"");
        assert_eq!(ops.string_result(), b"");
    }

    #[test]
    fn test_case_operations() {
        let mut ops = StringOps::new();
        ops.set_lower_case_string(b"Hello World!");
        assert_eq!(ops.string_result(), b"hello world!");
        ops.set_upper_case_string(b"Hello World!");
        assert_eq!(ops.string_result(), b"HELLO WORLD!");
    }

    #[test]
    fn test_set_length() {
        let mut ops = StringOps::new();
        ops.set_length(b"Hello World!");
        assert_eq!(ops.uint_result(), 12);
        ops.set_length(b"");
        assert_eq!(ops.uint_result(), 0);
    }

    #[test]
    fn test_set_char_at() {
        let mut ops = StringOps::new();
        ops.set_char_at(b"Hello World!", 1);
        assert_eq!(ops.string_result(), b"e");
        ops.set_char_at(b"Hello World!", 12);
        assert_eq!(ops.string_result(), b"");
    }

    #[test]
    fn test_bool_operations() {
        let mut ops = StringOps::new();
        ops.set_starts_with(b"Hello World!", b"Hel");
        assert!(ops.bool_result());
        ops.set_ends_with(b"Hello World!", b"rld!");
        assert!(ops.bool_result());
        ops.set_includes(b"Hello World!", b"World!");
        assert!(ops.bool_result());
        ops.set_equals(b"Hello World!", b"Hello World!");
        assert!(ops.bool_result());
        ops.set_equals(b"Hello World!", b"hello world!");
        assert!(!ops.bool_result());
    }

    #[test]
    fn test_index_operations() {
        let mut ops = StringOps::new();
        ops.set_index_of(b"Hello World!", b"l");
        assert_eq!(ops.uint_result(), 2);
        ops.set_last_index_of(b"Hello World!", b"World!");
        assert_eq!(ops.uint_result(), 6);
        ops.set_index_of(b"Hello World!", b"xyz");
        assert_eq!(ops.uint_result(), NOT_FOUND);
        ops.set_last_index_of(b"Hello", b"");
        assert_eq!(ops.uint_result(), 5);
    }

    #[test]
    fn test_set_slice() {
        let mut ops = StringOps::new();
        ops.set_slice(b"Hello World!", 0, -4);
        assert_eq!(ops.string_result(), b"Hello Wo");
        ops.set_slice(b"Hello World!", 3, 2);
        assert_eq!(ops.string_result(), b"");
    }

    #[test]
    fn test_set_split() {
        let mut ops = StringOps::new();
        ops.set_split(b"Hello World!", b"o");
        assert_eq!(ops.array_len(), 3);
        assert_eq!(ops.array_result(0), Some(&b"Hell"[..]));
        assert_eq!(ops.array_result(1), Some(&b" W"[..]));
        assert_eq!(ops.array_result(2), Some(&b"rld!"[..]));
        assert_eq!(ops.array_result(3), None);
    }

    #[test]
    fn test_split_overwrites_whole_slot() {
        let mut ops = StringOps::new();
        ops.set_split(b"a,b,c", b",");
        assert_eq!(ops.array_len(), 3);
        ops.set_split(b"x", b",");
        assert_eq!(ops.array_len(), 1);
        assert_eq!(ops.array_result(0), Some(&b"x"[..]));
        assert_eq!(ops.array_result(1), None);
    }

    #[test]
    fn test_operations_touch_only_their_slot() {
        let mut ops = StringOps::new();
        ops.set_string(b"keep me");
        ops.set_length(b"abc");
        ops.set_starts_with(b"abc", b"a");
        ops.set_split(b"a,b", b",");
        assert_eq!(ops.string_result(), b"keep me");
        assert_eq!(ops.uint_result(), 3);
        assert!(ops.bool_result());
        assert_eq!(ops.array_len(), 2);
    }
}
