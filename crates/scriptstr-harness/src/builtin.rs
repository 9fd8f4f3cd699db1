//! Builtin fixture catalogue.
//!
//! The reference scenarios every conforming engine build must
//! reproduce, captured as fixture sets: the "Hello World!" scenario
//! table plus the documented boundary policies (empty needles,
//! out-of-range indices, the not-found sentinel) and the malformed
//! inputs the dispatch boundary must reject. `gen-fixtures` writes
//! these to disk; integration tests run them directly.

use serde_json::{Value, json};

use crate::fixtures::{FixtureCase, FixtureSet, ReadSpec};

/// Fixed capture timestamp; the catalogue is source code, not a
/// recording session.
const CAPTURED_AT: &str = "2026-08-05T00:00:00Z";

/// Rendering of the not-found sentinel (`u64::MAX`) in fixture files.
pub const NOT_FOUND_RENDERED: &str = "18446744073709551615";

fn case(
    name: &str,
    operation: &str,
    spec_section: &str,
    inputs: Value,
    slot: &str,
    index: Option<usize>,
    expected_output: &str,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        operation: operation.to_string(),
        spec_section: spec_section.to_string(),
        inputs,
        read: ReadSpec {
            slot: slot.to_string(),
            index,
        },
        expected_output: expected_output.to_string(),
    }
}

fn set(family: &str, cases: Vec<FixtureCase>) -> FixtureSet {
    FixtureSet {
        version: "v1".to_string(),
        family: family.to_string(),
        captured_at: CAPTURED_AT.to_string(),
        cases,
    }
}

/// All builtin fixture sets, one per operation family.
#[must_use]
pub fn builtin_fixture_sets() -> Vec<FixtureSet> {
    vec![
        case_fixtures(),
        search_fixtures(),
        slice_fixtures(),
        split_fixtures(),
        boundary_fixtures(),
    ]
}

/// Storage, case mapping, length, and character access.
pub fn case_fixtures() -> FixtureSet {
    set(
        "string/case",
        vec![
            case(
                "set_string_verbatim",
                "setString",
                "internal slots",
                json!({"s": "Hello World!"}),
                "string",
                None,
                "Hello World!",
            ),
            case(
                "set_string_empty",
                "setString",
                "internal slots",
                json!({"s": ""}),
                "string",
                None,
                "",
            ),
            case(
                "lower_hello",
                "setLowerCaseString",
                "String.prototype.toLowerCase",
                json!({"s": "Hello World!"}),
                "string",
                None,
                "hello world!",
            ),
            case(
                "upper_hello",
                "setUpperCaseString",
                "String.prototype.toUpperCase",
                json!({"s": "Hello World!"}),
                "string",
                None,
                "HELLO WORLD!",
            ),
            case(
                "lower_non_letters_pass_through",
                "setLowerCaseString",
                "String.prototype.toLowerCase",
                json!({"s": "abc123!@# \t"}),
                "string",
                None,
                "abc123!@# \t",
            ),
            case(
                "length_hello",
                "setLength",
                "String.prototype.length",
                json!({"s": "Hello World!"}),
                "uint",
                None,
                "12",
            ),
            case(
                "length_empty",
                "setLength",
                "String.prototype.length",
                json!({"s": ""}),
                "uint",
                None,
                "0",
            ),
            case(
                "char_at_1",
                "setCharAt",
                "String.prototype.charAt",
                json!({"s": "Hello World!", "i": 1}),
                "string",
                None,
                "e",
            ),
            case(
                "char_at_past_end_is_empty",
                "setCharAt",
                "String.prototype.charAt",
                json!({"s": "Hello World!", "i": 12}),
                "string",
                None,
                "",
            ),
            case(
                "char_at_on_empty_string",
                "setCharAt",
                "String.prototype.charAt",
                json!({"s": "", "i": 0}),
                "string",
                None,
                "",
            ),
        ],
    )
}

/// Prefix/suffix/substring predicates and index searches.
pub fn search_fixtures() -> FixtureSet {
    set(
        "string/search",
        vec![
            case(
                "starts_with_hel",
                "setStartsWith",
                "String.prototype.startsWith",
                json!({"s": "Hello World!", "prefix": "Hel"}),
                "bool",
                None,
                "true",
            ),
            case(
                "starts_with_empty_prefix",
                "setStartsWith",
                "String.prototype.startsWith",
                json!({"s": "Hello World!", "prefix": ""}),
                "bool",
                None,
                "true",
            ),
            case(
                "starts_with_mismatch",
                "setStartsWith",
                "String.prototype.startsWith",
                json!({"s": "Hello World!", "prefix": "World"}),
                "bool",
                None,
                "false",
            ),
            case(
                "ends_with_rld",
                "setEndsWith",
                "String.prototype.endsWith",
                json!({"s": "Hello World!", "suffix": "rld!"}),
                "bool",
                None,
                "true",
            ),
            case(
                "ends_with_empty_suffix",
                "setEndsWith",
                "String.prototype.endsWith",
                json!({"s": "", "suffix": ""}),
                "bool",
                None,
                "true",
            ),
            case(
                "includes_world",
                "setIncludes",
                "String.prototype.includes",
                json!({"s": "Hello World!", "needle": "World!"}),
                "bool",
                None,
                "true",
            ),
            case(
                "includes_empty_needle",
                "setIncludes",
                "String.prototype.includes",
                json!({"s": "Hello World!", "needle": ""}),
                "bool",
                None,
                "true",
            ),
            case(
                "includes_missing",
                "setIncludes",
                "String.prototype.includes",
                json!({"s": "Hello World!", "needle": "world"}),
                "bool",
                None,
                "false",
            ),
            case(
                "equals_identical",
                "setEquals",
                "code-unit equality",
                json!({"s": "Hello World!", "other": "Hello World!"}),
                "bool",
                None,
                "true",
            ),
            case(
                "equals_case_sensitive",
                "setEquals",
                "code-unit equality",
                json!({"s": "Hello World!", "other": "hello world!"}),
                "bool",
                None,
                "false",
            ),
            case(
                "index_of_l",
                "setIndexOf",
                "String.prototype.indexOf",
                json!({"s": "Hello World!", "needle": "l"}),
                "uint",
                None,
                "2",
            ),
            case(
                "index_of_empty_needle",
                "setIndexOf",
                "String.prototype.indexOf",
                json!({"s": "Hello World!", "needle": ""}),
                "uint",
                None,
                "0",
            ),
            case(
                "index_of_missing_is_sentinel",
                "setIndexOf",
                "String.prototype.indexOf",
                json!({"s": "Hello World!", "needle": "xyz"}),
                "uint",
                None,
                NOT_FOUND_RENDERED,
            ),
            case(
                "last_index_of_world",
                "setLastIndexOf",
                "String.prototype.lastIndexOf",
                json!({"s": "Hello World!", "needle": "World!"}),
                "uint",
                None,
                "6",
            ),
            case(
                "last_index_of_empty_needle_is_length",
                "setLastIndexOf",
                "String.prototype.lastIndexOf",
                json!({"s": "Hello World!", "needle": ""}),
                "uint",
                None,
                "12",
            ),
            case(
                "last_index_of_missing_is_sentinel",
                "setLastIndexOf",
                "String.prototype.lastIndexOf",
                json!({"s": "Hello World!", "needle": "xyz"}),
                "uint",
                None,
                NOT_FOUND_RENDERED,
            ),
        ],
    )
}

/// Bounded slicing with negative-index normalization.
pub fn slice_fixtures() -> FixtureSet {
    set(
        "string/slice",
        vec![
            case(
                "slice_negative_end",
                "setSlice",
                "String.prototype.slice",
                json!({"s": "Hello World!", "start": 0, "end": -4}),
                "string",
                None,
                "Hello Wo",
            ),
            case(
                "slice_full_round_trip",
                "setSlice",
                "String.prototype.slice",
                json!({"s": "Hello World!", "start": 0, "end": 12}),
                "string",
                None,
                "Hello World!",
            ),
            case(
                "slice_negative_start",
                "setSlice",
                "String.prototype.slice",
                json!({"s": "Hello World!", "start": -6, "end": 12}),
                "string",
                None,
                "World!",
            ),
            case(
                "slice_collapsed_bounds",
                "setSlice",
                "String.prototype.slice",
                json!({"s": "Hello World!", "start": 3, "end": 2}),
                "string",
                None,
                "",
            ),
            case(
                "slice_clamps_wild_bounds",
                "setSlice",
                "String.prototype.slice",
                json!({"s": "Hello World!", "start": -100, "end": 100}),
                "string",
                None,
                "Hello World!",
            ),
        ],
    )
}

/// Splitting into the string-array slot.
pub fn split_fixtures() -> FixtureSet {
    set(
        "string/split",
        vec![
            case(
                "split_o_first",
                "setSplit",
                "String.prototype.split",
                json!({"s": "Hello World!", "delimiter": "o"}),
                "array",
                Some(0),
                "Hell",
            ),
            case(
                "split_o_second",
                "setSplit",
                "String.prototype.split",
                json!({"s": "Hello World!", "delimiter": "o"}),
                "array",
                Some(1),
                " W",
            ),
            case(
                "split_o_third",
                "setSplit",
                "String.prototype.split",
                json!({"s": "Hello World!", "delimiter": "o"}),
                "array",
                Some(2),
                "rld!",
            ),
            case(
                "split_missing_delimiter_whole_string",
                "setSplit",
                "String.prototype.split",
                json!({"s": "Hello", "delimiter": "z"}),
                "array",
                Some(0),
                "Hello",
            ),
            case(
                "split_empty_delimiter_single_units",
                "setSplit",
                "String.prototype.split",
                json!({"s": "abc", "delimiter": ""}),
                "array",
                Some(1),
                "b",
            ),
            case(
                "split_leading_match_empty_segment",
                "setSplit",
                "String.prototype.split",
                json!({"s": "oxo", "delimiter": "o"}),
                "array",
                Some(0),
                "",
            ),
        ],
    )
}

/// Malformed traffic the dispatch boundary must reject whole.
pub fn boundary_fixtures() -> FixtureSet {
    set(
        "string/boundary",
        vec![
            case(
                "char_at_fractional_index_rejected",
                "setCharAt",
                "engine boundary",
                json!({"s": "abc", "i": 1.5}),
                "string",
                None,
                "error:invalid argument for setCharAt: argument 'i' is not a representable unsigned integer",
            ),
            case(
                "char_at_negative_index_rejected",
                "setCharAt",
                "engine boundary",
                json!({"s": "abc", "i": -1}),
                "string",
                None,
                "error:invalid argument for setCharAt: argument 'i' is not a representable unsigned integer",
            ),
            case(
                "slice_missing_bound_rejected",
                "setSlice",
                "engine boundary",
                json!({"s": "abc", "start": 0}),
                "string",
                None,
                "error:invalid argument for setSlice: argument 'end' is not a representable integer",
            ),
            case(
                "non_ascii_argument_rejected",
                "setString",
                "engine boundary",
                json!({"s": "héllo"}),
                "string",
                None,
                "error:invalid argument for setString: argument 's' contains non-ASCII code points",
            ),
            case(
                "unknown_operation_rejected",
                "setReverse",
                "engine boundary",
                json!({"s": "abc"}),
                "string",
                None,
                "error:unknown operation 'setReverse'",
            ),
        ],
    )
}
