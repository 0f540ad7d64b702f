//! Contract tests for individual cells of the inference tables
//!
//! Covers:
//! - Warning-free native pairings per kind
//! - The documented cross-kind coercions and their warnings
//! - The hard-error cells (bool ordering, binary comparisons, null division)
//! - The null-division asymmetry between the number and null modules

use jbscript_types::infer::{array, binary, boolean, date, dictionary, null, number, string};
use jbscript_types::{ValueType, binop};
use pretty_assertions::assert_eq;
use rstest::rstest;

// === Number ===

#[test]
fn test_number_arithmetic_is_clean() {
    for op in ["+", "-", "*", "/", "^"] {
        let info = number::binop(op, ValueType::Number);
        assert_eq!(info.kind(), Some(ValueType::Number));
        assert!(!info.has_warning(), "number {op} number must not warn");
    }
}

#[test]
fn test_number_comparisons_and_logic_are_clean() {
    for op in ["<", ">", "<=", ">=", "==", "!=", "&&", "||"] {
        let info = number::binop(op, ValueType::Number);
        assert_eq!(info.kind(), Some(ValueType::Bool));
        assert!(!info.has_warning());
    }
}

#[test]
fn test_number_divided_by_null_warns() {
    let info = number::binop("/", ValueType::Null);
    assert_eq!(info.kind(), Some(ValueType::Number));
    let warning = info.warning().expect("a coercion warning");
    assert!(!warning.is_empty());
    assert!(warning.contains("treated as 0"));
}

#[test]
fn test_number_divided_by_string_errors() {
    let info = number::binop("/", ValueType::String);
    assert!(info.is_error());
    assert!(!info.error_message().expect("an error").is_empty());
}

#[test]
fn test_number_plus_string_concatenates() {
    let info = number::binop("+", ValueType::String);
    assert_eq!(info.kind(), Some(ValueType::String));
    assert!(info.warning().expect("warning").contains("concatenation"));
}

#[rstest]
#[case("-")]
#[case("*")]
#[case("/")]
#[case("^")]
fn test_number_non_concat_arithmetic_with_string_errors(#[case] op: &str) {
    assert!(number::binop(op, ValueType::String).is_error());
}

#[test]
fn test_number_plus_date_is_an_offset() {
    let info = number::binop("+", ValueType::Date);
    assert_eq!(info.kind(), Some(ValueType::Date));
    assert!(info.warning().expect("warning").contains("seconds"));
}

#[test]
fn test_number_minus_date_errors() {
    assert!(number::binop("-", ValueType::Date).is_error());
}

// === The null-division asymmetry ===

#[test]
fn test_null_left_division_errors() {
    assert!(null::binop("/", ValueType::Number).is_error());
    assert!(null::binop("^", ValueType::Number).is_error());
}

#[test]
fn test_null_folds_to_zero_for_additive_arithmetic() {
    for op in ["+", "-", "*"] {
        let info = null::binop(op, ValueType::Number);
        assert_eq!(info.kind(), Some(ValueType::Number));
        assert!(info.warning().expect("warning").contains("treated as 0"));
    }
}

#[test]
fn test_null_equality_is_constant() {
    let eq = null::binop("==", ValueType::Number);
    assert_eq!(eq.kind(), Some(ValueType::Bool));
    assert!(eq.warning().expect("warning").contains("always evaluates to false"));

    let ne = null::binop("!=", ValueType::Number);
    assert!(ne.warning().expect("warning").contains("always evaluates to true"));
}

#[test]
fn test_null_plus_string_is_empty_string_concat() {
    let info = null::binop("+", ValueType::String);
    assert_eq!(info.kind(), Some(ValueType::String));
    assert!(info.warning().expect("warning").contains("empty string"));
}

// === Bool ===

#[test]
fn test_bool_native_equality_and_logic_are_clean() {
    for op in ["==", "!=", "&&", "&", "||", "|"] {
        let info = boolean::binop(op, ValueType::Bool);
        assert_eq!(info.kind(), Some(ValueType::Bool));
        assert!(!info.has_warning(), "bool {op} bool must not warn");
    }
}

#[rstest]
#[case("<")]
#[case(">")]
#[case("<=")]
#[case(">=")]
fn test_bool_ordering_is_an_instructive_error(#[case] op: &str) {
    let info = boolean::binop(op, ValueType::Bool);
    assert!(info.is_error());
    assert!(
        info.error_message()
            .expect("error")
            .contains("convert them to numbers first")
    );
}

#[rstest]
#[case("+")]
#[case("-")]
#[case("*")]
#[case("/")]
#[case("^")]
fn test_bool_arithmetic_errors(#[case] op: &str) {
    assert!(boolean::binop(op, ValueType::Bool).is_error());
}

// === String ===

#[test]
fn test_string_native_pairings() {
    assert_eq!(
        string::binop("+", ValueType::String).kind(),
        Some(ValueType::String)
    );
    assert!(!string::binop("+", ValueType::String).has_warning());

    for op in ["<", ">", "<=", ">=", "==", "!="] {
        let info = string::binop(op, ValueType::String);
        assert_eq!(info.kind(), Some(ValueType::Bool));
        assert!(!info.has_warning());
    }
}

#[test]
fn test_string_logic_warns_even_same_kind() {
    let info = string::binop("&&", ValueType::String);
    assert_eq!(info.kind(), Some(ValueType::Bool));
    assert!(info.has_warning());
}

#[test]
fn test_string_minus_string_errors() {
    assert!(string::binop("-", ValueType::String).is_error());
}

// === Date ===

#[test]
fn test_date_difference_is_clean_number_of_days() {
    let info = date::binop("-", ValueType::Date);
    assert_eq!(info.kind(), Some(ValueType::Number));
    assert!(!info.has_warning());
}

#[test]
fn test_date_comparisons_are_clean() {
    for op in ["<", ">", "<=", ">=", "==", "!="] {
        let info = date::binop(op, ValueType::Date);
        assert_eq!(info.kind(), Some(ValueType::Bool));
        assert!(!info.has_warning());
    }
}

#[rstest]
#[case("+")]
#[case("*")]
#[case("/")]
#[case("^")]
fn test_date_non_subtraction_arithmetic_errors(#[case] op: &str) {
    assert!(date::binop(op, ValueType::Date).is_error());
}

#[test]
fn test_date_offsets_by_number_warn() {
    for op in ["+", "-"] {
        let info = date::binop(op, ValueType::Number);
        assert_eq!(info.kind(), Some(ValueType::Date));
        assert!(info.warning().expect("warning").contains("seconds"));
    }
}

#[test]
fn test_date_logic_warns() {
    assert!(date::binop("&&", ValueType::Date).has_warning());
}

// === Binary ===

#[test]
fn test_binary_equality_is_clean() {
    for op in ["==", "!="] {
        let info = binary::binop(op, ValueType::Binary);
        assert_eq!(info.kind(), Some(ValueType::Bool));
        assert!(!info.has_warning());
    }
}

#[rstest]
#[case(ValueType::Number)]
#[case(ValueType::String)]
#[case(ValueType::Date)]
fn test_binary_comparisons_with_scalar_kinds_error(#[case] right: ValueType) {
    for op in ["<", ">", "<=", ">=", "==", "!="] {
        assert!(
            binary::binop(op, right).is_error(),
            "binary {op} {right} must be illegal"
        );
    }
}

#[test]
fn test_binary_ordering_against_binary_errors() {
    for op in ["<", ">", "<=", ">="] {
        assert!(binary::binop(op, ValueType::Binary).is_error());
    }
}

#[test]
fn test_binary_against_bool_coerces() {
    let info = binary::binop("==", ValueType::Bool);
    assert_eq!(info.kind(), Some(ValueType::Bool));
    assert!(info.warning().expect("warning").contains("converted to false"));
}

// === Array broadcasting ===

#[test]
fn test_arithmetic_with_array_broadcasts() {
    for op in ["+", "-", "*", "/", "^"] {
        let info = number::binop(op, ValueType::Array);
        assert_eq!(info.kind(), Some(ValueType::Array));
        assert!(info.warning().expect("warning").contains("each element"));
    }
}

#[test]
fn test_comparison_with_array_is_per_element() {
    for op in ["<", ">", "<=", ">=", "==", "!="] {
        let info = string::binop(op, ValueType::Array);
        assert_eq!(info.kind(), Some(ValueType::Array));
        assert!(info.warning().expect("warning").contains("per-element"));
    }
}

#[test]
fn test_array_logic_collapses_to_false() {
    let info = array::binop("&&", ValueType::Number);
    assert_eq!(info.kind(), Some(ValueType::Bool));
    assert!(info.warning().expect("warning").contains("false"));
}

#[test]
fn test_array_left_broadcasts_everything_else() {
    let info = array::binop("+", ValueType::Number);
    assert_eq!(info.kind(), Some(ValueType::Array));
    let info = array::binop("==", ValueType::Date);
    assert_eq!(info.kind(), Some(ValueType::Array));
}

// === Dictionary ===

#[test]
fn test_dictionary_equality_against_dictionary_is_constant() {
    let eq = dictionary::binop("==", ValueType::Dictionary);
    assert_eq!(eq.kind(), Some(ValueType::Bool));
    assert!(eq.warning().expect("warning").contains("always true"));

    let ne = dictionary::binop("!=", ValueType::Dictionary);
    assert!(ne.warning().expect("warning").contains("always false"));
}

#[test]
fn test_dictionary_arithmetic_errors() {
    for right in ValueType::INFERABLE {
        if right == ValueType::Array {
            continue;
        }
        for op in ["+", "-", "*", "/", "^"] {
            assert!(
                dictionary::binop(op, right).is_error(),
                "dictionary {op} {right} must be illegal"
            );
        }
    }
}

// === Unary operators ===

#[test]
fn test_unary_on_number_is_clean() {
    assert_eq!(number::unop("!").kind(), Some(ValueType::Bool));
    assert_eq!(number::unop("-").kind(), Some(ValueType::Number));
    assert_eq!(number::unop("++").kind(), Some(ValueType::Number));
    assert_eq!(number::unop("--").kind(), Some(ValueType::Number));
    assert!(!number::unop("-").has_warning());
}

#[test]
fn test_unary_not_warns_on_coercing_kinds() {
    for module_result in [
        string::unop("!"),
        null::unop("!"),
        array::unop("!"),
        dictionary::unop("!"),
        binary::unop("!"),
        date::unop("!"),
    ] {
        assert_eq!(module_result.kind(), Some(ValueType::Bool));
        assert!(module_result.has_warning());
    }
    assert!(!boolean::unop("!").has_warning());
}

#[test]
fn test_negating_non_numeric_kinds_errors() {
    assert!(string::unop("-").is_error());
    assert!(boolean::unop("-").is_error());
    assert!(dictionary::unop("-").is_error());
    assert!(binary::unop("-").is_error());
    assert!(date::unop("-").is_error());
}

#[test]
fn test_negating_null_and_array_warns() {
    let info = null::unop("-");
    assert_eq!(info.kind(), Some(ValueType::Number));
    assert!(info.has_warning());

    let info = array::unop("-");
    assert_eq!(info.kind(), Some(ValueType::Array));
    assert!(info.has_warning());
}

#[test]
fn test_increment_requires_numeric_operand() {
    for info in [
        string::unop("++"),
        boolean::unop("++"),
        dictionary::unop("--"),
        binary::unop("++"),
        date::unop("--"),
    ] {
        assert!(info.is_error());
        assert!(
            info.error_message()
                .expect("error")
                .contains("requires a numeric operand")
        );
    }
}

// === Module and dispatcher agree ===

#[test]
fn test_dispatcher_matches_modules() {
    assert_eq!(
        binop(ValueType::Number, "/", ValueType::Null),
        number::binop("/", ValueType::Null)
    );
    assert_eq!(
        binop(ValueType::Date, "-", ValueType::Date),
        date::binop("-", ValueType::Date)
    );
    assert_eq!(
        binop(ValueType::Dictionary, "==", ValueType::Dictionary),
        dictionary::binop("==", ValueType::Dictionary)
    );
}
