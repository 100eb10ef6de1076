use nutri_clean::{find_column, find_column_index, normalize_food_name};
use proptest::prelude::proptest;

#[test]
fn lowercases_trims_and_collapses_whitespace() {
    assert_eq!(normalize_food_name("  Greek   Yogurt  "), "greek yogurt");
    assert_eq!(normalize_food_name("Chicken\tBreast\n"), "chicken breast");
}

#[test]
fn strips_commas_and_periods() {
    assert_eq!(normalize_food_name("Greek, Yogurt."), "greek yogurt");
    assert_eq!(
        normalize_food_name("Greek, Yogurt."),
        normalize_food_name("greek yogurt")
    );
}

#[test]
fn punctuation_only_tokens_do_not_leave_gaps() {
    assert_eq!(normalize_food_name("a , b"), "a b");
    assert_eq!(normalize_food_name(", . ,"), "");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(normalize_food_name(""), "");
    assert_eq!(normalize_food_name("   "), "");
}

proptest! {
    #[test]
    fn normalization_is_idempotent(s in ".{0,64}") {
        let once = normalize_food_name(&s);
        let twice = normalize_food_name(&once);
        assert_eq!(once, twice);
    }
}

fn headers(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn find_column_is_case_insensitive_and_returns_actual_casing() {
    let cols = headers(&["Food Item", "Calories", "Protein (g)"]);
    assert_eq!(
        find_column(&["calories"], &cols),
        Some("Calories".to_string())
    );
    assert_eq!(
        find_column(&["food item"], &cols),
        Some("Food Item".to_string())
    );
    assert_eq!(find_column(&["missing"], &cols), None);
}

#[test]
fn find_column_honors_candidate_priority() {
    // Both candidates exist; the earlier one must win.
    let cols = headers(&["legacy_name", "name"]);
    assert_eq!(
        find_column(&["name", "legacy_name"], &cols),
        Some("name".to_string())
    );
    assert_eq!(find_column_index(&["name", "legacy_name"], &cols), Some(1));
}
