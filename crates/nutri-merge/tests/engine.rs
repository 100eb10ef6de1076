use std::collections::BTreeSet;
use std::fs;

use nutri_merge::{merge, write_unified};
use nutri_model::{CleanedRow, CleanedTable, Condition, Nutrient, Suitability};

fn row(name: &str, key: &str) -> CleanedRow {
    CleanedRow::new(name, key)
}

fn single(tag: &str, rows: Vec<CleanedRow>) -> CleanedTable {
    let mut table = CleanedTable::new(tag);
    table.rows = rows;
    table
}

#[test]
fn coalescing_is_priority_deterministic() {
    let mut a = row("Broccoli", "broccoli");
    a.nutrients.insert(Nutrient::EnergyKcal, 34.0);
    let mut b = row("broccoli", "broccoli");
    b.nutrients.insert(Nutrient::EnergyKcal, 999.0);

    let merged = merge(&[single("a", vec![a]), single("b", vec![b])]);
    assert_eq!(merged.rows.len(), 1);
    // Input order is priority; the left value wins regardless of the right.
    assert_eq!(
        merged.rows[0].nutrients.get(&Nutrient::EnergyKcal),
        Some(&34.0)
    );
    assert_eq!(merged.rows[0].food_name, "Broccoli");
    assert_eq!(merged.rows[0].source_datasets(), "a;b");
}

#[test]
fn merged_keys_are_the_union_of_contributing_keys() {
    let a = single("a", vec![row("Apple", "apple"), row("Pear", "pear")]);
    let b = single("b", vec![row("Pear", "pear"), row("Plum", "plum")]);
    let merged = merge(&[a, b]);
    let keys: BTreeSet<&str> = merged.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, BTreeSet::from(["apple", "pear", "plum"]));
}

#[test]
fn empty_tables_are_skipped_not_joined() {
    let a = single("a", vec![row("Apple", "apple")]);
    let empty = single("empty", vec![]);
    let merged = merge(&[empty, a]);
    assert_eq!(merged.rows.len(), 1);
    assert_eq!(merged.rows[0].source_datasets(), "a");
}

#[test]
fn zero_tables_yield_empty_table() {
    let merged = merge(&[]);
    assert!(merged.is_empty());
}

#[test]
fn duplicate_keys_within_one_source_collapse() {
    let mut first = row("Rice", "rice");
    first.nutrients.insert(Nutrient::EnergyKcal, 130.0);
    let mut second = row("rice", "rice");
    second.nutrients.insert(Nutrient::ProteinG, 2.7);
    let merged = merge(&[single("a", vec![first, second])]);
    assert_eq!(merged.rows.len(), 1);
    assert_eq!(merged.rows[0].source_datasets(), "a");
    assert_eq!(
        merged.rows[0].nutrients.get(&Nutrient::EnergyKcal),
        Some(&130.0)
    );
    assert_eq!(merged.rows[0].nutrients.get(&Nutrient::ProteinG), Some(&2.7));
}

#[test]
fn conflicting_sources_coalesce_field_by_field() {
    // Higher-priority source has energy and a positive diabetes flag.
    let mut a = row("Broccoli", "broccoli");
    a.nutrients.insert(Nutrient::EnergyKcal, 34.0);
    a.flags.insert(Condition::Diabetes, Suitability::Suitable);
    // Lower-priority source disagrees on the flag but adds protein.
    let mut b = row("broccoli.", "broccoli");
    b.nutrients.insert(Nutrient::ProteinG, 2.8);
    b.flags.insert(Condition::Diabetes, Suitability::Unsuitable);

    let merged = merge(&[single("usda", vec![a]), single("disease", vec![b])]);
    assert_eq!(merged.rows.len(), 1);
    let unified = &merged.rows[0];
    assert_eq!(unified.key, "broccoli");
    assert_eq!(unified.nutrients.get(&Nutrient::EnergyKcal), Some(&34.0));
    assert_eq!(unified.nutrients.get(&Nutrient::ProteinG), Some(&2.8));
    assert_eq!(unified.flag(Condition::Diabetes), Suitability::Suitable);
    assert_eq!(unified.source_datasets(), "usda;disease");
}

#[test]
fn writer_emits_headers_for_empty_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out/unified.csv");
    write_unified(&path, &merge(&[])).expect("write empty table");
    let contents = fs::read_to_string(&path).expect("read output");
    let mut lines = contents.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("food_name,food_name_normalized,source_datasets,energy_kcal"));
    assert!(header.ends_with("diet_type,recommendation_notes"));
    assert_eq!(lines.next(), None);
}

#[test]
fn missing_values_serialize_as_empty_never_zero() {
    let mut a = row("Apple", "apple");
    a.nutrients.insert(Nutrient::EnergyKcal, 52.0);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unified.csv");
    write_unified(&path, &merge(&[single("a", vec![a])])).expect("write table");
    let contents = fs::read_to_string(&path).expect("read output");
    let data_line = contents.lines().nth(1).expect("data row");
    assert!(data_line.starts_with("Apple,apple,a,52,"));
    // Protein was never populated: empty field, not zero.
    assert!(data_line.contains(",52,,"));
    assert!(!data_line.contains(",0,"));
}

#[test]
fn rewriting_unchanged_table_is_byte_identical() {
    let mut a = row("Apple Pie", "apple pie");
    a.nutrients.insert(Nutrient::EnergyKcal, 237.5);
    a.nutrients.insert(Nutrient::SugarsG, 31.0);
    a.flags.insert(Condition::Heart, Suitability::Unsuitable);
    let table = merge(&[single("meals", vec![a])]);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unified.csv");
    write_unified(&path, &table).expect("first write");
    let first = fs::read(&path).expect("read first");
    write_unified(&path, &table).expect("second write");
    let second = fs::read(&path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn temp_file_is_not_left_behind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unified.csv");
    write_unified(&path, &merge(&[])).expect("write");
    assert!(path.exists());
    assert!(!path.with_extension("csv.tmp").exists());
}
