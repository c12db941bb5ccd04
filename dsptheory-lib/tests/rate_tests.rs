//! Tests for the rate model: base speeds and basic-item classification.

use dsptheory_lib::entities::Item;
use dsptheory_lib::error::ChainError;
use dsptheory_lib::rate::{base_speed, is_basic, Rate, PRIMARY_RECIPE, SENTINEL_RATE};

mod common;
use common::crafted;

#[test]
fn base_speed_is_quantity_over_duration() {
    let item = crafted("Iron_Ingot", "Component", "1 s", Some(1), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Known(1.0));

    let item = crafted("Magnet", "Component", "1.5 s", Some(1), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Known(1.0 / 1.5));

    let item = crafted("Graphene", "Component", "3 s", Some(2), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Known(2.0 / 3.0));
}

#[test]
fn base_speed_unknown_for_question_mark_duration() {
    let item = crafted("Water", "Natural Resource", "? s", Some(1), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Unknown);
}

#[test]
fn base_speed_unknown_for_percent_duration() {
    let item = crafted("Fractal_Silicon", "Component", "60%", Some(1), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Unknown);
}

#[test]
fn base_speed_unknown_for_missing_output_quantity() {
    let item = crafted("Crude_Oil", "Natural Resource", "1 s", None, &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Unknown);
}

#[test]
fn base_speed_tolerates_garbage_duration() {
    let item = crafted("Odd_Item", "Component", "varies", Some(1), &[]);
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Unknown);
}

#[test]
fn base_speed_unknown_for_item_without_recipes() {
    let item = Item::bare("Wood");
    assert_eq!(base_speed(&item, PRIMARY_RECIPE), Rate::Unknown);
}

#[test]
fn sentinel_substitution() {
    assert_eq!(Rate::Unknown.or_sentinel(), SENTINEL_RATE);
    assert_eq!(Rate::Known(2.5).or_sentinel(), 2.5);
}

#[test]
fn natural_resources_are_basic() {
    let item = crafted("Iron_Ore", "Natural Resource · Raw", "2 s", Some(1), &[]);
    assert!(is_basic(&item).unwrap());
}

#[test]
fn unknown_duration_makes_item_basic_regardless_of_category() {
    let item = crafted("Hydrogen", "Component", "? s", Some(1), &[]);
    assert!(is_basic(&item).unwrap());
}

#[test]
fn craftable_component_is_not_basic() {
    let item = crafted("Gear", "Component", "1 s", Some(1), &[("Iron_Ingot", Some(1))]);
    assert!(!is_basic(&item).unwrap());
}

#[test]
fn unclassified_item_is_an_error() {
    let item = Item::bare("Mystery");
    assert!(matches!(is_basic(&item), Err(ChainError::Unclassified(name)) if name == "Mystery"));
}
