//! Yield preset binder tests

mod common;

use bakecalc_admin::presets::{PresetMap, YieldPresetBinder};
use common::FakeFields;

fn cake_presets() -> PresetMap {
  PresetMap::parse(Some(r#"{"cake": 95, "bread": 90}"#)).unwrap()
}

#[test]
fn test_initial_fill_from_selected_category() {
  let fields = FakeFields::new("cake", "");
  let binder = YieldPresetBinder::new(cake_presets(), fields.clone());

  assert_eq!(binder.apply_initial().as_deref(), Some("95"));
  assert_eq!(fields.yield_rate(), "95");
}

#[test]
fn test_initial_fill_skips_empty_or_unknown() {
  let fields = FakeFields::new("", "100");
  let binder = YieldPresetBinder::new(cake_presets(), fields.clone());
  assert_eq!(binder.apply_initial(), None);
  assert_eq!(fields.yield_rate(), "100");

  fields.select("pie");
  assert_eq!(binder.apply_initial(), None);
  assert_eq!(fields.yield_rate(), "100");
}

#[test]
fn test_change_overwrites_with_preset() {
  let fields = FakeFields::new("cake", "95");
  let binder = YieldPresetBinder::new(cake_presets(), fields.clone());

  fields.select("bread");
  assert_eq!(binder.on_category_change().as_deref(), Some("90"));
  assert_eq!(fields.yield_rate(), "90");
}

#[test]
fn test_change_trims_selected_value() {
  let fields = FakeFields::new("", "");
  let binder = YieldPresetBinder::new(cake_presets(), fields.clone());

  fields.select("  bread \n");
  binder.on_category_change();
  assert_eq!(fields.yield_rate(), "90");
}

#[test]
fn test_change_to_unknown_category_keeps_manual_value() {
  let fields = FakeFields::new("cake", "");
  let binder = YieldPresetBinder::new(cake_presets(), fields.clone());
  binder.apply_initial();

  fields.type_yield("87");
  fields.select("pie");
  assert_eq!(binder.on_category_change(), None);
  assert_eq!(fields.yield_rate(), "87");
}

#[test]
fn test_malformed_presets_disable_autofill() {
  let presets = PresetMap::parse_or_empty(Some(r#"{"cake": 95,"#));
  assert!(presets.is_empty());

  let fields = FakeFields::new("cake", "100");
  let binder = YieldPresetBinder::new(presets, fields.clone());
  assert_eq!(binder.apply_initial(), None);

  for category in ["bread", "cake", ""] {
    fields.select(category);
    assert_eq!(binder.on_category_change(), None);
  }
  assert_eq!(fields.yield_rate(), "100");
}

#[test]
fn test_admin_presets() {
  let presets = PresetMap::parse(Some(
    r#"{"SPONGE": 94, "CHIFFON": 95, "POUND": 92, "CHOUX": 78, "CREAM": 99, "CUSTARD": 98}"#,
  ))
  .unwrap();
  assert_eq!(presets.len(), 6);

  let fields = FakeFields::new("CHOUX", "");
  let binder = YieldPresetBinder::new(presets, fields.clone());
  binder.apply_initial();
  assert_eq!(fields.yield_rate(), "78");

  fields.select("CUSTARD");
  binder.on_category_change();
  assert_eq!(fields.yield_rate(), "98");
}

#[test]
fn test_preset_map_from_iter() {
  let presets: PresetMap = [("TART", 90.0), ("TART_SHELL", 88.5)].into_iter().collect();
  assert_eq!(presets.input_value("TART").as_deref(), Some("90"));
  assert_eq!(presets.input_value("TART_SHELL").as_deref(), Some("88.5"));
  assert_eq!(presets.get("COOKIE"), None);
}
