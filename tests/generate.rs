//! End-to-end generation through the public API.

use pretty_assertions::assert_eq;
use serde_json::Value;

use px_armory::render::png::decode_data_url;
use px_armory::{generate, generate_mace, ItemKind, ItemOptions, Severity};

fn json(kind: ItemKind, options: &ItemOptions) -> Value {
    serde_json::from_str(&generate(kind, options).to_json().unwrap()).unwrap()
}

#[test]
fn test_item_json_shape() {
    let value = json(ItemKind::Shield, &ItemOptions::new().with_seed(21).with_sub_type("kite"));
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["imageDataUrl", "itemData", "name", "seed", "type", "warnings"]);
    assert_eq!(value["type"], "shield");
    assert_eq!(value["seed"], 21);
    assert_eq!(value["itemData"]["subType"], "kite");
    assert_eq!(value["itemData"]["seedSource"], "explicit");
    assert!(value["name"].as_str().unwrap().ends_with("Kite Shield"));
}

#[test]
fn test_data_url_is_scaled_png() {
    let item = generate(ItemKind::Bow, &ItemOptions::new().with_seed(3).with_scale(3));
    let bytes = decode_data_url(&item.image_data_url).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (24 * 3, 56 * 3));

    // every cell is an exact 3x3 block
    for y in (0..img.height()).step_by(3) {
        for x in (0..img.width()).step_by(3) {
            let px = img.get_pixel(x, y);
            assert_eq!(img.get_pixel(x + 2, y + 2), px);
        }
    }
}

#[test]
fn test_unknown_material_warning_in_json() {
    let item = generate_mace(
        &ItemOptions::new()
            .with_seed(8)
            .with_sub_type("flanged")
            .with_material("UNKNOWNIUM"),
    );
    assert_eq!(item.name, "Iron Flanged Mace");
    let warning = &item.warnings[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.code, "armory::material::unknown");
    assert_eq!(warning.message, "unknown head material 'UNKNOWNIUM', using 'iron'");

    let value: Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
    assert_eq!(value["warnings"][0]["severity"], "warning");
    assert_eq!(value["itemData"]["material"], "iron");
}

#[test]
fn test_seed_replays_across_calls() {
    for kind in ItemKind::ALL {
        let options = ItemOptions::new().with_seed(77).with_material("bronze");
        assert_eq!(json(kind, &options), json(kind, &options));
    }
    let a = json(ItemKind::Sword, &ItemOptions::new().with_seed(1));
    let b = json(ItemKind::Sword, &ItemOptions::new().with_seed(2));
    assert_ne!(a["imageDataUrl"], b["imageDataUrl"]);
}

#[test]
fn test_options_from_camel_case_json() {
    let options: ItemOptions = serde_json::from_str(
        r#"{"subType":"solitaire","material":"silver","gemMaterial":"sapphire","seed":4,"scale":1}"#,
    )
    .unwrap();
    let item = generate(ItemKind::Ring, &options);
    assert_eq!(item.name, "Sapphire-Set Silver Solitaire Ring");
    assert!(item.warnings.is_empty());
}

#[test]
fn test_broken_item_is_placeholder() {
    let item = generate(ItemKind::Trident, &ItemOptions::new().with_seed(5).with_scale(0));
    assert!(item.is_sentinel());
    assert_eq!(item.name, "Broken Item");
    assert!(item.image_data_url.starts_with("data:image/png;base64,"));
    assert!(item.warnings.iter().any(|w| w.severity == Severity::Error));
}
