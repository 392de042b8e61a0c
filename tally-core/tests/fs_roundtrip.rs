use std::path::Path;

use tally_core::storage::{OrderStorage, StorageParams};
use tally_core::storage_factory::{Backend, open_storage};
use tally_core::{
    Catalog, OrderQuantities, OrderStore, Preset, TallyConfig, compute, format_receipt,
};

fn fs_store(dir: &Path, key: &str) -> OrderStore {
    let storage = open_storage(
        Backend::Fs,
        StorageParams {
            data_dir: dir.to_path_buf(),
        },
    )
    .unwrap();
    OrderStore::load(storage, key)
}

#[test]
fn order_survives_reload() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut store = fs_store(tmp.path(), "sushiro_order");
        store.adjust("red", 1);
        store.adjust("red", 1);
        store.adjust("gold", 1);
        store.adjust("side_17", 1);
        store.adjust("side_17", -1);
    }
    let reloaded = fs_store(tmp.path(), "sushiro_order");
    assert_eq!(reloaded.get("red"), 2);
    assert_eq!(reloaded.get("gold"), 1);
    assert_eq!(reloaded.get("side_17"), 0);
}

#[test]
fn save_and_load_reproduce_mapping() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = fs_store(tmp.path(), "k");
    store.adjust("black", 3);
    store.adjust("silver", 0);
    store.save().unwrap();
    let before: OrderQuantities = store.quantities().clone();

    let again = fs_store(tmp.path(), "k");
    assert_eq!(again.quantities(), &before);
}

#[test]
fn corrupt_file_degrades_to_empty_and_recovers() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("sushiro_order.json"), "{\"red\": 2,").unwrap();

    let mut store = fs_store(tmp.path(), "sushiro_order");
    assert!(store.quantities().is_empty());

    // the next mutation overwrites the corrupt payload
    store.adjust("red", 1);
    let raw = std::fs::read_to_string(tmp.path().join("sushiro_order.json")).unwrap();
    assert_eq!(raw, r#"{"red":1}"#);
}

#[test]
fn presets_use_separate_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let hk = TallyConfig::from_preset(Preset::Hk);
    let en = TallyConfig::from_preset(Preset::En);

    let mut a = fs_store(tmp.path(), &hk.storage_key);
    a.adjust("red", 4);
    let b = fs_store(tmp.path(), &en.storage_key);
    assert_eq!(b.get("red"), 0);
}

#[test]
fn reset_is_persisted() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = fs_store(tmp.path(), "sushiro_order");
    store.adjust("gold", 2);
    store.reset();
    let reloaded = fs_store(tmp.path(), "sushiro_order");
    assert!(reloaded.quantities().is_empty());
}

#[test]
fn end_to_end_receipt() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = TallyConfig::from_preset(Preset::En);
    let mut store = fs_store(tmp.path(), &cfg.storage_key);
    store.adjust("red", 2);
    store.adjust("gold", 1);

    let summary = compute(&Catalog::sushiro(), store.quantities(), true);
    assert_eq!(summary.grand_total, 51);
    let text = format_receipt(&summary, true, &cfg.labels);
    assert!(text.contains("紅碟 (Red) x2: $24\n"));
    assert!(text.contains("Service charge: $5\n"));
    assert!(text.contains("Total: $51\n"));
}

#[test]
fn memory_backend_is_not_shared() {
    let params = StorageParams {
        data_dir: std::env::temp_dir(),
    };
    let s1 = open_storage(Backend::Memory, params.clone()).unwrap();
    s1.write("k", "{\"red\":1}").unwrap();
    let s2 = open_storage(Backend::Memory, params).unwrap();
    assert_eq!(s2.read("k").unwrap(), None);
}
