// tests/snapshot_store.rs
//
// Round-trips and damaged files for the single-line state store.
//
use std::fs;

use metal_watch::data::{MetricKey, PriceValue, Snapshot};
use metal_watch::store::SnapshotStore;

fn price(s: &str) -> PriceValue {
    PriceValue::Price(s.to_string())
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("last_price.txt"));

    let cases = [
        Snapshot::new(price("7,000"), price("6,500"), price("82")),
        Snapshot::new(price("1,23,456"), PriceValue::NotAvailable, price("95.5")),
        Snapshot::default(),
        Snapshot::new(price("Closed today"), price("6,500"), price("82")),
    ];
    for snap in cases {
        store.save(&snap).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.snapshot, snap);
        assert_eq!(loaded.raw, snap.state_string());
    }
}

#[test]
fn save_overwrites_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("nested").join("last_price.txt");
    let store = SnapshotStore::new(&path);

    store.save(&Snapshot::new(price("7,000"), price("6,500"), price("82"))).unwrap();
    store.save(&Snapshot::new(price("7,100"), price("6,600"), price("83"))).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "7,100-6,600-83");
}

#[test]
fn missing_file_is_no_prior_state() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = SnapshotStore::new(dir.path().join("nope.txt")).load();
    assert_eq!(loaded.raw, "");
    assert_eq!(loaded.snapshot, Snapshot::default());
}

#[test]
fn wrong_field_count_is_all_sentinel_but_raw_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_price.txt");
    let store = SnapshotStore::new(&path);

    for bad in ["7,000-6,500", "7,000-6,500-82-1", ""] {
        fs::write(&path, format!("{bad}\n")).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.snapshot, Snapshot::default(), "{bad:?}");
        assert_eq!(loaded.raw, bad);
    }
}

#[test]
fn empty_field_still_maps_positionally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_price.txt");
    fs::write(&path, "7,000--82\n").unwrap();

    let loaded = SnapshotStore::new(&path).load();
    assert_eq!(loaded.raw, "7,000--82");
    assert_eq!(loaded.snapshot.get(MetricKey::Gold24K), &price("7,000"));
    assert_eq!(loaded.snapshot.get(MetricKey::Gold22K), &PriceValue::NotAvailable);
    assert_eq!(loaded.snapshot.get(MetricKey::Silver), &price("82"));
}

#[test]
fn binary_garbage_is_all_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_price.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, b'-', 0x80, b'-', 0xc3]).unwrap();

    let loaded = SnapshotStore::new(&path).load();
    assert_eq!(loaded.snapshot, Snapshot::default());
    assert_eq!(loaded.snapshot.get(MetricKey::Gold24K), &PriceValue::NotAvailable);
}

#[test]
fn directory_in_place_of_file_is_no_prior_state() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = SnapshotStore::new(dir.path()).load();
    assert_eq!(loaded.snapshot, Snapshot::default());
}
