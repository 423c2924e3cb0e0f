use clipfloat::clips::ClipStore;
use clipfloat::settings::{Geometry, Settings};
use tempfile::tempdir;

#[test]
fn clips_and_geometry_survive_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clipfloat").join("settings.json");

    let mut store = ClipStore::new();
    store.add("first");
    store.add("second");
    store.add("third");

    let settings = Settings {
        geometry: Some(Geometry {
            x: 1500,
            y: 240,
            width: 380,
            height: 600,
        }),
        clips: store.all().to_vec(),
        debug_logging: false,
    };
    settings.save(&path).unwrap();

    // "restart": load the file and rebuild the store from it
    let loaded = Settings::load(&path);
    assert_eq!(loaded.geometry, settings.geometry);
    assert_eq!(loaded.clips, ["first", "second", "third"]);

    let restored = ClipStore::from_clips(loaded.clips, 100);
    assert_eq!(restored.all(), store.all());
}

#[test]
fn a_corrupt_settings_file_degrades_to_an_empty_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "]]] definitely not json").unwrap();

    let loaded = Settings::load(&path);
    assert!(loaded.clips.is_empty());
    assert!(loaded.geometry.is_none());

    // and saving over it repairs the file
    Settings {
        clips: vec!["fresh".into()],
        ..Settings::default()
    }
    .save(&path)
    .unwrap();
    assert_eq!(Settings::load(&path).clips, ["fresh"]);
}

#[test]
fn unknown_keys_are_ignored_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"clips":["kept"],"some_future_field":{"nested":true}}"#,
    )
    .unwrap();

    let loaded = Settings::load(&path);
    assert_eq!(loaded.clips, ["kept"]);
}
