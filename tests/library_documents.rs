use std::fs;

use materials_testing_hub::{
    app,
    config::{self, Config},
    documents::{DocumentError, DocumentStore},
    importance::Property,
    library::{self, ASTM_D7984, ASTM_F1868, ISO_5084},
    telemetry,
};
use tempfile::TempDir;

fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch dir")
}

#[test]
fn shared_documents_are_cited_by_several_properties() {
    let f1868: Vec<Property> = library::methods_citing(&ASTM_F1868)
        .into_iter()
        .map(|(p, _)| p)
        .collect();
    assert_eq!(f1868, [Property::Insulation, Property::Breathability]);

    let d7984: Vec<Property> = library::methods_citing(&ASTM_D7984)
        .into_iter()
        .map(|(p, _)| p)
        .collect();
    assert_eq!(d7984, [Property::Insulation, Property::ThermalHand]);
}

#[test]
fn library_lists_eleven_methods() {
    let total: usize = library::groups().iter().map(|g| g.methods.len()).sum();
    assert_eq!(total, 11);
    let moisture = library::group(Property::MoistureManagement).expect("moisture group");
    let names: Vec<_> = moisture.methods.iter().map(|m| m.name).collect();
    assert_eq!(
        names,
        ["Horizontal Wicking", "Vertical Wicking", "Dry Rate", "Water Absorption"]
    );
}

#[test]
fn method_details_are_available_by_name() {
    let (group, method) = library::find_method("dry rate").expect("dry rate");
    assert_eq!(group.property, Property::MoistureManagement);
    assert_eq!(method.specimens, 5);
    assert_eq!(
        method.document.map(|d| d.file_name),
        Some("AATCC TM_201_ Standard.pdf")
    );
    let (_, effusivity) = library::find_method("Thermal Effusivity").expect("effusivity");
    assert!(effusivity.metric.contains("effusivity"));
}

#[test]
fn missing_document_fails_alone() {
    let dir = scratch_dir();
    fs::write(dir.path().join(ISO_5084.file_name), b"%PDF-1.4 thickness").expect("seed");
    let store = DocumentStore::new(dir.path());

    let err = store.load(&ASTM_F1868).unwrap_err();
    assert!(matches!(err, DocumentError::Missing { .. }), "{err}");
    assert!(!store.is_available(&ASTM_F1868));

    let doc = store.load(&ISO_5084).expect("present document loads");
    assert_eq!(doc.bytes, b"%PDF-1.4 thickness");
    assert_eq!(doc.mime(), "application/pdf");
}

#[test]
fn export_into_directory_keeps_file_name() {
    let src = scratch_dir();
    let dest = scratch_dir();
    fs::write(src.path().join(ASTM_D7984.file_name), b"%PDF-1.7 mtps").expect("seed");
    let store = DocumentStore::new(src.path());

    let written = store.export(&ASTM_D7984, dest.path()).expect("export");
    assert_eq!(written, 13);
    let copied = fs::read(dest.path().join(ASTM_D7984.file_name)).expect("copied file");
    assert_eq!(copied, b"%PDF-1.7 mtps");

    let renamed = dest.path().join("d7984.pdf");
    store.export(&ASTM_D7984, &renamed).expect("export to file path");
    assert!(renamed.is_file());
}

#[test]
fn config_round_trips_through_file() {
    let dir = scratch_dir();
    let path = dir.path().join("config.toml");

    let created = config::load_or_default_at(&path).expect("default config");
    assert_eq!(created, Config::default());
    assert!(path.is_file());

    let edited = Config {
        language: "ko-kr".into(),
        documents_dir: dir.path().join("pdfs").display().to_string(),
        window_alpha: 0.8,
        ..Config::default()
    };
    edited.save_to(&path).expect("save");
    let loaded = config::load_or_default_at(&path).expect("reload");
    assert_eq!(loaded, edited);
    assert_eq!(loaded.document_store().root(), dir.path().join("pdfs").as_path());
}

#[test]
fn bad_log_level_does_not_stop_startup() {
    let dir = scratch_dir();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"materials_testing_hub=loud\"\n").expect("seed");

    let cfg = app::bootstrap(&path).expect("startup continues");
    assert_eq!(cfg.log_level, "materials_testing_hub=loud");
    assert!(telemetry::parse_filter(&cfg.log_level).is_err());
}

#[test]
fn bootstrap_creates_missing_config() {
    let dir = scratch_dir();
    let path = dir.path().join("config.toml");
    let cfg = app::bootstrap(&path).expect("bootstrap");
    assert_eq!(cfg, Config::default());
    assert!(path.is_file());
}
