// Tests for stage checkpoints and settings files

use glossa_core::checkpoint::{Checkpoint, Stage};
use glossa_core::config::Settings;
use glossa_core::export::write_spreadsheet;
use glossa_core::WordPair;
use glossa_scanner::{CatalogEntry, EntryKind};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            EntryKind::CategoryLink,
            "Body",
            "Skeleton(O esqueleto)",
            "https://www.languageguide.org/en/body/skeleton/",
        ),
        CatalogEntry::new(
            EntryKind::Notepad,
            "Places",
            "Europe",
            "https://www.languageguide.org/en/places/europe/",
        ),
    ]
}

// ============================================================================
// Checkpoint Tests
// ============================================================================

#[test]
fn test_missing_file_is_not_fresh() {
    let dir = TempDir::new().unwrap();
    let checkpoint = Checkpoint::new(Stage::Catalog, dir.path().join("catalog.csv"));

    assert!(!checkpoint.is_fresh());
    assert!(checkpoint.load::<CatalogEntry>().unwrap().is_none());
}

#[test]
fn test_catalog_store_then_load() {
    let dir = TempDir::new().unwrap();
    let checkpoint = Checkpoint::new(Stage::Catalog, dir.path().join("catalog.csv"));

    checkpoint.store(&catalog()).unwrap();

    assert!(checkpoint.is_fresh());
    let loaded = checkpoint.load::<CatalogEntry>().unwrap().unwrap();
    assert_eq!(loaded, catalog());
}

#[test]
fn test_catalog_file_uses_readable_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    Checkpoint::new(Stage::Catalog, &path)
        .store(&catalog())
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("type,section,subsection,url"));
    assert!(lines.next().unwrap().starts_with("category-link,Body,"));
    assert!(lines.next().unwrap().starts_with("notepad,Places,"));
}

#[test]
fn test_legacy_notepad2_kind_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(
        &path,
        "type,section,subsection,url\nnotepad2,Places,Europe,https://example.com/europe/\n",
    )
    .unwrap();

    let loaded = Checkpoint::new(Stage::Catalog, &path)
        .load::<CatalogEntry>()
        .unwrap()
        .unwrap();

    assert_eq!(loaded[0].kind, EntryKind::Notepad);
}

#[test]
fn test_forced_checkpoint_ignores_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    Checkpoint::new(Stage::Catalog, &path)
        .store(&catalog())
        .unwrap();

    let forced = Checkpoint::new(Stage::Catalog, &path).with_force(true);

    assert!(!forced.is_fresh());
    assert!(forced.load::<CatalogEntry>().unwrap().is_none());
}

#[test]
fn test_multiline_translation_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let checkpoint = Checkpoint::new(Stage::Words, dir.path().join("nested").join("words.csv"));
    let mut pair = WordPair::new("Places", "Asia", "Asia", "A\n      Ásia");
    pair.word_count = 1;

    checkpoint.store(std::slice::from_ref(&pair)).unwrap();
    let loaded = checkpoint.load::<WordPair>().unwrap().unwrap();

    assert_eq!(loaded, vec![pair]);
}

#[test]
fn test_malformed_checkpoint_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, "type,section,subsection,url\nbanana,A,B,C\n").unwrap();

    let result = Checkpoint::new(Stage::Catalog, &path).load::<CatalogEntry>();
    assert!(result.is_err());
}

// ============================================================================
// Spreadsheet Tests
// ============================================================================

#[test]
fn test_spreadsheet_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("words.xlsx");
    let mut pair = WordPair::new("Body", "Skeleton", "skull", "o crânio");
    pair.word_count = 1;
    pair.transcription = "ˈskʌl".to_string();

    write_spreadsheet(&[pair], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // xlsx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
}

// ============================================================================
// Settings File Tests
// ============================================================================

#[test]
fn test_settings_from_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "max_transcription_words = 3")?;
    writeln!(file, "output_file = \"vocab.xlsx\"")?;

    let settings = Settings::from_path(file.path())?;

    assert_eq!(settings.max_transcription_words, 3);
    assert_eq!(
        settings.output_path(std::path::Path::new("/tmp")),
        std::path::PathBuf::from("/tmp/vocab.xlsx")
    );
    Ok(())
}

#[test]
fn test_settings_missing_file_is_error() {
    let result = Settings::from_path(std::path::Path::new("/nonexistent/glossa.toml"));
    assert!(result.is_err());
}
