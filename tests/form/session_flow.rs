use tempfile::TempDir;

use powwow::core::form::{FileStorage, FormField, FormState, FormStore, STORAGE_KEY};
use powwow::core::message::{Artifact, GeneratedArtifacts};
use powwow::core::share::{self, MemoryClipboard, NoticeLevel, RecordingNotifier};

#[test]
fn edits_survive_a_restart() {
    let tmp = TempDir::new().unwrap();

    let mut store = FormStore::load(FileStorage::new(tmp.path()));
    store.update(FormField::Brand, "Crumb & Co").unwrap();
    store.update(FormField::Price, "").unwrap();
    drop(store);

    let reopened = FormStore::load(FileStorage::new(tmp.path()));
    assert_eq!(reopened.state().brand, "Crumb & Co");
    assert_eq!(reopened.state().price, "");
    assert_eq!(reopened.state().audience, FormState::default().audience);
    assert!(tmp.path().join(format!("{STORAGE_KEY}.json")).exists());
}

#[test]
fn corrupt_slot_falls_back_to_preset_and_is_overwritten_on_edit() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(format!("{STORAGE_KEY}.json")), "{not json").unwrap();

    let mut store = FormStore::load(FileStorage::new(tmp.path()));
    assert_eq!(store.state(), &FormState::default());

    store.update(FormField::Cta, "Book a call").unwrap();
    let reopened = FormStore::load(FileStorage::new(tmp.path()));
    assert_eq!(reopened.state().cta, "Book a call");
}

#[test]
fn share_link_round_trips_into_a_fresh_store() {
    let tmp = TempDir::new().unwrap();
    let clipboard = MemoryClipboard::default();
    let notifier = RecordingNotifier::default();

    let mut source = FormStore::load(FileStorage::new(tmp.path().join("a")));
    source.update(FormField::Outcome, "calmer launches").unwrap();
    source.update(FormField::Proof, "Café owners → 3× bookings").unwrap();

    let link = share::share(&clipboard, &notifier, "https://example.com/app?x=1", source.state())
        .unwrap();
    assert_eq!(clipboard.last().as_deref(), Some(link.as_str()));
    assert_eq!(
        notifier.notices(),
        vec![(NoticeLevel::Success, "Shareable link copied".to_string())]
    );

    let decoded = share::state_from_link(link.as_str()).unwrap();
    let mut target = FormStore::load(FileStorage::new(tmp.path().join("b")));
    target.replace(decoded).unwrap();
    assert_eq!(target.state(), source.state());

    let artifacts = GeneratedArtifacts::from_state(target.state());
    assert_eq!(
        artifacts.text(Artifact::Tagline, None).as_deref(),
        Some("Calmer launches in minutes a day — not more noise.")
    );
}

#[test]
fn copying_a_single_line_uses_clipboard() {
    let clipboard = MemoryClipboard::default();
    let notifier = RecordingNotifier::default();
    let artifacts = GeneratedArtifacts::from_state(&FormState::default());

    let line = artifacts.text(Artifact::Aida, Some(3)).unwrap();
    share::copy(&clipboard, &notifier, &line).unwrap();

    assert!(clipboard.last().unwrap().starts_with("Action: "));
    assert_eq!(notifier.notices()[0].1, "Copied");
}
