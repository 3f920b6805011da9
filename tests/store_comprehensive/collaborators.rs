//! Collaborator Tests
//!
//! Producer, poller and retention working against one shared log.

use crate::*;

#[test]
fn test_poller_baseline_lifecycle() {
    init_tracing();
    let chime = Chime::new();
    let producer = chime.producer();
    let mut poller = chime.poller();

    assert_eq!(poller.baseline(), None);
    assert!(poller.poll().unwrap().is_empty());
    assert_eq!(poller.baseline(), None);

    producer.record("a.wav", Some("build1")).unwrap();
    producer.record("b.wav", None).unwrap();

    let batch = poller.poll().unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].sound_ref, "a.wav");
    assert_eq!(batch[0].details.as_deref(), Some("build1"));
    assert_eq!(poller.baseline(), Some(nid(2)));

    assert!(poller.poll().unwrap().is_empty());
    assert_eq!(poller.baseline(), Some(nid(2)));
}

#[test]
fn test_poller_survives_removal_of_its_baseline() {
    let chime = Chime::new();
    let producer = chime.producer();
    let mut poller = chime.poller();

    producer.record("a.wav", None).unwrap();
    producer.record("b.wav", None).unwrap();
    poller.poll().unwrap();

    // Retention removes everything, including the poller's baseline entry
    chime
        .retention()
        .sweep_with(&RetentionPolicy::KeepLast(0), chrono::Utc::now())
        .unwrap();
    assert!(poller.poll().unwrap().is_empty());

    producer.record("c.wav", None).unwrap();
    let batch = poller.poll().unwrap();
    assert_eq!(batch.iter().map(|v| v.id).collect::<Vec<_>>(), vec![nid(3)]);
}

#[test]
fn test_poller_from_existing_baseline() {
    let chime = Chime::new();
    let producer = chime.producer();
    for _ in 0..4 {
        producer.record("a.wav", None).unwrap();
    }
    let mut poller = chime.poller_from(nid(2));
    let batch = poller.poll().unwrap();
    assert_eq!(batch.iter().map(|v| v.id.as_u64()).collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn test_independent_pollers() {
    let chime = Chime::new();
    let producer = chime.producer();
    let mut early = chime.poller();

    producer.record("a.wav", None).unwrap();
    assert_eq!(early.poll().unwrap().len(), 1);

    let mut late = chime.poller();
    producer.record("b.wav", None).unwrap();
    assert_eq!(early.poll().unwrap().len(), 1);
    assert_eq!(late.poll().unwrap().len(), 2);
}

#[test]
fn test_poll_json_shape() {
    let chime = Chime::new();
    chime.producer().record("a.wav", Some("build #7")).unwrap();

    let mut poller = chime.poller();
    let json = poller.poll_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["lastId"], 1);
    assert_eq!(parsed["notifications"][0]["soundRef"], "a.wav");
    assert_eq!(parsed["notifications"][0]["details"], "build #7");

    let again: chime::PollBatch = serde_json::from_str(&poller.poll_json().unwrap()).unwrap();
    assert_eq!(again.last_id, Some(nid(1)));
    assert!(again.notifications.is_empty());
}

#[test]
fn test_producer_rejects_empty_sound() {
    let chime = Chime::new();
    let err = chime.producer().record("", Some("details")).unwrap_err();
    assert!(err.is_caller_bug());
    assert_eq!(chime.producer().last_id().unwrap(), None);
}
