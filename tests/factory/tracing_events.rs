//! Tests for the log events emitted by the guarded region.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};
use tri_outcome::{result, Outcome, TagRecord, DEFECT_PREFIX};

#[derive(Clone, Debug)]
struct Recorded {
    level: Level,
    fields: Vec<(String, String)>,
}

impl Recorded {
    fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Subscriber for Recorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            fields: visitor.fields,
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn record_events(f: impl FnOnce()) -> Vec<Recorded> {
    let recorder = Recorder::default();
    let events = Arc::clone(&recorder.events);
    tracing::subscriber::with_default(recorder, f);
    let recorded = events.lock().unwrap().clone();
    recorded
}

#[test]
fn captured_panic_emits_debug_event() {
    let events = record_events(|| {
        let outcome: Outcome<u8, ()> = result(|ok, _| {
            let broken = true;
            if broken {
                panic!("disk full");
            }
            ok(0)
        });
        assert!(outcome.is_thrown());
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.values("panic"), vec!["disk full"]);
    assert_eq!(event.values("message"), vec!["captured panic as thrown outcome"]);
}

#[test]
fn defect_emits_error_event() {
    let events = record_events(|| {
        let outcome: Outcome<u8, ()> = result(|_, _| TagRecord::<u8, ()>::new("nope"));
        assert!(outcome.is_thrown());
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.values("status"), vec!["nope"]);
    assert_eq!(event.values("message"), vec!["outcome callback broke the tag contract"]);

    let defect = event.values("defect");
    assert_eq!(defect.len(), 1);
    assert!(defect[0].starts_with(DEFECT_PREFIX));
}

#[test]
fn settled_tags_emit_nothing() {
    let events = record_events(|| {
        let outcome: Outcome<u8, ()> = result(|ok, _| ok(1));
        assert!(outcome.is_ok());
    });

    assert!(events.is_empty());
}
