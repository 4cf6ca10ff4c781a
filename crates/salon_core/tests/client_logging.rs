//! Rejection events emitted by client factories.
//!
//! Runs in its own test binary: the capturing logger is process-global.

use log::{LevelFilter, Log, Metadata, Record};
use salon_core::Client;
use serde_json::json;
use std::sync::Mutex;

struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

fn take_build_events() -> Vec<String> {
    let lines: Vec<String> = LOGGER.lines.lock().expect("logger mutex").drain(..).collect();
    for line in &lines {
        assert!(
            !line.contains("Иван") && !line.contains("invalid"),
            "personal data leaked into logs: {line}"
        );
    }
    lines
        .into_iter()
        .filter(|line| line.starts_with("event=client_build"))
        .collect()
}

#[test]
fn every_rejected_build_emits_one_metadata_event() {
    log::set_logger(&LOGGER).expect("logger installs once");
    log::set_max_level(LevelFilter::Debug);

    Client::new(1, "Иванов", "Иван", None, None, Some("invalid"), None).unwrap_err();
    assert_eq!(
        take_build_events(),
        ["event=client_build module=model status=error source=fields field=email reason=missing_at"]
    );

    let missing_key = json!({"id": 1, "givenName": "Иван"});
    Client::from_structured(missing_key.as_object().unwrap()).unwrap_err();
    assert_eq!(
        take_build_events(),
        ["event=client_build module=model status=error source=structured field=surname reason=missing_key"]
    );

    let wrong_type = json!({"id": "1", "surname": "Иванов", "givenName": "Иван"});
    Client::from_structured(wrong_type.as_object().unwrap()).unwrap_err();
    assert_eq!(
        take_build_events(),
        ["event=client_build module=model status=error source=structured field=id reason=wrong_type"]
    );

    Client::from_full_name("Иванов", 3).unwrap_err();
    assert_eq!(
        take_build_events(),
        ["event=client_build module=model status=error source=full_name field=fullName reason=too_few_name_parts"]
    );

    Client::new(1, "Иванов", "Иван", None, None, None, None).unwrap();
    assert!(take_build_events().is_empty());
}
