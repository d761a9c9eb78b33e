//! Integration tests for the `tracing` feature.
//!
//! Failed range checks and value accesses emit a debug event before the
//! error is returned. These tests capture the formatted events with a
//! scoped subscriber and check their fields.

#![cfg(feature = "tracing")]

use iimmutable::collection::IList;
use iimmutable::control::IOption;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};

// =============================================================================
// Capturing Subscriber
// =============================================================================

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.0.lock().expect("capture lock poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("capture lock poisoned")
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_events<F: FnOnce()>(action: F) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    output.contents()
}

// =============================================================================
// Event Tests
// =============================================================================

#[rstest]
fn test_out_of_range_get_emits_event() {
    let events = capture_events(|| {
        let list = IList::from(vec![1, 2, 3]);
        assert!(list.get(3).is_err());
    });
    assert!(events.contains("index out of range"), "{events}");
    assert!(events.contains("operation=get(3)"), "{events}");
    assert!(events.contains("index=3"), "{events}");
    assert!(events.contains("size=3"), "{events}");
}

#[rstest]
fn test_rejected_sub_list_emits_event() {
    let events = capture_events(|| {
        assert!(IList::from(vec![7, 8, 9]).sub_list(2, 1).is_err());
    });
    assert!(events.contains("sub_list range rejected"), "{events}");
    assert!(events.contains("from=2"), "{events}");
    assert!(events.contains("to=1"), "{events}");
}

#[rstest]
fn test_empty_option_access_emits_event() {
    let events = capture_events(|| {
        assert!(IOption::<i32>::none().get().is_err());
        assert!(IOption::<i32>::try_some(None).is_err());
    });
    assert!(events.contains("value requested from IOption::None"), "{events}");
    assert!(events.contains("absent value passed to IOption::try_some"), "{events}");
}

#[rstest]
fn test_successful_calls_emit_nothing() {
    let events = capture_events(|| {
        let list = IList::from(vec![1, 2, 3]);
        assert!(list.get(2).is_ok());
        assert!(list.sub_list(0, 3).is_ok());
        assert!(IOption::some(1).get().is_ok());
    });
    assert!(events.is_empty(), "{events}");
}
