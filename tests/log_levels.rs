//! At the default `warn` level nothing is logged next to the console messages.
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use flowise_key::{update, validate};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn logged_at(level: &str) -> String {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let key = validate("key.with.unusual+chars/0123").unwrap();
        assert!(key.has_unusual_chars());

        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join(".env");
        fs::write(&env, "FLOWISE_API_KEY=a\nFLOWISE_API_KEY=b\n").unwrap();
        update(&env, &key).unwrap();
    });
    sink.text()
}

#[test]
fn default_level_is_silent() {
    assert_eq!(logged_at("warn"), "");
}

#[test]
fn details_show_up_when_asked() {
    let text = logged_at("debug");
    assert!(text.contains("API key contains unusual characters"));
    assert!(text.contains("dropped duplicate key lines"));
}
