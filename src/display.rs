//! Output side of a calculate-sum invocation.
//!
//! A [`ResultSink`] stands in for the page element that shows the sum. The
//! requester writes to it only on success; failures never touch it.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

/// Destination for the rendered result line.
pub trait ResultSink: Send + Sync {
    fn show(&self, text: &str);
}

impl<F> ResultSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn show(&self, text: &str) {
        self(text)
    }
}

/// Formats a result value as `Sum: <value>`.
///
/// Strings are written verbatim; every other JSON value uses its JSON text.
pub fn render_result(value: &Value) -> String {
    match value {
        Value::String(text) => format!("Sum: {text}"),
        other => format!("Sum: {other}"),
    }
}

/// In-memory display holding the last text written to it.
///
/// Clones share the same underlying text.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    text: Arc<Mutex<String>>,
}

impl MemoryDisplay {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: Arc::new(Mutex::new(initial.into())),
        }
    }

    pub fn text(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultSink for MemoryDisplay {
    fn show(&self, text: &str) {
        let mut current = self.text.lock().unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(text);
    }
}

/// Prints each result line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDisplay;

impl ResultSink for StdoutDisplay {
    fn show(&self, text: &str) {
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_numbers_as_json_text() {
        assert_eq!(render_result(&json!(5)), "Sum: 5");
        assert_eq!(render_result(&json!(-12)), "Sum: -12");
    }

    #[test]
    fn renders_strings_unquoted() {
        assert_eq!(render_result(&json!("4")), "Sum: 4");
        assert_eq!(render_result(&json!("")), "Sum: ");
    }

    #[test]
    fn memory_display_overwrites_previous_text() {
        let display = MemoryDisplay::new("initial");
        assert_eq!(display.text(), "initial");

        display.show("Sum: 1");
        display.show("Sum: 2");
        assert_eq!(display.text(), "Sum: 2");
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Mutex::new(Vec::new());
        let sink = |text: &str| seen.lock().unwrap().push(text.to_string());

        sink.show("Sum: 9");
        assert_eq!(*seen.lock().unwrap(), vec!["Sum: 9".to_string()]);
    }
}
