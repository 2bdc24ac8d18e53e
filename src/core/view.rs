use crate::models::Dropdown;
use std::collections::HashMap;

/// The page surface the controller renders into
///
/// Stands in for the document: two dropdowns, a blocking alert and the
/// element that shows the predicted price.
pub trait PageView {
    /// Append a selectable option to a dropdown
    fn append_option(&mut self, dropdown: Dropdown, value: &str);

    /// Show a user-facing failure message
    fn alert(&mut self, message: &str);

    /// Replace the result text and make the result visible
    fn show_result(&mut self, text: &str);
}

/// In-memory page, records everything rendered into it
#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    options: HashMap<Dropdown, Vec<String>>,
    alerts: Vec<String>,
    result_text: Option<String>,
    result_visible: bool,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self, dropdown: Dropdown) -> &[String] {
        self.options.get(&dropdown).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }
}

impl PageView for MemoryView {
    fn append_option(&mut self, dropdown: Dropdown, value: &str) {
        self.options.entry(dropdown).or_default().push(value.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_result(&mut self, text: &str) {
        self.result_text = Some(text.to_string());
        self.result_visible = true;
    }
}

/// Terminal page used by the binary: options and results on stdout,
/// alerts on stderr
#[derive(Debug, Default)]
pub struct ConsoleView;

impl PageView for ConsoleView {
    fn append_option(&mut self, dropdown: Dropdown, value: &str) {
        println!("{:>6} | {}", dropdown.as_str(), value);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("!! {}", message);
    }

    fn show_result(&mut self, text: &str) {
        println!("{}", text);
    }
}
