//! One widget per explainer tab, plus the shared header and footer

mod concept;
mod footer;
mod header;
mod health;
mod inspector;
mod journey;
mod quiz;
mod simulator;

pub use concept::ConceptTab;
pub use footer::Footer;
pub use header::{MainHeader, TabBar};
pub use health::HealthTab;
pub use inspector::InspectorTab;
pub use journey::JourneyTab;
pub use quiz::QuizTab;
pub use simulator::SimulatorTab;

use unicode_width::UnicodeWidthStr;

/// Truncate a label to a display width, adding an ellipsis if needed
pub(crate) fn fit_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.to_string().width();
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_label_short() {
        assert_eq!(fit_label("Round Robin", 20), "Round Robin");
    }

    #[test]
    fn test_fit_label_truncates() {
        assert_eq!(fit_label("Weighted Round Robin", 10), "Weighted …");
    }

    #[test]
    fn test_fit_label_tiny_width() {
        assert_eq!(fit_label("Quiz", 1), "…");
    }
}
