//! The four-step "request journey" walkthrough content and cursor

/// One step of the request journey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyStep {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// The static, ordered walkthrough steps
pub fn journey_steps() -> &'static [JourneyStep] {
    &[
        JourneyStep {
            title: "1. Traffic Reception",
            summary: "The client sends an HTTP request to the Load Balancer's Public IP address.",
            detail: "The LB receives connections on standard ports like 80 (HTTP) or 443 (HTTPS).",
        },
        JourneyStep {
            title: "2. Decision Logic",
            summary: "The LB chooses which backend server should handle this specific request.",
            detail: "This choice is based on configured algorithms like Round Robin or Least Connections.",
        },
        JourneyStep {
            title: "3. Backend Forwarding",
            summary: "The LB opens a connection to the selected server and forwards the original request.",
            detail: "This often happens over a private, high-speed internal network.",
        },
        JourneyStep {
            title: "4. Response Handling",
            summary: "The backend server processes the request and sends the response back via the LB to the client.",
            detail: "The LB might compress the response or provide SSL termination here.",
        },
    ]
}

/// Position within the walkthrough. `next` wraps past the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JourneyCursor {
    step: usize,
}

impl JourneyCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static JourneyStep {
        &journey_steps()[self.step]
    }

    pub fn is_last(&self) -> bool {
        self.step == journey_steps().len() - 1
    }

    pub fn next(&mut self) {
        self.step = (self.step + 1) % journey_steps().len();
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_steps() {
        assert_eq!(journey_steps().len(), 4);
        assert!(journey_steps()[0].title.starts_with("1."));
    }

    #[test]
    fn test_next_wraps_to_start() {
        let mut cursor = JourneyCursor::new();
        for _ in 0..4 {
            cursor.next();
        }
        assert_eq!(cursor.step_index(), 0);
    }

    #[test]
    fn test_is_last_on_final_step() {
        let mut cursor = JourneyCursor::new();
        assert!(!cursor.is_last());
        for _ in 0..3 {
            cursor.next();
        }
        assert!(cursor.is_last());
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut cursor = JourneyCursor::new();
        cursor.next();
        cursor.next();
        cursor.reset();
        assert_eq!(cursor.step_index(), 0);
        assert_eq!(cursor.current().title, "1. Traffic Reception");
    }
}
