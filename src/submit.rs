//! Submit callback for validated records

use crate::schema::FormRecord;

/// Receives each record that passes validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn on_submit(&mut self, record: &FormRecord);
}

/// Writes validated records to the diagnostic log as JSON
#[derive(Debug, Default)]
pub struct LogSubmitHandler {
    submitted: usize,
}

impl LogSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmitHandler for LogSubmitHandler {
    fn on_submit(&mut self, record: &FormRecord) {
        self.submitted += 1;
        match serde_json::to_string(record) {
            Ok(json) => tracing::info!(submission = self.submitted, "Form submitted: {json}"),
            Err(err) => tracing::warn!("Form submitted but could not be serialized: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FormRecord {
        FormRecord {
            name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
            preferences: None,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn test_log_handler_counts_submissions() {
        let mut handler = LogSubmitHandler::new();
        assert_eq!(handler.submitted, 0);
        handler.on_submit(&record());
        handler.on_submit(&record());
        assert_eq!(handler.submitted, 2);
    }

    #[test]
    fn test_mock_handler_sees_record() {
        let mut mock = MockSubmitHandler::new();
        mock.expect_on_submit()
            .withf(|r| r.name == "Aiko")
            .times(1)
            .return_const(());
        mock.on_submit(&record());
    }
}
