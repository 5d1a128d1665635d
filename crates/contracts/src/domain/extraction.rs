use crate::domain::log_record::{ErrorResponse, LogListResponse, LogRecord};

/// Result of a `POST /logs/extract` call, classified from the raw response.
///
/// The backend distinguishes its two 500 failure modes only by the response
/// message: a message mentioning the extraction phase means the file scan
/// failed, anything else means the database write failed. That substring
/// contract is kept here, in one place, so a future structured error code
/// needs a single change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// 200 with a record collection: extraction ran and records were saved.
    Success(Vec<LogRecord>),
    /// 404: the source directory had nothing to extract.
    EmptyWarning,
    /// 500 with a message mentioning "extract": the file scan failed.
    ExtractionFailure,
    /// 500 with any other message: records could not be persisted.
    PersistenceFailure,
    /// Unexpected status or unreadable body; also used by callers for
    /// network-level failures (timeout, refused connection).
    TransportFailure,
}

impl ExtractionOutcome {
    /// Classify an extraction response from its status code and body text.
    ///
    /// Total over all inputs; never panics on malformed bodies.
    pub fn classify(status: u16, body: &str) -> Self {
        match status {
            200 => match serde_json::from_str::<LogListResponse>(body) {
                Ok(list) => Self::Success(list.data),
                Err(_) => Self::TransportFailure,
            },
            404 => Self::EmptyWarning,
            500 => match serde_json::from_str::<ErrorResponse>(body) {
                Ok(err) if err.message.contains("extract") => Self::ExtractionFailure,
                Ok(_) => Self::PersistenceFailure,
                Err(_) => Self::TransportFailure,
            },
            _ => Self::TransportFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> String {
        format!(
            r#"{{"id":"{id}","ip_address":"10.0.0.1","date":"01-Apr-2022","hour":"2:50:07.000",
                "software_name":"Konklab","version":"4.42","log_id":"871783207-1",
                "title":"t","description":"d","origin_file":"logs_1.txt"}}"#
        )
    }

    #[test]
    fn status_200_with_records_is_success() {
        let body = format!(r#"{{"data":[{},{},{}]}}"#, record("1"), record("2"), record("3"));
        match ExtractionOutcome::classify(200, &body) {
            ExtractionOutcome::Success(logs) => {
                assert_eq!(logs.len(), 3);
                assert_eq!(logs[0].id, "1");
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn status_200_with_garbage_body_is_transport_failure() {
        assert_eq!(
            ExtractionOutcome::classify(200, "<html>bad gateway</html>"),
            ExtractionOutcome::TransportFailure
        );
    }

    #[test]
    fn status_404_is_empty_warning() {
        assert_eq!(
            ExtractionOutcome::classify(404, r#"{"message":"There was no logs to extract"}"#),
            ExtractionOutcome::EmptyWarning
        );
    }

    #[test]
    fn status_500_mentioning_extract_is_extraction_failure() {
        assert_eq!(
            ExtractionOutcome::classify(500, r#"{"message":"Error while extract logs"}"#),
            ExtractionOutcome::ExtractionFailure
        );
    }

    #[test]
    fn status_500_with_other_message_is_persistence_failure() {
        assert_eq!(
            ExtractionOutcome::classify(500, r#"{"message":"Error saving to DB"}"#),
            ExtractionOutcome::PersistenceFailure
        );
    }

    #[test]
    fn status_500_with_unreadable_body_is_transport_failure() {
        // The substring sniff applies only to a parsed message; a body
        // that is not the error envelope is a malformed response.
        assert_eq!(
            ExtractionOutcome::classify(500, "not json"),
            ExtractionOutcome::TransportFailure
        );
    }

    #[test]
    fn unexpected_status_is_transport_failure() {
        assert_eq!(
            ExtractionOutcome::classify(502, ""),
            ExtractionOutcome::TransportFailure
        );
        assert_eq!(
            ExtractionOutcome::classify(301, "{}"),
            ExtractionOutcome::TransportFailure
        );
    }
}
