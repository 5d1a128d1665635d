use serde::{Deserialize, Serialize};

/// One security-event row as the backend serializes it.
///
/// Every field is an opaque string supplied by the backend; the client
/// performs no validation beyond date reformatting for display. `id` is
/// unique within a collection and is used as the table row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub ip_address: String,
    /// Calendar date of the event, `dd-Mon-yyyy` (e.g. `01-Apr-2022`).
    pub date: String,
    /// Time of day, `h:mm:ss.xxx`.
    pub hour: String,
    pub software_name: String,
    pub version: String,
    pub log_id: String,
    pub title: String,
    pub description: String,
    pub origin_file: String,
}

/// Envelope of `GET /logs` and the success branch of `POST /logs/extract`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogListResponse {
    pub data: Vec<LogRecord>,
}

/// Envelope of a single-record response (`GET /log/:id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecordResponse {
    pub data: LogRecord,
}

/// Envelope of the 404/500 branches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_envelope() {
        let body = r#"{
            "data": [{
                "id": "78331",
                "ip_address": "224.191.78.71",
                "date": "01-Apr-2022",
                "hour": "2:50:07.000",
                "software_name": "Konklab",
                "version": "4.42",
                "log_id": "871783207-1",
                "title": "Customer-focused responsive installation",
                "description": "eget tempus vel pede morbi porttitor",
                "origin_file": "logs_1.txt"
            }]
        }"#;

        let parsed: LogListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].id, "78331");
        assert_eq!(parsed.data[0].software_name, "Konklab");
        assert_eq!(parsed.data[0].origin_file, "logs_1.txt");
    }

    #[test]
    fn deserializes_error_envelope() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"message": "There was no logs to extract"}"#).unwrap();
        assert_eq!(parsed.message, "There was no logs to extract");
    }
}
