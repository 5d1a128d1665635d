use contracts::domain::log_record::LogRecord;

/// The three mutually exclusive rendering modes of the page.
///
/// A pure function of the loading flag and the current record collection;
/// transitions happen only because the orchestrator mutates those two
/// inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    EmptyPrompt,
    Table(Vec<LogRecord>),
}

impl ViewState {
    /// Precedence: loading wins over everything, then the empty prompt,
    /// then the populated table.
    pub fn derive(loading: bool, logs: &[LogRecord]) -> Self {
        if loading {
            ViewState::Loading
        } else if logs.is_empty() {
            ViewState::EmptyPrompt
        } else {
            ViewState::Table(logs.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> LogRecord {
        LogRecord {
            id: id.to_string(),
            ip_address: "224.191.78.71".to_string(),
            date: "01-Apr-2022".to_string(),
            hour: "2:50:07.000".to_string(),
            software_name: "Konklab".to_string(),
            version: "4.42".to_string(),
            log_id: "871783207-1".to_string(),
            title: "Customer-focused responsive installation".to_string(),
            description: "eget tempus vel pede".to_string(),
            origin_file: "logs_1.txt".to_string(),
        }
    }

    #[test]
    fn loading_wins_regardless_of_log_contents() {
        assert_eq!(ViewState::derive(true, &[]), ViewState::Loading);
        assert_eq!(ViewState::derive(true, &[record("1")]), ViewState::Loading);
    }

    #[test]
    fn empty_collection_shows_the_prompt() {
        assert_eq!(ViewState::derive(false, &[]), ViewState::EmptyPrompt);
    }

    #[test]
    fn populated_collection_shows_the_table_in_order() {
        let logs = vec![record("2"), record("1"), record("3")];
        match ViewState::derive(false, &logs) {
            ViewState::Table(rows) => {
                let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, ["2", "1", "3"]);
            }
            other => panic!("expected Table, got {:?}", other),
        }
    }
}
