use std::path::{Path, PathBuf};

use contracts::domain::log_record::LogRecord;
use thiserror::Error;

use super::repository::{self, NewLogRecord};

/// Records are written to the database in batches of this size.
const BATCH_SIZE: usize = 200;

/// Number of freshly extracted records returned to the caller as a sample.
const SAMPLE_SIZE: u64 = 6;

/// Failure modes of the extraction pipeline. The handler maps `NoLogs` to
/// 404 and the other two to 500; the display strings are the exact wire
/// messages, and only `Extraction` mentions the word "extract" (the client
/// discriminates the two 500s by that substring).
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("There was no logs to extract")]
    NoLogs,
    #[error("It was not possible to extract log records from file.")]
    Extraction(anyhow::Error),
    #[error("It was not possible to save log records in the database")]
    Persistence(anyhow::Error),
}

/// Scan the source directory, parse every file and persist the records.
///
/// Returns a sample of the newly saved records (the full set is read back
/// through `GET /logs`).
pub async fn extract_and_save(source_dir: &str) -> Result<Vec<LogRecord>, ExtractError> {
    let files = list_source_files(source_dir).map_err(ExtractError::Extraction)?;
    if files.is_empty() {
        return Err(ExtractError::NoLogs);
    }

    let mut records = Vec::new();
    for path in &files {
        let mut parsed = parse_log_file(path).map_err(ExtractError::Extraction)?;
        records.append(&mut parsed);
    }
    tracing::info!(
        "Extracted {} log records from {} files",
        records.len(),
        files.len()
    );

    let last_id_before = repository::max_id()
        .await
        .map_err(ExtractError::Persistence)?
        .unwrap_or(0);

    for batch in records.chunks(BATCH_SIZE) {
        repository::insert_batch(batch.to_vec())
            .await
            .map_err(ExtractError::Persistence)?;
    }

    repository::list_after(last_id_before, SAMPLE_SIZE)
        .await
        .map_err(ExtractError::Persistence)
}

pub async fn list_all() -> anyhow::Result<Vec<LogRecord>> {
    repository::list_all().await
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<LogRecord>> {
    repository::get_by_id(id).await
}

pub async fn delete_by_id(id: i32) -> anyhow::Result<bool> {
    repository::delete_by_id(id).await
}

pub async fn delete_all() -> anyhow::Result<u64> {
    repository::delete_all().await
}

// An unreadable or missing directory is a scan failure; only an existing
// directory with nothing in it counts as "no logs to extract".
fn list_source_files(dir: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn parse_log_file(path: &Path) -> anyhow::Result<Vec<NewLogRecord>> {
    let origin_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let contents = std::fs::read_to_string(path)?;

    let mut records = Vec::new();
    for line in contents.lines() {
        if line.is_empty() {
            continue;
        }
        records.push(parse_log_line(line, &origin_file)?);
    }
    Ok(records)
}

/// Parse one `;`-separated line: ip, date, hour, software name, version,
/// log id, title, description. Trailing extra fields are ignored.
fn parse_log_line(line: &str, origin_file: &str) -> anyhow::Result<NewLogRecord> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() < 8 {
        anyhow::bail!(
            "malformed log line in {}: expected 8 fields, got {}",
            origin_file,
            fields.len()
        );
    }

    Ok(NewLogRecord {
        ip_address: fields[0].to_string(),
        date: fields[1].to_string(),
        hour: fields[2].to_string(),
        software_name: fields[3].to_string(),
        version: fields[4].to_string(),
        log_id: fields[5].to_string(),
        title: fields[6].to_string(),
        description: fields[7].to_string(),
        origin_file: origin_file.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "224.191.78.71;01-Apr-2022;2:50:07.000;Konklab;4.42;871783207-1;Customer-focused responsive installation;eget tempus vel pede morbi porttitor";

    #[test]
    fn parses_eight_field_line() {
        let record = parse_log_line(LINE, "logs_1.txt").unwrap();
        assert_eq!(record.ip_address, "224.191.78.71");
        assert_eq!(record.date, "01-Apr-2022");
        assert_eq!(record.hour, "2:50:07.000");
        assert_eq!(record.software_name, "Konklab");
        assert_eq!(record.version, "4.42");
        assert_eq!(record.log_id, "871783207-1");
        assert_eq!(record.title, "Customer-focused responsive installation");
        assert_eq!(
            record.description,
            "eget tempus vel pede morbi porttitor"
        );
        assert_eq!(record.origin_file, "logs_1.txt");
    }

    #[test]
    fn rejects_short_line() {
        let err = parse_log_line("10.0.0.1;01-Apr-2022;2:50:07.000", "logs_1.txt").unwrap_err();
        assert!(err.to_string().contains("expected 8 fields"));
    }

    #[test]
    fn ignores_trailing_extra_fields() {
        let line = format!("{};extra", LINE);
        let record = parse_log_line(&line, "logs_1.txt").unwrap();
        assert_eq!(
            record.description,
            "eget tempus vel pede morbi porttitor"
        );
    }

    #[test]
    fn parses_file_and_tags_origin() {
        let dir = std::env::temp_dir().join(format!("log-parse-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("security_audit.txt");
        std::fs::write(&path, format!("{LINE}\n{LINE}\n\n")).unwrap();

        let records = parse_log_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.origin_file == "security_audit.txt"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn extraction_from_empty_source_dir_is_no_logs() {
        let dir = std::env::temp_dir().join(format!("log-extract-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let result = extract_and_save(dir.to_str().unwrap()).await;
        assert!(matches!(result, Err(ExtractError::NoLogs)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn extraction_from_missing_source_dir_is_a_scan_failure() {
        let result = extract_and_save("/nonexistent/path/for/logs").await;
        assert!(matches!(result, Err(ExtractError::Extraction(_))));
    }
}
