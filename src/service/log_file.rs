use super::converter::NormalizedLog;
use crate::Result;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

pub const LOG_DIR_NAME: &str = "logs";

const FIELDS: &str = "provider http-method status-code uri-path time-taken response-size cache-status";

pub fn write(log: &NormalizedLog, base_dir: &Path) -> Result<PathBuf> {
    write_at(log, base_dir, OffsetDateTime::now_utc())
}

/// Serializes a converted record into a fresh file under `base_dir`/logs and
/// returns its path. The directory is created on first use. Fields other than
/// provider are unquoted and space-delimited, downstream consumers expect that
/// exact layout even though values containing spaces can't be parsed back.
pub fn write_at(
    log: &NormalizedLog,
    base_dir: &Path,
    written_at: OffsetDateTime,
) -> Result<PathBuf> {
    let dir = base_dir.join(LOG_DIR_NAME);
    create_dir_all(&dir)?;
    let format = format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");
    let content = format!(
        "#Version: 1.0\n#Date: {date}\n#Fields: {FIELDS}\n\"{provider}\" {http_method} {status_code} {uri_path} {time_taken} {response_size} {cache_status}",
        date = written_at.format(&format)?,
        provider = log.provider,
        http_method = log.http_method,
        status_code = log.status_code,
        uri_path = log.uri_path,
        time_taken = log.time_taken,
        response_size = log.response_size,
        cache_status = log.cache_status,
    );
    let path = dir.join(format!("{}.txt", Uuid::new_v4()));
    // Single write call, a failure leaves no readable partial file
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::{write, write_at, LOG_DIR_NAME};
    use crate::service::converter::{NormalizedLog, PROVIDER};
    use crate::Result;
    use std::fs;
    use std::path::PathBuf;
    use time::macros::datetime;
    use uuid::Uuid;

    fn mock_log() -> NormalizedLog {
        NormalizedLog {
            provider: PROVIDER.into(),
            http_method: "GET".into(),
            status_code: 200,
            uri_path: "/robots.txt".into(),
            time_taken: 100,
            response_size: 312,
            cache_status: "HIT".into(),
            created_at: datetime!(2025-01-22 15:33:33 UTC),
        }
    }

    fn mock_base_dir() -> PathBuf {
        std::env::temp_dir().join(format!("cdnlog-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn creates_missing_log_dir() -> Result<()> {
        let base_dir = mock_base_dir();
        assert!(!base_dir.join(LOG_DIR_NAME).exists());
        let path = write(&mock_log(), &base_dir)?;
        assert!(base_dir.join(LOG_DIR_NAME).exists());
        assert!(path.exists());
        fs::remove_dir_all(&base_dir)?;
        Ok(())
    }

    #[test]
    fn file_layout() -> Result<()> {
        let base_dir = mock_base_dir();
        let path = write_at(&mock_log(), &base_dir, datetime!(2025-01-22 18:00:00 UTC))?;
        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(4, lines.len());
        assert_eq!("#Version: 1.0", lines[0]);
        assert_eq!("#Date: 22/01/2025 18:00:00", lines[1]);
        assert_eq!(
            "#Fields: provider http-method status-code uri-path time-taken response-size cache-status",
            lines[2]
        );
        assert_eq!("\"MINHA CDN\" GET 200 /robots.txt 100 312 HIT", lines[3]);
        fs::remove_dir_all(&base_dir)?;
        Ok(())
    }

    #[test]
    fn header_date_is_write_time_not_record_time() -> Result<()> {
        // The record's own created_at is 2025-01-22, the header still carries
        // the write-time date. That mismatch is part of the format.
        let base_dir = mock_base_dir();
        let path = write_at(&mock_log(), &base_dir, datetime!(2026-02-03 04:05:06 UTC))?;
        let content = fs::read_to_string(&path)?;
        assert!(content.contains("#Date: 03/02/2026 04:05:06"));
        fs::remove_dir_all(&base_dir)?;
        Ok(())
    }

    #[test]
    fn every_write_creates_a_new_file() -> Result<()> {
        let base_dir = mock_base_dir();
        let path_1 = write(&mock_log(), &base_dir)?;
        let path_2 = write(&mock_log(), &base_dir)?;
        assert_ne!(path_1, path_2);
        assert_eq!(2, fs::read_dir(base_dir.join(LOG_DIR_NAME))?.count());
        fs::remove_dir_all(&base_dir)?;
        Ok(())
    }
}
