use crate::models::ScoredCampground;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Append-only daily log of search interactions
///
/// One file per local day (`log_YYYY-MM-DD.txt`), one line per query, with
/// the matched campground ids, locations and scores. This is product-level
/// history kept alongside the data files, separate from application logging.
pub struct InteractionLog {
    dir: PathBuf,
}

impl InteractionLog {
    /// Open the log directory, creating it if missing
    pub async fn open<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Record one interaction
    pub async fn record(
        &self,
        username: &str,
        query: &str,
        results: &[ScoredCampground],
    ) -> std::io::Result<()> {
        let now = chrono::Local::now();
        let path = self.dir.join(format!("log_{}.txt", now.format("%Y-%m-%d")));

        let summary = results
            .iter()
            .map(|result| {
                format!(
                    "{} ({}) - Score: {}",
                    result.campground.id, result.campground.location, result.score
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        let line = format!(
            "{} | User: {} | Query: {} | Matches: {}\n",
            now.format("%Y-%m-%d %H:%M:%S"),
            username,
            query,
            summary
        );

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampStatus, CampgroundRecord};

    fn scored(id: &str, location: &str, score: f64) -> ScoredCampground {
        ScoredCampground {
            campground: CampgroundRecord {
                id: id.to_string(),
                name: format!("Camp {}", id),
                location: location.to_string(),
                lodging_type: "Tent".to_string(),
                activities: vec![],
                amenities: vec![],
                status: CampStatus::Active,
                owner_id: "owner".to_string(),
                bookings: vec![],
            },
            score,
        }
    }

    #[tokio::test]
    async fn test_record_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = InteractionLog::open(dir.path().join("logs")).await.unwrap();

        log.record("meera", "tent in kerala", &[scored("C1", "Kerala", 6.0)])
            .await
            .unwrap();
        log.record("meera", "cabin with wi-fi", &[]).await.unwrap();

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let contents =
            std::fs::read_to_string(dir.path().join("logs").join(format!("log_{}.txt", today)))
                .unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("User: meera"));
        assert!(lines[0].contains("Query: tent in kerala"));
        assert!(lines[0].contains("C1 (Kerala) - Score: 6"));
        assert!(lines[1].ends_with("Matches: "));
    }
}
