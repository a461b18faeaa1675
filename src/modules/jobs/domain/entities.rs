/// Background job queue entities.
///
/// Jobs refresh catalog records from the external metadata provider; they
/// are queued in the database and drained by the polling worker.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job status stored in the queue table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "running" => Ok(JobStatus::Running),
            "completed" => Ok(JobStatus::Completed),
            "failed" => Ok(JobStatus::Failed),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    UpdateAnime,
    UpdateSeiyuu,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::UpdateAnime => write!(f, "update_anime"),
            JobType::UpdateSeiyuu => write!(f, "update_seiyuu"),
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "update_anime" => Ok(JobType::UpdateAnime),
            "update_seiyuu" => Ok(JobType::UpdateSeiyuu),
            _ => Err(format!("Invalid job type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAnimePayload {
    pub anime_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSeiyuuPayload {
    pub seiyuu_id: Uuid,
}

/// New job to be queued (before insertion to database)
#[derive(Debug, Clone)]
pub struct Job {
    pub job_type: JobType,
    pub payload: serde_json::Value,
    pub priority: i32,
}

impl Job {
    pub fn update_anime(anime_id: Uuid, priority: i32) -> Self {
        let payload = UpdateAnimePayload { anime_id };
        Self {
            job_type: JobType::UpdateAnime,
            payload: serde_json::to_value(payload).unwrap(),
            priority,
        }
    }

    pub fn update_seiyuu(seiyuu_id: Uuid, priority: i32) -> Self {
        let payload = UpdateSeiyuuPayload { seiyuu_id };
        Self {
            job_type: JobType::UpdateSeiyuu,
            payload: serde_json::to_value(payload).unwrap(),
            priority,
        }
    }
}

/// Job record from database (with queue metadata)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub job_type: String,
    pub payload: serde_json::Value,
    pub priority: i32,
    pub status: String,
    pub attempts: i32,
    pub max_attempts: i32,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl JobRecord {
    pub fn parse_job_type(&self) -> Result<JobType, String> {
        self.job_type.parse()
    }

    pub fn parse_status(&self) -> Result<JobStatus, String> {
        self.status.parse()
    }

    pub fn can_retry(&self) -> bool {
        self.attempts < self.max_attempts
    }

    pub fn parse_update_anime_payload(&self) -> Result<UpdateAnimePayload, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }

    pub fn parse_update_seiyuu_payload(&self) -> Result<UpdateSeiyuuPayload, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_round_trips_through_strings() {
        assert_eq!(JobStatus::Pending.to_string(), "pending");
        assert_eq!("RUNNING".parse::<JobStatus>().unwrap(), JobStatus::Running);
        assert!("paused".parse::<JobStatus>().is_err());
    }

    #[test]
    fn job_type_round_trips_through_strings() {
        assert_eq!(JobType::UpdateAnime.to_string(), "update_anime");
        assert_eq!(
            "update_seiyuu".parse::<JobType>().unwrap(),
            JobType::UpdateSeiyuu
        );
        assert!("reindex".parse::<JobType>().is_err());
    }

    #[test]
    fn update_anime_job_carries_the_anime_id() {
        let anime_id = Uuid::new_v4();
        let job = Job::update_anime(anime_id, 5);

        assert_eq!(job.job_type, JobType::UpdateAnime);
        assert_eq!(job.priority, 5);

        let payload: UpdateAnimePayload = serde_json::from_value(job.payload).unwrap();
        assert_eq!(payload.anime_id, anime_id);
    }

    #[test]
    fn retry_stops_at_max_attempts() {
        let job = JobRecord {
            id: Uuid::new_v4(),
            job_type: "update_anime".to_string(),
            payload: serde_json::json!({"anime_id": Uuid::new_v4()}),
            priority: 5,
            status: "failed".to_string(),
            attempts: 2,
            max_attempts: 3,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            error: Some("timeout".to_string()),
        };

        assert!(job.can_retry());

        let exhausted = JobRecord { attempts: 3, ..job };
        assert!(!exhausted.can_retry());
    }

    #[test]
    fn payloads_parse_from_record_json() {
        let seiyuu_id = Uuid::new_v4();
        let record = JobRecord {
            id: Uuid::new_v4(),
            job_type: "update_seiyuu".to_string(),
            payload: serde_json::json!({"seiyuu_id": seiyuu_id}),
            priority: 1,
            status: "pending".to_string(),
            attempts: 0,
            max_attempts: 3,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            error: None,
        };

        assert_eq!(record.parse_job_type().unwrap(), JobType::UpdateSeiyuu);
        assert_eq!(record.parse_status().unwrap(), JobStatus::Pending);
        assert_eq!(record.parse_update_seiyuu_payload().unwrap().seiyuu_id, seiyuu_id);
    }
}
