use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

/// `GET /api/jobs` answers either with a bare array or with `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobsPayload {
    List(Vec<JobPosting>),
    Envelope {
        #[serde(default)]
        data: Option<Vec<JobPosting>>,
    },
}

impl JobsPayload {
    pub fn into_jobs(self) -> Vec<JobPosting> {
        match self {
            JobsPayload::List(jobs) => jobs,
            JobsPayload::Envelope { data } => data.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_envelope_and_bare_list() {
        let envelope: JobsPayload =
            serde_json::from_value(json!({ "data": [{ "id": "1", "title": "Test Job" }] })).unwrap();
        assert_eq!(envelope.into_jobs().len(), 1);

        let list: JobsPayload = serde_json::from_value(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(list.into_jobs().len(), 2);

        let empty: JobsPayload = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(empty.into_jobs().is_empty());
    }

    #[test]
    fn one_sparse_posting_does_not_sink_the_list() {
        let list: JobsPayload = serde_json::from_value(json!([
            { "id": "1", "title": "Dev", "company": null, "url": "https://x" },
            { "id": 2, "title": "QA", "company": "Acme", "url": "https://y" }
        ]))
        .unwrap();
        let jobs = list.into_jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "");
        assert_eq!(jobs[1].id, "2");
    }
}
