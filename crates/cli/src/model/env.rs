// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CI job metadata attached to each interpreted test.

use serde::{Deserialize, Serialize};

/// Job and pipeline identifiers of the CI run that produced a report.
///
/// Carried along for consumers of the JSON output; never part of identity
/// or merge decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiEnv {
    pub ip: String,
    pub pipeline_id: String,
    pub workflow_id: String,
    #[serde(rename = "name")]
    pub job_name: String,
    #[serde(rename = "id")]
    pub job_id: String,
    pub agent_type: String,
    pub agent_os_image: String,
    pub git_ref_type: String,
    pub git_ref_name: String,
    #[serde(rename = "ref_sha")]
    pub git_ref_sha: String,
}

impl CiEnv {
    /// Capture from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture through an arbitrary variable lookup. Missing variables read
    /// as empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let git_ref_type = var("SEMAPHORE_GIT_REF_TYPE");
        let (git_ref_name, git_ref_sha) = match git_ref_type.as_str() {
            "branch" | "tag" => (var("SEMAPHORE_GIT_BRANCH"), var("SEMAPHORE_GIT_SHA")),
            "pull-request" => (var("SEMAPHORE_GIT_PR_BRANCH"), var("SEMAPHORE_GIT_PR_SHA")),
            _ => (String::new(), String::new()),
        };

        Self {
            ip: var("IP"),
            pipeline_id: var("SEMAPHORE_PIPELINE_ID"),
            workflow_id: var("SEMAPHORE_WORKFLOW_ID"),
            job_name: var("SEMAPHORE_JOB_NAME"),
            job_id: var("SEMAPHORE_JOB_ID"),
            agent_type: var("SEMAPHORE_AGENT_MACHINE_TYPE"),
            agent_os_image: var("SEMAPHORE_AGENT_MACHINE_OS_IMAGE"),
            git_ref_type,
            git_ref_name,
            git_ref_sha,
        }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
