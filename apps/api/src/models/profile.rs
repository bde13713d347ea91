use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::github::RepositoryRecord;
use crate::models::linkedin::Certification;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub focus: String,
}

/// The merged view of a GitHub profile and a professional profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedProfile {
    pub name: String,
    pub headline: String,
    pub skills: BTreeSet<String>,
    pub timeline: Vec<TimelineEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<RepositoryRecord>,
}
