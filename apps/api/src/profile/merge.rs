//! Profile merger — pure, infallible combination of a `GitHubProfile` and an
//! `ExternalProfile`.
//!
//! Missing inputs never fail the merge: empty collections stay empty and
//! empty labels fall back to placeholders.

use std::collections::BTreeSet;

use crate::models::github::GitHubProfile;
use crate::models::linkedin::ExternalProfile;
use crate::models::profile::{TimelineEntry, UnifiedProfile};

const UNKNOWN: &str = "Unknown";
const GITHUB_TIMELINE_FOCUS: &str = "GitHub Project Created";

pub fn merge_profiles(github: &GitHubProfile, external: &ExternalProfile) -> UnifiedProfile {
    UnifiedProfile {
        name: or_unknown(&external.name),
        headline: external.headline.clone(),
        skills: merge_skills(github, external),
        timeline: merge_timeline(github, external),
        certifications: external.certifications.clone(),
        projects: github.projects.clone(),
    }
}

/// Exact-match union of professional skills and repository primary languages.
fn merge_skills(github: &GitHubProfile, external: &ExternalProfile) -> BTreeSet<String> {
    let languages = github
        .projects
        .iter()
        .flat_map(|repo| repo.languages.iter())
        .filter(|lang| !lang.is_empty());

    external.skills.iter().chain(languages).cloned().collect()
}

/// GitHub entries first, then experience entries, each in source order.
fn merge_timeline(github: &GitHubProfile, external: &ExternalProfile) -> Vec<TimelineEntry> {
    let from_github = github.timeline.iter().map(|entry| TimelineEntry {
        year: or_unknown(&entry.month),
        focus: GITHUB_TIMELINE_FOCUS.to_string(),
    });

    let from_experience = external.experience.iter().map(|job| TimelineEntry {
        year: or_unknown(&job.duration),
        focus: format!("{} @ {}", job.title, job.company),
    });

    from_github.chain(from_experience).collect()
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::github::{GitHubTimelineEntry, RepositoryRecord};
    use crate::models::linkedin::{Certification, Experience};

    fn repo(name: &str, language: Option<&str>) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            languages: language.map(str::to_string).into_iter().collect(),
            url: format!("https://github.com/octo/{name}"),
            ..Default::default()
        }
    }

    fn experience(title: &str, company: &str, duration: &str) -> Experience {
        Experience {
            title: title.to_string(),
            company: company.to_string(),
            duration: duration.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_skills_are_deduplicated_union() {
        let github = GitHubProfile {
            projects: vec![
                repo("a", Some("Python")),
                repo("b", Some("Rust")),
                repo("c", None),
                repo("d", Some("Python")),
            ],
            ..Default::default()
        };
        let external = ExternalProfile {
            skills: vec!["Python".to_string(), "Go".to_string()],
            ..Default::default()
        };

        let merged = merge_profiles(&github, &external);
        let expected: BTreeSet<String> = ["Python", "Go", "Rust"].into_iter().map(String::from).collect();
        assert_eq!(merged.skills, expected);
        assert_eq!(merged.skills.len(), 3);
    }

    #[test]
    fn test_skills_dedup_is_case_sensitive() {
        let github = GitHubProfile {
            projects: vec![repo("a", Some("python"))],
            ..Default::default()
        };
        let external = ExternalProfile {
            skills: vec!["Python".to_string()],
            ..Default::default()
        };

        let merged = merge_profiles(&github, &external);
        assert_eq!(merged.skills.len(), 2);
    }

    #[test]
    fn test_timeline_github_entries_come_first() {
        let github = GitHubProfile {
            timeline: vec![GitHubTimelineEntry {
                month: "March 2024".to_string(),
            }],
            ..Default::default()
        };
        let external = ExternalProfile {
            experience: vec![
                experience("Research Intern", "IIT Hyderabad", "May 2024 – July 2024"),
                experience("Teaching Assistant", "IIIT Bhopal", "Jan 2024 – Apr 2024"),
            ],
            ..Default::default()
        };

        let timeline = merge_profiles(&github, &external).timeline;
        assert_eq!(timeline.len(), 3);
        assert_eq!(
            timeline[0],
            TimelineEntry {
                year: "March 2024".to_string(),
                focus: "GitHub Project Created".to_string(),
            }
        );
        assert_eq!(timeline[1].focus, "Research Intern @ IIT Hyderabad");
        assert_eq!(timeline[1].year, "May 2024 – July 2024");
        assert_eq!(timeline[2].focus, "Teaching Assistant @ IIIT Bhopal");
    }

    #[test]
    fn test_missing_labels_fall_back_to_unknown() {
        let github = GitHubProfile {
            timeline: vec![GitHubTimelineEntry::default()],
            ..Default::default()
        };
        let external = ExternalProfile {
            experience: vec![experience("Engineer", "Acme", "")],
            ..Default::default()
        };

        let merged = merge_profiles(&github, &external);
        assert_eq!(merged.name, "Unknown");
        assert_eq!(merged.headline, "");
        assert_eq!(merged.timeline[0].year, "Unknown");
        assert_eq!(merged.timeline[1].year, "Unknown");
    }

    #[test]
    fn test_sparse_json_inputs_merge_without_error() {
        let github: GitHubProfile = serde_json::from_str(r#"{"username": "octo"}"#).unwrap();
        let external: ExternalProfile = serde_json::from_str("{}").unwrap();

        let merged = merge_profiles(&github, &external);
        assert!(merged.skills.is_empty());
        assert!(merged.timeline.is_empty());
        assert!(merged.certifications.is_empty());
        assert!(merged.projects.is_empty());
    }

    #[test]
    fn test_certifications_and_projects_pass_through() {
        let github = GitHubProfile {
            projects: vec![repo("a", Some("Rust")), repo("b", None)],
            ..Default::default()
        };
        let external = ExternalProfile {
            certifications: vec![Certification {
                name: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                year: "2023".to_string(),
            }],
            ..Default::default()
        };

        let merged = merge_profiles(&github, &external);
        assert_eq!(merged.projects, github.projects);
        assert_eq!(merged.certifications, external.certifications);
    }

    #[test]
    fn test_merge_is_byte_identical_across_calls() {
        let github = GitHubProfile {
            projects: vec![repo("a", Some("Rust")), repo("b", Some("Go")), repo("c", Some("C"))],
            ..Default::default()
        };
        let external = ExternalProfile {
            skills: vec!["Zig".to_string(), "Python".to_string(), "Go".to_string()],
            ..Default::default()
        };

        let first = serde_json::to_vec(&merge_profiles(&github, &external)).unwrap();
        let second = serde_json::to_vec(&merge_profiles(&github, &external)).unwrap();
        assert_eq!(first, second);
    }
}
