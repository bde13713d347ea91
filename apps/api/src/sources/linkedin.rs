//! Professional-profile source. There is no live integration yet: a single
//! known identifier resolves to a fixed profile, everything else is unknown.

use crate::models::linkedin::{Certification, Education, Experience, ExternalProfile};
use crate::sources::SourceError;

const KNOWN_USER_ID: &str = "dhruvi";

/// Looks up a professional profile by identifier (case-insensitive).
pub fn fetch_external_profile(user_id: &str) -> Result<ExternalProfile, SourceError> {
    if !user_id.eq_ignore_ascii_case(KNOWN_USER_ID) {
        return Err(SourceError::LinkedInUserNotFound);
    }
    Ok(known_profile())
}

fn known_profile() -> ExternalProfile {
    ExternalProfile {
        name: "Dhruvi Sharma".to_string(),
        headline: "AI/ML Enthusiast | ECE Undergrad at IIIT Bhopal".to_string(),
        location: "Bhopal, Madhya Pradesh, India".to_string(),
        about: "An Electronics and Communication Engineering student passionate about AI, \
                ML, and Deep Learning. Currently exploring the intersection of real-time \
                systems and machine intelligence through academic and hands-on projects."
            .to_string(),
        experience: vec![
            Experience {
                title: "Research Intern".to_string(),
                company: "IIT Hyderabad".to_string(),
                duration: "May 2024 – July 2024".to_string(),
                description: "Worked on a lightweight object detection model with YOLOv5 \
                              for drone-based surveillance."
                    .to_string(),
            },
            Experience {
                title: "Teaching Assistant - Fundamentals of Computer Programming".to_string(),
                company: "IIIT Bhopal".to_string(),
                duration: "Jan 2024 – Apr 2024".to_string(),
                description: "Mentored 100+ students, assisted with grading and project \
                              evaluations."
                    .to_string(),
            },
        ],
        education: vec![Education {
            degree: "B.Tech in Electronics and Communication Engineering".to_string(),
            institution: "IIIT Bhopal".to_string(),
            year: "2023 – 2027".to_string(),
            description: "Focus: AI systems, ML, digital systems, and embedded programming."
                .to_string(),
        }],
        skills: [
            "Python",
            "Machine Learning",
            "Deep Learning",
            "Data Structures",
            "Computer Vision",
            "FastAPI",
            "Git",
            "Linux",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        certifications: vec![
            Certification {
                name: "Google Cloud Certified – Associate Cloud Engineer".to_string(),
                issuer: "Google".to_string(),
                year: "2024".to_string(),
            },
            Certification {
                name: "Introduction to TensorFlow for AI".to_string(),
                issuer: "Coursera / DeepLearning.AI".to_string(),
                year: "2024".to_string(),
            },
        ],
    }
}
