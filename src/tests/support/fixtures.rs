use serde_json::{json, Value};

use crate::auth::application::domain::entities::User;
use crate::content::application::domain::entities::{
    ContactInfo, PersonalInfo, Proficiency, ProjectDraft, Skill,
};

pub fn sample_user() -> User {
    User {
        id: "u-1".to_string(),
        email: "jane@example.com".to_string(),
        name: "Jane Roe".to_string(),
    }
}

pub fn login_payload(token: &str) -> Value {
    json!({
        "user": { "id": "u-1", "email": "jane@example.com", "name": "Jane Roe" },
        "token": token,
    })
}

pub fn verify_payload() -> Value {
    json!({
        "user": { "id": "u-1", "email": "jane@example.com", "name": "Jane Roe" }
    })
}

pub fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Jane Roe".to_string(),
        title: "Systems Engineer".to_string(),
        bio: "Builds things in Rust.".to_string(),
        profile_image: "https://img.example.com/jane.jpg".to_string(),
        about_image: "https://img.example.com/about.jpg".to_string(),
    }
}

pub fn sample_contact_info() -> ContactInfo {
    ContactInfo {
        email: "jane@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        location: "London, UK".to_string(),
    }
}

pub fn sample_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        image: format!("https://img.example.com/{}.png", title.to_lowercase()),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string(), "Tokio".to_string()],
        live_url: "#".to_string(),
        github_url: "#".to_string(),
    }
}

pub fn skill(name: &str) -> Skill {
    Skill::new(name, Proficiency::Intermediate)
}
