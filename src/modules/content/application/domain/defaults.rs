//! Built-in content shown until (or instead of) a successful fetch.

use super::entities::{ContactInfo, Experience, PersonalInfo, Proficiency, Project, Skill};

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "John Doe".to_string(),
        title: "Frontend Developer".to_string(),
        bio: "I am a passionate frontend developer with experience in creating responsive and \
              user-friendly web applications. I enjoy working with modern technologies and \
              frameworks to build engaging digital experiences."
            .to_string(),
        profile_image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
        about_image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
    }
}

fn project(id: &str, title: &str, image: &str, description: &str, technologies: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: "#".to_string(),
        github_url: "#".to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-Commerce Platform",
            "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=400",
            "A modern e-commerce platform featuring user authentication, payment integration, and admin dashboard.",
            &["Rust", "Node.js", "MongoDB", "Stripe"],
        ),
        project(
            "2",
            "Task Management App",
            "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=400",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
            &["TypeScript", "Firebase", "Tailwind CSS"],
        ),
        project(
            "3",
            "Weather Dashboard",
            "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=400",
            "A responsive weather dashboard that displays current weather conditions and forecasts for multiple cities with beautiful visualizations.",
            &["Chart.js", "OpenWeather API", "CSS3"],
        ),
    ]
}

pub fn frontend_skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML", Proficiency::Experienced),
        Skill::new("CSS", Proficiency::Experienced),
        Skill::new("JavaScript", Proficiency::Intermediate),
        Skill::new("TypeScript", Proficiency::Intermediate),
        Skill::new("React", Proficiency::Intermediate),
        Skill::new("Tailwind CSS", Proficiency::Intermediate),
    ]
}

pub fn backend_skills() -> Vec<Skill> {
    vec![
        Skill::new("Node.js", Proficiency::Basic),
        Skill::new("Express.js", Proficiency::Basic),
        Skill::new("MongoDB", Proficiency::Basic),
        Skill::new("PostgreSQL", Proficiency::Basic),
        Skill::new("Git", Proficiency::Intermediate),
        Skill::new("REST APIs", Proficiency::Intermediate),
    ]
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        email: "john.doe@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "New York, NY".to_string(),
    }
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            position: "Senior Frontend Developer".to_string(),
            start_date: "2022-01".to_string(),
            end_date: None,
            description: "Led the development of multiple web applications, mentored junior \
                          developers, and implemented practices for code quality and performance."
                .to_string(),
            technologies: ["TypeScript", "RxJS", "Jest"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        },
        Experience {
            id: "2".to_string(),
            company: "Digital Agency Co.".to_string(),
            position: "Full Stack Developer".to_string(),
            start_date: "2020-06".to_string(),
            end_date: Some("2021-12".to_string()),
            description: "Developed and maintained web applications, collaborated with design \
                          teams to implement responsive UI/UX."
                .to_string(),
            technologies: ["Node.js", "Express", "MongoDB", "AWS"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        },
    ]
}
