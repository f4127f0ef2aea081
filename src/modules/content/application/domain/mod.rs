pub mod defaults;
pub mod entities;

pub use entities::{
    ContactInfo, Experience, PersonalInfo, Proficiency, Project, ProjectDraft, Skill,
    SkillLevel, SkillListExt, SkillSet,
};
