use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    Bullet, Certification, ContactSettings, Education, Experience, Profile, Project,
    SkillCategory, SkillItem,
};

use super::in_memory_store::ContentState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn bullet(content: &str, sort_order: i32) -> Bullet {
    Bullet {
        id: Uuid::new_v4(),
        content: content.to_string(),
        sort_order,
    }
}

pub fn skill(name: &str, sort_order: i32) -> SkillItem {
    SkillItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        icon_url: None,
        proficiency: None,
        sort_order,
    }
}

pub fn experience(company: &str, sort_order: i32) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        company: company.to_string(),
        role: "Engineer".to_string(),
        location: None,
        employment_type: None,
        start_date: date(2020, 1, 1),
        end_date: None,
        description: None,
        tech_stack: None,
        company_url: None,
        logo_url: None,
        published: true,
        sort_order,
        bullets: Vec::new(),
    }
}

pub fn project(title: &str, sort_order: i32) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: crate::modules::content::application::domain::slug::slugify(title),
        description: None,
        long_description: None,
        tech_stack: None,
        live_url: None,
        github_url: None,
        image_url: None,
        thumbnail_url: None,
        featured: false,
        published: true,
        sort_order,
        bullets: Vec::new(),
    }
}

pub fn education(institution: &str, sort_order: i32) -> Education {
    Education {
        id: Uuid::new_v4(),
        institution: institution.to_string(),
        degree: "BSc".to_string(),
        field_of_study: None,
        location: None,
        start_year: 2014,
        end_year: Some(2018),
        gpa: None,
        description: None,
        logo_url: None,
        published: true,
        sort_order,
    }
}

pub fn certification(name: &str, sort_order: i32) -> Certification {
    Certification {
        id: Uuid::new_v4(),
        name: name.to_string(),
        issuer: "Issuer".to_string(),
        issue_date: date(2022, 6, 1),
        expiry_date: None,
        credential_id: None,
        credential_url: None,
        badge_url: None,
        published: true,
        sort_order,
    }
}

pub fn skill_category(name: &str, sort_order: i32, skills: Vec<SkillItem>) -> SkillCategory {
    SkillCategory {
        id: Uuid::new_v4(),
        name: name.to_string(),
        icon: None,
        published: true,
        sort_order,
        skills,
    }
}

pub fn profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        title: "Engineer".to_string(),
        tagline: None,
        bio: Some("Writes programs".to_string()),
        avatar_url: None,
        resume_url: None,
        email: Some("ada@example.com".to_string()),
        github_url: None,
        linkedin_url: None,
        twitter_url: None,
        nickname: Some("ada".to_string()),
    }
}

pub fn contact_settings() -> ContactSettings {
    ContactSettings {
        id: Uuid::new_v4(),
        email: "hello@example.com".to_string(),
        phone: None,
        location: None,
        availability_status: Some("open".to_string()),
        form_enabled: true,
        form_recipient: None,
        success_message: None,
    }
}

/// Three experiences ranked 0, 1, 2 (scenario used by most reorder tests).
pub fn three_experiences() -> (ContentState, Vec<Uuid>) {
    let experiences = vec![
        experience("A", 0),
        experience("B", 1),
        experience("C", 2),
    ];
    let ids = experiences.iter().map(|e| e.id).collect();
    (
        ContentState {
            experiences,
            ..Default::default()
        },
        ids,
    )
}
