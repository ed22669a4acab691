pub mod certifications;
pub mod contact_settings;
pub mod education;
pub mod experience_bullets;
pub mod experiences;
pub mod profile;
pub mod project_bullets;
pub mod projects;
pub mod skill_categories;
pub mod skill_items;
