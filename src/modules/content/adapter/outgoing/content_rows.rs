use std::collections::HashMap;

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{NotSet, Set};
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    certifications, contact_settings, education, experience_bullets, experiences, profile,
    project_bullets, projects, skill_categories, skill_items,
};
use crate::modules::content::application::domain::entities::{
    Bullet, Certification, ContactSettings, Education, Experience, Profile, Project,
    SkillCategory, SkillItem,
};

// ============================================================================
// Child grouping
// ============================================================================

/// Groups already rank-ordered child rows under their parent id.
pub(super) fn group_by_parent<M, C>(
    rows: Vec<M>,
    parent_of: impl Fn(&M) -> Uuid,
    convert: impl Fn(M) -> C,
) -> HashMap<Uuid, Vec<C>> {
    let mut grouped: HashMap<Uuid, Vec<C>> = HashMap::new();
    for row in rows {
        grouped.entry(parent_of(&row)).or_default().push(convert(row));
    }
    grouped
}

// ============================================================================
// Model -> domain
// ============================================================================

pub(super) fn experience_bullet(model: experience_bullets::Model) -> Bullet {
    Bullet {
        id: model.id,
        content: model.content,
        sort_order: model.sort_order,
    }
}

pub(super) fn project_bullet(model: project_bullets::Model) -> Bullet {
    Bullet {
        id: model.id,
        content: model.content,
        sort_order: model.sort_order,
    }
}

pub(super) fn skill_item(model: skill_items::Model) -> SkillItem {
    SkillItem {
        id: model.id,
        name: model.name,
        icon_url: model.icon_url,
        proficiency: model.proficiency,
        sort_order: model.sort_order,
    }
}

pub(super) fn experience(model: experiences::Model, bullets: Vec<Bullet>) -> Experience {
    Experience {
        id: model.id,
        company: model.company,
        role: model.role,
        location: model.location,
        employment_type: model.employment_type,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        tech_stack: model.tech_stack,
        company_url: model.company_url,
        logo_url: model.logo_url,
        published: model.published,
        sort_order: model.sort_order,
        bullets,
    }
}

pub(super) fn project(model: projects::Model, bullets: Vec<Bullet>) -> Project {
    Project {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        long_description: model.long_description,
        tech_stack: model.tech_stack,
        live_url: model.live_url,
        github_url: model.github_url,
        image_url: model.image_url,
        thumbnail_url: model.thumbnail_url,
        featured: model.featured,
        published: model.published,
        sort_order: model.sort_order,
        bullets,
    }
}

pub(super) fn skill_category(model: skill_categories::Model, skills: Vec<SkillItem>) -> SkillCategory {
    SkillCategory {
        id: model.id,
        name: model.name,
        icon: model.icon,
        published: model.published,
        sort_order: model.sort_order,
        skills,
    }
}

impl From<education::Model> for Education {
    fn from(model: education::Model) -> Self {
        Education {
            id: model.id,
            institution: model.institution,
            degree: model.degree,
            field_of_study: model.field_of_study,
            location: model.location,
            start_year: model.start_year,
            end_year: model.end_year,
            gpa: model.gpa,
            description: model.description,
            logo_url: model.logo_url,
            published: model.published,
            sort_order: model.sort_order,
        }
    }
}

impl From<certifications::Model> for Certification {
    fn from(model: certifications::Model) -> Self {
        Certification {
            id: model.id,
            name: model.name,
            issuer: model.issuer,
            issue_date: model.issue_date,
            expiry_date: model.expiry_date,
            credential_id: model.credential_id,
            credential_url: model.credential_url,
            badge_url: model.badge_url,
            published: model.published,
            sort_order: model.sort_order,
        }
    }
}

impl From<profile::Model> for Profile {
    fn from(model: profile::Model) -> Self {
        Profile {
            id: model.id,
            name: model.name,
            title: model.title,
            tagline: model.tagline,
            bio: model.bio,
            avatar_url: model.avatar_url,
            resume_url: model.resume_url,
            email: model.email,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            twitter_url: model.twitter_url,
            nickname: model.nickname,
        }
    }
}

impl From<contact_settings::Model> for ContactSettings {
    fn from(model: contact_settings::Model) -> Self {
        ContactSettings {
            id: model.id,
            email: model.email,
            phone: model.phone,
            location: model.location,
            availability_status: model.availability_status,
            form_enabled: model.form_enabled,
            form_recipient: model.form_recipient,
            success_message: model.success_message,
        }
    }
}

// ============================================================================
// Domain -> active models
// ============================================================================

fn experience_row(e: &Experience, now: DateTimeWithTimeZone) -> experiences::ActiveModel {
    experiences::ActiveModel {
        id: Set(e.id),
        company: Set(e.company.clone()),
        role: Set(e.role.clone()),
        location: Set(e.location.clone()),
        employment_type: Set(e.employment_type.clone()),
        start_date: Set(e.start_date),
        end_date: Set(e.end_date),
        description: Set(e.description.clone()),
        tech_stack: Set(e.tech_stack.clone()),
        company_url: Set(e.company_url.clone()),
        logo_url: Set(e.logo_url.clone()),
        published: Set(e.published),
        sort_order: Set(e.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn experience_rows(
    items: &[Experience],
    now: DateTimeWithTimeZone,
) -> (Vec<experiences::ActiveModel>, Vec<experience_bullets::ActiveModel>) {
    let parents = items.iter().map(|e| experience_row(e, now)).collect();

    let children = items
        .iter()
        .flat_map(|e| {
            e.bullets.iter().map(move |b| experience_bullets::ActiveModel {
                id: Set(b.id),
                experience_id: Set(e.id),
                content: Set(b.content.clone()),
                sort_order: Set(b.sort_order),
                created_at: Set(now),
            })
        })
        .collect();

    (parents, children)
}

fn project_row(p: &Project, now: DateTimeWithTimeZone) -> projects::ActiveModel {
    projects::ActiveModel {
        id: Set(p.id),
        title: Set(p.title.clone()),
        slug: Set(p.slug.clone()),
        description: Set(p.description.clone()),
        long_description: Set(p.long_description.clone()),
        tech_stack: Set(p.tech_stack.clone()),
        live_url: Set(p.live_url.clone()),
        github_url: Set(p.github_url.clone()),
        image_url: Set(p.image_url.clone()),
        thumbnail_url: Set(p.thumbnail_url.clone()),
        featured: Set(p.featured),
        published: Set(p.published),
        sort_order: Set(p.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn project_rows(
    items: &[Project],
    now: DateTimeWithTimeZone,
) -> (Vec<projects::ActiveModel>, Vec<project_bullets::ActiveModel>) {
    let parents = items.iter().map(|p| project_row(p, now)).collect();

    let children = items
        .iter()
        .flat_map(|p| {
            p.bullets.iter().map(move |b| project_bullets::ActiveModel {
                id: Set(b.id),
                project_id: Set(p.id),
                content: Set(b.content.clone()),
                sort_order: Set(b.sort_order),
                created_at: Set(now),
            })
        })
        .collect();

    (parents, children)
}

fn skill_category_row(
    c: &SkillCategory,
    now: DateTimeWithTimeZone,
) -> skill_categories::ActiveModel {
    skill_categories::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        icon: Set(c.icon.clone()),
        published: Set(c.published),
        sort_order: Set(c.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn skill_category_rows(
    items: &[SkillCategory],
    now: DateTimeWithTimeZone,
) -> (Vec<skill_categories::ActiveModel>, Vec<skill_items::ActiveModel>) {
    let parents = items.iter().map(|c| skill_category_row(c, now)).collect();

    let children = items
        .iter()
        .flat_map(|c| {
            c.skills.iter().map(move |s| skill_items::ActiveModel {
                id: Set(s.id),
                category_id: Set(c.id),
                name: Set(s.name.clone()),
                icon_url: Set(s.icon_url.clone()),
                proficiency: Set(s.proficiency.clone()),
                sort_order: Set(s.sort_order),
                created_at: Set(now),
            })
        })
        .collect();

    (parents, children)
}

pub(super) fn education_row(e: &Education, now: DateTimeWithTimeZone) -> education::ActiveModel {
    education::ActiveModel {
        id: Set(e.id),
        institution: Set(e.institution.clone()),
        degree: Set(e.degree.clone()),
        field_of_study: Set(e.field_of_study.clone()),
        location: Set(e.location.clone()),
        start_year: Set(e.start_year),
        end_year: Set(e.end_year),
        gpa: Set(e.gpa.clone()),
        description: Set(e.description.clone()),
        logo_url: Set(e.logo_url.clone()),
        published: Set(e.published),
        sort_order: Set(e.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn certification_row(
    c: &Certification,
    now: DateTimeWithTimeZone,
) -> certifications::ActiveModel {
    certifications::ActiveModel {
        id: Set(c.id),
        name: Set(c.name.clone()),
        issuer: Set(c.issuer.clone()),
        issue_date: Set(c.issue_date),
        expiry_date: Set(c.expiry_date),
        credential_id: Set(c.credential_id.clone()),
        credential_url: Set(c.credential_url.clone()),
        badge_url: Set(c.badge_url.clone()),
        published: Set(c.published),
        sort_order: Set(c.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

// ============================================================================
// Domain -> update sets
// ============================================================================
//
// Key, rank and creation time are left out so an update never moves a row.

pub(super) fn experience_update(
    e: &Experience,
    now: DateTimeWithTimeZone,
) -> experiences::ActiveModel {
    experiences::ActiveModel {
        id: NotSet,
        sort_order: NotSet,
        created_at: NotSet,
        ..experience_row(e, now)
    }
}

pub(super) fn project_update(p: &Project, now: DateTimeWithTimeZone) -> projects::ActiveModel {
    projects::ActiveModel {
        id: NotSet,
        sort_order: NotSet,
        created_at: NotSet,
        ..project_row(p, now)
    }
}

pub(super) fn skill_category_update(
    c: &SkillCategory,
    now: DateTimeWithTimeZone,
) -> skill_categories::ActiveModel {
    skill_categories::ActiveModel {
        id: NotSet,
        sort_order: NotSet,
        created_at: NotSet,
        ..skill_category_row(c, now)
    }
}

pub(super) fn education_update(
    e: &Education,
    now: DateTimeWithTimeZone,
) -> education::ActiveModel {
    education::ActiveModel {
        id: NotSet,
        sort_order: NotSet,
        created_at: NotSet,
        ..education_row(e, now)
    }
}

pub(super) fn certification_update(
    c: &Certification,
    now: DateTimeWithTimeZone,
) -> certifications::ActiveModel {
    certifications::ActiveModel {
        id: NotSet,
        sort_order: NotSet,
        created_at: NotSet,
        ..certification_row(c, now)
    }
}

pub(super) fn profile_row(p: &Profile, now: DateTimeWithTimeZone) -> profile::ActiveModel {
    profile::ActiveModel {
        id: Set(p.id),
        name: Set(p.name.clone()),
        title: Set(p.title.clone()),
        tagline: Set(p.tagline.clone()),
        bio: Set(p.bio.clone()),
        avatar_url: Set(p.avatar_url.clone()),
        resume_url: Set(p.resume_url.clone()),
        email: Set(p.email.clone()),
        github_url: Set(p.github_url.clone()),
        linkedin_url: Set(p.linkedin_url.clone()),
        twitter_url: Set(p.twitter_url.clone()),
        nickname: Set(p.nickname.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn contact_settings_row(
    c: &ContactSettings,
    now: DateTimeWithTimeZone,
) -> contact_settings::ActiveModel {
    contact_settings::ActiveModel {
        id: Set(c.id),
        email: Set(c.email.clone()),
        phone: Set(c.phone.clone()),
        location: Set(c.location.clone()),
        availability_status: Set(c.availability_status.clone()),
        form_enabled: Set(c.form_enabled),
        form_recipient: Set(c.form_recipient.clone()),
        success_message: Set(c.success_message.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
