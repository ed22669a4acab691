use uuid::Uuid;

use crate::modules::content::application::domain::{
    entities::{Bullet, Certification, Education, Experience, Project, SkillCategory, SkillItem},
    sort_order::{sequential_ranks, IMPORT_BASE},
};
use crate::modules::content::application::ports::incoming::use_cases::{
    BulletImport, CertificationImport, EducationImport, ExperienceImport, ProjectImport,
    SkillCategoryImport, SkillItemImport,
};

// Payload entries become records with fresh ids. Text is stored as sent.

/// Pairs every element with its rank, starting at `IMPORT_BASE`.
pub(crate) fn ranked<T>(items: Vec<T>) -> impl Iterator<Item = (i32, T)> {
    let ranks = sequential_ranks(items.len(), IMPORT_BASE);
    ranks.into_iter().zip(items)
}

fn bullets(imports: Option<Vec<BulletImport>>) -> Vec<Bullet> {
    ranked(imports.unwrap_or_default())
        .map(|(sort_order, b)| Bullet {
            id: Uuid::new_v4(),
            content: b.content,
            sort_order,
        })
        .collect()
}

fn skills(imports: Option<Vec<SkillItemImport>>) -> Vec<SkillItem> {
    ranked(imports.unwrap_or_default())
        .map(|(sort_order, s)| SkillItem {
            id: Uuid::new_v4(),
            name: s.name,
            icon_url: s.icon_url,
            proficiency: s.proficiency,
            sort_order,
        })
        .collect()
}

pub(crate) fn experience(e: ExperienceImport, sort_order: i32) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        company: e.company,
        role: e.role,
        location: e.location,
        employment_type: e.employment_type,
        start_date: e.start_date,
        end_date: e.end_date,
        description: e.description,
        tech_stack: e.tech_stack,
        company_url: e.company_url,
        logo_url: e.logo_url,
        published: e.published,
        sort_order,
        bullets: bullets(e.bullets),
    }
}

pub(crate) fn project(p: ProjectImport, sort_order: i32) -> Project {
    Project {
        id: Uuid::new_v4(),
        slug: p.resolved_slug(),
        title: p.title,
        description: p.description,
        long_description: p.long_description,
        tech_stack: p.tech_stack,
        live_url: p.live_url,
        github_url: p.github_url,
        image_url: p.image_url,
        thumbnail_url: p.thumbnail_url,
        featured: p.featured,
        published: p.published,
        sort_order,
        bullets: bullets(p.bullets),
    }
}

pub(crate) fn skill_category(c: SkillCategoryImport, sort_order: i32) -> SkillCategory {
    SkillCategory {
        id: Uuid::new_v4(),
        name: c.name,
        icon: c.icon,
        published: c.published,
        sort_order,
        skills: skills(c.skills),
    }
}

pub(crate) fn education(e: EducationImport, sort_order: i32) -> Education {
    Education {
        id: Uuid::new_v4(),
        institution: e.institution,
        degree: e.degree,
        field_of_study: e.field_of_study,
        location: e.location,
        start_year: e.start_year,
        end_year: e.end_year,
        gpa: e.gpa,
        description: e.description,
        logo_url: e.logo_url,
        published: e.published,
        sort_order,
    }
}

pub(crate) fn certification(c: CertificationImport, sort_order: i32) -> Certification {
    Certification {
        id: Uuid::new_v4(),
        name: c.name,
        issuer: c.issuer,
        issue_date: c.issue_date,
        expiry_date: c.expiry_date,
        credential_id: c.credential_id,
        credential_url: c.credential_url,
        badge_url: c.badge_url,
        published: c.published,
        sort_order,
    }
}
