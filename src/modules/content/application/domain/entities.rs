use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

/// A top-level, orderable and publishable content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListSection {
    Experience,
    Project,
    Education,
    Certification,
    SkillCategory,
}

impl ListSection {
    pub const ALL: [ListSection; 5] = [
        ListSection::Experience,
        ListSection::Project,
        ListSection::Education,
        ListSection::Certification,
        ListSection::SkillCategory,
    ];

    pub fn table(self) -> &'static str {
        match self {
            ListSection::Experience => "experiences",
            ListSection::Project => "projects",
            ListSection::Education => "education",
            ListSection::Certification => "certifications",
            ListSection::SkillCategory => "skill_categories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListSection::Experience => "experience",
            ListSection::Project => "project",
            ListSection::Education => "education",
            ListSection::Certification => "certification",
            ListSection::SkillCategory => "skill category",
        }
    }

    /// Child collection owned by rows of this section, if any.
    pub fn children(self) -> Option<ChildCollection> {
        match self {
            ListSection::Experience => Some(ChildCollection::ExperienceBullets),
            ListSection::Project => Some(ChildCollection::ProjectBullets),
            ListSection::SkillCategory => Some(ChildCollection::SkillItems),
            ListSection::Education | ListSection::Certification => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListSection::Experience => "Experience",
            ListSection::Project => "Project",
            ListSection::Education => "Education",
            ListSection::Certification => "Certification",
            ListSection::SkillCategory => "Skill category",
        }
    }

    pub fn path_segment(self) -> &'static str {
        match self {
            ListSection::Experience => "experience",
            ListSection::Project => "projects",
            ListSection::Education => "education",
            ListSection::Certification => "certifications",
            ListSection::SkillCategory => "skill-categories",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.path_segment() == segment)
    }
}

impl fmt::Display for ListSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A per-parent ordered child table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildCollection {
    ExperienceBullets,
    ProjectBullets,
    SkillItems,
}

impl ChildCollection {
    pub fn table(self) -> &'static str {
        match self {
            ChildCollection::ExperienceBullets => "experience_bullets",
            ChildCollection::ProjectBullets => "project_bullets",
            ChildCollection::SkillItems => "skill_items",
        }
    }

    pub fn parent_column(self) -> &'static str {
        match self {
            ChildCollection::ExperienceBullets => "experience_id",
            ChildCollection::ProjectBullets => "project_id",
            ChildCollection::SkillItems => "category_id",
        }
    }

    pub fn parent(self) -> ListSection {
        match self {
            ChildCollection::ExperienceBullets => ListSection::Experience,
            ChildCollection::ProjectBullets => ListSection::Project,
            ChildCollection::SkillItems => ListSection::SkillCategory,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChildCollection::ExperienceBullets | ChildCollection::ProjectBullets => "bullet",
            ChildCollection::SkillItems => "skill item",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChildCollection::ExperienceBullets | ChildCollection::ProjectBullets => "Bullet",
            ChildCollection::SkillItems => "Skill item",
        }
    }
}

/// The collection a reorder request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderTarget {
    Section(ListSection),
    SkillItems { category_id: Uuid },
}

impl ReorderTarget {
    pub fn label(self) -> &'static str {
        match self {
            ReorderTarget::Section(section) => section.label(),
            ReorderTarget::SkillItems { .. } => ChildCollection::SkillItems.label(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Rank rows
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRow {
    pub id: Uuid,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRow {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub sort_order: i32,
}

/// Anything the reorder validator can resolve by id.
pub trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for RankedRow {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for ChildRow {
    fn id(&self) -> Uuid {
        self.id
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bullet {
    pub id: Uuid,
    pub content: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillItem {
    pub id: Uuid,
    pub name: String,
    pub icon_url: Option<String>,
    pub proficiency: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub company_url: Option<String>,
    pub logo_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub tech_stack: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub published: bool,
    pub sort_order: i32,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub badge_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactSettings {
    pub id: Uuid,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability_status: Option<String>,
    pub form_enabled: bool,
    pub form_recipient: Option<String>,
    pub success_message: Option<String>,
}

/// Rows of one list section, children embedded and ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionItems {
    Experiences(Vec<Experience>),
    Projects(Vec<Project>),
    Education(Vec<Education>),
    Certifications(Vec<Certification>),
    SkillCategories(Vec<SkillCategory>),
}

impl SectionItems {
    pub fn empty(section: ListSection) -> Self {
        match section {
            ListSection::Experience => SectionItems::Experiences(Vec::new()),
            ListSection::Project => SectionItems::Projects(Vec::new()),
            ListSection::Education => SectionItems::Education(Vec::new()),
            ListSection::Certification => SectionItems::Certifications(Vec::new()),
            ListSection::SkillCategory => SectionItems::SkillCategories(Vec::new()),
        }
    }

    pub fn section(&self) -> ListSection {
        match self {
            SectionItems::Experiences(_) => ListSection::Experience,
            SectionItems::Projects(_) => ListSection::Project,
            SectionItems::Education(_) => ListSection::Education,
            SectionItems::Certifications(_) => ListSection::Certification,
            SectionItems::SkillCategories(_) => ListSection::SkillCategory,
        }
    }

    pub fn ranks(&self) -> Vec<RankedRow> {
        fn collect<T>(items: &[T], f: impl Fn(&T) -> (Uuid, i32)) -> Vec<RankedRow> {
            items
                .iter()
                .map(|item| {
                    let (id, sort_order) = f(item);
                    RankedRow { id, sort_order }
                })
                .collect()
        }

        match self {
            SectionItems::Experiences(items) => collect(items, |i| (i.id, i.sort_order)),
            SectionItems::Projects(items) => collect(items, |i| (i.id, i.sort_order)),
            SectionItems::Education(items) => collect(items, |i| (i.id, i.sort_order)),
            SectionItems::Certifications(items) => collect(items, |i| (i.id, i.sort_order)),
            SectionItems::SkillCategories(items) => collect(items, |i| (i.id, i.sort_order)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SectionItems::Experiences(items) => items.len(),
            SectionItems::Projects(items) => items.len(),
            SectionItems::Education(items) => items.len(),
            SectionItems::Certifications(items) => items.len(),
            SectionItems::SkillCategories(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One row of a list section, children embedded and ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionRecord {
    Experience(Experience),
    Project(Project),
    Education(Education),
    Certification(Certification),
    SkillCategory(SkillCategory),
}

impl SectionRecord {
    pub fn section(&self) -> ListSection {
        match self {
            SectionRecord::Experience(_) => ListSection::Experience,
            SectionRecord::Project(_) => ListSection::Project,
            SectionRecord::Education(_) => ListSection::Education,
            SectionRecord::Certification(_) => ListSection::Certification,
            SectionRecord::SkillCategory(_) => ListSection::SkillCategory,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            SectionRecord::Experience(e) => e.id,
            SectionRecord::Project(p) => p.id,
            SectionRecord::Education(e) => e.id,
            SectionRecord::Certification(c) => c.id,
            SectionRecord::SkillCategory(c) => c.id,
        }
    }

    pub fn sort_order(&self) -> i32 {
        match self {
            SectionRecord::Experience(e) => e.sort_order,
            SectionRecord::Project(p) => p.sort_order,
            SectionRecord::Education(e) => e.sort_order,
            SectionRecord::Certification(c) => c.sort_order,
            SectionRecord::SkillCategory(c) => c.sort_order,
        }
    }
}

/// A list-section row that owns a child collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParentRecord {
    Experience(Experience),
    Project(Project),
    SkillCategory(SkillCategory),
}

impl ParentRecord {
    pub fn id(&self) -> Uuid {
        match self {
            ParentRecord::Experience(e) => e.id,
            ParentRecord::Project(p) => p.id,
            ParentRecord::SkillCategory(c) => c.id,
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            ParentRecord::Experience(e) => e.bullets.len(),
            ParentRecord::Project(p) => p.bullets.len(),
            ParentRecord::SkillCategory(c) => c.skills.len(),
        }
    }

    pub fn child_rows(&self) -> Vec<ChildRow> {
        let parent_id = self.id();
        let ranks: Vec<(Uuid, i32)> = match self {
            ParentRecord::Experience(e) => e.bullets.iter().map(|b| (b.id, b.sort_order)).collect(),
            ParentRecord::Project(p) => p.bullets.iter().map(|b| (b.id, b.sort_order)).collect(),
            ParentRecord::SkillCategory(c) => {
                c.skills.iter().map(|s| (s.id, s.sort_order)).collect()
            }
        };

        ranks
            .into_iter()
            .map(|(id, sort_order)| ChildRow {
                id,
                parent_id,
                sort_order,
            })
            .collect()
    }

    /// Current content of one child, if this parent owns it.
    pub fn child(&self, id: Uuid) -> Option<NewChild> {
        let bullet = |bullets: &[Bullet]| {
            bullets.iter().find(|b| b.id == id).map(|b| NewChild::Bullet {
                content: b.content.clone(),
            })
        };
        match self {
            ParentRecord::Experience(e) => bullet(&e.bullets),
            ParentRecord::Project(p) => bullet(&p.bullets),
            ParentRecord::SkillCategory(c) => {
                c.skills.iter().find(|s| s.id == id).map(|s| NewChild::SkillItem {
                    name: s.name.clone(),
                    icon_url: s.icon_url.clone(),
                    proficiency: s.proficiency.clone(),
                })
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// New children
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChildContentError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("Content does not fit a {0} collection")]
    WrongKind(&'static str),
}

/// Content of a child about to be appended to a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewChild {
    Bullet {
        content: String,
    },
    SkillItem {
        name: String,
        icon_url: Option<String>,
        proficiency: Option<String>,
    },
}

impl NewChild {
    pub fn bullet(content: impl Into<String>) -> Result<Self, ChildContentError> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(ChildContentError::Blank("content"));
        }
        Ok(NewChild::Bullet { content })
    }

    pub fn skill_item(
        name: impl Into<String>,
        icon_url: Option<String>,
        proficiency: Option<String>,
    ) -> Result<Self, ChildContentError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ChildContentError::Blank("name"));
        }
        Ok(NewChild::SkillItem {
            name,
            icon_url,
            proficiency,
        })
    }

    pub fn ensure_fits(&self, collection: ChildCollection) -> Result<(), ChildContentError> {
        let fits = matches!(
            (self, collection),
            (
                NewChild::Bullet { .. },
                ChildCollection::ExperienceBullets | ChildCollection::ProjectBullets
            ) | (NewChild::SkillItem { .. }, ChildCollection::SkillItems)
        );
        if fits {
            Ok(())
        } else {
            Err(ChildContentError::WrongKind(collection.label()))
        }
    }
}
