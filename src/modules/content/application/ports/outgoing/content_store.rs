use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    Certification, ChildCollection, ChildRow, ContactSettings, Education, Experience, ListSection,
    NewChild, ParentRecord, Profile, Project, RankedRow, SectionItems, SectionRecord,
    SkillCategory,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Slug already in use: {0}")]
    SlugConflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Opens one unit of work against the content tables.
///
/// Every public content operation runs inside exactly one transaction and
/// finishes it with `commit` or `rollback`; nothing written through a
/// `ContentTx` is visible to other transactions before `commit`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    type Tx: ContentTx;

    async fn begin(&self) -> Result<Self::Tx, ContentStoreError>;
}

#[async_trait]
pub trait ContentTx: Send {
    // ── ranks ────────────────────────────────────────────

    async fn section_ranks(
        &mut self,
        section: ListSection,
    ) -> Result<Vec<RankedRow>, ContentStoreError>;

    async fn child_rows(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<Vec<ChildRow>, ContentStoreError>;

    /// Rows for the given ids whichever parent owns them.
    async fn child_rows_by_ids(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<Vec<ChildRow>, ContentStoreError>;

    /// Writes every rank in one statement.
    async fn update_section_ranks(
        &mut self,
        section: ListSection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError>;

    async fn update_child_ranks(
        &mut self,
        collection: ChildCollection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError>;

    // ── reads ────────────────────────────────────────────

    async fn list_section(
        &mut self,
        section: ListSection,
        published_only: bool,
    ) -> Result<SectionItems, ContentStoreError>;

    async fn section_exists(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError>;

    /// Parent row with its children. `section` must own a child collection.
    async fn find_parent(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<ParentRecord>, ContentStoreError>;

    /// One row of any section, children embedded.
    async fn find_item(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<SectionRecord>, ContentStoreError>;

    /// Exact slug match.
    async fn find_project_by_slug(
        &mut self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Project>, ContentStoreError>;

    /// Case-insensitive, ignoring the project `except`.
    async fn project_slug_taken(
        &mut self,
        slug: &str,
        except: Option<Uuid>,
    ) -> Result<bool, ContentStoreError>;

    // ── children ─────────────────────────────────────────

    async fn insert_child(
        &mut self,
        collection: ChildCollection,
        row: ChildRow,
        child: &NewChild,
    ) -> Result<(), ContentStoreError>;

    /// Rewrites the child's content; its parent and rank stay.
    async fn update_child(
        &mut self,
        collection: ChildCollection,
        id: Uuid,
        child: &NewChild,
    ) -> Result<bool, ContentStoreError>;

    async fn delete_children(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<u64, ContentStoreError>;

    async fn delete_children_of(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<u64, ContentStoreError>;

    // ── list sections ────────────────────────────────────

    async fn delete_section_row(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError>;

    async fn set_published(
        &mut self,
        section: ListSection,
        id: Uuid,
        published: bool,
    ) -> Result<bool, ContentStoreError>;

    /// Rewrites the row's own fields. Rank and children are left alone.
    async fn update_item(&mut self, item: &SectionRecord) -> Result<bool, ContentStoreError>;

    /// Deletes every row of the section, children first.
    async fn clear_section(&mut self, section: ListSection) -> Result<u64, ContentStoreError>;

    async fn insert_experiences(&mut self, items: &[Experience]) -> Result<(), ContentStoreError>;

    async fn insert_projects(&mut self, items: &[Project]) -> Result<(), ContentStoreError>;

    async fn insert_skill_categories(
        &mut self,
        items: &[SkillCategory],
    ) -> Result<(), ContentStoreError>;

    async fn insert_education(&mut self, items: &[Education]) -> Result<(), ContentStoreError>;

    async fn insert_certifications(
        &mut self,
        items: &[Certification],
    ) -> Result<(), ContentStoreError>;

    // ── singletons ───────────────────────────────────────

    async fn load_profile(&mut self) -> Result<Option<Profile>, ContentStoreError>;

    async fn save_profile(&mut self, profile: &Profile) -> Result<(), ContentStoreError>;

    async fn load_contact_settings(&mut self)
        -> Result<Option<ContactSettings>, ContentStoreError>;

    async fn save_contact_settings(
        &mut self,
        settings: &ContactSettings,
    ) -> Result<(), ContentStoreError>;

    // ── lifecycle ────────────────────────────────────────

    async fn commit(self) -> Result<(), ContentStoreError>;

    async fn rollback(self) -> Result<(), ContentStoreError>;
}
