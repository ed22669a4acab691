use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, Insert, QueryFilter, QueryOrder, QueryResult, Statement, TransactionTrait, Value,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::content_rows::{self, group_by_parent};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    certifications, contact_settings, education, experience_bullets, experiences, profile,
    project_bullets, projects, skill_categories, skill_items,
};
use crate::modules::content::application::domain::entities::{
    Certification, ChildCollection, ChildRow, ContactSettings, Education, Experience, ListSection,
    NewChild, ParentRecord, Profile, Project, RankedRow, SectionItems, SectionRecord,
    SkillCategory,
};
use crate::modules::content::application::ports::outgoing::{
    ContentStore, ContentStoreError, ContentTx,
};

// ============================================================================
// Store
// ============================================================================

#[derive(Clone)]
pub struct ContentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore for ContentStorePostgres {
    type Tx = ContentTxPostgres;

    async fn begin(&self) -> Result<Self::Tx, ContentStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(ContentTxPostgres { txn })
    }
}

pub struct ContentTxPostgres {
    txn: DatabaseTransaction,
}

// ============================================================================
// SQL builders
// ============================================================================
//
// Table and column names only ever come from ListSection / ChildCollection,
// never from request input.

/// `$start, $start+1, ...` for `n` bind values.
fn placeholders(start: usize, n: usize) -> String {
    (start..start + n)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pg(sql: String, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

/// One UPDATE for the whole collection:
/// `UPDATE t SET sort_order = v.sort_order FROM (VALUES ...) v WHERE t.id = v.id`
fn bulk_rank_update_stmt(table: &str, ranks: &[RankedRow]) -> Statement {
    let rows = ranks
        .iter()
        .enumerate()
        .map(|(i, _)| format!("(${}::uuid, ${}::int)", 2 * i + 1, 2 * i + 2))
        .collect::<Vec<_>>()
        .join(", ");

    let values = ranks
        .iter()
        .flat_map(|r| [Value::from(r.id), Value::from(r.sort_order)])
        .collect();

    pg(
        format!(
            r#"
            UPDATE {table} AS t
            SET sort_order = v.sort_order
            FROM (VALUES {rows}) AS v(id, sort_order)
            WHERE t.id = v.id
            "#
        ),
        values,
    )
}

fn ranks_stmt(table: &str) -> Statement {
    pg(
        format!("SELECT id, sort_order FROM {table} ORDER BY sort_order ASC, id ASC"),
        vec![],
    )
}

fn child_rows_stmt(collection: ChildCollection, parent_id: Uuid) -> Statement {
    let table = collection.table();
    let parent = collection.parent_column();
    pg(
        format!(
            "SELECT id, {parent} AS parent_id, sort_order FROM {table} \
             WHERE {parent} = $1 ORDER BY sort_order ASC, id ASC"
        ),
        vec![parent_id.into()],
    )
}

fn child_rows_by_ids_stmt(collection: ChildCollection, ids: &[Uuid]) -> Statement {
    let table = collection.table();
    let parent = collection.parent_column();
    pg(
        format!(
            "SELECT id, {parent} AS parent_id, sort_order FROM {table} WHERE id IN ({})",
            placeholders(1, ids.len())
        ),
        ids.iter().map(|id| Value::from(*id)).collect(),
    )
}

fn insert_child_stmt(collection: ChildCollection, row: ChildRow, child: &NewChild) -> Statement {
    let table = collection.table();
    let parent = collection.parent_column();

    match child {
        NewChild::Bullet { content } => pg(
            format!(
                "INSERT INTO {table} (id, {parent}, content, sort_order) VALUES ($1, $2, $3, $4)"
            ),
            vec![
                row.id.into(),
                row.parent_id.into(),
                content.clone().into(),
                row.sort_order.into(),
            ],
        ),
        NewChild::SkillItem {
            name,
            icon_url,
            proficiency,
        } => pg(
            format!(
                "INSERT INTO {table} (id, {parent}, name, icon_url, proficiency, sort_order) \
                 VALUES ($1, $2, $3, $4, $5, $6)"
            ),
            vec![
                row.id.into(),
                row.parent_id.into(),
                name.clone().into(),
                icon_url.clone().into(),
                proficiency.clone().into(),
                row.sort_order.into(),
            ],
        ),
    }
}

fn update_child_stmt(collection: ChildCollection, id: Uuid, child: &NewChild) -> Statement {
    let table = collection.table();

    match child {
        NewChild::Bullet { content } => pg(
            format!("UPDATE {table} SET content = $1 WHERE id = $2"),
            vec![content.clone().into(), id.into()],
        ),
        NewChild::SkillItem {
            name,
            icon_url,
            proficiency,
        } => pg(
            format!("UPDATE {table} SET name = $1, icon_url = $2, proficiency = $3 WHERE id = $4"),
            vec![
                name.clone().into(),
                icon_url.clone().into(),
                proficiency.clone().into(),
                id.into(),
            ],
        ),
    }
}

/// Matches the case-insensitive unique index on `projects.slug`.
fn slug_taken_stmt(slug: &str, except: Option<Uuid>) -> Statement {
    pg(
        "SELECT EXISTS(SELECT 1 FROM projects \
         WHERE lower(slug) = lower($1) AND ($2::uuid IS NULL OR id <> $2)) AS taken"
            .to_string(),
        vec![slug.into(), except.into()],
    )
}

/// Singletons are written as an upsert keyed on the id the caller loaded,
/// so saving never adds a second row.
fn profile_upsert(data: &Profile, now: DateTimeWithTimeZone) -> Insert<profile::ActiveModel> {
    profile::Entity::insert(content_rows::profile_row(data, now)).on_conflict(
        OnConflict::column(profile::Column::Id)
            .update_columns([
                profile::Column::Name,
                profile::Column::Title,
                profile::Column::Tagline,
                profile::Column::Bio,
                profile::Column::AvatarUrl,
                profile::Column::ResumeUrl,
                profile::Column::Email,
                profile::Column::GithubUrl,
                profile::Column::LinkedinUrl,
                profile::Column::TwitterUrl,
                profile::Column::Nickname,
            ])
            .to_owned(),
    )
}

fn contact_settings_upsert(
    settings: &ContactSettings,
    now: DateTimeWithTimeZone,
) -> Insert<contact_settings::ActiveModel> {
    contact_settings::Entity::insert(content_rows::contact_settings_row(settings, now)).on_conflict(
        OnConflict::column(contact_settings::Column::Id)
            .update_columns([
                contact_settings::Column::Email,
                contact_settings::Column::Phone,
                contact_settings::Column::Location,
                contact_settings::Column::AvailabilityStatus,
                contact_settings::Column::FormEnabled,
                contact_settings::Column::FormRecipient,
                contact_settings::Column::SuccessMessage,
            ])
            .to_owned(),
    )
}

// ============================================================================
// Error mapping
// ============================================================================

fn map_db_err(e: DbErr) -> ContentStoreError {
    error!("Content store error: {}", e);
    ContentStoreError::DatabaseError(e.to_string())
}

fn map_slug_error(e: DbErr, slugs: &[&str]) -> ContentStoreError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        let slug = slugs
            .iter()
            .find(|s| msg.contains(&s.to_lowercase()))
            .or(slugs.first())
            .map(|s| s.to_string())
            .unwrap_or_default();
        ContentStoreError::SlugConflict(slug)
    } else {
        map_db_err(e)
    }
}

fn read_ranked(row: &QueryResult) -> Result<RankedRow, ContentStoreError> {
    Ok(RankedRow {
        id: row.try_get("", "id").map_err(map_db_err)?,
        sort_order: row.try_get("", "sort_order").map_err(map_db_err)?,
    })
}

fn read_child(row: &QueryResult) -> Result<ChildRow, ContentStoreError> {
    Ok(ChildRow {
        id: row.try_get("", "id").map_err(map_db_err)?,
        parent_id: row.try_get("", "parent_id").map_err(map_db_err)?,
        sort_order: row.try_get("", "sort_order").map_err(map_db_err)?,
    })
}

// ============================================================================
// Typed reads
// ============================================================================

impl ContentTxPostgres {
    async fn execute(&self, stmt: Statement) -> Result<u64, ContentStoreError> {
        self.txn
            .execute(stmt)
            .await
            .map(|r| r.rows_affected())
            .map_err(map_db_err)
    }

    async fn experiences(
        &self,
        published_only: bool,
        only_id: Option<Uuid>,
    ) -> Result<Vec<Experience>, ContentStoreError> {
        let mut query = experiences::Entity::find();
        if published_only {
            query = query.filter(experiences::Column::Published.eq(true));
        }
        if let Some(id) = only_id {
            query = query.filter(experiences::Column::Id.eq(id));
        }
        let parents = query
            .order_by_asc(experiences::Column::SortOrder)
            .order_by_asc(experiences::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        if parents.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = parents.iter().map(|p| p.id).collect();
        let children = experience_bullets::Entity::find()
            .filter(experience_bullets::Column::ExperienceId.is_in(ids))
            .order_by_asc(experience_bullets::Column::SortOrder)
            .order_by_asc(experience_bullets::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        let mut bullets = group_by_parent(
            children,
            |b| b.experience_id,
            content_rows::experience_bullet,
        );

        Ok(parents
            .into_iter()
            .map(|p| {
                let own = bullets.remove(&p.id).unwrap_or_default();
                content_rows::experience(p, own)
            })
            .collect())
    }

    async fn projects(
        &self,
        published_only: bool,
        only_id: Option<Uuid>,
    ) -> Result<Vec<Project>, ContentStoreError> {
        let mut query = projects::Entity::find();
        if published_only {
            query = query.filter(projects::Column::Published.eq(true));
        }
        if let Some(id) = only_id {
            query = query.filter(projects::Column::Id.eq(id));
        }
        let parents = query
            .order_by_asc(projects::Column::SortOrder)
            .order_by_asc(projects::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        if parents.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = parents.iter().map(|p| p.id).collect();
        let children = project_bullets::Entity::find()
            .filter(project_bullets::Column::ProjectId.is_in(ids))
            .order_by_asc(project_bullets::Column::SortOrder)
            .order_by_asc(project_bullets::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        let mut bullets = group_by_parent(children, |b| b.project_id, content_rows::project_bullet);

        Ok(parents
            .into_iter()
            .map(|p| {
                let own = bullets.remove(&p.id).unwrap_or_default();
                content_rows::project(p, own)
            })
            .collect())
    }

    async fn skill_categories(
        &self,
        published_only: bool,
        only_id: Option<Uuid>,
    ) -> Result<Vec<SkillCategory>, ContentStoreError> {
        let mut query = skill_categories::Entity::find();
        if published_only {
            query = query.filter(skill_categories::Column::Published.eq(true));
        }
        if let Some(id) = only_id {
            query = query.filter(skill_categories::Column::Id.eq(id));
        }
        let parents = query
            .order_by_asc(skill_categories::Column::SortOrder)
            .order_by_asc(skill_categories::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        if parents.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = parents.iter().map(|p| p.id).collect();
        let children = skill_items::Entity::find()
            .filter(skill_items::Column::CategoryId.is_in(ids))
            .order_by_asc(skill_items::Column::SortOrder)
            .order_by_asc(skill_items::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        let mut skills = group_by_parent(children, |s| s.category_id, content_rows::skill_item);

        Ok(parents
            .into_iter()
            .map(|c| {
                let own = skills.remove(&c.id).unwrap_or_default();
                content_rows::skill_category(c, own)
            })
            .collect())
    }

    async fn education(
        &self,
        published_only: bool,
        only_id: Option<Uuid>,
    ) -> Result<Vec<Education>, ContentStoreError> {
        let mut query = education::Entity::find();
        if published_only {
            query = query.filter(education::Column::Published.eq(true));
        }
        if let Some(id) = only_id {
            query = query.filter(education::Column::Id.eq(id));
        }
        let rows = query
            .order_by_asc(education::Column::SortOrder)
            .order_by_asc(education::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Education::from).collect())
    }

    async fn certifications(
        &self,
        published_only: bool,
        only_id: Option<Uuid>,
    ) -> Result<Vec<Certification>, ContentStoreError> {
        let mut query = certifications::Entity::find();
        if published_only {
            query = query.filter(certifications::Column::Published.eq(true));
        }
        if let Some(id) = only_id {
            query = query.filter(certifications::Column::Id.eq(id));
        }
        let rows = query
            .order_by_asc(certifications::Column::SortOrder)
            .order_by_asc(certifications::Column::Id)
            .all(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Certification::from).collect())
    }
}

// ============================================================================
// Port implementation
// ============================================================================

#[async_trait]
impl ContentTx for ContentTxPostgres {
    async fn section_ranks(
        &mut self,
        section: ListSection,
    ) -> Result<Vec<RankedRow>, ContentStoreError> {
        let rows = self
            .txn
            .query_all(ranks_stmt(section.table()))
            .await
            .map_err(map_db_err)?;
        rows.iter().map(read_ranked).collect()
    }

    async fn child_rows(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<Vec<ChildRow>, ContentStoreError> {
        let rows = self
            .txn
            .query_all(child_rows_stmt(collection, parent_id))
            .await
            .map_err(map_db_err)?;
        rows.iter().map(read_child).collect()
    }

    async fn child_rows_by_ids(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<Vec<ChildRow>, ContentStoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self
            .txn
            .query_all(child_rows_by_ids_stmt(collection, ids))
            .await
            .map_err(map_db_err)?;
        rows.iter().map(read_child).collect()
    }

    async fn update_section_ranks(
        &mut self,
        section: ListSection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError> {
        update_ranks(self, section.table(), ranks).await
    }

    async fn update_child_ranks(
        &mut self,
        collection: ChildCollection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError> {
        update_ranks(self, collection.table(), ranks).await
    }

    async fn list_section(
        &mut self,
        section: ListSection,
        published_only: bool,
    ) -> Result<SectionItems, ContentStoreError> {
        Ok(match section {
            ListSection::Experience => {
                SectionItems::Experiences(self.experiences(published_only, None).await?)
            }
            ListSection::Project => {
                SectionItems::Projects(self.projects(published_only, None).await?)
            }
            ListSection::Education => {
                SectionItems::Education(self.education(published_only, None).await?)
            }
            ListSection::Certification => {
                SectionItems::Certifications(self.certifications(published_only, None).await?)
            }
            ListSection::SkillCategory => {
                SectionItems::SkillCategories(self.skill_categories(published_only, None).await?)
            }
        })
    }

    async fn section_exists(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError> {
        let stmt = pg(
            format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1) AS found",
                section.table()
            ),
            vec![id.into()],
        );
        let row = self
            .txn
            .query_one(stmt)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                ContentStoreError::DatabaseError("Existence probe returned no rows".to_string())
            })?;

        row.try_get("", "found").map_err(map_db_err)
    }

    async fn find_parent(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<ParentRecord>, ContentStoreError> {
        Ok(match section {
            ListSection::Experience => self
                .experiences(false, Some(id))
                .await?
                .into_iter()
                .next()
                .map(ParentRecord::Experience),
            ListSection::Project => self
                .projects(false, Some(id))
                .await?
                .into_iter()
                .next()
                .map(ParentRecord::Project),
            ListSection::SkillCategory => self
                .skill_categories(false, Some(id))
                .await?
                .into_iter()
                .next()
                .map(ParentRecord::SkillCategory),
            ListSection::Education | ListSection::Certification => None,
        })
    }

    async fn find_item(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<SectionRecord>, ContentStoreError> {
        let only = Some(id);
        Ok(match section {
            ListSection::Experience => self
                .experiences(false, only)
                .await?
                .into_iter()
                .next()
                .map(SectionRecord::Experience),
            ListSection::Project => self
                .projects(false, only)
                .await?
                .into_iter()
                .next()
                .map(SectionRecord::Project),
            ListSection::Education => self
                .education(false, only)
                .await?
                .into_iter()
                .next()
                .map(SectionRecord::Education),
            ListSection::Certification => self
                .certifications(false, only)
                .await?
                .into_iter()
                .next()
                .map(SectionRecord::Certification),
            ListSection::SkillCategory => self
                .skill_categories(false, only)
                .await?
                .into_iter()
                .next()
                .map(SectionRecord::SkillCategory),
        })
    }

    async fn find_project_by_slug(
        &mut self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Project>, ContentStoreError> {
        let mut query = projects::Entity::find().filter(projects::Column::Slug.eq(slug));
        if published_only {
            query = query.filter(projects::Column::Published.eq(true));
        }
        let Some(row) = query.one(&self.txn).await.map_err(map_db_err)? else {
            return Ok(None);
        };

        Ok(self.projects(false, Some(row.id)).await?.into_iter().next())
    }

    async fn project_slug_taken(
        &mut self,
        slug: &str,
        except: Option<Uuid>,
    ) -> Result<bool, ContentStoreError> {
        let row = self
            .txn
            .query_one(slug_taken_stmt(slug, except))
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                ContentStoreError::DatabaseError("Slug lookup returned no rows".to_string())
            })?;

        row.try_get("", "taken").map_err(map_db_err)
    }

    async fn insert_child(
        &mut self,
        collection: ChildCollection,
        row: ChildRow,
        child: &NewChild,
    ) -> Result<(), ContentStoreError> {
        self.execute(insert_child_stmt(collection, row, child))
            .await
            .map(|_| ())
    }

    async fn update_child(
        &mut self,
        collection: ChildCollection,
        id: Uuid,
        child: &NewChild,
    ) -> Result<bool, ContentStoreError> {
        Ok(self.execute(update_child_stmt(collection, id, child)).await? == 1)
    }

    async fn delete_children(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<u64, ContentStoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let stmt = pg(
            format!(
                "DELETE FROM {} WHERE id IN ({})",
                collection.table(),
                placeholders(1, ids.len())
            ),
            ids.iter().map(|id| Value::from(*id)).collect(),
        );
        self.execute(stmt).await
    }

    async fn delete_children_of(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<u64, ContentStoreError> {
        let stmt = pg(
            format!(
                "DELETE FROM {} WHERE {} = $1",
                collection.table(),
                collection.parent_column()
            ),
            vec![parent_id.into()],
        );
        self.execute(stmt).await
    }

    async fn delete_section_row(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError> {
        let stmt = pg(
            format!("DELETE FROM {} WHERE id = $1", section.table()),
            vec![id.into()],
        );
        Ok(self.execute(stmt).await? == 1)
    }

    async fn set_published(
        &mut self,
        section: ListSection,
        id: Uuid,
        published: bool,
    ) -> Result<bool, ContentStoreError> {
        let stmt = pg(
            format!("UPDATE {} SET published = $1 WHERE id = $2", section.table()),
            vec![published.into(), id.into()],
        );
        Ok(self.execute(stmt).await? == 1)
    }

    async fn update_item(&mut self, item: &SectionRecord) -> Result<bool, ContentStoreError> {
        let now = Utc::now().fixed_offset();
        let id = item.id();

        let result = match item {
            SectionRecord::Experience(e) => experiences::Entity::update_many()
                .set(content_rows::experience_update(e, now))
                .filter(experiences::Column::Id.eq(id))
                .exec(&self.txn)
                .await
                .map_err(map_db_err)?,
            SectionRecord::Project(p) => projects::Entity::update_many()
                .set(content_rows::project_update(p, now))
                .filter(projects::Column::Id.eq(id))
                .exec(&self.txn)
                .await
                .map_err(|e| map_slug_error(e, &[p.slug.as_str()]))?,
            SectionRecord::Education(e) => education::Entity::update_many()
                .set(content_rows::education_update(e, now))
                .filter(education::Column::Id.eq(id))
                .exec(&self.txn)
                .await
                .map_err(map_db_err)?,
            SectionRecord::Certification(c) => certifications::Entity::update_many()
                .set(content_rows::certification_update(c, now))
                .filter(certifications::Column::Id.eq(id))
                .exec(&self.txn)
                .await
                .map_err(map_db_err)?,
            SectionRecord::SkillCategory(c) => skill_categories::Entity::update_many()
                .set(content_rows::skill_category_update(c, now))
                .filter(skill_categories::Column::Id.eq(id))
                .exec(&self.txn)
                .await
                .map_err(map_db_err)?,
        };

        Ok(result.rows_affected == 1)
    }

    async fn clear_section(&mut self, section: ListSection) -> Result<u64, ContentStoreError> {
        if let Some(children) = section.children() {
            self.execute(pg(format!("DELETE FROM {}", children.table()), vec![]))
                .await?;
        }
        self.execute(pg(format!("DELETE FROM {}", section.table()), vec![]))
            .await
    }

    async fn insert_experiences(&mut self, items: &[Experience]) -> Result<(), ContentStoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let (parents, children) = content_rows::experience_rows(items, Utc::now().fixed_offset());

        experiences::Entity::insert_many(parents)
            .exec_without_returning(&self.txn)
            .await
            .map_err(map_db_err)?;
        if !children.is_empty() {
            experience_bullets::Entity::insert_many(children)
                .exec_without_returning(&self.txn)
                .await
                .map_err(map_db_err)?;
        }
        Ok(())
    }

    async fn insert_projects(&mut self, items: &[Project]) -> Result<(), ContentStoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let (parents, children) = content_rows::project_rows(items, Utc::now().fixed_offset());
        let slugs: Vec<&str> = items.iter().map(|p| p.slug.as_str()).collect();

        projects::Entity::insert_many(parents)
            .exec_without_returning(&self.txn)
            .await
            .map_err(|e| map_slug_error(e, &slugs))?;
        if !children.is_empty() {
            project_bullets::Entity::insert_many(children)
                .exec_without_returning(&self.txn)
                .await
                .map_err(map_db_err)?;
        }
        Ok(())
    }

    async fn insert_skill_categories(
        &mut self,
        items: &[SkillCategory],
    ) -> Result<(), ContentStoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let (parents, children) =
            content_rows::skill_category_rows(items, Utc::now().fixed_offset());

        skill_categories::Entity::insert_many(parents)
            .exec_without_returning(&self.txn)
            .await
            .map_err(map_db_err)?;
        if !children.is_empty() {
            skill_items::Entity::insert_many(children)
                .exec_without_returning(&self.txn)
                .await
                .map_err(map_db_err)?;
        }
        Ok(())
    }

    async fn insert_education(&mut self, items: &[Education]) -> Result<(), ContentStoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let now = Utc::now().fixed_offset();
        education::Entity::insert_many(items.iter().map(|e| content_rows::education_row(e, now)))
            .exec_without_returning(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn insert_certifications(
        &mut self,
        items: &[Certification],
    ) -> Result<(), ContentStoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let now = Utc::now().fixed_offset();
        certifications::Entity::insert_many(
            items.iter().map(|c| content_rows::certification_row(c, now)),
        )
        .exec_without_returning(&self.txn)
        .await
        .map_err(map_db_err)?;
        Ok(())
    }

    async fn load_profile(&mut self) -> Result<Option<Profile>, ContentStoreError> {
        let row = profile::Entity::find()
            .order_by_asc(profile::Column::CreatedAt)
            .one(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Profile::from))
    }

    async fn save_profile(&mut self, data: &Profile) -> Result<(), ContentStoreError> {
        profile_upsert(data, Utc::now().fixed_offset())
            .exec_without_returning(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn load_contact_settings(
        &mut self,
    ) -> Result<Option<ContactSettings>, ContentStoreError> {
        let row = contact_settings::Entity::find()
            .order_by_asc(contact_settings::Column::CreatedAt)
            .one(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(ContactSettings::from))
    }

    async fn save_contact_settings(
        &mut self,
        settings: &ContactSettings,
    ) -> Result<(), ContentStoreError> {
        contact_settings_upsert(settings, Utc::now().fixed_offset())
            .exec_without_returning(&self.txn)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn commit(self) -> Result<(), ContentStoreError> {
        self.txn.commit().await.map_err(map_db_err)
    }

    async fn rollback(self) -> Result<(), ContentStoreError> {
        self.txn.rollback().await.map_err(map_db_err)
    }
}

async fn update_ranks(
    tx: &ContentTxPostgres,
    table: &str,
    ranks: &[RankedRow],
) -> Result<(), ContentStoreError> {
    if ranks.is_empty() {
        return Ok(());
    }

    let updated = tx.execute(bulk_rank_update_stmt(table, ranks)).await?;
    if updated != ranks.len() as u64 {
        return Err(ContentStoreError::DatabaseError(format!(
            "Rank update on {table} touched {updated} of {} rows",
            ranks.len()
        )));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
