use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    Bullet, Certification, ChildCollection, ChildRow, ContactSettings, Education, Experience,
    ListSection, NewChild, ParentRecord, Profile, Project, RankedRow, SectionItems, SectionRecord,
    SkillCategory, SkillItem,
};
use crate::modules::content::application::ports::outgoing::{
    ContentStore, ContentStoreError, ContentTx,
};

/// Committed content, children embedded in their parents.
///
/// Singletons are kept as rows keyed by id, the way the tables hold them,
/// so a save under a fresh id shows up as a second row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skill_categories: Vec<SkillCategory>,
    pub profiles: Vec<Profile>,
    pub contact_settings: Vec<ContactSettings>,
}

impl ContentState {
    /// The row `load_profile` returns.
    pub fn profile(&self) -> Option<&Profile> {
        self.profiles.first()
    }
}

/// Insert, or replace the row with the same id.
fn upsert_by_id<T: Clone>(rows: &mut Vec<T>, row: &T, id_of: impl Fn(&T) -> Uuid) {
    match rows.iter_mut().find(|r| id_of(r) == id_of(row)) {
        Some(existing) => *existing = row.clone(),
        None => rows.push(row.clone()),
    }
}

/// Transactional fake of the content store.
///
/// `begin` snapshots the committed state; writes land in the snapshot and
/// only replace the committed state on `commit`. Every call is appended to
/// `events` so tests can assert which steps ran.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    state: Arc<Mutex<ContentState>>,
    events: Arc<Mutex<Vec<String>>>,
    fail_on: Arc<Mutex<Option<String>>>,
}

impl InMemoryContentStore {
    pub fn with_state(state: ContentState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            ..Default::default()
        }
    }

    /// Make the named operation fail with a database error.
    pub fn failing_on(self, operation: &str) -> Self {
        *self.fail_on.lock().unwrap() = Some(operation.to_string());
        self
    }

    pub fn snapshot(&self) -> ContentState {
        self.state.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn ran(&self, operation: &str) -> bool {
        self.events().iter().any(|e| e == operation)
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    type Tx = InMemoryTx;

    async fn begin(&self) -> Result<Self::Tx, ContentStoreError> {
        let tx = InMemoryTx {
            working: self.snapshot(),
            store: self.clone(),
        };
        tx.record("begin")?;
        Ok(tx)
    }
}

pub struct InMemoryTx {
    working: ContentState,
    store: InMemoryContentStore,
}

impl InMemoryTx {
    fn record(&self, operation: &str) -> Result<(), ContentStoreError> {
        self.store.events.lock().unwrap().push(operation.to_string());
        match self.store.fail_on.lock().unwrap().as_deref() {
            Some(failing) if failing == operation => Err(ContentStoreError::DatabaseError(
                format!("{operation} failed"),
            )),
            _ => Ok(()),
        }
    }

    fn items(&self, section: ListSection) -> SectionItems {
        match section {
            ListSection::Experience => SectionItems::Experiences(self.working.experiences.clone()),
            ListSection::Project => SectionItems::Projects(self.working.projects.clone()),
            ListSection::Education => SectionItems::Education(self.working.education.clone()),
            ListSection::Certification => {
                SectionItems::Certifications(self.working.certifications.clone())
            }
            ListSection::SkillCategory => {
                SectionItems::SkillCategories(self.working.skill_categories.clone())
            }
        }
    }

    fn all_child_rows(&self, collection: ChildCollection) -> Vec<ChildRow> {
        let parents: Vec<ParentRecord> = match collection {
            ChildCollection::ExperienceBullets => self
                .working
                .experiences
                .iter()
                .cloned()
                .map(ParentRecord::Experience)
                .collect(),
            ChildCollection::ProjectBullets => self
                .working
                .projects
                .iter()
                .cloned()
                .map(ParentRecord::Project)
                .collect(),
            ChildCollection::SkillItems => self
                .working
                .skill_categories
                .iter()
                .cloned()
                .map(ParentRecord::SkillCategory)
                .collect(),
        };
        parents.iter().flat_map(ParentRecord::child_rows).collect()
    }

    fn set_section_rank(&mut self, section: ListSection, rank: RankedRow) -> bool {
        fn set<T>(items: &mut [T], id_of: impl Fn(&T) -> Uuid, rank: RankedRow, f: impl Fn(&mut T, i32)) -> bool {
            match items.iter_mut().find(|i| id_of(i) == rank.id) {
                Some(item) => {
                    f(item, rank.sort_order);
                    true
                }
                None => false,
            }
        }

        let w = &mut self.working;
        match section {
            ListSection::Experience => set(&mut w.experiences, |i| i.id, rank, |i, r| i.sort_order = r),
            ListSection::Project => set(&mut w.projects, |i| i.id, rank, |i, r| i.sort_order = r),
            ListSection::Education => set(&mut w.education, |i| i.id, rank, |i, r| i.sort_order = r),
            ListSection::Certification => {
                set(&mut w.certifications, |i| i.id, rank, |i, r| i.sort_order = r)
            }
            ListSection::SkillCategory => {
                set(&mut w.skill_categories, |i| i.id, rank, |i, r| i.sort_order = r)
            }
        }
    }

    fn set_child_rank(&mut self, collection: ChildCollection, rank: RankedRow) -> bool {
        let w = &mut self.working;
        match collection {
            ChildCollection::ExperienceBullets => w
                .experiences
                .iter_mut()
                .flat_map(|e| e.bullets.iter_mut())
                .find(|b| b.id == rank.id)
                .map(|b| b.sort_order = rank.sort_order)
                .is_some(),
            ChildCollection::ProjectBullets => w
                .projects
                .iter_mut()
                .flat_map(|p| p.bullets.iter_mut())
                .find(|b| b.id == rank.id)
                .map(|b| b.sort_order = rank.sort_order)
                .is_some(),
            ChildCollection::SkillItems => w
                .skill_categories
                .iter_mut()
                .flat_map(|c| c.skills.iter_mut())
                .find(|s| s.id == rank.id)
                .map(|s| s.sort_order = rank.sort_order)
                .is_some(),
        }
    }

    fn remove_children_where(
        &mut self,
        collection: ChildCollection,
        doomed: impl Fn(Uuid, Uuid) -> bool,
    ) -> u64 {
        let w = &mut self.working;
        let mut removed = 0u64;
        match collection {
            ChildCollection::ExperienceBullets => {
                for e in w.experiences.iter_mut() {
                    let before = e.bullets.len();
                    e.bullets.retain(|b| !doomed(e.id, b.id));
                    removed += (before - e.bullets.len()) as u64;
                }
            }
            ChildCollection::ProjectBullets => {
                for p in w.projects.iter_mut() {
                    let before = p.bullets.len();
                    p.bullets.retain(|b| !doomed(p.id, b.id));
                    removed += (before - p.bullets.len()) as u64;
                }
            }
            ChildCollection::SkillItems => {
                for c in w.skill_categories.iter_mut() {
                    let before = c.skills.len();
                    c.skills.retain(|s| !doomed(c.id, s.id));
                    removed += (before - c.skills.len()) as u64;
                }
            }
        }
        removed
    }
}

fn sorted_by_rank<T: Clone>(items: &[T], rank: impl Fn(&T) -> i32) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by_key(|i| rank(i));
    items
}

fn ordered_experience(mut e: Experience) -> Experience {
    e.bullets.sort_by_key(|b| b.sort_order);
    e
}

fn ordered_project(mut p: Project) -> Project {
    p.bullets.sort_by_key(|b| b.sort_order);
    p
}

fn ordered_category(mut c: SkillCategory) -> SkillCategory {
    c.skills.sort_by_key(|s| s.sort_order);
    c
}

#[async_trait]
impl ContentTx for InMemoryTx {
    async fn section_ranks(
        &mut self,
        section: ListSection,
    ) -> Result<Vec<RankedRow>, ContentStoreError> {
        self.record("section_ranks")?;
        let mut ranks = self.items(section).ranks();
        ranks.sort_by_key(|r| r.sort_order);
        Ok(ranks)
    }

    async fn child_rows(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<Vec<ChildRow>, ContentStoreError> {
        self.record("child_rows")?;
        let mut rows: Vec<ChildRow> = self
            .all_child_rows(collection)
            .into_iter()
            .filter(|r| r.parent_id == parent_id)
            .collect();
        rows.sort_by_key(|r| r.sort_order);
        Ok(rows)
    }

    async fn child_rows_by_ids(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<Vec<ChildRow>, ContentStoreError> {
        self.record("child_rows_by_ids")?;
        Ok(self
            .all_child_rows(collection)
            .into_iter()
            .filter(|r| ids.contains(&r.id))
            .collect())
    }

    async fn update_section_ranks(
        &mut self,
        section: ListSection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError> {
        self.record("update_section_ranks")?;
        for rank in ranks {
            if !self.set_section_rank(section, *rank) {
                return Err(ContentStoreError::DatabaseError(format!(
                    "{} {} vanished during rank update",
                    section, rank.id
                )));
            }
        }
        Ok(())
    }

    async fn update_child_ranks(
        &mut self,
        collection: ChildCollection,
        ranks: &[RankedRow],
    ) -> Result<(), ContentStoreError> {
        self.record("update_child_ranks")?;
        for rank in ranks {
            if !self.set_child_rank(collection, *rank) {
                return Err(ContentStoreError::DatabaseError(format!(
                    "{} {} vanished during rank update",
                    collection.label(),
                    rank.id
                )));
            }
        }
        Ok(())
    }

    async fn list_section(
        &mut self,
        section: ListSection,
        published_only: bool,
    ) -> Result<SectionItems, ContentStoreError> {
        self.record("list_section")?;
        let keep = |published: bool| !published_only || published;
        let w = &self.working;

        Ok(match section {
            ListSection::Experience => SectionItems::Experiences(
                sorted_by_rank(&w.experiences, |i| i.sort_order)
                    .into_iter()
                    .filter(|i| keep(i.published))
                    .map(ordered_experience)
                    .collect(),
            ),
            ListSection::Project => SectionItems::Projects(
                sorted_by_rank(&w.projects, |i| i.sort_order)
                    .into_iter()
                    .filter(|i| keep(i.published))
                    .map(ordered_project)
                    .collect(),
            ),
            ListSection::Education => SectionItems::Education(
                sorted_by_rank(&w.education, |i| i.sort_order)
                    .into_iter()
                    .filter(|i| keep(i.published))
                    .collect(),
            ),
            ListSection::Certification => SectionItems::Certifications(
                sorted_by_rank(&w.certifications, |i| i.sort_order)
                    .into_iter()
                    .filter(|i| keep(i.published))
                    .collect(),
            ),
            ListSection::SkillCategory => SectionItems::SkillCategories(
                sorted_by_rank(&w.skill_categories, |i| i.sort_order)
                    .into_iter()
                    .filter(|i| keep(i.published))
                    .map(ordered_category)
                    .collect(),
            ),
        })
    }

    async fn section_exists(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError> {
        self.record("section_exists")?;
        Ok(self.items(section).ranks().iter().any(|r| r.id == id))
    }

    async fn find_parent(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<ParentRecord>, ContentStoreError> {
        self.record("find_parent")?;
        let w = &self.working;
        Ok(match section {
            ListSection::Experience => w
                .experiences
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .map(|e| ParentRecord::Experience(ordered_experience(e))),
            ListSection::Project => w
                .projects
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(|p| ParentRecord::Project(ordered_project(p))),
            ListSection::SkillCategory => w
                .skill_categories
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .map(|c| ParentRecord::SkillCategory(ordered_category(c))),
            ListSection::Education | ListSection::Certification => None,
        })
    }

    async fn find_item(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<Option<SectionRecord>, ContentStoreError> {
        self.record("find_item")?;
        let w = &self.working;
        Ok(match section {
            ListSection::Experience => w
                .experiences
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(|e| SectionRecord::Experience(ordered_experience(e))),
            ListSection::Project => w
                .projects
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(|p| SectionRecord::Project(ordered_project(p))),
            ListSection::Education => w
                .education
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(SectionRecord::Education),
            ListSection::Certification => w
                .certifications
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(SectionRecord::Certification),
            ListSection::SkillCategory => w
                .skill_categories
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(|c| SectionRecord::SkillCategory(ordered_category(c))),
        })
    }

    async fn find_project_by_slug(
        &mut self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Project>, ContentStoreError> {
        self.record("find_project_by_slug")?;
        Ok(self
            .working
            .projects
            .iter()
            .find(|p| p.slug == slug && (!published_only || p.published))
            .cloned()
            .map(ordered_project))
    }

    async fn project_slug_taken(
        &mut self,
        slug: &str,
        except: Option<Uuid>,
    ) -> Result<bool, ContentStoreError> {
        self.record("project_slug_taken")?;
        let slug = slug.to_lowercase();
        Ok(self
            .working
            .projects
            .iter()
            .any(|p| Some(p.id) != except && p.slug.to_lowercase() == slug))
    }

    async fn insert_child(
        &mut self,
        collection: ChildCollection,
        row: ChildRow,
        child: &NewChild,
    ) -> Result<(), ContentStoreError> {
        self.record("insert_child")?;
        let w = &mut self.working;
        let inserted = match (collection, child) {
            (ChildCollection::ExperienceBullets, NewChild::Bullet { content }) => w
                .experiences
                .iter_mut()
                .find(|e| e.id == row.parent_id)
                .map(|e| {
                    e.bullets.push(Bullet {
                        id: row.id,
                        content: content.clone(),
                        sort_order: row.sort_order,
                    })
                })
                .is_some(),
            (ChildCollection::ProjectBullets, NewChild::Bullet { content }) => w
                .projects
                .iter_mut()
                .find(|p| p.id == row.parent_id)
                .map(|p| {
                    p.bullets.push(Bullet {
                        id: row.id,
                        content: content.clone(),
                        sort_order: row.sort_order,
                    })
                })
                .is_some(),
            (
                ChildCollection::SkillItems,
                NewChild::SkillItem {
                    name,
                    icon_url,
                    proficiency,
                },
            ) => w
                .skill_categories
                .iter_mut()
                .find(|c| c.id == row.parent_id)
                .map(|c| {
                    c.skills.push(SkillItem {
                        id: row.id,
                        name: name.clone(),
                        icon_url: icon_url.clone(),
                        proficiency: proficiency.clone(),
                        sort_order: row.sort_order,
                    })
                })
                .is_some(),
            _ => false,
        };

        if inserted {
            Ok(())
        } else {
            Err(ContentStoreError::DatabaseError(
                "foreign key violation".to_string(),
            ))
        }
    }

    async fn update_child(
        &mut self,
        collection: ChildCollection,
        id: Uuid,
        child: &NewChild,
    ) -> Result<bool, ContentStoreError> {
        self.record("update_child")?;
        let w = &mut self.working;
        let updated = match (collection, child) {
            (ChildCollection::ExperienceBullets, NewChild::Bullet { content }) => w
                .experiences
                .iter_mut()
                .flat_map(|e| e.bullets.iter_mut())
                .find(|b| b.id == id)
                .map(|b| b.content = content.clone()),
            (ChildCollection::ProjectBullets, NewChild::Bullet { content }) => w
                .projects
                .iter_mut()
                .flat_map(|p| p.bullets.iter_mut())
                .find(|b| b.id == id)
                .map(|b| b.content = content.clone()),
            (
                ChildCollection::SkillItems,
                NewChild::SkillItem {
                    name,
                    icon_url,
                    proficiency,
                },
            ) => w
                .skill_categories
                .iter_mut()
                .flat_map(|c| c.skills.iter_mut())
                .find(|s| s.id == id)
                .map(|s| {
                    s.name = name.clone();
                    s.icon_url = icon_url.clone();
                    s.proficiency = proficiency.clone();
                }),
            _ => None,
        };
        Ok(updated.is_some())
    }

    async fn delete_children(
        &mut self,
        collection: ChildCollection,
        ids: &[Uuid],
    ) -> Result<u64, ContentStoreError> {
        self.record("delete_children")?;
        Ok(self.remove_children_where(collection, |_, child| ids.contains(&child)))
    }

    async fn delete_children_of(
        &mut self,
        collection: ChildCollection,
        parent_id: Uuid,
    ) -> Result<u64, ContentStoreError> {
        self.record("delete_children_of")?;
        Ok(self.remove_children_where(collection, |parent, _| parent == parent_id))
    }

    async fn delete_section_row(
        &mut self,
        section: ListSection,
        id: Uuid,
    ) -> Result<bool, ContentStoreError> {
        self.record("delete_section_row")?;
        let before = self.items(section).len();
        let w = &mut self.working;
        match section {
            ListSection::Experience => w.experiences.retain(|i| i.id != id),
            ListSection::Project => w.projects.retain(|i| i.id != id),
            ListSection::Education => w.education.retain(|i| i.id != id),
            ListSection::Certification => w.certifications.retain(|i| i.id != id),
            ListSection::SkillCategory => w.skill_categories.retain(|i| i.id != id),
        }
        Ok(self.items(section).len() < before)
    }

    async fn set_published(
        &mut self,
        section: ListSection,
        id: Uuid,
        published: bool,
    ) -> Result<bool, ContentStoreError> {
        self.record("set_published")?;
        let w = &mut self.working;
        let found = match section {
            ListSection::Experience => w
                .experiences
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.published = published),
            ListSection::Project => w
                .projects
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.published = published),
            ListSection::Education => w
                .education
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.published = published),
            ListSection::Certification => w
                .certifications
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.published = published),
            ListSection::SkillCategory => w
                .skill_categories
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.published = published),
        };
        Ok(found.is_some())
    }

    async fn update_item(&mut self, item: &SectionRecord) -> Result<bool, ContentStoreError> {
        self.record("update_item")?;

        fn replace<T: Clone>(
            rows: &mut [T],
            id_of: impl Fn(&T) -> Uuid,
            item: &T,
            keep: impl Fn(&mut T, &T),
        ) -> bool {
            match rows.iter_mut().find(|r| id_of(r) == id_of(item)) {
                Some(row) => {
                    let stored = row.clone();
                    *row = item.clone();
                    keep(row, &stored);
                    true
                }
                None => false,
            }
        }

        if let SectionRecord::Project(project) = item {
            let slug = project.slug.to_lowercase();
            let taken = self
                .working
                .projects
                .iter()
                .any(|p| p.id != project.id && p.slug.to_lowercase() == slug);
            if taken {
                return Err(ContentStoreError::SlugConflict(project.slug.clone()));
            }
        }

        let w = &mut self.working;
        Ok(match item {
            SectionRecord::Experience(e) => replace(&mut w.experiences, |i| i.id, e, |row, stored| {
                row.sort_order = stored.sort_order;
                row.bullets = stored.bullets.clone();
            }),
            SectionRecord::Project(p) => replace(&mut w.projects, |i| i.id, p, |row, stored| {
                row.sort_order = stored.sort_order;
                row.bullets = stored.bullets.clone();
            }),
            SectionRecord::Education(e) => replace(&mut w.education, |i| i.id, e, |row, stored| {
                row.sort_order = stored.sort_order;
            }),
            SectionRecord::Certification(c) => {
                replace(&mut w.certifications, |i| i.id, c, |row, stored| {
                    row.sort_order = stored.sort_order;
                })
            }
            SectionRecord::SkillCategory(c) => {
                replace(&mut w.skill_categories, |i| i.id, c, |row, stored| {
                    row.sort_order = stored.sort_order;
                    row.skills = stored.skills.clone();
                })
            }
        })
    }

    async fn clear_section(&mut self, section: ListSection) -> Result<u64, ContentStoreError> {
        self.record("clear_section")?;
        let cleared = self.items(section).len() as u64;
        let w = &mut self.working;
        match section {
            ListSection::Experience => w.experiences.clear(),
            ListSection::Project => w.projects.clear(),
            ListSection::Education => w.education.clear(),
            ListSection::Certification => w.certifications.clear(),
            ListSection::SkillCategory => w.skill_categories.clear(),
        }
        Ok(cleared)
    }

    async fn insert_experiences(&mut self, items: &[Experience]) -> Result<(), ContentStoreError> {
        self.record("insert_experiences")?;
        self.working.experiences.extend_from_slice(items);
        Ok(())
    }

    async fn insert_projects(&mut self, items: &[Project]) -> Result<(), ContentStoreError> {
        self.record("insert_projects")?;
        for item in items {
            let taken = self
                .working
                .projects
                .iter()
                .any(|p| p.slug.to_lowercase() == item.slug.to_lowercase());
            if taken {
                return Err(ContentStoreError::SlugConflict(item.slug.clone()));
            }
            self.working.projects.push(item.clone());
        }
        Ok(())
    }

    async fn insert_skill_categories(
        &mut self,
        items: &[SkillCategory],
    ) -> Result<(), ContentStoreError> {
        self.record("insert_skill_categories")?;
        self.working.skill_categories.extend_from_slice(items);
        Ok(())
    }

    async fn insert_education(&mut self, items: &[Education]) -> Result<(), ContentStoreError> {
        self.record("insert_education")?;
        self.working.education.extend_from_slice(items);
        Ok(())
    }

    async fn insert_certifications(
        &mut self,
        items: &[Certification],
    ) -> Result<(), ContentStoreError> {
        self.record("insert_certifications")?;
        self.working.certifications.extend_from_slice(items);
        Ok(())
    }

    async fn load_profile(&mut self) -> Result<Option<Profile>, ContentStoreError> {
        self.record("load_profile")?;
        Ok(self.working.profiles.first().cloned())
    }

    async fn save_profile(&mut self, profile: &Profile) -> Result<(), ContentStoreError> {
        self.record("save_profile")?;
        upsert_by_id(&mut self.working.profiles, profile, |p| p.id);
        Ok(())
    }

    async fn load_contact_settings(
        &mut self,
    ) -> Result<Option<ContactSettings>, ContentStoreError> {
        self.record("load_contact_settings")?;
        Ok(self.working.contact_settings.first().cloned())
    }

    async fn save_contact_settings(
        &mut self,
        settings: &ContactSettings,
    ) -> Result<(), ContentStoreError> {
        self.record("save_contact_settings")?;
        upsert_by_id(&mut self.working.contact_settings, settings, |c| c.id);
        Ok(())
    }

    async fn commit(self) -> Result<(), ContentStoreError> {
        self.record("commit")?;
        *self.store.state.lock().unwrap() = self.working;
        Ok(())
    }

    async fn rollback(self) -> Result<(), ContentStoreError> {
        self.record("rollback")?;
        Ok(())
    }
}
