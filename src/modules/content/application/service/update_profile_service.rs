use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::entities::Profile;
use crate::modules::content::application::ports::incoming::use_cases::{
    SingletonUpdateError, UpdateProfileCommand, UpdateProfileUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct UpdateProfileService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> UpdateProfileService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn merge_profile<T: ContentTx>(
    tx: &mut T,
    command: UpdateProfileCommand,
) -> Result<Profile, SingletonUpdateError> {
    let mut profile = tx
        .load_profile()
        .await?
        .ok_or(SingletonUpdateError::NotFound("Profile"))?;

    command.merge_into(&mut profile);
    tx.save_profile(&profile).await?;
    Ok(profile)
}

#[async_trait]
impl<S> UpdateProfileUseCase for UpdateProfileService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, SingletonUpdateError> {
        command.validate()?;

        let mut tx = self.store.begin().await?;
        match merge_profile(&mut tx, command).await {
            Ok(profile) => {
                tx.commit().await?;
                info!("Profile {} updated", profile.id);
                Ok(profile)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
