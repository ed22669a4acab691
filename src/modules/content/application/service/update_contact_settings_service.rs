use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::entities::ContactSettings;
use crate::modules::content::application::ports::incoming::use_cases::{
    SingletonUpdateError, UpdateContactSettingsCommand, UpdateContactSettingsUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct UpdateContactSettingsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> UpdateContactSettingsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn merge_settings<T: ContentTx>(
    tx: &mut T,
    command: UpdateContactSettingsCommand,
) -> Result<ContactSettings, SingletonUpdateError> {
    let mut settings = tx
        .load_contact_settings()
        .await?
        .ok_or(SingletonUpdateError::NotFound("Contact settings"))?;

    command.merge_into(&mut settings);
    tx.save_contact_settings(&settings).await?;
    Ok(settings)
}

#[async_trait]
impl<S> UpdateContactSettingsUseCase for UpdateContactSettingsService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateContactSettingsCommand,
    ) -> Result<ContactSettings, SingletonUpdateError> {
        command.validate()?;

        let mut tx = self.store.begin().await?;
        match merge_settings(&mut tx, command).await {
            Ok(settings) => {
                tx.commit().await?;
                info!("Contact settings {} updated", settings.id);
                Ok(settings)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
