//! In-memory participant profiles and intakes.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::intake::ClinicalIntake;
use crate::domain::participant::UserProfile;
use crate::ports::{IntakeRepository, ProfileRepository};

#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let stored = profiles
            .entry(profile.user_id.clone())
            .or_insert_with(|| profile.clone());
        stored.update(profile.identification.clone(), profile.updated_at);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn full_names(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(user_ids
            .iter()
            .filter_map(|id| {
                profiles
                    .get(id)
                    .map(|p| (id.clone(), p.identification.full_name.clone()))
            })
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryIntakeRepository {
    intakes: RwLock<HashMap<UserId, ClinicalIntake>>,
}

impl InMemoryIntakeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IntakeRepository for InMemoryIntakeRepository {
    async fn save(&self, user_id: &UserId, intake: &ClinicalIntake) -> Result<(), DomainError> {
        self.intakes
            .write()
            .await
            .insert(user_id.clone(), intake.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<ClinicalIntake>, DomainError> {
        Ok(self.intakes.read().await.get(user_id).cloned())
    }
}
