use async_trait::async_trait;
use crate::error::BackendError;
use super::UserProfile;

#[async_trait]
pub trait ProfileBackend {
    /// Insert or replace the profile for the account.
    async fn set_profile(
        &self,
        user_id: &str,
        avatar: Option<&str>,
    ) -> Result<(), BackendError>;
    async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfile>, BackendError>;
}
