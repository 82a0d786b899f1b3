use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::crop::{Crop, CropId, CropPayload},
    models::jsonwebtoken::AuthContext,
    models::page::Page,
    repositories::crop::{CropRepository, CropScope},
    services::crop::{CROPS_PAGE_SIZE, CropService},
};

pub struct CropServiceImpl {
    repository: Arc<dyn CropRepository>,
}

impl CropServiceImpl {
    pub fn new(repository: Arc<dyn CropRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CropService for CropServiceImpl {
    async fn list(&self, auth: &AuthContext) -> AppResult<Vec<Crop>> {
        Ok(self.repository.list(auth, CropScope::Own).await?)
    }

    async fn create(&self, auth: &AuthContext, crop: CropPayload) -> AppResult<Crop> {
        Ok(self.repository.create(auth, crop).await?)
    }

    async fn update(&self, auth: &AuthContext, id: CropId, crop: CropPayload) -> AppResult<Crop> {
        Ok(self
            .repository
            .update(auth, CropScope::Own, id, crop)
            .await?)
    }

    async fn delete(&self, auth: &AuthContext, id: CropId) -> AppResult<()> {
        Ok(self.repository.delete(auth, CropScope::Own, id).await?)
    }

    /// The backend has no partial update, so the whole crop is written back.
    async fn toggle_harvested(&self, auth: &AuthContext, id: CropId) -> AppResult<Crop> {
        let crop = self
            .repository
            .list(auth, CropScope::Own)
            .await?
            .into_iter()
            .find(|crop| crop.id == id)
            .ok_or_else(|| AppError::NotFound("Crop not found"))?;

        let mut payload = CropPayload::from(crop);
        payload.harvested = !payload.harvested;

        Ok(self
            .repository
            .update(auth, CropScope::Own, id, payload)
            .await?)
    }

    async fn search_all(
        &self,
        auth: &AuthContext,
        query: &str,
        page: usize,
    ) -> AppResult<Page<Crop>> {
        let crops = self
            .repository
            .list(auth, CropScope::All)
            .await?
            .into_iter()
            .filter(|crop| crop.matches(query))
            .collect();

        Ok(Page::slice(crops, page, CROPS_PAGE_SIZE))
    }

    async fn update_any(
        &self,
        auth: &AuthContext,
        id: CropId,
        crop: CropPayload,
    ) -> AppResult<Crop> {
        Ok(self
            .repository
            .update(auth, CropScope::All, id, crop)
            .await?)
    }

    async fn delete_any(&self, auth: &AuthContext, id: CropId) -> AppResult<()> {
        Ok(self.repository.delete(auth, CropScope::All, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::jsonwebtoken::Claims;
    use crate::infrastructure::repositories::crop::mock::{CropRepositoryImpl, crop};
    use rstest::*;

    #[fixture]
    fn auth() -> AuthContext {
        AuthContext {
            token: "token".to_string(),
            claims: Claims {
                user_id: 1,
                exp: usize::MAX,
                token_type: None,
            },
        }
    }

    #[fixture]
    fn repository() -> Arc<CropRepositoryImpl> {
        let mut crops = vec![crop(1, "Maize", "ana.k"), crop(2, "Sorghum", "joe")];
        crops.extend((3..=14).map(|id| crop(id, &format!("Beans {id}"), "ana.k")));
        Arc::new(CropRepositoryImpl::with(crops))
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_writes_full_crop(auth: AuthContext, repository: Arc<CropRepositoryImpl>) {
        let service = CropServiceImpl::new(repository.clone());

        let toggled = service.toggle_harvested(&auth, 2).await.unwrap();
        assert!(toggled.harvested);

        let writes = repository.writes.lock().await;
        let (scope, id, payload) = &writes[0];
        assert_eq!(*scope, CropScope::Own);
        assert_eq!(*id, 2);
        assert_eq!(payload.name, "Sorghum");
        assert_eq!(payload.planted_date, "2024-03-01");
        assert!(payload.harvested);
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_unknown_crop(auth: AuthContext, repository: Arc<CropRepositoryImpl>) {
        let service = CropServiceImpl::new(repository);

        assert_eq!(
            service.toggle_harvested(&auth, 99).await.unwrap_err(),
            AppError::NotFound("Crop not found")
        );
    }

    #[rstest]
    #[case::first_page("", 0, 10, 14)]
    #[case::second_page("", 1, 4, 14)]
    #[case::by_owner("JOE", 0, 1, 1)]
    #[case::by_type("cereal", 0, 10, 14)]
    #[tokio::test]
    async fn test_search_all(
        auth: AuthContext,
        repository: Arc<CropRepositoryImpl>,
        #[case] query: &str,
        #[case] page: usize,
        #[case] shown: usize,
        #[case] total: usize,
    ) {
        let service = CropServiceImpl::new(repository);

        let result = service.search_all(&auth, query, page).await.unwrap();

        assert_eq!(result.items.len(), shown);
        assert_eq!(result.total, total);
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_any_missing(auth: AuthContext, repository: Arc<CropRepositoryImpl>) {
        let service = CropServiceImpl::new(repository);

        assert!(service.delete_any(&auth, 1).await.is_ok());
        assert_eq!(service.delete_any(&auth, 1).await.unwrap_err().code, 404);
    }
}
