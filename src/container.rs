use std::sync::Arc;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::crop::CropRepository;
use crate::domain::repositories::dashboard::DashboardRepository;
use crate::domain::repositories::farmer::FarmerRepository;
use crate::domain::services::account::AccountService;
use crate::domain::services::crop::CropService;
use crate::domain::services::dashboard::DashboardService;
use crate::domain::services::farmer::FarmerService;
use crate::domain::services::form::FarmerFormService;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;

use crate::services::account::AccountServiceImpl;
use crate::services::crop::CropServiceImpl;
use crate::services::dashboard::DashboardServiceImpl;
use crate::services::farmer::FarmerServiceImpl;
use crate::services::form::FarmerFormServiceImpl;
use crate::services::jsonwebtoken::JsonWebTokenServiceImpl;

use crate::infrastructure::client::ApiClient;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::crop::CropRepositoryImpl;
use crate::infrastructure::repositories::dashboard::DashboardRepositoryImpl;
use crate::infrastructure::repositories::farmer::FarmerRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub farmer_service: Arc<dyn FarmerService>,
    pub form_service: Arc<dyn FarmerFormService>,
    pub crop_service: Arc<dyn CropService>,
    pub dashboard_service: Arc<dyn DashboardService>,
    pub jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
}

impl Container {
    pub fn new(client: ApiClient, secret: &str) -> Self {
        let client = Arc::new(client);

        let farmer_repository: Arc<dyn FarmerRepository> =
            Arc::new(FarmerRepositoryImpl::new(client.clone()));

        Container {
            account_service: account_service(client.clone()),
            farmer_service: Arc::new(FarmerServiceImpl::new(farmer_repository.clone())),
            form_service: Arc::new(FarmerFormServiceImpl::new(farmer_repository)),
            crop_service: crop_service(client.clone()),
            dashboard_service: dashboard_service(client),
            jsonwebtoken_service: Arc::new(JsonWebTokenServiceImpl::new(secret)),
        }
    }
}

fn account_service(client: Arc<ApiClient>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> =
        Arc::new(AccountRepositoryImpl::new(client));

    Arc::new(AccountServiceImpl::new(account_repository))
}

fn crop_service(client: Arc<ApiClient>) -> Arc<dyn CropService> {
    let crop_repository: Arc<dyn CropRepository> = Arc::new(CropRepositoryImpl::new(client));

    Arc::new(CropServiceImpl::new(crop_repository))
}

fn dashboard_service(client: Arc<ApiClient>) -> Arc<dyn DashboardService> {
    let dashboard_repository: Arc<dyn DashboardRepository> =
        Arc::new(DashboardRepositoryImpl::new(client));

    Arc::new(DashboardServiceImpl::new(dashboard_repository))
}
