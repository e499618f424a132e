use std::sync::Arc;

use logger::TracingLogger;
use persistence::recommendation::repository::RecommendationRepositoryPostgres;

use business::application::recommendation::create::CreateRecommendationUseCaseImpl;
use business::application::recommendation::delete::DeleteRecommendationUseCaseImpl;
use business::application::recommendation::get_by_id::GetRecommendationUseCaseImpl;
use business::application::recommendation::like::LikeRecommendationUseCaseImpl;
use business::application::recommendation::list::ListRecommendationsUseCaseImpl;
use business::application::recommendation::update::UpdateRecommendationUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::recommendation::repository::RecommendationRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::index::routes::IndexApi;
use crate::api::recommendation::routes::RecommendationApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub index_api: IndexApi,
    pub recommendation_api: RecommendationApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self::with_repository(Arc::new(RecommendationRepositoryPostgres::new(pool)))
    }

    /// Wires every use case over the given store.
    pub fn with_repository(repository: Arc<dyn RecommendationRepository>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateRecommendationUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListRecommendationsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetRecommendationUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateRecommendationUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteRecommendationUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let like_use_case = Arc::new(LikeRecommendationUseCaseImpl { repository, logger });

        let recommendation_api = RecommendationApi::new(
            create_use_case,
            list_use_case,
            get_use_case,
            update_use_case,
            delete_use_case,
            like_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            index_api: IndexApi,
            recommendation_api,
        }
    }
}
