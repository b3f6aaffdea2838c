//! Racing service
//!
//! List and get-by-id operations over races. `list_visible_races` and
//! `list_races_by_advertised_start_time` are separate RPC methods for existing
//! clients; both run the caller's filter unchanged, exactly like
//! `list_races`. The caller selects visibility and ordering through the
//! filter itself.

use async_trait::async_trait;
use ent_db::{RacesRepo, RepositoryResult};
use ent_models::{GetRaceByIdRequest, ListRacesRequest, ListRacesResponse};

#[async_trait]
pub trait Racing: Send + Sync {
    /// Races matching the request filter
    async fn list_races(&self, request: ListRacesRequest) -> RepositoryResult<ListRacesResponse>;

    /// Races matching the request filter (`visibleRaces` selects the visible ones)
    async fn list_visible_races(&self, request: ListRacesRequest) -> RepositoryResult<ListRacesResponse>;

    /// Races matching the request filter (`orderBy` orders them by start time)
    async fn list_races_by_advertised_start_time(
        &self,
        request: ListRacesRequest,
    ) -> RepositoryResult<ListRacesResponse>;

    /// The requested race, as a collection of at most one
    async fn get_race_by_id(&self, request: GetRaceByIdRequest) -> RepositoryResult<ListRacesResponse>;
}

pub struct RacingService<R> {
    repo: R,
}

impl<R: RacesRepo> RacingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: RacesRepo> Racing for RacingService<R> {
    async fn list_races(&self, request: ListRacesRequest) -> RepositoryResult<ListRacesResponse> {
        let races = self.repo.list(request.filter).await?;
        tracing::debug!(count = races.len(), "Listed races");

        Ok(ListRacesResponse { races })
    }

    async fn list_visible_races(&self, request: ListRacesRequest) -> RepositoryResult<ListRacesResponse> {
        self.list_races(request).await
    }

    async fn list_races_by_advertised_start_time(
        &self,
        request: ListRacesRequest,
    ) -> RepositoryResult<ListRacesResponse> {
        self.list_races(request).await
    }

    async fn get_race_by_id(&self, request: GetRaceByIdRequest) -> RepositoryResult<ListRacesResponse> {
        let races = self.repo.get_race(request.filter).await?;
        tracing::debug!(count = races.len(), "Fetched race by id");

        Ok(ListRacesResponse { races })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ent_db::{Database, RacesRepository, RepositoryError};
    use ent_models::{GetRaceByIdRequestFilter, ListRacesRequestFilter, Race, RaceStatus, Timestamp};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Races {}

        #[async_trait]
        impl RacesRepo for Races {
            async fn init(&self) -> RepositoryResult<()>;
            async fn list(&self, filter: Option<ListRacesRequestFilter>) -> RepositoryResult<Vec<Race>>;
            async fn get_race(&self, filter: Option<GetRaceByIdRequestFilter>) -> RepositoryResult<Vec<Race>>;
        }
    }

    fn race(id: i64) -> Race {
        let start = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        Race {
            id,
            meeting_id: 1,
            name: format!("Race {}", id),
            number: id,
            visible: true,
            advertised_start_time: Timestamp::try_from(start).unwrap(),
            status: RaceStatus::Open,
        }
    }

    fn filter(meeting_ids: Vec<i64>, visible_races: bool, order_by: Option<&str>) -> ListRacesRequestFilter {
        ListRacesRequestFilter {
            meeting_ids,
            visible_races,
            order_by: order_by.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_races_passes_filter_through() {
        let mut repo = MockRaces::new();
        repo.expect_list()
            .with(eq(Some(filter(vec![], false, Some("DESC")))))
            .times(1)
            .returning(|_| Ok(vec![race(2), race(1)]));

        let service = RacingService::new(repo);
        let response = service
            .list_races(ListRacesRequest::with_filter(filter(vec![], false, Some("DESC"))))
            .await
            .unwrap();

        assert_eq!(response.races.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_list_races_without_filter() {
        let mut repo = MockRaces::new();
        repo.expect_list()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = RacingService::new(repo);
        let response = service.list_races(ListRacesRequest::default()).await.unwrap();
        assert!(response.races.is_empty());
    }

    #[tokio::test]
    async fn test_list_races_surfaces_repository_error() {
        let mut repo = MockRaces::new();
        repo.expect_list()
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let service = RacingService::new(repo);
        let err = service.list_races(ListRacesRequest::default()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Database(sqlx::Error::PoolClosed)));
    }

    #[tokio::test]
    async fn test_shorthand_listings_pass_filter_through() {
        let with_ids = ListRacesRequestFilter {
            meeting_ids: vec![3],
            ..Default::default()
        };

        let mut repo = MockRaces::new();
        repo.expect_list()
            .with(eq(Some(with_ids.clone())))
            .times(2)
            .returning(|_| Ok(vec![race(6)]));
        repo.expect_list()
            .with(eq(None))
            .times(2)
            .returning(|_| Ok(vec![]));

        let service = RacingService::new(repo);

        let response = service
            .list_visible_races(ListRacesRequest::with_filter(with_ids.clone()))
            .await
            .unwrap();
        assert_eq!(response.races.len(), 1);
        let response = service
            .list_races_by_advertised_start_time(ListRacesRequest::with_filter(with_ids))
            .await
            .unwrap();
        assert_eq!(response.races.len(), 1);

        service.list_visible_races(ListRacesRequest::default()).await.unwrap();
        service
            .list_races_by_advertised_start_time(ListRacesRequest::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_race_by_id_wraps_collection() {
        let mut repo = MockRaces::new();
        repo.expect_get_race()
            .with(eq(Some(GetRaceByIdRequestFilter { id: 7 })))
            .times(1)
            .returning(|_| Ok(vec![race(7)]));

        let service = RacingService::new(repo);
        let response = service.get_race_by_id(GetRaceByIdRequest::new(7)).await.unwrap();

        assert_eq!(response.races.len(), 1);
        assert_eq!(response.races[0].id, 7);
    }

    async fn seeded_service() -> RacingService<RacesRepository> {
        let db = Database::in_memory().await.unwrap();
        RacingService::new(RacesRepository::new(db.pool().clone()))
    }

    fn ids(response: &ListRacesResponse) -> Vec<i64> {
        let mut ids: Vec<i64> = response.races.iter().map(|r| r.id).collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_against_seeded_database() {
        let service = seeded_service().await;

        let all = service.list_races(ListRacesRequest::default()).await.unwrap();
        assert_eq!(all.races.len(), 10);

        let one = service.get_race_by_id(GetRaceByIdRequest::new(3)).await.unwrap();
        assert_eq!(one.races.len(), 1);
        assert_eq!(one.races[0].id, 3);

        let none = service.get_race_by_id(GetRaceByIdRequest::new(404)).await.unwrap();
        assert!(none.races.is_empty());
    }

    #[tokio::test]
    async fn test_start_time_listing_with_meeting_ids() {
        let service = seeded_service().await;
        let request = ListRacesRequest::with_filter(filter(vec![1], false, None));

        let listed = service.list_races(request.clone()).await.unwrap();
        let by_start = service.list_races_by_advertised_start_time(request).await.unwrap();

        assert_eq!(ids(&by_start), vec![1, 2]);
        assert_eq!(ids(&by_start), ids(&listed));
    }

    #[tokio::test]
    async fn test_start_time_listing_with_visible_races() {
        let service = seeded_service().await;
        let request = ListRacesRequest::with_filter(filter(vec![], true, None));

        let by_start = service.list_races_by_advertised_start_time(request).await.unwrap();
        assert_eq!(ids(&by_start), vec![1, 3, 4, 6, 8, 9]);
    }

    #[tokio::test]
    async fn test_start_time_listing_with_order_only() {
        let service = seeded_service().await;
        let request = ListRacesRequest::with_filter(filter(vec![], false, Some("asc")));

        let by_start = service.list_races_by_advertised_start_time(request).await.unwrap();
        assert_eq!(by_start.races.len(), 10);
        assert!(by_start
            .races
            .windows(2)
            .all(|w| w[0].advertised_start_time <= w[1].advertised_start_time));
    }

    #[tokio::test]
    async fn test_visible_listing_with_visible_races_and_meeting_ids() {
        let service = seeded_service().await;
        let request = ListRacesRequest::with_filter(filter(vec![3], true, None));

        let visible = service.list_visible_races(request).await.unwrap();
        assert_eq!(ids(&visible), vec![6]);
    }

    #[tokio::test]
    async fn test_visible_listing_with_order_by() {
        let service = seeded_service().await;
        let request = ListRacesRequest::with_filter(filter(vec![], false, Some("DESC")));

        let listed = service.list_visible_races(request).await.unwrap();
        assert_eq!(listed.races.len(), 10);
        assert_eq!(listed.races[0].id, 10);
        assert!(listed
            .races
            .windows(2)
            .all(|w| w[0].advertised_start_time >= w[1].advertised_start_time));
    }
}
