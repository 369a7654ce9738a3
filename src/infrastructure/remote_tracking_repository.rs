// HTTP-backed tracking repository
use crate::application::tracking_repository::TrackingRepository;
use crate::domain::tracking_item::TrackingItem;
use crate::infrastructure::network_service::{NetworkService, request};
use crate::infrastructure::tracking_dto::{TrackingResponseDto, to_domain_items};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct RemoteTrackingRepository {
    network: Arc<dyn NetworkService>,
    endpoint: String,
    headers: HashMap<String, String>,
}

impl RemoteTrackingRepository {
    pub fn new(
        network: Arc<dyn NetworkService>,
        endpoint: String,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            network,
            endpoint,
            headers,
        }
    }
}

#[async_trait]
impl TrackingRepository for RemoteTrackingRepository {
    async fn fetch_tracking_data(&self) -> Result<Vec<TrackingItem>> {
        let records: TrackingResponseDto =
            request(self.network.as_ref(), &self.endpoint, &self.headers).await?;

        let received = records.len();
        let items = to_domain_items(records);
        tracing::debug!(
            "Fetched {} records from {}, {} usable",
            received,
            self.endpoint,
            items.len()
        );

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network_service::NetworkError;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    struct MockNetworkService {
        response: Result<Value, NetworkError>,
        calls: Mutex<Vec<(String, HashMap<String, String>)>>,
    }

    impl MockNetworkService {
        fn new(response: Result<Value, NetworkError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NetworkService for MockNetworkService {
        async fn request_json(
            &self,
            url: &str,
            headers: &HashMap<String, String>,
        ) -> Result<Value, NetworkError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), headers.clone()));
            self.response.clone()
        }
    }

    fn record(plate_no: &str, last_updated: &str) -> Value {
        json!({
            "plateNo": plate_no,
            "driverName": "John Doe",
            "lat": 25.2048,
            "lng": 55.2708,
            "location": "Dubai, UAE",
            "imageURL": "https://example.com/image.jpg",
            "lastUpdated": last_updated
        })
    }

    fn repository(network: Arc<MockNetworkService>) -> RemoteTrackingRepository {
        RemoteTrackingRepository::new(
            network,
            "https://tracking.test/vehicles".to_string(),
            HashMap::from([("Accept".to_string(), "application/json".to_string())]),
        )
    }

    #[tokio::test]
    async fn test_fetch_tracking_data_success() {
        let network = Arc::new(MockNetworkService::new(Ok(json!([record(
            "X 19599",
            "2024-12-14T10:30:00.000Z"
        )]))));

        let items = repository(network.clone()).fetch_tracking_data().await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].plate_no, "X 19599");
        assert_eq!(items[0].id, "X_19599");

        let calls = network.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://tracking.test/vehicles");
        assert_eq!(
            calls[0].1.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_fetch_drops_unparsable_records() {
        let network = Arc::new(MockNetworkService::new(Ok(json!([
            record("A 1", "2024-12-14T10:30:00.000Z"),
            record("B 2", "not a date"),
            record("C 3", "2024-12-13T10:30:00Z"),
        ]))));

        let items = repository(network).fetch_tracking_data().await.unwrap();
        let plates: Vec<&str> = items.iter().map(|i| i.plate_no.as_str()).collect();
        assert_eq!(plates, vec!["A 1", "C 3"]);
    }

    #[tokio::test]
    async fn test_fetch_tracking_data_error() {
        let network = Arc::new(MockNetworkService::new(Err(NetworkError::Unknown(
            "offline".to_string(),
        ))));

        let error = repository(network).fetch_tracking_data().await.unwrap_err();
        assert_eq!(
            error.downcast_ref::<NetworkError>(),
            Some(&NetworkError::Unknown("offline".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_schema_mismatch_is_decoding_error() {
        let network = Arc::new(MockNetworkService::new(Ok(json!({ "vehicles": [] }))));

        let error = repository(network).fetch_tracking_data().await.unwrap_err();
        assert_eq!(
            error.downcast_ref::<NetworkError>(),
            Some(&NetworkError::DecodingError)
        );
    }
}
