use tracing::instrument;

use crate::{DinerClient, Error, Operation, TimeWindow, Transport};

impl<T: Transport> DinerClient<T> {
    /// Scheduled maintenance windows for an entity, optionally narrowed to a
    /// check and a time window.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), diner_client::Error> {
    /// use chrono::{Duration, Utc};
    /// use diner_client::{DinerClient, TimeWindow};
    ///
    /// let client = DinerClient::new("http://localhost:3081")?;
    /// let window = TimeWindow::new()
    ///     .check("disk")
    ///     .start_time(Utc::now())
    ///     .end_time(Utc::now() + Duration::days(30));
    /// let upcoming = client.scheduled_maintenances("db-01", window).await?;
    /// println!("{upcoming:?}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, window), fields(check = window.check.as_deref()))]
    pub async fn scheduled_maintenances(
        &self,
        entity: &str,
        window: TimeWindow,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::ScheduledMaintenances {
            entity: entity.to_owned(),
            window,
        })
        .await
    }

    /// Maintenance windows declared while a check was already failing.
    #[instrument(skip(self, window), fields(check = window.check.as_deref()))]
    pub async fn unscheduled_maintenances(
        &self,
        entity: &str,
        window: TimeWindow,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::UnscheduledMaintenances {
            entity: entity.to_owned(),
            window,
        })
        .await
    }

    /// Periods during which checks on an entity were failing.
    #[instrument(skip(self, window), fields(check = window.check.as_deref()))]
    pub async fn outages(
        &self,
        entity: &str,
        window: TimeWindow,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::Outages {
            entity: entity.to_owned(),
            window,
        })
        .await
    }

    /// Downtime totals for an entity, with maintenance periods excluded by
    /// the server.
    #[instrument(skip(self, window), fields(check = window.check.as_deref()))]
    pub async fn downtime(
        &self,
        entity: &str,
        window: TimeWindow,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::Downtime {
            entity: entity.to_owned(),
            window,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};
    use serde_json::json;

    use crate::testing::client;
    use crate::{Error, TimeWindow, TransportResponse};

    #[tokio::test]
    async fn outages_with_start_time() {
        let body = json!([{"start_time": 1_312_156_800, "duration": 60}]);
        let client = client([Some(TransportResponse::json(200, body.clone()))]);
        let window =
            TimeWindow::new().start_time(Utc.with_ymd_and_hms(2011, 8, 1, 0, 0, 0).unwrap());

        let result = client.outages("host1", window).await.unwrap();
        assert_eq!(result, Some(body));
        assert_eq!(
            client.transport().requests()[0].uri,
            "http://flapjack.test:3081/outages/host1?start_time=2011-08-01T00%3A00%3A00Z"
        );
    }

    #[tokio::test]
    async fn each_history_query_uses_its_action() {
        let client = client([None, None, None, None]);
        let window = || TimeWindow::new().check("ping");

        client.scheduled_maintenances("host1", window()).await.unwrap();
        client.unscheduled_maintenances("host1", window()).await.unwrap();
        client.outages("host1", window()).await.unwrap();
        client.downtime("host1", window()).await.unwrap();

        let uris: Vec<String> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.uri)
            .collect();
        assert_eq!(
            uris,
            [
                "http://flapjack.test:3081/scheduled_maintenances/host1/ping",
                "http://flapjack.test:3081/unscheduled_maintenances/host1/ping",
                "http://flapjack.test:3081/outages/host1/ping",
                "http://flapjack.test:3081/downtime/host1/ping",
            ]
        );
    }

    #[tokio::test]
    async fn offset_timestamps_keep_their_offset() {
        let client = client([None]);
        let tz = FixedOffset::east_opt(10 * 3600).unwrap();
        let window = TimeWindow::new()
            .start_time(tz.with_ymd_and_hms(2011, 8, 1, 10, 0, 0).unwrap())
            .end_time(tz.with_ymd_and_hms(2011, 8, 2, 10, 0, 0).unwrap());

        client.downtime("host1", window).await.unwrap();
        assert_eq!(
            client.transport().requests()[0].uri,
            "http://flapjack.test:3081/downtime/host1\
             ?start_time=2011-08-01T10%3A00%3A00%2B10%3A00\
             &end_time=2011-08-02T10%3A00%3A00%2B10%3A00"
        );
    }

    #[tokio::test]
    async fn non_timestamp_window_is_rejected() {
        let client = client([]);
        let window = TimeWindow::new().start_time("last tuesday");
        let err = client.outages("host1", window).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameterType { ref name, expected: "a timestamp" } if name == "start_time"
        ));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn entity_is_required() {
        let client = client([]);
        let err = client
            .scheduled_maintenances("", TimeWindow::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredParameter(_)));
    }
}
