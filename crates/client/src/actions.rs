use tracing::instrument;

use crate::{DinerClient, Error, Operation, ParamValue, Transport};

impl<T: Transport> DinerClient<T> {
    /// Acknowledge a failing check.
    ///
    /// Returns `true` if the server accepted the acknowledgement (HTTP 204)
    /// and `false` for any other status.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), diner_client::Error> {
    /// use diner_client::DinerClient;
    ///
    /// let client = DinerClient::new("http://localhost:3081")?;
    /// let accepted = client.acknowledge("web-01", "ping", Some("rebooting")).await?;
    /// assert!(accepted);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn acknowledge(
        &self,
        entity: &str,
        check: &str,
        summary: Option<&str>,
    ) -> Result<bool, Error> {
        self.perform(&Operation::Acknowledge {
            entity: entity.to_owned(),
            check: check.to_owned(),
            summary: summary.map(str::to_owned),
        })
        .await
    }

    /// Schedule a maintenance window for a check.
    ///
    /// `start_time` must be a timestamp and `duration` a whole number of
    /// seconds; anything else fails with [`Error::InvalidParameterType`]
    /// before a request is sent. A `std::time::Duration` is sent as whole
    /// seconds.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), diner_client::Error> {
    /// use diner_client::DinerClient;
    ///
    /// let client = DinerClient::new("http://localhost:3081")?;
    /// let start = chrono::Utc::now() + chrono::Duration::hours(1);
    /// let accepted = client
    ///     .create_scheduled_maintenance("db-01", "disk", start, 3600, Some("resize volume"))
    ///     .await?;
    /// println!("scheduled: {accepted}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, start_time, duration))]
    pub async fn create_scheduled_maintenance(
        &self,
        entity: &str,
        check: &str,
        start_time: impl Into<ParamValue>,
        duration: impl Into<ParamValue>,
        summary: Option<&str>,
    ) -> Result<bool, Error> {
        self.perform(&Operation::CreateScheduledMaintenance {
            entity: entity.to_owned(),
            check: check.to_owned(),
            start_time: start_time.into(),
            duration: duration.into(),
            summary: summary.map(str::to_owned),
        })
        .await
    }
}
