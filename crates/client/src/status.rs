use tracing::instrument;

use crate::{DinerClient, Error, Operation, Transport};

impl<T: Transport> DinerClient<T> {
    /// List every entity known to Flapjack.
    ///
    /// Returns the decoded JSON array, or `None` if the server sent no body.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), diner_client::Error> {
    /// use diner_client::DinerClient;
    ///
    /// let client = DinerClient::new("http://localhost:3081")?;
    /// if let Some(serde_json::Value::Array(entities)) = client.entities().await? {
    ///     for entity in entities {
    ///         println!("{}", entity["name"]);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn entities(&self) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::Entities).await
    }

    /// List the checks configured for an entity.
    #[instrument(skip(self))]
    pub async fn checks(&self, entity: &str) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::Checks {
            entity: entity.to_owned(),
        })
        .await
    }

    /// Current status of every check on an entity, or of a single check.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), diner_client::Error> {
    /// use diner_client::DinerClient;
    ///
    /// let client = DinerClient::new("http://localhost:3081")?;
    /// let all = client.status("web-01", None).await?;
    /// let ping = client.status("web-01", Some("ping")).await?;
    /// println!("{all:?} {ping:?}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        entity: &str,
        check: Option<&str>,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.fetch(&Operation::Status {
            entity: entity.to_owned(),
            check: check.map(str::to_owned),
        })
        .await
    }
}
