//! The Flapjack API operations as data.
//!
//! Each [`Operation`] declares its path and query parameters as
//! [`ParameterSpec`]s; [`Operation::request`] runs them through the shared
//! validator and assembler.

use crate::error::Error;
use crate::param::{ParamKind, ParameterSpec};
use crate::request::{self, Method, RequestDescriptor};
use crate::value::ParamValue;

/// Optional check and time window accepted by the history queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Restrict results to a single check.
    pub check: Option<String>,
    /// Start of the window.
    pub start_time: Option<ParamValue>,
    /// End of the window.
    pub end_time: Option<ParamValue>,
}

impl TimeWindow {
    /// An unrestricted window covering every check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single check.
    #[must_use]
    pub fn check(mut self, check: impl Into<String>) -> Self {
        self.check = Some(check.into());
        self
    }

    /// Set the start of the window.
    #[must_use]
    pub fn start_time(mut self, start: impl Into<ParamValue>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    /// Set the end of the window.
    #[must_use]
    pub fn end_time(mut self, end: impl Into<ParamValue>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    fn query_specs(&self) -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::new("start_time", self.start_time.clone()).kind(ParamKind::Timestamp),
            ParameterSpec::new("end_time", self.end_time.clone()).kind(ParamKind::Timestamp),
        ]
    }
}

/// A single call against the Flapjack API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `GET /entities`
    Entities,
    /// `GET /checks/{entity}`
    Checks {
        /// Entity name.
        entity: String,
    },
    /// `GET /status/{entity}[/{check}]`
    Status {
        /// Entity name.
        entity: String,
        /// Optional check name.
        check: Option<String>,
    },
    /// `POST /acknowledgments/{entity}/{check}`
    Acknowledge {
        /// Entity name.
        entity: String,
        /// Check name.
        check: String,
        /// Optional acknowledgement message.
        summary: Option<String>,
    },
    /// `POST /scheduled_maintenances/{entity}/{check}`
    CreateScheduledMaintenance {
        /// Entity name.
        entity: String,
        /// Check name.
        check: String,
        /// When the maintenance starts. Must be a timestamp.
        start_time: ParamValue,
        /// Length in seconds. Must be an integer.
        duration: ParamValue,
        /// Optional description.
        summary: Option<String>,
    },
    /// `GET /scheduled_maintenances/{entity}[/{check}]`
    ScheduledMaintenances {
        /// Entity name.
        entity: String,
        /// Check and time window.
        window: TimeWindow,
    },
    /// `GET /unscheduled_maintenances/{entity}[/{check}]`
    UnscheduledMaintenances {
        /// Entity name.
        entity: String,
        /// Check and time window.
        window: TimeWindow,
    },
    /// `GET /outages/{entity}[/{check}]`
    Outages {
        /// Entity name.
        entity: String,
        /// Check and time window.
        window: TimeWindow,
    },
    /// `GET /downtime/{entity}[/{check}]`
    Downtime {
        /// Entity name.
        entity: String,
        /// Check and time window.
        window: TimeWindow,
    },
}

fn text(name: &'static str, value: Option<&str>) -> ParameterSpec {
    ParameterSpec::new(name, value.map(ParamValue::from))
}

fn required_text(name: &'static str, value: &str) -> ParameterSpec {
    text(name, Some(value)).required()
}

impl Operation {
    /// The action path segment, e.g. `scheduled_maintenances`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Checks { .. } => "checks",
            Self::Status { .. } => "status",
            Self::Acknowledge { .. } => "acknowledgments",
            Self::CreateScheduledMaintenance { .. } | Self::ScheduledMaintenances { .. } => {
                "scheduled_maintenances"
            }
            Self::UnscheduledMaintenances { .. } => "unscheduled_maintenances",
            Self::Outages { .. } => "outages",
            Self::Downtime { .. } => "downtime",
        }
    }

    /// Whether this is a write command whose result is a status code only.
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            Self::Acknowledge { .. } | Self::CreateScheduledMaintenance { .. }
        )
    }

    /// HTTP method used by the operation.
    pub fn method(&self) -> Method {
        if self.is_action() {
            Method::Post
        } else {
            Method::Get
        }
    }

    /// Path and query/body parameter specs, in wire order.
    pub fn specs(&self) -> (Vec<ParameterSpec>, Vec<ParameterSpec>) {
        match self {
            Self::Entities => (Vec::new(), Vec::new()),
            Self::Checks { entity } => (vec![required_text("entity", entity)], Vec::new()),
            Self::Status { entity, check } => (
                vec![
                    required_text("entity", entity),
                    text("check", check.as_deref()),
                ],
                Vec::new(),
            ),
            Self::Acknowledge {
                entity,
                check,
                summary,
            } => (
                vec![
                    required_text("entity", entity),
                    required_text("check", check),
                ],
                vec![text("summary", summary.as_deref())],
            ),
            Self::CreateScheduledMaintenance {
                entity,
                check,
                start_time,
                duration,
                summary,
            } => (
                vec![
                    required_text("entity", entity),
                    required_text("check", check),
                ],
                vec![
                    ParameterSpec::new("start_time", Some(start_time.clone()))
                        .required()
                        .kind(ParamKind::Timestamp),
                    ParameterSpec::new("duration", Some(duration.clone()))
                        .required()
                        .kind(ParamKind::Integer),
                    text("summary", summary.as_deref()),
                ],
            ),
            Self::ScheduledMaintenances { entity, window }
            | Self::UnscheduledMaintenances { entity, window }
            | Self::Outages { entity, window }
            | Self::Downtime { entity, window } => (
                vec![
                    required_text("entity", entity),
                    text("check", window.check.as_deref()),
                ],
                window.query_specs(),
            ),
        }
    }

    /// Validate the arguments and build the request.
    pub fn request(&self) -> Result<RequestDescriptor, Error> {
        let (path, query) = self.specs();
        request::assemble(self.method(), self.name(), &path, &query)
    }
}
