// Sleeper REST API access: HTTP client, the `LeagueSource` seam, and
// assembly of a complete `LeagueSnapshot` for one report run.

pub mod client;
pub mod error;
pub mod fetch;
pub mod source;

pub use client::SleeperClient;
pub use error::{ApiError, ApiResult};
pub use fetch::fetch_snapshot;
pub use source::LeagueSource;
