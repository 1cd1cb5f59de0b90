// League model and analytics: turns a fetched league snapshot into
// standings, weekly results, leaders, and roster sheets. No I/O.

pub mod analytics;
pub mod bracket;
pub mod draft;
pub mod lineup;
pub mod results;
pub mod snapshot;
pub mod standings;

pub use analytics::{compute_analytics, AnalyticsResult};
pub use results::{weekly_results, WeekOutcome, WeeklyResults, REGULAR_SEASON_WEEKS};
pub use snapshot::{LeagueSnapshot, SnapshotBuilder};
pub use standings::{compute_standings, TeamStanding};
