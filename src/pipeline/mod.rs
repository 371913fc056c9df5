//! Filtering, partitioning and grouping of event records
//!
//! Every function here is pure: it reads a slice of records and returns fresh
//! derived values, so a view can rerun the whole pipeline on every filter
//! change without any cached state.

pub mod budget;
pub mod dates;
pub mod filter;
pub mod gantt;
pub mod grouping;
pub mod options;
pub mod partition;
pub mod weeks;

pub use budget::{BudgetLine, BudgetSummary, MonthCost, aggregate_cost, parse_cost};
pub use filter::{FilterSelection, filter_events};
pub use gantt::{GanttTask, TimeScale, TimelineColumn, gantt_tasks, task_span, timeline, timeline_range};
pub use grouping::{MonthGroup, MonthKey, SeasonGroup, group_by_month, group_by_season};
pub use options::{available_places, available_seasons, available_types, default_season};
pub use partition::{Partition, partition_events};
pub use weeks::{WeekGroup, WeekKind, group_by_week};
