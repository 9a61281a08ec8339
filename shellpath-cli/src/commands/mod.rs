//! CLI command implementations.
//!
//! - `normalize`: collapse `.` and `..`
//! - `combine`: join paths
//! - `relative`: express a path relative to a base
//! - `format`: render a path for display
//! - `components`: split a path into prefix and components
//! - `starts_with`: component-wise prefix test
//! - `parent`: parent of a path
//! - `walk`: apply `cd`-style steps
//! - `completions`: shell completion scripts

pub mod combine;
pub mod completions;
pub mod components;
pub mod format;
pub mod normalize;
pub mod parent;
pub mod relative;
pub mod starts_with;
pub mod walk;

pub use combine::CombineCommand;
pub use completions::CompletionsCommand;
pub use components::ComponentsCommand;
pub use format::FormatCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use relative::RelativeCommand;
pub use starts_with::StartsWithCommand;
pub use walk::WalkCommand;
