//! Terminal-agnostic page state: the CLI and the dashboard both drive these.

pub mod list;
pub mod nav;
pub mod notifications;
pub mod optimistic;
pub mod overview;
pub mod page;
pub mod scope;

pub use list::ListView;
pub use nav::{Destination, NavigationShell};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
pub use optimistic::{apply_optimistic, PendingWrite};
pub use overview::OverviewPage;
pub use page::{FeedbackPage, ListPage};
pub use scope::{Scoped, ViewLifetime, ViewScope};
