// SPDX-License-Identifier: MPL-2.0
//! User notices for the detail screen.
//!
//! Export results are reported as dismissible notices. Success and info
//! notices expire on their own, warnings linger a little longer and errors
//! stay until the user dismisses them.
//!
//! ```
//! use logo_stamp::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("Share failed").with_detail("disk full"));
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;

pub use manager::{Manager, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
