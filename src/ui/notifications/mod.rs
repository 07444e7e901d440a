// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Upload results, download results and failures are reported as toasts
//! instead of blocking dialogs.
//!
//! - Success/info toasts close after 3s, warnings after 5s, errors stay until dismissed
//! - At most 3 toasts are visible; the rest wait in a queue
//! - Toasts stack in the bottom-right corner
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-upload-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
