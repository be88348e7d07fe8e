//! UI Components
//!
//! The settings drawer row and the host components it renders through.

mod icon;
mod node_view;
mod notification;
mod settings_drawer;

pub use icon::Icon;
pub use notification::SettingsNotification;
pub use settings_drawer::SettingsDrawer;
