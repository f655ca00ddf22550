//! UI Components
//!
//! Leptos components for the journal page.

pub mod api_settings;
pub mod chart;
pub mod session_form;
pub mod session_picker;
pub mod set_entry;
pub mod set_list;
pub mod toast;

pub use api_settings::ApiSettingsPanel;
pub use chart::VolumeChart;
pub use session_form::SessionForm;
pub use session_picker::SessionPicker;
pub use set_entry::SetEntry;
pub use set_list::SetList;
pub use toast::Toast;
