//! UI Components
//!
//! Leptos components that wire DOM events to the view controller.

mod action_bar;
mod chat_panel;
mod employees_panel;
mod header_bar;
mod login_form;
mod notice_tray;
mod output_block;
mod projects_panel;
mod prompt_panel;
mod sidebar_nav;
mod status_dropdown;
mod system_status_panel;
mod task_forms;

pub use action_bar::ActionBar;
pub use chat_panel::ChatPanel;
pub use employees_panel::EmployeesPanel;
pub use header_bar::HeaderBar;
pub use login_form::LoginForm;
pub use notice_tray::NoticeTray;
pub use output_block::OutputBlock;
pub use projects_panel::ProjectsPanel;
pub use prompt_panel::PromptPanel;
pub use sidebar_nav::SidebarNav;
pub use status_dropdown::StatusDropdown;
pub use system_status_panel::SystemStatusPanel;
pub use task_forms::TaskForms;
