//! Frontend Models
//!
//! View-side types shared by the store, handlers and components.

/// Dashboard section selected from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardView {
    #[default]
    Dashboard,
    MyTasks,
    ProjectFiles,
    TeamConfiguration,
}

impl DashboardView {
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Dashboard,
        DashboardView::MyTasks,
        DashboardView::ProjectFiles,
        DashboardView::TeamConfiguration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::MyTasks => "My Tasks",
            DashboardView::ProjectFiles => "Project Files",
            DashboardView::TeamConfiguration => "Team Configuration",
        }
    }
}

/// Output regions that receive rendered remote responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    StatusPanel,
    PromptResponse,
    EmployeesOverview,
    ProjectsList,
    FilesList,
    SystemStatus,
}

impl OutputSlot {
    /// Element id the slot renders into
    pub fn element_id(self) -> &'static str {
        match self {
            OutputSlot::StatusPanel => "crewai-status-content",
            OutputSlot::PromptResponse => "prompt-response",
            OutputSlot::EmployeesOverview => "employees-overview",
            OutputSlot::ProjectsList => "projects-list",
            OutputSlot::FilesList => "files-list",
            OutputSlot::SystemStatus => "system-status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Warning => "notice warning",
            NoticeLevel::Error => "notice error",
        }
    }
}

/// Entry in the UI notification channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Status panel (dropdown) state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
    /// Last rendered content, kept across closes
    pub content: Option<String>,
}
