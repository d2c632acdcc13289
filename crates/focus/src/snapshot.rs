//! Focused-element snapshots as supplied by the host.

/// Role of a focused control, normalized by the provider.
///
/// Hosts expose larger and version-dependent role taxonomies; the provider
/// maps everything the classifier does not care about to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlRole {
    EditableText,
    ListItem,
    TableRow,
    Button,
    Pane,
    #[default]
    Unknown,
}

impl ControlRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EditableText => "editable text",
            Self::ListItem => "list item",
            Self::TableRow => "table row",
            Self::Button => "button",
            Self::Pane => "pane",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ControlRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State flags of a focused control that matter for clipboard eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateFlags {
    pub selected: bool,
    pub selectable: bool,
    pub multiline: bool,
    pub editable: bool,
    pub read_only: bool,
}

/// Everything the classifier needs to know about the focused element.
///
/// Collected by a [`FocusProvider`](crate::FocusProvider). Host version
/// differences in role and state taxonomies are the provider's concern; the
/// classifier only ever sees this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSnapshot {
    /// Window class name of the control ("SysListView32", "Scintilla", ...).
    pub window_class: String,
    /// Lowercase executable name of the owning application ("explorer").
    pub app_name: String,
    pub role: ControlRole,
    pub states: StateFlags,
}

impl FocusSnapshot {
    pub fn new(window_class: &str, app_name: &str, role: ControlRole, states: StateFlags) -> Self {
        Self {
            window_class: window_class.to_string(),
            app_name: app_name.to_string(),
            role,
            states,
        }
    }
}
