//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest ticket snapshot from the server, replaced wholesale on reload
    pub complaints: RwSignal<Vec<Complaint>>,
    /// Dashboard counters from the server
    pub stats: RwSignal<Stats>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A ticket as served by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Complaint {
    pub id: u32,
    pub content: String,
    /// Preformatted by the server
    pub timestamp: String,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub admin_reply: Option<String>,
}

/// Ticket lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub fn is_resolved(self) -> bool {
        self == ComplaintStatus::Resolved
    }
}

/// Dashboard counters, recomputed server-side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Stats {
    pub total: u32,
    pub pending: u32,
    pub resolved: u32,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        complaints: create_rw_signal(Vec::new()),
        stats: create_rw_signal(Stats::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_deserializes_with_reply() {
        let json = r#"{
            "id": 3,
            "content": "Package arrived damaged",
            "timestamp": "2026-08-01 09:30",
            "status": "resolved",
            "admin_reply": "Replacement shipped"
        }"#;

        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.id, 3);
        assert!(complaint.status.is_resolved());
        assert_eq!(complaint.admin_reply.as_deref(), Some("Replacement shipped"));
    }

    #[test]
    fn test_complaint_reply_defaults_to_none() {
        let json = r#"{
            "id": 1,
            "content": "No response from support",
            "timestamp": "2026-08-02 14:00",
            "status": "pending"
        }"#;

        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert!(!complaint.status.is_resolved());
        assert!(complaint.admin_reply.is_none());
    }

    #[test]
    fn test_stats_deserialize() {
        let stats: Stats = serde_json::from_str(r#"{"total":5,"pending":2,"resolved":3}"#).unwrap();
        assert_eq!(stats, Stats { total: 5, pending: 2, resolved: 3 });
    }
}
