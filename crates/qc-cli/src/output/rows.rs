use qc_core::responses::{RuleDetailResponse, RuleListResponse, ThreadListResponse, ThreadView};

/// Responses with a dedicated table layout.
pub trait TableRows {
    const HEADERS: &'static [&'static str];

    fn rows(&self) -> Vec<Vec<String>>;
}

const THREAD_HEADERS: &[&str] = &[
    "id", "title", "status", "action", "priority", "due", "urgency", "unread",
];

impl TableRows for RuleListResponse {
    const HEADERS: &'static [&'static str] = &[
        "module", "rule_no", "id", "description", "status", "severity", "threads", "comments",
    ];

    fn rows(&self) -> Vec<Vec<String>> {
        self.modules
            .iter()
            .flat_map(|group| {
                group.rules.iter().map(move |view| {
                    vec![
                        group.module_name.clone(),
                        view.rule.rule_no.to_string(),
                        view.rule.id.clone(),
                        view.rule.description.clone(),
                        view.rule.status.label().to_string(),
                        view.rule.severity.label().to_string(),
                        view.thread_count.to_string(),
                        view.comment_count.to_string(),
                    ]
                })
            })
            .collect()
    }
}

impl TableRows for ThreadListResponse {
    const HEADERS: &'static [&'static str] = THREAD_HEADERS;

    fn rows(&self) -> Vec<Vec<String>> {
        self.threads.iter().map(thread_row).collect()
    }
}

impl TableRows for RuleDetailResponse {
    const HEADERS: &'static [&'static str] = THREAD_HEADERS;

    fn rows(&self) -> Vec<Vec<String>> {
        self.threads.iter().map(thread_row).collect()
    }
}

fn thread_row(view: &ThreadView) -> Vec<String> {
    let due = if view.sla.is_overdue {
        format!("{}d overdue", view.sla.overdue_days)
    } else {
        format!("in {}d", view.sla.days_until_due)
    };
    vec![
        view.thread.id.clone(),
        view.thread.title.clone(),
        view.thread.status.label().to_string(),
        view.thread.action_status.label().to_string(),
        view.thread.priority.label().to_string(),
        due,
        view.urgency.level.as_str().to_string(),
        view.unread_count.to_string(),
    ]
}
