pub mod api;

/// What a question is about, as far as the canned assistant can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Meetings,
    Tasks,
    Scheduling,
    General,
}

impl ResponseKind {
    /// Returns the canned reply for this kind of question.
    pub fn reply(self) -> &'static str {
        match self {
            ResponseKind::Meetings => {
                "You have 2 meetings today: Team Standup at 9 AM and Q2 Planning at 2 PM."
            }
            ResponseKind::Tasks => {
                "You have 3 pending tasks: 1) Prepare slides 2) Review budget 3) Update timeline"
            }
            ResponseKind::Scheduling => {
                "Click the 'Schedule Meeting' button to add a new event to the calendar."
            }
            ResponseKind::General => {
                "I can help with meetings, tasks, and team updates. Try asking about your schedule."
            }
        }
    }
}

/// Classifies a question by keyword containment.
///
/// Keywords are checked in priority order: "meeting", then "task", then
/// "schedule". The first match wins; anything else is [`ResponseKind::General`].
pub fn classify(question: &str) -> ResponseKind {
    let question = question.to_lowercase();
    if question.contains("meeting") {
        ResponseKind::Meetings
    } else if question.contains("task") {
        ResponseKind::Tasks
    } else if question.contains("schedule") {
        ResponseKind::Scheduling
    } else {
        ResponseKind::General
    }
}
