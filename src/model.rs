use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    /// Stored and displayed, but nothing sets it yet.
    pub completed: bool,
}

impl Task {
    /// Returns display icon: x=completed, .=open
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "x"
        } else {
            "."
        }
    }
}
