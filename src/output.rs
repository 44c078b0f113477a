use crate::model::Task;

pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!("{} {:>4}  {}\n", task.icon(), task.id, task.title));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_lines() {
        let tasks = vec![
            Task {
                id: 1,
                title: "Buy milk".into(),
                completed: false,
            },
            Task {
                id: 12,
                title: "File taxes".into(),
                completed: true,
            },
        ];
        assert_eq!(
            format_task_list(&tasks),
            ".    1  Buy milk\nx   12  File taxes\n"
        );
    }

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(format_task_list(&[]), "");
    }
}
