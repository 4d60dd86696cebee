use crate::model::task::Task;

/// First task whose name or due date equals `keyword`, ignoring case.
///
/// Tasks are scanned in order, so with duplicates the earliest one wins.
pub fn find_first<'a>(tasks: &'a [Task], keyword: &str) -> Option<&'a Task> {
    tasks
        .iter()
        .find(|task| matches_exactly(task, keyword))
}

/// Every task whose name or due date contains `keyword`, ignoring case, in
/// sequence order. An empty keyword matches every task.
pub fn find_all<'a>(tasks: &'a [Task], keyword: &str) -> Vec<&'a Task> {
    let needle = keyword.to_lowercase();
    tasks
        .iter()
        .filter(|task| contains(task, &needle))
        .collect()
}

/// Name or due date equals `keyword`, ignoring case.
pub fn matches_exactly(task: &Task, keyword: &str) -> bool {
    eq_ignore_case(&task.name, keyword) || eq_ignore_case(&task.due_date, keyword)
}

/// Name or due date contains an already-lowercased needle.
fn contains(task: &Task, needle: &str) -> bool {
    task.name.to_lowercase().contains(needle) || task.due_date.to_lowercase().contains(needle)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
