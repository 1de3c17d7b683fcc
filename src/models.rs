//! 议程数据模型

/// 一条课业记录（课程 / 章节 / 任务）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub course: String,
    pub chapter: String,
    pub task: String,
}

impl AgendaEntry {
    pub fn new(course: &str, chapter: &str, task: &str) -> Self {
        Self {
            course: course.to_string(),
            chapter: chapter.to_string(),
            task: task.to_string(),
        }
    }
}

/// 启动时填入表格的固定数据，按此顺序插入，此后不再变更
pub fn sample_entries() -> Vec<AgendaEntry> {
    vec![
        AgendaEntry::new("Math", "Chapter 1", "Homework"),
        AgendaEntry::new("Math", "Chapter 1", "Study for quiz"),
        AgendaEntry::new("Biology", "Unit 2", "Study for quiz"),
        AgendaEntry::new("History", "Unit 2", "Write report"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_entries_in_insertion_order() {
        let entries = sample_entries();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], AgendaEntry::new("Math", "Chapter 1", "Homework"));
        assert_eq!(
            entries[1],
            AgendaEntry::new("Math", "Chapter 1", "Study for quiz")
        );
        assert_eq!(
            entries[2],
            AgendaEntry::new("Biology", "Unit 2", "Study for quiz")
        );
        assert_eq!(
            entries[3],
            AgendaEntry::new("History", "Unit 2", "Write report")
        );
    }

    #[test]
    fn test_sample_entries_has_no_duplicates() {
        let entries = sample_entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
