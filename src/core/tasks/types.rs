use crate::dictionary::Resolution;

#[derive(Debug, Clone)]
pub enum TaskResult {
    DefinitionResolved { word: String, resolution: Resolution },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DefinitionResolved { .. } => "definition_resolved",
        }
    }
}
