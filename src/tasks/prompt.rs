//! Prompt construction for PRD analysis

/// Build the task-breakdown prompt around the PRD text.
///
/// The instruction block pins the model to a strict JSON array so the
/// response can be parsed without post-processing beyond fence stripping.
pub fn task_breakdown_prompt(prd_text: &str) -> String {
    format!(
        r#"Analyze the PRD below and generate a **structured to-do list** for developers to complete **before submitting a PR**.

### Guidelines:
- Focus only on **development** and **pre-PR manual testing**.
- **Exclude deployment, CI/CD, and post-merge tasks**.
- **Exclude unit tests** (assumed to be automated).
- Testing should be written for developers performing **manual unit tests** (not testers). No automated test instructions.
- Ensure **every task has a heading and a description**.
- Categorize tasks into **Backend, Frontend, and Testing**.

### Format:
Return a JSON array where each task follows this structure:
{{
  "id": 1,
  "heading": "[Short Task Title]",
  "description": "[Brief Explanation]",
  "category": "[backend/frontend/testing]",
  "completed": false
}}

### PRD Content:
{prd_text}

Ensure all necessary development and testing tasks are **clearly outlined**."#
    )
}
