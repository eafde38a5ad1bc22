use crate::error::Result;
use crate::ui::Prompter;
use std::collections::VecDeque;

/// Scripted prompter for tests: answers prompts from a fixed queue and
/// records every prompt that was issued.
///
/// `None` in the script dismisses the prompt (the user cancelled). Issuing
/// a prompt once the script is exhausted panics, which lets tests assert
/// that no further prompts happen after a cancellation.
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    pub(crate) asked: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: answers.into_iter().map(|a| a.map(str::to_string)).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn pick(&mut self, prompt: &str, options: &[String]) -> Result<Option<String>> {
        self.asked.push(format!("pick: {}", prompt));
        let answer = self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted pick prompt: {}", prompt));
        if let Some(a) = &answer {
            assert!(
                options.contains(a),
                "scripted answer '{}' is not among the options {:?}",
                a,
                options
            );
        }
        Ok(answer)
    }

    fn input(&mut self, prompt: &str, _default: Option<&str>) -> Result<Option<String>> {
        self.asked.push(format!("input: {}", prompt));
        let answer = self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted input prompt: {}", prompt));
        Ok(answer)
    }
}
