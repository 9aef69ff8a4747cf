//! Prompt Templates
//!
//! Turns raw user text into the final prompt for a given strategy.

use crate::domain::PromptType;

const FEW_SHOT_PREAMBLE: &str = r#"Here are some examples of how to respond to similar questions:

Example 1:
Q: What is machine learning?
A: Machine learning is a subset of artificial intelligence that enables computers to learn and improve from experience without being explicitly programmed.

Example 2:
Q: How does blockchain work?
A: Blockchain is a distributed ledger technology that maintains a continuously growing list of records, called blocks, which are linked and secured using cryptography.

Now, please answer the following question in a similar style:
"#;

/// Build the text that is sent upstream for `content` under `prompt_type`.
pub fn render_prompt(content: &str, prompt_type: PromptType) -> String {
    match prompt_type {
        PromptType::ZeroShot => content.to_string(),
        PromptType::FewShot => format_few_shot(content),
        PromptType::ChainOfThought => format_chain_of_thought(content),
    }
}

fn format_few_shot(content: &str) -> String {
    format!("{FEW_SHOT_PREAMBLE}Q: {content}\nA:")
}

fn format_chain_of_thought(content: &str) -> String {
    format!(
        r#"Please think through this step by step and show your reasoning process.

Question: {content}

Let me think about this step by step:
1. First, I need to understand what is being asked
2. Then, I'll break down the key concepts
3. Finally, I'll provide a comprehensive answer

Please provide your step-by-step reasoning and final answer:"#
    )
}
