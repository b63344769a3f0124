// Style matching: survey answers in, vibe and celebrity match out.
// The only LLM call goes through llm_client via the classifier.

pub mod classifier;
pub mod handlers;
pub mod preferences;
pub mod prompts;
