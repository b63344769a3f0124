// Prompt constants for vibe classification.

/// Vibe classification prompt template. Replace `{user_answers}` before sending.
pub const VIBE_PROMPT_TEMPLATE: &str = r#"Based on the following jewelry preferences, analyze the user's style and return ONLY two things:
1. A single word describing their jewelry vibe (like: bold, elegant, minimal, traditional, glamorous, edgy, classic, modern, romantic, sophisticated)
2. A celebrity name whose jewelry style matches this vibe

User preferences:
{user_answers}

Return your response in this exact JSON format:
{
  "vibe": "single_word_vibe",
  "celebrity": "Celebrity Name"
}"#;
