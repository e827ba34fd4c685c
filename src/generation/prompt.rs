use super::target::TargetRange;

/// Instructions sent with every generation call.
pub const SYSTEM_PROMPT: &str = "You are a medical summarization assistant.\n\
Rules:\n\
- Neutral, objective tone.\n\
- Preserve all numbers and statistics exactly.\n\
- Add uncertainty caveats ('according to the study', 'data suggests') where appropriate.\n\
- Do NOT invent or fabricate any facts not in the article.\n\
- Do NOT use markdown (no bold, italic, headers, bullets).\n\
- Return ONLY the plain-text summary.";

/// User prompt for a 0-based `attempt`. Retries carry a corrective instruction.
pub fn build_prompt(article: &str, target: TargetRange, attempt: u32) -> String {
    let mut prompt = format!(
        "Summarize this health article in {} to {} words:\n\n{}",
        target.min_words, target.max_words, article
    );
    if attempt > 0 {
        prompt.push_str(&format!(
            "\n\nIMPORTANT: Your previous attempt was outside the {} word range. Adjust carefully.",
            target
        ));
    }
    prompt
}
