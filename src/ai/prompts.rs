//! Prompt construction for description rewriting.

/// System prompt framing the rewrite task.
pub const SYSTEM_PROMPT: &str = "You are a technical assistant that rewrites changelog entries \
for an end-user facing updates screen.";

/// Builds the per-item rewrite instruction.
///
/// The provider is asked to return only the final text so the response
/// can replace the description verbatim.
pub fn rewrite_prompt(description: &str, locale: &str) -> String {
    format!(
        "Take the following changelog item and:\n\
         \n\
         1. Improve its clarity and professional tone.\n\
         2. Translate it to {locale}.\n\
         3. Remove any leading list markers such as `*`.\n\
         4. Return only the final improved description, with no headings or prefixes.\n\
         \n\
         Item: \"{description}\"\n"
    )
}
