use crate::domain::PreferenceInput;

/// Persona sent as the system-role message with every completion request.
pub const SYSTEM_PROMPT: &str = "\
You are an expert AI Learning Assistant. Your goal is to provide personalized learning \
recommendations and concise topic explanations based on user preferences. \
Be encouraging and clear.";

/// Render the user-role message for one request.
pub fn build_learning_prompt(input: &PreferenceInput) -> String {
    let topic = input.topic();
    let style = input.style();
    let difficulty = input.difficulty();
    let count = input.count();

    format!(
        "The user wants to learn about: \"{topic}\".\n\
         Their preferred learning style is: '{style}'.\n\
         Their current understanding level is: '{difficulty}'.\n\
         \n\
         Please provide:\n\
         1. A brief and simple explanation of '{topic}', tailored for a '{difficulty}' level.\n\
         2. Suggest {count} diverse educational resources (e.g., articles, videos, interactive simulations, courses, books) for this topic.\n\
         \x20  - Prioritize resources that align with the '{style}' learning style.\n\
         \x20  - Ensure the suggested resources are suitable for a '{difficulty}' learner.\n\
         \x20  - For each resource, provide a very brief description of why it's suitable.\n\
         Keep the tone encouraging and helpful."
    )
}
