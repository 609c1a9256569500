// Blog post generation: prompt → completion → affiliate link substitution → persist.
// All completion calls go through llm_client, no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
