/// The prompt template used to ask the model for a recipe.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains a `{{INGREDIENTS}}` placeholder that is replaced with the user's
/// raw ingredient list by [`inject_ingredients`].
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

const PLACEHOLDER: &str = "{{INGREDIENTS}}";

/// Embeds the ingredient list, verbatim, into the prompt template.
pub fn inject_ingredients(ingredients: &str) -> String {
    RECIPE_PROMPT.replacen(PLACEHOLDER, ingredients, 1)
}
