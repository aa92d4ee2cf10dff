//! Recipe suggestion commands for CLI.

use std::time::Duration;

use clap::Subcommand;
use freshkeep_core::{
    GenerationOutcome, NewShoppingItem, Recipe, RecipeGeneration, RecipeVariant, ValidationError,
};

use super::{print_json, CommandResult, Session};

#[derive(Subcommand)]
pub enum RecipesAction {
    /// List generated recipes
    List {
        /// Only show one variant: core or extended
        #[arg(long)]
        variant: Option<RecipeVariant>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a core and an extended recipe from the given ingredients
    Generate {
        /// Ingredient names, e.g. "Apples" "Milk"
        ingredients: Vec<String>,
        /// Skip the artificial generation delay
        #[arg(long)]
        no_delay: bool,
    },
    /// Put an extra ingredient of an extended recipe on the shopping list
    AddToList {
        /// Recipe ID
        recipe_id: String,
        /// Ingredient line number, starting at 1
        line: usize,
    },
}

pub fn run(action: RecipesAction, session: &Session) -> CommandResult {
    let store = session.store();

    match action {
        RecipesAction::List { variant, json } => {
            let recipes: Vec<Recipe> = store.read(|s| match variant {
                Some(v) => s.recipes_of_variant(v).into_iter().cloned().collect(),
                None => s.recipes().to_vec(),
            })?;

            if json {
                return print_json(&recipes);
            }
            if recipes.is_empty() {
                println!("No recipes yet. Select ingredients and generate some!");
            }
            for recipe in &recipes {
                print_recipe(recipe);
            }
        }
        RecipesAction::Generate {
            ingredients,
            no_delay,
        } => {
            let delay = if no_delay {
                Duration::ZERO
            } else {
                session.config().generation_delay()
            };

            println!("Generating recipes...");
            let request_store = store.clone();
            let outcome = session.runtime().block_on(async move {
                RecipeGeneration::spawn(request_store, ingredients, delay)
                    .outcome()
                    .await
            });

            match outcome {
                GenerationOutcome::Applied { recipe_ids } => {
                    let recipes: Vec<Recipe> = store.read(|s| {
                        s.recipes()
                            .iter()
                            .filter(|r| recipe_ids.contains(&r.id))
                            .cloned()
                            .collect()
                    })?;
                    for recipe in &recipes {
                        print_recipe(recipe);
                    }
                }
                GenerationOutcome::Skipped => {
                    println!("Select at least one ingredient to generate recipes.");
                }
                GenerationOutcome::Cancelled | GenerationOutcome::ProviderGone => {
                    return Err("recipe generation did not complete".into());
                }
            }
        }
        RecipesAction::AddToList { recipe_id, line } => {
            let name = store
                .read(|s| {
                    let recipe = s.recipes().iter().find(|r| r.id == recipe_id)?;
                    let ingredient = recipe.ingredients.get(line.checked_sub(1)?)?;
                    Some(
                        recipe
                            .restock_name(ingredient)
                            .map(str::to_string)
                            .ok_or_else(|| ingredient.clone()),
                    )
                })?
                .ok_or_else(|| format!("no ingredient {line} in recipe {recipe_id}"))?;
            let name = name.map_err(|ingredient| ValidationError::InvalidValue {
                field: "line".to_string(),
                message: format!("'{ingredient}' is not an extra ingredient of an extended recipe"),
            })?;

            let id = store.write(|s| s.add_to_shopping_list(NewShoppingItem::restock(name.clone())))?;
            println!("Added {name} to shopping list: {id}");
        }
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{} [{}]  id {}", recipe.title, recipe.variant, recipe.id);
    println!(
        "  prep {} min, cook {} min, serves {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );
    println!("  Ingredients:");
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        println!("    {}. {ingredient}", i + 1);
    }
    if let Some(extra) = &recipe.additional_ingredients {
        println!("  Additional: {}", extra.join(", "));
    }
    println!("  Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("    {}. {step}", i + 1);
    }
    println!();
}
