//! Category CLI commands
//!
//! `categorize` shows which category a description lands in; `categories`
//! lists the configured categories in priority order.

use clap::Args;

use crate::display::{format_categorization, format_category_table};
use crate::error::SpendwiseResult;
use crate::models::{Category, TransactionType};
use crate::storage::Storage;

/// Arguments for `categorize`
#[derive(Args, Debug)]
pub struct CategorizeArgs {
    /// One or more transaction descriptions
    #[arg(required = true)]
    pub descriptions: Vec<String>,

    /// Also check whether this transaction type is allowed
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// Handle the categorize command
pub fn handle_categorize_command(storage: &Storage, args: CategorizeArgs) -> SpendwiseResult<()> {
    let categories = storage.categories.find_all_categories()?;

    for description in &args.descriptions {
        let category = Category::categorize(description, &categories);
        println!(
            "{}",
            format_categorization(description, &category, args.transaction_type)
        );
    }

    Ok(())
}

/// Handle the categories command
pub fn handle_categories_command(storage: &Storage) -> SpendwiseResult<()> {
    let categories = storage.categories.find_all_categories()?;
    print!("{}", format_category_table(&categories));
    Ok(())
}
