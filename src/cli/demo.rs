//! `demo` command: a scripted walkthrough of the whole system
//!
//! Runs against a private in-memory store seeded with the configured
//! categories, so it never touches the data of a running server.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::display::report::{double_separator, separator};
use crate::display::{format_analysis, format_categorization, format_transaction_table};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, CurrencyFormat, Money, Transaction, TransactionType};
use crate::services::{
    AnalysisService, CreateTransactionInput, FinancialAnalysisService, TransactionService,
};
use crate::storage::Storage;

const SAMPLE_DESCRIPTIONS: [&str; 7] = [
    "Lunch at the Tasty Bistro restaurant",
    "Gasoline at the corner station",
    "Rent payment for March",
    "Monthly salary",
    "Doctor appointment",
    "Grocery shopping at the market",
    "Netflix subscription",
];

/// Handle the demo command
pub fn handle_demo_command(categories: Vec<Category>, currency: &CurrencyFormat) -> SpendwiseResult<()> {
    let storage = Storage::in_memory(categories);

    println!("{}", double_separator(70));
    println!("Spendwise: personal finance with automatic categorization");
    println!("{}", double_separator(70));
    println!();

    domain_model(currency)?;
    categorization(&storage)?;
    analysis(&storage, currency)?;
    business_rules(&storage)?;
    workflows(&storage, currency)?;
    endpoints();

    Ok(())
}

fn step(number: u32, title: &str) {
    println!("{}. {}", number, title);
    println!();
}

fn end_step() {
    println!("{}", separator(60));
    println!();
}

fn domain_model(currency: &CurrencyFormat) -> SpendwiseResult<()> {
    step(1, "Domain model");

    let food = Arc::new(Category::new("Food", ["restaurant", "market", "lunch"]));
    let lunch = Transaction::new(
        "1",
        "Lunch at the restaurant",
        Money::new(45.5)?,
        Utc::now(),
        food,
        TransactionType::Expense,
    )?;

    println!("   Transaction");
    println!("      description: {}", lunch.description());
    println!("      amount:      {}", lunch.amount().format_with(currency));
    println!("      type:        {}", lunch.transaction_type());
    println!("      category:    {}", lunch.category().name());
    println!("      is expense:  {}", lunch.is_expense());
    println!();

    let money = Money::new(150.75)?;
    println!("   Money");
    println!("      value:     {}", money.value());
    println!("      formatted: {}", money.format_with(currency));
    println!();

    end_step();
    Ok(())
}

fn categorization(storage: &Storage) -> SpendwiseResult<()> {
    step(2, "Automatic categorization");

    let categories = storage.categories.find_all_categories()?;
    for description in SAMPLE_DESCRIPTIONS {
        let category = Category::categorize(description, &categories);
        println!("   {}", format_categorization(description, &category, None));
    }
    println!();

    end_step();
    Ok(())
}

/// Food 45 + 220, Transport 20, Housing 950 and a 3000 salary
fn sample_transactions(storage: &Storage) -> SpendwiseResult<Vec<Transaction>> {
    let find = |name: &str| -> SpendwiseResult<Arc<Category>> {
        Ok(storage
            .categories
            .find_category_by_name(name)?
            .unwrap_or_else(|| Arc::new(Category::new(name, Vec::<String>::new()))))
    };

    let date = |day: u32| {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
            .single()
            .ok_or_else(|| SpendwiseError::Validation(format!("Invalid sample day {}", day)))
    };

    let rows = [
        ("s1", "Lunch at the restaurant", 45.0, "Food", TransactionType::Expense, 15),
        ("s2", "Uber ride", 20.0, "Transport", TransactionType::Expense, 16),
        ("s3", "Monthly rent", 950.0, "Housing", TransactionType::Expense, 10),
        ("s4", "Grocery market", 220.0, "Food", TransactionType::Expense, 20),
        ("s5", "Salary", 3000.0, "Salary", TransactionType::Income, 5),
    ];

    rows.into_iter()
        .map(|(id, description, amount, category, kind, day)| {
            Transaction::new(id, description, Money::new(amount)?, date(day)?, find(category)?, kind)
        })
        .collect()
}

fn analysis(storage: &Storage, currency: &CurrencyFormat) -> SpendwiseResult<()> {
    step(3, "Financial analysis");

    let transactions = sample_transactions(storage)?;
    let analysis = FinancialAnalysisService::new().analyze(&transactions)?;

    print!("{}", format_analysis(&analysis, currency));
    println!();
    println!(
        "   Financial health: {}",
        if analysis.balance.is_negative() {
            "negative"
        } else {
            "positive"
        }
    );
    println!();

    end_step();
    Ok(())
}

fn business_rules(storage: &Storage) -> SpendwiseResult<()> {
    step(4, "Business rules");

    let salary = storage
        .categories
        .find_category_by_name("Salary")?
        .unwrap_or_else(|| {
            Arc::new(Category::new("Salary", ["salary"]).with_allowed_types(&[TransactionType::Income]))
        });

    println!("   Valid: salary as income");
    match Transaction::new(
        "valid-1",
        "Monthly salary",
        Money::new(3000.0)?,
        Utc::now(),
        Arc::clone(&salary),
        TransactionType::Income,
    ) {
        Ok(txn) => println!("      created: {} ({})", txn.description(), txn.amount()),
        Err(e) => println!("      unexpected error: {}", e),
    }
    println!();

    println!("   Invalid: salary as expense");
    match Transaction::new(
        "invalid-1",
        "Salary as expense?",
        Money::new(3000.0)?,
        Utc::now(),
        salary,
        TransactionType::Expense,
    ) {
        Ok(_) => println!("      created (the rule did not apply)"),
        Err(e) => println!("      rejected: \"{}\"", e),
    }
    println!();

    println!("   Invalid: negative amount");
    match Money::new(-10.0) {
        Ok(_) => println!("      accepted (the rule did not apply)"),
        Err(e) => println!("      rejected: \"{}\"", e),
    }
    println!();

    end_step();
    Ok(())
}

fn workflows(storage: &Storage, currency: &CurrencyFormat) -> SpendwiseResult<()> {
    step(5, "Workflows");

    let service = TransactionService::new(storage);
    let inputs = [
        ("Lunch at the restaurant", 45.0, TransactionType::Expense),
        ("Uber to the office", 20.0, TransactionType::Expense),
        ("Freelance project", 800.0, TransactionType::Income),
    ];

    for (description, amount, kind) in inputs {
        if let Err(e) = service.create(CreateTransactionInput::new(description, Money::new(amount)?, kind)) {
            println!("   \"{}\" rejected: {}", description, e);
        }
    }

    println!("   Created through the workflow:");
    print!("{}", format_transaction_table(&service.list()?, currency));
    println!();

    let analysis = AnalysisService::new(storage).analysis(None, None)?;
    println!(
        "   Analysis: income {}, expenses {}, balance {}",
        analysis.total_income.format_with(currency),
        analysis.total_expenses.format_with(currency),
        analysis.balance.format_with(currency)
    );
    println!();

    end_step();
    Ok(())
}

fn endpoints() {
    step(6, "HTTP endpoints (spendwise serve)");

    let routes = [
        ("POST", "/transactions", "create a categorized transaction"),
        ("GET", "/transactions", "list transactions (?category=NAME)"),
        ("GET", "/transactions/:id", "fetch one transaction"),
        ("DELETE", "/transactions/:id", "remove a transaction"),
        ("GET", "/categories", "configured categories"),
        ("GET", "/analysis", "analysis (?startDate=&endDate=)"),
        ("GET", "/health", "service status"),
    ];

    for (method, path, purpose) in routes {
        println!("   {:<7} {:<20} {}", method, path, purpose);
    }
    println!();
}
