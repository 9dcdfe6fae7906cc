// recipe-book - a recipe box that lives on your machine
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use recipe_book_lib::{
    core::RecipeBook, telemetry, view::ViewRenderer, Config, Database, RecipeError,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    telemetry::init();

    if let Err(e) = run().await {
        // Library errors already know how to talk to a human
        match e.downcast_ref::<RecipeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "add" => handle_add(&args[2..]).await,
        "list" => handle_list().await,
        "search" => handle_search(&args[2..]).await,
        "show" => handle_show(&args[2..]).await,
        "render" => handle_render(&args[2..]).await,
        "status" => handle_status().await,
        "clear" => handle_clear().await,
        "version" | "-v" | "--version" => {
            println!("recipe-book v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

async fn handle_add(args: &[String]) -> anyhow::Result<()> {
    let mut name: Option<String> = None;
    let mut ingredients: Option<String> = None;
    let mut instructions: Option<String> = None;
    let mut image: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1).cloned();
        match args[i].as_str() {
            "--name" => name = value,
            "--ingredients" => ingredients = value,
            "--instructions" => instructions = value,
            "--image" => image = value.map(PathBuf::from),
            other => {
                return Err(RecipeError::InvalidArgument(format!("Unknown option: {}", other)).into())
            }
        }
        i += 2;
    }

    // Same job as the required attribute on the form fields
    let name = required(name, "--name")?;
    let ingredients = required(ingredients, "--ingredients")?;
    let instructions = required(instructions, "--instructions")?;

    let mut book = open_book().await?;
    {
        let form = book.form_mut();
        form.name = name;
        form.ingredients = ingredients;
        form.instructions = instructions;
    }
    if let Some(path) = image {
        book.select_image(path).await;
    }

    let submission = book.submit().await?;
    println!("{}", submission.message);
    println!("{}", submission.recipe.summary());

    Ok(())
}

async fn handle_list() -> anyhow::Result<()> {
    let book = open_book().await?;

    print!("{}", ViewRenderer::text_list(&book.visible()));

    Ok(())
}

async fn handle_search(args: &[String]) -> anyhow::Result<()> {
    let mut book = open_book().await?;
    book.set_search(args.join(" "));

    let results = book.visible();
    if !results.is_empty() {
        println!(
            "\nFound {} recipe(s) matching '{}':",
            results.len(),
            book.search_term()
        );
        println!("{}", "=".repeat(60));
    }
    print!("{}", ViewRenderer::text_list(&results));

    Ok(())
}

async fn handle_show(args: &[String]) -> anyhow::Result<()> {
    let id = parse_id(args.first())?;
    let mut book = open_book().await?;

    if book.open_recipe(id).is_none() {
        return Err(RecipeError::RecipeNotFound(id).into());
    }
    if let Some(recipe) = book.selected() {
        print!("{}", ViewRenderer::text_detail(recipe));
    }

    Ok(())
}

async fn handle_render(args: &[String]) -> anyhow::Result<()> {
    let mut search: Option<String> = None;
    let mut open: Option<i64> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--search" => search = args.get(i + 1).cloned(),
            "--open" => open = Some(parse_id(args.get(i + 1))?),
            "--output" => output = args.get(i + 1).map(PathBuf::from),
            other => {
                return Err(RecipeError::InvalidArgument(format!("Unknown option: {}", other)).into())
            }
        }
        i += 2;
    }

    let mut book = open_book().await?;
    if let Some(term) = search {
        book.set_search(term);
    }
    if let Some(id) = open {
        if book.open_recipe(id).is_none() {
            return Err(RecipeError::RecipeNotFound(id).into());
        }
    }

    let html = book.render();
    match output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

async fn handle_status() -> anyhow::Result<()> {
    let config = Config::load()?;
    let db = Arc::new(Database::new(config.db_path()).await?);
    let stats = db.stats().await?;
    let slots = db.keys().await?;
    let book = RecipeBook::open(Arc::clone(&db), config.storage_key).await;

    println!("\nrecipe-book Status");
    println!("{}", "=".repeat(60));
    println!("  Data directory: {}", config.data_dir.display());
    println!("  Storage key:    {}", book.store().key());
    println!("  Recipes:        {}", book.store().len());
    println!("  Stored slots:   {} ({})", stats.total_slots, slots.join(", "));
    println!("  Stored bytes:   {}", stats.total_bytes);
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_clear() -> anyhow::Result<()> {
    let mut book = open_book().await?;
    let count = book.store().len();

    book.clear().await?;
    println!("Removed {} recipe(s).", count);

    Ok(())
}

async fn open_book() -> anyhow::Result<RecipeBook> {
    let config = Config::load()?;
    let db = Database::new(config.db_path()).await?;
    Ok(RecipeBook::open(Arc::new(db), config.storage_key).await)
}

fn required(value: Option<String>, flag: &str) -> Result<String, RecipeError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| RecipeError::InvalidArgument(format!("Please fill in {}", flag)))
}

fn parse_id(arg: Option<&String>) -> Result<i64, RecipeError> {
    let arg = arg.ok_or_else(|| RecipeError::InvalidArgument("Missing recipe id".to_string()))?;
    arg.parse()
        .map_err(|_| RecipeError::InvalidArgument(format!("Not a recipe id: {}", arg)))
}

fn print_usage() {
    println!(
        r#"recipe-book v{} - Your recipes, on your machine

USAGE:
    recipe-book <COMMAND> [OPTIONS]

COMMANDS:
    add                    Add a recipe
        --name <NAME>
        --ingredients <TEXT>   one ingredient per line
        --instructions <TEXT>  one step per line
        --image <PATH>
    list                   List all recipes
    search <term>          Search names, ingredients and steps
    show <id>              Show one recipe
    render                 Render the recipe page as HTML
        --search <TERM>
        --open <ID>
        --output <PATH>    (default: stdout)
    status                 Show storage status
    clear                  Delete every saved recipe
    version                Show version
    help                   Show this help

ENVIRONMENT:
    RECIPE_BOOK_HOME          data directory (default: ~/.recipe-book)
    RECIPE_BOOK_STORAGE_KEY   storage slot (default: recipes)
    RUST_LOG                  log filter (default: warn)

EXAMPLES:
    recipe-book add --name Pasta --ingredients $'Pasta\nWater' \
        --instructions $'Boil water\nAdd pasta' --image pasta.jpg
    recipe-book search tomato
    recipe-book render --search soup --output recipes.html
"#,
        env!("CARGO_PKG_VERSION")
    );
}
