//! Product Catalog Administration CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use catalog_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService,
        category::Category,
        data::{NewProduct, ProductFilter},
        records::ProductRecord,
    },
};

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Product catalog CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URI", global = true, hide_env_values = true)]
    database_uri: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(subcommand)]
    Db(DbCommand),

    #[command(subcommand)]
    Product(ProductCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply schema migrations
    Init,
}

#[derive(Debug, Subcommand)]
enum ProductCommand {
    Create(CreateProductArgs),
    List(ListProductsArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Optional description
    #[arg(long)]
    description: Option<String>,

    /// Price, e.g. 12.50
    #[arg(long)]
    price: Decimal,

    /// Whether the product is available
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    available: bool,

    /// Category name, e.g. CLOTHS
    #[arg(long, default_value = "UNKNOWN")]
    category: Category,
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Exact name to match
    #[arg(long)]
    name: Option<String>,

    /// Category name to match
    #[arg(long)]
    category: Option<Category>,

    /// Availability to match
    #[arg(long)]
    available: Option<bool>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let uri = cli
        .database_uri
        .ok_or_else(|| "DATABASE_URI must be set".to_string())?;

    let pool = database::connect(&uri)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match cli.command {
        Commands::Db(DbCommand::Init) => {
            database::init_db(&pool)
                .await
                .map_err(|error| format!("failed to initialise database: {error}"))?;

            println!("database initialised");

            Ok(())
        }
        Commands::Product(command) => {
            let service = PgProductsService::new(Db::new(pool));

            match command {
                ProductCommand::Create(args) => create_product(&service, args).await,
                ProductCommand::List(args) => list_products(&service, args).await,
            }
        }
    }
}

async fn create_product(
    service: &PgProductsService,
    args: CreateProductArgs,
) -> Result<(), String> {
    let product = service
        .create_product(NewProduct {
            name: args.name,
            description: args.description,
            price: args.price,
            available: args.available,
            category: args.category,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    print_product(&product);

    Ok(())
}

async fn list_products(service: &PgProductsService, args: ListProductsArgs) -> Result<(), String> {
    let products = service
        .list_products(ProductFilter {
            name: args.name,
            category: args.category,
            available: args.available,
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in &products {
        print_product(product);
    }

    Ok(())
}

fn print_product(product: &ProductRecord) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.price,
        product.category,
        if product.available { "available" } else { "unavailable" }
    );
}
