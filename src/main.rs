use clap::{Parser, Subcommand};
use kondate::{client::RecipeApi, AppConfig, AppState, KondateClient, Session};
use log::info;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overrides the configured host
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Ask a running server for recipes from the given ingredients
    Cook {
        /// Ingredients, separated by spaces or commas
        #[arg(required = true)]
        ingredients: Vec<String>,
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,
        /// Also show the walkthrough of this recipe (1-based)
        #[arg(short, long)]
        detail: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::from_config(&config);
            let listener = TcpListener::bind((host.as_str(), port)).await?;
            info!("Server listening on {}", listener.local_addr()?);
            kondate::server::run(listener, state).await?;
        }
        Command::Cook {
            ingredients,
            server,
            detail,
        } => {
            let client = KondateClient::new(server, Duration::from_secs(config.timeout))?;
            cook(client, &ingredients.join(" "), detail).await?;
        }
    }

    Ok(())
}

async fn cook(
    client: KondateClient,
    menu: &str,
    detail: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let extracted = client.analyze_menu(menu).await?;
    let mut session = Session::new(client);
    for ingredient in &extracted.ingredients {
        session.add_ingredients(ingredient);
    }
    println!("食材: {}", session.ingredients().join("、"));

    session.submit().await;
    if let Some(error) = session.error() {
        eprintln!("エラー: {error}");
        if session.recipes().is_empty() {
            return Ok(());
        }
    }

    for (i, recipe) in session.recipes().iter().enumerate() {
        println!("\n{}. {} ({}kcal)", i + 1, recipe.name, recipe.calories);
        println!("   材料: {}", recipe.ingredients.join("、"));
        for step in &recipe.instructions {
            println!("   - {step}");
        }
    }

    if !session.videos().is_empty() {
        println!("\n参考動画:");
        for video in session.videos() {
            println!(
                "   {} / {} https://www.youtube.com/watch?v={}",
                video.title, video.channel_title, video.id
            );
        }
    }

    if let Some(n) = detail {
        session.select_recipe(n.saturating_sub(1)).await;
        if let Some(detail) = session.detail() {
            println!("\n{} の詳しい作り方:", detail.name);
            for step in &detail.detailed_instructions {
                println!("   {step}");
            }
            for tip in &detail.tips {
                println!("   ポイント: {tip}");
            }
        }
    }

    Ok(())
}
