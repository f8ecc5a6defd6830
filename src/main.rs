use anyhow::Result;
use clap::Parser;
use scriptgen::{config, generator, llm};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "scriptgen")]
#[command(about = "AI-powered command-line script generator")]
#[command(version)]
struct Args {
    /// Requirements for the script (prompted for on stdin when omitted)
    requirements: Vec<String>,

    /// Model to use instead of the configured one
    #[arg(short, long)]
    model: Option<String>,

    /// Directory to write the script into
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Print the response schema and exit
    #[arg(long)]
    show_schema: bool,

    /// Print the prompt that would be sent and exit
    #[arg(long)]
    show_prompt: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.show_schema {
        println!(
            "{}",
            serde_json::to_string_pretty(&llm::script_response_schema())?
        );
        return Ok(());
    }

    // Load configuration
    let mut config = config::load_config()?;
    if let Some(model) = args.model {
        config.llm.model = model;
    }
    if let Some(dir) = &args.output_dir {
        config.output.directory = PathBuf::from(shellexpand::tilde(dir).into_owned());
    }

    let requirements = if args.requirements.is_empty() {
        print!("Enter the requirements for the script: ");
        std::io::stdout().flush()?;
        generator::read_requirements(std::io::stdin().lock())?
    } else {
        args.requirements.join(" ")
    };

    if args.show_prompt {
        println!("{}", llm::prompt::build_prompt(&requirements));
        return Ok(());
    }

    let llm_client = llm::create_client(&config.llm)?;
    let script = generator::generate(llm_client.as_ref(), &requirements, &config.output).await?;

    generator::report(&script, &mut std::io::stdout().lock())?;

    Ok(())
}
