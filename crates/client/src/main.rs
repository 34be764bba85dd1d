//! lexscopic-client CLI entry point.

use clap::Parser;
use lexscopic_client::cli::{Cli, Commands, OutputFormat};
use lexscopic_client::client::events::SubmitEventRequest;
use lexscopic_client::client::LexscopicClient;
use lexscopic_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = LexscopicClient::new(&cli.base_url)?;

    match cli.command {
        Commands::Events(events_cmd) => {
            use lexscopic_client::cli::events::EventsAction;
            match events_cmd.action {
                EventsAction::List(filters) => {
                    let events = client.list_events(&filters.to_criteria()).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                    }
                }
                EventsAction::Sections(filters) => {
                    let sections = client.list_sections(&filters.to_criteria()).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&sections, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_sections(&sections)),
                    }
                }
                EventsAction::Get { id } => {
                    let event = client.get_event(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_event(&event)),
                    }
                }
                EventsAction::Calendar { id } => {
                    let link = client.calendar_link(&id).await?;
                    println!("{}", link);
                }
                EventsAction::Submit(args) => {
                    let event = client
                        .submit_event(&SubmitEventRequest::from(args))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Submitted:");
                            }
                            println!("{}", pretty::format_event(&event))
                        }
                    }
                }
            }
        }
        Commands::Tags => {
            let tags = client.list_tags().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&tags, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_tags(&tags)),
            }
        }
        Commands::Health(health_cmd) => {
            use lexscopic_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("{} is live", client.base_url());
                    }
                }
                HealthAction::Status => {
                    let health = client.healthz().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
                    }
                }
            }
        }
    }

    Ok(())
}
