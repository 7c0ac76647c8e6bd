use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use translator_widget::catalog::LanguageCatalog;
use translator_widget::command::{Command, Side, HELP};
use translator_widget::config::Config;
use translator_widget::widget::{TranslationOutcome, TranslatorWidget};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so it stays out of the rendered widget)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translator_widget=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Using translation endpoint {}", config.translate_api_url);

    let mut widget = TranslatorWidget::from_config(&config, reqwest::Client::new());

    // Completed translations come back through here so input keeps flowing meanwhile
    let (done_tx, mut done_rx) = mpsc::channel::<TranslationOutcome>(1);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP);
    println!("{}", widget.render());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                handle_command(&mut widget, command, &done_tx);
            }
            Some(outcome) = done_rx.recv() => {
                widget.finish_translation(outcome);
                println!("{}", widget.render());
            }
        }
    }

    info!("Bye");
    Ok(())
}

fn handle_command(
    widget: &mut TranslatorWidget,
    command: Command,
    done_tx: &mpsc::Sender<TranslationOutcome>,
) {
    match command {
        Command::SetText(text) => {
            widget.set_source_text(text);
            println!("{}", widget.render());
        }
        Command::Translate => match widget.begin_translation() {
            Some(pending) => {
                let done_tx = done_tx.clone();
                tokio::spawn(async move {
                    let outcome = pending.run().await;
                    if done_tx.send(outcome).await.is_err() {
                        warn!("Widget closed before translation finished");
                    }
                });
                println!("{}", widget.render());
            }
            None => println!("A translation is already in progress"),
        },
        Command::Swap => {
            widget.swap_languages();
            println!("{}", widget.render());
        }
        Command::SourceLanguage(code) => match widget.select_source_language(&code) {
            Ok(_) => println!("{}", widget.render()),
            Err(e) => println!("{}", e),
        },
        Command::TargetLanguage(code) => match widget.select_target_language(&code) {
            Ok(_) => println!("{}", widget.render()),
            Err(e) => println!("{}", e),
        },
        Command::Copy(Side::Source) => widget.copy_source(),
        Command::Copy(Side::Target) => widget.copy_target(),
        Command::Speak(Side::Source) => widget.speak_source(),
        Command::Speak(Side::Target) => widget.speak_target(),
        Command::Languages => {
            for entry in LanguageCatalog::get().iter() {
                println!("  {:<6} {}", entry.code, entry.name);
            }
        }
        Command::Show => println!("{}", widget.render()),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}
