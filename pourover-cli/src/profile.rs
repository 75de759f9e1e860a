use clap::Subcommand;
use colored::Colorize;
use pourover_lib::{
    ProfileStore, Session, Taste,
    form::Message,
    repository::config::CoreConfig,
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List saved profiles
    List,
    /// Save a new profile
    Add {
        /// Name of the coffee
        #[arg(short, long, default_value = "")]
        name: String,
        /// Water temperature in °C (70-100)
        #[arg(short, long)]
        temperature: Option<f64>,
        /// Grind size (0-30)
        #[arg(short, long)]
        grind_size: Option<f64>,
        /// How the brew tasted
        #[arg(long, value_enum)]
        taste: Option<Taste>,
    },
}

pub fn handle(store: ProfileStore, cfg: &CoreConfig, cmd: Command) -> pourover_lib::Result<()> {
    let mut session = Session::new(store, &cfg.form);

    match cmd {
        Command::List => {
            if session.profiles().is_empty() {
                println!("{}", "No saved profiles".dimmed());
            }
            for profile in session.profiles() {
                println!("* {profile}");
            }
        }
        Command::Add {
            name,
            temperature,
            grind_size,
            taste,
        } => {
            session.update(Message::CoffeeNameInput(name))?;
            if let Some(temperature) = temperature {
                session.update(Message::TemperatureChanged(temperature))?;
            }
            if let Some(grind_size) = grind_size {
                session.update(Message::GrindSizeChanged(grind_size))?;
            }
            if let Some(taste) = taste {
                session.update(Message::TasteSelected(taste))?;
            }

            let suggestion = session.form().suggestion().clone();
            session.update(Message::SavePressed)?;

            if let Some(saved) = session.profiles().last() {
                println!("{} {saved}", "Saved".green().bold());
            }
            if !suggestion.is_empty() {
                println!("{} {suggestion}", "Suggestion:".yellow().bold());
            }
        }
    }

    Ok(())
}
