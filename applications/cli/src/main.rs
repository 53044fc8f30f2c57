/// Nature Sounds - command-line client
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use nature_core::support::{contact_channel, CONTACT_CHANNELS};
use nature_core::validation::{LoginForm, RegistrationForm};
use nature_core::{FeedFilter, PlayerSession, ProfileId, ProfileUpdate, SoundId};
use nature_server_client::NatureSoundsClient;
use nature_sounds::{
    config::CliConfig, credentials::FileCredentialStore, player::play_for, sink::LoggingSink,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nature-sounds")]
#[command(about = "Nature Sounds streaming client", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Mine,
    New,
}

impl From<FilterArg> for FeedFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FeedFilter::All,
            FilterArg::Mine => FeedFilter::MySounds,
            FilterArg::New => FeedFilter::NewSounds,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long, env = "NATURE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Agree to the Terms & Conditions
        #[arg(long)]
        agree_terms: bool,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "NATURE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to the password
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Agree to the Terms & Conditions
        #[arg(long)]
        agree_terms: bool,
    },
    /// Send a password reset code
    ForgotPassword {
        #[arg(short, long)]
        email: String,
    },
    /// Log out and forget the session
    Logout,
    /// List the home feed
    Sounds {
        #[arg(short, long, value_enum, default_value = "all")]
        filter: FilterArg,
    },
    /// Show one sound
    Sound {
        /// Sound id
        id: String,
        /// Look the id up among the sample sounds
        #[arg(long)]
        sample: bool,
    },
    /// Stream a sound with a running timer
    Play {
        /// Sound id
        id: String,
        /// Look the id up among the sample sounds
        #[arg(long)]
        sample: bool,
        /// Stop after this many seconds (default: until Ctrl+C)
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Show the logged-in profile
    Profile,
    /// Change profile fields; omitted fields keep their current value
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        about: Option<String>,
        /// Language id
        #[arg(long)]
        language: Option<String>,
    },
    /// Print the photo URL for a profile
    PhotoUrl {
        /// Profile id
        profile_id: String,
        /// Photo filename; omitted means the default avatar
        file: Option<String>,
    },
    /// List support contact channels
    Support {
        /// Only print the URL of this channel
        #[arg(long)]
        channel: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nature_sounds=info,nature_server_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let store = FileCredentialStore::open(&config.storage.credentials_path)
        .await
        .context("Failed to open credentials file")?;
    let client = NatureSoundsClient::new(config.client_config(), Arc::new(store))?;

    match cli.command {
        Commands::Login {
            email,
            password,
            agree_terms,
        } => {
            let form = LoginForm {
                email,
                password,
                agree_to_terms: agree_terms,
            };
            let creds = client.login(&form).await?;
            println!("Logged in as profile {}", creds.profile_id);
        }
        Commands::Register {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            agree_terms,
        } => {
            let form = RegistrationForm {
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                email,
                password,
                first_name,
                last_name,
                agree_to_terms: agree_terms,
            };
            client.register(&form).await?;
            println!("Registration successful. Please log in.");
        }
        Commands::ForgotPassword { email } => {
            let message = client.send_reset_code(&email).await?;
            println!("{}", message);
        }
        Commands::Logout => {
            client.logout().await?;
            println!("Logged out");
        }
        Commands::Sounds { filter } => {
            list_sounds(&client, filter.into()).await?;
        }
        Commands::Sound { id, sample } => {
            show_sound(&client, &SoundId::new(id), sample).await?;
        }
        Commands::Play {
            id,
            sample,
            seconds,
        } => {
            play(&client, &SoundId::new(id), sample, seconds).await?;
        }
        Commands::Profile => {
            show_profile(&client).await?;
        }
        Commands::UpdateProfile {
            first_name,
            last_name,
            email,
            about,
            language,
        } => {
            let edit = client.get_profile_for_edit().await?;
            let mut update = ProfileUpdate::from_profile(&edit.profile);
            if update.default_language_id.is_empty() {
                if let Some(lang) = edit.selected_language() {
                    update.default_language_id = lang.id.clone();
                }
            }
            if let Some(v) = first_name {
                update.first_name = v;
            }
            if let Some(v) = last_name {
                update.last_name = v;
            }
            if let Some(v) = email {
                update.email = v;
            }
            if let Some(v) = about {
                update.about = v;
            }
            if let Some(v) = language {
                if !edit.languages.iter().any(|l| l.id == v) {
                    bail!("Unknown language id: {}", v);
                }
                update.default_language_id = v;
            }
            client.update_profile(&update).await?;
            println!("Profile updated successfully");
        }
        Commands::PhotoUrl { profile_id, file } => {
            let profile_id: ProfileId = profile_id.parse()?;
            println!("{}", client.profile_photo_url(profile_id, file.as_deref()));
        }
        Commands::Support { channel } => {
            support(channel.as_deref())?;
        }
    }

    Ok(())
}

async fn list_sounds(client: &NatureSoundsClient, filter: FeedFilter) -> anyhow::Result<()> {
    let feed = client.load_feed().await?;
    let sounds = feed.filter(filter);

    if sounds.is_empty() {
        println!("No sounds found");
        return Ok(());
    }

    println!("Sounds ({}):", sounds.len());
    for sound in sounds {
        println!("  [{}] {} ({})", sound.id, sound.title, sound.source);
        if let Some(photo) = sound.photo.as_deref().filter(|p| !p.is_empty()) {
            println!("      {}", client.sound_image_url(photo));
        }
    }

    Ok(())
}

async fn show_sound(client: &NatureSoundsClient, id: &SoundId, sample: bool) -> anyhow::Result<()> {
    let detail = if sample {
        client.get_sample_sound(id).await?
    } else {
        client.get_sound(id).await?
    };

    println!("{}", detail.title);
    if let Some(description) = &detail.description {
        println!("  {}", description);
    }
    if let Some(photo) = detail.photo.as_deref().filter(|p| !p.is_empty()) {
        println!("  Image:  {}", client.sound_image_url(photo));
    }
    match &detail.stream_url {
        Some(url) => println!("  Stream: {}", url),
        None => println!("  Stream: unavailable"),
    }

    Ok(())
}

async fn play(
    client: &NatureSoundsClient,
    id: &SoundId,
    sample: bool,
    seconds: Option<u64>,
) -> anyhow::Result<()> {
    let detail = if sample {
        client.get_sample_sound(id).await?
    } else {
        client.get_sound(id).await?
    };
    let Some(url) = detail.stream_url else {
        bail!("Sound {} has no stream", id);
    };

    println!("Playing: {}", detail.title);
    let mut session = PlayerSession::new(LoggingSink::new());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    play_for(&mut session, url, seconds, shutdown, |s| {
        println!("  {}", s.elapsed_display());
    })
    .await?;

    Ok(())
}

async fn show_profile(client: &NatureSoundsClient) -> anyhow::Result<()> {
    let creds = client
        .credentials()
        .await?
        .context("Not logged in")?;
    let edit = client.get_profile_for_edit().await?;
    let profile = &edit.profile;

    println!("{}", profile.display_name());
    println!("  Profile:  {}", creds.profile_id);
    println!("  Email:    {}", profile.email);
    if let Some(about) = profile.about.as_deref().filter(|a| !a.is_empty()) {
        println!("  About:    {}", about);
    }
    if let Some(lang) = edit.selected_language() {
        println!("  Language: {} ({})", lang.language, lang.id);
    }
    println!(
        "  Photo:    {}",
        client.profile_photo_url(creds.profile_id, profile.photo.as_deref())
    );

    Ok(())
}

fn support(channel: Option<&str>) -> anyhow::Result<()> {
    if let Some(id) = channel {
        let channel = contact_channel(id).with_context(|| format!("Unknown channel: {}", id))?;
        println!("{}", channel.url);
        return Ok(());
    }

    println!("Help & Support:");
    for channel in CONTACT_CHANNELS {
        println!("  {:<18} {:<22} {}", channel.id, channel.title, channel.url);
    }
    Ok(())
}
