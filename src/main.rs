use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use proposal_desk::application::workflow::SubmissionWorkflow;
use proposal_desk::config::DeskConfig;
use proposal_desk::domain::ports::{ConfirmationPromptBox, WalletSignerBox};
use proposal_desk::error::WorkflowError;
use proposal_desk::infrastructure::http_gateway::HttpProposalGateway;
use proposal_desk::infrastructure::in_memory::FixedConfirmation;
use proposal_desk::infrastructure::wallet_bridge::HttpWalletSigner;
use proposal_desk::interfaces::image_file::load_profile_image;
use proposal_desk::interfaces::terminal::{DialoguerConfirmation, TerminalPresenter};
use proposal_desk::telemetry::init_tracing;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pay the proposal fee and submit a proposal to the backend
    Submit(SubmitArgs),
    /// Print the local preview data URL of a profile picture
    Preview(PreviewArgs),
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Image file to preview
    path: PathBuf,

    /// MIME type of the image, if the extension is not enough
    #[arg(long)]
    image_type: Option<String>,
}

#[derive(clap::Args)]
struct SubmitArgs {
    /// Project name
    #[arg(long, default_value = "")]
    name: String,

    /// Social handle (e.g. @project)
    #[arg(long, default_value = "")]
    handle: String,

    /// Project website
    #[arg(long, default_value = "")]
    website: String,

    /// What the proposal is about
    #[arg(long, default_value = "")]
    description: String,

    /// Profile picture to upload (max 5MB)
    #[arg(long)]
    image: Option<PathBuf>,

    /// MIME type of the profile picture, if the extension is not enough
    #[arg(long, requires = "image")]
    image_type: Option<String>,

    /// Backend base URL. Overrides BACKEND_URL.
    #[arg(long, env = "BACKEND_URL")]
    backend_url: Option<Url>,

    /// Wallet bridge base URL
    #[arg(long, env = "WALLET_BRIDGE_URL", default_value = "http://127.0.0.1:9876")]
    wallet_url: Url,

    /// Approve the payment without asking
    #[arg(long, short = 'y')]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("warn").map_err(|e| miette!("failed to initialise logging: {}", e))?;

    match cli.command {
        Command::Submit(args) => submit(args).await,
        Command::Preview(args) => preview(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let max_bytes = DeskConfig::default().max_image_bytes;
    let image = load_profile_image(&args.path, args.image_type.as_deref(), max_bytes)
        .into_diagnostic()?;
    image.check(max_bytes).into_diagnostic()?;
    println!("{}", image.preview_data_url());
    Ok(())
}

async fn submit(args: SubmitArgs) -> Result<()> {
    let config = DeskConfig::from_env(args.backend_url).into_diagnostic()?;

    let gateway = HttpProposalGateway::new(&config).into_diagnostic()?;
    debug!(endpoint = %gateway.endpoint(), "proposal backend");
    let signer: WalletSignerBox = Box::new(
        HttpWalletSigner::new(args.wallet_url, config.request_timeout_secs).into_diagnostic()?,
    );
    let prompt: ConfirmationPromptBox = if args.yes {
        Box::new(FixedConfirmation::approve())
    } else {
        Box::new(DialoguerConfirmation)
    };

    let workflow = SubmissionWorkflow::new(
        &config,
        Some(signer),
        Box::new(gateway),
        prompt,
        Box::new(TerminalPresenter),
    );

    workflow
        .edit_draft(|draft| {
            draft.name = args.name;
            draft.handle = args.handle;
            draft.website = args.website;
            draft.description = args.description;
        })
        .await;

    if let Some(path) = args.image {
        let image = load_profile_image(&path, args.image_type.as_deref(), config.max_image_bytes)
            .into_diagnostic()?;
        workflow.select_image(image).await.into_diagnostic()?;
    }

    match workflow.submit().await {
        Ok(()) | Err(WorkflowError::PaymentCancelled) => Ok(()),
        Err(e) => Err(e).into_diagnostic(),
    }
}
