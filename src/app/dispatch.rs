use crate::cli::commands::{Cli, Commands, GenerateArgs};
use anyhow::{Context, Result};
use std::sync::Arc;

use powwow::Config;
use powwow::core::form::{FileStorage, FormField, FormStore};
use powwow::core::generation::{GenerationRequest, Generator};
use powwow::core::message::{Artifact, GeneratedArtifacts};
use powwow::core::providers::OpenAiResponsesProvider;
use powwow::core::share::{
    self, Clipboard, NoticeLevel, Notifier, SystemClipboard, TerminalNotifier,
};
use powwow::error::ShareError;
use powwow::transport::gateway::run_gateway;

fn open_store(config: &Config) -> FormStore<FileStorage> {
    FormStore::load(FileStorage::new(config.state_dir()))
}

fn print_fields(store: &FormStore<FileStorage>) {
    for (field, value) in store.state().fields() {
        println!("{:<16}{value}", field.label());
    }
}

fn show(config: &Config, json: bool) -> Result<()> {
    let store = open_store(config);
    let artifacts = GeneratedArtifacts::from_state(store.state());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&artifacts).context("serialize artifacts")?
        );
    } else {
        print!("{}", artifacts.render_blocks());
    }
    Ok(())
}

fn set_field(config: &Config, field: &str, value: String) -> Result<()> {
    let field = FormField::parse(field)?;
    let mut store = open_store(config);
    store.update(field, value)?;
    tracing::info!(%field, "form field updated");
    print_fields(&store);
    Ok(())
}

fn reset(config: &Config, notifier: &dyn Notifier) -> Result<()> {
    let mut store = open_store(config);
    store.reset()?;
    notifier.notify(NoticeLevel::Success, "Reset");
    Ok(())
}

fn copy_artifact(
    config: &Config,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    artifact: Artifact,
    item: Option<usize>,
) -> Result<()> {
    let store = open_store(config);
    let artifacts = GeneratedArtifacts::from_state(store.state());
    let index = match item {
        Some(0) => anyhow::bail!("--item is 1-based"),
        Some(n) => Some(n - 1),
        None => None,
    };
    let text = artifacts.text(artifact, index).with_context(|| {
        format!(
            "{artifact} has {} line(s)",
            artifacts.lines(artifact).len()
        )
    })?;
    share::copy(clipboard, notifier, &text)?;
    Ok(())
}

fn share_form(
    config: &Config,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    base_url: Option<&str>,
) -> Result<()> {
    let store = open_store(config);
    let base = base_url.unwrap_or(&config.share.base_url);
    match share::share(clipboard, notifier, base, store.state()) {
        Ok(link) => println!("{link}"),
        // Still hand the link over when no clipboard is available.
        Err(ShareError::Clipboard(_)) => println!("{}", share::share_link(base, store.state())?),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn import(config: &Config, notifier: &dyn Notifier, link: &str) -> Result<()> {
    let state = share::state_from_link(link)?;
    let mut store = open_store(config);
    store.replace(state)?;
    notifier.notify(NoticeLevel::Success, "Shared form loaded");
    print_fields(&store);
    Ok(())
}

async fn generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let provider = OpenAiResponsesProvider::with_base_url(
        config.provider.api_key.as_deref(),
        &config.provider.base_url,
        config.provider.timeout_secs,
    );
    let generator = Generator::new(Arc::new(provider));
    let request = GenerationRequest {
        business: args.business,
        audience: args.audience,
        offer: args.offer,
        tone: args.tone,
        platform: args.platform,
        principle: args.principle,
    };

    let output = generator.generate(&request).await.map_err(|error| {
        tracing::error!(kind = error.kind(), "generation failed");
        anyhow::Error::new(error)
    })?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("serialize generation output")?
    );
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let clipboard = SystemClipboard;
    let notifier = TerminalNotifier;

    match cli.command {
        Commands::Show { json } => show(&config, json),
        Commands::Fields => {
            print_fields(&open_store(&config));
            Ok(())
        }
        Commands::Set { field, value } => set_field(&config, &field, value),
        Commands::Reset => reset(&config, &notifier),
        Commands::Copy { artifact, item } => {
            copy_artifact(&config, &clipboard, &notifier, artifact, item)
        }
        Commands::Share { base_url } => {
            share_form(&config, &clipboard, &notifier, base_url.as_deref())
        }
        Commands::Import { link } => import(&config, &notifier, &link),
        Commands::Generate(args) => generate(&config, args).await,
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            run_gateway(&host, port, Arc::new(config)).await
        }
    }
}
