use anyhow::Context;
use clap::Parser;
use daypulse_core::api::{
    HttpApiClient, WellbeingApi, DEFAULT_ADVICE_LIMIT, DEFAULT_INPUT_LIMIT,
};
use daypulse_core::dashboard::{Dashboard, ViewState};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Debug, Parser)]
#[command(name = "daypulse")]
struct Args {
    /// User whose data to load.
    user: String,

    /// As-of date (YYYY/MM/DD). Defaults to today's local date.
    #[arg(long)]
    as_of: Option<String>,

    /// Emit the assembled dashboard view as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Show only the most recent journal entry, in full.
    #[arg(long)]
    latest: bool,

    /// List journal entries as dated teasers instead of the dashboard.
    #[arg(long)]
    journal: bool,

    /// List past advice documents instead of the dashboard.
    #[arg(long)]
    advice_log: bool,

    /// Entry cap for --journal / --advice-log.
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = daypulse_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let client = HttpApiClient::from_settings(&settings)?;

    if args.latest {
        let entry = client.fetch_latest_input(&args.user).await?;
        render::print_entry(&entry);
        return Ok(());
    }

    if args.journal {
        let limit = args.limit.unwrap_or(DEFAULT_INPUT_LIMIT);
        let entries = client.fetch_inputs(&args.user, limit).await?;
        render::print_journal_list(&entries);
        return Ok(());
    }

    if args.advice_log {
        let limit = args.limit.unwrap_or(DEFAULT_ADVICE_LIMIT);
        let history = client.fetch_advice_history(&args.user, limit).await?;
        render::print_advice_log(&history);
        return Ok(());
    }

    let today = resolve_as_of(args.as_of.as_deref())?;
    let mut dashboard = Dashboard::new(client);
    dashboard.load(&args.user, today).await;

    match dashboard.state() {
        ViewState::Ready(data) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&render::json_payload(data))?);
            } else {
                render::print_dashboard(&args.user, data);
            }
            Ok(())
        }
        ViewState::Failed(message) => {
            let err = anyhow::anyhow!("{message}");
            sentry_anyhow::capture_anyhow(&err);
            Err(err)
        }
        ViewState::Loading => unreachable!("load() always leaves Ready or Failed"),
    }
}

fn init_sentry(
    settings: &daypulse_core::config::Settings,
) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

fn resolve_as_of(arg: Option<&str>) -> anyhow::Result<chrono::NaiveDate> {
    match arg {
        Some(s) => daypulse_core::time::parse_ymd(s)
            .with_context(|| format!("invalid --as-of date: {s} (expected YYYY/MM/DD)")),
        None => Ok(daypulse_core::time::today_local()),
    }
}
