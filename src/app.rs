use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::client::transport::DEFAULT_BASE_URL;
use crate::client::{HttpTransport, SupplierClient, Transport, TransportOptions};
use crate::config::{self, ConfigFile};
use crate::controller::{Action, FormController};
use crate::form::SupplierForm;
use crate::output::{self, console, OutputFormat};
use crate::shell;

#[derive(Clone, Debug)]
struct RunConfig {
    transport: TransportOptions,
    no_color: bool,
    verbose: u8,
    output: Option<String>,
    output_format: OutputFormat,
    form: SupplierForm,
    actions: Vec<Action>,
    shell: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };
    let verbose = if args.verbose > 0 {
        args.verbose
    } else {
        cfg.verbose.unwrap_or(0)
    };

    let base_url = args
        .url
        .or(cfg.url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim()
        .to_string();
    if reqwest::Url::parse(&base_url).is_err() {
        return Err(format!("invalid URL: {base_url}"));
    }

    let timeout_seconds = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout_seconds == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }
    let proxy = args.proxy.or(cfg.proxy).filter(|p| !p.trim().is_empty());
    let header = args.header.or(cfg.header).filter(|h| !h.trim().is_empty());

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}'"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let form = SupplierForm {
        id: args.id.unwrap_or_default(),
        name: args.name.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        preferred: args.preferred.unwrap_or_default(),
    };

    let actions: Vec<Action> = args.action.iter().filter_map(|raw| Action::parse(raw)).collect();
    if actions.is_empty() && !args.shell {
        return Err("nothing to do: pass at least one --action or use --shell".to_string());
    }

    Ok(RunConfig {
        transport: TransportOptions {
            base_url,
            timeout_seconds,
            proxy,
            header,
        },
        no_color,
        verbose,
        output,
        output_format,
        form,
        actions,
        shell: args.shell,
    })
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "supplierctl=debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn spinner(action: Action) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::with_template(":: {spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(action.name());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

async fn run_actions<T: Transport>(ctl: &mut FormController<T>, actions: &[Action]) {
    for action in actions.iter().copied() {
        if action.uses_network() {
            let pb = spinner(action);
            ctl.dispatch(action).await;
            pb.finish_and_clear();
        } else {
            ctl.dispatch(action).await;
        }
        for line in shell::action_report(ctl, action) {
            println!("{line}");
        }
    }
}

async fn write_results<T: Transport>(
    ctl: &FormController<T>,
    path: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let Some(records) = ctl.results() else {
        tracing::debug!(path, "no search results to write");
        return Ok(());
    };
    let rendered = output::render(&output::build_rows(records), format);

    let mut outfile = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| format!("failed to open output file: {e}"))?;
    outfile
        .write_all(&rendered)
        .await
        .map_err(|e| format!("failed to write output file: {e}"))?;
    println!("{}", console::kv_line("Saved", path));
    Ok(())
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    let transport = HttpTransport::new(&run.transport).map_err(|e| e.to_string())?;

    println!("{}", console::kv_line("Service", &run.transport.base_url));
    println!(
        "{}",
        console::kv_line(
            "HTTP",
            &format!(
                "timeout={}s proxy={} header={}",
                run.transport.timeout_seconds,
                if run.transport.proxy.is_some() { "on" } else { "off" },
                if run.transport.header.is_some() { "on" } else { "off" },
            )
        )
    );

    let mut ctl = FormController::new(SupplierClient::new(transport)).with_form(run.form);
    run_actions(&mut ctl, &run.actions).await;

    if run.shell {
        println!("{}", shell::help_text());
        shell::run_shell(&mut ctl, BufReader::new(tokio::io::stdin())).await?;
    }

    if let Some(path) = run.output.as_deref() {
        write_results(&ctl, path, run.output_format).await?;
    }
    Ok(())
}

fn init_config(path: Option<String>) -> Result<(), String> {
    let path = match path {
        Some(p) => config::expand_tilde(&p),
        None => config::default_config_path()
            .ok_or_else(|| "cannot determine home directory for config".to_string())?,
    };
    let written = config::ensure_default_config_file(&path)?;
    let state = if written { "written" } else { "exists" };
    println!(
        "{}",
        console::kv_line("Config", &format!("{} ({state})", path.display()))
    );
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        return init_config(args.config);
    }

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    if run.no_color {
        colored::control::set_override(false);
    }
    init_tracing(run.verbose);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
