// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use hiredesk::app::{App, Flags};
use hiredesk::config::CSRF_FIELD_NAME;
use hiredesk::error::{Error, Result};
use hiredesk::infrastructure::{print_toast_events, TerminalConfirm};
use hiredesk::ui::action::{notified_marker, ActionOutcome, ActionSpec};
use hiredesk::ui::control::{Button, TableCell};
use hiredesk::ui::csrf::{resolve_csrf_token, PageCsrf};
use hiredesk::ui::notifications::ToastHost;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
hiredesk - HireDesk feedback client

USAGE:
  hiredesk [OPTIONS] <COMMAND>

COMMANDS:
  notify <ID>     Send the interview notification for application ID
  poll            Watch the unread-notification badge until Ctrl-C
  copy <TEXT>     Copy TEXT to the clipboard

OPTIONS:
  --lang <LANG>       Interface language (en-US, fr)
  --config <PATH>     Settings file to use
  --base-url <URL>    Server base URL
  --csrf <TOKEN>      CSRF token, as the page's hidden form field
  --cookie <HEADER>   Cookie header to send (session and csrftoken)
  --diagnostics       Print operator diagnostics as JSON on exit
  -h, --help          Print this help

ENVIRONMENT:
  HIREDESK_LOG        Log filter, e.g. `debug` or `hiredesk=trace`
";

/// Delay between checks while waiting for toasts to expire.
const DRAIN_POLL: Duration = Duration::from_millis(100);

enum Command {
    Notify(String),
    Poll,
    Copy(String),
}

struct Cli {
    flags: Flags,
    csrf: Option<String>,
    print_diagnostics: bool,
    command: Command,
}

fn parse_args() -> Result<Option<Cli>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_path: args.opt_value_from_str("--config")?,
        base_url: args.opt_value_from_str("--base-url")?,
        cookie: args.opt_value_from_str("--cookie")?,
    };
    let csrf = args.opt_value_from_str("--csrf")?;
    let print_diagnostics = args.contains("--diagnostics");

    let command = match args.subcommand()?.as_deref() {
        Some("notify") => Command::Notify(args.free_from_str()?),
        Some("poll") => Command::Poll,
        Some("copy") => Command::Copy(args.free_from_str()?),
        Some(other) => return Err(Error::InvalidArgument(format!("unknown command {other:?}"))),
        None => return Err(Error::InvalidArgument("missing command".to_string())),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::InvalidArgument(format!("unexpected arguments: {rest:?}")));
    }

    Ok(Some(Cli {
        flags,
        csrf,
        print_diagnostics,
        command,
    }))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("HIREDESK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let page = page_csrf(cli.csrf.as_deref(), cli.flags.cookie.as_deref());
    let mut app = App::new(cli.flags)?;
    let printer = print_toast_events(app.toasts().subscribe());

    let succeeded = match cli.command {
        Command::Notify(id) => notify(&app, &page, &id).await,
        Command::Poll => {
            poll(&mut app).await?;
            true
        }
        Command::Copy(text) => copy(&app, &text).await,
    };

    drain_toasts(app.toasts()).await;
    printer.abort();

    let collector = app.teardown();
    if cli.print_diagnostics {
        eprintln!("{}", collector.export_json()?);
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn page_csrf(csrf: Option<&str>, cookie: Option<&str>) -> PageCsrf {
    let mut page = PageCsrf::new();
    if let Some(token) = csrf {
        page = page.with_hidden_field(CSRF_FIELD_NAME, token);
    }
    if let Some(cookie) = cookie {
        page = page.with_cookie_header(cookie);
    }
    page
}

async fn notify(app: &App, page: &PageCsrf, id: &str) -> bool {
    let i18n = app.i18n();
    let spec = ActionSpec::send_notification(i18n, id, &resolve_csrf_token(page));
    let trigger = app.action_trigger(Arc::new(TerminalConfirm::stdin(i18n)));
    let button = Button::new(i18n.tr("cli-button-label"));
    let cell = TableCell::default();

    let outcome = trigger
        .perform(&button, spec, |response| {
            cell.set_text(notified_marker(i18n, response.notified_at.as_deref()));
        })
        .await;

    match outcome {
        ActionOutcome::Succeeded(_) => {
            println!("{}", cell.text());
            true
        }
        ActionOutcome::Cancelled => true,
        _ => false,
    }
}

async fn poll(app: &mut App) -> Result<()> {
    let mut state = app.badge().subscribe();
    app.start_polling();
    println!("{}", state.borrow_and_update().label(app.i18n()));

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                return Ok(());
            }
            changed = state.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                println!("{}", state.borrow_and_update().label(app.i18n()));
            }
        }
    }
}

async fn copy(app: &App, text: &str) -> bool {
    let button = Arc::new(Button::new(app.i18n().tr("cli-copy-label")));
    app.clipboard()
        .copy_with_feedback(text, button)
        .await
        .is_copied()
}

/// Lets every shown toast run its course before exit.
async fn drain_toasts(toasts: &ToastHost) {
    while !toasts.toasts().is_empty() {
        tokio::time::sleep(DRAIN_POLL).await;
    }
}
