use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::Transport;
use crate::controller::{Action, FormController};
use crate::form::Field;
use crate::output::{self, console};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Set(Field, String),
    Run(Action),
    Show,
    Results,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(Self::Empty);
        }
        // Only the single separating space is dropped; field values keep
        // any other whitespace exactly as typed.
        let (head, rest) = match line.split_once(' ') {
            Some((head, rest)) => (head.trim(), rest),
            None => (line.trim(), ""),
        };

        if let Some(field) = Field::parse(head) {
            return Ok(Self::Set(field, rest.to_string()));
        }
        if let Some(action) = Action::parse(head) {
            if !rest.trim().is_empty() {
                return Err(format!("'{}' takes no arguments", action));
            }
            return Ok(Self::Run(action));
        }
        match head.to_lowercase().as_str() {
            "show" => Ok(Self::Show),
            "results" => Ok(Self::Results),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

pub fn help_text() -> String {
    let actions = Action::ALL
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "fields : id|name|category|preferred <value>  (empty value clears the field)\n\
         actions: {actions}\n\
         views  : show, results\n\
         other  : help, quit\n"
    )
}

/// Reads one command per line and handles each to completion before the
/// next line is read. Ends on `quit` or end of input.
pub async fn run_shell<T, R>(ctl: &mut FormController<T>, input: R) -> Result<(), String>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read shell input: {e}")),
        };
        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(cmd) => {
                for out in handle(ctl, cmd).await {
                    println!("{out}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

/// Applies one command and returns the lines to print.
pub async fn handle<T: Transport>(ctl: &mut FormController<T>, cmd: ShellCommand) -> Vec<String> {
    match cmd {
        ShellCommand::Set(field, value) => {
            ctl.set_field(field, value);
            vec![console::form_line(ctl.form())]
        }
        ShellCommand::Run(action) => {
            ctl.dispatch(action).await;
            action_report(ctl, action)
        }
        ShellCommand::Show => vec![console::form_line(ctl.form())],
        ShellCommand::Results => match ctl.results() {
            Some(records) => vec![results_text(records)],
            None => vec!["no search results yet".to_string()],
        },
        ShellCommand::Help => vec![help_text()],
        ShellCommand::Quit | ShellCommand::Empty => Vec::new(),
    }
}

/// The lines printed after an action: flash, form, and any listing it produced.
pub fn action_report<T: Transport>(ctl: &FormController<T>, action: Action) -> Vec<String> {
    let mut out = Vec::new();
    if action.uses_network() {
        if let Some(flash) = ctl.flash() {
            out.push(console::flash_line(flash));
        }
    }
    out.push(console::form_line(ctl.form()));
    match action {
        Action::Search => {
            if let Some(records) = ctl.results() {
                out.push(results_text(records));
            }
        }
        Action::Products => {
            if let Some(products) = ctl.products() {
                out.push(output::render_products(products));
            }
        }
        _ => {}
    }
    out
}

fn results_text(records: &[crate::model::SupplierRecord]) -> String {
    String::from_utf8_lossy(&output::render_text(&output::build_rows(records))).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::scripted::ScriptedTransport;
    use crate::client::SupplierClient;

    #[test]
    fn parses_field_edits_and_actions() {
        assert_eq!(
            ShellCommand::parse("name Acme Corp ").unwrap(),
            ShellCommand::Set(Field::Name, "Acme Corp ".to_string())
        );
        assert_eq!(
            ShellCommand::parse("name  Acme").unwrap(),
            ShellCommand::Set(Field::Name, " Acme".to_string())
        );
        assert_eq!(
            ShellCommand::parse("category").unwrap(),
            ShellCommand::Set(Field::Category, String::new())
        );
        assert_eq!(
            ShellCommand::parse("SEARCH").unwrap(),
            ShellCommand::Run(Action::Search)
        );
        assert_eq!(ShellCommand::parse("   ").unwrap(), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
        assert!(ShellCommand::parse("create now").is_err());
        assert!(ShellCommand::parse("launch").is_err());
    }

    #[tokio::test]
    async fn script_drives_the_controller_in_order() {
        let transport = ScriptedTransport::new();
        transport.reply(201, r#"{"id":7,"name":"Acme","category":"tools","preferred":false}"#);
        transport.reply(200, r#"[{"id":7,"name":"Acme","category":"tools","preferred":false}]"#);
        let mut ctl = FormController::new(SupplierClient::new(transport.clone()));

        let script = b"name Acme\ncategory tools\ncreate\nbogus\nsearch\nquit\nretrieve\n";
        run_shell(&mut ctl, &script[..]).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].path, "/suppliers");
        assert_eq!(sent[1].path, "/suppliers?name=Acme&category=tools");
        assert_eq!(ctl.form().id, "7");
    }

    #[tokio::test]
    async fn field_value_whitespace_reaches_the_query() {
        let transport = ScriptedTransport::new();
        transport.reply(200, "[]");
        let mut ctl = FormController::new(SupplierClient::new(transport.clone()));

        run_shell(&mut ctl, &b"name A \nsearch\n"[..]).await.unwrap();

        assert_eq!(ctl.form().name, "A ");
        assert_eq!(transport.requests()[0].path, "/suppliers?name=A ");
    }

    #[tokio::test]
    async fn clear_report_has_no_flash() {
        let transport = ScriptedTransport::new();
        let mut ctl = FormController::new(SupplierClient::new(transport));
        let lines = handle(&mut ctl, ShellCommand::Run(Action::Clear)).await;
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn results_before_search() {
        let transport = ScriptedTransport::new();
        let mut ctl = FormController::new(SupplierClient::new(transport));
        let lines = handle(&mut ctl, ShellCommand::Results).await;
        assert_eq!(lines, vec!["no search results yet".to_string()]);
    }
}
