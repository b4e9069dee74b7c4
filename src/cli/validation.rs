use crate::cli::args::CliArgs;
use crate::controller::Action;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    for raw in args.action.iter() {
        if Action::parse(raw).is_none() {
            return Err(format!("invalid --action '{raw}'"));
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json or html"
            ));
        }
    }
    if let Some(raw) = args.header.as_deref() {
        crate::client::transport::parse_header_line(raw)
            .map_err(|e| format!("invalid --header: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::validate;
    use crate::cli::args::CliArgs;

    #[test]
    fn rejects_unknown_action() {
        let args = CliArgs::parse_from(["supplierctl", "-a", "create", "-a", "launch"]);
        assert_eq!(validate(&args).unwrap_err(), "invalid --action 'launch'");
    }

    #[test]
    fn rejects_bad_header() {
        let args = CliArgs::parse_from(["supplierctl", "--header", "no-colon"]);
        assert!(validate(&args).unwrap_err().starts_with("invalid --header"));
    }

    #[test]
    fn accepts_aliases() {
        let args = CliArgs::parse_from([
            "supplierctl",
            "--url",
            "http://localhost:5000",
            "--action",
            "search",
            "--output-format",
            "json",
        ]);
        assert!(validate(&args).is_ok());
    }
}
