use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "supplierctl",
    version,
    about = "form controller for the suppliers REST API",
    long_about = "supplierctl binds a supplier form (id, name, category, preferred) to the suppliers REST API.\n\nExamples:\n  supplierctl -u http://localhost:5000 -n Acme -g electronics -p true -a create\n  supplierctl -u http://localhost:5000 -i 7 -a retrieve\n  supplierctl -u http://localhost:5000 -n Acme -a search -o results.html\n  supplierctl -u http://localhost:5000 --shell\n\nTip: Use --config to persist the service URL and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'N',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the last search results to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Results file format (text, json, html)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'u',
        long = "u",
        visible_alias = "url",
        value_name = "URL",
        help_heading = "Service",
        help = "Base URL of the suppliers service."
    )]
    pub url: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Service",
        help = "Path to config file (defaults to ~/.supplierctl/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Service",
        help = "Write a default config file (if none exists) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'i',
        long = "id",
        value_name = "ID",
        help_heading = "Form",
        help = "Supplier id field."
    )]
    pub id: Option<String>,

    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help_heading = "Form",
        help = "Supplier name field."
    )]
    pub name: Option<String>,

    #[arg(
        short = 'g',
        long = "category",
        value_name = "CATEGORY",
        help_heading = "Form",
        help = "Supplier category field."
    )]
    pub category: Option<String>,

    #[arg(
        short = 'p',
        long = "preferred",
        value_name = "TEXT",
        help_heading = "Form",
        help = "Supplier preferred field; only 'true' counts as preferred."
    )]
    pub preferred: Option<String>,

    #[arg(
        short = 'a',
        long = "act",
        visible_alias = "action",
        value_name = "ACTION",
        action = ArgAction::Append,
        help_heading = "Actions",
        help = "Action to run, repeatable, in order (create, update, retrieve, delete, clear, search, mark-preferred, products)."
    )]
    pub action: Vec<String>,

    #[arg(
        short = 's',
        long = "sh",
        visible_alias = "shell",
        help_heading = "Actions",
        help = "Start an interactive shell after running any --action."
    )]
    pub shell: bool,

    #[arg(
        short = 'T',
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Per-request timeout in seconds."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'x',
        long = "px",
        visible_alias = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "HTTP proxy URL (e.g. http://127.0.0.1:8080)."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'H',
        long = "hdr",
        visible_alias = "header",
        value_name = "HEADER",
        help_heading = "HTTP",
        help = "Add a header to all requests (format: 'Key: Value')."
    )]
    pub header: Option<String>,
}
