use colored::Colorize;

use crate::form::{FlashLevel, FlashMessage, SupplierForm};

pub fn kv_line(label: &str, value: &str) -> String {
    format!(":: {:<10}: {}", label, value)
}

pub fn flash_line(flash: &FlashMessage) -> String {
    match flash.level {
        FlashLevel::Info => format!(
            "{}{}{} {}",
            "[".bold().white(),
            "OK".bold().green(),
            "]".bold().white(),
            flash.text.bold().white()
        ),
        FlashLevel::Error => format!(
            "{}{}{} {}",
            "[".bold().white(),
            "ERR".bold().red(),
            "]".bold().white(),
            flash.text.bold().white()
        ),
    }
}

pub fn form_line(form: &SupplierForm) -> String {
    format!(
        "{} id={} name={} category={} preferred={}",
        "form ::".bold().white(),
        form.id.bold().cyan(),
        form.name.cyan(),
        form.category.cyan(),
        form.preferred.cyan()
    )
}
