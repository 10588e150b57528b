use crate::cli::core::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::ExpenseKind;

const KIND_VALUES: &[&str] = &["debit", "credit"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("amount", "Set the amount field", "amount <value>", cmd_amount),
        CommandEntry::new(
            "type",
            "Choose debit or credit",
            "type <debit|credit>",
            cmd_type,
        )
        .with_arguments(KIND_VALUES),
        CommandEntry::new(
            "description",
            "Set the description field (empty clears it)",
            "description [text...]",
            cmd_description,
        ),
        CommandEntry::new("form", "Show the entry form fields", "form", cmd_form),
        CommandEntry::new(
            "add",
            "Submit the form, optionally filling it first",
            "add [<amount> [<debit|credit> [description...]]]",
            cmd_add,
        ),
    ]
}

fn cmd_amount(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(usage_error(context, "amount"));
    };
    context.app.set_amount(*value);
    Ok(())
}

fn cmd_type(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(usage_error(context, "type"));
    };
    let kind = parse_kind(value)?;
    context.app.set_kind(kind);
    Ok(())
}

fn cmd_description(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.app.set_description(args.join(" "));
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let form = context.app.form();
    output_section("Add Expense");
    io::print_info(format!("  Amount      : {}", form.amount()));
    io::print_info(format!("  Type        : {}", form.kind()));
    io::print_info(format!("  Description : {}", form.description()));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some((amount, rest)) = args.split_first() {
        let kind = rest.first().map(|value| parse_kind(value)).transpose()?;
        context.app.set_amount(*amount);
        if let Some(kind) = kind {
            context.app.set_kind(kind);
        }
        if rest.len() > 1 {
            context.app.set_description(rest[1..].join(" "));
        }
    }

    context.app.submit().ok();
    Ok(())
}

fn parse_kind(value: &str) -> Result<ExpenseKind, CommandError> {
    value
        .parse()
        .map_err(|err: crate::domain::ParseKindError| CommandError::InvalidArguments(err.to_string()))
}
