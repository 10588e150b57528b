use std::path::PathBuf;

use crate::cli::core::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::tracker::projection::{FilterKey, SortKey};

const SORT_VALUES: &[&str] = &["date", "amount"];
const FILTER_VALUES: &[&str] = &["all", "debit", "credit"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("sort", "Choose the list ordering", "sort <date|amount>", cmd_sort)
            .with_arguments(SORT_VALUES),
        CommandEntry::new(
            "filter",
            "Show all expenses or one type only",
            "filter <all|debit|credit>",
            cmd_filter,
        )
        .with_arguments(FILTER_VALUES),
        CommandEntry::new("list", "Show the sorted, filtered expenses", "list", cmd_list),
        CommandEntry::new(
            "export",
            "Write the current list to expenses.txt",
            "export [directory]",
            cmd_export,
        ),
    ]
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(usage_error(context, "sort"));
    };
    let sort = SortKey::from_option(value);
    if sort == SortKey::Insertion {
        io::print_info(format!(
            "`{}` is not a sort option; showing expenses in the order they were added.",
            value
        ));
    }
    context.app.set_sort(sort);
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(usage_error(context, "filter"));
    };
    let filter: FilterKey = value
        .parse()
        .map_err(|err: crate::tracker::projection::ParseFilterError| {
            CommandError::InvalidArguments(err.to_string())
        })?;
    context.app.set_filter(filter);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.app.projection();
    render::print_view(&view, context.app.sort(), context.app.filter());
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dir = match args {
        [] => context.export_dir(),
        [dir] => PathBuf::from(dir),
        _ => return Err(usage_error(context, "export")),
    };
    let shown = context.app.projection().len();
    let path = context.app.export().write_to(&dir)?;
    io::print_success(format!(
        "Exported {} expense(s) to {}",
        shown,
        path.display()
    ));
    Ok(())
}
