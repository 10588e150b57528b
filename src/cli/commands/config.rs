use crate::cli::core::{usage_error, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )
    .with_arguments(&["show", "set"])]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output_section("Preferences");
            for (key, value) in context.config.entries() {
                io::print_info(format!("  {:<15}: {}", key, value));
            }
            io::print_info(format!(
                "  stored at      : {}",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["set", key, value @ ..] => {
            let mut updated = context.config.clone();
            updated.set(key, &value.join(" "))?;
            context.config_manager.save(&updated)?;
            context.config = updated;
            context.apply_preferences();
            io::print_success(format!("Updated `{}`.", key));
            Ok(())
        }
        _ => Err(usage_error(context, "config")),
    }
}
