use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

use super::usage_error;

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change saved preferences",
            CONFIG_USAGE,
            cmd_config,
        ),
        CommandEntry::new(
            "name",
            "Show or change the name used in greetings",
            "name [new name]",
            cmd_name,
        ),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            output::print_two_column(&context.config.entries());
            output::hint(format!("Stored at {}", context.config_manager.path().display()));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            if *key == "user_name" {
                context.user_name = context.config.user_name.clone();
            }
            output::success(format!("`{}` set to `{}`.", key, value));
            Ok(())
        }
        ["set", ..] => {
            output::hint(format!("Known keys: {}", Config::KEYS.join(", ")));
            Err(usage_error(CONFIG_USAGE))
        }
        _ => Err(usage_error(CONFIG_USAGE)),
    }
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        output::info(format!("Hello, {}!", context.user_name));
        return Ok(());
    }
    context.config.set("user_name", &args.join(" "))?;
    context.persist_config()?;
    context.user_name = context.config.user_name.clone();
    output::success(format!("Hello, {}!", context.user_name));
    Ok(())
}
