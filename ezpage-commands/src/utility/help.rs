use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{COMMANDS, CommandMeta};
use ezpage_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

/// Reply with the command catalog, one line per command.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let out = help_text(&sorted_commands());
    ctx.http.create_message(msg.channel_id).content(&out).await?;

    Ok(())
}

fn help_text(commands: &[&CommandMeta]) -> String {
    let lines: Vec<String> = commands
        .iter()
        .map(|cmd| format!("`{}` - {}", cmd.usage, cmd.desc))
        .collect();

    format!("**Available Commands**\n{}", lines.join("\n"))
}

pub(crate) fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let text = help_text(&sorted_commands());

        for command in COMMANDS {
            assert!(text.contains(command.usage), "missing {}", command.name);
        }
    }
}
