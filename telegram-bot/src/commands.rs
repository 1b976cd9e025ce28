//! Slash commands understood by the bot.

use teloxide::utils::command::BotCommands;

/// Bot commands; registered with Telegram at startup so clients show them in the menu.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the bot and show the menu.")]
    Start,
    #[command(description = "show usage help.")]
    Help,
    #[command(description = "shorten a link, e.g. /shorten https://example.com")]
    Shorten(String),
    #[command(description = "show how many links you have shortened.")]
    Stats,
    #[command(description = "about this bot.")]
    About,
}

/// Parses `text` as a [`Command`].
///
/// When the bot username is not known yet, a `@name` suffix on the command is dropped so
/// `/start@some_bot` still parses.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let text = text.trim();
    match bot_username {
        Some(username) => Command::parse(text, username).ok(),
        None => {
            let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
            let head = head.split('@').next().unwrap_or(head);
            let stripped = if rest.is_empty() {
                head.to_string()
            } else {
                format!("{} {}", head, rest)
            };
            Command::parse(&stripped, "").ok()
        }
    }
}

/// Command name without the slash or `@bot` suffix, e.g. `shorten` for `/shorten@bot x`.
pub fn command_name(text: &str) -> Option<&str> {
    let head = text.trim_start().split_whitespace().next()?;
    let name = head.strip_prefix('/')?;
    Some(name.split('@').next().unwrap_or(name))
}

/// Bot named after `@` in the command token, e.g. `other_bot` for `/help@other_bot`.
pub fn addressee(text: &str) -> Option<&str> {
    let head = text.trim_start().split_whitespace().next()?;
    head.strip_prefix('/')?
        .split_once('@')
        .map(|(_, bot)| bot)
        .filter(|bot| !bot.is_empty())
}

/// True when the command names a bot (`/cmd@name`) and that bot is not `bot_username`.
/// Unknown own username means nothing can be ruled out.
pub fn is_for_other_bot(text: &str, bot_username: Option<&str>) -> bool {
    match (addressee(text), bot_username) {
        (Some(target), Some(me)) => !target.eq_ignore_ascii_case(me),
        _ => false,
    }
}

/// Command list for /help.
pub fn command_list() -> String {
    Command::descriptions().to_string()
}
