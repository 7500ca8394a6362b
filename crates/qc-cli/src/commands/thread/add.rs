use qc_core::command::{Command, NewComment};
use qc_core::enums::Author;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::respond::{Target, command_response};
use crate::commands::shared::text::{optional_text, require_text};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub rule_id: &'a str,
    pub title: &'a str,
    pub comment: Option<&'a str>,
    pub author: &'a str,
}

pub fn run(params: Params<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let command = build_command(&params)?;
    let change = ctx.store.execute(&command)?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::Rule(params.rule_id)),
        flags.format,
    )
}

fn build_command(params: &Params<'_>) -> anyhow::Result<Command> {
    let first_comment = match optional_text(params.comment) {
        Some(text) => Some(NewComment {
            text: text.to_string(),
            author: parse_enum::<Author>(params.author, "author")?,
        }),
        None => None,
    };
    Ok(Command::AddThread {
        rule_id: params.rule_id.to_string(),
        title: require_text(params.title, "title")?.to_string(),
        first_comment,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qc_core::command::{Command, NewComment};
    use qc_core::enums::Author;

    use super::{Params, build_command};

    fn params<'a>(title: &'a str, comment: Option<&'a str>) -> Params<'a> {
        Params {
            rule_id: "rule-3",
            title,
            comment,
            author: "sm",
        }
    }

    #[test]
    fn builds_thread_with_opening_comment() {
        let command = build_command(&params(" Dock plates worn ", Some("Both plates cracked")))
            .expect("should build");
        assert_eq!(
            command,
            Command::AddThread {
                rule_id: "rule-3".into(),
                title: "Dock plates worn".into(),
                first_comment: Some(NewComment {
                    text: "Both plates cracked".into(),
                    author: Author::Sm,
                }),
            }
        );
    }

    #[test]
    fn blank_comment_is_dropped() {
        let command = build_command(&params("Dock plates worn", Some("  "))).expect("should build");
        assert!(matches!(
            command,
            Command::AddThread {
                first_comment: None,
                ..
            }
        ));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(build_command(&params("   ", None)).is_err());
    }
}
