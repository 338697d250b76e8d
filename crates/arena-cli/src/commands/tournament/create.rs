use anyhow::bail;
use arena_session::{NewTournament, Tournament};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::tournament::TournamentCreateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateResponse {
    created: bool,
    tournament: Tournament,
}

fn build(args: &TournamentCreateArgs) -> anyhow::Result<NewTournament> {
    let name = args.name.trim();
    if name.is_empty() {
        bail!("tournament name must not be empty");
    }
    if args.max_teams == Some(0) {
        bail!("--max-teams must be at least 1");
    }
    Ok(NewTournament {
        name: name.to_string(),
        game: args.game.clone(),
        starts_at: args.starts_at,
        max_teams: args.max_teams,
    })
}

pub async fn handle(
    args: &TournamentCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tournament = build(args)?;
    let created = ctx.session.create_tournament(&args.org_id, &tournament).await?;
    output(
        &CreateResponse {
            created: true,
            tournament: created,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, max_teams: Option<u32>) -> TournamentCreateArgs {
        TournamentCreateArgs {
            org_id: "A".into(),
            name: name.into(),
            game: None,
            starts_at: None,
            max_teams,
        }
    }

    #[test]
    fn trims_name() {
        let body = build(&args("  Spring Cup ", Some(16))).expect("valid");
        assert_eq!(body.name, "Spring Cup");
        assert_eq!(body.max_teams, Some(16));
    }

    #[test]
    fn rejects_blank_name_and_zero_teams() {
        assert!(build(&args("   ", None)).is_err());
        assert!(build(&args("Cup", Some(0))).is_err());
    }
}
