//! History command implementation

use crate::{
    cli::HistoryCmd,
    core::{FileStore, HistoryStore, KeyValueStore},
    Result,
};

use super::render;

/// Run one history subcommand against `history`, returning what to print.
pub fn run_history_cmd<S: KeyValueStore>(
    history: &mut HistoryStore<S>,
    cmd: HistoryCmd,
) -> Result<String> {
    match cmd {
        HistoryCmd::List { json } => {
            if json {
                Ok(serde_json::to_string_pretty(history.list())?)
            } else {
                Ok(render::history_table(history.list()))
            }
        }
        HistoryCmd::Remove { league_id } => {
            if history.remove(league_id)? {
                Ok(format!("✓ Removed league {} from history\n", league_id))
            } else {
                Ok(format!("League {} is not in the history\n", league_id))
            }
        }
        HistoryCmd::Clear => {
            history.clear()?;
            Ok("✓ League history cleared\n".to_string())
        }
    }
}

/// Handle the history command
pub fn handle_history(cmd: HistoryCmd) -> Result<()> {
    let mut history = HistoryStore::open(FileStore::default_location());
    print!("{}", run_history_cmd(&mut history, cmd)?); // tarpaulin::skip
    Ok(())
}
