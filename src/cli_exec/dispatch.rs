use super::apps::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command,
    handle_reorder_command, handle_run_command, handle_show_command, handle_tags_command,
};
use super::history::{handle_history_command, handle_restore_command};
use super::system::{handle_config_command, handle_restart_command, handle_settings_command};
use super::*;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    let client = || -> Result<RemoteClient> { session.client() };
    match command {
        Commands::List(args) => handle_list_command(&client()?, args.tag, args.search, args.json)?,
        Commands::Show(args) => handle_show_command(&client()?, args.id, args.json)?,
        Commands::Tags(args) => handle_tags_command(&client()?, args.json)?,
        Commands::Add(args) => handle_add_command(&client()?, args)?,
        Commands::Edit(args) => handle_edit_command(&client()?, args)?,
        Commands::Delete { id } => handle_delete_command(&client()?, id)?,
        Commands::Reorder { ids } => handle_reorder_command(&client()?, &ids)?,
        Commands::Run(args) => handle_run_command(&client()?, args.id, args.json)?,
        Commands::History(args) => handle_history_command(&client()?, args.id, args.json)?,
        Commands::Restore { id, record_id } => {
            handle_restore_command(&client()?, id, record_id)?
        }
        Commands::Settings { command } => handle_settings_command(&client()?, command)?,
        Commands::Restart => handle_restart_command(&client()?)?,
        Commands::Config { command } => handle_config_command(session, command)?,
    }
    Ok(())
}
