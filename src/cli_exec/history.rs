use appdeck::catalog::{AppDraft, HistoryStore};

use super::*;

pub(super) fn handle_history_command(client: &RemoteClient, id: i64, json: bool) -> Result<()> {
    let store = HistoryStore::load(client, Some(id))?;
    if json {
        let records: Vec<_> = store.iter().collect();
        return print_json(&records, "history");
    }
    for r in store.iter() {
        let note = if r.note.is_empty() { "-" } else { r.note.as_str() };
        println!("{:>6}  {}  {}", r.id, r.created_at, note);
    }
    println!("{} versions", store.len());
    Ok(())
}

pub(super) fn handle_restore_command(client: &RemoteClient, id: i64, record_id: i64) -> Result<()> {
    let store = HistoryStore::load(client, Some(id))?;
    let record = store
        .get(record_id)
        .with_context(|| format!("history record {} not found for app {}", record_id, id))?;

    let app = client.get_app(id)?;
    let mut draft = AppDraft::from_app(&app);
    draft.apply_history(record);
    let status = draft.save(client)?;
    println!(
        "{}",
        status_line(
            &status,
            &format!("restored app {} to version {}", id, record_id)
        )
    );
    Ok(())
}
