use appdeck::catalog::{AppDraft, Catalog, CardListFilter, ExecuteFlow, format_params};

use crate::cli_commands::{AddArgs, EditArgs};

use super::*;

pub(super) fn handle_list_command(
    client: &RemoteClient,
    tag: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let apps = client.list_apps()?;
    let filter = CardListFilter::new(search.as_deref().unwrap_or(""), tag.as_deref());
    let visible: Vec<_> = apps.iter().filter(|a| filter.is_visible(a)).collect();

    if json {
        return print_json(&visible, "apps");
    }
    for app in &visible {
        let id = app.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        if app.tags.is_empty() {
            println!("{:>5}  {}", id, app.name);
        } else {
            println!("{:>5}  {}  [{}]", id, app.name, app.tag_names().join(", "));
        }
    }
    if filter.is_active() {
        println!("{} of {} apps", visible.len(), apps.len());
    } else {
        println!("{} apps", apps.len());
    }
    Ok(())
}

pub(super) fn handle_show_command(client: &RemoteClient, id: i64, json: bool) -> Result<()> {
    let app = client.get_app(id)?;
    if json {
        return print_json(&app, "app");
    }
    println!("id: {}", id);
    println!("name: {}", app.name);
    if !app.tags.is_empty() {
        println!("tags: {}", app.tag_names().join(", "));
    }
    if !app.description.is_empty() {
        println!("description: {}", app.description);
    }
    if let Some(ts) = &app.created_at {
        println!("created_at: {}", ts);
    }
    if let Some(ts) = &app.updated_at {
        println!("updated_at: {}", ts);
    }
    println!("params:");
    for line in format_params(&app.params).text().lines() {
        println!("  {}", line);
    }
    println!("code:");
    for line in app.code.lines() {
        println!("  {}", line);
    }
    Ok(())
}

pub(super) fn handle_tags_command(client: &RemoteClient, json: bool) -> Result<()> {
    let mut catalog = Catalog::new();
    catalog.reload(client)?;
    let entries = catalog.facet().entries();

    if json {
        let out: Vec<serde_json::Value> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "tag": e.tag,
                    "most_recent": e.most_recent.and_then(|t| t.format(&Rfc3339).ok()),
                })
            })
            .collect();
        return print_json(&out, "tags");
    }
    for e in entries {
        println!("{:<25}  {}", fmt_time(e.most_recent), e.tag);
    }
    Ok(())
}

/// Feeds comma-separated text through the chip editor, as typing it would.
fn fill_tags(draft: &mut AppDraft, csv: &str) {
    draft.tags.load_csv("");
    for c in csv.chars() {
        draft.tags.input_char(c);
    }
    draft.tags.commit_pending();
}

pub(super) fn handle_add_command(client: &RemoteClient, args: AddArgs) -> Result<()> {
    let mut draft = AppDraft::new();
    draft.name = args.name;
    if let Some(tags) = args.tags {
        fill_tags(&mut draft, &tags);
    }
    draft.description = args.description.unwrap_or_default();
    draft.params = args.params.unwrap_or_default();
    draft.code = args.code;
    draft.note = args.note;

    let status = draft.save(client)?;
    println!("{}", status_line(&status, "app created"));
    Ok(())
}

pub(super) fn handle_edit_command(client: &RemoteClient, args: EditArgs) -> Result<()> {
    let app = client.get_app(args.id)?;
    let mut draft = AppDraft::from_app(&app);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(tags) = args.tags {
        fill_tags(&mut draft, &tags);
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(params) = args.params {
        draft.params = params;
    }
    if let Some(code) = args.code {
        draft.code = code;
    }
    draft.note = args.note;

    let status = draft.save(client)?;
    println!("{}", status_line(&status, "app updated"));
    Ok(())
}

pub(super) fn handle_delete_command(client: &RemoteClient, id: i64) -> Result<()> {
    let status = client.delete_app(id)?;
    println!("{}", status_line(&status, &format!("deleted app {}", id)));
    Ok(())
}

pub(super) fn handle_reorder_command(client: &RemoteClient, ids: &[i64]) -> Result<()> {
    let mut catalog = Catalog::new();
    catalog.reload(client)?;
    catalog.arrange(ids)?;
    catalog.persist_order(client)?;
    let order = catalog
        .card_order()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("order saved: {}", order);
    Ok(())
}

pub(super) fn handle_run_command(client: &RemoteClient, id: i64, json: bool) -> Result<()> {
    if json {
        let resp = client.execute_app(id)?;
        return print_json(&resp, "execute response");
    }

    let mut flow = ExecuteFlow::new(id);
    let outcome = flow.run(client)?.clone();
    for line in flow.console().lines() {
        eprintln!("{}", line);
    }
    println!("{}", outcome.result_text());
    if !outcome.is_success() {
        anyhow::bail!("app {} did not run successfully", id);
    }
    Ok(())
}
