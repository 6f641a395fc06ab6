use photo_sorter_application::{MoveOutcome, UndoOutcome};
use photo_sorter_domain::{target_name, Catalog, SortState, UndoDirection};

pub fn present_target_row(index: usize, name: &str) -> String {
    format!("{}\t{}", index, name)
}

pub fn present_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::with_capacity(catalog.targets.len() + catalog.photos.len() + 2);
    lines.push(format!(
        "folder {} ({} photos, {} targets)",
        catalog.folder.display(),
        catalog.photos.len(),
        catalog.targets.len()
    ));
    for (index, target) in catalog.targets.iter().enumerate() {
        lines.push(present_target_row(index, &target_name(target)));
    }
    for photo in &catalog.photos {
        lines.push(format!("-\t{}", photo.display()));
    }
    lines
}

pub fn present_catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog)
}

pub fn present_state(state: SortState) -> String {
    match state {
        SortState::Sorting { cursor, total } => format!("photo {}/{}", cursor + 1, total),
        SortState::Complete { total } => format!("all {} photos sorted", total),
    }
}

pub fn present_move(outcome: &MoveOutcome) -> String {
    format!(
        "moved {} -> {} ({})",
        target_name(&outcome.record.source),
        outcome.record.destination.display(),
        present_state(outcome.state)
    )
}

pub fn present_undo(outcome: &UndoOutcome) -> String {
    let verb = match outcome.direction {
        UndoDirection::Undo => "undid",
        UndoDirection::Redo => "redid",
    };
    format!(
        "{} {} -> {} ({})",
        verb,
        target_name(&outcome.record.source),
        outcome.record.destination.display(),
        present_state(outcome.state)
    )
}
