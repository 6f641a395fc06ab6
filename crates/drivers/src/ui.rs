use std::time::Duration;

use font8x8::UnicodeFonts;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use photo_sorter_adapters::{present_move, present_state, present_undo};
use photo_sorter_application::{
    ApplicationService, MovePhotoCommand, PreviewPhotoCommand, SortEngine, UndoRedoCommand,
};
use photo_sorter_domain::{DecodedPhoto, SortState};
use tracing::{info, warn};

use crate::config::AppConfig;

const CANVAS_MARGIN: usize = 16;
const HEADER_TOP: usize = 12;
const HEADER_HEIGHT: usize = 40;
const WORKAREA_TOP: usize = 64;
const WORKAREA_BOTTOM_MARGIN: usize = 40;
const SPLIT_GUTTER: usize = 16;
const TARGET_PANEL_WIDTH: usize = 220;
const TARGET_LIST_TOP: usize = WORKAREA_TOP + 40;
const TARGET_ROW_HEIGHT: usize = 22;
const PANEL_INSET: usize = 12;
const GLYPH_WIDTH: usize = 8;
const NUMBER_KEYS: [Key; 9] = [
    Key::Key1,
    Key::Key2,
    Key::Key3,
    Key::Key4,
    Key::Key5,
    Key::Key6,
    Key::Key7,
    Key::Key8,
    Key::Key9,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowExit {
    Completed,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserAction {
    Select(usize),
    Again,
    UndoRedo,
}

/// Runs the sorting window until every photo is sorted or the user quits.
///
/// The decoded preview is dropped before each action that may rename its file
/// and only reloaded once the engine has settled on the next photo.
pub fn launch_window(
    service: &ApplicationService,
    engine: &mut SortEngine,
    config: &AppConfig,
) -> Result<WindowExit, String> {
    let width = config.window_width;
    let height = config.window_height;
    let targets = engine.target_names();

    let mut window = Window::new(
        &build_window_title(engine.state(), None, &targets),
        width,
        height,
        WindowOptions::default(),
    )
    .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let mut buffer = vec![0x222222_u32; width * height];
    let bounds = preview_bounds(width, height);
    let mut preview = load_preview(service, engine, bounds);
    let mut selection: Option<usize> = None;
    let mut status = present_state(engine.state());
    let mut was_mouse_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        let hovered = window
            .get_mouse_pos(MouseMode::Clamp)
            .and_then(|(mouse_x, mouse_y)| target_at_position(mouse_x, mouse_y, targets.len(), height));
        let clicked = if mouse_down && !was_mouse_down {
            hovered
        } else {
            None
        };
        was_mouse_down = mouse_down;

        let action = read_key_action(&window, targets.len()).or(clicked.map(UserAction::Select));
        if let Some(action) = action {
            drop(preview.take());
            status = apply_action(service, engine, action, &mut selection);
            if engine.is_complete() {
                info!(state = ?engine.state(), "sorting complete, closing window");
                return Ok(WindowExit::Completed);
            }
            preview = load_preview(service, engine, bounds);
        }

        draw_background(&mut buffer, width, height);
        draw_header(&mut buffer, width, engine.state());
        draw_target_panel(&mut buffer, width, height, &targets, selection, hovered);
        draw_preview_panel(&mut buffer, width, height, preview.as_ref());
        draw_status(&mut buffer, width, height, &status);

        window.set_title(&build_window_title(engine.state(), selection, &targets));
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to update UI window: {error}"))?;
    }

    Ok(WindowExit::Closed)
}

fn read_key_action(window: &Window, target_count: usize) -> Option<UserAction> {
    if let Some(index) = NUMBER_KEYS
        .iter()
        .take(target_count)
        .position(|key| window.is_key_pressed(*key, KeyRepeat::No))
    {
        return Some(UserAction::Select(index));
    }
    if window.is_key_pressed(Key::A, KeyRepeat::No)
        || window.is_key_pressed(Key::Enter, KeyRepeat::No)
    {
        return Some(UserAction::Again);
    }
    if window.is_key_pressed(Key::U, KeyRepeat::No) || window.is_key_pressed(Key::Z, KeyRepeat::No)
    {
        return Some(UserAction::UndoRedo);
    }
    None
}

fn apply_action(
    service: &ApplicationService,
    engine: &mut SortEngine,
    action: UserAction,
    selection: &mut Option<usize>,
) -> String {
    let target_index = match action {
        UserAction::Select(index) => {
            *selection = Some(index);
            index
        }
        UserAction::Again => match *selection {
            Some(index) => index,
            None => return "pick a target first".to_string(),
        },
        UserAction::UndoRedo => {
            return match service.undo_redo(engine, UndoRedoCommand) {
                Ok(Some(outcome)) => present_undo(&outcome),
                Ok(None) => "nothing to undo yet".to_string(),
                Err(error) => {
                    warn!(%error, "undo/redo failed");
                    format!("undo/redo failed: {error}")
                }
            };
        }
    };

    match service.move_photo(engine, MovePhotoCommand { target_index }) {
        Ok(outcome) => present_move(&outcome),
        Err(error) => {
            warn!(%error, target_index, "move failed");
            format!("move failed: {error}")
        }
    }
}

fn load_preview(
    service: &ApplicationService,
    engine: &SortEngine,
    (max_width, max_height): (u32, u32),
) -> Option<DecodedPhoto> {
    match service.preview_current(
        engine,
        PreviewPhotoCommand {
            max_width,
            max_height,
        },
    ) {
        Ok(preview) => preview,
        Err(error) => {
            warn!(%error, photo = ?engine.current_photo(), "preview unavailable");
            None
        }
    }
}

fn preview_bounds(width: usize, height: usize) -> (u32, u32) {
    let stage_width = preview_panel_right(width)
        .saturating_sub(preview_panel_left())
        .saturating_sub(PANEL_INSET * 2 + 2);
    let stage_height = preview_panel_bottom(height)
        .saturating_sub(preview_panel_top())
        .saturating_sub(PANEL_INSET * 2 + 2);
    (stage_width.max(1) as u32, stage_height.max(1) as u32)
}

fn draw_background(buffer: &mut [u32], width: usize, height: usize) {
    for y in 0..height {
        let t = y as f32 / height.max(1) as f32;
        let color = lerp_color(0xF7EFE0, 0xF2E1CC, t);
        for x in 0..width {
            buffer[y * width + x] = color;
        }
    }
}

fn draw_header(buffer: &mut [u32], width: usize, state: SortState) {
    let left = CANVAS_MARGIN;
    let band_width = width.saturating_sub(CANVAS_MARGIN * 2);
    fill_rect(buffer, width, left, HEADER_TOP, band_width, HEADER_HEIGHT, 0xFFFDF8);
    draw_rect(buffer, width, left, HEADER_TOP, band_width, HEADER_HEIGHT, 0xCCBBA4);
    fill_rect(buffer, width, left + 8, HEADER_TOP + 8, 136, HEADER_HEIGHT - 16, 0xF05C4B);
    draw_text(buffer, width, left + 16, HEADER_TOP + 16, "PHOTO SORTER", 0xFFFFFF);
    draw_text(
        buffer,
        width,
        left + 160,
        HEADER_TOP + 16,
        &present_state(state),
        0x1B1F26,
    );
}

fn draw_target_panel(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    targets: &[String],
    selection: Option<usize>,
    hovered: Option<usize>,
) {
    let left = target_panel_left();
    let top = WORKAREA_TOP;
    let panel_w = TARGET_PANEL_WIDTH;
    let panel_h = target_panel_bottom(height).saturating_sub(top);
    fill_rect(buffer, width, left, top, panel_w, panel_h, 0xFBFAF7);
    draw_rect(buffer, width, left, top, panel_w, panel_h, 0xCCBBA4);
    draw_text(buffer, width, left + PANEL_INSET, top + 12, "SORT INTO", 0x6A5B47);

    if targets.is_empty() {
        draw_text(
            buffer,
            width,
            left + PANEL_INSET,
            TARGET_LIST_TOP + 6,
            "NO SUBFOLDERS",
            0x9A3B2E,
        );
        return;
    }

    let max_chars = panel_w.saturating_sub(PANEL_INSET * 2) / GLYPH_WIDTH;
    for (index, name) in targets.iter().enumerate() {
        let row_top = TARGET_LIST_TOP + index * TARGET_ROW_HEIGHT;
        if row_top + TARGET_ROW_HEIGHT > target_panel_bottom(height) {
            break;
        }
        let row_left = left + 4;
        let row_w = panel_w.saturating_sub(8);
        if selection == Some(index) {
            fill_rect(buffer, width, row_left, row_top, row_w, TARGET_ROW_HEIGHT - 2, 0x4E78D5);
        } else if hovered == Some(index) {
            fill_rect(buffer, width, row_left, row_top, row_w, TARGET_ROW_HEIGHT - 2, 0xF0E3D0);
        }
        let color = if selection == Some(index) {
            0xFFFFFF
        } else {
            0x1B1F26
        };
        draw_text(
            buffer,
            width,
            row_left + 8,
            row_top + 6,
            &truncate_label(&target_label(index, name), max_chars),
            color,
        );
    }
}

fn draw_preview_panel(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    preview: Option<&DecodedPhoto>,
) {
    let panel_left = preview_panel_left();
    let panel_top = preview_panel_top();
    let panel_w = preview_panel_right(width).saturating_sub(panel_left);
    let panel_h = preview_panel_bottom(height).saturating_sub(panel_top);
    fill_rect(buffer, width, panel_left, panel_top, panel_w, panel_h, 0xFBFAF7);
    draw_rect(buffer, width, panel_left, panel_top, panel_w, panel_h, 0xC8B89F);

    let stage_left = panel_left + PANEL_INSET;
    let stage_top = panel_top + PANEL_INSET;
    let stage_width = panel_w.saturating_sub(PANEL_INSET * 2);
    let stage_height = panel_h.saturating_sub(PANEL_INSET * 2);
    fill_rect(buffer, width, stage_left, stage_top, stage_width, stage_height, 0x101010);
    draw_rect(buffer, width, stage_left, stage_top, stage_width, stage_height, 0x2D2D2D);

    let Some(preview) = preview else {
        draw_text(
            buffer,
            width,
            stage_left + 12,
            stage_top + 12,
            "NO PREVIEW",
            0x8A8A8A,
        );
        return;
    };

    let preview_width = preview.width as usize;
    let preview_height = preview.height as usize;
    let content_width = stage_width.saturating_sub(2);
    let content_height = stage_height.saturating_sub(2);
    let draw_width = preview_width.min(content_width);
    let draw_height = preview_height.min(content_height);
    let start_x = stage_left + 1 + content_width.saturating_sub(draw_width) / 2;
    let start_y = stage_top + 1 + content_height.saturating_sub(draw_height) / 2;

    for y in 0..draw_height {
        for x in 0..draw_width {
            let color = preview.pixels[y * preview_width + x];
            set_pixel(buffer, width, start_x + x, start_y + y, color);
        }
    }
}

fn draw_status(buffer: &mut [u32], width: usize, height: usize, status: &str) {
    let top = height.saturating_sub(WORKAREA_BOTTOM_MARGIN) + 8;
    let max_chars = width.saturating_sub(CANVAS_MARGIN * 2) / GLYPH_WIDTH;
    draw_text(buffer, width, CANVAS_MARGIN, top, &truncate_label(status, max_chars), 0x4A3E2E);
    draw_text(
        buffer,
        width,
        CANVAS_MARGIN,
        top + 12,
        "1-9/CLICK: SORT  A/ENTER: AGAIN  U/Z: UNDO/REDO  ESC: QUIT",
        0x6A5B47,
    );
}

fn fill_rect(buffer: &mut [u32], width: usize, left: usize, top: usize, w: usize, h: usize, color: u32) {
    for y in top..top.saturating_add(h) {
        for x in left..left.saturating_add(w) {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

fn draw_rect(buffer: &mut [u32], width: usize, left: usize, top: usize, w: usize, h: usize, color: u32) {
    if w == 0 || h == 0 {
        return;
    }
    let right = left + w - 1;
    let bottom = top + h - 1;
    for x in left..=right {
        set_pixel(buffer, width, x, top, color);
        set_pixel(buffer, width, x, bottom, color);
    }
    for y in top..=bottom {
        set_pixel(buffer, width, left, y, color);
        set_pixel(buffer, width, right, y, color);
    }
}

fn lerp_color(start: u32, end: u32, t: f32) -> u32 {
    let clamped = t.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let s = ((start >> shift) & 0xFF) as f32;
        let e = ((end >> shift) & 0xFF) as f32;
        ((s + (e - s) * clamped).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}

fn set_pixel(buffer: &mut [u32], width: usize, x: usize, y: usize, color: u32) {
    let height = buffer.len() / width;
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        draw_char(buffer, width, cursor_x, y, ch, color);
        cursor_x = cursor_x.saturating_add(GLYPH_WIDTH);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: usize, y: usize, ch: char, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                set_pixel(buffer, width, x + col, y + row, color);
            }
        }
    }
}

fn target_label(index: usize, name: &str) -> String {
    if index < NUMBER_KEYS.len() {
        format!("{} {}", index + 1, name)
    } else {
        format!("  {}", name)
    }
}

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars < 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut truncated: String = text.chars().take(max_chars - 3).collect();
    truncated.push_str("...");
    truncated
}

fn target_at_position(mouse_x: f32, mouse_y: f32, target_count: usize, height: usize) -> Option<usize> {
    let x = mouse_x.max(0.0) as usize;
    let y = mouse_y.max(0.0) as usize;
    let left = target_panel_left();
    if x < left || x >= left + TARGET_PANEL_WIDTH || y < TARGET_LIST_TOP {
        return None;
    }
    let row = (y - TARGET_LIST_TOP) / TARGET_ROW_HEIGHT;
    let row_bottom = TARGET_LIST_TOP + (row + 1) * TARGET_ROW_HEIGHT;
    if row >= target_count || row_bottom > target_panel_bottom(height) {
        return None;
    }
    Some(row)
}

fn target_panel_left() -> usize {
    CANVAS_MARGIN
}

fn target_panel_bottom(height: usize) -> usize {
    height.saturating_sub(WORKAREA_BOTTOM_MARGIN)
}

fn preview_panel_left() -> usize {
    target_panel_left() + TARGET_PANEL_WIDTH + SPLIT_GUTTER
}

fn preview_panel_top() -> usize {
    WORKAREA_TOP
}

fn preview_panel_right(width: usize) -> usize {
    width.saturating_sub(CANVAS_MARGIN)
}

fn preview_panel_bottom(height: usize) -> usize {
    height.saturating_sub(WORKAREA_BOTTOM_MARGIN)
}

fn build_window_title(state: SortState, selection: Option<usize>, targets: &[String]) -> String {
    let selected = selection
        .and_then(|index| targets.get(index))
        .map(|name| format!("target={name}"))
        .unwrap_or_else(|| "target=none".to_string());
    format!(
        "photo-sorter | {} | {} | targets={} | esc quit",
        present_state(state),
        selected,
        targets.len()
    )
}
