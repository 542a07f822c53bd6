use glassdesk_core::{Payload, WindowId, WindowRecord};

pub struct WindowTableFormatter {
    id_width: usize,
    title_width: usize,
    kind_width: usize,
    status_width: usize,
    position_width: usize,
    size_width: usize,
    z_width: usize,
}

impl WindowTableFormatter {
    pub fn new(windows: &[WindowRecord<Payload>]) -> Self {
        let id_width = windows
            .iter()
            .map(|w| w.id.as_str().chars().count())
            .max()
            .unwrap_or(2)
            .clamp(4, 36); // Room for the "  Id" marker column up to a full uuid
        let title_width = windows
            .iter()
            .map(|w| w.title.chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 30);

        Self {
            id_width,
            title_width,
            kind_width: 6,
            status_width: 9,
            position_width: 15,
            size_width: 11,
            z_width: 3,
        }
    }

    pub fn print_table(&self, windows: &[WindowRecord<Payload>], active: Option<&WindowId>) {
        print!("{}", self.render(windows, active));
    }

    pub fn render(&self, windows: &[WindowRecord<Payload>], active: Option<&WindowId>) -> String {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        for window in windows {
            lines.push(self.row(window, active == Some(&window.id)));
        }
        lines.push(self.bottom_border());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn row(&self, window: &WindowRecord<Payload>, is_active: bool) -> String {
        let marker = if is_active { "*" } else { " " };
        let position = format!("{},{}", window.position.x, window.position.y);
        let size = format!("{}x{}", window.size.width, window.size.height);

        format!(
            "│{}{:<width_id$} │ {:<width_title$} │ {:<width_kind$} │ {:<width_status$} │ {:<width_position$} │ {:<width_size$} │ {:>width_z$} │",
            marker,
            truncate(window.id.as_str(), self.id_width),
            truncate(&window.title, self.title_width),
            window.kind.as_str(),
            window.status.to_string(),
            truncate(&position, self.position_width),
            truncate(&size, self.size_width),
            window.z_order,
            width_id = self.id_width,
            width_title = self.title_width,
            width_kind = self.kind_width,
            width_status = self.status_width,
            width_position = self.position_width,
            width_size = self.size_width,
            width_z = self.z_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_id$} │ {:<width_title$} │ {:<width_kind$} │ {:<width_status$} │ {:<width_position$} │ {:<width_size$} │ {:>width_z$} │",
            "Id",
            "Title",
            "Kind",
            "Status",
            "Position",
            "Size",
            "Z",
            width_id = self.id_width,
            width_title = self.title_width,
            width_kind = self.kind_width,
            width_status = self.status_width,
            width_position = self.position_width,
            width_size = self.size_width,
            width_z = self.z_width,
        )
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let columns = [
            self.id_width,
            self.title_width,
            self.kind_width,
            self.status_width,
            self.position_width,
            self.size_width,
            self.z_width,
        ];
        let segments: Vec<String> = columns.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so Turkish titles are cut on
/// character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
