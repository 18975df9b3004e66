use super::board::Board;

pub const CELL_SEPARATOR: &str = " | ";

pub fn separator_line(size: usize) -> String {
    "-".repeat(size * 4 - 1)
}

/// Text form of the board, used both on screen and in the save file:
/// each row's marks joined by `" | "`, followed by a dashed separator line.
pub fn render_board(board: &Board) -> String {
    let separator = separator_line(board.size());
    let mut out = String::new();
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
        out.push_str(&cells.join(CELL_SEPARATOR));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}
