use wumpus_core::{KnowledgeGrid, Pose};

/// Textual dump of the agent's beliefs, one line per row, `C` marking the agent.
///
/// Glyphs: `#` wall, `?` unknown, ` ` safe, `.` visited, `G` gold,
/// `p`/`w`/`x` pit/wumpus/dual candidate, `P`/`W` confirmed pit/wumpus.
pub fn render_grid(grid: &KnowledgeGrid, pose: Pose) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for (p, status) in grid.iter() {
        out.push(if p == pose.at { 'C' } else { status.glyph() });
        if p.x as usize == size - 1 {
            out.push('\n');
        }
    }
    out
}
