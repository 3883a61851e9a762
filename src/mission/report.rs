//! # Mission Report
//!
//! Riepilogo finale stampato su stdout, pronto da incollare nel post:
//! la riga della copertina va nel front matter, il blocco HTML nel corpo.
//!
//! ```text
//! ==================================================
//! ✅  MISSION COMPLETE
//!    📸 Photos: 12
//!    🎥 Videos: 3
//! ==================================================
//! 1. PASTE INTO THE FRONT MATTER:
//! miniatura: /assets/img/trip/IMG_portada.jpg
//! --------------------
//! 2. PASTE INTO THE POST BODY:
//! <div class="galeria-dinamica">...</div>
//! --------------------
//! ```

use std::fmt;

/// Outcome of a run, built once after every asset was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    pub images: usize,
    pub videos: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Web path of the cover, empty when no photo was converted
    pub cover: String,
    pub markup: String,
    pub front_matter_key: String,
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        let thin = "-".repeat(20);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "✅  MISSION COMPLETE")?;
        writeln!(f, "   📸 Photos: {}", self.images)?;
        writeln!(f, "   🎥 Videos: {}", self.videos)?;
        if self.failed > 0 {
            writeln!(f, "   ❌ Failed: {}", self.failed)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "1. PASTE INTO THE FRONT MATTER:")?;
        writeln!(f, "{}: {}", self.front_matter_key, self.cover)?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "2. PASTE INTO THE POST BODY:")?;
        writeln!(f, "{}", self.markup)?;
        write!(f, "{}", thin)
    }
}
