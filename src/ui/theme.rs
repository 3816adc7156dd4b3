use ratatui::style::{Color, Modifier, Style};

pub const COLOR_ACCENT: Color = Color::Rgb(78, 190, 210);
pub const COLOR_MUTED: Color = Color::Rgb(138, 148, 158);
pub const COLOR_BORDER: Color = Color::Rgb(78, 86, 96);
pub const COLOR_GOOD: Color = Color::Rgb(95, 200, 120);
pub const COLOR_WARN: Color = Color::Rgb(230, 180, 70);
pub const COLOR_HOT: Color = Color::Rgb(230, 90, 70);

/// A process row's CPU cell flags above this percentage.
pub const HIGH_CPU_PCT: f64 = 50.0;
/// A process row's memory cell flags above this percentage.
pub const HIGH_MEMORY_PCT: f64 = 5.0;
/// The header's aggregate CPU/memory counters flag above this.
pub const HIGH_STATS_PCT: f64 = 70.0;

pub fn is_high_cpu(cpu: f64) -> bool {
    cpu > HIGH_CPU_PCT
}

pub fn is_high_memory(memory: f64) -> bool {
    memory > HIGH_MEMORY_PCT
}

pub fn is_high_stat(pct: f64) -> bool {
    pct > HIGH_STATS_PCT
}

/// Style for a value cell; recomputed from the value on every frame, so
/// a flag never outlives the reading that caused it.
pub fn usage_style(high: bool) -> Style {
    if high {
        Style::default().fg(COLOR_HOT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_flag_is_strictly_above_threshold() {
        assert!(!is_high_cpu(50.0));
        assert!(is_high_cpu(50.1));
        assert!(!is_high_cpu(0.0));
        assert!(is_high_cpu(120.0));
    }

    #[test]
    fn memory_flag_is_strictly_above_threshold() {
        assert!(!is_high_memory(5.0));
        assert!(is_high_memory(5.1));
    }

    #[test]
    fn stats_flag_is_strictly_above_threshold() {
        assert!(is_high_stat(75.0));
        assert!(!is_high_stat(70.0));
        assert!(!is_high_stat(40.0));
    }

    #[test]
    fn usage_style_marks_only_high_values() {
        assert_eq!(usage_style(true).fg, Some(COLOR_HOT));
        assert_eq!(usage_style(false).fg, Some(Color::White));
    }
}
